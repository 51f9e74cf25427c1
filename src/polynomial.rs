use std::collections::BTreeMap;

use crate::terms::Term;
use crate::ComputorError;

/// Coefficients of a polynomial in `X`, keyed by exponent.
///
/// No stored coefficient is ever exactly zero, so the highest key is the
/// degree and an empty map is the zero polynomial.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolynomialMap {
  terms: BTreeMap<u32, f64>,
}

impl PolynomialMap {
  pub fn new() -> Self {
    Self::default()
  }

  /// Coefficient of `X^exponent`, zero when absent.
  pub fn coefficient(&self, exponent: u32) -> f64 {
    self.terms.get(&exponent).copied().unwrap_or(0.0)
  }

  pub fn degree(&self) -> u32 {
    self
      .terms
      .last_key_value()
      .map(|(exponent, _)| *exponent)
      .unwrap_or(0)
  }

  pub fn is_empty(&self) -> bool {
    self.terms.is_empty()
  }

  pub fn len(&self) -> usize {
    self.terms.len()
  }

  /// Terms in ascending exponent order.
  pub fn iter(&self) -> impl Iterator<Item = Term> + '_ {
    self
      .terms
      .iter()
      .map(|(&exponent, &coefficient)| Term {
        exponent,
        coefficient,
      })
  }

  /// Sums and differences of valid literals can still overflow.
  pub fn ensure_finite(&self) -> Result<(), ComputorError> {
    match self.iter().find(|term| !term.coefficient.is_finite()) {
      Some(term) => Err(ComputorError::InvalidCoefficient(format!(
        "coefficient of X^{} is out of range",
        term.exponent
      ))),
      None => Ok(()),
    }
  }

  fn add_term(&mut self, term: Term) {
    *self.terms.entry(term.exponent).or_insert(0.0) += term.coefficient;
  }

  fn prune(&mut self) {
    self.terms.retain(|_, coefficient| *coefficient != 0.0);
  }
}

impl FromIterator<Term> for PolynomialMap {
  fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
    let mut map = PolynomialMap::new();
    for term in iter {
      map.add_term(term);
    }
    map.prune();
    map
  }
}

impl FromIterator<(u32, f64)> for PolynomialMap {
  fn from_iter<I: IntoIterator<Item = (u32, f64)>>(iter: I) -> Self {
    iter
      .into_iter()
      .map(|(exponent, coefficient)| Term {
        exponent,
        coefficient,
      })
      .collect()
  }
}

impl std::ops::Neg for PolynomialMap {
  type Output = Self;

  fn neg(mut self) -> Self {
    for coefficient in self.terms.values_mut() {
      *coefficient = -*coefficient;
    }
    self
  }
}

/// `lhs - rhs`, the one-sided form of `lhs = rhs`.
impl std::ops::Sub for PolynomialMap {
  type Output = Self;

  fn sub(mut self, rhs: Self) -> Self {
    for (exponent, coefficient) in rhs.terms {
      match self.terms.get_mut(&exponent) {
        Some(existing) => *existing -= coefficient,
        None => {
          self.terms.insert(exponent, -coefficient);
        }
      }
    }
    self.prune();
    self
  }
}
