use log::debug;

use crate::polynomial::PolynomialMap;
use crate::terms::{aggregate, check_characters, extract_terms_with, is_term_char};
use crate::{ComputorError, Notation};

/// Bring `lhs = rhs` into the form `P(X) = 0`.
pub fn reduce(equation: &str) -> Result<PolynomialMap, ComputorError> {
  reduce_with(equation, Notation::Free)
}

pub fn reduce_with(
  equation: &str,
  notation: Notation,
) -> Result<PolynomialMap, ComputorError> {
  check_characters(equation, |c| c == ' ' || c == '=' || is_term_char(c))?;

  match equation.matches('=').count() {
    0 => {
      return Err(ComputorError::MalformedEquation(
        "missing '=' separator".to_string(),
      ));
    }
    1 => {}
    n => {
      return Err(ComputorError::MalformedEquation(format!(
        "expected a single '=' separator, found {n}"
      )));
    }
  }

  let (lhs, rhs) = equation
    .split_once('=')
    .ok_or_else(|| ComputorError::MalformedEquation(equation.to_string()))?;
  reduce_sides(lhs, rhs, notation)
}

/// Reduce both sides separately, then subtract the right from the left.
pub fn reduce_sides(
  lhs: &str,
  rhs: &str,
  notation: Notation,
) -> Result<PolynomialMap, ComputorError> {
  let left = reduce_side(lhs, "left", notation)?;
  let right = reduce_side(rhs, "right", notation)?;
  debug!("left side {:?}, right side {:?}", left, right);

  let reduced = left - right;
  reduced.ensure_finite()?;
  debug!("reduced to {:?}", reduced);
  Ok(reduced)
}

fn reduce_side(
  side: &str,
  name: &str,
  notation: Notation,
) -> Result<PolynomialMap, ComputorError> {
  let compact: String = side.chars().filter(|c| *c != ' ').collect();
  if compact.is_empty() {
    return Err(ComputorError::MalformedEquation(format!(
      "{name}-hand side is empty"
    )));
  }
  let terms = extract_terms_with(&compact, notation)?;
  aggregate(terms)
}
