use log::trace;
use pest::iterators::{Pair, Pairs};

use crate::polynomial::PolynomialMap;
use crate::{parse, ComputorError, Notation, Rule};

/// Characters a side of an equation may contain once spaces are removed.
pub fn is_term_char(c: char) -> bool {
  c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | '*' | 'X' | '^')
}

/// Reject the first character not accepted by `allowed`.
/// Positions are 1-based columns of `input`.
pub fn check_characters(
  input: &str,
  allowed: impl Fn(char) -> bool,
) -> Result<(), ComputorError> {
  match input.chars().enumerate().find(|(_, c)| !allowed(*c)) {
    Some((index, character)) => Err(ComputorError::InvalidCharacter {
      character,
      position: index + 1,
    }),
    None => Ok(()),
  }
}

/// A term as it was written, before any number is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawTerm<'a> {
  /// The whole term, e.g. `-4.5*X^2`.
  pub text: &'a str,
  /// Sign and coefficient digits; may be `""`, `"+"` or `"-"`.
  pub coefficient: &'a str,
  /// Exponent digits, `"1"` for a bare `X` and `"0"` for a number.
  pub exponent: &'a str,
  /// Written as `a*X^p` with nothing left out.
  pub canonical: bool,
}

/// A parsed monomial `coefficient * X^exponent`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term {
  pub exponent: u32,
  pub coefficient: f64,
}

impl<'a> RawTerm<'a> {
  fn from_pair(pair: Pair<'a, Rule>) -> Self {
    let text = pair.as_str();
    let start = pair.as_span().start();
    let mut coefficient_end = 0;
    let mut has_coefficient = false;
    let mut has_star = false;
    let mut has_variable = false;
    let mut exponent = None;

    for inner in pair.into_inner() {
      match inner.as_rule() {
        Rule::Sign => coefficient_end = inner.as_span().end() - start,
        Rule::Coefficient => {
          has_coefficient = true;
          coefficient_end = inner.as_span().end() - start;
        }
        Rule::Star => has_star = true,
        Rule::Variable => {
          has_variable = true;
          exponent = inner.into_inner().next().map(|e| e.as_str());
        }
        _ => {}
      }
    }

    RawTerm {
      text,
      coefficient: &text[..coefficient_end],
      exponent: match exponent {
        Some(digits) => digits,
        None if has_variable => "1",
        None => "0",
      },
      canonical: has_coefficient && has_star && exponent.is_some(),
    }
  }

  pub fn to_term(&self) -> Result<Term, ComputorError> {
    let term = Term {
      exponent: parse_exponent(self.exponent)?,
      coefficient: parse_coefficient(self.coefficient)?,
    };
    trace!("term `{}` -> {:?}", self.text, term);
    Ok(term)
  }
}

pub fn parse_coefficient(text: &str) -> Result<f64, ComputorError> {
  let value = match text {
    "" | "+" => 1.0,
    "-" => -1.0,
    _ => text
      .parse::<f64>()
      .map_err(|e| ComputorError::InvalidCoefficient(format!("{text} ({e})")))?,
  };
  if !value.is_finite() {
    return Err(ComputorError::InvalidCoefficient(format!(
      "{text} is out of range"
    )));
  }
  Ok(value)
}

pub fn parse_exponent(text: &str) -> Result<u32, ComputorError> {
  text
    .parse::<u32>()
    .map_err(|e| ComputorError::InvalidExponent(format!("{text} ({e})")))
}

fn raw_terms(pairs: Pairs<'_, Rule>) -> impl Iterator<Item = RawTerm<'_>> {
  pairs
    .flatten()
    .filter(|pair| pair.as_rule() == Rule::Term)
    .map(RawTerm::from_pair)
}

/// Split one side of an equation (without spaces) into its terms.
pub fn extract_terms(
  side: &str,
) -> Result<impl Iterator<Item = RawTerm<'_>>, ComputorError> {
  extract_terms_with(side, Notation::Free)
}

pub fn extract_terms_with(
  side: &str,
  notation: Notation,
) -> Result<impl Iterator<Item = RawTerm<'_>>, ComputorError> {
  check_characters(side, is_term_char)?;
  let pairs = parse(side)?;

  if notation == Notation::Strict {
    if let Some(term) = raw_terms(pairs.clone()).find(|term| !term.canonical)
    {
      return Err(ComputorError::MalformedEquation(format!(
        "term `{}` is not written as `a * X^p`",
        term.text
      )));
    }
  }

  Ok(raw_terms(pairs))
}

/// Fold raw terms into a polynomial, summing equal exponents.
pub fn aggregate<'a>(
  terms: impl IntoIterator<Item = RawTerm<'a>>,
) -> Result<PolynomialMap, ComputorError> {
  let map: PolynomialMap =
    terms.into_iter().map(|raw| raw.to_term()).collect::<Result<_, _>>()?;
  map.ensure_finite()?;
  Ok(map)
}
