use pest::Parser;
use pest::error::LineColLocation;
use pest_derive::Parser;
use thiserror::Error;

pub mod config;
pub mod format;
pub mod polynomial;
pub mod reduce;
pub mod report;
pub mod solver;
pub mod terms;

pub use config::{Notation, OutputFormat, RootDomain, Settings};
pub use polynomial::PolynomialMap;
pub use reduce::{reduce, reduce_sides, reduce_with};
pub use report::Report;
pub use solver::{solve, solve_real, Solution};
pub use terms::{RawTerm, Term};

#[derive(Parser)]
#[grammar = "equation.pest"]
pub struct EquationParser;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComputorError {
  #[error("Invalid character '{character}' at column {position}")]
  InvalidCharacter { character: char, position: usize },
  #[error("Malformed equation: {0}")]
  MalformedEquation(String),
  #[error("Invalid coefficient: {0}")]
  InvalidCoefficient(String),
  #[error("Invalid exponent: {0}")]
  InvalidExponent(String),
}

impl From<Box<pest::error::Error<Rule>>> for ComputorError {
  fn from(error: Box<pest::error::Error<Rule>>) -> Self {
    let column = match error.line_col {
      LineColLocation::Pos((_, column)) => column,
      LineColLocation::Span((_, column), _) => column,
    };
    ComputorError::MalformedEquation(format!(
      "unexpected input at column {column} of `{}`",
      error.line()
    ))
  }
}

/// Parse one side of an equation (spaces already removed) into grammar pairs.
pub fn parse(
  input: &str,
) -> Result<pest::iterators::Pairs<'_, Rule>, Box<pest::error::Error<Rule>>> {
  EquationParser::parse(Rule::Side, input).map_err(Box::new)
}

/// Reduce, classify and solve a whole equation such as
/// `"5 * X^0 + 4 * X^1 = 4 * X^0"`.
pub fn solve_equation(
  input: &str,
  settings: &Settings,
) -> Result<Report, ComputorError> {
  let reduced = reduce_with(input, settings.notation)?;
  Ok(Report::new(reduced, settings.roots))
}
