//! Runtime settings shared by the library and the command-line front end.
//!
//! The binary fills a [`Settings`] from its flags; each flag can also be
//! provided through a `COMPUTOR_*` environment variable, with the flag
//! taking precedence.

use clap::ValueEnum;

/// Which spellings of a term the parser accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notation {
  /// `5`, `-X`, `2X^2`, `3 * X` and every other form of the term grammar.
  #[default]
  Free,
  /// Only fully written terms: `a * X^p`.
  Strict,
}

/// How a quadratic with a negative discriminant is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RootDomain {
  #[default]
  Complex,
  RealOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
  #[default]
  Text,
  Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
  pub notation: Notation,
  pub roots: RootDomain,
  pub output: OutputFormat,
}

impl Settings {
  pub fn strict(mut self, strict: bool) -> Self {
    self.notation = if strict {
      Notation::Strict
    } else {
      Notation::Free
    };
    self
  }

  pub fn real_only(mut self, real_only: bool) -> Self {
    self.roots = if real_only {
      RootDomain::RealOnly
    } else {
      RootDomain::Complex
    };
    self
  }

  pub fn output(mut self, output: OutputFormat) -> Self {
    self.output = output;
    self
  }
}
