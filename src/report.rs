use std::fmt;

use serde_json::{json, Value};

use crate::format::{format_complex, format_number, reduce_string};
use crate::polynomial::PolynomialMap;
use crate::solver::{solve_in, Solution};
use crate::RootDomain;

/// Everything printed for one equation.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
  pub reduced: PolynomialMap,
  pub degree: u32,
  pub solution: Solution,
}

impl Report {
  pub fn new(reduced: PolynomialMap, domain: RootDomain) -> Self {
    let solution = solve_in(&reduced, domain);
    Report {
      degree: reduced.degree(),
      reduced,
      solution,
    }
  }

  pub fn reduced_form(&self) -> String {
    reduce_string(&self.reduced)
  }

  pub fn lines(&self) -> Vec<String> {
    let mut lines = vec![
      format!("Reduced form: {}", self.reduced_form()),
      format!("Polynomial degree: {}", self.degree),
    ];

    match self.solution {
      Solution::Unsolvable(_) => lines.push(
        "The polynomial degree is strictly greater than 2, I can't solve."
          .to_string(),
      ),
      Solution::Two(first, second) => {
        lines.push(
          "Discriminant is strictly positive, the two solutions are:"
            .to_string(),
        );
        lines.push(format_number(first));
        lines.push(format_number(second));
      }
      Solution::One(root) => {
        let header = if self.degree == 2 {
          "Discriminant is zero, the solution is:"
        } else {
          "The solution is:"
        };
        lines.push(header.to_string());
        lines.push(format_number(root));
      }
      Solution::Complex { real, imaginary } => {
        let (plus, minus) = format_complex(real, imaginary);
        lines.push(
          "Discriminant is strictly negative, the two complex solutions are:"
            .to_string(),
        );
        lines.push(plus);
        lines.push(minus);
      }
      Solution::NoRealSolution => lines.push(
        "Discriminant is strictly negative, there is no real solution."
          .to_string(),
      ),
      Solution::AllReals => {
        lines.push("All real numbers are solutions.".to_string())
      }
      Solution::NoSolution => lines.push("No solution.".to_string()),
    }

    lines
  }

  pub fn to_json(&self) -> Value {
    let solution = match self.solution {
      Solution::AllReals => json!({ "kind": "all_reals" }),
      Solution::NoSolution => json!({ "kind": "none" }),
      Solution::One(root) => json!({ "kind": "one", "roots": [root] }),
      Solution::Two(first, second) => {
        json!({ "kind": "two", "roots": [first, second] })
      }
      Solution::Complex { real, imaginary } => json!({
        "kind": "complex",
        "roots": [
          { "real": real, "imaginary": imaginary.abs() },
          { "real": real, "imaginary": -imaginary.abs() },
        ],
      }),
      Solution::NoRealSolution => json!({ "kind": "no_real" }),
      Solution::Unsolvable(degree) => {
        json!({ "kind": "unsolvable", "degree": degree })
      }
    };

    let coefficients: serde_json::Map<String, Value> = self
      .reduced
      .iter()
      .map(|term| (term.exponent.to_string(), json!(term.coefficient)))
      .collect();

    json!({
      "reduced_form": self.reduced_form(),
      "coefficients": coefficients,
      "degree": self.degree,
      "solution": solution,
    })
  }
}

impl fmt::Display for Report {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.lines().join("\n"))
  }
}
