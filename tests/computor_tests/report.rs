use super::*;

fn render(equation: &str) -> String {
  solve_equation(equation, &Settings::default())
    .unwrap()
    .to_string()
}

mod text {
  use super::*;

  #[test]
  fn two_real_solutions() {
    insta::assert_snapshot!(render("5 * X^0 + 4 * X^1 - 9.3 * X^2 = 1 * X^0"), @r"
    Reduced form: 4 * X^0 + 4 * X^1 - 9.3 * X^2 = 0
    Polynomial degree: 2
    Discriminant is strictly positive, the two solutions are:
    -0.475131
    0.905239
    ");
  }

  #[test]
  fn linear() {
    insta::assert_snapshot!(render("5 * X^0 + 4 * X^1 = 4 * X^0"), @r"
    Reduced form: 1 * X^0 + 4 * X^1 = 0
    Polynomial degree: 1
    The solution is:
    -0.25
    ");
  }

  #[test]
  fn double_root() {
    insta::assert_snapshot!(render("X^2 = 0"), @r"
    Reduced form: 1 * X^2 = 0
    Polynomial degree: 2
    Discriminant is zero, the solution is:
    0
    ");
  }

  #[test]
  fn complex_solutions() {
    insta::assert_snapshot!(render("5 + 3X + 3X^2 = 1 + 0X"), @r"
    Reduced form: 4 * X^0 + 3 * X^1 + 3 * X^2 = 0
    Polynomial degree: 2
    Discriminant is strictly negative, the two complex solutions are:
    -0.5 + 1.040833i
    -0.5 - 1.040833i
    ");
  }

  #[test]
  fn complex_solutions_with_negative_leading_coefficient() {
    insta::assert_snapshot!(render("-X^2 - 1 = 0"), @r"
    Reduced form: - 1 * X^0 - 1 * X^2 = 0
    Polynomial degree: 2
    Discriminant is strictly negative, the two complex solutions are:
    0 + 1i
    0 - 1i
    ");
  }

  #[test]
  fn tiny_negative_root_prints_as_zero() {
    insta::assert_snapshot!(render("10000000X + 1 = 0"), @r"
    Reduced form: 1 * X^0 + 10000000 * X^1 = 0
    Polynomial degree: 1
    The solution is:
    0
    ");
  }

  #[test]
  fn too_high_degree() {
    insta::assert_snapshot!(render("8 * X^0 - 6 * X^1 + 0 * X^2 - 5.6 * X^3 = 3 * X^0"), @r"
    Reduced form: 5 * X^0 - 6 * X^1 - 5.6 * X^3 = 0
    Polynomial degree: 3
    The polynomial degree is strictly greater than 2, I can't solve.
    ");
  }

  #[test]
  fn every_real_is_a_solution() {
    insta::assert_snapshot!(render("42 * X^0 = 42 * X^0"), @r"
    Reduced form: 0 = 0
    Polynomial degree: 0
    All real numbers are solutions.
    ");
  }

  #[test]
  fn no_solution() {
    assert_eq!(
      render("4 * X^0 = 8 * X^0"),
      "Reduced form: - 4 * X^0 = 0\nPolynomial degree: 0\nNo solution."
    );
  }

  #[test]
  fn real_only_mode() {
    let settings = Settings::default().real_only(true);
    let report = solve_equation("X^2 + 1 = 0", &settings).unwrap();
    assert_eq!(
      report.lines().last().map(String::as_str),
      Some("Discriminant is strictly negative, there is no real solution.")
    );
  }

  #[test]
  fn strict_mode_rejects_shorthand() {
    let settings = Settings::default().strict(true);
    assert!(solve_equation("X^2 + 1 = 0", &settings).is_err());
    assert!(solve_equation("1 * X^2 + 1 * X^0 = 0 * X^0", &settings).is_ok());
  }
}

mod json {
  use super::*;
  use serde_json::json;

  #[test]
  fn two_real_solutions() {
    let report = solve_equation(
      "5 * X^2 + 2 * X^1 - 5 * X^0 = 3 * X^2 + 4 * X^1 + 7 * X^0",
      &Settings::default(),
    )
    .unwrap();
    assert_eq!(
      report.to_json(),
      json!({
        "reduced_form": "- 12 * X^0 - 2 * X^1 + 2 * X^2 = 0",
        "coefficients": { "0": -12.0, "1": -2.0, "2": 2.0 },
        "degree": 2,
        "solution": { "kind": "two", "roots": [3.0, -2.0] },
      })
    );
  }

  #[test]
  fn complex_roots_are_conjugates() {
    let report =
      solve_equation("X^2 + 1 = 0", &Settings::default()).unwrap();
    assert_eq!(
      report.to_json()["solution"],
      json!({
        "kind": "complex",
        "roots": [
          { "real": 0.0, "imaginary": 1.0 },
          { "real": 0.0, "imaginary": -1.0 },
        ],
      })
    );
  }

  #[test]
  fn refusal_carries_the_degree() {
    let report = solve_equation("X^4 = 1", &Settings::default()).unwrap();
    assert_eq!(
      report.to_json()["solution"],
      json!({ "kind": "unsolvable", "degree": 4 })
    );
  }
}
