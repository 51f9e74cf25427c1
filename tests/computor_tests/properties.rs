use super::*;
use approx::assert_abs_diff_eq;
use computor::format::reduce_string;

const EQUATIONS: &[&str] = &[
  "5 * X^2 + 2 * X^1 - 5 * X^0 = 3 * X^2 + 4 * X^1 + 7 * X^0",
  "5 * X^0 + 4 * X^1 - 9.3 * X^2 = 1 * X^0",
  "X + 3 = 2X^2",
  "0.1 * X^1 + 0.2 * X^1 = 7",
  "X^3 = X^3",
  "4 = -X^4 + 0.25X",
];

#[test]
fn swapping_sides_negates_the_polynomial() {
  for equation in EQUATIONS {
    let (lhs, rhs) = equation.split_once('=').unwrap();
    let swapped = format!("{rhs}={lhs}");
    assert_eq!(
      reduce(&swapped).unwrap(),
      -reduce(equation).unwrap(),
      "{equation}"
    );
  }
}

#[test]
fn reduced_form_parses_back_to_the_same_polynomial() {
  for equation in EQUATIONS {
    let reduced = reduce(equation).unwrap();
    assert_eq!(reduce(&reduce_string(&reduced)).unwrap(), reduced, "{equation}");
  }
}

#[test]
fn solving_is_repeatable() {
  for equation in EQUATIONS {
    let reduced = reduce(equation).unwrap();
    assert_eq!(solve(&reduced), solve(&reduced.clone()));
    assert_eq!(reduce_string(&reduced), reduce_string(&reduced));
  }
}

#[test]
fn real_roots_satisfy_vieta() {
  for (a, b, c) in [(2.0, 3.0, -1.0), (1.0, -2.0, -24.0), (0.5, 7.25, 3.0)] {
    let reduced = map(&[(0, c), (1, b), (2, a)]);
    let Solution::Two(first, second) = solve(&reduced) else {
      panic!("expected two roots for {a}, {b}, {c}");
    };
    assert_ne!(first, second);
    assert_abs_diff_eq!(first + second, -b / a, epsilon = 1e-9);
    assert_abs_diff_eq!(first * second, c / a, epsilon = 1e-9);
  }
}
