use log::debug;

use crate::polynomial::PolynomialMap;
use crate::RootDomain;

/// Outcome of solving `P(X) = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Solution {
  /// `0 = 0`
  AllReals,
  /// A non-zero constant equal to zero.
  NoSolution,
  One(f64),
  /// Roots using `+√Δ` and `-√Δ`, in that order.
  Two(f64, f64),
  /// The conjugate pair `real ± imaginary·i`.
  Complex { real: f64, imaginary: f64 },
  /// Negative discriminant when only real roots are wanted.
  NoRealSolution,
  /// Degree above two.
  Unsolvable(u32),
}

pub fn discriminant(a: f64, b: f64, c: f64) -> f64 {
  b * b - 4.0 * a * c
}

pub fn solve(map: &PolynomialMap) -> Solution {
  let c = map.coefficient(0);
  let b = map.coefficient(1);

  match map.degree() {
    0 if c == 0.0 => Solution::AllReals,
    0 => Solution::NoSolution,
    1 => Solution::One(-c / b),
    2 => solve_quadratic(map.coefficient(2), b, c),
    degree => Solution::Unsolvable(degree),
  }
}

fn solve_quadratic(a: f64, b: f64, c: f64) -> Solution {
  let delta = discriminant(a, b, c);
  debug!("a = {a}, b = {b}, c = {c}, discriminant = {delta}");

  if !delta.is_finite() {
    return solve_scaled_quadratic(a, b, c);
  }

  if delta < 0.0 {
    Solution::Complex {
      real: -b / (2.0 * a),
      imaginary: (-delta).sqrt() / (2.0 * a),
    }
  } else if delta == 0.0 {
    Solution::One(-b / (2.0 * a))
  } else {
    let root = delta.sqrt();
    Solution::Two((-b + root) / (2.0 * a), (-b - root) / (2.0 * a))
  }
}

/// `b² - 4ac` overflowed: take the discriminant of the coefficients divided
/// by the largest one, and derive the smaller real root from `c / (a·x)`
/// since `-b ± √Δ` cancels.
fn solve_scaled_quadratic(a: f64, b: f64, c: f64) -> Solution {
  let scale = a.abs().max(b.abs()).max(c.abs());
  let reduced = discriminant(a / scale, b / scale, c / scale);
  let root = scale * reduced.abs().sqrt();
  debug!("scaled discriminant = {reduced} (scale {scale})");

  if reduced < 0.0 {
    Solution::Complex {
      real: -b / (2.0 * a),
      imaginary: root / (2.0 * a),
    }
  } else if reduced == 0.0 {
    Solution::One(-b / (2.0 * a))
  } else {
    let far = (-b - b.signum() * root) / (2.0 * a);
    let near = c / (a * far);
    // `far` is the -√Δ root unless b is negative
    if b.is_sign_negative() {
      Solution::Two(far, near)
    } else {
      Solution::Two(near, far)
    }
  }
}

/// Like [`solve`], but a negative discriminant has no solution.
pub fn solve_real(map: &PolynomialMap) -> Solution {
  match solve(map) {
    Solution::Complex { .. } => Solution::NoRealSolution,
    solution => solution,
  }
}

pub fn solve_in(map: &PolynomialMap, domain: RootDomain) -> Solution {
  match domain {
    RootDomain::Complex => solve(map),
    RootDomain::RealOnly => solve_real(map),
  }
}
