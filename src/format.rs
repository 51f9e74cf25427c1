use crate::polynomial::PolynomialMap;

fn format_integer(value: f64) -> String {
  // `{:.0}` would print -0.0 as "-0"
  if value == 0.0 {
    "0".to_string()
  } else {
    format!("{value:.0}")
  }
}

/// Format a root: integers without a decimal point, everything else with at
/// most six fractional digits.
pub fn format_number(value: f64) -> String {
  if value == value.trunc() {
    format_integer(value)
  } else {
    let fixed = format!("{value:.6}");
    match fixed.trim_end_matches('0').trim_end_matches('.') {
      "-0" => "0".to_string(),
      trimmed => trimmed.to_string(),
    }
  }
}

/// Format a coefficient magnitude for the reduced form.
/// Non-integers keep full precision so the reduced form parses back to the
/// same polynomial.
pub fn format_coefficient(value: f64) -> String {
  if value == value.trunc() {
    format_integer(value)
  } else {
    value.to_string()
  }
}

/// Both members of a conjugate pair, `re + im i` first.
pub fn format_complex(real: f64, imaginary: f64) -> (String, String) {
  let real = format_number(real);
  let imaginary = format_number(imaginary.abs());
  (
    format!("{real} + {imaginary}i"),
    format!("{real} - {imaginary}i"),
  )
}

/// Render `P(X) = 0` with exponents in ascending order,
/// e.g. `4 * X^0 - 2 * X^1 = 0`.
pub fn reduce_string(map: &PolynomialMap) -> String {
  if map.is_empty() {
    return "0 = 0".to_string();
  }

  let terms = map
    .iter()
    .map(|term| {
      let sign = if term.coefficient > 0.0 { '+' } else { '-' };
      format!(
        "{sign} {} * X^{}",
        format_coefficient(term.coefficient.abs()),
        term.exponent
      )
    })
    .collect::<Vec<_>>()
    .join(" ");

  let terms = terms.strip_prefix("+ ").unwrap_or(&terms);
  format!("{terms} = 0")
}
