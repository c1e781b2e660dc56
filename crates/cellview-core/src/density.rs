use crate::consts::DEFAULT_DENSITY;

/// Normalize the density field text.
///
/// Empty or unparsable input becomes [`DEFAULT_DENSITY`]; anything numeric is
/// clamped to `[0, 1]` and written back in shortest decimal form.
pub fn normalize_density(raw: &str) -> String {
    match parse_density(raw) {
        Some(value) => format_density(value),
        None => DEFAULT_DENSITY.to_string(),
    }
}

/// Parse and clamp, or `None` when the text does not start with a number.
///
/// Only the longest leading numeric prefix is read, so `"0.3abc"` is `0.3`
/// and `"0x10"` is `0`. `Infinity` is the only spelling of infinity accepted.
pub fn parse_density(raw: &str) -> Option<f64> {
    let value = leading_number(raw.trim_start())?;
    if value.is_nan() {
        return None;
    }
    // clamp() keeps -0.0, which would print as "-0"
    let clamped = value.clamp(0.0, 1.0);
    Some(if clamped == 0.0 { 0.0 } else { clamped })
}

/// Read `[+-](Infinity | digits[.digits] | .digits)[e[+-]digits]` from the start of `s`.
fn leading_number(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        let negative = bytes[0] == b'-';
        return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // The exponent only counts when at least one digit follows it.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(&bytes[exp..]);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    s[..end].parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn format_density(value: f64) -> String {
    format!("{value}")
}
