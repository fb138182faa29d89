/// Format `value` with at most `digits` significant digits, dropping
/// trailing zeros, i.e. 93.56789 -> "93.57", 100.0 -> "100", 0.5 -> "0.5".
pub fn fmt_sig(value: f64, digits: usize) -> String {
    assert!(digits > 0);
    if value == 0.0 || !value.is_finite() {
        return format!("{}", value);
    }

    let exp = value.abs().log10().floor() as i32;
    if exp < -5 || exp >= digits as i32 {
        return format!("{:.*e}", digits - 1, value);
    }

    let decimals = (digits as i32 - 1 - exp).max(0) as usize;
    let s = format!("{:.*}", decimals, value);
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
    else {
        s
    }
}

/// Format a count averaged over `n` planets.
pub fn fmt_per_planet(count: u64, n: u64) -> String {
    if n == 0 {
        return String::from("n/a");
    }
    format!("{:.6}", count as f64 / n as f64)
}
