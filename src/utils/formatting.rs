//! Formatting utilities used for CLI and export outputs.

/// Group the digits of a whole number with `.` every three digits.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }

    out
}

/// Colombian peso style: `$ 1.234.567`, no decimals.
/// Negative values keep the sign after the symbol: `$ -15.000`.
pub fn format_pesos(value: f64, symbol: &str) -> String {
    let v = if value.is_finite() { value.round() } else { 0.0 };
    let sign = if v < 0.0 { "-" } else { "" };
    format!("{} {}{}", symbol, sign, group_thousands(v.abs() as u64))
}
