/// ANSI colour helpers for terminal output.
use ansi_term::Colour;

/// Net colour:
/// \>0 → green
/// \<0 → red
/// 0 → plain
pub fn paint_net(value: f64, text: &str) -> String {
    if value > 0.0 {
        Colour::Green.paint(text).to_string()
    } else if value < 0.0 {
        Colour::Red.paint(text).to_string()
    } else {
        text.to_string()
    }
}

/// Grey placeholder for empty cells ("—").
pub fn placeholder(value: &str) -> String {
    if value.trim().is_empty() {
        Colour::Fixed(8).paint("—").to_string()
    } else {
        value.to_string()
    }
}
