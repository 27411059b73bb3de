use std::fmt;

use colored::Colorize;

pub fn info(message: impl fmt::Display) {
    println!("{} {}", "[i]".cyan(), message);
}

pub fn success(message: impl fmt::Display) {
    println!("{} {}", "[+]".green(), message);
}

pub fn warning(message: impl fmt::Display) {
    println!("{} {}", "[!]".yellow(), message);
}

pub fn error(message: impl fmt::Display) {
    eprintln!("{} {}", "[x]".red(), message);
}

pub fn section(title: impl fmt::Display) {
    println!("{}", format!("== {} ==", title).bold());
}

/// Two-decimal display rounding happens here, at the presentation boundary.
/// Calendar cells pass `with_decimals = false`.
pub fn format_value(value: f64, currency: &str, with_decimals: bool) -> String {
    if with_decimals {
        format!("{:.2} {}", value, currency)
    } else {
        format!("{:.0} {}", value, currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_value_rounds_at_two_decimals() {
        assert_eq!(format_value(-24.994, "€", true), "-24.99 €");
        assert_eq!(format_value(1300.0, "€", true), "1300.00 €");
        assert_eq!(format_value(-24.99, "€", false), "-25 €");
    }
}
