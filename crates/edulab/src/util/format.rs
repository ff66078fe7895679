/// Format a ratio as a percentage
pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// Format a slider value with the number of decimals its step needs
pub fn format_step(value: f64, decimals: u32) -> String {
    let text = format!("{:.*}", decimals as usize, value);
    // avoid "-0.0" when rounding a tiny negative value
    if text.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
        text.trim_start_matches('-').to_string()
    } else {
        text
    }
}

/// Format a count with thousands separators
pub fn format_count(value: usize) -> String {
    let digits = value.to_string();
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.4006), "40.06%");
        assert_eq!(format_percentage(0.0), "0.00%");
    }

    #[test]
    fn test_format_step() {
        assert_eq!(format_step(1.0, 1), "1.0");
        assert_eq!(format_step(-0.04, 1), "0.0");
        assert_eq!(format_step(-2.5, 1), "-2.5");
        assert_eq!(format_step(7.0, 0), "7");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(100_000), "100,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }
}
