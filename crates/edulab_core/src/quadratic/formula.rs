/// Format a coefficient without trailing zeros: `1.0 -> "1"`, `-0.50 -> "-0.5"`.
pub fn format_number(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let text = format!("{rounded:.4}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn leading(a: f64) -> String {
    match format_number(a).as_str() {
        "1" => String::new(),
        "-1" => "-".to_string(),
        other => other.to_string(),
    }
}

/// `+ 3` / `- 3` suffix, empty for zero
fn signed_term(value: f64) -> String {
    let text = format_number(value.abs());
    if text == "0" {
        String::new()
    } else if value < 0.0 {
        format!(" - {text}")
    } else {
        format!(" + {text}")
    }
}

pub(super) fn format_standard(a: f64, p: f64, q: f64) -> String {
    let square = match format_number(p).as_str() {
        "0" => "x^2".to_string(),
        _ => format!("(x{})^2", signed_term(-p)),
    };
    format!("y = {}{}{}", leading(a), square, signed_term(q))
}
