/// Group the integer digits of a non-negative amount with thousands separators
fn group_thousands(whole: u64) -> String {
    let digits = whole.to_string();
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a euro amount with cents (e.g., 1,234.50€)
pub fn format_euro(value: f64) -> String {
    let abs_value = value.abs();
    let mut whole = abs_value.trunc() as u64;
    let mut cents = ((abs_value - abs_value.trunc()) * 100.0).round() as u64;
    if cents == 100 {
        whole += 1;
        cents = 0;
    }
    let sign = if value < 0.0 && (whole > 0 || cents > 0) { "-" } else { "" };
    format!("{sign}{}.{cents:02}€", group_thousands(whole))
}

/// Format a euro amount without cents (shorter format for axis labels)
pub fn format_euro_short(value: f64) -> String {
    let whole = value.abs().round() as u64;
    let sign = if value < 0.0 && whole > 0 { "-" } else { "" };
    format!("{sign}{}€", group_thousands(whole))
}

/// Format a ratio as a percentage
pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

/// Format profit per € of spend (e.g., 0.67 €/€)
pub fn format_efficiency(value: f64) -> String {
    format!("{value:.2} €/€")
}
