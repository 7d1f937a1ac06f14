//! Number formatting helpers for tables and stat tiles.

/// Format a number with a comma thousands separator and the given number of
/// decimal places.
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = match decimals {
        0 => format!("{:.0}", value),
        1 => format!("{:.1}", value),
        2 => format!("{:.2}", value),
        _ => format!("{:.2}", value),
    };

    let parts: Vec<&str> = formatted.split('.').collect();
    let integer_part = parts[0];
    let decimal_part = parts.get(1);

    // Insert commas every 3 digits from the end of the integer part
    let mut result = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push(',');
        }
        result.push(*c);
    }
    let formatted_integer = result.chars().rev().collect::<String>();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// Format a rupee amount: "Rs. 1,234.56".
pub fn format_money(value: f64) -> String {
    format!("Rs. {}", format_number_with_decimals(value, 2))
}

/// Format a whole quantity with a thousands separator.
pub fn format_quantity(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// Format a UTC timestamp for table cells.
pub fn format_date(dt: chrono::DateTime<chrono::Utc>) -> String {
    dt.format("%d %b %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "Rs. 1,234.56");
        assert_eq!(format_money(1234567.89), "Rs. 1,234,567.89");
        assert_eq!(format_money(0.0), "Rs. 0.00");
        assert_eq!(format_money(-1234.56), "Rs. -1,234.56");
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(1234567.0), "1,234,567");
        assert_eq!(format_quantity(0.0), "0");
        assert_eq!(format_quantity(999.4), "999");
    }

    #[test]
    fn test_format_date() {
        let dt = chrono::DateTime::parse_from_rfc3339("2025-05-02T09:30:00Z")
            .unwrap()
            .with_timezone(&chrono::Utc);
        assert_eq!(format_date(dt), "02 May 2025");
    }
}
