/* Common utilities for handlers. */

// Rounds an amount to the nearest whole number, with comma thousands separators.
pub fn format_grouped_amount(amount: f64) -> String {
    let rounded = amount.round();
    if !rounded.is_finite() {
        return rounded.to_string();
    }

    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        grouped.push('-');
    }

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}

// Two decimal places, no separators.
pub fn format_precise_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_grouped_amount() {
        assert_eq!(format_grouped_amount(1234.5), "1,235");
        assert_eq!(format_grouped_amount(0.0), "0");
        assert_eq!(format_grouped_amount(999.4), "999");
        assert_eq!(format_grouped_amount(999.5), "1,000");
        assert_eq!(format_grouped_amount(1234567.0), "1,234,567");
        assert_eq!(format_grouped_amount(100000.0), "100,000");
    }

    #[test]
    fn test_format_grouped_negative_amount() {
        assert_eq!(format_grouped_amount(-1234.5), "-1,235");
        assert_eq!(format_grouped_amount(-0.2), "0");
    }

    #[test]
    fn test_format_precise_amount() {
        assert_eq!(format_precise_amount(1234.5), "1234.50");
        assert_eq!(format_precise_amount(0.0), "0.00");
        assert_eq!(format_precise_amount(1234567.891), "1234567.89");
    }
}
