/// Format a price as US dollars with thousands separators, e.g. `$1,999.99`.
pub fn format_price(price: f64) -> String {
    let cents = (price.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if price < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${grouped}.{frac:02}")
}

#[cfg(test)]
mod tests {
    use super::format_price;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_price(19.99), "$19.99");
        assert_eq!(format_price(1999.99), "$1,999.99");
        assert_eq!(format_price(1_234_567.5), "$1,234,567.50");
        assert_eq!(format_price(0.0), "$0.00");
    }

    #[test]
    fn negative_amounts_keep_sign() {
        assert_eq!(format_price(-10.0), "-$10.00");
    }
}
