//! Форматирование цен для карточек и модального окна

/// Целое число с пробелом между тысячами
///
/// # Примеры
///
/// ```
/// # use frontend::shared::number_format::format_number_int;
/// assert_eq!(format_number_int(1234567.0), "1 234 567");
/// ```
pub fn format_number_int(value: f64) -> String {
    let rounded = format!("{:.0}", value);
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rounded.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    format!("{}{}", sign, grouped)
}

/// Цена с валютой: `60 000 ₸`
pub fn format_price(value: f64, currency: &str) -> String {
    format!("{} {}", format_number_int(value), currency)
}
