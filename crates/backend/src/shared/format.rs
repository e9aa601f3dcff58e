use contracts::domain::a005_order::OrderTimestamp;

/// Форматирует число с разделителями тысяч (точками)
///
/// # Примеры
/// ```ignore
/// assert_eq!(format_number(1234567), "1.234.567");
/// assert_eq!(format_number(42), "42");
/// ```
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Сумма в песо без дробной части: `$8.500`, `-$1.000`
pub fn format_money(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}${}", sign, format_number(rounded.abs() as u64))
}

/// Строка чека: текст слева, сумма справа
pub fn line_with_amount(left: &str, right: &str, width: usize) -> String {
    let left_len = left.chars().count();
    let right_len = right.chars().count();
    if left_len + right_len + 1 > width {
        // Не помещается, сумма уходит на следующую строку
        return format!("{}\n{:>width$}", left, right, width = width);
    }
    let padding = width - left_len - right_len;
    format!("{}{}{}", left, " ".repeat(padding), right)
}

pub fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    format!("{}{}", " ".repeat(left), text)
}

pub fn separator(width: usize, ch: char) -> String {
    std::iter::repeat(ch).take(width).collect()
}

/// Дата заказа для печати; нечитаемая строка выводится как есть
pub fn format_order_date(created_at: &OrderTimestamp) -> String {
    match created_at.parse() {
        Ok(dt) => dt.format("%d-%m-%Y %H:%M").to_string(),
        Err(_) => created_at.raw().to_string(),
    }
}
