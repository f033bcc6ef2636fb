// src/money.rs
use chrono::{DateTime, Utc};

pub type AmountValue = i64;

/// Currency label used by the marketplace for bid amounts.
pub const CURRENCY_LABEL: &str = "₽";

/// Groups digits by thousands with a space: `2500` becomes `"2 500"`.
pub fn format_number(value: AmountValue) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    grouped
}

pub fn format_amount(value: AmountValue) -> String {
    format!("{} {}", format_number(value), CURRENCY_LABEL)
}

/// Countdown text from `now` until `until`, e.g. `"1д 02:03:04"`.
/// Past deadlines render as `"00:00:00"`.
pub fn format_time_left(now: DateTime<Utc>, until: DateTime<Utc>) -> String {
    let left = until.signed_duration_since(now);
    if left.num_seconds() <= 0 {
        return "00:00:00".to_string();
    }
    let total = left.num_seconds();
    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    let seconds = total % 60;
    if days > 0 {
        format!("{}д {:02}:{:02}:{:02}", days, hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}
