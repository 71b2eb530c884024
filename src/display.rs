use chrono::{NaiveDate, NaiveTime};

use crate::models::SeatId;

// Форматы дат и времени повторяют витрину: en-US, 12-часовое время.

/// "Wed, May 1, 2024" - короткая дата для афиши и истории.
pub fn short_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d, %Y").to_string()
}

/// "Wednesday, May 1, 2024" - полная дата для страницы подтверждения.
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// "02:30 PM"
pub fn show_time(time: NaiveTime) -> String {
    time.format("%I:%M %p").to_string()
}

/// "A1, A2, B5" - места в отсортированном порядке.
pub fn seat_list(seats: &[SeatId]) -> String {
    let mut sorted = seats.to_vec();
    sorted.sort();
    sorted
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Сеанс уже прошёл - в истории такая бронь приглушается.
pub fn is_past_show(show_date: NaiveDate, today: NaiveDate) -> bool {
    show_date < today
}
