use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::seat::SeatId;

/// Подтверждённая бронь. Идентификатор и итоговая сумма назначаются
/// сервером; клиентский расчёт суммы - только для отображения до
/// отправки.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub showtime_id: i64,
    #[serde(deserialize_with = "seat_list")]
    pub seats: Vec<SeatId>,
    pub total_amount: f64,
    pub booking_date: NaiveDateTime,
    pub status: String,
    // Денормализованные поля для страниц подтверждения и истории
    #[serde(default)]
    pub movie_title: Option<String>,
    #[serde(default)]
    pub screen_name: Option<String>,
    #[serde(default)]
    pub show_date: Option<NaiveDate>,
    #[serde(default)]
    pub show_time: Option<NaiveTime>,
    #[serde(default)]
    pub poster_url: Option<String>,
}

/// Список мест может прийти разобранным массивом или строкой с JSON
/// внутри. Разбираем оба варианта; нечитаемое значение - ошибка
/// декодирования всего ответа, а не пустой список.
fn seat_list<'de, D>(deserializer: D) -> Result<Vec<SeatId>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Parsed(Vec<SeatId>),
        Encoded(String),
    }

    match Repr::deserialize(deserializer)? {
        Repr::Parsed(seats) => Ok(seats),
        Repr::Encoded(text) => serde_json::from_str(&text).map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking_json(seats: &str) -> String {
        format!(
            r#"{{
                "id": 42,
                "showtime_id": 7,
                "seats": {seats},
                "total_amount": 500.0,
                "booking_date": "2024-04-28T10:15:00",
                "status": "confirmed"
            }}"#
        )
    }

    #[test]
    fn decodes_seats_as_structured_list() {
        let booking: Booking = serde_json::from_str(&booking_json(r#"["A1", "A2"]"#)).unwrap();
        assert_eq!(booking.seats, vec![SeatId::new('A', 1), SeatId::new('A', 2)]);
    }

    #[test]
    fn decodes_seats_as_encoded_text() {
        let booking: Booking =
            serde_json::from_str(&booking_json(r#""[\"A1\", \"A2\"]""#)).unwrap();
        assert_eq!(booking.seats, vec![SeatId::new('A', 1), SeatId::new('A', 2)]);
    }

    #[test]
    fn rejects_garbage_seat_text() {
        assert!(serde_json::from_str::<Booking>(&booking_json(r#""not json""#)).is_err());
    }

    #[test]
    fn display_fields_are_optional() {
        let booking: Booking = serde_json::from_str(&booking_json(r#"["B5"]"#)).unwrap();
        assert_eq!(booking.movie_title, None);
        assert_eq!(booking.status, "confirmed");
    }
}
