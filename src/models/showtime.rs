use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Сеанс: фильм на конкретном экране в конкретные дату и время.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Showtime {
    pub id: i64,
    pub movie_id: i64,
    pub movie_title: String,
    pub screen_name: String,
    pub show_date: NaiveDate,
    pub show_time: NaiveTime,
    pub price: f64,
    pub total_seats: i32,
    pub booked_seats: i32,
}

impl Showtime {
    // Подсказка для витрины; реальную доступность проверяет сервер
    // в момент бронирования.
    pub fn available(&self) -> i32 {
        (self.total_seats - self.booked_seats).max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn showtime(total: i32, booked: i32) -> Showtime {
        Showtime {
            id: 1,
            movie_id: 1,
            movie_title: "Interstellar".into(),
            screen_name: "Screen 1".into(),
            show_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            show_time: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
            price: 250.0,
            total_seats: total,
            booked_seats: booked,
        }
    }

    #[test]
    fn available_is_total_minus_booked() {
        assert_eq!(showtime(50, 12).available(), 38);
    }

    #[test]
    fn available_never_goes_negative() {
        // сервер прислал несогласованные счётчики
        assert_eq!(showtime(50, 60).available(), 0);
    }
}
