use std::collections::BTreeSet;

use crate::models::{OccupancySnapshot, SeatId};

/// Выбор пользователя: места текущей, ещё не отправленной брони.
/// Хранится отсортированным множеством, чтобы отрисовка и отправка
/// всегда шли в одном и том же порядке.
///
/// Инвариант: выбор никогда не содержит место, помеченное занятым в
/// текущем снимке; это гарантирует `toggle`, ленивых перепроверок нет.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    seats: BTreeSet<SeatId>,
}

impl Selection {
    /// Переключает место с учётом снимка занятости. Занятое место
    /// выбрать нельзя - вызов ничего не меняет. Возвращает true, если
    /// выбор изменился.
    pub fn toggle(&mut self, seat: SeatId, occupancy: &OccupancySnapshot) -> bool {
        if occupancy.is_booked(seat) {
            return false;
        }
        if !self.seats.remove(&seat) {
            self.seats.insert(seat);
        }
        true
    }

    pub fn clear(&mut self) {
        self.seats.clear();
    }

    pub fn contains(&self, seat: SeatId) -> bool {
        self.seats.contains(&seat)
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Сумма к оплате для отображения. Авторитетная сумма приходит от
    /// сервера вместе с подтверждённой бронью.
    pub fn amount(&self, price_per_seat: f64) -> f64 {
        self.seats.len() as f64 * price_per_seat
    }

    /// Места в отсортированном порядке - для отправки и сводки.
    pub fn to_vec(&self) -> Vec<SeatId> {
        self.seats.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SeatOccupancy;
    use proptest::prelude::*;

    fn booked(seats: &[&str]) -> OccupancySnapshot {
        let records: Vec<SeatOccupancy> = seats
            .iter()
            .map(|s| SeatOccupancy { seat_number: (*s).to_string(), is_booked: true })
            .collect();
        OccupancySnapshot::from_records(&records).unwrap()
    }

    #[test]
    fn toggle_adds_available_seat() {
        let mut selection = Selection::default();
        assert!(selection.toggle(SeatId::new('A', 1), &OccupancySnapshot::default()));
        assert!(selection.contains(SeatId::new('A', 1)));
    }

    #[test]
    fn toggle_removes_already_selected_seat() {
        let occupancy = OccupancySnapshot::default();
        let mut selection = Selection::default();
        selection.toggle(SeatId::new('A', 1), &occupancy);
        selection.toggle(SeatId::new('A', 1), &occupancy);
        assert!(selection.is_empty());
    }

    #[test]
    fn booked_seat_is_not_selectable() {
        let occupancy = booked(&["A2"]);
        let mut selection = Selection::default();
        assert!(!selection.toggle(SeatId::new('A', 2), &occupancy));
        assert!(selection.is_empty());
    }

    #[test]
    fn clear_empties_selection() {
        let occupancy = OccupancySnapshot::default();
        let mut selection = Selection::default();
        selection.toggle(SeatId::new('A', 1), &occupancy);
        selection.toggle(SeatId::new('B', 3), &occupancy);
        selection.clear();
        assert!(selection.is_empty());
    }

    #[test]
    fn amount_is_count_times_price() {
        let occupancy = OccupancySnapshot::default();
        let mut selection = Selection::default();
        assert_eq!(selection.amount(250.0), 0.0);
        selection.toggle(SeatId::new('A', 1), &occupancy);
        selection.toggle(SeatId::new('A', 2), &occupancy);
        assert_eq!(selection.amount(250.0), 500.0);
    }

    #[test]
    fn to_vec_is_sorted() {
        let occupancy = OccupancySnapshot::default();
        let mut selection = Selection::default();
        for seat in [SeatId::new('B', 1), SeatId::new('A', 10), SeatId::new('A', 2)] {
            selection.toggle(seat, &occupancy);
        }
        assert_eq!(
            selection.to_vec(),
            vec![SeatId::new('A', 2), SeatId::new('A', 10), SeatId::new('B', 1)]
        );
    }

    fn any_seat() -> impl Strategy<Value = SeatId> {
        (prop::sample::select(vec!['A', 'B', 'C', 'D', 'E']), 1u8..=10)
            .prop_map(|(row, column)| SeatId::new(row, column))
    }

    proptest! {
        // Двойное переключение свободного места возвращает исходный выбор
        #[test]
        fn toggle_twice_is_identity(seat in any_seat(), preselected in prop::collection::vec(any_seat(), 0..10)) {
            let occupancy = OccupancySnapshot::default();
            let mut selection = Selection::default();
            for s in preselected {
                selection.toggle(s, &occupancy);
            }
            let before = selection.clone();
            selection.toggle(seat, &occupancy);
            selection.toggle(seat, &occupancy);
            prop_assert_eq!(selection, before);
        }

        // Занятое место не попадает в выбор, сколько его ни переключай
        #[test]
        fn booked_seat_never_enters_selection(seat in any_seat(), attempts in 1usize..4) {
            let occupancy = booked(&[&seat.to_string()]);
            let mut selection = Selection::default();
            for _ in 0..attempts {
                selection.toggle(seat, &occupancy);
            }
            prop_assert!(!selection.contains(seat));
        }
    }
}
