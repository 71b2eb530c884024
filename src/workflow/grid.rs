use serde::Serialize;

use super::selection::Selection;
use crate::models::{OccupancySnapshot, SeatId};

/// Ряды зала. Планировка фиксирована на клиенте - сервер сообщает
/// только занятость.
pub const ROWS: [char; 5] = ['A', 'B', 'C', 'D', 'E'];

/// Номера кресел в ряду.
pub const COLUMNS: [u8; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

/// Состояние кресла при отрисовке.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatState {
    Available,
    Selected,
    Booked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeatCell {
    pub seat: SeatId,
    pub state: SeatState,
}

/// Строит модель сетки зала: состояние каждого кресла из планировки,
/// снимка занятости и текущего выбора. Детерминированная функция
/// своих аргументов.
pub fn seat_grid(occupancy: &OccupancySnapshot, selection: &Selection) -> Vec<Vec<SeatCell>> {
    ROWS.iter()
        .map(|&row| {
            COLUMNS
                .iter()
                .map(|&column| {
                    let seat = SeatId::new(row, column);
                    // "Занято" по данным сервера побеждает устаревший
                    // локальный выбор
                    let state = if occupancy.is_booked(seat) {
                        SeatState::Booked
                    } else if selection.contains(seat) {
                        SeatState::Selected
                    } else {
                        SeatState::Available
                    };
                    SeatCell { seat, state }
                })
                .collect()
        })
        .collect()
}
