//! workflow
//!
//! Процесс выбора мест и оформления брони для одного сеанса.
//!
//! Снимок занятости и выбор пользователя принадлежат ровно одному
//! экземпляру процесса; фоновых обновлений нет. Сервер остаётся
//! единственным арбитром двойных бронирований - клиент не держит
//! никаких блокировок и на отказ сервера отвечает перезагрузкой
//! занятости и сбросом выбора.

pub mod grid;
pub mod selection;

use tracing::{error, info, warn};

use crate::client::{ApiClient, ApiError, BOOKING_FAILED_MESSAGE};
use crate::models::{Booking, OccupancySnapshot, SeatId, Showtime};
use selection::Selection;

/// Сообщение при сбое загрузки сеанса или занятости.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load showtime details";

/// Фаза процесса бронирования.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    /// Идёт первоначальная загрузка, показывать нечего.
    Loading,
    /// Данные на месте, можно выбирать места.
    Ready,
    /// Терминальный сбой загрузки; автоматических повторов нет.
    Failed { message: String },
    /// Бронь подтверждена сервером.
    Confirmed { booking_id: i64 },
}

/// Ошибки отправки брони.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// Пустой выбор отклоняется локально, без похода в сеть.
    #[error("Please select at least one seat")]
    NoSeatsSelected,
    /// Одновременно может идти только одна отправка.
    #[error("Booking already in progress")]
    AlreadyInProgress,
    /// Отказ сервера; текст показывается пользователю как есть.
    #[error("{message}")]
    Rejected { message: String },
}

/// Состояние процесса выбора мест для одного сеанса.
///
/// При уходе со страницы экземпляр просто дропается вместе со своим
/// состоянием, поэтому запоздавшие ответы некуда применить.
pub struct SeatSelectionWorkflow {
    client: ApiClient,
    showtime_id: i64,
    phase: Phase,
    showtime: Option<Showtime>,
    occupancy: OccupancySnapshot,
    selection: Selection,
    submitting: bool,
}

impl SeatSelectionWorkflow {
    pub fn new(client: ApiClient, showtime_id: i64) -> Self {
        Self {
            client,
            showtime_id,
            phase: Phase::Loading,
            showtime: None,
            occupancy: OccupancySnapshot::default(),
            selection: Selection::default(),
            submitting: false,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn showtime(&self) -> Option<&Showtime> {
        self.showtime.as_ref()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Кнопка бронирования активна, только когда есть что отправлять
    /// и отправка ещё не идёт.
    pub fn can_submit(&self) -> bool {
        matches!(self.phase, Phase::Ready) && !self.selection.is_empty() && !self.submitting
    }

    /// Сумма по текущему выбору для сводки внизу экрана.
    pub fn total_amount(&self) -> f64 {
        match &self.showtime {
            Some(showtime) => self.selection.amount(showtime.price),
            None => 0.0,
        }
    }

    /// Модель сетки зала для отрисовки.
    pub fn seat_grid(&self) -> Vec<Vec<grid::SeatCell>> {
        grid::seat_grid(&self.occupancy, &self.selection)
    }

    /// Переключает место; занятые места не переключаются.
    pub fn toggle_seat(&mut self, seat: SeatId) -> bool {
        self.selection.toggle(seat, &self.occupancy)
    }

    /// Загружает метаданные сеанса и снимок занятости. Оба запроса
    /// идут параллельно, состояние обновляется только когда готовы оба
    /// ответа - частично обновлённых данных не бывает. Сбой любого из
    /// запросов переводит процесс в терминальную ошибку.
    pub async fn load(&mut self) -> Result<(), ApiError> {
        self.phase = Phase::Loading;

        let result = tokio::try_join!(
            self.client.get_showtime(self.showtime_id),
            self.client.get_showtime_seats(self.showtime_id),
        );

        match result {
            Ok((showtime, occupancy)) => {
                info!(
                    "Seat map loaded: showtime_id={}, booked_seats={}",
                    self.showtime_id,
                    occupancy.booked_count()
                );
                self.showtime = Some(showtime);
                self.occupancy = occupancy;
                self.phase = Phase::Ready;
                Ok(())
            }
            Err(e) => {
                error!("Failed to load seat map for showtime {}: {}", self.showtime_id, e);
                self.showtime = None;
                self.occupancy = OccupancySnapshot::default();
                self.phase = Phase::Failed { message: LOAD_FAILED_MESSAGE.to_string() };
                Err(e)
            }
        }
    }

    /// Отправляет выбранные места на бронирование.
    ///
    /// Успех подтверждает бронь и очищает выбор. Отказ сервера делает
    /// локальный снимок занятости недоверенным: выбор сбрасывается и
    /// данные перечитываются, чтобы пользователь выбирал заново по
    /// свежей картинке. Автоматических повторов нет.
    pub async fn submit(&mut self) -> Result<Booking, SubmitError> {
        if self.submitting {
            return Err(SubmitError::AlreadyInProgress);
        }
        if self.selection.is_empty() {
            return Err(SubmitError::NoSeatsSelected);
        }

        let seats = self.selection.to_vec();
        let expected_amount = self.showtime.as_ref().map(|s| self.selection.amount(s.price));

        self.submitting = true;
        let result = self.client.create_booking(self.showtime_id, &seats).await;
        self.submitting = false;

        match result {
            Ok(booking) => {
                // Сумма сервера авторитетна; расхождение с клиентским
                // расчётом не фатально, но его нельзя проглатывать молча
                if let Some(expected) = expected_amount {
                    if (booking.total_amount - expected).abs() > 0.005 {
                        warn!(
                            "Booking {} amount mismatch: client computed {}, server returned {}",
                            booking.id, expected, booking.total_amount
                        );
                    }
                }
                info!("Booking confirmed: id={}, seats={}", booking.id, seats.len());
                self.selection.clear();
                self.phase = Phase::Confirmed { booking_id: booking.id };
                Ok(booking)
            }
            Err(e) => {
                let message = match e {
                    ApiError::Rejected { message: Some(m) } => m,
                    _ => BOOKING_FAILED_MESSAGE.to_string(),
                };
                warn!("Booking rejected for showtime {}: {}", self.showtime_id, message);
                // Снимок занятости после отказа считается устаревшим:
                // сбрасываем выбор и перечитываем данные того же сеанса
                self.selection.clear();
                let _ = self.load().await;
                Err(SubmitError::Rejected { message })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;

    fn unreachable_client() -> ApiClient {
        // Порт 9 (discard) - запрос туда в тестах не уходит
        ApiClient::from_config(&ApiConfig {
            base_url: "http://127.0.0.1:9/api".to_string(),
            timeout_seconds: 1,
        })
    }

    #[tokio::test]
    async fn empty_selection_is_rejected_without_network() {
        let mut workflow = SeatSelectionWorkflow::new(unreachable_client(), 7);
        let err = workflow.submit().await.unwrap_err();
        assert_eq!(err, SubmitError::NoSeatsSelected);
        assert_eq!(err.to_string(), "Please select at least one seat");
    }

    #[tokio::test]
    async fn second_submit_is_refused_while_one_in_flight() {
        let mut workflow = SeatSelectionWorkflow::new(unreachable_client(), 7);
        workflow.toggle_seat(SeatId::new('A', 1));
        workflow.submitting = true;

        let err = workflow.submit().await.unwrap_err();
        assert_eq!(err, SubmitError::AlreadyInProgress);
        // выбор при этом не трогаем
        assert!(workflow.selection().contains(SeatId::new('A', 1)));
    }

    #[test]
    fn booking_action_is_disabled_until_there_is_a_selection() {
        let mut workflow = SeatSelectionWorkflow::new(unreachable_client(), 7);
        workflow.phase = Phase::Ready;
        assert!(!workflow.can_submit());

        workflow.toggle_seat(SeatId::new('A', 1));
        assert!(workflow.can_submit());

        workflow.submitting = true;
        assert!(!workflow.can_submit());
    }
}
