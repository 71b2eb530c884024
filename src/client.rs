//! client.rs
//!
//! Клиент API удалённого сервиса бронирования.
//!
//! Инкапсулирует все сетевые вызовы клиентской части: сеансы, снимок
//! занятости зала, оформление брони и данные витрины (фильмы, экраны,
//! история бронирований). Сырые ошибки транспорта наружу не выходят -
//! каждая превращается в `ApiError` в точке вызова, до слоя
//! отображения доходит только классифицированный результат.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::ApiConfig;
use crate::models::{Booking, Movie, OccupancySnapshot, Screen, SeatId, SeatOccupancy, Showtime};

/// Запасной текст отказа, когда сервер не объяснил причину.
pub const BOOKING_FAILED_MESSAGE: &str = "Booking failed. Please try again.";

/// Ошибки обращения к сервису бронирования.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Сеть недоступна, таймаут или ответ не удалось разобрать.
    #[error("booking service request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Ответ пришёл, но его содержимое не соответствует контракту.
    #[error("malformed booking service response: {0}")]
    Malformed(String),
    /// Сервис отклонил запрос - например, место уже выкуплено.
    /// Текст сервера показывается пользователю как есть.
    #[error("{}", .message.as_deref().unwrap_or(BOOKING_FAILED_MESSAGE))]
    Rejected { message: Option<String> },
}

// --- Модели запросов и ответов API бронирования ---

#[derive(Debug, Serialize)]
struct CreateBookingRequest<'a> {
    #[serde(rename = "showtimeId")]
    showtime_id: i64,
    seats: &'a [SeatId],
}

#[derive(Debug, Deserialize)]
struct CreateBookingResponse {
    booking: Booking,
}

/// Тело, которое сервис шлёт при отказе.
#[derive(Debug, Deserialize)]
struct RejectionBody {
    message: Option<String>,
}

/// Клиент для взаимодействия с сервисом бронирования.
#[derive(Clone)]
pub struct ApiClient {
    /// Базовый URL API, без завершающего слэша.
    base_url: String,
    /// Асинхронный HTTP-клиент.
    http: reqwest::Client,
}

impl ApiClient {
    /// Создает и конфигурирует клиент на основе настроек приложения.
    pub fn from_config(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::builder()
                .timeout(Duration::from_secs(config.timeout_seconds))
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    /// Метаданные сеанса.
    pub async fn get_showtime(&self, showtime_id: i64) -> Result<Showtime, ApiError> {
        let showtime = self
            .http
            .get(format!("{}/showtimes/{}", self.base_url, showtime_id))
            .send()
            .await?
            .error_for_status()?
            .json::<Showtime>()
            .await?;
        Ok(showtime)
    }

    /// Снимок занятости зала для сеанса.
    pub async fn get_showtime_seats(
        &self,
        showtime_id: i64,
    ) -> Result<OccupancySnapshot, ApiError> {
        let records = self
            .http
            .get(format!("{}/bookings/seats/{}", self.base_url, showtime_id))
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<SeatOccupancy>>()
            .await?;
        OccupancySnapshot::from_records(&records).map_err(|e| ApiError::Malformed(e.to_string()))
    }

    /// Плоский список сеансов фильма для афиши.
    pub async fn get_showtimes(&self, movie_id: i64) -> Result<Vec<Showtime>, ApiError> {
        let showtimes = self
            .http
            .get(format!("{}/movies/{}/showtimes", self.base_url, movie_id))
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Showtime>>()
            .await?;
        Ok(showtimes)
    }

    /// Оформляет бронь выбранных мест.
    pub async fn create_booking(
        &self,
        showtime_id: i64,
        seats: &[SeatId],
    ) -> Result<Booking, ApiError> {
        info!("Creating booking: showtime_id={}, seats={}", showtime_id, seats.len());

        let response = self
            .http
            .post(format!("{}/bookings", self.base_url))
            .json(&CreateBookingRequest { showtime_id, seats })
            .send()
            .await?;

        if response.status().is_success() {
            let body = response.json::<CreateBookingResponse>().await?;
            Ok(body.booking)
        } else {
            // Любой не-2xx ответ - отказ движка бронирования; пытаемся
            // вытащить его текст, отсутствие текста не считаем ошибкой
            let message = response
                .json::<RejectionBody>()
                .await
                .ok()
                .and_then(|body| body.message);
            Err(ApiError::Rejected { message })
        }
    }

    /// Бронь по идентификатору - для страницы подтверждения.
    pub async fn get_booking(&self, booking_id: i64) -> Result<Booking, ApiError> {
        let booking = self
            .http
            .get(format!("{}/bookings/{}", self.base_url, booking_id))
            .send()
            .await?
            .error_for_status()?
            .json::<Booking>()
            .await?;
        Ok(booking)
    }

    /// Бронирования текущего пользователя - для истории.
    pub async fn get_my_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        let bookings = self
            .http
            .get(format!("{}/bookings/my-bookings", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Booking>>()
            .await?;
        Ok(bookings)
    }

    /// Текущая афиша.
    pub async fn get_movies(&self) -> Result<Vec<Movie>, ApiError> {
        let movies = self
            .http
            .get(format!("{}/movies", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Movie>>()
            .await?;
        Ok(movies)
    }

    /// Карточка фильма.
    pub async fn get_movie(&self, movie_id: i64) -> Result<Movie, ApiError> {
        let movie = self
            .http
            .get(format!("{}/movies/{}", self.base_url, movie_id))
            .send()
            .await?
            .error_for_status()?
            .json::<Movie>()
            .await?;
        Ok(movie)
    }

    /// Список экранов кинотеатра.
    pub async fn get_screens(&self) -> Result<Vec<Screen>, ApiError> {
        let screens = self
            .http
            .get(format!("{}/screens", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Screen>>()
            .await?;
        Ok(screens)
    }
}
