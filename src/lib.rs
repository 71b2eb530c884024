pub mod client;
pub mod config;
pub mod display;
pub mod grouping;
pub mod models;
pub mod workflow;

pub use client::{ApiClient, ApiError};
pub use config::Config;
pub use workflow::{Phase, SeatSelectionWorkflow, SubmitError};

// Общее состояние клиентской части приложения
#[derive(Clone)]
pub struct AppState {
    pub client: ApiClient,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let client = ApiClient::from_config(&config.api);
        Self { client, config }
    }

    /// Новый процесс выбора мест для сеанса.
    pub fn seat_selection(&self, showtime_id: i64) -> SeatSelectionWorkflow {
        SeatSelectionWorkflow::new(self.client.clone(), showtime_id)
    }
}
