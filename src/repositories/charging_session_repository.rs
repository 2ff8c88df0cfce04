use std::sync::Arc;

use super::{decode_documents, read_error, to_document, write_error};
use crate::database::{DocumentStore, Query, SortDirection};
use crate::models::charging_session::CHARGING_SESSIONS_COLLECTION;
use crate::models::{ChargingSession, NewChargingSession};
use crate::utils::errors::AppError;

#[derive(Clone)]
pub struct ChargingSessionRepository {
    store: Arc<dyn DocumentStore>,
}

impl ChargingSessionRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, session: &NewChargingSession) -> Result<String, AppError> {
        let fields = to_document(session)?;
        self.store
            .insert(CHARGING_SESSIONS_COLLECTION, fields)
            .await
            .map_err(|e| write_error("Error logging charging session", e))
    }

    /// Sesiones de un vehículo, más recientes primero por `startTime`
    pub async fn find_by_vehicle(&self, user_vehicle_id: &str) -> Result<Vec<ChargingSession>, AppError> {
        let query = Query::new()
            .filter("userVehicleId", user_vehicle_id)
            .order_by("startTime", SortDirection::Descending);

        let documents = self
            .store
            .query(CHARGING_SESSIONS_COLLECTION, &query)
            .await
            .map_err(|e| read_error("Error fetching charging history", e))?;

        Ok(decode_documents(CHARGING_SESSIONS_COLLECTION, documents))
    }
}
