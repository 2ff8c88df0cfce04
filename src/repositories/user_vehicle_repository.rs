use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use std::sync::Arc;

use super::{decode_documents, read_error, to_document, write_error};
use crate::database::{Document, DocumentStore, Query, SortDirection};
use crate::models::timestamp;
use crate::models::user_vehicle::USER_VEHICLES_COLLECTION;
use crate::models::{NewUserVehicle, UserVehicle};
use crate::utils::errors::AppError;

#[derive(Clone)]
pub struct UserVehicleRepository {
    store: Arc<dyn DocumentStore>,
}

impl UserVehicleRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, vehicle: &NewUserVehicle) -> Result<String, AppError> {
        let fields = to_document(vehicle)?;
        self.store
            .insert(USER_VEHICLES_COLLECTION, fields)
            .await
            .map_err(|e| write_error("Error creating vehicle", e))
    }

    /// Vehículos activos del usuario, más recientes primero
    pub async fn find_active_by_user(&self, user_id: &str) -> Result<Vec<UserVehicle>, AppError> {
        let query = Query::new()
            .filter("userId", user_id)
            .filter("isActive", true)
            .order_by("createdAt", SortDirection::Descending);

        let documents = self
            .store
            .query(USER_VEHICLES_COLLECTION, &query)
            .await
            .map_err(|e| read_error("Error listing vehicles", e))?;

        Ok(decode_documents(USER_VEHICLES_COLLECTION, documents))
    }

    pub async fn set_battery(&self, id: &str, level: i32, at: DateTime<Utc>) -> Result<(), AppError> {
        self.update(id, "Error updating battery", json!({ "currentBattery": level }), at)
            .await
    }

    pub async fn set_nickname(&self, id: &str, nickname: &str, at: DateTime<Utc>) -> Result<(), AppError> {
        self.update(id, "Error renaming vehicle", json!({ "nickname": nickname }), at)
            .await
    }

    /// Borrado lógico
    pub async fn deactivate(&self, id: &str, at: DateTime<Utc>) -> Result<(), AppError> {
        self.update(id, "Error removing vehicle", json!({ "isActive": false }), at)
            .await
    }

    async fn update(&self, id: &str, context: &str, changes: Value, at: DateTime<Utc>) -> Result<(), AppError> {
        let mut fields: Document = match changes {
            Value::Object(map) => map,
            _ => Document::new(),
        };
        fields.insert("updatedAt".to_string(), Value::String(timestamp::format(&at)));

        self.store
            .update(USER_VEHICLES_COLLECTION, id, fields)
            .await
            .map_err(|e| write_error(context, e))
    }
}
