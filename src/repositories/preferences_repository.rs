use chrono::{DateTime, Utc};
use serde_json::Value;
use std::sync::Arc;

use super::{read_error, to_document, write_error};
use crate::database::{DocumentStore, Query};
use crate::models::preferences::USER_PREFERENCES_COLLECTION;
use crate::models::timestamp;
use crate::models::UserPreferences;
use crate::utils::errors::AppError;

#[derive(Clone)]
pub struct PreferencesRepository {
    store: Arc<dyn DocumentStore>,
}

impl PreferencesRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Primer registro de preferencias del usuario con su id
    pub async fn find_by_user(&self, user_id: &str) -> Result<Option<(String, UserPreferences)>, AppError> {
        let query = Query::new().filter("userId", user_id);
        let documents = self
            .store
            .query(USER_PREFERENCES_COLLECTION, &query)
            .await
            .map_err(|e| read_error("Error fetching preferences", e))?;

        let Some(document) = documents.into_iter().next() else {
            return Ok(None);
        };

        let id = document.id.clone();
        match serde_json::from_value::<UserPreferences>(document.into_value()) {
            Ok(preferences) => Ok(Some((id, preferences))),
            Err(e) => {
                log::warn!("⚠️ Preferencias malformadas ({}), usando valores por defecto: {}", id, e);
                Ok(Some((id, UserPreferences::default())))
            }
        }
    }

    pub async fn create(
        &self,
        user_id: &str,
        preferences: &UserPreferences,
        at: DateTime<Utc>,
    ) -> Result<String, AppError> {
        let mut fields = to_document(preferences)?;
        let now = Value::String(timestamp::format(&at));
        fields.insert("userId".to_string(), Value::String(user_id.to_string()));
        fields.insert("createdAt".to_string(), now.clone());
        fields.insert("updatedAt".to_string(), now);

        self.store
            .insert(USER_PREFERENCES_COLLECTION, fields)
            .await
            .map_err(|e| write_error("Error saving preferences", e))
    }

    pub async fn update(&self, id: &str, preferences: &UserPreferences, at: DateTime<Utc>) -> Result<(), AppError> {
        let mut fields = to_document(preferences)?;
        fields.insert("updatedAt".to_string(), Value::String(timestamp::format(&at)));
        if preferences.planned_trip.is_none() {
            fields.insert("plannedTrip".to_string(), Value::Null);
        }

        self.store
            .update(USER_PREFERENCES_COLLECTION, id, fields)
            .await
            .map_err(|e| write_error("Error saving preferences", e))
    }
}
