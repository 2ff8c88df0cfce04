//! Repositorios
//!
//! Capa tipada sobre el store de documentos: un repositorio por colección.
//! Los documentos se validan al leer; los que no encajan en el schema se
//! descartan con un warning.

pub mod charging_session_repository;
pub mod preferences_repository;
pub mod user_vehicle_repository;

pub use charging_session_repository::ChargingSessionRepository;
pub use preferences_repository::PreferencesRepository;
pub use user_vehicle_repository::UserVehicleRepository;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::database::{Document, StoreError, StoredDocument};
use crate::utils::errors::AppError;

/// Serializar un modelo a campos de documento
pub(crate) fn to_document<T: Serialize>(value: &T) -> Result<Document, AppError> {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(AppError::Internal("record did not serialize to an object".to_string())),
        Err(e) => Err(AppError::Internal(format!("Error serializing record: {}", e))),
    }
}

/// Convertir documentos a modelos tipados, descartando los malformados
pub(crate) fn decode_documents<T: DeserializeOwned>(
    collection: &str,
    documents: Vec<StoredDocument>,
) -> Vec<T> {
    documents
        .into_iter()
        .filter_map(|doc| {
            let id = doc.id.clone();
            match serde_json::from_value::<T>(doc.into_value()) {
                Ok(record) => Some(record),
                Err(e) => {
                    log::warn!("⚠️ Documento malformado en {} ({}): {}", collection, id, e);
                    None
                }
            }
        })
        .collect()
}

pub(crate) fn read_error(context: &str, error: StoreError) -> AppError {
    log::error!("❌ {}: {}", context, error);
    AppError::StoreRead(format!("{}: {}", context, error))
}

pub(crate) fn write_error(context: &str, error: StoreError) -> AppError {
    log::error!("❌ {}: {}", context, error);
    match error {
        StoreError::DocumentNotFound { collection, id } => {
            AppError::NotFound(format!("{} with id '{}' not found", collection, id))
        }
        other => AppError::StoreWrite(format!("{}: {}", context, other)),
    }
}
