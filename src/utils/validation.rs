//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! antes de cualquier escritura en el store.

use validator::ValidationError;

use crate::utils::errors::{validation_error, AppError};

pub const MIN_BATTERY_LEVEL: i32 = 0;
pub const MAX_BATTERY_LEVEL: i32 = 100;
pub const MAX_NICKNAME_LENGTH: usize = 50;

/// Validar que un nivel de batería esté en 0..=100
pub fn validate_battery_level(level: i32) -> Result<(), ValidationError> {
    validate_range(level, MIN_BATTERY_LEVEL, MAX_BATTERY_LEVEL)
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar longitud mínima y máxima
pub fn validate_length(value: &str, min: usize, max: usize) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len < min || len > max {
        let mut error = ValidationError::new("length");
        error.add_param("min".into(), &min);
        error.add_param("max".into(), &max);
        error.add_param("actual".into(), &len);
        return Err(error);
    }
    Ok(())
}

/// Validar el apodo de un vehículo (no vacío, máximo 50 caracteres)
pub fn validate_nickname(value: &str) -> Result<(), ValidationError> {
    validate_not_empty(value)?;
    validate_length(value.trim(), 1, MAX_NICKNAME_LENGTH)
}

/// Validar que un valor esté en un rango específico
pub fn validate_range<T: PartialOrd + std::fmt::Display + serde::Serialize>(
    value: T,
    min: T,
    max: T,
) -> Result<(), ValidationError> {
    if value < min || value > max {
        let mut error = ValidationError::new("range");
        error.add_param("min".into(), &min);
        error.add_param("max".into(), &max);
        error.add_param("actual".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar formato de coordenadas GPS (simplificado)
pub fn validate_coordinates(lat: f64, lng: f64) -> Result<(), ValidationError> {
    if !(-90.0..=90.0).contains(&lat) {
        let mut error = ValidationError::new("latitude");
        error.add_param("value".into(), &lat);
        error.add_param("range".into(), &"-90.0 to 90.0".to_string());
        return Err(error);
    }

    if !(-180.0..=180.0).contains(&lng) {
        let mut error = ValidationError::new("longitude");
        error.add_param("value".into(), &lng);
        error.add_param("range".into(), &"-180.0 to 180.0".to_string());
        return Err(error);
    }

    Ok(())
}

/// Batería validada o `AppError::Validation` listo para devolver al llamador
pub fn ensure_battery_level(field: &str, level: i32) -> Result<(), AppError> {
    validate_battery_level(level).map_err(|_| {
        validation_error(
            field,
            &format!(
                "must be between {} and {} (got {})",
                MIN_BATTERY_LEVEL, MAX_BATTERY_LEVEL, level
            ),
        )
    })
}

pub fn ensure_nickname(nickname: &str) -> Result<(), AppError> {
    validate_nickname(nickname).map_err(|e| match &*e.code {
        "not_empty" => validation_error("nickname", "must not be empty"),
        _ => validation_error(
            "nickname",
            &format!("must be at most {} characters", MAX_NICKNAME_LENGTH),
        ),
    })
}

pub fn ensure_coordinates(lat: f64, lng: f64) -> Result<(), AppError> {
    validate_coordinates(lat, lng)
        .map_err(|e| validation_error(&e.code, "coordinate out of range"))
}
