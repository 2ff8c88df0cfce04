//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, validación,
//! normalización de importes y la fuente de tiempo.

pub mod clock;
pub mod currency;
pub mod errors;
pub mod validation;

pub use clock::{Clock, ManualClock, SystemClock};
pub use errors::{AppError, AppResult};
