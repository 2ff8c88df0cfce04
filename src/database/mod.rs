//! Módulo de base de datos
//!
//! Interfaz del store de documentos y sus implementaciones
//! (memoria y PostgreSQL).

pub mod connection;
pub mod document_store;
pub mod memory_store;
pub mod postgres_store;

pub use connection::connect_store;
pub use document_store::{Document, DocumentStore, OrderBy, Query, SortDirection, StoreError, StoredDocument};
pub use memory_store::MemoryDocumentStore;
pub use postgres_store::PgDocumentStore;
