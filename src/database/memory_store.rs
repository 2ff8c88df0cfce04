//! Store de documentos en memoria
//!
//! Implementación in-process del store, usada cuando no hay `DATABASE_URL`
//! y en los tests. Lleva la cuenta de operaciones para poder observar el
//! comportamiento del cache.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::document_store::{Document, DocumentStore, Query, StoreError, StoredDocument};

#[derive(Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<HashMap<String, Vec<StoredDocument>>>,
    queries: AtomicUsize,
    inserts: AtomicUsize,
    updates: AtomicUsize,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    pub fn insert_count(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }

    pub fn update_count(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }

    /// Leer un documento por id (sin contar como consulta)
    pub async fn get(&self, collection: &str, id: &str) -> Option<StoredDocument> {
        let collections = self.collections.read().await;
        collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| doc.id == id))
            .cloned()
    }

    /// Insertar con un id concreto (para sembrar datos)
    pub async fn insert_with_id(&self, collection: &str, id: &str, fields: Document) {
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .push(StoredDocument {
                id: id.to_string(),
                fields,
            });
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn query(&self, collection: &str, query: &Query) -> Result<Vec<StoredDocument>, StoreError> {
        self.queries.fetch_add(1, Ordering::SeqCst);

        let collections = self.collections.read().await;
        let mut documents: Vec<StoredDocument> = collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|doc| query.matches(&doc.fields))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        query.sort(&mut documents);
        log::debug!("📄 [memory] {} -> {} documentos", collection, documents.len());
        Ok(documents)
    }

    async fn insert(&self, collection: &str, fields: Document) -> Result<String, StoreError> {
        self.inserts.fetch_add(1, Ordering::SeqCst);

        let id = Uuid::new_v4().to_string();
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .push(StoredDocument {
                id: id.clone(),
                fields,
            });
        Ok(id)
    }

    async fn update(&self, collection: &str, id: &str, fields: Document) -> Result<(), StoreError> {
        self.updates.fetch_add(1, Ordering::SeqCst);

        let mut collections = self.collections.write().await;
        let document = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|doc| doc.id == id))
            .ok_or_else(|| StoreError::DocumentNotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;

        for (key, value) in fields {
            document.fields.insert(key, value);
        }
        Ok(())
    }
}
