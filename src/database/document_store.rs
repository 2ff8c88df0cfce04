//! Interfaz del store de documentos
//!
//! El store remoto es un servicio clave/valor con consultas: registros sin
//! schema (mapas JSON) agrupados por colección. El schema lo imponen los
//! repositorios al leer.

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::cmp::Ordering;
use thiserror::Error;

/// Campos de un documento, sin el id
pub type Document = Map<String, Value>;

/// Documento leído del store
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: String,
    pub fields: Document,
}

impl StoredDocument {
    /// Campos con el id incluido, listo para deserializar en un modelo tipado
    pub fn into_value(self) -> Value {
        let mut fields = self.fields;
        fields.insert("id".to_string(), Value::String(self.id));
        Value::Object(fields)
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("document '{id}' not found in '{collection}'")]
    DocumentNotFound { collection: String, id: String },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "ASC",
            SortDirection::Descending => "DESC",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub field: String,
    pub direction: SortDirection,
}

/// Consulta: filtros de igualdad combinados con AND y orden opcional
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pub filters: Vec<(String, Value)>,
    pub order_by: Option<OrderBy>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.filters.push((field.to_string(), value.into()));
        self
    }

    pub fn order_by(mut self, field: &str, direction: SortDirection) -> Self {
        self.order_by = Some(OrderBy {
            field: field.to_string(),
            direction,
        });
        self
    }

    pub fn matches(&self, fields: &Document) -> bool {
        self.filters
            .iter()
            .all(|(field, expected)| fields.get(field) == Some(expected))
    }

    /// Filtros como objeto JSON (para consultas de contención)
    pub fn filters_as_object(&self) -> Value {
        let mut object = Map::new();
        for (field, value) in &self.filters {
            object.insert(field.clone(), value.clone());
        }
        Value::Object(object)
    }

    /// Ordena documentos en memoria; los que no tienen el campo van al final
    pub fn sort(&self, documents: &mut [StoredDocument]) {
        let Some(order) = &self.order_by else {
            return;
        };

        documents.sort_by(|a, b| {
            match (a.fields.get(&order.field), b.fields.get(&order.field)) {
                (Some(left), Some(right)) => {
                    let ordering = compare_values(left, right);
                    match order.direction {
                        SortDirection::Ascending => ordering,
                        SortDirection::Descending => ordering.reverse(),
                    }
                }
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        });
    }
}

fn compare_values(left: &Value, right: &Value) -> Ordering {
    match (left, right) {
        (Value::String(l), Value::String(r)) => l.cmp(r),
        (Value::Number(l), Value::Number(r)) => {
            let l = l.as_f64().unwrap_or(f64::NAN);
            let r = r.as_f64().unwrap_or(f64::NAN);
            l.partial_cmp(&r).unwrap_or(Ordering::Equal)
        }
        (Value::Bool(l), Value::Bool(r)) => l.cmp(r),
        _ => Ordering::Equal,
    }
}

/// Operaciones del store remoto que consume esta capa
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn query(&self, collection: &str, query: &Query) -> Result<Vec<StoredDocument>, StoreError>;

    /// Inserta un documento nuevo y devuelve su id
    async fn insert(&self, collection: &str, fields: Document) -> Result<String, StoreError>;

    /// Mezcla `fields` sobre el documento existente
    async fn update(&self, collection: &str, id: &str, fields: Document) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(id: &str, fields: Value) -> StoredDocument {
        StoredDocument {
            id: id.to_string(),
            fields: fields.as_object().cloned().unwrap_or_default(),
        }
    }

    #[test]
    fn test_query_matches_all_filters() {
        let query = Query::new().filter("userId", "u1").filter("isActive", true);
        let active = doc("a", json!({ "userId": "u1", "isActive": true }));
        let inactive = doc("b", json!({ "userId": "u1", "isActive": false }));

        assert!(query.matches(&active.fields));
        assert!(!query.matches(&inactive.fields));
        assert_eq!(query.filters_as_object(), json!({ "userId": "u1", "isActive": true }));
    }

    #[test]
    fn test_sort_descending_puts_missing_last() {
        let query = Query::new().order_by("startTime", SortDirection::Descending);
        let mut docs = vec![
            doc("old", json!({ "startTime": "2024-01-01T00:00:00.000Z" })),
            doc("none", json!({})),
            doc("new", json!({ "startTime": "2024-02-01T00:00:00.000Z" })),
        ];

        query.sort(&mut docs);
        let ids: Vec<_> = docs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "old", "none"]);
    }

    #[test]
    fn test_into_value_injects_id() {
        let value = doc("abc", json!({ "name": "x" })).into_value();
        assert_eq!(value, json!({ "id": "abc", "name": "x" }));
    }
}
