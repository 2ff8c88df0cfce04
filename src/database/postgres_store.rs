//! Store de documentos sobre PostgreSQL
//!
//! Todos los documentos viven en una tabla `documents` con los campos en
//! JSONB. Los filtros de igualdad se resuelven con contención (`@>`).

use async_trait::async_trait;
use serde_json::Value;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use super::document_store::{Document, DocumentStore, Query, StoreError, StoredDocument};

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS documents (
        id TEXT PRIMARY KEY,
        collection TEXT NOT NULL,
        fields JSONB NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )
"#;

const CREATE_COLLECTION_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS documents_collection_idx ON documents (collection)";

const CREATE_FIELDS_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS documents_fields_idx ON documents USING GIN (fields jsonb_path_ops)";

#[derive(Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Crear la tabla e índices si no existen
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        for statement in [CREATE_TABLE, CREATE_COLLECTION_INDEX, CREATE_FIELDS_INDEX] {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        log::info!("✅ Schema de documentos verificado");
        Ok(())
    }

    fn select_sql(query: &Query) -> String {
        let base = "SELECT id, fields FROM documents WHERE collection = $1 AND fields @> $2";
        match &query.order_by {
            Some(order) => format!(
                "{} ORDER BY fields->>($3::text) {} NULLS LAST",
                base,
                order.direction.as_sql()
            ),
            None => format!("{} ORDER BY created_at ASC", base),
        }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn query(&self, collection: &str, query: &Query) -> Result<Vec<StoredDocument>, StoreError> {
        let sql = Self::select_sql(query);
        let mut statement = sqlx::query_as::<_, (String, Json<Value>)>(&sql)
            .bind(collection)
            .bind(Json(query.filters_as_object()));

        if let Some(order) = &query.order_by {
            statement = statement.bind(order.field.clone());
        }

        let rows = statement.fetch_all(&self.pool).await?;

        let documents = rows
            .into_iter()
            .map(|(id, Json(fields))| StoredDocument {
                id,
                fields: match fields {
                    Value::Object(map) => map,
                    _ => Document::new(),
                },
            })
            .collect();

        Ok(documents)
    }

    async fn insert(&self, collection: &str, fields: Document) -> Result<String, StoreError> {
        let id = Uuid::new_v4().to_string();

        sqlx::query("INSERT INTO documents (id, collection, fields) VALUES ($1, $2, $3)")
            .bind(&id)
            .bind(collection)
            .bind(Json(Value::Object(fields)))
            .execute(&self.pool)
            .await?;

        Ok(id)
    }

    async fn update(&self, collection: &str, id: &str, fields: Document) -> Result<(), StoreError> {
        let result = sqlx::query(
            "UPDATE documents SET fields = fields || $3 WHERE collection = $1 AND id = $2",
        )
        .bind(collection)
        .bind(id)
        .bind(Json(Value::Object(fields)))
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::DocumentNotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            });
        }

        Ok(())
    }
}
