use anyhow::{Context, Result};
use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::ApiError;

pub const PAYMENTS: &str = "payments";
pub const CONTACTS: &str = "contacts";

/// Port to the document store: schema-flexible JSON records in named
/// collections, newest insert first.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Appends one document to a collection.
    async fn insert(&self, collection: &str, document: Value) -> Result<(), ApiError>;

    /// The `limit` most recent documents, newest first.
    async fn recent(&self, collection: &str, limit: usize) -> Result<Vec<Value>, ApiError>;

    /// Every document in a collection, newest first.
    async fn scan(&self, collection: &str) -> Result<Vec<Value>, ApiError>;
}

/// Redis-backed store. Each collection is a list of JSON documents;
/// LPUSH keeps the newest document at the head, which is the order the
/// listing endpoints serve.
pub struct RedisStore {
    conn: ConnectionManager,
}

impl RedisStore {
    /// Connects and verifies the store with a PING. Errors here are fatal
    /// to startup: the service must not serve traffic without its store.
    pub async fn connect(url: &str) -> Result<Self> {
        let client = redis::Client::open(url).context("invalid document store URL")?;
        let mut conn = client
            .get_connection_manager()
            .await
            .context("document store connection failed")?;

        redis::cmd("PING")
            .query_async::<_, String>(&mut conn)
            .await
            .context("document store did not answer PING")?;

        tracing::info!("Document store connected");

        Ok(Self { conn })
    }
}

#[async_trait]
impl DocumentStore for RedisStore {
    async fn insert(&self, collection: &str, document: Value) -> Result<(), ApiError> {
        let serialized = serde_json::to_string(&document)?;
        let mut conn = self.conn.clone();
        conn.lpush::<_, _, ()>(collection, serialized).await?;
        Ok(())
    }

    async fn recent(&self, collection: &str, limit: usize) -> Result<Vec<Value>, ApiError> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        let mut conn = self.conn.clone();
        let raw: Vec<String> = conn.lrange(collection, 0, limit as isize - 1).await?;
        parse_documents(raw)
    }

    async fn scan(&self, collection: &str) -> Result<Vec<Value>, ApiError> {
        let mut conn = self.conn.clone();
        let raw: Vec<String> = conn.lrange(collection, 0, -1).await?;
        parse_documents(raw)
    }
}

fn parse_documents(raw: Vec<String>) -> Result<Vec<Value>, ApiError> {
    raw.iter()
        .map(|doc| serde_json::from_str(doc).map_err(ApiError::from))
        .collect()
}

/// In-memory store with the same newest-first ordering as [`RedisStore`].
/// Backs the test suites; never wired into production startup.
#[derive(Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<String, Vec<Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert(&self, collection: &str, document: Value) -> Result<(), ApiError> {
        let mut collections = self.collections.lock().unwrap();
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(0, document);
        Ok(())
    }

    async fn recent(&self, collection: &str, limit: usize) -> Result<Vec<Value>, ApiError> {
        let collections = self.collections.lock().unwrap();
        Ok(collections
            .get(collection)
            .map(|docs| docs.iter().take(limit).cloned().collect())
            .unwrap_or_default())
    }

    async fn scan(&self, collection: &str) -> Result<Vec<Value>, ApiError> {
        let collections = self.collections.lock().unwrap();
        Ok(collections.get(collection).cloned().unwrap_or_default())
    }
}
