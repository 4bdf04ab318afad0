//! Document persistence layer
//!
//! Every collection is reached through [`Collection`], a small find/insert/
//! update/delete interface. The PostgreSQL backend serves production; an
//! in-memory backend with the same unique-key semantics backs the tests.
//!
//! References between collections are plain ids: there are no foreign keys
//! and deleting a parent never touches its children.

mod hooks;
#[cfg(test)]
mod memory;
mod postgres;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::FromRow;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

pub use hooks::{before_save, Sluggable};
#[cfg(test)]
pub use memory::MemoryStore;
pub use postgres::PgStore;

/// A record stored in its own collection (one table per document type)
pub trait Document: Clone + Send + Sync + Unpin + for<'r> FromRow<'r, PgRow> + 'static {
    /// Table / collection name
    const COLLECTION: &'static str;
    /// Human readable entity name, used in conflict messages
    const ENTITY: &'static str;
    /// Columns carrying a unique index
    const UNIQUE: &'static [&'static str] = &[];
    /// Order used when a filter does not name one; must only touch columns the table has
    const DEFAULT_SORT: Sort = Sort::DisplayOrder;

    fn id(&self) -> Uuid;

    /// Every column with its current value, `id` first
    fn columns(&self) -> Vec<(&'static str, Value)>;
}

/// A column value, as bound into queries and compared by the memory backend
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Uuid(Uuid),
    OptUuid(Option<Uuid>),
    Text(String),
    OptText(Option<String>),
    TextList(Vec<String>),
    Int(i32),
    OptInt(Option<i32>),
    Bool(bool),
    Timestamp(DateTime<Utc>),
}

#[derive(Debug, Clone)]
pub enum Condition {
    Eq(&'static str, Value),
    IdIn(&'static str, Vec<Uuid>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sort {
    /// `order` ascending, then newest first
    DisplayOrder,
    /// Newest first
    Newest,
}

impl Sort {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Sort::DisplayOrder => " ORDER BY display_order ASC, created_at DESC",
            Sort::Newest => " ORDER BY created_at DESC",
        }
    }

    /// Columns the ordering reads
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Sort::DisplayOrder => &["display_order", "created_at"],
            Sort::Newest => &["created_at"],
        }
    }
}

/// Conjunction of equality conditions plus an optional sort order
#[derive(Debug, Clone, Default)]
pub struct Filter {
    pub conditions: Vec<Condition>,
    /// `None` falls back to the collection's [`Document::DEFAULT_SORT`]
    pub sort: Option<Sort>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn by_id(id: Uuid) -> Self {
        Self::new().eq("id", Value::Uuid(id))
    }

    pub fn eq(mut self, column: &'static str, value: Value) -> Self {
        self.conditions.push(Condition::Eq(column, value));
        self
    }

    pub fn active_only(self) -> Self {
        self.eq("is_active", Value::Bool(true))
    }

    pub fn id_in(mut self, column: &'static str, ids: Vec<Uuid>) -> Self {
        self.conditions.push(Condition::IdIn(column, ids));
        self
    }

    pub fn sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    /// The order a query for `T` actually runs with
    pub fn sort_for<T: Document>(&self) -> Sort {
        self.sort.unwrap_or(T::DEFAULT_SORT)
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("duplicate {field} for {entity}")]
    Duplicate {
        entity: &'static str,
        field: &'static str,
    },

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[async_trait]
pub trait Collection<T: Document>: Send + Sync {
    async fn find(&self, filter: Filter) -> StoreResult<Vec<T>>;

    async fn find_one(&self, filter: Filter) -> StoreResult<Option<T>> {
        Ok(self.find(filter).await?.into_iter().next())
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<T>> {
        self.find_one(Filter::by_id(id)).await
    }

    async fn insert(&self, doc: &T) -> StoreResult<()>;

    /// Overwrite every column of an existing document; `false` when the id is unknown
    async fn update(&self, doc: &T) -> StoreResult<bool>;

    /// Hard delete; `false` when the id is unknown
    async fn delete(&self, id: Uuid) -> StoreResult<bool>;
}

/// Shared handle to one collection
pub type Repo<T> = Arc<dyn Collection<T>>;

/// Load the documents with the given ids, keyed by id.
///
/// Stands in for reference population: unknown ids are simply absent from
/// the map, which is how orphaned references show up.
pub async fn index_by_id<T: Document>(
    repo: &Repo<T>,
    ids: impl IntoIterator<Item = Uuid>,
) -> StoreResult<HashMap<Uuid, T>> {
    let mut ids: Vec<Uuid> = ids.into_iter().collect();
    ids.sort_unstable();
    ids.dedup();
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let docs = repo.find(Filter::new().id_in("id", ids)).await?;
    Ok(docs.into_iter().map(|doc| (doc.id(), doc)).collect())
}
