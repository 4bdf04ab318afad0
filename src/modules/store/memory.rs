use async_trait::async_trait;
use std::any::Any;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

use super::{Collection, Condition, Document, Filter, Sort, StoreError, StoreResult, Value};

/// In-memory backend for tests, enforcing the same unique columns as the SQL schema
#[derive(Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<&'static str, Box<dyn Any + Send + Sync>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_docs<T: Document, R>(&self, f: impl FnOnce(&mut Vec<T>) -> R) -> R {
        let mut collections = self.collections.lock().unwrap();
        let docs = collections
            .entry(T::COLLECTION)
            .or_insert_with(|| Box::new(Vec::<T>::new()))
            .downcast_mut::<Vec<T>>()
            .expect("collection registered with a different document type");
        f(docs)
    }
}

fn column<T: Document>(doc: &T, name: &str) -> Option<Value> {
    doc.columns()
        .into_iter()
        .find(|(column, _)| *column == name)
        .map(|(_, value)| value)
}

fn matches<T: Document>(doc: &T, conditions: &[Condition]) -> bool {
    conditions.iter().all(|condition| match condition {
        Condition::Eq(name, expected) => match (column(doc, name), expected) {
            (Some(Value::OptUuid(Some(actual))), Value::Uuid(expected)) => actual == *expected,
            (Some(Value::OptText(Some(actual))), Value::Text(expected)) => actual == *expected,
            (Some(actual), expected) => actual == *expected,
            (None, _) => false,
        },
        Condition::IdIn(name, ids) => match column(doc, name) {
            Some(Value::Uuid(id)) | Some(Value::OptUuid(Some(id))) => ids.contains(&id),
            _ => false,
        },
    })
}

/// Sorting on a column the table lacks is a query error in PostgreSQL; fail as loudly here
fn sort_key<T: Document>(doc: &T, name: &str) -> Value {
    column(doc, name)
        .unwrap_or_else(|| panic!("{} has no {} column to sort on", T::COLLECTION, name))
}

fn compare<T: Document>(a: &T, b: &T, sort: Sort) -> Ordering {
    let newest_first = || match (sort_key(a, "created_at"), sort_key(b, "created_at")) {
        (Value::Timestamp(a), Value::Timestamp(b)) => b.cmp(&a),
        _ => Ordering::Equal,
    };

    match sort {
        Sort::Newest => newest_first(),
        Sort::DisplayOrder => {
            let order = match (sort_key(a, "display_order"), sort_key(b, "display_order")) {
                (Value::Int(a), Value::Int(b)) => a.cmp(&b),
                _ => Ordering::Equal,
            };
            order.then_with(newest_first)
        }
    }
}

fn check_unique<T: Document>(docs: &[T], doc: &T) -> StoreResult<()> {
    for field in T::UNIQUE.iter().copied() {
        let value = column(doc, field);
        let taken = docs
            .iter()
            .filter(|other| other.id() != doc.id())
            .any(|other| column(other, field) == value);
        if taken {
            return Err(StoreError::Duplicate {
                entity: T::ENTITY,
                field,
            });
        }
    }
    Ok(())
}

#[async_trait]
impl<T: Document> Collection<T> for MemoryStore {
    async fn find(&self, filter: Filter) -> StoreResult<Vec<T>> {
        self.with_docs(|docs: &mut Vec<T>| {
            let mut found: Vec<T> = docs
                .iter()
                .filter(|doc| matches(*doc, &filter.conditions))
                .cloned()
                .collect();
            let sort = filter.sort_for::<T>();
            found.sort_by(|a, b| compare(a, b, sort));
            Ok(found)
        })
    }

    async fn insert(&self, doc: &T) -> StoreResult<()> {
        self.with_docs(|docs: &mut Vec<T>| {
            check_unique(docs, doc)?;
            docs.push(doc.clone());
            Ok(())
        })
    }

    async fn update(&self, doc: &T) -> StoreResult<bool> {
        self.with_docs(|docs: &mut Vec<T>| {
            check_unique(docs, doc)?;
            match docs.iter_mut().find(|existing| existing.id() == doc.id()) {
                Some(existing) => {
                    *existing = doc.clone();
                    Ok(true)
                }
                None => Ok(false),
            }
        })
    }

    async fn delete(&self, id: Uuid) -> StoreResult<bool> {
        self.with_docs(|docs: &mut Vec<T>| {
            let before = docs.len();
            docs.retain(|doc| doc.id() != id);
            Ok(docs.len() < before)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::enquiries::models::ContactEnquiry;
    use crate::features::navbar_categories::models::NavbarCategory;
    use crate::modules::store::{index_by_id, Repo};
    use chrono::{Duration, Utc};
    use fake::{Fake, Faker};
    use std::sync::Arc;

    fn navbar(name: &str, slug: &str, order: i32, age_secs: i64, active: bool) -> NavbarCategory {
        let created_at = Utc::now() - Duration::seconds(age_secs);
        NavbarCategory {
            id: Uuid::new_v4(),
            name: name.to_string(),
            slug: slug.to_string(),
            description: None,
            display_order: order,
            is_active: active,
            created_at,
            updated_at: created_at,
        }
    }

    fn repo() -> Repo<NavbarCategory> {
        Arc::new(MemoryStore::new())
    }

    #[tokio::test]
    async fn find_sorts_by_order_then_newest() {
        let repo = repo();
        let old_first = navbar("Old First", "old-first", 1, 100, true);
        let new_first = navbar("New First", "new-first", 1, 10, true);
        let zero = navbar("Zero", "zero", 0, 50, true);
        for doc in [&old_first, &new_first, &zero] {
            repo.insert(doc).await.unwrap();
        }

        let slugs: Vec<String> = repo
            .find(Filter::new())
            .await
            .unwrap()
            .into_iter()
            .map(|doc| doc.slug)
            .collect();
        assert_eq!(slugs, ["zero", "new-first", "old-first"]);
    }

    #[tokio::test]
    async fn collections_without_display_order_default_to_newest_first() {
        let repo: Repo<ContactEnquiry> = Arc::new(MemoryStore::new());
        let mut older: ContactEnquiry = Faker.fake();
        let mut newer: ContactEnquiry = Faker.fake();
        older.created_at = Utc::now() - Duration::hours(2);
        newer.created_at = Utc::now() - Duration::hours(1);
        repo.insert(&older).await.unwrap();
        repo.insert(&newer).await.unwrap();

        let ids: Vec<Uuid> = repo
            .find(Filter::new())
            .await
            .unwrap()
            .iter()
            .map(|doc| doc.id)
            .collect();
        assert_eq!(ids, [newer.id, older.id]);
        assert!(repo.find_by_id(older.id).await.unwrap().is_some());
    }

    #[tokio::test]
    #[should_panic(expected = "has no display_order column")]
    async fn sorting_on_a_missing_column_fails_loudly() {
        let repo: Repo<ContactEnquiry> = Arc::new(MemoryStore::new());
        repo.insert(&Faker.fake::<ContactEnquiry>()).await.unwrap();
        repo.insert(&Faker.fake::<ContactEnquiry>()).await.unwrap();
        let _ = repo.find(Filter::new().sort(Sort::DisplayOrder)).await;
    }

    #[tokio::test]
    async fn active_only_filters_inactive_documents() {
        let repo = repo();
        repo.insert(&navbar("Shown", "shown", 0, 0, true)).await.unwrap();
        repo.insert(&navbar("Hidden", "hidden", 0, 0, false)).await.unwrap();

        let found = repo.find(Filter::new().active_only()).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].slug, "shown");
    }

    #[tokio::test]
    async fn unique_columns_reject_duplicates_on_insert_and_update() {
        let repo = repo();
        let first = navbar("Routers", "routers", 0, 0, true);
        let mut second = navbar("Switches", "switches", 0, 0, true);
        repo.insert(&first).await.unwrap();
        repo.insert(&second).await.unwrap();

        let err = repo
            .insert(&navbar("Routers", "routers-2", 0, 0, true))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Duplicate { field: "name", .. }));

        second.slug = "routers".to_string();
        let err = repo.update(&second).await.unwrap_err();
        assert!(matches!(err, StoreError::Duplicate { field: "slug", .. }));

        // Re-saving a document with its own values is not a conflict
        assert!(repo.update(&first).await.unwrap());
    }

    #[tokio::test]
    async fn update_and_delete_report_unknown_ids() {
        let repo = repo();
        let ghost = navbar("Ghost", "ghost", 0, 0, true);
        assert!(!repo.update(&ghost).await.unwrap());
        assert!(!repo.delete(ghost.id).await.unwrap());

        repo.insert(&ghost).await.unwrap();
        assert!(repo.delete(ghost.id).await.unwrap());
        assert!(repo.find_by_id(ghost.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn index_by_id_skips_missing_ids() {
        let repo = repo();
        let kept = navbar("Kept", "kept", 0, 0, true);
        repo.insert(&kept).await.unwrap();

        let index = index_by_id(&repo, [kept.id, Uuid::new_v4(), kept.id])
            .await
            .unwrap();
        assert_eq!(index.len(), 1);
        assert!(index.contains_key(&kept.id));
    }
}
