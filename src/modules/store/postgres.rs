use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use super::{Collection, Condition, Document, Filter, StoreError, StoreResult, Value};

/// PostgreSQL backend: one table per collection, `SELECT *` mapped through `FromRow`
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Convert unique violations (PostgreSQL error code 23505) into `StoreError::Duplicate`
fn handle_db_error<T: Document>(e: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.code().as_deref() == Some("23505") {
            let constraint = db_err.constraint().unwrap_or_default();
            let field = T::UNIQUE
                .iter()
                .copied()
                .find(|column| constraint.contains(column))
                .unwrap_or("key");
            return StoreError::Duplicate {
                entity: T::ENTITY,
                field,
            };
        }
    }

    tracing::error!("{} query failed: {:?}", T::COLLECTION, e);
    StoreError::Database(e)
}

fn push_value(qb: &mut QueryBuilder<'_, Postgres>, value: Value) {
    match value {
        Value::Uuid(v) => qb.push_bind(v),
        Value::OptUuid(v) => qb.push_bind(v),
        Value::Text(v) => qb.push_bind(v),
        Value::OptText(v) => qb.push_bind(v),
        Value::TextList(v) => qb.push_bind(v),
        Value::Int(v) => qb.push_bind(v),
        Value::OptInt(v) => qb.push_bind(v),
        Value::Bool(v) => qb.push_bind(v),
        Value::Timestamp(v) => qb.push_bind(v),
    };
}

fn push_conditions(qb: &mut QueryBuilder<'_, Postgres>, conditions: Vec<Condition>) {
    for (i, condition) in conditions.into_iter().enumerate() {
        qb.push(if i == 0 { " WHERE " } else { " AND " });
        match condition {
            Condition::Eq(column, value) => {
                qb.push(column).push(" = ");
                push_value(qb, value);
            }
            Condition::IdIn(column, ids) => {
                qb.push(column).push(" = ANY(");
                qb.push_bind(ids);
                qb.push(")");
            }
        }
    }
}

/// `SELECT *` with the filter's conditions and ordering
fn select_query<T: Document>(filter: Filter) -> QueryBuilder<'static, Postgres> {
    let sort = filter.sort_for::<T>();
    let mut qb = QueryBuilder::new(format!("SELECT * FROM {}", T::COLLECTION));
    push_conditions(&mut qb, filter.conditions);
    qb.push(sort.as_sql());
    qb
}

fn insert_query<T: Document>(doc: &T) -> QueryBuilder<'static, Postgres> {
    let columns = doc.columns();
    let names: Vec<&str> = columns.iter().map(|(name, _)| *name).collect();

    let mut qb = QueryBuilder::new(format!(
        "INSERT INTO {} ({}) VALUES (",
        T::COLLECTION,
        names.join(", ")
    ));
    for (i, (_, value)) in columns.into_iter().enumerate() {
        if i > 0 {
            qb.push(", ");
        }
        push_value(&mut qb, value);
    }
    qb.push(")");
    qb
}

/// Rewrites every column except the immutable `id` and `created_at`
fn update_query<T: Document>(doc: &T) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(format!("UPDATE {} SET ", T::COLLECTION));
    let assignments = doc
        .columns()
        .into_iter()
        .filter(|(name, _)| *name != "id" && *name != "created_at");
    for (i, (name, value)) in assignments.enumerate() {
        if i > 0 {
            qb.push(", ");
        }
        qb.push(name).push(" = ");
        push_value(&mut qb, value);
    }
    qb.push(" WHERE id = ");
    qb.push_bind(doc.id());
    qb
}

fn delete_sql<T: Document>() -> String {
    format!("DELETE FROM {} WHERE id = $1", T::COLLECTION)
}

#[async_trait]
impl<T: Document> Collection<T> for PgStore {
    async fn find(&self, filter: Filter) -> StoreResult<Vec<T>> {
        select_query::<T>(filter)
            .build_query_as::<T>()
            .fetch_all(&self.pool)
            .await
            .map_err(handle_db_error::<T>)
    }

    async fn insert(&self, doc: &T) -> StoreResult<()> {
        insert_query(doc)
            .build()
            .execute(&self.pool)
            .await
            .map_err(handle_db_error::<T>)?;

        Ok(())
    }

    async fn update(&self, doc: &T) -> StoreResult<bool> {
        let result = update_query(doc)
            .build()
            .execute(&self.pool)
            .await
            .map_err(handle_db_error::<T>)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query(&delete_sql::<T>())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(handle_db_error::<T>)?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::categories::models::Category;
    use crate::features::enquiries::models::{ContactEnquiry, ProductEnquiry};
    use crate::features::navbar_categories::models::NavbarCategory;
    use crate::features::notifications::models::Notification;
    use crate::features::products::models::Product;
    use crate::features::subcategories::models::SubCategory;
    use crate::modules::store::Sort;
    use fake::{Dummy, Fake, Faker};

    const SCHEMA: &str = include_str!("../../../migrations/20250601000000_create_catalog.sql");

    /// Column names of `table` as declared in the migration
    fn schema_columns(table: &str) -> Vec<String> {
        let header = format!("CREATE TABLE IF NOT EXISTS {} (", table);
        let body = SCHEMA
            .split_once(&header)
            .and_then(|(_, rest)| rest.split_once("\n);"))
            .map(|(body, _)| body)
            .unwrap_or_else(|| panic!("table {} missing from migration", table));

        body.lines()
            .filter_map(|line| line.split_whitespace().next())
            .filter(|word| word.chars().all(|c| c.is_ascii_lowercase() || c == '_'))
            .map(str::to_string)
            .collect()
    }

    fn assert_queries_match_schema<T: Document + Dummy<Faker>>() {
        let doc: T = Faker.fake();
        let table = schema_columns(T::COLLECTION);

        let mut written: Vec<String> = doc.columns().iter().map(|(n, _)| n.to_string()).collect();
        let mut declared = table.clone();
        written.sort();
        declared.sort();
        assert_eq!(written, declared, "{} columns drifted from the schema", T::COLLECTION);

        for column in T::DEFAULT_SORT.columns() {
            assert!(
                table.iter().any(|c| c == column),
                "{} sorts on missing column {}",
                T::COLLECTION,
                column
            );
        }

        let select = select_query::<T>(Filter::by_id(doc.id()));
        assert_eq!(
            select.sql(),
            format!(
                "SELECT * FROM {} WHERE id = $1{}",
                T::COLLECTION,
                T::DEFAULT_SORT.as_sql()
            )
        );

        let n = table.len();
        let insert = insert_query(&doc);
        assert!(insert.sql().starts_with(&format!("INSERT INTO {} (id, ", T::COLLECTION)));
        assert!(insert.sql().ends_with(&format!("${})", n)));

        // id and created_at are never rewritten; the id comes back as the last bind
        let update = update_query(&doc);
        assert!(!update.sql().contains("created_at ="));
        assert!(update.sql().ends_with(&format!("WHERE id = ${}", n - 1)));

        assert_eq!(
            delete_sql::<T>(),
            format!("DELETE FROM {} WHERE id = $1", T::COLLECTION)
        );
    }

    #[test]
    fn catalog_queries_match_schema() {
        assert_queries_match_schema::<NavbarCategory>();
        assert_queries_match_schema::<Category>();
        assert_queries_match_schema::<SubCategory>();
        assert_queries_match_schema::<Product>();
    }

    #[test]
    fn enquiry_and_notification_queries_match_schema() {
        assert_queries_match_schema::<ContactEnquiry>();
        assert_queries_match_schema::<ProductEnquiry>();
        assert_queries_match_schema::<Notification>();
    }

    #[test]
    fn find_by_id_on_tables_without_display_order_sorts_by_creation() {
        let id = Uuid::new_v4();
        for sql in [
            select_query::<ContactEnquiry>(Filter::by_id(id)).sql().to_string(),
            select_query::<ProductEnquiry>(Filter::by_id(id)).sql().to_string(),
            select_query::<Notification>(Filter::by_id(id)).sql().to_string(),
        ] {
            assert!(!sql.contains("display_order"), "{}", sql);
            assert!(sql.ends_with(" ORDER BY created_at DESC"), "{}", sql);
        }
    }

    #[test]
    fn explicit_sort_overrides_collection_default() {
        let qb = select_query::<Category>(
            Filter::new()
                .active_only()
                .id_in("navbar_category_id", vec![Uuid::new_v4()])
                .sort(Sort::Newest),
        );
        assert_eq!(
            qb.sql(),
            "SELECT * FROM categories WHERE is_active = $1 AND navbar_category_id = ANY($2) \
             ORDER BY created_at DESC"
        );
    }
}
