use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::modules::store::{Document, Sluggable, Value};

/// Database model for category
#[derive(Debug, Clone, FromRow)]
#[cfg_attr(test, derive(fake::Dummy))]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub navbar_category_id: Uuid,
    pub description: Option<String>,
    pub image: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document for Category {
    const COLLECTION: &'static str = "categories";
    const ENTITY: &'static str = "category";
    const UNIQUE: &'static [&'static str] = &["slug"];

    fn id(&self) -> Uuid {
        self.id
    }

    fn columns(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("id", Value::Uuid(self.id)),
            ("name", Value::Text(self.name.clone())),
            ("slug", Value::Text(self.slug.clone())),
            ("navbar_category_id", Value::Uuid(self.navbar_category_id)),
            ("description", Value::OptText(self.description.clone())),
            ("image", Value::OptText(self.image.clone())),
            ("display_order", Value::Int(self.display_order)),
            ("is_active", Value::Bool(self.is_active)),
            ("created_at", Value::Timestamp(self.created_at)),
            ("updated_at", Value::Timestamp(self.updated_at)),
        ]
    }
}

impl Sluggable for Category {
    fn name(&self) -> &str {
        &self.name
    }

    fn slug_mut(&mut self) -> &mut String {
        &mut self.slug
    }
}
