use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::modules::store::{Document, Sluggable, Value};

/// Database model for a navbar category (root of the catalog hierarchy)
#[derive(Debug, Clone, FromRow)]
#[cfg_attr(test, derive(fake::Dummy))]
pub struct NavbarCategory {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document for NavbarCategory {
    const COLLECTION: &'static str = "navbar_categories";
    const ENTITY: &'static str = "navbar category";
    const UNIQUE: &'static [&'static str] = &["name", "slug"];

    fn id(&self) -> Uuid {
        self.id
    }

    fn columns(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("id", Value::Uuid(self.id)),
            ("name", Value::Text(self.name.clone())),
            ("slug", Value::Text(self.slug.clone())),
            ("description", Value::OptText(self.description.clone())),
            ("display_order", Value::Int(self.display_order)),
            ("is_active", Value::Bool(self.is_active)),
            ("created_at", Value::Timestamp(self.created_at)),
            ("updated_at", Value::Timestamp(self.updated_at)),
        ]
    }
}

impl Sluggable for NavbarCategory {
    fn name(&self) -> &str {
        &self.name
    }

    fn slug_mut(&mut self) -> &mut String {
        &mut self.slug
    }
}
