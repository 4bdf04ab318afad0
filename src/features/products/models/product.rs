use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::modules::store::{Document, Sluggable, Value};

/// Database model for product
///
/// `images` holds one to four URLs, the first one being the cover image.
#[derive(Debug, Clone, FromRow)]
#[cfg_attr(test, derive(fake::Dummy))]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub key_features: Vec<String>,
    pub images: Vec<String>,
    pub navbar_category_id: Uuid,
    pub category_id: Uuid,
    pub subcategory_id: Option<Uuid>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document for Product {
    const COLLECTION: &'static str = "products";
    const ENTITY: &'static str = "product";
    const UNIQUE: &'static [&'static str] = &["slug"];

    fn id(&self) -> Uuid {
        self.id
    }

    fn columns(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("id", Value::Uuid(self.id)),
            ("name", Value::Text(self.name.clone())),
            ("slug", Value::Text(self.slug.clone())),
            ("description", Value::Text(self.description.clone())),
            ("key_features", Value::TextList(self.key_features.clone())),
            ("images", Value::TextList(self.images.clone())),
            ("navbar_category_id", Value::Uuid(self.navbar_category_id)),
            ("category_id", Value::Uuid(self.category_id)),
            ("subcategory_id", Value::OptUuid(self.subcategory_id)),
            ("display_order", Value::Int(self.display_order)),
            ("is_active", Value::Bool(self.is_active)),
            ("created_at", Value::Timestamp(self.created_at)),
            ("updated_at", Value::Timestamp(self.updated_at)),
        ]
    }
}

impl Sluggable for Product {
    fn name(&self) -> &str {
        &self.name
    }

    fn slug_mut(&mut self) -> &mut String {
        &mut self.slug
    }
}
