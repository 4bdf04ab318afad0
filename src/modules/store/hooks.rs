use crate::core::error::{AppError, Result};
use crate::shared::slug::slugify;

/// Documents whose slug is derived from their name
pub trait Sluggable {
    fn name(&self) -> &str;
    fn slug_mut(&mut self) -> &mut String;
}

/// Pre-save hook shared by every sluggable collection.
///
/// Computes the slug for a new document (`previous` is `None`) or when the
/// name changed; otherwise the stored slug is kept as is.
pub fn before_save<T: Sluggable>(doc: &mut T, previous: Option<&T>) -> Result<()> {
    if let Some(previous) = previous {
        if previous.name() == doc.name() {
            return Ok(());
        }
    }

    let slug = slugify(doc.name());
    if slug.is_empty() {
        return Err(AppError::Validation(format!(
            "name '{}' must contain at least one letter or digit",
            doc.name()
        )));
    }

    *doc.slug_mut() = slug;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Named {
        name: String,
        slug: String,
    }

    impl Sluggable for Named {
        fn name(&self) -> &str {
            &self.name
        }

        fn slug_mut(&mut self) -> &mut String {
            &mut self.slug
        }
    }

    fn named(name: &str, slug: &str) -> Named {
        Named {
            name: name.to_string(),
            slug: slug.to_string(),
        }
    }

    #[test]
    fn new_document_gets_slug() {
        let mut doc = named("Fiber Optic Cables", "");
        before_save(&mut doc, None).unwrap();
        assert_eq!(doc.slug, "fiber-optic-cables");
    }

    #[test]
    fn unchanged_name_keeps_existing_slug() {
        let previous = named("Routers", "legacy-routers");
        let mut doc = previous.clone();
        before_save(&mut doc, Some(&previous)).unwrap();
        assert_eq!(doc.slug, "legacy-routers");
    }

    #[test]
    fn renamed_document_gets_new_slug() {
        let previous = named("Routers", "routers");
        let mut doc = named("Edge Routers", "routers");
        before_save(&mut doc, Some(&previous)).unwrap();
        assert_eq!(doc.slug, "edge-routers");
    }

    #[test]
    fn name_without_alphanumerics_is_rejected() {
        let mut doc = named("???", "");
        assert!(matches!(
            before_save(&mut doc, None),
            Err(AppError::Validation(_))
        ));
    }
}
