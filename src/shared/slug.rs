/// Turn a display name into a URL slug.
///
/// Lowercases and trims the name, collapses every run of characters outside
/// `[a-z0-9]` into a single hyphen and strips hyphens from both ends.
/// Two names that differ only in case or punctuation produce the same slug.
pub fn slugify(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_hyphen = false;

    for c in lowered.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::SLUG_REGEX;
    use fake::faker::company::en::CompanyName;
    use fake::faker::lorem::en::Sentence;
    use fake::Fake;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Managed Switches"), "managed-switches");
        assert_eq!(slugify("  Wi-Fi 6E / Access Points  "), "wi-fi-6e-access-points");
        assert_eq!(slugify("10G SFP+ Modules"), "10g-sfp-modules");
        assert_eq!(slugify("--PoE++--"), "poe");
    }

    #[test]
    fn test_slugify_empty_and_symbols() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify("Café Routers"), "caf-routers");
    }

    #[test]
    fn test_slugify_collisions() {
        assert_eq!(slugify("Core Switches"), slugify("core   SWITCHES"));
        assert_eq!(slugify("Core Switches"), slugify("Core-Switches!"));
    }

    #[test]
    fn test_slugify_idempotent() {
        for _ in 0..200 {
            let name: String = if rand_bool() {
                CompanyName().fake()
            } else {
                Sentence(1..6).fake()
            };
            let once = slugify(&name);
            assert_eq!(slugify(&once), once, "not idempotent for {:?}", name);
            if !once.is_empty() {
                assert!(SLUG_REGEX.is_match(&once), "bad slug {:?} for {:?}", once, name);
            }
        }
    }

    fn rand_bool() -> bool {
        fake::Faker.fake::<bool>()
    }
}
