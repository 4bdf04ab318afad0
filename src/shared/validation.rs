use lazy_static::lazy_static;
use regex::Regex;

use crate::core::error::AppError;
use crate::shared::constants::MAX_PRODUCT_IMAGES;

lazy_static! {
    /// Shape of every generated slug
    /// Must be lowercase alphanumeric with single hyphens between segments
    /// - Valid: "cisco-catalyst-9200", "sfp28", "a-b-c"
    /// - Invalid: "-switch", "switch-", "poe--switch", "Switch", "poe_switch"
    pub static ref SLUG_REGEX: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();

    /// Loose phone number check for enquiry forms
    /// Digits with optional leading '+', spaces, dashes and parentheses
    /// - Valid: "+62 812-3456-7890", "(021) 555 0199", "5550199"
    /// - Invalid: "call me", "12", "+62#812"
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^\+?[0-9 ()\-]{6,20}$").unwrap();

    /// Absolute http(s) URL or site-relative path, used for image references
    pub static ref IMAGE_URL_REGEX: Regex = Regex::new(r"^(https?://\S+|/\S*)$").unwrap();
}

/// Normalize an optional image reference from an update body: empty clears it
pub fn optional_image(image: String) -> Result<Option<String>, AppError> {
    let image = image.trim();
    if image.is_empty() {
        return Ok(None);
    }
    if !IMAGE_URL_REGEX.is_match(image) {
        return Err(AppError::Validation(
            "image: Image must be an http(s) URL or a site path".to_string(),
        ));
    }
    Ok(Some(image.to_string()))
}

/// Check a product image list: one to four http(s) URLs or site paths
pub fn image_list(images: &[String]) -> Result<(), AppError> {
    if images.is_empty() || images.len() > MAX_PRODUCT_IMAGES {
        return Err(AppError::Validation(format!(
            "images: A product needs between 1 and {} images",
            MAX_PRODUCT_IMAGES
        )));
    }
    if let Some(bad) = images.iter().find(|url| !IMAGE_URL_REGEX.is_match(url)) {
        return Err(AppError::Validation(format!(
            "images: '{}' is not an http(s) URL or a site path",
            bad
        )));
    }
    Ok(())
}
