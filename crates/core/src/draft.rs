//! Typed form draft and the validation pipeline.

use crate::error::{ValidationError, ValidationResult};
use crate::product::NewProduct;

/// Raw form field values, exactly as entered.
///
/// The form surface collects loose strings; this struct carries them into
/// [`ProductDraft::validate`], which parses them into a [`NewProduct`]
/// payload. Keeping the raw strings means a failed submission re-presents
/// exactly what the user typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub title: String,
    pub price: String,
    pub category_id: String,
    pub image_url: String,
    pub description: String,
}

impl ProductDraft {
    /// Run the validation pipeline and build the creation payload.
    ///
    /// Checks run in a fixed order (title, price, image, category id); the
    /// first failure wins. No network activity happens on any path here.
    pub fn validate(&self) -> ValidationResult<NewProduct> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::TitleRequired);
        }

        let price: f64 = self
            .price
            .trim()
            .parse()
            .map_err(|_| ValidationError::PriceNotPositive)?;
        // "NaN" parses successfully; treat it like any non-positive value.
        if price.is_nan() || price <= 0.0 {
            return Err(ValidationError::PriceNotPositive);
        }

        let image = self.image_url.trim();
        if image.is_empty() {
            return Err(ValidationError::ImageRequired);
        }

        let category_id: i64 = self
            .category_id
            .trim()
            .parse()
            .map_err(|_| ValidationError::CategoryNotInteger)?;

        Ok(NewProduct {
            title: title.to_string(),
            price,
            description: self.description.trim().to_string(),
            category_id,
            images: vec![image.to_string()],
        })
    }
}
