use crate::error::{Result, StockroomError};
use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// The `id` is assigned by the store and never changes afterwards; `code` is
/// caller-supplied and unique across the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub thumbnail: String,
    pub code: String,
    pub stock: u32,
}

/// Caller-supplied fields for a product about to be added.
///
/// Identical to [`Product`] minus the `id`, which only the store assigns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub thumbnail: String,
    pub code: String,
    pub stock: u32,
}

/// The shared field checks behind [`NewProduct::validate`] and
/// [`Product::validate`], so adds and merged updates are held to the same
/// rules.
fn validate_fields(
    title: &str,
    description: &str,
    thumbnail: &str,
    code: &str,
    price: f64,
) -> Result<()> {
    let mut missing = Vec::new();
    if title.trim().is_empty() {
        missing.push("title");
    }
    if description.trim().is_empty() {
        missing.push("description");
    }
    if thumbnail.trim().is_empty() {
        missing.push("thumbnail");
    }
    if code.trim().is_empty() {
        missing.push("code");
    }
    if !missing.is_empty() {
        return Err(StockroomError::MissingFields(missing));
    }
    if !price.is_finite() || price < 0.0 {
        return Err(StockroomError::InvalidPrice(price));
    }
    Ok(())
}

impl Product {
    /// Re-check the field rules on an existing record, e.g. after a patch
    /// has been merged onto it.
    pub(crate) fn validate(&self) -> Result<()> {
        validate_fields(
            &self.title,
            &self.description,
            &self.thumbnail,
            &self.code,
            self.price,
        )
    }
}

impl NewProduct {
    /// Check that every required field is actually present.
    ///
    /// Presence is explicit: blank text fields are missing, but `price: 0.0`
    /// and `stock: 0` are legitimate values (free items, sold-out items).
    /// A negative or non-finite price is rejected separately.
    pub fn validate(&self) -> Result<()> {
        validate_fields(
            &self.title,
            &self.description,
            &self.thumbnail,
            &self.code,
            self.price,
        )
    }

    pub(crate) fn into_product(self, id: u64) -> Product {
        Product {
            id,
            title: self.title,
            description: self.description,
            price: self.price,
            thumbnail: self.thumbnail,
            code: self.code,
            stock: self.stock,
        }
    }
}

/// A partial field set for `update`.
///
/// `None` fields are left untouched on the target product. There is no `id`
/// field here, so an update can never reassign an id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
}

impl ProductPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn stock(mut self, stock: u32) -> Self {
        self.stock = Some(stock);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.thumbnail.is_none()
            && self.code.is_none()
            && self.stock.is_none()
    }

    /// Merge the set fields onto `product`, leaving the rest as they were.
    pub(crate) fn apply(&self, product: &mut Product) {
        if let Some(title) = &self.title {
            product.title = title.clone();
        }
        if let Some(description) = &self.description {
            product.description = description.clone();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(thumbnail) = &self.thumbnail {
            product.thumbnail = thumbnail.clone();
        }
        if let Some(code) = &self.code {
            product.code = code.clone();
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> NewProduct {
        NewProduct {
            title: "Dragon".to_string(),
            description: "3D print".to_string(),
            price: 9000.0,
            thumbnail: "img1.jpg".to_string(),
            code: "ABC123".to_string(),
            stock: 50,
        }
    }

    #[test]
    fn validate_accepts_complete_draft() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn validate_names_every_missing_field() {
        let empty = NewProduct {
            title: String::new(),
            description: "  ".to_string(),
            price: 1.0,
            thumbnail: String::new(),
            code: String::new(),
            stock: 0,
        };
        match empty.validate() {
            Err(StockroomError::MissingFields(fields)) => {
                assert_eq!(fields, vec!["title", "description", "thumbnail", "code"]);
            }
            other => panic!("expected MissingFields, got {:?}", other),
        }
    }

    #[test]
    fn validate_accepts_zero_price_and_stock() {
        let mut free = draft();
        free.price = 0.0;
        free.stock = 0;
        assert!(free.validate().is_ok());
    }

    #[test]
    fn validate_rejects_negative_price() {
        let mut bad = draft();
        bad.price = -1.0;
        assert!(matches!(
            bad.validate(),
            Err(StockroomError::InvalidPrice(p)) if p == -1.0
        ));
    }

    #[test]
    fn validate_rejects_nan_price() {
        let mut bad = draft();
        bad.price = f64::NAN;
        assert!(matches!(
            bad.validate(),
            Err(StockroomError::InvalidPrice(_))
        ));
    }

    #[test]
    fn patch_applies_only_set_fields() {
        let mut product = draft().into_product(1);
        ProductPatch::new().price(9500.0).apply(&mut product);

        assert_eq!(product.id, 1);
        assert_eq!(product.price, 9500.0);
        assert_eq!(product.title, "Dragon");
        assert_eq!(product.stock, 50);
    }

    #[test]
    fn empty_patch_is_a_noop() {
        let mut product = draft().into_product(1);
        let before = product.clone();
        let patch = ProductPatch::new();
        assert!(patch.is_empty());
        patch.apply(&mut product);
        assert_eq!(product, before);
    }

    #[test]
    fn patch_deserializes_with_absent_fields() {
        let patch: ProductPatch = serde_json::from_str(r#"{"price": 9500}"#).unwrap();
        assert_eq!(patch.price, Some(9500.0));
        assert!(patch.title.is_none());
        assert!(patch.stock.is_none());
    }
}
