//! Product types.
//!
//! Products are decoded straight from the catalog document. Legacy shapes
//! (`model` as a bare string, images as bare URLs) are normalized here, once,
//! so the rest of the crate only ever sees the canonical shape.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::ids::ProductId;

/// Specification key consulted when a product has no explicit price.
pub const PRICE_RANGE_SPEC: &str = "Price Range";

/// Text shown when a product is priced on request.
pub const CONTACT_FOR_PRICING: &str = "Contact for pricing";

/// Stock availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    #[default]
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::InStock => "in-stock",
            StockStatus::LowStock => "low-stock",
            StockStatus::OutOfStock => "out-of-stock",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "in-stock" => Some(StockStatus::InStock),
            "low-stock" => Some(StockStatus::LowStock),
            "out-of-stock" => Some(StockStatus::OutOfStock),
            _ => None,
        }
    }

    /// CSS class used by the views; identical to the wire name.
    pub fn css_class(&self) -> &'static str {
        self.as_str()
    }

    /// Icon name for the stock line.
    pub fn icon(&self) -> &'static str {
        match self {
            StockStatus::InStock => "check-circle",
            StockStatus::LowStock => "exclamation-circle",
            StockStatus::OutOfStock => "times-circle",
        }
    }

    /// Human-readable stock line.
    pub fn label(&self, stock: u32) -> String {
        match self {
            StockStatus::InStock => format!("In Stock: {} units", stock),
            StockStatus::LowStock => "Low Stock".to_string(),
            StockStatus::OutOfStock => "Out of Stock".to_string(),
        }
    }
}

/// A product image.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProductImage {
    pub url: String,
    /// Alt text; empty when the source did not provide one.
    pub alt: String,
}

impl ProductImage {
    pub fn new(url: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt: alt.into(),
        }
    }

    /// Alt text, or `fallback` when none was provided.
    pub fn alt_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.alt.is_empty() {
            fallback
        } else {
            &self.alt
        }
    }
}

impl<'de> Deserialize<'de> for ProductImage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawImage {
            Url(String),
            Full {
                url: String,
                #[serde(default)]
                alt: Option<String>,
            },
        }

        Ok(match RawImage::deserialize(deserializer)? {
            RawImage::Url(url) => ProductImage {
                alt: url.clone(),
                url,
            },
            RawImage::Full { url, alt } => ProductImage {
                url,
                alt: alt.unwrap_or_default(),
            },
        })
    }
}

/// Explicit price as it appears in the document: free text or a number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PriceTag {
    Amount(f64),
    Text(String),
}

impl PriceTag {
    /// Whether the tag carries a displayable value (non-empty text, non-zero amount).
    pub fn is_present(&self) -> bool {
        match self {
            PriceTag::Amount(amount) => *amount != 0.0 && !amount.is_nan(),
            PriceTag::Text(text) => !text.is_empty(),
        }
    }
}

impl fmt::Display for PriceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceTag::Amount(amount) => write!(f, "{}", amount),
            PriceTag::Text(text) => write!(f, "{}", text),
        }
    }
}

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oem_number: Option<String>,
    #[serde(default)]
    pub brand: String,
    /// Compatible model names. Accepts a single string in legacy data.
    #[serde(default, deserialize_with = "one_or_many")]
    pub model: Vec<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub subcategory: String,
    #[serde(default)]
    pub has_price: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceTag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_position: Option<String>,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub stock_status: StockStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
    #[serde(default)]
    pub images: Vec<ProductImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub specifications: BTreeMap<String, String>,
    #[serde(default)]
    pub compatibility: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Product {
    /// Create a product with only the required fields set.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, brand: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            part_number: None,
            oem_number: None,
            brand: brand.into(),
            model: Vec::new(),
            category: String::new(),
            subcategory: String::new(),
            has_price: false,
            price: None,
            price_position: None,
            stock: 0,
            stock_status: StockStatus::default(),
            lead_time: None,
            weight: None,
            dimensions: None,
            images: Vec::new(),
            description: None,
            specifications: BTreeMap::new(),
            compatibility: Vec::new(),
            features: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Part number, empty when absent.
    pub fn part_number(&self) -> &str {
        self.part_number.as_deref().unwrap_or("")
    }

    /// OEM number, empty when absent.
    pub fn oem_number(&self) -> &str {
        self.oem_number.as_deref().unwrap_or("")
    }

    /// Model names joined with `separator`.
    pub fn model_display(&self, separator: &str) -> String {
        self.model.join(separator)
    }

    pub fn primary_image(&self) -> Option<&ProductImage> {
        self.images.first()
    }

    /// Price from the explicit field, then the price-range specification.
    fn explicit_price(&self) -> Option<String> {
        if let Some(price) = self.price.as_ref().filter(|p| p.is_present()) {
            return Some(price.to_string());
        }
        self.specifications
            .get(PRICE_RANGE_SPEC)
            .filter(|range| !range.is_empty())
            .cloned()
    }

    /// Price line for product cards.
    ///
    /// Falls back to "Contact for pricing" only when `hasPrice` is set;
    /// otherwise no price line is shown.
    pub fn list_price(&self) -> Option<String> {
        self.explicit_price().or_else(|| {
            self.has_price
                .then(|| CONTACT_FOR_PRICING.to_string())
        })
    }

    /// Price line for the detail page; always has a value.
    pub fn detail_price(&self) -> String {
        self.explicit_price()
            .unwrap_or_else(|| CONTACT_FOR_PRICING.to_string())
    }

    /// Stock line for the detail page.
    pub fn stock_label(&self) -> String {
        self.stock_status.label(self.stock)
    }

    /// Builder-style helper used by fixtures and the generator.
    pub fn with_models<I, S>(mut self, models: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.model = models.into_iter().map(Into::into).collect();
        self
    }
}

/// Accept `null`, a single string, or a string sequence.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(single)) if single.trim().is_empty() => Vec::new(),
        Some(OneOrMany::One(single)) => vec![single],
        Some(OneOrMany::Many(many)) => many,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: serde_json::Value) -> Product {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_minimal_product() {
        let product = decode(json!({"id": "KWSK-000001", "name": "Pump"}));
        assert_eq!(product.id.as_str(), "KWSK-000001");
        assert_eq!(product.part_number(), "");
        assert!(product.model.is_empty());
        assert_eq!(product.stock_status, StockStatus::InStock);
    }

    #[test]
    fn test_model_single_string_is_normalized() {
        let product = decode(json!({"id": "a", "name": "n", "model": "PC200-8"}));
        assert_eq!(product.model, vec!["PC200-8".to_string()]);

        let product = decode(json!({"id": "a", "name": "n", "model": ""}));
        assert!(product.model.is_empty());

        let product = decode(json!({"id": "a", "name": "n", "model": null}));
        assert!(product.model.is_empty());
    }

    #[test]
    fn test_model_sequence() {
        let product = decode(json!({"id": "a", "name": "n", "model": ["320D", "320DL"]}));
        assert_eq!(product.model_display(", "), "320D, 320DL");
    }

    #[test]
    fn test_image_shapes() {
        let product = decode(json!({
            "id": "a",
            "name": "n",
            "images": [
                "https://img/1.png",
                {"url": "https://img/2.png", "alt": "side view"},
                {"url": "https://img/3.png"}
            ]
        }));
        assert_eq!(product.images[0], ProductImage::new("https://img/1.png", "https://img/1.png"));
        assert_eq!(product.images[1].alt, "side view");
        assert_eq!(product.images[2].alt_or("fallback"), "fallback");
    }

    #[test]
    fn test_stock_status_wire_names() {
        let product = decode(json!({"id": "a", "name": "n", "stock": 4, "stockStatus": "low-stock"}));
        assert_eq!(product.stock_status, StockStatus::LowStock);
        assert_eq!(product.stock_label(), "Low Stock");
        assert_eq!(StockStatus::from_str("OUT-OF-STOCK"), Some(StockStatus::OutOfStock));
        assert_eq!(StockStatus::InStock.label(12), "In Stock: 12 units");
    }

    #[test]
    fn test_price_precedence() {
        let mut product = Product::new("a", "n", "komatsu");
        assert_eq!(product.list_price(), None);
        assert_eq!(product.detail_price(), CONTACT_FOR_PRICING);

        product.has_price = true;
        assert_eq!(product.list_price().as_deref(), Some(CONTACT_FOR_PRICING));

        product
            .specifications
            .insert(PRICE_RANGE_SPEC.to_string(), "$800 - $1,200".to_string());
        assert_eq!(product.list_price().as_deref(), Some("$800 - $1,200"));
        assert_eq!(product.detail_price(), "$800 - $1,200");

        product.price = Some(PriceTag::Text("$950".to_string()));
        assert_eq!(product.list_price().as_deref(), Some("$950"));
        assert_eq!(product.detail_price(), "$950");
    }

    #[test]
    fn test_blank_price_falls_through() {
        let mut product = Product::new("a", "n", "komatsu");
        product.price = Some(PriceTag::Text(String::new()));
        product.has_price = true;
        assert_eq!(product.list_price().as_deref(), Some(CONTACT_FOR_PRICING));

        product.price = Some(PriceTag::Amount(0.0));
        assert_eq!(product.detail_price(), CONTACT_FOR_PRICING);
    }

    #[test]
    fn test_numeric_price() {
        let product = decode(json!({"id": "a", "name": "n", "price": 1200}));
        assert_eq!(product.detail_price(), "1200");
    }

    #[test]
    fn test_serialize_camel_case() {
        let mut product = Product::new("a", "n", "volvo").with_models(["EC210"]);
        product.part_number = Some("VOL-PUM-0001".to_string());
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["partNumber"], "VOL-PUM-0001");
        assert_eq!(value["stockStatus"], "in-stock");
        assert_eq!(value["model"], json!(["EC210"]));
        assert!(value.get("oemNumber").is_none());
    }
}
