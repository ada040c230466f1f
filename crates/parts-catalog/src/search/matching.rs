//! Free-text matching.
//!
//! Search is plain membership: a product matches when the normalized token
//! is a contiguous substring of one of its searchable fields. There is no
//! ranking, so the result keeps catalog order.

use crate::catalog::Product;

/// Lowercase and trim a search string. An empty token means "no filter".
pub fn normalize(search_text: &str) -> String {
    search_text.trim().to_lowercase()
}

/// Whether `product` matches an already-normalized `token`.
///
/// Checked fields: name, part number, OEM number, brand and the
/// space-joined model list.
pub fn matches(product: &Product, token: &str) -> bool {
    if token.is_empty() {
        return true;
    }

    let contains = |field: &str| field.to_lowercase().contains(token);

    contains(&product.name)
        || contains(product.part_number())
        || contains(product.oem_number())
        || contains(&product.brand)
        || contains(&product.model_display(" "))
}

/// All products matching `token`, in their original order.
pub fn filter<'a>(products: &'a [Product], token: &str) -> Vec<&'a Product> {
    products.iter().filter(|p| matches(p, token)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn excavator_part(id: &str, name: &str, brand: &str, models: &[&str]) -> Product {
        Product::new(id, name, brand).with_models(models.iter().copied())
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  PC200 Pump \t"), "pc200 pump");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize(&normalize(" MiXeD ")), normalize(" MiXeD "));
    }

    #[test]
    fn test_empty_token_matches_everything() {
        let product = Product::new("1", "Anything", "volvo");
        assert!(matches(&product, ""));
    }

    #[test]
    fn test_model_match_is_case_insensitive() {
        let product = excavator_part("1", "Travel Motor", "komatsu", &["PC200-8"]);
        assert!(matches(&product, &normalize("pc200")));
        assert!(matches(&product, "pc200-8"));
    }

    #[test]
    fn test_joined_models_are_searchable_across_boundary() {
        let product = excavator_part("1", "Pump", "hitachi", &["ZX200", "ZX210"]);
        assert!(matches(&product, "zx200 zx210"));
        assert!(!matches(&product, "zx200,zx210"));
    }

    #[test]
    fn test_part_and_oem_numbers() {
        let mut product = Product::new("1", "Valve", "doosan");
        product.part_number = Some("DOO-VAL-0042".to_string());
        product.oem_number = Some("DO4711".to_string());
        assert!(matches(&product, "val-0042"));
        assert!(matches(&product, "do4711"));
    }

    #[test]
    fn test_missing_codes_do_not_match() {
        let product = Product::new("1", "Valve", "doosan");
        assert!(!matches(&product, "n/a"));
    }

    #[test]
    fn test_substring_not_fuzzy() {
        let product = Product::new("1", "Swing Motor", "kobelco");
        assert!(matches(&product, "ing mot"));
        assert!(!matches(&product, "motor swing"));
        assert!(!matches(&product, "swng"));
    }

    #[test]
    fn test_description_is_not_searched() {
        let mut product = Product::new("1", "Idler", "liebherr");
        product.description = Some("heavy duty".to_string());
        assert!(!matches(&product, "heavy"));
    }

    #[test]
    fn test_filter_preserves_order() {
        let products = vec![
            excavator_part("1", "Pump", "komatsu", &["PC200-8"]),
            excavator_part("2", "Pump", "caterpillar", &["320D"]),
            excavator_part("3", "Sensor", "komatsu", &["PC300-8"]),
        ];
        let ids: Vec<_> = filter(&products, "komatsu")
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(filter(&products, "").len(), 3);
        assert!(filter(&products, "excavator").is_empty());
    }
}
