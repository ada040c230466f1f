//! Sample catalog generator.
//!
//! Fabricates a catalog document with a realistic brand, category and stock
//! mix. A fixed seed reproduces the same document.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use parts_catalog::catalog::{BrandSummary, CatalogDocument, CatalogMeta, CategorySummary, ProductImage};
use parts_catalog::search::params::encode_component;
use parts_catalog::{Product, ProductId, StockStatus};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Products per page recorded in the document meta.
pub const META_PRODUCTS_PER_PAGE: u32 = 15;

/// Brands in generation order with their product counts.
pub static BRAND_COUNTS: [(&str, usize); 8] = [
    ("komatsu", 150),
    ("caterpillar", 120),
    ("hitachi", 90),
    ("volvo", 50),
    ("doosan", 30),
    ("liebherr", 20),
    ("kobelco", 20),
    ("hyundai", 20),
];

/// Brands listed individually in the summary; the rest roll into "Others".
const TOP_BRANDS: usize = 5;

struct CategorySpec {
    id: &'static str,
    name: &'static str,
    share: f64,
    subcategories: [&'static str; 5],
}

static CATEGORIES: [CategorySpec; 4] = [
    CategorySpec {
        id: "hydraulic",
        name: "Hydraulic Components",
        share: 0.40,
        subcategories: ["travel-motors", "swing-motors", "pumps", "valves", "cylinders"],
    },
    CategorySpec {
        id: "engine",
        name: "Engine Parts",
        share: 0.25,
        subcategories: ["filters", "injectors", "turbochargers", "water-pumps", "starters"],
    },
    CategorySpec {
        id: "undercarriage",
        name: "Undercarriage",
        share: 0.20,
        subcategories: ["track-links", "rollers", "sprockets", "idlers", "track-shoes"],
    },
    CategorySpec {
        id: "electrical",
        name: "Electrical",
        share: 0.15,
        subcategories: ["sensors", "controllers", "displays", "switches", "relays"],
    },
];

fn models_for(brand: &str) -> &'static [&'static str] {
    match brand {
        "komatsu" => &["PC200-8", "PC200LC-8", "PC220-8", "PC300-8", "PC350-8"],
        "caterpillar" => &["320D", "320DL", "325D", "330D", "336D"],
        "hitachi" => &["ZX200", "ZX210", "ZX240", "ZX250", "ZX330"],
        "volvo" => &["EC200", "EC210", "EC240", "EC250", "EC300"],
        "doosan" => &["DX200", "DX210", "DX225", "DX300"],
        "liebherr" => &["R900", "R910", "R920", "R930"],
        "kobelco" => &["SK200", "SK210", "SK235", "SK260"],
        "hyundai" => &["R200", "R210", "R250", "R300"],
        _ => &["Model A", "Model B"],
    }
}

/// Upper-case the first character.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// First `n` characters, upper-cased.
fn prefix_upper(text: &str, n: usize) -> String {
    text.chars().take(n).collect::<String>().to_uppercase()
}

/// Catalog generator.
pub struct Generator {
    rng: StdRng,
}

impl Generator {
    /// Seeded generator, or an entropy-seeded one.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Total number of products a run produces.
    pub fn total_products() -> usize {
        BRAND_COUNTS.iter().map(|(_, count)| count).sum()
    }

    /// Generate the full document, calling `on_product` after each product.
    pub fn generate(&mut self, today: NaiveDate, mut on_product: impl FnMut(&Product)) -> CatalogDocument {
        let mut products = Vec::with_capacity(Self::total_products());
        let mut next_id = 1u32;

        for (brand, count) in BRAND_COUNTS {
            for _ in 0..count {
                let product = self.product(next_id, brand);
                on_product(&product);
                products.push(product);
                next_id += 1;
            }
        }

        let total = products.len() as u32;
        let meta = CatalogMeta {
            total_products: total,
            products_per_page: META_PRODUCTS_PER_PAGE,
            total_pages: total.div_ceil(META_PRODUCTS_PER_PAGE),
            last_updated: today.format("%Y-%m-%d").to_string(),
        };

        CatalogDocument {
            meta,
            categories: category_summaries(&products),
            brands: brand_summaries(&products),
            products,
        }
    }

    fn pick_category(&mut self) -> &'static CategorySpec {
        let roll: f64 = self.rng.gen();
        let mut cumulative = 0.0;
        for category in &CATEGORIES {
            cumulative += category.share;
            if roll <= cumulative {
                return category;
            }
        }
        &CATEGORIES[0]
    }

    fn product(&mut self, n: u32, brand: &str) -> Product {
        let models = models_for(brand);
        let category = self.pick_category();
        let subcategory = category.subcategories[self.rng.gen_range(0..category.subcategories.len())];

        let part_name = subcategory
            .split('-')
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ");
        let part_name_lower = part_name.to_lowercase();
        let model = models[self.rng.gen_range(0..models.len())];
        let brand_name = capitalize(brand);

        let (stock_status, stock) = {
            let roll: f64 = self.rng.gen();
            if roll > 0.7 {
                (StockStatus::InStock, self.rng.gen_range(10..60))
            } else if roll > 0.3 {
                (StockStatus::LowStock, self.rng.gen_range(1..11))
            } else {
                (StockStatus::OutOfStock, 0)
            }
        };
        let lead_time = match stock_status {
            StockStatus::InStock => "3-5 business days",
            StockStatus::LowStock => "1-2 weeks",
            StockStatus::OutOfStock => "4-8 weeks",
        };

        let images = vec![
            ProductImage::new(
                format!(
                    "https://via.placeholder.com/600x400/1a365d/ffffff?text={}",
                    encode_component(&format!("{} {}", brand, part_name))
                ),
                format!(
                    "{} {} {} front view showing mounting points and connection ports",
                    brand_name, model, part_name_lower
                ),
            ),
            ProductImage::new(
                format!(
                    "https://via.placeholder.com/600x400/2d3748/ffffff?text={}",
                    encode_component(&format!("{} {} Side", brand, part_name))
                ),
                format!(
                    "{} {} side view displaying identification plate and technical specifications",
                    brand_name, part_name_lower
                ),
            ),
        ];

        let is_motor = subcategory.contains("motor");
        let mut specifications = BTreeMap::new();
        let pressure = if is_motor || subcategory.contains("pump") {
            format!("{} bar", self.rng.gen_range(200..600))
        } else {
            "N/A".to_string()
        };
        specifications.insert("Maximum Pressure".to_string(), pressure);
        specifications.insert("Weight".to_string(), self.weight());
        specifications.insert("Material".to_string(), "High-grade steel".to_string());
        specifications.insert("Warranty".to_string(), "12 months".to_string());
        if is_motor {
            specifications.insert(
                "Displacement".to_string(),
                format!("{} cc/rev", self.rng.gen_range(30..80)),
            );
            specifications.insert("Rotation".to_string(), "Clockwise".to_string());
        }

        let compatibility: Vec<String> = models.iter().take(3).map(|m| m.to_string()).collect();

        let mut tags = Vec::new();
        if self.rng.gen::<f64>() > 0.7 {
            tags.push("best-seller".to_string());
        }
        if self.rng.gen::<f64>() > 0.8 {
            tags.push("new-arrival".to_string());
        }
        tags.push(brand.to_string());

        let mut product = Product::new(
            ProductId::sequential(n),
            format!("{} {} {}", brand_name, model, part_name),
            brand,
        )
        .with_models(compatibility.iter().cloned());
        product.part_number = Some(format!(
            "{}-{}-{:04}",
            prefix_upper(brand, 3),
            prefix_upper(subcategory, 3),
            n
        ));
        product.oem_number = Some(format!(
            "{}{}",
            prefix_upper(brand, 2),
            self.rng.gen_range(1000..10000)
        ));
        product.category = category.id.to_string();
        product.subcategory = subcategory.to_string();
        product.has_price = true;
        product.price_position = Some("after-name".to_string());
        product.stock = stock;
        product.stock_status = stock_status;
        product.lead_time = Some(lead_time.to_string());
        product.weight = Some(self.weight());
        product.dimensions = Some(format!(
            "{}×{}×{} cm",
            self.rng.gen_range(10..60),
            self.rng.gen_range(10..50),
            self.rng.gen_range(10..40)
        ));
        product.images = images;
        product.description = Some(format!(
            "High-quality {} for {} {} excavator. OEM-grade replacement part with full warranty and technical support.",
            part_name_lower, brand_name, model
        ));
        product.specifications = specifications;
        product.compatibility = compatibility;
        product.features = vec![
            "OEM quality".to_string(),
            "Full warranty".to_string(),
            "Fast shipping".to_string(),
        ];
        product.tags = tags;
        product
    }

    fn weight(&mut self) -> String {
        format!("{:.1} kg", self.rng.gen_range(5.0..105.0))
    }
}

fn category_summaries(products: &[Product]) -> Vec<CategorySummary> {
    CATEGORIES
        .iter()
        .map(|category| CategorySummary {
            id: category.id.into(),
            name: category.name.to_string(),
            count: products.iter().filter(|p| p.category == category.id).count() as u32,
        })
        .collect()
}

fn brand_summaries(products: &[Product]) -> Vec<BrandSummary> {
    let top = &BRAND_COUNTS[..TOP_BRANDS];
    let count_of = |brand: &str| products.iter().filter(|p| p.brand == brand).count() as u32;

    let mut summaries: Vec<BrandSummary> = top
        .iter()
        .map(|(brand, _)| BrandSummary {
            id: (*brand).into(),
            name: capitalize(brand),
            count: count_of(brand),
        })
        .collect();

    let others = products
        .iter()
        .filter(|p| !top.iter().any(|(brand, _)| p.brand == *brand))
        .count() as u32;
    summaries.push(BrandSummary {
        id: "others".into(),
        name: "Others".to_string(),
        count: others,
    });

    summaries
}
