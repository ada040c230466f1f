//! List and detail navigation over a decoded catalog document.

use std::sync::Arc;
use std::time::Duration;

use parts_catalog::{Catalog, QueryState};
use parts_views::pages::{render_detail_page, render_home, ListPage};
use parts_views::{Debouncer, ViewConfig};
use pretty_assertions::assert_eq;

fn catalog() -> Arc<Catalog> {
    let products: Vec<_> = (1..=25)
        .map(|i| {
            let (brand, model) = if i % 5 == 0 {
                ("caterpillar", "320D")
            } else {
                ("komatsu", "PC200-8")
            };
            serde_json::json!({
                "id": format!("KWSK-{:06}", i),
                "name": format!("Part {}", i),
                "partNumber": format!("{}-HYD-{:04}", &brand[..3].to_uppercase(), i),
                "brand": brand,
                "model": [model],
                "category": "hydraulic",
                "stock": i,
                "stockStatus": "in-stock",
                "images": [format!("https://img.example/{}.png", i)]
            })
        })
        .collect();
    let document = serde_json::json!({ "products": products });
    Arc::new(Catalog::from_json(document.to_string().as_bytes()).unwrap())
}

#[test]
fn browse_search_and_go_back() {
    let config = ViewConfig::default();
    let mut page = ListPage::from_location(catalog(), &config, "");
    let mut history = vec![page.location()];

    assert!(page.go_to_page(3));
    history.push(page.location());
    assert_eq!(page.current().items.len(), 1);

    page.search("320d");
    history.push(page.location());
    assert_eq!(page.current().total_count, 5);
    assert_eq!(page.state(), &QueryState::new("320d", 1));

    // Back to page 3 of the unfiltered list.
    let previous = &history[1];
    let query = previous.split_once('?').map(|(_, q)| q).unwrap_or("");
    page.pop_state(query);
    assert_eq!(page.state(), &QueryState::new("", 3));
    assert_eq!(page.current().items[0].id.as_str(), "KWSK-000025");

    assert_eq!(
        history,
        vec![
            "products.html".to_string(),
            "products.html?page=3".to_string(),
            "products.html?search=320d".to_string(),
        ]
    );
}

#[test]
fn shared_link_with_stale_page_is_clamped() {
    let page = ListPage::from_location(catalog(), &ViewConfig::default(), "page=4&search=pc200");
    assert_eq!(page.state().page, 2);
    let html = page.render();
    assert!(html.contains("Page 2 of 2 | Showing 13-20 of 20 products"));
    assert!(html.contains(r#"<span id="search-count">20</span>"#));
}

#[test]
fn detail_page_shows_related_cards() {
    let catalog = catalog();
    let html = render_detail_page(
        Ok(&*catalog),
        "product-detail.html?id=KWSK-000005",
        &ViewConfig::default(),
    );
    assert!(html.contains("<h1>Part 5</h1>"));
    assert!(html.contains("<strong>SKU:</strong> CAT-HYD-0005"));
    assert!(html.contains("Part#: KOM-HYD-0001"));
    assert_eq!(html.matches("class=\"product-card\"").count(), 6);
}

#[test]
fn home_page_features_first_products() {
    let catalog = catalog();
    let html = render_home(Ok(&*catalog), &ViewConfig::default());
    assert!(html.contains(r#"alt="https://img.example/1.png""#));
    assert_eq!(html.matches("class=\"product-card\"").count(), 8);
}

#[tokio::test(start_paused = true)]
async fn typed_search_runs_once_and_returns_to_first_page() {
    let config = ViewConfig::default();
    let mut page = ListPage::from_location(catalog(), &config, "page=3");
    assert_eq!(page.state().page, 3);

    let (debouncer, mut emitted) = Debouncer::spawn(config.debounce());
    for text in ["3", "32", "320", "320d"] {
        assert!(debouncer.push(text));
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    let text = emitted.recv().await.unwrap();
    page.search(&text);
    debouncer.close().await;

    let mut searches = 1;
    while let Some(text) = emitted.recv().await {
        page.search(&text);
        searches += 1;
    }

    assert_eq!(searches, 1);
    assert_eq!(page.state(), &QueryState::new("320d", 1));
    assert_eq!(page.current().total_count, 5);
    assert_eq!(page.location(), "products.html?search=320d");
}
