//! Pagination control.

use parts_catalog::search::PageLink;
use parts_catalog::{Pager, QueryState};

use crate::links::list_href;

/// Render the pager for `pager`, linking pages of `state`'s search.
///
/// `container_id` distinguishes the top and bottom controls.
pub fn render_pagination(pager: &Pager, state: &QueryState, container_id: &str) -> String {
    let link = |page: u32| {
        list_href(&QueryState {
            search_text: state.search_text.clone(),
            page,
        })
    };

    let mut html = String::new();

    html.push_str(&nav_button("First", None, link(1), 1, pager.is_first()));
    html.push_str(&nav_button(
        "&lsaquo;",
        Some("Previous page"),
        link(pager.prev_page()),
        pager.prev_page(),
        !pager.has_prev,
    ));

    for entry in pager.window() {
        match entry {
            PageLink::Page(n) if n == pager.page => {
                html.push_str(&format!(
                    r#"<span class="pagination-btn active" aria-current="page">{}</span>"#,
                    n
                ));
            }
            PageLink::Page(n) => {
                html.push_str(&format!(
                    r#"<a class="pagination-btn" href="{}" data-page="{}">{}</a>"#,
                    link(n),
                    n,
                    n
                ));
            }
            PageLink::Ellipsis => {
                html.push_str(r#"<span class="pagination-dots">...</span>"#);
            }
        }
    }

    html.push_str(&nav_button(
        "&rsaquo;",
        Some("Next page"),
        link(pager.next_page()),
        pager.next_page(),
        !pager.has_next,
    ));
    html.push_str(&nav_button(
        "Last",
        None,
        link(pager.total_pages),
        pager.total_pages,
        pager.is_last(),
    ));

    format!(
        r#"<nav class="pagination" id="{}" aria-label="Pagination">{}
    <div class="pagination-info">{}</div>
</nav>"#,
        container_id,
        html,
        pagination_info(pager)
    )
}

/// "Page X of Y | Showing a-b of n products".
pub fn pagination_info(pager: &Pager) -> String {
    format!(
        "Page {} of {} | Showing {}-{} of {} products",
        pager.page,
        pager.total_pages,
        pager.start_item(),
        pager.end_item(),
        pager.total_count
    )
}

fn nav_button(label: &str, aria: Option<&str>, href: String, page: u32, disabled: bool) -> String {
    let aria = aria
        .map(|a| format!(r#" aria-label="{0}" title="{0}""#, a))
        .unwrap_or_default();

    if disabled {
        format!(
            r#"<span class="pagination-btn disabled" aria-disabled="true"{}>{}</span>"#,
            aria, label
        )
    } else {
        format!(
            r#"<a class="pagination-btn" href="{}" data-page="{}"{}>{}</a>"#,
            href, page, aria, label
        )
    }
}
