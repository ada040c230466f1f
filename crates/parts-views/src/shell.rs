//! Document shell: head, site header with search form, footer.

use crate::escape::html_escape;
use crate::links::{HOME_PAGE, LIST_PAGE};

/// Head content for the shell.
#[derive(Debug, Clone, Default)]
pub struct HeadContent {
    /// Page title.
    pub title: Option<String>,
    /// Meta tags.
    pub meta: Vec<(String, String)>,
    /// Link tags (stylesheets, etc.).
    pub links: Vec<String>,
}

impl HeadContent {
    /// Create new head content with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Add a meta tag.
    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.meta.push((name.to_string(), content.to_string()));
        self
    }

    /// Add a stylesheet link.
    pub fn with_stylesheet(mut self, href: &str) -> Self {
        self.links.push(format!(
            r#"<link rel="stylesheet" href="{}">"#,
            html_escape(href)
        ));
        self
    }

    /// Render head content to HTML.
    pub fn render(&self) -> String {
        let mut html = String::from("<meta charset=\"utf-8\">\n");

        if let Some(title) = &self.title {
            html.push_str(&format!("<title>{}</title>\n", html_escape(title)));
        }

        for (name, content) in &self.meta {
            html.push_str(&format!(
                r#"<meta name="{}" content="{}">"#,
                html_escape(name),
                html_escape(content)
            ));
            html.push('\n');
        }

        for link in &self.links {
            html.push_str(link);
            html.push('\n');
        }

        html
    }
}

/// Which navigation entry is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Home,
    Products,
}

/// Full-page wrapper shared by every page.
#[derive(Debug, Clone)]
pub struct Shell {
    pub head: HeadContent,
    pub site_name: String,
    pub active: NavItem,
    /// Pre-filled value of the header search box.
    pub search_text: String,
}

impl Shell {
    pub fn new(head: HeadContent, site_name: impl Into<String>, active: NavItem) -> Self {
        Self {
            head,
            site_name: site_name.into(),
            active,
            search_text: String::new(),
        }
    }

    pub fn with_search_text(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// Render the opening part of the document (before page content).
    pub fn render_opening(&self) -> String {
        let active = |item: NavItem| if self.active == item { " active" } else { "" };

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
{head}</head>
<body>
<header class="site-header">
    <a href="{home}" class="logo">{site}</a>
    <nav class="main-nav">
        <a href="{home}" class="nav-link{home_active}">Home</a>
        <a href="{list}" class="nav-link{list_active}">Products</a>
    </nav>
    <form class="search-box" action="{list}" method="get" role="search">
        <input type="search" id="product-search" name="search" value="{search}" placeholder="Search by name, part number, brand or model">
        <button type="submit" aria-label="Search">Search</button>
    </form>
</header>
<main>
"#,
            head = self.head.render(),
            home = HOME_PAGE,
            list = LIST_PAGE,
            site = html_escape(&self.site_name),
            home_active = active(NavItem::Home),
            list_active = active(NavItem::Products),
            search = html_escape(&self.search_text),
        )
    }

    /// Render the closing part of the document (after page content).
    pub fn render_closing(&self) -> String {
        format!(
            r#"</main>
<footer class="site-footer">
    <p>&copy; {}. Replacement parts for excavators.</p>
</footer>
</body>
</html>
"#,
            html_escape(&self.site_name)
        )
    }

    /// Wrap `content` in the full document.
    pub fn wrap(&self, content: &str) -> String {
        let mut html = self.render_opening();
        html.push_str(content);
        html.push_str(&self.render_closing());
        html
    }
}
