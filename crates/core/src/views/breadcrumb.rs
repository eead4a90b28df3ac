//! Breadcrumb trail

/// Where a breadcrumb item leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BreadcrumbTarget {
    /// No link: the current page.
    Text,
    /// Absolute `http(s)` URL, full page load.
    External(String),
    /// Route inside the app.
    Internal(String),
}

/// One step of the trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadcrumbItem {
    pub text: String,
    pub href: Option<String>,
}

impl BreadcrumbItem {
    pub fn new(text: impl Into<String>, href: Option<&str>) -> Self {
        Self { text: text.into(), href: href.map(str::to_owned) }
    }

    pub fn target(&self) -> BreadcrumbTarget {
        match self.href.as_deref() {
            None | Some("") => BreadcrumbTarget::Text,
            Some(href) if href.starts_with("http") => BreadcrumbTarget::External(href.to_owned()),
            Some(href) => BreadcrumbTarget::Internal(href.to_owned()),
        }
    }
}

/// Ordered trail from the root to the current page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Breadcrumb {
    items: Vec<BreadcrumbItem>,
}

impl Breadcrumb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, text: impl Into<String>, href: Option<&str>) -> Self {
        self.items.push(BreadcrumbItem::new(text, href));
        self
    }

    pub fn items(&self) -> &[BreadcrumbItem] {
        &self.items
    }

    /// Items paired with their resolved targets.
    pub fn trail(&self) -> impl Iterator<Item = (&str, BreadcrumbTarget)> {
        self.items.iter().map(|item| (item.text.as_str(), item.target()))
    }
}
