//! Navigation targets and the side menu's fixed entry list

use crate::product::Category;
use std::fmt;

/// A place the storefront can link to
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum NavTarget {
    Home,
    Collection { category: Option<Category> },
    About,
    Contact,
    Product { id: String },
}

impl NavTarget {
    pub fn collection() -> Self {
        NavTarget::Collection { category: None }
    }

    pub fn category(category: Category) -> Self {
        NavTarget::Collection {
            category: Some(category),
        }
    }

    pub fn product(id: impl Into<String>) -> Self {
        NavTarget::Product { id: id.into() }
    }

    /// URL path, including the category query when present
    pub fn path(&self) -> String {
        match self {
            NavTarget::Home => "/".to_string(),
            NavTarget::Collection { category: None } => "/collection".to_string(),
            NavTarget::Collection {
                category: Some(category),
            } => format!("/collection?category={}", category.as_str()),
            NavTarget::About => "/about".to_string(),
            NavTarget::Contact => "/contact".to_string(),
            NavTarget::Product { id } => format!("/product/{id}"),
        }
    }
}

impl fmt::Display for NavTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// One line in the side menu
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub target: NavTarget,
    /// Sub-collections sit indented under "our collection"
    pub indented: bool,
}

impl MenuEntry {
    fn top(label: &'static str, target: NavTarget) -> Self {
        Self {
            label,
            target,
            indented: false,
        }
    }

    fn sub(category: Category) -> Self {
        Self {
            label: match category {
                Category::Signature => "signature collection",
                Category::Bridal => "bridal couture",
                Category::Contemporary => "contemporary drapes",
                Category::Luxury => "luxury fusion lounge",
            },
            target: NavTarget::category(category),
            indented: true,
        }
    }
}

/// Entries shown in the side menu, top to bottom
pub fn side_menu_entries() -> Vec<MenuEntry> {
    vec![
        MenuEntry::top("home", NavTarget::Home),
        MenuEntry::top("our collection", NavTarget::collection()),
        MenuEntry::sub(Category::Signature),
        MenuEntry::sub(Category::Bridal),
        MenuEntry::sub(Category::Contemporary),
        MenuEntry::sub(Category::Luxury),
        MenuEntry::top("about us", NavTarget::About),
        MenuEntry::top("contact us", NavTarget::Contact),
    ]
}
