//! # Navigation Item Model
//!
//! Tagged navigation structure for the storefront's menus.
//!
//! The menus come in three shapes: flat link lists, multi-column dropdowns,
//! and image-tile "mega menus". Rather than sniffing the shape of the data
//! (array vs. keyed object), every entry carries an explicit tag and
//! consumers dispatch with a `match`.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One entry in a navigation menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavItem {
    /// A plain link.
    Link { title: String, path: String },

    /// A dropdown containing further items.
    Submenu { title: String, items: Vec<NavItem> },

    /// A full-width menu with titled columns and image-tile layouts.
    MegaMenu {
        title: String,
        columns: Vec<NavColumn>,
        layouts: Vec<NavLayout>,
    },
}

/// A titled column of links inside a mega menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NavColumn {
    pub heading: String,
    pub links: Vec<NavItem>,
}

/// An image tile inside a mega menu (e.g. homepage layout previews).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NavLayout {
    pub title: String,
    pub path: String,
    pub image: String,
}

impl NavItem {
    /// The entry's display title.
    pub fn title(&self) -> &str {
        match self {
            NavItem::Link { title, .. }
            | NavItem::Submenu { title, .. }
            | NavItem::MegaMenu { title, .. } => title,
        }
    }

    /// All link paths reachable from this entry, depth-first.
    ///
    /// The mobile menu flattens every structure into a simple link list;
    /// this is the traversal it uses.
    pub fn paths(&self) -> Vec<&str> {
        match self {
            NavItem::Link { path, .. } => vec![path.as_str()],
            NavItem::Submenu { items, .. } => {
                items.iter().flat_map(|item| item.paths()).collect()
            }
            NavItem::MegaMenu { columns, layouts, .. } => columns
                .iter()
                .flat_map(|col| col.links.iter().flat_map(|item| item.paths()))
                .chain(layouts.iter().map(|layout| layout.path.as_str()))
                .collect(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn shop_menu() -> NavItem {
        NavItem::Submenu {
            title: "Shop".to_string(),
            items: vec![
                NavItem::Link {
                    title: "Shop Left Sidebar".to_string(),
                    path: "/leftSidebar".to_string(),
                },
                NavItem::Link {
                    title: "Collection Top".to_string(),
                    path: "/collections/books".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_paths_flatten_depth_first() {
        let menu = NavItem::MegaMenu {
            title: "Home".to_string(),
            columns: vec![NavColumn {
                heading: "Pages".to_string(),
                links: vec![shop_menu()],
            }],
            layouts: vec![NavLayout {
                title: "Home One".to_string(),
                path: "/".to_string(),
                image: "home1.avif".to_string(),
            }],
        };

        assert_eq!(menu.paths(), vec!["/leftSidebar", "/collections/books", "/"]);
        assert_eq!(menu.title(), "Home");
    }

    #[test]
    fn test_serialized_shape_is_tagged() {
        // The tag is what lets the frontend dispatch without shape-sniffing
        let link = NavItem::Link {
            title: "Contact".to_string(),
            path: "/contact".to_string(),
        };
        let value = serde_json::to_value(&link).unwrap();
        assert_eq!(
            value,
            json!({ "kind": "link", "title": "Contact", "path": "/contact" })
        );

        let round_trip: NavItem = serde_json::from_value(value).unwrap();
        assert_eq!(round_trip, link);
    }
}
