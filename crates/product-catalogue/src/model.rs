//! Catalogue record types.
//!
//! Source records mirror the fixture document field for field. The enriched
//! product is the joined form the rest of the crate filters and renders.

use serde::{Deserialize, Serialize};

/// Sex of a user as recorded in the fixture (`"m"` or `"f"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    /// Encoded as `"m"`.
    #[serde(rename = "m")]
    Male,
    /// Encoded as `"f"`.
    #[serde(rename = "f")]
    Female,
}

/// A product owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier.
    pub id: u32,
    /// Name shown on owner tabs and in the table.
    pub name: String,
    /// Drives the owner cell style.
    pub sex: Sex,
}

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier.
    pub id: u32,
    /// Human readable title.
    pub title: String,
    /// Short glyph, usually an emoji.
    pub icon: String,
}

impl Category {
    /// Formats the category as `"{icon} - {title}"`.
    ///
    /// # Example
    ///
    /// ```
    /// use product_catalogue::Category;
    ///
    /// let category = Category { id: 1, title: "Drinks".to_owned(), icon: "🍺".to_owned() };
    /// assert_eq!(category.label(), "🍺 - Drinks");
    /// ```
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} - {}", self.icon, self.title)
    }
}

/// A product as sourced, with foreign keys into users and categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier.
    pub id: u32,
    /// Product name.
    pub name: String,
    /// Key into the categories collection.
    pub category_id: u32,
    /// Key into the users collection.
    pub user_id: u32,
}

/// A product with its category and owner resolved.
///
/// Either reference is `None` when the key matched nothing in the source
/// collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedProduct {
    /// Identifier copied from the source product.
    pub id: u32,
    /// Name copied from the source product.
    pub name: String,
    /// Resolved category.
    pub category: Option<Category>,
    /// Resolved owner.
    pub user: Option<User>,
}

impl EnrichedProduct {
    /// Returns the owner's name, if the owner was resolved.
    #[must_use]
    pub fn owner_name(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.name.as_str())
    }
}
