//! Document models
//!
//! Rust structs for the persisted document. Field names serialize in
//! camelCase to stay wire-compatible with documents written by earlier
//! versions of the tracker; absent prices are omitted rather than
//! serialized as null.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type ItemId = String;
pub type TemplateId = String;
pub type OrderId = String;

/// Generate a fresh opaque identifier.
///
/// UUID v4, so ids are never reused after deletion and generation cannot
/// fail.
pub fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

/// A single preparation step or add-on within a template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateItem {
    pub id: ItemId,
    pub text: String,
    /// Absent price means the item is free
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// A reusable dish definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: TemplateId,
    pub name: String,
    /// Absent base price means 0
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_price: Option<f64>,
    /// Preparation steps, in workflow order
    pub required_items: Vec<TemplateItem>,
    /// Paid add-ons, in display order
    pub optional_items: Vec<TemplateItem>,
}

impl Template {
    /// Find an optional item by id
    pub fn optional_item(&self, item_id: &str) -> Option<&TemplateItem> {
        self.optional_items.iter().find(|item| item.id == item_id)
    }
}

/// A checklist line within an order, copied from a template item.
///
/// The id equals the source template item's id; whether the line counts
/// as "optional" is derived from membership in the parent template's
/// optional list, never stored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: ItemId,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    pub checked: bool,
}

impl From<&TemplateItem> for OrderItem {
    fn from(item: &TemplateItem) -> Self {
        Self {
            id: item.id.clone(),
            text: item.text.clone(),
            price: item.price,
            checked: false,
        }
    }
}

/// An active order for one customer, instantiated from a template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    /// The owning template; orders are removed when it is deleted
    pub template_id: TemplateId,
    pub name: String,
    /// Independent copies of template items, in the order they were added
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Whether the order already contains an item with this id
    pub fn contains_item(&self, item_id: &str) -> bool {
        self.items.iter().any(|item| item.id == item_id)
    }
}

/// The whole persisted document
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppData {
    pub templates: Vec<Template>,
    pub orders: Vec<Order>,
}

impl AppData {
    /// Look up a template by id
    pub fn template(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Look up an order by id
    pub fn order(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    /// The template an order was instantiated from, if it still exists
    pub fn template_for(&self, order: &Order) -> Option<&Template> {
        self.template(&order.template_id)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(raw: &str) -> Result<AppData> {
        Ok(serde_json::from_str(raw)?)
    }
}
