//! Default seed data
//!
//! Used when no document is stored yet, or when the stored blob cannot be
//! parsed. One example dish and one open order, so the board is never
//! empty on first launch.

use super::models::{AppData, Order, OrderItem, Template, TemplateItem};

pub fn seed_data() -> AppData {
    let kebab = Template {
        id: "kebab".to_string(),
        name: "Kebab".to_string(),
        base_price: Some(120.0),
        required_items: vec![
            TemplateItem {
                id: "item-1".to_string(),
                text: "Kebabkjøtt".to_string(),
                price: None,
            },
            TemplateItem {
                id: "item-2".to_string(),
                text: "Salat".to_string(),
                price: None,
            },
            TemplateItem {
                id: "item-3".to_string(),
                text: "Dressing".to_string(),
                price: None,
            },
        ],
        optional_items: vec![
            TemplateItem {
                id: "opt-1".to_string(),
                text: "Ekstra kjøtt".to_string(),
                price: Some(25.0),
            },
            TemplateItem {
                id: "opt-2".to_string(),
                text: "Ost".to_string(),
                price: Some(10.0),
            },
        ],
    };

    let first_order = Order {
        id: "order-1".to_string(),
        template_id: kebab.id.clone(),
        name: "Order 1".to_string(),
        items: kebab.required_items.iter().map(OrderItem::from).collect(),
    };

    AppData {
        templates: vec![kebab],
        orders: vec![first_order],
    }
}
