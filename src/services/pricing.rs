//! Pricing calculator
//!
//! An order's total is the template's base price plus every add-on the
//! order carries. Whether an order item counts as an add-on is derived
//! from the template's optional list; the order never stores the flag.

use crate::document::{Order, Template};

/// True when the item id belongs to the template's optional add-ons
pub fn is_optional(item_id: &str, template: &Template) -> bool {
    template.optional_item(item_id).is_some()
}

/// Running total for an order against its template.
///
/// Required items never contribute, even if they carry a stray price;
/// absent prices count as zero; checked state is irrelevant. A missing
/// template (mid-cascade) yields zero rather than an error.
pub fn order_total(order: &Order, template: Option<&Template>) -> f64 {
    let Some(template) = template else {
        return 0.0;
    };

    let base = template.base_price.unwrap_or(0.0);
    let extras: f64 = order
        .items
        .iter()
        .filter(|item| is_optional(&item.id, template))
        .map(|item| item.price.unwrap_or(0.0))
        .sum();

    base + extras
}
