//! Order transitions
//!
//! Pure state transitions for customer orders. Orders are snapshots: they
//! copy template items at the moment of creation or addition, and only
//! ever reference the template for classification and pricing.

use crate::config::ORDER_NAME_PREFIX;
use crate::document::{fresh_id, AppData, ItemId, Order, OrderId, OrderItem, Template, TemplateItem};
use crate::error::Rejection;
use crate::services::pricing;

/// Create a new order from a template.
///
/// The order copies the template's required items, all unchecked, and is
/// named from the live order count. Names are fresh at creation time
/// only; they are not kept unique after deletions.
pub fn create_order(data: &AppData, template_id: &str) -> Result<(AppData, OrderId), Rejection> {
    let template = data.template(template_id).ok_or(Rejection::UnknownTemplate)?;

    let id = fresh_id();
    let order = Order {
        id: id.clone(),
        template_id: template.id.clone(),
        name: format!("{} {}", ORDER_NAME_PREFIX, data.orders.len() + 1),
        items: template.required_items.iter().map(OrderItem::from).collect(),
    };

    let mut next = data.clone();
    next.orders.push(order);
    tracing::info!("Created order {} from template {}", id, template_id);
    Ok((next, id))
}

/// Flip the checked state of one item within an order.
///
/// The template is never touched; checked state lives on the order's own
/// copies.
pub fn toggle_item(data: &AppData, order_id: &str, item_id: &str) -> AppData {
    let mut next = data.clone();
    if let Some(order) = next.orders.iter_mut().find(|o| o.id == order_id) {
        if let Some(item) = order.items.iter_mut().find(|i| i.id == item_id) {
            item.checked = !item.checked;
        }
    }
    next
}

/// The template's optional items not yet present in the order.
///
/// This is the only set a caller may offer for adding, so re-adding an
/// item that is already in the order is impossible through the contract.
pub fn addable_optional_items<'a>(order: &Order, template: &'a Template) -> Vec<&'a TemplateItem> {
    template
        .optional_items
        .iter()
        .filter(|item| !order.contains_item(&item.id))
        .collect()
}

/// Append the named optional add-ons to an order, unchecked.
///
/// Ids that are not in the parent template's optional list, or that the
/// order already contains, are skipped. Items are appended in the
/// template's display order.
pub fn add_optional_items(data: &AppData, order_id: &str, item_ids: &[ItemId]) -> AppData {
    let mut next = data.clone();
    let Some(position) = next.orders.iter().position(|o| o.id == order_id) else {
        return next;
    };

    let Some(template) = data.template_for(&next.orders[position]) else {
        return next;
    };

    let order = &mut next.orders[position];
    for item in &template.optional_items {
        if !item_ids.contains(&item.id) || order.contains_item(&item.id) {
            continue;
        }
        order.items.push(OrderItem::from(item));
    }
    next
}

/// Remove one add-on from an order.
///
/// Only items classified as optional against the parent template can be
/// removed; required steps stay on the order for its whole life.
pub fn remove_item(data: &AppData, order_id: &str, item_id: &str) -> AppData {
    let mut next = data.clone();
    let Some(position) = next.orders.iter().position(|o| o.id == order_id) else {
        return next;
    };

    let Some(template) = data.template_for(&next.orders[position]) else {
        return next;
    };
    if !pricing::is_optional(item_id, template) {
        return next;
    }

    next.orders[position].items.retain(|i| i.id != item_id);
    next
}

/// Remove an order from the active set.
///
/// There is no floor: completing the last order leaves the board empty.
/// Completing an order is the same transition.
pub fn delete_order(data: &AppData, id: &str) -> AppData {
    let mut next = data.clone();
    let before = next.orders.len();
    next.orders.retain(|o| o.id != id);
    if next.orders.len() < before {
        tracing::info!("Removed order: {}", id);
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::seed::seed_data;

    #[test]
    fn test_create_order_copies_required_items() {
        let data = seed_data();
        let (next, id) = create_order(&data, "kebab").unwrap();

        let order = next.order(&id).unwrap();
        let template = next.template("kebab").unwrap();

        assert_eq!(order.items.len(), template.required_items.len());
        for (copy, source) in order.items.iter().zip(&template.required_items) {
            assert_eq!(copy.id, source.id);
            assert_eq!(copy.text, source.text);
            assert!(!copy.checked);
        }
    }

    #[test]
    fn test_create_order_names_from_live_count() {
        let data = seed_data();
        let (data, id) = create_order(&data, "kebab").unwrap();
        assert_eq!(data.order(&id).unwrap().name, "Order 2");

        // Deleting does not free up the count for reuse semantics: the
        // next name is derived from whatever the live count is then.
        let data = delete_order(&data, "order-1");
        let (data, id) = create_order(&data, "kebab").unwrap();
        assert_eq!(data.order(&id).unwrap().name, "Order 2");
    }

    #[test]
    fn test_create_order_from_unknown_template_is_rejected() {
        let data = seed_data();
        let result = create_order(&data, "missing");
        assert_eq!(result.unwrap_err(), Rejection::UnknownTemplate);
    }

    #[test]
    fn test_toggle_item_flips_only_that_item() {
        let data = seed_data();
        let next = toggle_item(&data, "order-1", "item-2");

        let order = next.order("order-1").unwrap();
        assert!(!order.items[0].checked);
        assert!(order.items[1].checked);
        assert!(!order.items[2].checked);

        let again = toggle_item(&next, "order-1", "item-2");
        assert!(!again.order("order-1").unwrap().items[1].checked);
    }

    #[test]
    fn test_toggle_does_not_touch_template() {
        let data = seed_data();
        let next = toggle_item(&data, "order-1", "item-1");
        assert_eq!(next.templates, data.templates);
    }

    #[test]
    fn test_addable_excludes_items_already_present() {
        let data = seed_data();
        let template = data.template("kebab").unwrap();
        let order = data.order("order-1").unwrap();

        let addable = addable_optional_items(order, template);
        assert_eq!(addable.len(), 2);

        let data = add_optional_items(&data, "order-1", &["opt-1".to_string()]);
        let order = data.order("order-1").unwrap();
        let template = data.template("kebab").unwrap();

        let addable = addable_optional_items(order, template);
        assert_eq!(addable.len(), 1);
        assert_eq!(addable[0].id, "opt-2");
    }

    #[test]
    fn test_add_optional_items_appends_unchecked() {
        let data = seed_data();
        let next = add_optional_items(&data, "order-1", &["opt-2".to_string()]);

        let order = next.order("order-1").unwrap();
        let added = order.items.last().unwrap();
        assert_eq!(added.id, "opt-2");
        assert_eq!(added.price, Some(10.0));
        assert!(!added.checked);
    }

    #[test]
    fn test_re_adding_present_item_is_noop() {
        let data = seed_data();
        let once = add_optional_items(&data, "order-1", &["opt-1".to_string()]);
        let twice = add_optional_items(&once, "order-1", &["opt-1".to_string()]);
        assert_eq!(twice, once);
    }

    #[test]
    fn test_adding_non_optional_id_is_noop() {
        let data = seed_data();
        // "item-1" is a required item id, not an optional one
        let next = add_optional_items(&data, "order-1", &["item-1".to_string()]);
        assert_eq!(next, data);
    }

    #[test]
    fn test_remove_optional_item() {
        let data = seed_data();
        let data = add_optional_items(&data, "order-1", &["opt-1".to_string()]);
        assert!(data.order("order-1").unwrap().contains_item("opt-1"));

        let next = remove_item(&data, "order-1", "opt-1");
        assert!(!next.order("order-1").unwrap().contains_item("opt-1"));
    }

    #[test]
    fn test_remove_required_item_is_noop() {
        let data = seed_data();
        let next = remove_item(&data, "order-1", "item-1");
        assert_eq!(next, data);
    }

    #[test]
    fn test_orders_may_reach_zero() {
        let data = seed_data();
        let next = delete_order(&data, "order-1");
        assert!(next.orders.is_empty());
        assert_eq!(next.templates, data.templates);
    }
}
