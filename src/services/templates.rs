//! Template transitions
//!
//! Pure state transitions for dish templates. Every function takes the
//! current document and returns a new one; the caller installs the result
//! and persists it. Operations on unknown ids are no-ops, except where a
//! [`Rejection`] is documented.

use crate::config::DEFAULT_TEMPLATE_NAME;
use crate::document::{fresh_id, AppData, ItemId, Template, TemplateId, TemplateItem};
use crate::error::Rejection;

/// Which of a template's two item lists an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Required,
    Optional,
}

fn items_mut(template: &mut Template, kind: ItemKind) -> &mut Vec<TemplateItem> {
    match kind {
        ItemKind::Required => &mut template.required_items,
        ItemKind::Optional => &mut template.optional_items,
    }
}

/// Append a new empty dish template and return its id
pub fn create_template(data: &AppData) -> (AppData, TemplateId) {
    let id = fresh_id();
    let template = Template {
        id: id.clone(),
        name: DEFAULT_TEMPLATE_NAME.to_string(),
        base_price: Some(0.0),
        required_items: Vec::new(),
        optional_items: Vec::new(),
    };

    let mut next = data.clone();
    next.templates.push(template);
    tracing::info!("Created template: {}", id);
    (next, id)
}

/// Replace a template's display name
pub fn rename_template(data: &AppData, id: &str, name: &str) -> AppData {
    let mut next = data.clone();
    if let Some(template) = next.templates.iter_mut().find(|t| t.id == id) {
        template.name = name.to_string();
    }
    next
}

/// Replace a template's base price; `None` means free
pub fn set_base_price(data: &AppData, id: &str, base_price: Option<f64>) -> AppData {
    let mut next = data.clone();
    if let Some(template) = next.templates.iter_mut().find(|t| t.id == id) {
        template.base_price = base_price;
    }
    next
}

/// Append a blank item to one of a template's lists.
///
/// Returns the fresh item id, or `None` when the template does not exist.
pub fn add_item(data: &AppData, template_id: &str, kind: ItemKind) -> (AppData, Option<ItemId>) {
    let mut next = data.clone();
    let Some(position) = next.templates.iter().position(|t| t.id == template_id) else {
        return (next, None);
    };

    let id = fresh_id();
    items_mut(&mut next.templates[position], kind).push(TemplateItem {
        id: id.clone(),
        text: String::new(),
        price: None,
    });
    (next, Some(id))
}

/// Replace the text and price of the item at `index`, keeping its id and
/// its position. Untouched items keep their order.
pub fn update_item(
    data: &AppData,
    template_id: &str,
    kind: ItemKind,
    index: usize,
    text: &str,
    price: Option<f64>,
) -> AppData {
    let mut next = data.clone();
    let Some(position) = next.templates.iter().position(|t| t.id == template_id) else {
        return next;
    };

    let items = items_mut(&mut next.templates[position], kind);
    if let Some(item) = items.get_mut(index) {
        item.text = text.to_string();
        item.price = price;
    }
    next
}

/// Remove the item at `index` from one of a template's lists.
///
/// Existing orders keep their copies of the item; an optional copy simply
/// stops counting towards the total once its id is no longer a member of
/// the template's optional list.
pub fn remove_item(data: &AppData, template_id: &str, kind: ItemKind, index: usize) -> AppData {
    let mut next = data.clone();
    let Some(position) = next.templates.iter().position(|t| t.id == template_id) else {
        return next;
    };

    let items = items_mut(&mut next.templates[position], kind);
    if index < items.len() {
        items.remove(index);
    }
    next
}

/// Delete a template and cascade to every order instantiated from it.
///
/// Removing the last remaining template is rejected so the board always
/// has at least one dish to create orders from.
pub fn delete_template(data: &AppData, id: &str) -> Result<AppData, Rejection> {
    if !data.templates.iter().any(|t| t.id == id) {
        return Ok(data.clone());
    }
    if data.templates.len() <= 1 {
        return Err(Rejection::LastTemplate);
    }

    let mut next = data.clone();
    next.templates.retain(|t| t.id != id);
    next.orders.retain(|o| o.template_id != id);
    tracing::info!("Deleted template: {}", id);
    Ok(next)
}
