//! Application state and composition
//!
//! [`StallApp`] owns the in-memory document, the current selection, and
//! the document store. Every mutation runs a pure transition, installs
//! the resulting document, re-derives the selection, and persists the
//! whole document. Persistence is fire-and-forget; a storage failure
//! never rolls back in-memory state.

use crate::document::{self, AppData, ItemId, Order, OrderId, Template, TemplateId, TemplateItem};
use crate::error::Rejection;
use crate::services::{orders, pricing, templates, ItemKind, Selection};
use crate::store::DocumentStore;

pub struct StallApp<S: DocumentStore> {
    store: S,
    data: AppData,
    selection: Selection,
}

impl<S: DocumentStore> StallApp<S> {
    /// Load the document from the store (seeding defaults if needed) and
    /// point the selection at the first entities.
    pub fn new(mut store: S) -> Self {
        let data = document::load_or_seed(&mut store);
        let selection = Selection::default().normalize(&data);
        Self {
            store,
            data,
            selection,
        }
    }

    pub fn data(&self) -> &AppData {
        &self.data
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected_template(&self) -> Option<&Template> {
        self.selection
            .template_id
            .as_deref()
            .and_then(|id| self.data.template(id))
    }

    pub fn selected_order(&self) -> Option<&Order> {
        self.selection
            .order_id
            .as_deref()
            .and_then(|id| self.data.order(id))
    }

    /// Install a new document: replace, fix up selection, persist.
    fn install(&mut self, next: AppData) {
        self.data = next;
        self.selection = self.selection.normalize(&self.data);
        document::persist(&mut self.store, &self.data);
    }

    // ----- Selection -----

    /// Select a template; unknown ids are ignored
    pub fn select_template(&mut self, id: &str) {
        if self.data.template(id).is_some() {
            self.selection.template_id = Some(id.to_string());
        }
    }

    /// Select an order and follow it to its template; unknown ids are
    /// ignored
    pub fn select_order(&mut self, id: &str) {
        if let Some(order) = self.data.order(id) {
            self.selection.template_id = Some(order.template_id.clone());
            self.selection.order_id = Some(id.to_string());
        }
    }

    // ----- Templates -----

    /// Create an empty dish template and select it
    pub fn create_template(&mut self) -> TemplateId {
        let (next, id) = templates::create_template(&self.data);
        self.install(next);
        self.selection.template_id = Some(id.clone());
        id
    }

    pub fn rename_template(&mut self, id: &str, name: &str) {
        let next = templates::rename_template(&self.data, id, name);
        self.install(next);
    }

    pub fn set_base_price(&mut self, id: &str, base_price: Option<f64>) {
        let next = templates::set_base_price(&self.data, id, base_price);
        self.install(next);
    }

    /// Append a blank item to a template list; returns its fresh id
    pub fn add_template_item(&mut self, template_id: &str, kind: ItemKind) -> Option<ItemId> {
        let (next, id) = templates::add_item(&self.data, template_id, kind);
        self.install(next);
        id
    }

    pub fn update_template_item(
        &mut self,
        template_id: &str,
        kind: ItemKind,
        index: usize,
        text: &str,
        price: Option<f64>,
    ) {
        let next = templates::update_item(&self.data, template_id, kind, index, text, price);
        self.install(next);
    }

    pub fn remove_template_item(&mut self, template_id: &str, kind: ItemKind, index: usize) {
        let next = templates::remove_item(&self.data, template_id, kind, index);
        self.install(next);
    }

    /// Delete a template, cascading to its orders.
    ///
    /// Rejected (document untouched) when it is the last one.
    pub fn delete_template(&mut self, id: &str) -> Result<(), Rejection> {
        let next = templates::delete_template(&self.data, id)?;
        self.install(next);
        Ok(())
    }

    // ----- Orders -----

    /// Create an order from a template and select it
    pub fn create_order(&mut self, template_id: &str) -> Result<OrderId, Rejection> {
        let (next, id) = orders::create_order(&self.data, template_id)?;
        self.install(next);
        self.selection.template_id = Some(template_id.to_string());
        self.selection.order_id = Some(id.clone());
        Ok(id)
    }

    pub fn toggle_order_item(&mut self, order_id: &str, item_id: &str) {
        let next = orders::toggle_item(&self.data, order_id, item_id);
        self.install(next);
    }

    /// The add-ons that may still be offered for this order
    pub fn addable_optional_items(&self, order_id: &str) -> Vec<TemplateItem> {
        let Some(order) = self.data.order(order_id) else {
            return Vec::new();
        };
        let Some(template) = self.data.template_for(order) else {
            return Vec::new();
        };
        orders::addable_optional_items(order, template)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn add_optional_items(&mut self, order_id: &str, item_ids: &[ItemId]) {
        let next = orders::add_optional_items(&self.data, order_id, item_ids);
        self.install(next);
    }

    pub fn remove_order_item(&mut self, order_id: &str, item_id: &str) {
        let next = orders::remove_item(&self.data, order_id, item_id);
        self.install(next);
    }

    pub fn delete_order(&mut self, id: &str) {
        let next = orders::delete_order(&self.data, id);
        self.install(next);
    }

    /// Completing an order removes it from the active set; there is no
    /// archive
    pub fn complete_order(&mut self, id: &str) {
        self.delete_order(id);
    }

    // ----- Pricing -----

    /// Running total for an order, zero when the order or its template is
    /// gone
    pub fn order_total(&self, order_id: &str) -> f64 {
        let Some(order) = self.data.order(order_id) else {
            return 0.0;
        };
        pricing::order_total(order, self.data.template_for(order))
    }
}
