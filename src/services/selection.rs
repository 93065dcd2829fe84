//! Selection state
//!
//! Which template and order the user is looking at. Selection is
//! transient UI state: it is never persisted, and after every document
//! mutation it is re-derived so it can never point at a missing entity.

use crate::document::{AppData, OrderId, TemplateId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub template_id: Option<TemplateId>,
    pub order_id: Option<OrderId>,
}

impl Selection {
    /// Drop references to entities that no longer exist.
    ///
    /// A dangling selection falls back to the first remaining entity of
    /// its kind, or to `None` when none remain.
    pub fn normalize(&self, data: &AppData) -> Selection {
        let template_id = match &self.template_id {
            Some(id) if data.template(id).is_some() => Some(id.clone()),
            _ => data.templates.first().map(|t| t.id.clone()),
        };
        let order_id = match &self.order_id {
            Some(id) if data.order(id).is_some() => Some(id.clone()),
            _ => data.orders.first().map(|o| o.id.clone()),
        };
        Selection {
            template_id,
            order_id,
        }
    }
}
