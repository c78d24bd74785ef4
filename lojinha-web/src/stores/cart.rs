//! Cart store: the visitor's order-in-progress, independent of page
//! navigation and surviving reloads through a local-storage snapshot.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};
use shared::models::Product;
use yewdux::prelude::*;

use crate::config::CART_STORAGE_KEY;

/// One row of the cart: a product and the quantity requested.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: String,
    pub name: String,
    pub unit_price: f64,
    pub image: String,
    pub quantity: u32,
}

impl CartItem {
    fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            image: product.image.clone(),
            quantity,
        }
    }

    /// Price of this row (`unit_price * quantity`).
    #[must_use]
    pub fn subtotal(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

/// Ordered line items keyed by `product_id`; at most one row per product,
/// quantities accumulate instead. Every row keeps `quantity >= 1`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Store)]
pub struct CartState {
    pub items: Vec<CartItem>,
}

impl CartState {
    /// Add `quantity` units of a product. An existing row accumulates;
    /// a new row is appended, preserving insertion order.
    pub fn add_item(&mut self, product: &Product, quantity: u32) {
        let quantity = quantity.max(1);
        if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.product_id == product.id)
        {
            item.quantity += quantity;
        } else {
            self.items.push(CartItem::from_product(product, quantity));
        }
    }

    /// Bump an existing row by one. Unknown ids are ignored.
    pub fn increase(&mut self, product_id: &str) {
        if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.product_id == product_id)
        {
            item.quantity += 1;
        }
    }

    /// Drop an existing row by one, floored at 1. Only `remove_item`
    /// deletes a row.
    pub fn decrease(&mut self, product_id: &str) {
        if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.product_id == product_id)
        {
            item.quantity = item.quantity.saturating_sub(1).max(1);
        }
    }

    /// Delete a row entirely, regardless of quantity.
    pub fn remove_item(&mut self, product_id: &str) {
        self.items.retain(|item| item.product_id != product_id);
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of all row subtotals. Recomputed on every read, never stored.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::subtotal).sum()
    }

    /// Total number of units across all rows.
    #[must_use]
    pub fn unit_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Rebuild the cart from the persisted snapshot; a missing or
    /// unreadable snapshot yields an empty cart.
    #[must_use]
    pub fn restore() -> Self {
        LocalStorage::get(CART_STORAGE_KEY).unwrap_or_default()
    }

    /// Write the full snapshot to local storage. The in-memory cart stays
    /// authoritative whether or not the write lands.
    pub fn persist(&self) {
        if let Err(err) = LocalStorage::set(CART_STORAGE_KEY, self) {
            web_sys::console::warn_1(&format!("cart snapshot not persisted: {err}").into());
        }
    }
}

fn mutate_and_persist(dispatch: &Dispatch<CartState>, op: impl FnOnce(&mut CartState)) {
    dispatch.reduce_mut(op);
    dispatch.get().persist();
}

/// Add a product to the cart and persist the snapshot.
pub fn add_to_cart(dispatch: &Dispatch<CartState>, product: &Product, quantity: u32) {
    mutate_and_persist(dispatch, |cart| cart.add_item(product, quantity));
}

/// Bump a row by one and persist the snapshot.
pub fn increase(dispatch: &Dispatch<CartState>, product_id: &str) {
    mutate_and_persist(dispatch, |cart| cart.increase(product_id));
}

/// Drop a row by one (floored at 1) and persist the snapshot.
pub fn decrease(dispatch: &Dispatch<CartState>, product_id: &str) {
    mutate_and_persist(dispatch, |cart| cart.decrease(product_id));
}

/// Delete a row and persist the snapshot.
pub fn remove_from_cart(dispatch: &Dispatch<CartState>, product_id: &str) {
    mutate_and_persist(dispatch, |cart| cart.remove_item(product_id));
}

/// Empty the cart and persist the snapshot.
pub fn clear_cart(dispatch: &Dispatch<CartState>) {
    mutate_and_persist(dispatch, CartState::clear);
}
