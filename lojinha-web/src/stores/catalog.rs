//! Catalog store: the categories, products and tags the back-office
//! manages and the storefront renders.
//!
//! Persistence policy: the local-storage snapshot is the single source of
//! truth once seeded. The seed data only fills an empty snapshot; every
//! mutation rewrites the full snapshot. There is no merge between seed
//! and stored copies.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use gloo_storage::{LocalStorage, Storage};
use shared::models::catalog::{flatten_categories, slugify};
use shared::models::{Category, Product};
use yewdux::prelude::*;

use crate::config::{CATEGORIES_STORAGE_KEY, TAGS_STORAGE_KEY};
use crate::data::seed_categories;

/// Editable fields of a product, as collected by the product form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    pub image: String,
    pub description: Option<String>,
    pub tag: Option<String>,
    pub category_id: String,
}

/// Catalog snapshot shared by the storefront and the back-office.
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct CatalogState {
    pub categories: Vec<Category>,
    pub tags: Vec<String>,
}

impl CatalogState {
    /// All products, flattened with their category fields filled in.
    #[must_use]
    pub fn products(&self) -> Vec<Product> {
        flatten_categories(&self.categories)
    }

    #[must_use]
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    /// Look a product up by id across all categories.
    #[must_use]
    pub fn product(&self, id: &str) -> Option<Product> {
        self.products().into_iter().find(|product| product.id == id)
    }

    /// A catalog-wide unique slug for a new entity name: the plain slug
    /// when free, otherwise the first free `slug-N`.
    #[must_use]
    pub fn unique_slug(&self, name: &str, taken: impl Fn(&Self, &str) -> bool) -> String {
        let base = slugify(name);
        let base = if base.is_empty() { "item".to_string() } else { base };
        if !taken(self, &base) {
            return base;
        }
        let mut counter = 2;
        loop {
            let candidate = format!("{base}-{counter}");
            if !taken(self, &candidate) {
                return candidate;
            }
            counter += 1;
        }
    }

    fn product_id_taken(&self, id: &str) -> bool {
        self.product(id).is_some()
    }

    fn category_id_taken(&self, id: &str) -> bool {
        self.category(id).is_some()
    }

    /// Create a product inside its category. Returns the new product, or
    /// `None` when the draft points at an unknown category.
    pub fn create_product(&mut self, draft: &ProductDraft) -> Option<Product> {
        let id = self.unique_slug(&draft.name, Self::product_id_taken);
        let category = self
            .categories
            .iter_mut()
            .find(|category| category.id == draft.category_id)?;
        let product = Product {
            id,
            name: draft.name.clone(),
            price: draft.price,
            image: draft.image.clone(),
            description: draft.description.clone(),
            tag: draft.tag.clone(),
            category_id: category.id.clone(),
            category_name: category.name.clone(),
        };
        category.products.push(product.clone());
        Some(product)
    }

    /// Update a product in place, moving it between categories when the
    /// draft's category changed. Unknown ids are ignored.
    pub fn update_product(&mut self, id: &str, draft: &ProductDraft) {
        let Some(current) = self.product(id) else {
            return;
        };
        let updated = Product {
            id: id.to_string(),
            name: draft.name.clone(),
            price: draft.price,
            image: draft.image.clone(),
            description: draft.description.clone(),
            tag: draft.tag.clone(),
            category_id: draft.category_id.clone(),
            category_name: String::new(),
        };
        if current.category_id == draft.category_id {
            if let Some(category) = self
                .categories
                .iter_mut()
                .find(|category| category.id == draft.category_id)
                && let Some(slot) = category.products.iter_mut().find(|p| p.id == id)
            {
                *slot = updated;
            }
            return;
        }
        self.delete_product(id);
        if let Some(category) = self
            .categories
            .iter_mut()
            .find(|category| category.id == draft.category_id)
        {
            category.products.push(updated);
        }
    }

    /// Remove a product wherever it lives.
    pub fn delete_product(&mut self, id: &str) {
        for category in &mut self.categories {
            category.products.retain(|product| product.id != id);
        }
    }

    /// Register a tag, trimmed and deduplicated. Returns the stored tag,
    /// or `None` for blank input.
    pub fn create_tag(&mut self, tag: &str) -> Option<String> {
        let tag = tag.trim();
        if tag.is_empty() {
            return None;
        }
        if !self.tags.iter().any(|existing| existing == tag) {
            self.tags.push(tag.to_string());
        }
        Some(tag.to_string())
    }

    /// Create an empty category. Returns its slug id.
    pub fn create_category(&mut self, name: &str, description: &str) -> String {
        let id = self.unique_slug(name, Self::category_id_taken);
        self.categories.push(Category {
            id: id.clone(),
            name: name.to_string(),
            description: description.to_string(),
            products: Vec::new(),
        });
        id
    }

    /// Rename a category, keeping its products. Unknown ids are ignored.
    pub fn update_category(&mut self, id: &str, name: &str, description: &str) {
        if let Some(category) = self.categories.iter_mut().find(|category| category.id == id) {
            category.name = name.to_string();
            category.description = description.to_string();
        }
    }

    /// Remove a category and everything in it.
    pub fn delete_category(&mut self, id: &str) {
        self.categories.retain(|category| category.id != id);
    }

    /// Rebuild the catalog from the persisted snapshot; an empty or
    /// unreadable snapshot falls back to the seed data.
    #[must_use]
    pub fn restore() -> Self {
        let categories: Vec<Category> =
            LocalStorage::get(CATEGORIES_STORAGE_KEY).unwrap_or_else(|_| seed_categories());
        let tags: Vec<String> =
            LocalStorage::get(TAGS_STORAGE_KEY).unwrap_or_else(|_| seed_tags(&categories));
        Self { categories, tags }
    }

    /// Write the full snapshot to local storage, one key per collection.
    pub fn persist(&self) {
        if let Err(err) = LocalStorage::set(CATEGORIES_STORAGE_KEY, &self.categories) {
            web_sys::console::warn_1(&format!("catalog snapshot not persisted: {err}").into());
        }
        if let Err(err) = LocalStorage::set(TAGS_STORAGE_KEY, &self.tags) {
            web_sys::console::warn_1(&format!("tag snapshot not persisted: {err}").into());
        }
    }
}

/// Distinct tags carried by the seeded products, in first-seen order.
fn seed_tags(categories: &[Category]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for product in flatten_categories(categories) {
        if let Some(tag) = product.tag
            && !tags.contains(&tag)
        {
            tags.push(tag);
        }
    }
    tags
}

fn mutate_and_persist(dispatch: &Dispatch<CatalogState>, op: impl FnOnce(&mut CatalogState)) {
    dispatch.reduce_mut(op);
    dispatch.get().persist();
}

/// Create a product and persist the snapshot.
pub fn create_product(dispatch: &Dispatch<CatalogState>, draft: &ProductDraft) {
    mutate_and_persist(dispatch, |catalog| {
        catalog.create_product(draft);
    });
}

/// Update a product and persist the snapshot.
pub fn update_product(dispatch: &Dispatch<CatalogState>, id: &str, draft: &ProductDraft) {
    mutate_and_persist(dispatch, |catalog| catalog.update_product(id, draft));
}

/// Delete a product and persist the snapshot.
pub fn delete_product(dispatch: &Dispatch<CatalogState>, id: &str) {
    mutate_and_persist(dispatch, |catalog| catalog.delete_product(id));
}

/// Register a tag and persist the snapshot.
pub fn create_tag(dispatch: &Dispatch<CatalogState>, tag: &str) {
    mutate_and_persist(dispatch, |catalog| {
        catalog.create_tag(tag);
    });
}

/// Create a category and persist the snapshot.
pub fn create_category(dispatch: &Dispatch<CatalogState>, name: &str, description: &str) {
    mutate_and_persist(dispatch, |catalog| {
        catalog.create_category(name, description);
    });
}

/// Update a category and persist the snapshot.
pub fn update_category(dispatch: &Dispatch<CatalogState>, id: &str, name: &str, description: &str) {
    mutate_and_persist(dispatch, |catalog| catalog.update_category(id, name, description));
}

/// Delete a category and persist the snapshot.
pub fn delete_category(dispatch: &Dispatch<CatalogState>, id: &str) {
    mutate_and_persist(dispatch, |catalog| catalog.delete_category(id));
}
