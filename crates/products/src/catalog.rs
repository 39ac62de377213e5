//! The catalog: authoritative, ordered product list and every operation over
//! it.
//!
//! Storage is a `Vec<Product>` in insertion order behind a single `RwLock`.
//! Mutations hold the write lock for their whole check-then-act sequence;
//! reads clone under the read lock, so callers never see the live list.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Datelike, SubsecRound, Utc};
use tracing::{info, instrument, warn};

use catalog_core::{DomainError, DomainResult, ProductId};

use crate::clock::{Clock, SystemClock};
use crate::product::{Category, Product, RATING_MAX, RATING_MIN};
use crate::window::{self, Page};

pub struct Catalog {
    products: RwLock<Vec<Product>>,
    clock: Arc<dyn Clock>,
}

impl core::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Catalog")
            .field("products", &self.read().len())
            .finish_non_exhaustive()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

fn ensure_rating(rating: i32) -> DomainResult<()> {
    if !(RATING_MIN..=RATING_MAX).contains(&rating) {
        return Err(DomainError::invalid_argument(format!(
            "rating must be between {RATING_MIN} and {RATING_MAX}, got {rating}"
        )));
    }
    Ok(())
}

impl Catalog {
    /// Empty catalog on the wall clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            products: RwLock::new(Vec::new()),
            clock,
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Product>> {
        self.products.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Product>> {
        self.products.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn now(&self) -> DateTime<Utc> {
        self.clock.now().trunc_subsecs(0)
    }

    // -------------------------
    // Mutations
    // -------------------------

    /// Append `product`.
    ///
    /// Rejects a blank name, an id already present, or a rating outside
    /// 1..=10. Nothing is stored on failure.
    #[instrument(skip(self, product), fields(id = %product.id()))]
    pub fn add(&self, product: Product) -> DomainResult<()> {
        let mut products = self.write();

        if product.name().trim().is_empty() {
            return Err(DomainError::invalid_argument(format!(
                "cannot add product {}: name must not be blank",
                product.id()
            )));
        }
        if products.iter().any(|p| p.id() == product.id()) {
            return Err(DomainError::invalid_argument(format!(
                "cannot add product {}: id already exists",
                product.id()
            )));
        }
        ensure_rating(product.rating())?;

        info!(name = product.name(), category = %product.category(), "product added");
        products.push(product);
        Ok(())
    }

    /// Build a product stamped with the current second and [`add`](Self::add) it.
    pub fn create(
        &self,
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category: Category,
        rating: i32,
    ) -> DomainResult<Product> {
        let product = Product::new(id, name, category, rating, self.now());
        self.add(product.clone())?;
        Ok(product)
    }

    /// Replace the product with `id` by a revised value at the same position.
    ///
    /// Rating and name are validated before the lookup. An unknown id is not
    /// an error: it returns `Ok(None)` and leaves the catalog untouched.
    #[instrument(skip(self, name))]
    pub fn modify(
        &self,
        id: ProductId,
        name: &str,
        category: Category,
        rating: i32,
    ) -> DomainResult<Option<Product>> {
        ensure_rating(rating)?;
        if name.trim().is_empty() {
            return Err(DomainError::invalid_argument("product name must not be blank"));
        }

        let now = self.now();
        let mut products = self.write();
        let Some(index) = products.iter().position(|p| p.id() == id) else {
            warn!("product could not be located; nothing modified");
            return Ok(None);
        };

        let changed = products[index].revised(name, category, rating, now);
        products[index] = changed.clone();
        info!(modified = changed.is_modified(), "product modified");
        Ok(Some(changed))
    }

    // -------------------------
    // Reads
    // -------------------------

    /// Copy of every product in insertion order.
    pub fn list(&self) -> Vec<Product> {
        self.read().clone()
    }

    /// Copy of every product sorted by id (the display order).
    pub fn list_by_id(&self) -> Vec<Product> {
        let mut products = self.list();
        products.sort_by_key(Product::id);
        products
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// All products carrying `id`; `NotFound` when there are none.
    pub fn get_by_id(&self, id: ProductId) -> DomainResult<Vec<Product>> {
        let found: Vec<Product> = self.read().iter().filter(|p| p.id() == id).cloned().collect();
        if found.is_empty() {
            return Err(DomainError::not_found(format!("no product with id {id}")));
        }
        Ok(found)
    }

    /// Products in `category`, sorted by name ignoring case. May be empty.
    pub fn get_by_category(&self, category: Category) -> Vec<Product> {
        let mut found: Vec<Product> = self
            .read()
            .iter()
            .filter(|p| p.category() == category)
            .cloned()
            .collect();
        found.sort_by_cached_key(|p| p.name().to_lowercase());
        found
    }

    /// Products created strictly after `cutoff`, insertion order.
    pub fn get_created_after(&self, cutoff: DateTime<Utc>) -> Vec<Product> {
        self.read()
            .iter()
            .filter(|p| p.created_date() > cutoff)
            .cloned()
            .collect()
    }

    /// Products whose modification date differs from their creation date.
    pub fn get_modified(&self) -> Vec<Product> {
        self.read().iter().filter(|p| p.is_modified()).cloned().collect()
    }

    /// Products with an id in `start..=end`, sorted by id.
    pub fn ids_between(&self, start: i32, end: i32) -> DomainResult<Vec<Product>> {
        if start <= 0 || end < start {
            return Err(DomainError::invalid_argument(format!(
                "invalid id span start={start} end={end}"
            )));
        }
        let mut found: Vec<Product> = self
            .read()
            .iter()
            .filter(|p| (start..=end).contains(&p.id().get()))
            .cloned()
            .collect();
        if found.is_empty() {
            return Err(DomainError::not_found(format!("no products with ids {start}..={end}")));
        }
        found.sort_by_key(Product::id);
        Ok(found)
    }

    // -------------------------
    // Aggregates
    // -------------------------

    /// Distinct categories holding at least one product, first-seen order.
    pub fn categories_present(&self) -> Vec<Category> {
        let mut seen = Vec::new();
        for product in self.read().iter() {
            if !seen.contains(&product.category()) {
                seen.push(product.category());
            }
        }
        seen
    }

    pub fn count_by_category(&self, category: Category) -> usize {
        self.read().iter().filter(|p| p.category() == category).count()
    }

    /// Count of products per first character of their name (case-sensitive).
    pub fn name_initial_histogram(&self) -> HashMap<char, usize> {
        let mut histogram = HashMap::new();
        for initial in self.read().iter().filter_map(Product::name_initial) {
            *histogram.entry(initial).or_insert(0) += 1;
        }
        histogram
    }

    /// Rating-10 products created in the current calendar month, newest
    /// first. `NotFound` when there are none.
    pub fn recent_max_rating(&self) -> DomainResult<Vec<Product>> {
        let now = self.now();
        let mut found: Vec<Product> = self
            .read()
            .iter()
            .filter(|p| {
                let created = p.created_date();
                p.rating() == RATING_MAX && created.year() == now.year() && created.month() == now.month()
            })
            .cloned()
            .collect();
        if found.is_empty() {
            return Err(DomainError::not_found("no top-rated product created this month"));
        }
        found.sort_by(|a, b| b.created_date().cmp(&a.created_date()));
        Ok(found)
    }

    // -------------------------
    // Windowing
    // -------------------------

    /// 1-based inclusive positions `start..=end` of the id-ordered listing
    /// (sorted before slicing, never insertion order).
    pub fn window_range(&self, start: i64, end: i64) -> DomainResult<Vec<Product>> {
        window::range(&self.list_by_id(), start, end)
    }

    /// Page `page` of the id-ordered listing (sorted before slicing, never
    /// insertion order).
    pub fn paginate(&self, page: i64, size: Option<i64>) -> DomainResult<Page<Product>> {
        window::paginate(&self.list_by_id(), page, size)
    }
}
