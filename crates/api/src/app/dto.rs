use std::collections::BTreeMap;
use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use catalog_products::{Category, Page, PageMeta, Product};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub id: i32,
    pub name: String,
    pub category: Category,
    pub rating: i32,
}

#[derive(Debug, Deserialize)]
pub struct ModifyProductRequest {
    pub name: String,
    pub category: Category,
    pub rating: i32,
}

/// `?start=&end=`; `start` defaults to 1 and a missing `end` is rejected by
/// the range check.
#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    #[serde(default = "default_start")]
    pub start: i64,
    #[serde(default)]
    pub end: i64,
}

fn default_start() -> i64 {
    1
}

/// `?page=&size=`; a missing page returns everything.
///
/// `size=-1` means "unset" and falls back to the default page size; any other
/// non-positive size is rejected by the catalog.
#[derive(Debug, Deserialize)]
pub struct PaginationQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
}

impl PaginationQuery {
    pub const UNSET_SIZE: i64 = -1;

    pub fn size(&self) -> Option<i64> {
        self.size.filter(|s| *s != Self::UNSET_SIZE)
    }
}

#[derive(Debug, Deserialize)]
pub struct CreatedAfterQuery {
    pub date: DateTime<Utc>,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct PageResponse {
    pub products: Vec<Product>,
    pub pagination: PageMeta,
}

impl From<Page<Product>> for PageResponse {
    fn from(page: Page<Product>) -> Self {
        Self {
            products: page.items,
            pagination: page.meta,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CategoryCountResponse {
    pub category: Category,
    pub count: usize,
}

// -------------------------
// JSON mapping helpers
// -------------------------

/// Histogram keyed by the initial as a string, in stable key order.
pub fn initials_to_json(histogram: HashMap<char, usize>) -> serde_json::Value {
    let ordered: BTreeMap<String, usize> = histogram
        .into_iter()
        .map(|(initial, count)| (initial.to_string(), count))
        .collect();
    serde_json::json!(ordered)
}
