//! Demo data for local runs (`CATALOG_SEED_DEMO=1`).

use catalog_core::DomainResult;
use catalog_products::{Catalog, Category};

/// Insert the three demo products (ids 2, 7 and 10).
pub fn demo_products(catalog: &Catalog) -> DomainResult<()> {
    catalog.create(2, "Hårblekning", Category::Health, 2)?;
    catalog.create(7, "Knäskydd", Category::Clothes, 5)?;
    catalog.create(10, "Byxa", Category::Clothes, 10)?;
    Ok(())
}
