use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use catalog_core::{DomainError, ProductId};

/// Lowest accepted rating (inclusive).
pub const RATING_MIN: i32 = 1;
/// Highest accepted rating (inclusive).
pub const RATING_MAX: i32 = 10;

/// Closed set of product categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Health,
    Sport,
    Clothes,
    Workout,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Health,
        Category::Sport,
        Category::Clothes,
        Category::Workout,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Health => "health",
            Category::Sport => "sport",
            Category::Clothes => "clothes",
            Category::Workout => "workout",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Category {
    type Err = DomainError;

    /// Decodes a boundary string (trimmed, case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| {
                DomainError::invalid_argument(format!(
                    "unknown category '{}'; expected one of: health, sport, clothes, workout",
                    s.trim()
                ))
            })
    }
}

/// One catalog entry.
///
/// Products are immutable values: a modification produces a new `Product`
/// (see [`Product::revised`]) that replaces the old one in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    id: ProductId,
    name: String,
    category: Category,
    rating: i32,
    created_date: DateTime<Utc>,
    last_modified_date: DateTime<Utc>,
}

impl Product {
    /// A freshly created product: both timestamps are `at`, truncated to
    /// whole seconds.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category: Category,
        rating: i32,
        at: DateTime<Utc>,
    ) -> Self {
        let at = at.trunc_subsecs(0);
        Self {
            id: id.into(),
            name: name.into(),
            category,
            rating,
            created_date: at,
            last_modified_date: at,
        }
    }

    /// Replacement value carrying new attributes, the same id and creation
    /// date, and `at` (seconds) as the modification date.
    pub fn revised(
        &self,
        name: impl Into<String>,
        category: Category,
        rating: i32,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: self.id,
            name: name.into(),
            category,
            rating,
            created_date: self.created_date,
            last_modified_date: at.trunc_subsecs(0),
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn rating(&self) -> i32 {
        self.rating
    }

    pub fn created_date(&self) -> DateTime<Utc> {
        self.created_date
    }

    pub fn last_modified_date(&self) -> DateTime<Utc> {
        self.last_modified_date
    }

    /// True once the product has been replaced by a modification at a later
    /// second than its creation.
    pub fn is_modified(&self) -> bool {
        self.created_date != self.last_modified_date
    }

    /// First character of the name, as written.
    pub fn name_initial(&self) -> Option<char> {
        self.name.chars().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn test_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 9, 30, 0).unwrap()
    }

    #[test]
    fn new_product_truncates_to_seconds_and_is_unmodified() {
        let at = test_time() + Duration::milliseconds(750);
        let product = Product::new(1, "Hatt", Category::Clothes, 5, at);

        assert_eq!(product.created_date(), test_time());
        assert_eq!(product.last_modified_date(), test_time());
        assert!(!product.is_modified());
    }

    #[test]
    fn revised_keeps_id_and_creation_date() {
        let product = Product::new(2, "Balsam", Category::Health, 3, test_time());
        let later = test_time() + Duration::seconds(3) + Duration::milliseconds(200);

        let changed = product.revised("Mascara", Category::Health, 5, later);

        assert_eq!(changed.id(), product.id());
        assert_eq!(changed.name(), "Mascara");
        assert_eq!(changed.rating(), 5);
        assert_eq!(changed.created_date(), product.created_date());
        assert_eq!(changed.last_modified_date(), test_time() + Duration::seconds(3));
        assert!(changed.is_modified());
    }

    #[test]
    fn revision_within_the_same_second_is_not_a_modification() {
        let product = Product::new(2, "Balsam", Category::Health, 3, test_time());
        let changed = product.revised("Balsam", Category::Health, 4, test_time() + Duration::milliseconds(10));
        assert!(!changed.is_modified());
    }

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!(" Sport ".parse::<Category>().unwrap(), Category::Sport);
        assert_eq!("WORKOUT".parse::<Category>().unwrap(), Category::Workout);

        match "toys".parse::<Category>().unwrap_err() {
            DomainError::InvalidArgument(msg) => assert!(msg.contains("toys")),
            other => panic!("Expected InvalidArgument, got {other:?}"),
        }
    }

    #[test]
    fn serializes_dates_as_iso8601_and_camel_case() {
        let product = Product::new(10, "Byxa", Category::Clothes, 10, test_time());
        let json = serde_json::to_value(&product).unwrap();

        assert_eq!(json["id"], 10);
        assert_eq!(json["category"], "clothes");
        assert_eq!(json["createdDate"], "2026-10-19T09:30:00Z");
        assert_eq!(json["lastModifiedDate"], "2026-10-19T09:30:00Z");
    }

    #[test]
    fn name_initial_is_case_sensitive() {
        let upper = Product::new(1, "Apple", Category::Health, 5, test_time());
        let lower = Product::new(2, "apple", Category::Health, 5, test_time());
        assert_eq!(upper.name_initial(), Some('A'));
        assert_eq!(lower.name_initial(), Some('a'));
    }
}
