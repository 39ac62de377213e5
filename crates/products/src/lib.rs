//! Products domain module (in-memory catalog).
//!
//! This crate contains the business rules for the product catalog: insert and
//! modify invariants, filtered reads, aggregates and windowing. It is
//! deterministic domain logic (no IO, no HTTP); time is read through [`Clock`].

pub mod catalog;
pub mod clock;
pub mod product;
pub mod window;

pub use catalog::Catalog;
pub use clock::{Clock, ManualClock, SystemClock};
pub use product::{Category, Product, RATING_MAX, RATING_MIN};
pub use window::{Page, PageMeta};
