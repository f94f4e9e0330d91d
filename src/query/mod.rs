//! Query and filtering layer.
//!
//! Given the store's current contents, a free-text query, and a set of
//! structured filters, this layer produces the subset of listings matching all
//! active criteria, optionally sorted. Everything here is a pure function over
//! borrowed data; the store is never mutated through this module.
//!
//! # Modules
//!
//! - [`filters`]: Criteria types (brackets, sort specs, [`SearchFilters`])
//! - [`engine`]: The filtering/sorting functions themselves
//!
//! # Example
//!
//! ```
//! use hostelfinder::query::{filter_listings, PriceRange, SearchFilters};
//!
//! let mut filters = SearchFilters::new();
//! filters.query = "sunrise".to_string();
//! filters.price = PriceRange::Budget;
//!
//! let results = filter_listings(&[], &filters);
//! assert!(results.is_empty());
//! ```

pub mod engine;
pub mod filters;

pub use engine::{filter_listings, matches, parse_distance_km, sort_listings};
pub use filters::{DistanceRange, PriceRange, SearchFilters, SortKey, SortOrder, SortSpec};
