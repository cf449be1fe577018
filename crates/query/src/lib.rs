//! Product listing query pipeline.
//!
//! Filter, sort and paginate a read-only catalog into a [`View`]. Every
//! function here is pure: the same catalog and [`QueryState`] always produce
//! the same view, recomputed from scratch on each call.
//!
//! [`ListingSession`] hosts the pipeline for an interactive listing page: it
//! owns the current state, replaces it on every control change and notifies a
//! [`Navigator`] when the category should be reflected in the address bar.

pub mod config;
pub mod filter;
pub mod location;
pub mod page_window;
pub mod paginate;
pub mod pipeline;
pub mod session;
pub mod sort;

pub use config::ListingConfig;
pub use filter::{FilterSpec, PriceRange, filter, matches};
pub use page_window::{PageLink, page_links};
pub use paginate::{PageSize, paginate, total_pages};
pub use pipeline::{QueryState, View, compute, recompute};
pub use session::{HistoryNavigator, ListingSession, Navigator, NoopNavigator};
pub use sort::{SortOption, sort};
