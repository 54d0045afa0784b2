//! Client-side list controller: search, categorical filters, single-column sort
//! and pagination over an in-memory collection loaded from one REST endpoint.
//!
//! Every list page configures a [`ListState`] with a [`ListConfig`] instead of
//! re-implementing these rules.

pub mod field;
pub mod pagination;
pub mod query;
pub mod sort;
pub mod state;

pub use field::{FieldValue, EMPTY_DISPLAY};
pub use pagination::{page_window, PageInfo, PageLink, DEFAULT_PAGE_SIZE_OPTIONS};
pub use query::{FilterSelection, ListRecord};
pub use sort::{SortDirection, SortSpec};
pub use state::{ListConfig, ListState, LoadPhase, LoadTicket, MutationStrategy};
