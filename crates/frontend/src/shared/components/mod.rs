pub mod filter_panel;
pub mod list_status;
pub mod page_header;
pub mod pagination_controls;
pub mod stat_card;
pub mod table;

pub use filter_panel::{ActiveFilterChips, FilterPanel, FilterTag};
pub use list_status::ListStatus;
pub use page_header::PageHeader;
pub use pagination_controls::PaginationControls;
pub use stat_card::{format_count, StatCard, StatTone};
pub use table::SortableHeaderCell;
