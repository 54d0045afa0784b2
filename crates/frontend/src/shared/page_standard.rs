//! Page category constants.
//!
//! Every routed page declares an HTML `id` of the form `{entity}--{category}`
//! (e.g. `"a005_comprobante--list"`) and a `data-page-category` attribute, so the
//! DOM id found in the inspector points straight at the source directory.

/// Table with search, filters and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Metric cards and summaries.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Administration pages (audit, users).
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Informational pages without the standard header/content split.
pub const PAGE_CAT_STATIC: &str = "static";

pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DASHBOARD,
    PAGE_CAT_SYSTEM,
    PAGE_CAT_STATIC,
];

/// `{entity}--{category}` with both halves non-empty.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && !category.is_empty(),
        None => false,
    }
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_ids_need_both_halves() {
        assert!(is_valid_page_id("a003_proveedor--list"));
        assert!(!is_valid_page_id("a003_proveedor"));
        assert!(!is_valid_page_id("--list"));
        assert!(is_known_category(PAGE_CAT_SYSTEM));
        assert!(!is_known_category("legacy"));
    }
}
