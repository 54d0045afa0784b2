pub mod csv;
pub mod date_format;
pub mod list_view;
pub mod validation;
