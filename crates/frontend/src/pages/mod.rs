pub mod informativas;
pub mod inventarios;

pub use informativas::{OrdenesPage, PacientesPage, ReportesPage};
pub use inventarios::InventariosPage;
