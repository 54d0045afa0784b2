pub mod d100_resumen;

pub use d100_resumen::ui::ResumenDashboard;
