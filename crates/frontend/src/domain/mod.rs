pub mod a001_item;
pub mod a002_lote;
pub mod a003_proveedor;
pub mod a004_ubicacion;
pub mod a005_comprobante;
pub mod a006_existencia;
