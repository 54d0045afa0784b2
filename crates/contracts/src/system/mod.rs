pub mod auditoria;
pub mod dashboard;
pub mod session;
pub mod usuarios;
