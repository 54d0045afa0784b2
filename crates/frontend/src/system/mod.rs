pub mod auditoria;
pub mod auth;
pub mod pages;
pub mod usuarios;
