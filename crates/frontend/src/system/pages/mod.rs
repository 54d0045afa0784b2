pub mod login;
pub mod not_found;
pub mod recuperar_contrasena;
