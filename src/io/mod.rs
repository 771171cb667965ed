pub mod dot;
pub mod loader;
