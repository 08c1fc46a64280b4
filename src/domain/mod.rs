pub mod lenient;
pub mod models;

pub use models::*;
