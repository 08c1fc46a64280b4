pub mod printer;
pub mod server;
pub mod transformer;

pub use transformer::{CalculatedRecord, ResultTransformer, WaveGroup, group_by_wave};
