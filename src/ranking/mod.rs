pub mod engine;

pub use engine::{RankedOrder, rank, sort_key};
