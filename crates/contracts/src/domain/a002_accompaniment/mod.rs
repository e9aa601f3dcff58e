pub mod aggregate;

pub use aggregate::{Accompaniment, AccompanimentDto};
