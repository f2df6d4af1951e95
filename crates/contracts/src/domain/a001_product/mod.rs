pub mod aggregate;

pub use aggregate::{parse_catalog, Product};
