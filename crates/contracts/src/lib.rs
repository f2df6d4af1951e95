//! Data contracts shared by the storefront UI.

pub mod domain;
