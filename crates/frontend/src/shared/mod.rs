pub mod components;
pub mod config;
pub mod icons;
pub mod modal_frame;
pub mod number_format;
