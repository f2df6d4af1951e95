pub mod card_animated;

pub use card_animated::{stagger_delay, CardAnimated};
