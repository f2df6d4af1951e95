//! Store configuration
//!
//! Static settings of the storefront: resource URLs and contact details.
//! Provided once in `App` via context and read by components with
//! [`use_store_config`].

use leptos::prelude::*;

/// Contact details shown in the footer
#[derive(Clone, Debug, PartialEq)]
pub struct StoreContacts {
    pub phone: String,
    pub email: String,
    pub instagram_handle: String,
    pub instagram_url: String,
}

/// Storefront settings
#[derive(Clone, Debug, PartialEq)]
pub struct StoreConfig {
    /// Name shown in the banner and footer
    pub store_name: String,
    /// Static catalog resource, relative to the page origin
    pub catalog_url: String,
    /// Decorative banner background
    pub banner_image: String,
    /// Thumbnail used when a product has no image
    pub placeholder_image: String,
    /// Currency sign appended to prices
    pub currency: String,
    pub contacts: StoreContacts,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            store_name: "DENE Store".to_string(),
            catalog_url: "/data/catalog.json".to_string(),
            banner_image: "/banner.jpg".to_string(),
            placeholder_image: "/no-image.png".to_string(),
            currency: "₸".to_string(),
            contacts: StoreContacts {
                phone: "+7 747 555 48 69".to_string(),
                email: "jmd.dene@gmail.com".to_string(),
                instagram_handle: "@jmd.dene".to_string(),
                instagram_url: "https://instagram.com/jmd.dene".to_string(),
            },
        }
    }
}

impl StoreConfig {
    /// Inline style for the banner background
    pub fn banner_style(&self) -> String {
        format!("background-image: url('{}');", self.banner_image)
    }
}

/// Read the store config from context, falling back to defaults
/// when a component is rendered outside of `App`.
pub fn use_store_config() -> StoreConfig {
    use_context::<StoreConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_resources() {
        let config = StoreConfig::default();
        assert_eq!(config.catalog_url, "/data/catalog.json");
        assert_eq!(config.banner_image, "/banner.jpg");
        assert_eq!(config.placeholder_image, "/no-image.png");
    }

    #[test]
    fn test_banner_style() {
        let config = StoreConfig::default();
        assert_eq!(config.banner_style(), "background-image: url('/banner.jpg');");
    }
}
