use crate::domain::a001_product::ui::list::ProductCatalogPage;
use crate::layout::Shell;
use crate::shared::config::StoreConfig;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Provide the store settings to the whole app via context.
    provide_context(StoreConfig::default());

    view! {
        <ConfigProvider>
            <Shell>
                <ProductCatalogPage />
            </Shell>
        </ConfigProvider>
    }
}
