use crate::shared::config::use_store_config;
use leptos::prelude::*;

/// Decorative store banner: background image with the store name on top.
#[component]
pub fn Banner() -> impl IntoView {
    let config = use_store_config();
    let style = config.banner_style();

    view! {
        <header data-zone="banner" class="banner" style=style>
            <div class="banner__overlay">
                <h1 class="banner__title">{config.store_name}</h1>
            </div>
        </header>
    }
}
