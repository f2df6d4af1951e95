pub mod state;

use super::card::ProductCard;
use super::details::ProductModal;
use crate::domain::a001_product::api;
use crate::shared::config::use_store_config;
use contracts::domain::a001_product::Product;
use leptos::prelude::*;
use state::create_state;
use wasm_bindgen_futures::spawn_local;

/// Страница каталога: сетка карточек и модальное окно выбранного товара.
///
/// Каталог загружается один раз при монтировании. Ошибка загрузки
/// только пишется в консоль, сетка остаётся пустой.
#[component]
pub fn ProductCatalogPage() -> impl IntoView {
    let config = use_store_config();
    let state = create_state();

    // Загрузка каталога при монтировании
    let catalog_url = config.catalog_url;
    Effect::new(move |_| {
        let url = catalog_url.clone();
        spawn_local(async move {
            match api::fetch_catalog(&url).await {
                Ok(products) => {
                    log::info!("Catalog loaded: {} products", products.len());
                    state.update(|s| s.load(products));
                }
                Err(err) => {
                    log::error!("Failed to load catalog from {}: {}", url, err);
                    state.update(|s| s.fail());
                }
            }
        });
    });

    let items = move || {
        state.with(|s| {
            s.catalog
                .iter()
                .cloned()
                .enumerate()
                .collect::<Vec<(usize, Product)>>()
        })
    };

    let close = Callback::new(move |_: ()| {
        log::debug!("Product modal closed");
        state.update(|s| s.close());
    });

    view! {
        <div
            class="catalog-grid"
            aria-busy=move || (!state.with(|s| s.is_loaded)).to_string()
        >
            <For
                each=items
                key=|(index, _)| *index
                children=move |(index, product)| {
                    let selected = product.clone();
                    let on_click = Callback::new(move |_: ()| {
                        log::debug!("Product selected: #{} {}", index, selected.name);
                        state.update(|s| s.select(selected.clone()));
                    });
                    view! { <ProductCard product=product index=index on_click=on_click /> }
                }
            />
        </div>
        {move || {
            state
                .with(|s| s.selected.clone())
                .map(|product| view! { <ProductModal product=product on_close=close /> })
        }}
    }
}
