use crate::shared::components::{stagger_delay, CardAnimated};
use crate::shared::config::use_store_config;
use crate::shared::number_format::format_price;
use contracts::domain::a001_product::Product;
use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor};

/// Карточка товара в сетке каталога.
///
/// Клик по карточке вызывает `on_click`; других побочных эффектов нет.
#[component]
pub fn ProductCard(
    product: Product,
    /// Позиция в каталоге, задаёт каскадную задержку появления
    #[prop(optional)]
    index: usize,
    on_click: Callback<()>,
) -> impl IntoView {
    let config = use_store_config();
    let image_src = product.image_src(&config.placeholder_image);
    let price = product
        .display_price()
        .map(|p| format_price(p, &config.currency));
    let alt = product.name.clone();

    view! {
        <div class="product-card" on:click=move |_| on_click.run(())>
            <CardAnimated delay_ms=stagger_delay(index) class="product-card__surface">
                <img class="product-card__image" src=image_src alt=alt />
                <h3 class="product-card__title">{product.name}</h3>
                <p class="product-card__description">{product.description}</p>
                {price.map(|p| view! { <span class="product-card__price">{p}</span> })}
                <div class="product-card__status">
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        {product.status}
                    </Badge>
                </div>
            </CardAnimated>
        </div>
    }
}
