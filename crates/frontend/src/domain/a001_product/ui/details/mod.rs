use crate::shared::config::use_store_config;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::number_format::format_price;
use contracts::domain::a001_product::Product;
use leptos::prelude::*;

/// Строки подробностей под описанием: размеры, цена (если есть), статус
pub fn detail_lines(product: &Product, currency: &str) -> Vec<(&'static str, String)> {
    let mut lines = vec![("Размеры", product.sizes.clone())];
    if let Some(price) = product.display_price() {
        lines.push(("Цена", format_price(price, currency)));
    }
    lines.push(("Статус", product.status.clone()));
    lines
}

/// Модальное окно с подробностями товара
#[component]
pub fn ProductModal(product: Product, on_close: Callback<()>) -> impl IntoView {
    let config = use_store_config();
    let image_src = product.image_src(&config.placeholder_image);
    let lines = detail_lines(&product, &config.currency);
    let alt = product.name.clone();

    view! {
        <ModalFrame on_close=on_close modal_class="product-modal">
            <img class="product-modal__image" src=image_src alt=alt />
            <h2 class="product-modal__title">{product.name}</h2>
            <p class="product-modal__description">{product.description}</p>
            {lines
                .into_iter()
                .map(|(label, value)| view! {
                    <p class="product-modal__line">
                        <span class="product-modal__label">{format!("{}: ", label)}</span>
                        <span class="product-modal__value">{value}</span>
                    </p>
                })
                .collect_view()}
        </ModalFrame>
    }
}
