use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Modal frame container (overlay + positioned surface + close button).
///
/// Closes only through the close button: no overlay click, no Escape key.
#[component]
pub fn ModalFrame(
    /// Called when the close button is clicked.
    on_close: Callback<()>,
    /// z-index for overlay stacking (default: 1000).
    #[prop(optional)]
    z_index: Option<i32>,
    /// Extra class for the modal surface (`div.modal`).
    #[prop(optional, into)]
    modal_class: Option<String>,
    children: Children,
) -> impl IntoView {
    let z_index = z_index.unwrap_or(1000);

    let handle_close = move |_: ev::MouseEvent| {
        // Defer close to next tick: the button is removed together with the modal,
        // Leptos event delegation must not call a dropped handler.
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            on_close.run(());
        });
    };

    let modal_class = match modal_class {
        Some(cls) => format!("modal {cls}"),
        None => "modal".to_string(),
    };

    view! {
        <div class="modal-overlay" style=format!("z-index: {z_index};")>
            <div class=modal_class style="position: relative;" role="dialog" aria-modal="true">
                <button
                    class="button button--icon modal__close"
                    aria-label="Закрыть"
                    on:click=handle_close
                >
                    {icon("x")}
                </button>
                {children()}
            </div>
        </div>
    }
}
