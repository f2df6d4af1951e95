use crate::shared::config::use_store_config;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let config = use_store_config();
    let contacts = config.contacts;
    let phone_href = format!("tel:{}", contacts.phone.replace(' ', ""));
    let email_href = format!("mailto:{}", contacts.email);

    view! {
        <footer data-zone="footer" class="footer">
            <p class="footer__copyright">"© " {config.store_name}</p>
            <p class="footer__contacts">
                <a class="footer__link" href=phone_href>{icon("phone")} {contacts.phone}</a>
                <a class="footer__link" href=email_href>{icon("mail")} {contacts.email}</a>
                <a class="footer__link" href=contacts.instagram_url target="_blank" rel="noopener">
                    {icon("instagram")} {contacts.instagram_handle}
                </a>
            </p>
        </footer>
    }
}
