pub mod banner;
pub mod footer;

use banner::Banner;
use footer::Footer;
use leptos::prelude::*;

/// Page shell of the storefront.
///
/// ```text
/// +------------------------------------------+
/// |                 Banner                   |
/// +------------------------------------------+
/// |                 Content                  |
/// +------------------------------------------+
/// |                 Footer                   |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Banner />
            <main class="app-main">
                {children()}
            </main>
            <Footer />
        </div>
    }
}
