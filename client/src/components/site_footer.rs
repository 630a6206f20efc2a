//! Page footer with legal links and the configured network endpoints.

#[cfg(all(test, not(target_arch = "wasm32")))]
#[path = "site_footer_test.rs"]
mod site_footer_test;

use leptos::prelude::*;

use crate::components::legal_content_panel::LegalPage;
use crate::config::{ClientConfig, short_key};

/// Footer shown on every page.
///
/// Legal links do not navigate; they hand the chosen page to `on_open_legal`
/// so the owning view can open its modal.
#[component]
pub fn SiteFooter(on_open_legal: Callback<LegalPage>) -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let server_host = config.game_server_host().to_owned();
    let treasury = config.treasury_public_key.as_deref().map(short_key);

    view! {
        <footer class="site-footer">
            <nav class="site-footer__links">
                <button class="site-footer__link" on:click=move |_| on_open_legal.run(LegalPage::Terms)>
                    {LegalPage::Terms.title()}
                </button>
                <span class="site-footer__divider">"|"</span>
                <button class="site-footer__link" on:click=move |_| on_open_legal.run(LegalPage::Privacy)>
                    {LegalPage::Privacy.title()}
                </button>
            </nav>
            <span class="site-footer__spacer"></span>
            <span class="site-footer__server" title="Game server">{server_host}</span>
            {treasury.map(|key| view! {
                <span class="site-footer__divider">"|"</span>
                <span class="site-footer__treasury" title="Treasury">"Treasury " {key}</span>
            })}
        </footer>
    }
}
