//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::legal_content_panel::{LegalContentPanel, LegalPage, PrivacyPolicyPanel};
use crate::components::modal_shell::ModalShell;
use crate::components::site_footer::SiteFooter;
use crate::config::ClientConfig;
use crate::state::modal::ModalState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the build-time config, owns the legal modal state, and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ClientConfig::from_build_env());

    let modal = RwSignal::new(ModalState::default());
    let modal_page = RwSignal::new(LegalPage::default());

    let on_open_legal = Callback::new(move |page: LegalPage| {
        log::debug!("opening legal modal: {}", page.title());
        modal_page.set(page);
        modal.update(|m| m.open(page.title()));
    });
    let on_close = Callback::new(move |()| modal.update(ModalState::dismiss));

    view! {
        <Stylesheet id="leptos" href="/pkg/arena.css"/>
        <Title text="Arena"/>

        <Router>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("terms") view=|| view! { <LegalContentPanel/> }/>
                    <Route path=StaticSegment("privacy") view=|| view! { <PrivacyPolicyPanel/> }/>
                </Routes>
            </main>
        </Router>

        <SiteFooter on_open_legal=on_open_legal/>

        <ModalShell
            is_open=Signal::derive(move || modal.get().is_open())
            on_close=on_close
            title=Signal::derive(move || modal.get().title().to_owned())
        >
            {move || match modal_page.get() {
                LegalPage::Terms => view! { <LegalContentPanel embedded=true/> }.into_any(),
                LegalPage::Privacy => view! { <PrivacyPolicyPanel embedded=true/> }.into_any(),
            }}
        </ModalShell>
    }
}

/// Landing page.
#[component]
fn HomePage() -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let server_host = config.game_server_host().to_owned();

    view! {
        <section class="home-page">
            <h1>"Arena"</h1>
            <p class="home-page__tagline">"Head-to-head matches with on-chain stakes."</p>
            <p class="home-page__server">"Matches are hosted on " <code>{server_host}</code></p>
        </section>
    }
}
