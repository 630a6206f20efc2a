//! Reusable modal overlay: dimmed backdrop, bounded panel, title header with
//! a close button, and a scrollable body for arbitrary content.

#[cfg(all(test, not(target_arch = "wasm32")))]
#[path = "modal_shell_test.rs"]
mod modal_shell_test;

use std::sync::atomic::{AtomicUsize, Ordering};

use leptos::html::Div;
use leptos::prelude::*;

static NEXT_TITLE_ID: AtomicUsize = AtomicUsize::new(0);

/// Modal overlay driven entirely by its props.
///
/// When `is_open` is false nothing is mounted. The close button, a click on
/// the backdrop, and `Escape` inside the panel each call `on_close` once;
/// clicks inside the panel do not reach the backdrop. The panel takes focus
/// when it mounts so `Escape` works without a click first.
///
/// `title_id` names the header element for `aria-labelledby`; each instance
/// gets a distinct one when it is not given.
#[component]
pub fn ModalShell(
    #[prop(into)] is_open: Signal<bool>,
    on_close: Callback<()>,
    #[prop(into)] title: Signal<String>,
    #[prop(optional, into)] title_id: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let title_id = title_id.unwrap_or_else(next_title_id);
    let panel_ref = NodeRef::<Div>::new();

    Effect::new(move || {
        if let Some(panel) = panel_ref.get() {
            let _ = panel.focus();
        }
    });

    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if is_dismiss_key(&ev.key()) {
            ev.prevent_default();
            request_dismiss(on_close);
        }
    });

    move || {
        is_open.get().then(|| {
            let children = children.clone();
            let title_id = title_id.clone();
            view! {
                <div class="modal-shell__backdrop" on:click=move |_| request_dismiss(on_close)>
                    <div
                        class="modal-shell"
                        node_ref=panel_ref
                        role="dialog"
                        aria-modal="true"
                        aria-labelledby=title_id.clone()
                        tabindex="0"
                        on:click=move |ev| ev.stop_propagation()
                        on:keydown=move |ev| on_keydown.run(ev)
                    >
                        <div class="modal-shell__header">
                            <h2 id=title_id.clone() class="modal-shell__title">{move || title.get()}</h2>
                            <button
                                class="modal-shell__close"
                                aria-label="Close"
                                title="Close"
                                on:click=move |_| request_dismiss(on_close)
                            >
                                "✕"
                            </button>
                        </div>
                        <div class="modal-shell__body">{children()}</div>
                    </div>
                </div>
            }
        })
    }
}

fn next_title_id() -> String {
    format!("modal-shell-title-{}", NEXT_TITLE_ID.fetch_add(1, Ordering::Relaxed))
}

/// Single entry point for every dismiss path.
pub(crate) fn request_dismiss(on_close: Callback<()>) {
    log::debug!("modal dismiss requested");
    on_close.run(());
}

/// Keys that close the modal when pressed inside the panel.
pub(crate) fn is_dismiss_key(key: &str) -> bool {
    key == "Escape"
}
