//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are pure functions of their props. The owning view keeps the
//! state and passes down values plus callbacks; only `SiteFooter` reads a
//! context (the build-time `ClientConfig`).

pub mod legal_content_panel;
pub mod modal_shell;
pub mod site_footer;
