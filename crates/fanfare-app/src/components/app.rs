//! Root application component.

use dioxus::prelude::*;
use fanfare_core::PresentationConfig;

use crate::routes::Route;

/// Root application component.
#[component]
pub fn App() -> Element {
    use_context_provider::<PresentationConfig>(crate::config);
    let theme = crate::startup_theme();

    rsx! {
        div {
            class: "themed-root",
            "data-theme": theme.css_value(),
            Router::<Route> {}
        }
    }
}

/// Web entry point; desktop builds inject the stylesheet through the window head instead.
#[component]
pub fn WebRoot() -> Element {
    rsx! {
        style { {crate::STYLES_CSS} }
        App {}
    }
}
