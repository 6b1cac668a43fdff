//! Display name entry screen.

use dioxus::prelude::*;
use fanfare_core::strings::{ENTRY_HEADLINE, ENTRY_HINT, ENTRY_PLACEHOLDER, ENTRY_SUBMIT};
use fanfare_core::{DisplayName, PresentationConfig};

use crate::routes::{NameArg, Route};

#[component]
pub fn NameEntryScreen(query: NameArg) -> Element {
    let config = use_context::<PresentationConfig>();
    let navigator = use_navigator();
    let mut draft = use_signal(|| query.query().prefill());

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let name = DisplayName::resolve(&draft.read(), &config.fallback_name);
        tracing::info!(name = %name, "Name submitted");
        navigator.push(Route::video(&name));
    };

    rsx! {
        div {
            class: "entry-screen",

            h1 {
                class: "entry-headline",
                "{ENTRY_HEADLINE}"
            }
            p {
                class: "entry-hint",
                "{ENTRY_HINT}"
            }

            form {
                class: "entry-form card",
                onsubmit,

                input {
                    class: "entry-input",
                    r#type: "text",
                    placeholder: ENTRY_PLACEHOLDER,
                    autofocus: true,
                    value: "{draft}",
                    oninput: move |evt| draft.set(evt.value()),
                }
                button {
                    class: "entry-button",
                    r#type: "submit",
                    "{ENTRY_SUBMIT}"
                }
            }
        }
    }
}
