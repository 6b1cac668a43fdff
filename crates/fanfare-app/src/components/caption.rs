use dioxus::prelude::*;

/// Bottom-centered caption over the video.
#[component]
pub fn CaptionBanner(text: String) -> Element {
    rsx! {
        div {
            class: "caption-banner",
            p {
                class: "caption-text",
                "{text}"
            }
        }
    }
}
