//! Unmute, fullscreen and back controls over the video.

use dioxus::prelude::*;
use fanfare_core::strings::{BACK_LABEL, FULLSCREEN_LABEL, UNMUTE_LABEL};
use fanfare_core::{dispatch, MediaCommand};

use crate::media::EvalMedia;
use crate::routes::Route;

#[component]
pub fn StageControls(show_fullscreen: bool) -> Element {
    rsx! {
        div {
            class: "stage-controls",

            button {
                class: "control-button",
                onclick: move |_| {
                    spawn(async move {
                        dispatch(&EvalMedia::default(), MediaCommand::Unmute).await;
                    });
                },
                "{UNMUTE_LABEL}"
            }

            if show_fullscreen {
                button {
                    class: "control-button",
                    onclick: move |_| {
                        spawn(async move {
                            dispatch(&EvalMedia::default(), MediaCommand::Fullscreen).await;
                        });
                    },
                    "{FULLSCREEN_LABEL}"
                }
            }

            Link {
                class: "back-link",
                to: Route::entry(),
                "{BACK_LABEL}"
            }
        }
    }
}
