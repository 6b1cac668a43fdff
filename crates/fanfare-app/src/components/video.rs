//! Presentation screen: looping video with captions, confetti and controls.

use dioxus::prelude::*;
use fanfare_core::particles::{self, Viewport};
use fanfare_core::{dispatch, DisplayName, MediaCommand, Presentation, PresentationConfig};

use crate::components::{CaptionBanner, ConfettiOverlay, StageControls};
use crate::media::{detect_device, watch_playback, EvalMedia, STAGE_ID, VIDEO_ID};
use crate::routes::{NameArg, Route};

#[component]
pub fn VideoScreen(query: NameArg) -> Element {
    match query.query().display_name() {
        Some(name) => rsx! {
            Stage { key: "{name}", name: name.clone() }
        },
        None => rsx! { RedirectToEntry {} },
    }
}

/// Sends visits without a name back to the entry form.
#[component]
fn RedirectToEntry() -> Element {
    let navigator = use_navigator();

    use_effect(move || {
        tracing::info!("No name in the address, returning to entry");
        navigator.replace(Route::entry());
    });

    rsx! {}
}

#[component]
fn Stage(name: DisplayName) -> Element {
    let config = use_context::<PresentationConfig>();

    let mut presentation = use_signal({
        let config = config.clone();
        move || {
            tracing::info!(name = %name, "Presentation mounted");
            Presentation::new(name, &config)
        }
    });

    let mut viewport = use_signal(Viewport::default);
    let confetti = config.confetti.clone();
    let pieces = use_memo(move || particles::layout(&confetti, viewport()));

    let device = use_resource(detect_device);
    let show_fullscreen = matches!(*device.read(), Some(d) if d.shows_fullscreen_control());

    let frame = presentation.read().frame();

    rsx! {
        div {
            id: STAGE_ID,
            class: "stage",
            onresize: move |evt| {
                if let Ok(size) = evt.data().get_content_box_size() {
                    let next = Viewport::new(size.width, size.height);
                    if *viewport.peek() != next {
                        viewport.set(next);
                    }
                }
            },

            video {
                id: VIDEO_ID,
                class: "stage-video",
                src: "{config.video_src}",
                autoplay: true,
                r#loop: true,
                muted: true,
                playsinline: true,
                controls: false,
                preload: "auto",
                onmounted: move |_| {
                    spawn(async move {
                        dispatch(&EvalMedia::default(), MediaCommand::Autoplay).await;
                    });
                    spawn(async move {
                        watch_playback(VIDEO_ID, move |t| {
                            presentation.write().on_time_update(t);
                        })
                        .await;
                    });
                },
            }

            if frame.confetti {
                ConfettiOverlay { pieces: pieces() }
            }

            {frame.caption.map(|text| rsx! { CaptionBanner { text } })}

            StageControls { show_fullscreen }
        }
    }
}
