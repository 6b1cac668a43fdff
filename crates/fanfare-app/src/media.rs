//! Video element control through `document::eval`.

use async_trait::async_trait;
use dioxus::prelude::*;
use fanfare_core::{Device, MediaError, MediaSurface};

pub const VIDEO_ID: &str = "fanfare-video";
pub const STAGE_ID: &str = "fanfare-stage";

/// The presentation video and the container that goes fullscreen, addressed by element id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EvalMedia {
    video_id: &'static str,
    container_id: &'static str,
}

impl EvalMedia {
    pub const fn new(video_id: &'static str, container_id: &'static str) -> Self {
        Self {
            video_id,
            container_id,
        }
    }

    /// Runs a script that returns `false` when its element is missing and throws on refusal.
    async fn run(&self, element_id: &str, script: String) -> Result<(), MediaError> {
        match document::eval(&script).join::<bool>().await {
            Ok(true) => Ok(()),
            Ok(false) => Err(MediaError::ElementMissing(element_id.to_string())),
            Err(e) => Err(MediaError::Rejected(e.to_string())),
        }
    }
}

impl Default for EvalMedia {
    fn default() -> Self {
        Self::new(VIDEO_ID, STAGE_ID)
    }
}

#[async_trait(?Send)]
impl MediaSurface for EvalMedia {
    async fn play(&self) -> Result<(), MediaError> {
        let script = format!(
            r#"
            const video = document.getElementById("{}");
            if (!video) return false;
            await video.play();
            return true;
            "#,
            self.video_id
        );
        self.run(self.video_id, script).await
    }

    async fn set_muted(&self, muted: bool) -> Result<(), MediaError> {
        let script = format!(
            r#"
            const video = document.getElementById("{}");
            if (!video) return false;
            video.muted = {};
            return true;
            "#,
            self.video_id, muted
        );
        self.run(self.video_id, script).await
    }

    async fn request_fullscreen(&self) -> Result<(), MediaError> {
        let script = format!(
            r#"
            const stage = document.getElementById("{}");
            if (!stage || !stage.requestFullscreen) return false;
            await stage.requestFullscreen();
            return true;
            "#,
            self.container_id
        );
        self.run(self.container_id, script).await
    }
}

/// Forwards every `timeupdate` of the video to `on_tick` until the listener closes.
///
/// Runs for as long as the owning scope keeps the task alive.
pub async fn watch_playback(video_id: &str, mut on_tick: impl FnMut(f64)) {
    let script = format!(
        r#"
        const video = document.getElementById("{video_id}");
        if (!video) return;
        video.addEventListener("timeupdate", () => dioxus.send(video.currentTime));
        await new Promise(() => {{}});
        "#
    );

    let mut listener = document::eval(&script);
    loop {
        match listener.recv::<f64>().await {
            Ok(t) => on_tick(t),
            Err(e) => {
                tracing::debug!(error = %e, "Playback listener closed");
                break;
            }
        }
    }
}

/// Classifies the host from its user agent; unknown hosts count as desktop.
pub async fn detect_device() -> Device {
    match document::eval("return navigator.userAgent;").join::<String>().await {
        Ok(user_agent) => {
            let device = Device::from_user_agent(&user_agent);
            tracing::debug!(?device, "Detected device");
            device
        }
        Err(e) => {
            tracing::debug!(error = %e, "User agent unavailable");
            Device::default()
        }
    }
}
