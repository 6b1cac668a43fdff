//! Best-effort media commands.
//!
//! The platform may refuse any of these (autoplay policy, fullscreen permission, a missing
//! element). Refusals are logged and dropped in [`dispatch`]; callers never see them.

use async_trait::async_trait;

use crate::error::MediaError;

/// A user- or mount-initiated media request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaCommand {
    /// Start muted playback when the screen mounts.
    Autoplay,
    /// Turn sound on and resume playback.
    Unmute,
    /// Put the video container into native fullscreen.
    Fullscreen,
}

/// The playback element and its container, as exposed by the host platform.
#[async_trait(?Send)]
pub trait MediaSurface {
    async fn play(&self) -> Result<(), MediaError>;

    async fn set_muted(&self, muted: bool) -> Result<(), MediaError>;

    async fn request_fullscreen(&self) -> Result<(), MediaError>;
}

/// Runs `command` against `surface`, returning whether the platform accepted it.
pub async fn dispatch<M>(surface: &M, command: MediaCommand) -> bool
where
    M: MediaSurface + ?Sized,
{
    let result = match command {
        MediaCommand::Autoplay => surface.play().await,
        MediaCommand::Unmute => match surface.set_muted(false).await {
            Ok(()) => surface.play().await,
            Err(e) => Err(e),
        },
        MediaCommand::Fullscreen => surface.request_fullscreen().await,
    };

    match result {
        Ok(()) => {
            tracing::debug!(?command, "Media command accepted");
            true
        }
        Err(e) => {
            tracing::debug!(?command, error = %e, "Media command refused, ignoring");
            false
        }
    }
}
