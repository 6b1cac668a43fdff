//! Core logic for the Fanfare celebration screens
//!
//! Everything here is framework-free and synchronous except the [`MediaSurface`] seam:
//!
//! - [`DisplayName`] and [`NameQuery`]: the name carried from the entry form to the video
//! - [`CaptionTable`]: half-open playback intervals mapped to caption text
//! - [`ConfettiTrigger`]: the edge-triggered confetti flag with loop-restart detection
//! - [`Presentation`]: the per-visit state fed by media timing ticks
//! - [`particles`]: deterministic confetti layout for the overlay
//! - [`dispatch`]: best-effort play, unmute, and fullscreen requests
//!
//! # Example
//!
//! ```
//! use fanfare_core::{DisplayName, Presentation, PresentationConfig};
//!
//! let config = PresentationConfig::default();
//! let name = DisplayName::resolve("김코드", &config.fallback_name);
//! let mut presentation = Presentation::new(name, &config);
//!
//! presentation.on_time_update(7.0);
//! assert!(presentation.confetti_active());
//! assert!(presentation.caption().unwrap().contains("김코드"));
//! ```

pub mod caption;
pub mod config;
pub mod confetti;
pub mod device;
pub mod error;
pub mod media;
pub mod name;
pub mod particles;
pub mod presentation;
pub mod query;
pub mod strings;

pub use caption::{CaptionCue, CaptionTable, NAME_PLACEHOLDER};
pub use config::{ConfettiConfig, PresentationConfig};
pub use confetti::{ConfettiEdge, ConfettiState, ConfettiTrigger};
pub use device::Device;
pub use error::{ConfigError, MediaError};
pub use media::{dispatch, MediaCommand, MediaSurface};
pub use name::{DisplayName, FALLBACK_NAME};
pub use particles::{ConfettiPiece, Viewport};
pub use presentation::{Frame, Presentation};
pub use query::{NameQuery, NAME_PARAM};
