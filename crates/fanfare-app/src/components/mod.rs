//! UI components for the celebration screens.

mod app;
mod caption;
mod confetti;
mod controls;
mod name_entry;
mod video;

pub use app::{App, WebRoot};
pub use caption::CaptionBanner;
pub use confetti::ConfettiOverlay;
pub use controls::StageControls;
pub use name_entry::NameEntryScreen;
pub use video::VideoScreen;
