//! Confetti overlay.
//!
//! Pieces are plain divs animated by the `confetti-fall` keyframes; the infinite animation
//! restarts each piece at the top once it leaves the bottom edge.

use dioxus::prelude::*;
use fanfare_core::ConfettiPiece;

#[component]
pub fn ConfettiOverlay(pieces: Vec<ConfettiPiece>) -> Element {
    rsx! {
        div {
            class: "confetti-overlay",
            aria_hidden: "true",
            for (i, piece) in pieces.iter().enumerate() {
                div {
                    key: "{i}",
                    class: "confetti-piece",
                    style: piece_style(piece),
                }
            }
        }
    }
}

/// Inline style for one piece. Negative delay starts it mid-fall so the screen fills at once.
pub fn piece_style(piece: &ConfettiPiece) -> String {
    format!(
        "left: {:.1}px; width: {:.1}px; height: {:.1}px; background: {}; \
         animation-duration: {:.3}s; animation-delay: -{:.3}s; \
         --fall: {:.1}px; --drift: {:.1}px; --spin: {:.0}deg;",
        piece.left,
        piece.width,
        piece.height,
        piece.color,
        piece.fall_secs,
        piece.delay_secs,
        piece.fall_distance,
        piece.drift,
        piece.spin_deg,
    )
}
