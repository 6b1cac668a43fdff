//! Time-driven presentation state.
//!
//! The playback clock is the only input. Each timing tick goes through
//! [`Presentation::on_time_update`]; caption and confetti are read back as a [`Frame`].

use crate::caption::CaptionTable;
use crate::confetti::{ConfettiEdge, ConfettiTrigger};
use crate::config::PresentationConfig;
use crate::name::DisplayName;

/// What the screen shows for one clock sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub position: f64,
    pub caption: Option<String>,
    pub confetti: bool,
}

/// Caption and confetti state for one visit to the presentation screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Presentation {
    name: DisplayName,
    captions: CaptionTable,
    trigger: ConfettiTrigger,
    position: f64,
}

impl Presentation {
    pub fn new(name: DisplayName, config: &PresentationConfig) -> Self {
        Self {
            name,
            captions: config.captions.clone(),
            trigger: ConfettiTrigger::from_config(&config.confetti),
            position: 0.0,
        }
    }

    /// Records a clock sample from the media element.
    ///
    /// Non-finite samples are dropped and negative ones read as zero.
    pub fn on_time_update(&mut self, t: f64) -> Option<ConfettiEdge> {
        if !t.is_finite() {
            tracing::trace!(t, "Ignoring non-finite playback time");
            return None;
        }
        self.position = t.max(0.0);

        let edge = self.trigger.observe(self.position);
        match edge {
            Some(ConfettiEdge::Started) => {
                tracing::debug!(position = self.position, name = %self.name, "Confetti started");
            }
            Some(ConfettiEdge::Cleared) => {
                tracing::debug!(position = self.position, "Confetti cleared on loop restart");
            }
            None => {}
        }
        edge
    }

    pub fn display_name(&self) -> &DisplayName {
        &self.name
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn caption(&self) -> Option<String> {
        self.captions.caption_at(self.position, &self.name)
    }

    pub fn confetti_active(&self) -> bool {
        self.trigger.is_active()
    }

    pub fn frame(&self) -> Frame {
        Frame {
            position: self.position,
            caption: self.caption(),
            confetti: self.confetti_active(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caption::{CHEER_LINE, INTRO_LINE};
    use crate::name::FALLBACK_NAME;

    fn presentation(name: &str) -> Presentation {
        let config = PresentationConfig::default();
        Presentation::new(DisplayName::resolve(name, &config.fallback_name), &config)
    }

    #[test]
    fn mounts_at_zero_with_intro() {
        let p = presentation("김코드");
        let frame = p.frame();
        assert_eq!(frame.position, 0.0);
        assert_eq!(frame.caption.as_deref(), Some(INTRO_LINE));
        assert!(!frame.confetti);
    }

    #[test]
    fn award_and_confetti_arrive_together() {
        let mut p = presentation("김코드");
        p.on_time_update(6.9);
        assert!(p.caption().is_none());
        assert!(!p.confetti_active());

        assert_eq!(p.on_time_update(7.0), Some(ConfettiEdge::Started));
        let frame = p.frame();
        assert!(frame.caption.unwrap().contains("김코드"));
        assert!(frame.confetti);
    }

    #[test]
    fn same_sample_twice_is_idempotent() {
        let mut p = presentation("김코드");
        for t in [0.5, 2.5, 4.0, 7.3, 9.5, 12.0, 0.1] {
            p.on_time_update(t);
            let first = p.frame();
            assert_eq!(p.on_time_update(t), None);
            assert_eq!(p.frame(), first, "t = {t}");
        }
    }

    #[test]
    fn loop_restart_clears_confetti_and_restarts_captions() {
        let mut p = presentation("김코드");
        for t in [1.0, 4.0, 7.0, 10.0, 13.0, 14.8] {
            p.on_time_update(t);
        }
        assert!(p.confetti_active());

        assert_eq!(p.on_time_update(0.04), Some(ConfettiEdge::Cleared));
        assert!(!p.confetti_active());
        assert_eq!(p.caption().as_deref(), Some(INTRO_LINE));
    }

    #[test]
    fn fallback_name_reaches_captions() {
        let mut p = presentation("   ");
        assert_eq!(p.display_name().as_str(), FALLBACK_NAME);
        p.on_time_update(12.0);
        assert!(p.caption().unwrap().contains(FALLBACK_NAME));
    }

    #[test]
    fn non_finite_samples_are_ignored() {
        let mut p = presentation("김코드");
        p.on_time_update(9.8);
        assert_eq!(p.on_time_update(f64::NAN), None);
        assert_eq!(p.on_time_update(f64::INFINITY), None);
        assert_eq!(p.position(), 9.8);
        assert_eq!(p.caption().as_deref(), Some(CHEER_LINE));
    }

    #[test]
    fn negative_samples_read_as_zero() {
        let mut p = presentation("김코드");
        p.on_time_update(8.0);
        assert_eq!(p.on_time_update(-0.5), Some(ConfettiEdge::Cleared));
        assert_eq!(p.position(), 0.0);
    }
}
