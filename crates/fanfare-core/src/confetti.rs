//! Edge-triggered confetti flag.
//!
//! A looping video's clock wraps back to near zero instead of decreasing, so the flag is
//! driven by threshold crossings rather than by the clock's level alone.

use crate::config::ConfettiConfig;

/// Whether the confetti overlay is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfettiState {
    #[default]
    Inactive,
    Active,
}

/// A state change reported by [`ConfettiTrigger::observe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfettiEdge {
    /// The clock reached the trigger threshold.
    Started,
    /// The clock wrapped below the reset threshold.
    Cleared,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfettiTrigger {
    trigger_at: f64,
    reset_below: f64,
    state: ConfettiState,
}

impl ConfettiTrigger {
    pub fn new(trigger_at: f64, reset_below: f64) -> Self {
        Self {
            trigger_at,
            reset_below,
            state: ConfettiState::Inactive,
        }
    }

    pub fn from_config(config: &ConfettiConfig) -> Self {
        Self::new(config.trigger_at, config.reset_below)
    }

    /// Feeds one clock sample and returns the edge it caused, if any.
    pub fn observe(&mut self, t: f64) -> Option<ConfettiEdge> {
        match self.state {
            ConfettiState::Inactive if t >= self.trigger_at => {
                self.state = ConfettiState::Active;
                Some(ConfettiEdge::Started)
            }
            ConfettiState::Active if t < self.reset_below => {
                self.state = ConfettiState::Inactive;
                Some(ConfettiEdge::Cleared)
            }
            _ => None,
        }
    }

    pub fn state(&self) -> ConfettiState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == ConfettiState::Active
    }
}

impl Default for ConfettiTrigger {
    fn default() -> Self {
        Self::from_config(&ConfettiConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_inactive() {
        let trigger = ConfettiTrigger::default();
        assert_eq!(trigger.state(), ConfettiState::Inactive);
    }

    #[test]
    fn activates_exactly_at_threshold() {
        let mut trigger = ConfettiTrigger::default();
        assert_eq!(trigger.observe(6.999), None);
        assert!(!trigger.is_active());
        assert_eq!(trigger.observe(7.0), Some(ConfettiEdge::Started));
        assert!(trigger.is_active());
    }

    #[test]
    fn stays_active_until_wraparound() {
        let mut trigger = ConfettiTrigger::default();
        trigger.observe(7.2);
        for t in [8.0, 11.0, 14.9, 0.25, 0.2] {
            assert_eq!(trigger.observe(t), None, "t = {t}");
            assert!(trigger.is_active());
        }
        assert_eq!(trigger.observe(0.19), Some(ConfettiEdge::Cleared));
        assert!(!trigger.is_active());
    }

    #[test]
    fn low_clock_while_inactive_is_not_an_edge() {
        let mut trigger = ConfettiTrigger::default();
        assert_eq!(trigger.observe(0.0), None);
        assert_eq!(trigger.observe(0.1), None);
    }

    #[test]
    fn no_repeated_edges_in_one_direction() {
        let mut trigger = ConfettiTrigger::default();
        let samples = [0.0, 3.0, 7.0, 7.1, 9.0, 12.0, 0.05, 0.1, 0.3, 4.0, 7.5, 8.0, 0.0];
        let edges: Vec<_> = samples.iter().filter_map(|&t| trigger.observe(t)).collect();
        assert_eq!(
            edges,
            vec![
                ConfettiEdge::Started,
                ConfettiEdge::Cleared,
                ConfettiEdge::Started,
                ConfettiEdge::Cleared,
            ]
        );
    }

    #[test]
    fn repeated_sample_is_stable() {
        let mut trigger = ConfettiTrigger::default();
        trigger.observe(8.0);
        let before = trigger;
        assert_eq!(trigger.observe(8.0), None);
        assert_eq!(trigger, before);
    }
}
