//! Caption table: half-open playback intervals mapped to caption text.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::name::DisplayName;

/// Placeholder replaced by the display name when a cue is rendered.
pub const NAME_PLACEHOLDER: &str = "{name}";

pub const INTRO_LINE: &str = "잠시 중대 발표가 있겠습니다...";
pub const SUSPENSE_LINE: &str = "(두근두근)";
pub const AWARD_LINE: &str = "오늘의 주인공, {name}님께 영광의 수료증을 수여합니다!";
pub const CHEER_LINE: &str = "(코드잇 일동) 와아아아";
pub const FINALE_LINE: &str = "코드잇 스프린트 수료를 축하합니다 {name}님!!";

/// One caption shown while `start <= t < end`; `end: None` means open-ended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptionCue {
    pub start: f64,
    #[serde(default)]
    pub end: Option<f64>,
    pub text: String,
}

impl CaptionCue {
    pub fn new(start: f64, end: Option<f64>, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }

    pub fn contains(&self, t: f64) -> bool {
        t >= self.start && self.end.is_none_or(|end| t < end)
    }

    /// Caption text with the display name substituted.
    pub fn render(&self, name: &DisplayName) -> String {
        self.text.replace(NAME_PLACEHOLDER, name.as_str())
    }
}

/// Ordered cues, scanned linearly; the first cue containing `t` wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaptionTable {
    cues: Vec<CaptionCue>,
}

impl CaptionTable {
    pub fn new(cues: Vec<CaptionCue>) -> Self {
        Self { cues }
    }

    /// The celebration timeline the bundled video is cut against.
    pub fn standard() -> Self {
        Self::new(vec![
            CaptionCue::new(0.0, Some(2.0), INTRO_LINE),
            CaptionCue::new(3.0, Some(5.0), SUSPENSE_LINE),
            CaptionCue::new(7.0, Some(9.5), AWARD_LINE),
            CaptionCue::new(9.5, Some(11.0), CHEER_LINE),
            CaptionCue::new(11.0, None, FINALE_LINE),
        ])
    }

    pub fn cues(&self) -> &[CaptionCue] {
        &self.cues
    }

    pub fn cue_at(&self, t: f64) -> Option<&CaptionCue> {
        self.cues.iter().find(|cue| cue.contains(t))
    }

    /// Caption for playback position `t`, or `None` inside a gap.
    pub fn caption_at(&self, t: f64, name: &DisplayName) -> Option<String> {
        self.cue_at(t).map(|cue| cue.render(name))
    }

    /// Checks that cues are finite, non-empty, sorted, non-overlapping, and that only the last
    /// one is open-ended.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let last = self.cues.len().saturating_sub(1);
        let mut previous_end: Option<f64> = None;

        for (index, cue) in self.cues.iter().enumerate() {
            if !cue.start.is_finite() || cue.start < 0.0 {
                return Err(ConfigError::InvalidInterval { index });
            }
            match cue.end {
                Some(end) if !end.is_finite() || end <= cue.start => {
                    return Err(ConfigError::InvalidInterval { index });
                }
                None if index != last => {
                    return Err(ConfigError::OpenIntervalNotLast { index });
                }
                _ => {}
            }
            if previous_end.is_some_and(|end| cue.start < end) {
                return Err(ConfigError::OverlappingIntervals { index });
            }
            previous_end = cue.end;
        }

        Ok(())
    }
}

impl Default for CaptionTable {
    fn default() -> Self {
        Self::standard()
    }
}
