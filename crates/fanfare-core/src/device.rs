//! Mobile/desktop detection from the user agent.

use std::sync::LazyLock;

use regex::Regex;

static MOBILE_UA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Android|iPhone|iPad|iPod").expect("mobile user agent pattern is valid")
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Device {
    Mobile,
    #[default]
    Desktop,
}

impl Device {
    pub fn from_user_agent(user_agent: &str) -> Self {
        if MOBILE_UA.is_match(user_agent) {
            Device::Mobile
        } else {
            Device::Desktop
        }
    }

    /// Only desktops get the native fullscreen control.
    pub fn shows_fullscreen_control(&self) -> bool {
        matches!(self, Device::Desktop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_phones_and_tablets() {
        let agents = [
            "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 Chrome/126.0 Mobile Safari/537.36",
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_5 like Mac OS X) AppleWebKit/605.1.15 Mobile/15E148",
            "Mozilla/5.0 (iPad; CPU OS 16_0 like Mac OS X) AppleWebKit/605.1.15",
            "mozilla/5.0 (ipod touch)",
        ];
        for ua in agents {
            assert_eq!(Device::from_user_agent(ua), Device::Mobile, "{ua}");
            assert!(!Device::from_user_agent(ua).shows_fullscreen_control());
        }
    }

    #[test]
    fn desktop_browsers_get_fullscreen() {
        let ua = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 Chrome/126.0 Safari/537.36";
        assert_eq!(Device::from_user_agent(ua), Device::Desktop);
        assert!(Device::from_user_agent(ua).shows_fullscreen_control());
        assert_eq!(Device::from_user_agent(""), Device::Desktop);
    }
}
