//! User-facing copy for both screens.

pub const ENTRY_HEADLINE: &str = "🎉 잠시 후 놀라운 순간이 공개됩니다";
pub const ENTRY_HINT: &str = "당신의 이름은?";
pub const ENTRY_PLACEHOLDER: &str = "이름을 입력하세요 (예: 김코드)";
pub const ENTRY_SUBMIT: &str = "재생";

pub const UNMUTE_LABEL: &str = "🔊 사운드 켜기";
pub const FULLSCREEN_LABEL: &str = "⛶ 전체화면";
pub const BACK_LABEL: &str = "← 이름 다시 입력";
