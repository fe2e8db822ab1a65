//! One-shot user notices.
//!
//! Rendering (toast, alert dialog, terminal line) is up to the caller; the
//! flows only decide *what* to say.

use serde::{Deserialize, Serialize};

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Info,
    Error,
}

/// A titled message shown to the user once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }

    // ============================================================================
    // Nickname flow
    // ============================================================================

    pub fn nickname_taken() -> Self {
        Self::info("중복된 닉네임", "이미 사용 중인 닉네임입니다.")
    }

    pub fn nickname_available() -> Self {
        Self::info("사용 가능한 닉네임", "해당 닉네임을 사용할 수 있습니다.")
    }

    pub fn nickname_check_failed() -> Self {
        Self::error("오류", "닉네임 중복 확인 중 오류가 발생했습니다.")
    }

    pub fn nickname_declined() -> Self {
        Self::error("오류", "닉네임을 다시 설정해주세요")
    }

    pub fn network_failure() -> Self {
        Self::error("오류", "네트워크 오류가 발생했습니다.")
    }

    // ============================================================================
    // Profile flow
    // ============================================================================

    pub fn profile_saved() -> Self {
        Self::info("저장 완료", "변경사항이 저장되었습니다.")
    }

    pub fn profile_save_failed() -> Self {
        Self::error("저장 오류", "변경사항을 저장하지 못했습니다.")
    }

    pub fn profile_load_failed() -> Self {
        Self::error("오류", "사용자 정보를 불러오지 못했습니다.")
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

/// Receives notices produced by the flows.
pub trait NoticeSink: Send + Sync {
    fn notify(&self, notice: Notice);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_notices_are_errors() {
        assert!(Notice::nickname_check_failed().is_error());
        assert!(Notice::network_failure().is_error());
        assert!(Notice::profile_save_failed().is_error());
        assert!(!Notice::nickname_available().is_error());
        assert!(!Notice::profile_saved().is_error());
    }

    #[test]
    fn test_display_joins_title_and_message() {
        assert_eq!(
            Notice::profile_saved().to_string(),
            "저장 완료: 변경사항이 저장되었습니다."
        );
    }
}
