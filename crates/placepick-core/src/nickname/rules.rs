//! Local nickname rules.

use once_cell::sync::Lazy;
use regex::Regex;

/// Longest accepted nickname, in characters.
pub const MAX_NICKNAME_CHARS: usize = 5;

/// Precomposed Hangul syllables only (U+AC00..=U+D7A3). No jamo, spaces,
/// digits, punctuation or other scripts.
static HANGUL_SYLLABLES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[가-힣]+$").expect("Failed to compile Hangul syllable regex")
});

/// `1 <= chars(input) <= 5`
pub fn is_length_valid(input: &str) -> bool {
    (1..=MAX_NICKNAME_CHARS).contains(&input.chars().count())
}

pub fn is_content_valid(input: &str) -> bool {
    HANGUL_SYLLABLES.is_match(input)
}

/// Feedback for a single local rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleStatus {
    /// The field has not been touched yet; show the rule neutrally.
    Pending,
    Satisfied,
    Violated,
}

impl RuleStatus {
    pub(crate) fn from_check(touched: bool, valid: bool) -> Self {
        match (touched, valid) {
            (false, _) => Self::Pending,
            (true, true) => Self::Satisfied,
            (true, false) => Self::Violated,
        }
    }
}

/// Feedback for the duplicate check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateStatus {
    Unchecked,
    Available,
    Taken,
}

impl DuplicateStatus {
    /// Inline hint shown under the field.
    pub fn message(self) -> &'static str {
        match self {
            Self::Unchecked => "닉네임 중복확인을 해주세요",
            Self::Available => "사용 가능한 닉네임입니다.",
            Self::Taken => "이미 사용 중인 닉네임입니다.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ASCII_BREAKERS: &str = "0123456789 !\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

    fn arb_breaker() -> impl Strategy<Value = char> {
        prop::sample::select(ASCII_BREAKERS.chars().collect::<Vec<_>>())
    }

    proptest! {
        #[test]
        fn prop_short_hangul_names_pass_both_rules(name in "[가-힣]{1,5}") {
            prop_assert!(is_length_valid(&name));
            prop_assert!(is_content_valid(&name));
        }

        #[test]
        fn prop_long_hangul_names_fail_length(name in "[가-힣]{6,12}") {
            prop_assert!(!is_length_valid(&name));
            prop_assert!(is_content_valid(&name));
        }

        #[test]
        fn prop_digit_space_or_punctuation_fails_content(
            prefix in "[가-힣]{0,4}",
            breaker in arb_breaker(),
            suffix in "[가-힣]{0,4}",
        ) {
            let name = format!("{prefix}{breaker}{suffix}");
            prop_assert!(!is_content_valid(&name), "{:?}", name);
        }
    }

    #[test]
    fn test_hangul_names_within_length_pass() {
        for name in ["가", "민지", "가나다라마", "홍길동"] {
            assert!(is_length_valid(name), "{name}");
            assert!(is_content_valid(name), "{name}");
        }
    }

    #[test]
    fn test_length_bounds() {
        assert!(!is_length_valid(""));
        assert!(!is_length_valid("가나다라마바"));
        // Counted in characters, not bytes.
        assert!(is_length_valid("가나다라마"));
    }

    #[test]
    fn test_content_rejects_digits_spaces_punctuation() {
        for name in ["민지1", "민 지", "민지!", "민,지", "1", " ", "민지.", "-"] {
            assert!(!is_content_valid(name), "{name:?}");
        }
    }

    #[test]
    fn test_content_rejects_other_scripts_and_jamo() {
        for name in ["minji", "민지a", "ㅁㅣㄴ", "ㄱ", "みんじ", ""] {
            assert!(!is_content_valid(name), "{name:?}");
        }
    }

    #[test]
    fn test_long_invalid_content_fails_regardless_of_length() {
        assert!(!is_content_valid("가나다라마바사아자차1"));
    }

    #[test]
    fn test_rule_status() {
        assert_eq!(RuleStatus::from_check(false, false), RuleStatus::Pending);
        assert_eq!(RuleStatus::from_check(false, true), RuleStatus::Pending);
        assert_eq!(RuleStatus::from_check(true, true), RuleStatus::Satisfied);
        assert_eq!(RuleStatus::from_check(true, false), RuleStatus::Violated);
    }
}
