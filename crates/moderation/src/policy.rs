use quill_core::CommentStatus;
use quill_infra::config::split_list;

/// Blocked words used when `MODERATION_BLOCKED_WORDS` is unset.
pub const DEFAULT_BLOCKED_WORDS: &[&str] = &["orange"];

/// Word-list moderation: a comment is rejected when it contains any blocked
/// word (case-insensitive substring match) and approved otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModerationPolicy {
    blocked: Vec<String>,
}

impl ModerationPolicy {
    pub fn new(blocked: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            blocked: blocked
                .into_iter()
                .map(|w| w.into().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup("MODERATION_BLOCKED_WORDS") {
            Some(raw) => Self::new(split_list(&raw)),
            None => Self::default(),
        }
    }

    pub fn blocked(&self) -> &[String] {
        &self.blocked
    }

    pub fn decide(&self, content: &str) -> CommentStatus {
        let content = content.to_lowercase();
        if self.blocked.iter().any(|w| content.contains(w.as_str())) {
            CommentStatus::Rejected
        } else {
            CommentStatus::Approved
        }
    }
}

impl Default for ModerationPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_BLOCKED_WORDS.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_rejects_orange() {
        let policy = ModerationPolicy::default();
        assert_eq!(policy.decide("I like ORANGE juice"), CommentStatus::Rejected);
        assert_eq!(policy.decide("I like apples"), CommentStatus::Approved);
    }

    #[test]
    fn empty_content_is_approved() {
        assert_eq!(ModerationPolicy::default().decide(""), CommentStatus::Approved);
    }

    #[test]
    fn word_list_comes_from_lookup() {
        let policy = ModerationPolicy::from_lookup(|key| {
            (key == "MODERATION_BLOCKED_WORDS").then(|| "Spam, ,scam".to_string())
        });
        assert_eq!(policy.blocked(), &["spam".to_string(), "scam".to_string()]);
        assert_eq!(policy.decide("orange"), CommentStatus::Approved);
        assert_eq!(policy.decide("total SCAM"), CommentStatus::Rejected);
    }

    #[test]
    fn empty_list_approves_everything() {
        let policy = ModerationPolicy::from_lookup(|_| Some(String::new()));
        assert!(policy.blocked().is_empty());
        assert_eq!(policy.decide("orange"), CommentStatus::Approved);
    }
}
