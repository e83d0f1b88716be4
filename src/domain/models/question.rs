/// A single free-text question supplied by the end user.
///
/// Questions are immutable and live for exactly one submission; nothing is
/// stored or mutated after the answer is displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
}

impl Question {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The question text with surrounding whitespace removed.
    pub fn text(&self) -> &str {
        self.text.trim()
    }

    /// Whitespace-only input counts as empty.
    pub fn is_empty(&self) -> bool {
        self.text().is_empty()
    }
}

impl From<&str> for Question {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        let q = Question::new("  Best flight to Tokyo?  ");
        assert_eq!(q.text(), "Best flight to Tokyo?");
    }

    #[test]
    fn whitespace_only_is_empty() {
        assert!(Question::new("   \t ").is_empty());
        assert!(Question::new("").is_empty());
        assert!(!Question::new("Paris").is_empty());
    }
}
