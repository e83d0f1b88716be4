/// The result of one question submission.
///
/// Every variant maps to a display state in the front ends: `Answered` is the
/// success banner, `OffTopic` the rejection banner, `Empty` the warning
/// banner. `Answered` always carries displayable text — normalized error
/// strings included — so callers never have to handle a failure themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AskOutcome {
    /// Answer text from the completion client (possibly an `Error: …` string).
    Answered(String),
    /// The question did not pass topic classification; no call was made.
    OffTopic,
    /// The question was empty; no call was made.
    Empty,
}

impl AskOutcome {
    pub fn is_answered(&self) -> bool {
        matches!(self, Self::Answered(_))
    }

    /// The answer text, when present.
    pub fn answer(&self) -> Option<&str> {
        match self {
            Self::Answered(text) => Some(text),
            _ => None,
        }
    }
}
