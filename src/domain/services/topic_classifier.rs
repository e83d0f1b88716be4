/// Keywords that mark a question as travel-related. Matching is
/// case-insensitive substring containment; the set is deliberately a plain
/// constant so the gate stays trivial to audit.
pub const TRAVEL_KEYWORDS: &[&str] = &[
    "hotel",
    "flight",
    "travel",
    "booking",
    "destination",
    "trip",
    "tour",
    "vacation",
    "resort",
    "restaurant",
];

/// Returns true iff the lower-cased question contains at least one travel
/// keyword. Empty input returns false. Pure, no failure modes.
pub fn is_travel_related(question: &str) -> bool {
    let lowered = question.to_lowercase();
    TRAVEL_KEYWORDS.iter().any(|kw| lowered.contains(kw))
}
