//! Cross-cutting, shared constants.
//!
//! Prefer deriving secondary constants from primary ones to avoid drift.

use std::time::Duration;

/// Hard deadline for one prioritize call, in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 15_000;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(DEFAULT_TIMEOUT_MS);

/// Model used when `FOLIO_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Score substituted when a relevance judgement is missing or failed.
pub const DEFAULT_RELEVANCE_SCORE: f32 = 0.0;

/// Length policy applied to user descriptions at the HTTP boundary (in chars).
pub const DESCRIPTION_MIN_CHARS: usize = 10;
pub const DESCRIPTION_MAX_CHARS: usize = 500;

/// Name of the scoring tool offered to the model during aggregate ranking.
pub const RELEVANCE_TOOL_NAME: &str = "assessProjectRelevance";

/// Floor on model turns that may consist only of tool calls. Larger requests
/// get one turn per project plus one.
pub const MAX_TOOL_ROUNDS: usize = 4;

/// Checks a user description against the presentation length policy.
///
/// Counts characters, not bytes, so multi-byte input is measured the way a
/// form field would measure it.
pub fn description_within_policy(text: &str) -> bool {
    let len = text.trim().chars().count();
    (DESCRIPTION_MIN_CHARS..=DESCRIPTION_MAX_CHARS).contains(&len)
}
