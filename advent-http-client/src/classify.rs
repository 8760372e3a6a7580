//! Classification of free-text submission responses

use std::fmt;

/// Outcome of submitting an answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The answer was right
    Pass,
    /// The answer was wrong
    Fail,
    /// An answer was submitted too recently
    RateLimit,
    /// The part was already solved
    Completed,
    /// The session cookie was rejected
    NotLoggedIn,
    /// None of the known phrases matched; carries the raw response
    Unknown(String),
}

impl Outcome {
    /// The raw response text, only kept for [`Outcome::Unknown`]
    pub fn raw_text(&self) -> Option<&str> {
        match self {
            Outcome::Unknown(raw) => Some(raw),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Outcome::Pass => "pass",
            Outcome::Fail => "fail",
            Outcome::RateLimit => "rate limit",
            Outcome::Completed => "completed",
            Outcome::NotLoggedIn => "not logged in",
            Outcome::Unknown(_) => "unknown",
        };
        f.write_str(label)
    }
}

/// Phrase the site shows in place of authenticated content
pub const LOGIN_MARKER: &str = "[Log In]";

/// Ordered phrase table; the first match wins
const RESPONSE_PHRASES: [(&str, Outcome); 4] = [
    ("That's the right answer", Outcome::Pass),
    ("not the right answer", Outcome::Fail),
    ("too recently", Outcome::RateLimit),
    ("already complete it", Outcome::Completed),
];

/// Map a submission response onto an [`Outcome`]
///
/// Case-sensitive literal substring matching in table order, no normalization.
///
/// # Example
///
/// ```
/// use advent_http_client::{Outcome, classify};
///
/// assert_eq!(classify("That's not the right answer"), Outcome::Fail);
/// assert_eq!(classify("Error"), Outcome::Unknown("Error".to_string()));
/// ```
pub fn classify(raw: &str) -> Outcome {
    RESPONSE_PHRASES
        .iter()
        .find(|(phrase, _)| raw.contains(phrase))
        .map(|(_, outcome)| outcome.clone())
        .unwrap_or_else(|| Outcome::Unknown(raw.to_string()))
}

/// Whether a page shows the login prompt instead of authenticated content
pub fn is_login_prompt(body: &str) -> bool {
    body.contains(LOGIN_MARKER)
}
