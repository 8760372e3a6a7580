//! Advent of Code HTTP client library
//!
//! Talks to the puzzle site on behalf of a logged-in user: fetching puzzle
//! pages and inputs, reading personal and private leaderboard stats, and
//! submitting answers. Submission responses are free text; [`classify`] maps
//! them onto an [`Outcome`].
//!
//! # Features
//!
//! - Secure TLS using rustls (no OpenSSL dependencies)
//! - Blocking synchronous API
//! - Session cookie kept in zeroized memory and sent as a sensitive header
//! - Puzzle HTML to markdown conversion with configurable emphasis
//!
//! # Example
//!
//! ```no_run
//! use advent_http_client::{AdventClient, EmphasisStyle, Outcome, render_markdown};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AdventClient::builder()
//!     .session("your_session_cookie_here")
//!     .build()?;
//!
//! let page = client.get_puzzle_page(2015, 1)?;
//! for part in &page.descriptions {
//!     println!("{}", render_markdown(&part.html, EmphasisStyle::Default));
//! }
//!
//! let submission = client.submit_answer(2015, 1, 1, "232")?;
//! match submission.outcome {
//!     Outcome::Pass => println!("Correct!"),
//!     Outcome::Fail => println!("Incorrect!"),
//!     Outcome::RateLimit => println!("Wait {:?}", submission.wait_time),
//!     other => println!("{other}"),
//! }
//! # Ok(())
//! # }
//! ```

mod classify;
mod client;
mod error;
mod markdown;
mod parser;

pub use classify::{LOGIN_MARKER, Outcome, classify, is_login_prompt};
pub use client::{AdventClient, AdventClientBuilder, PuzzlePage, Submission};
pub use error::AdventError;
pub use markdown::{EmphasisStyle, render_markdown};
pub use parser::{
    DayDescription, LeaderboardRow, PersonalStats, PrivateLeaderboard, StarState,
};
