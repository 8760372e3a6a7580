//! Error types for the Advent of Code HTTP client

use thiserror::Error;

/// Errors that can occur when talking to the site
#[derive(Error, Debug)]
pub enum AdventError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Invalid HTTP status code received
    #[error("Invalid HTTP status: {status}")]
    InvalidStatus {
        /// The status code that was received
        status: reqwest::StatusCode,
    },

    /// Failed to decode response as UTF-8
    #[error("Failed to decode response as UTF-8")]
    Encoding,

    /// Failed to find the expected content in an HTML page
    #[error("Failed to parse HTML response: {0}")]
    HtmlParse(String),

    /// The response contained the login prompt
    #[error("Session cookie is invalid or expired.")]
    NotLoggedIn,

    /// The puzzle has not been released yet
    #[error("Puzzle {year}/{day:02} has not unlocked yet")]
    Locked { year: u16, day: u8 },

    /// The server returned 404 for something other than a locked puzzle
    #[error("The server returned error 404 for url: {url}")]
    NotFound { url: String },

    /// Client initialization failed
    #[error("Client initialization failed: {0}")]
    ClientInit(String),
}
