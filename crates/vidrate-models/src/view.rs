//! Presentation state for the watch-time page.
//!
//! Lookups are tagged with a [`LookupTicket`]; only the most recently issued
//! ticket may update the view, so a slow response to an earlier submission
//! can never overwrite the result of a later one.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::speed::{SpeedMultiplier, SpeedRow};
use crate::video::VideoDetails;

/// Shown when the server answered with an error but no message.
pub const DEFAULT_FETCH_ERROR: &str = "Failed to fetch video details.";
/// Shown when the request never got a response.
pub const NO_RESPONSE_ERROR: &str = "No response from server. Please try again.";
/// Shown for failures before a request could be sent.
pub const GENERIC_ERROR: &str = "Something went wrong. Please try again.";

/// Colour theme of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// CSS class applied to the document body.
    pub fn body_class(self) -> &'static str {
        match self {
            Theme::Dark => "dark-mode",
            Theme::Light => "light-mode",
        }
    }
}

/// Token identifying one submitted lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LookupTicket(u64);

impl LookupTicket {
    pub fn sequence(self) -> u64 {
        self.0
    }
}

/// Issues monotonically increasing tickets and remembers the latest one.
#[derive(Debug, Default)]
pub struct LookupTracker {
    latest: AtomicU64,
}

impl LookupTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket that supersedes every earlier one.
    pub fn issue(&self) -> LookupTicket {
        LookupTicket(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Whether `ticket` is the most recently issued one.
    pub fn is_current(&self, ticket: LookupTicket) -> bool {
        self.latest.load(Ordering::Acquire) == ticket.0
    }
}

/// How a lookup failed, as seen from the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupFailure {
    /// The server responded with an error status
    Rejected { message: Option<String> },
    /// The request was sent but nothing came back
    NoResponse,
    /// The request could not be made
    Other,
}

impl LookupFailure {
    /// Message displayed under the input box.
    pub fn message(&self) -> &str {
        match self {
            LookupFailure::Rejected { message: Some(m) } if !m.is_empty() => m,
            LookupFailure::Rejected { .. } => DEFAULT_FETCH_ERROR,
            LookupFailure::NoResponse => NO_RESPONSE_ERROR,
            LookupFailure::Other => GENERIC_ERROR,
        }
    }
}

/// State of the watch-time page.
#[derive(Debug, Default)]
pub struct WatchTimeView {
    pub link: String,
    pub theme: Theme,
    details: Option<VideoDetails>,
    error: Option<String>,
    pending: bool,
    tracker: LookupTracker,
}

impl WatchTimeView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Submit the current link.
    ///
    /// Returns `None` when the link is blank, even while another lookup is
    /// pending. Otherwise clears the previous
    /// result and error, marks the view pending, and returns a ticket that
    /// supersedes any lookup still in flight.
    pub fn submit(&mut self) -> Option<(LookupTicket, String)> {
        let link = self.link.trim();
        if link.is_empty() {
            return None;
        }
        let link = link.to_string();

        self.error = None;
        self.details = None;
        self.pending = true;

        Some((self.tracker.issue(), link))
    }

    /// Apply the outcome of a lookup.
    ///
    /// Outcomes for superseded tickets are dropped and `false` is returned.
    pub fn complete(
        &mut self,
        ticket: LookupTicket,
        outcome: Result<VideoDetails, LookupFailure>,
    ) -> bool {
        if !self.tracker.is_current(ticket) {
            return false;
        }

        match outcome {
            Ok(details) => {
                self.details = Some(details);
                self.link.clear();
            }
            Err(failure) => {
                self.error = Some(failure.message().to_string());
            }
        }
        self.pending = false;
        true
    }

    /// Whether a lookup is in flight.
    ///
    /// Submitting again while pending is allowed; the newer ticket supersedes
    /// the one in flight.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn details(&self) -> Option<&VideoDetails> {
        self.details.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Original length badge.
    pub fn original_clock(&self) -> Option<String> {
        self.details.as_ref().and_then(VideoDetails::original_clock)
    }

    /// Speed cards for the current result.
    pub fn speed_cards(&self) -> Vec<SpeedRow> {
        self.details
            .as_ref()
            .map(|d| d.speed_table(&SpeedMultiplier::defaults()))
            .unwrap_or_default()
    }
}
