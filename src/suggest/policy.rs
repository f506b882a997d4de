//! Display ownership for overlapping requests.

/// Latest-arrival-wins display text.
///
/// Requests are never cancelled and responses carry no ordering, so the
/// display belongs to whichever response was applied most recently, not
/// to the newest request. Stale text from a slow response can land after
/// fresher text and stick until the next arrival; that is accepted
/// behavior, not a bug to patch here.
#[derive(Debug, Default)]
pub struct LatestWinsDisplay {
    text: String,
}

impl LatestWinsDisplay {
    /// Create an empty display
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the display text with a newly arrived rendering
    ///
    /// Wholesale replacement: no merging with or comparison against the
    /// previous text.
    pub fn apply(&mut self, text: String) {
        self.text = text;
    }

    /// Current display text
    pub fn text(&self) -> &str {
        &self.text
    }
}
