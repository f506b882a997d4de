//! Suggest pipeline state owned by the UI thread.
//!
//! Holds the channel handles for talking to the worker thread and the
//! display text the results pane renders. Requests flow out on every
//! input change; responses flow back and are applied in arrival order.

use std::sync::mpsc::Receiver;

use tokio::sync::mpsc::UnboundedSender;

use super::policy::LatestWinsDisplay;

/// One queued query on its way to the worker thread
#[derive(Debug)]
pub struct SuggestRequest {
    /// Sequence number for log correlation only; responses are never
    /// filtered or reordered by it
    pub seq: u64,
    /// Already-wildcarded value for the `example` query variable
    pub example: String,
}

/// One rendered response on its way back to the UI thread
#[derive(Debug)]
pub struct SuggestResponse {
    /// Sequence number of the request that produced this text
    pub seq: u64,
    /// Complete display text, ready to show as-is
    pub text: String,
}

/// Suggest pipeline state
pub struct SuggestState {
    /// Channel to send requests to the worker thread
    pub request_tx: Option<UnboundedSender<SuggestRequest>>,
    /// Channel to receive responses from the worker thread
    pub response_rx: Option<Receiver<SuggestResponse>>,
    /// Sequence number of the most recently sent request
    seq: u64,
    /// Text currently owned by the results pane
    display: LatestWinsDisplay,
}

impl SuggestState {
    /// Create a SuggestState with no worker attached
    pub fn new() -> Self {
        Self {
            request_tx: None,
            response_rx: None,
            seq: 0,
            display: LatestWinsDisplay::new(),
        }
    }

    /// Wire up the channels to a running worker
    pub fn set_channels(
        &mut self,
        request_tx: UnboundedSender<SuggestRequest>,
        response_rx: Receiver<SuggestResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    /// Fire one query for the current input text
    ///
    /// Appends the trailing wildcard and hands the request straight to
    /// the worker. Fire-and-forget: nothing is debounced, coalesced, or
    /// cancelled, so overlapping requests are normal. Returns true if
    /// the request reached the channel.
    pub fn request(&mut self, raw_input: &str) -> bool {
        if self.request_tx.is_none() {
            return false;
        }

        self.seq = self.seq.wrapping_add(1);
        let seq = self.seq;
        let example = wildcard(raw_input);
        log::debug!("Input changed, sending skills query {} for {:?}", seq, example);

        if let Some(ref tx) = self.request_tx
            && tx.send(SuggestRequest { seq, example }).is_ok()
        {
            return true;
        }
        false
    }

    /// Apply every response that arrived since the last tick
    ///
    /// Runs on the UI thread between frames. Each response replaces the
    /// display text in a single step; draining in arrival order is what
    /// makes the last arrival win.
    pub fn poll_responses(&mut self) {
        if let Some(rx) = &self.response_rx {
            while let Ok(response) = rx.try_recv() {
                log::debug!("Applying response for skills query {}", response.seq);
                self.display.apply(response.text);
            }
        }
    }

    /// Text the results pane shows right now
    pub fn display_text(&self) -> &str {
        self.display.text()
    }
}

impl Default for SuggestState {
    fn default() -> Self {
        Self::new()
    }
}

/// Append the trailing `%` wildcard to the raw input text
///
/// Applied exactly once per request, on the raw text as typed; an empty
/// input becomes the match-everything pattern `%`.
fn wildcard(raw_input: &str) -> String {
    format!("{raw_input}%")
}
