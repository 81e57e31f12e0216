//! Rendered conversation history
//!
//! The transcript is what a front end shows: bot lines and echoed user
//! input, in order. It is the front end's to own; the navigator only tells it
//! what to append and when to wipe it.

use super::NavigatorResponse;
use chrono::{DateTime, Utc};
use std::collections::VecDeque;

/// Who produced a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    Bot,
    User,
}

/// A single entry in the transcript
#[derive(Debug, Clone)]
pub struct TranscriptEntry {
    pub speaker: Speaker,
    /// Text exactly as rendered, including its trailing line break
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl TranscriptEntry {
    fn new(speaker: Speaker, text: String) -> Self {
        Self {
            speaker,
            text,
            timestamp: Utc::now(),
        }
    }
}

/// Ordered transcript with an optional size bound
#[derive(Debug, Default)]
pub struct Transcript {
    entries: VecDeque<TranscriptEntry>,
    /// 0 keeps everything
    max_entries: usize,
}

impl Transcript {
    /// Create an unbounded transcript
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transcript that drops its oldest entries beyond `max_entries`
    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries,
        }
    }

    /// Append a bot line, already terminated
    pub fn push_bot(&mut self, line: impl Into<String>) {
        self.push(TranscriptEntry::new(Speaker::Bot, line.into()));
    }

    /// Append echoed user input
    pub fn push_user(&mut self, text: &str) {
        self.push(TranscriptEntry::new(Speaker::User, format!("{text}\n")));
    }

    /// Apply a navigator response: echo, then clear if asked, then lines
    ///
    /// Echoing before the clear means a "main menu" request leaves exactly
    /// the startup output behind. Returns the entries this response left on
    /// screen, in order, whether or not the size bound keeps them.
    pub fn apply(&mut self, response: &NavigatorResponse) -> Vec<TranscriptEntry> {
        let mut shown = Vec::with_capacity(response.lines.len() + 1);

        if let Some(echo) = &response.echo {
            let entry = TranscriptEntry::new(Speaker::User, format!("{echo}\n"));
            self.push(entry.clone());
            shown.push(entry);
        }
        if response.clear_transcript {
            self.clear();
            shown.clear();
        }
        for line in &response.lines {
            let entry = TranscriptEntry::new(Speaker::Bot, line.clone());
            self.push(entry.clone());
            shown.push(entry);
        }
        shown
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries in display order
    pub fn entries(&self) -> &VecDeque<TranscriptEntry> {
        &self.entries
    }

    /// Get number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the transcript is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Plain text of the whole transcript
    pub fn render(&self) -> String {
        self.entries.iter().map(|e| e.text.as_str()).collect()
    }

    fn push(&mut self, entry: TranscriptEntry) {
        self.entries.push_back(entry);
        if self.max_entries > 0 {
            while self.entries.len() > self.max_entries {
                self.entries.pop_front();
            }
        }
    }
}
