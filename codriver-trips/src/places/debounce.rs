//! Debounced suggestion lookups for a single input field.
//!
//! Every submission starts a new generation. A lookup fires only if no newer
//! submission arrived during the quiet period, so a burst of keystrokes costs
//! one request. Two fields use two debouncers and never interfere.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tracing::{debug, warn};

use super::client::PlaceLookup;
use super::types::Suggestion;

/// How long the text must stay unchanged before a lookup fires.
pub const QUIET_PERIOD: Duration = Duration::from_millis(400);

/// Shorter text clears the suggestions without a lookup.
pub const MIN_QUERY_CHARS: usize = 4;

/// Outcome of one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Debounced {
    /// A newer submission replaced this one before it fired.
    Superseded,
    /// Suggestions to show. Empty for short text or a failed lookup.
    Ready(Vec<Suggestion>),
}

/// Debouncer in front of a [`PlaceLookup`].
#[derive(Debug)]
pub struct SuggestionDebouncer<L> {
    lookup: L,
    quiet_period: Duration,
    generation: AtomicU64,
}

impl<L: PlaceLookup> SuggestionDebouncer<L> {
    pub fn new(lookup: L) -> Self {
        Self {
            lookup,
            quiet_period: QUIET_PERIOD,
            generation: AtomicU64::new(0),
        }
    }

    /// Override the quiet period.
    pub fn with_quiet_period(mut self, quiet_period: Duration) -> Self {
        self.quiet_period = quiet_period;
        self
    }

    /// The wrapped lookup.
    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Submit the field's current text and wait for the outcome.
    ///
    /// Short text resolves immediately but still supersedes anything pending.
    pub async fn submit(&self, text: &str) -> Debounced {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        if text.chars().count() < MIN_QUERY_CHARS {
            return Debounced::Ready(Vec::new());
        }

        tokio::time::sleep(self.quiet_period).await;

        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(text, "suggestion lookup superseded");
            return Debounced::Superseded;
        }

        match self.lookup.suggest(text).await {
            Ok(suggestions) => Debounced::Ready(suggestions),
            Err(e) => {
                warn!(text, error = %e, "suggestion lookup failed");
                Debounced::Ready(Vec::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::places::{PlaceDetails, PlacesError};
    use std::sync::Arc;
    use std::sync::Mutex;

    /// Lookup that records each query and answers with one suggestion.
    #[derive(Default)]
    struct RecordingLookup {
        queries: Mutex<Vec<String>>,
        fail: bool,
    }

    impl PlaceLookup for RecordingLookup {
        async fn suggest(&self, text: &str) -> Result<Vec<Suggestion>, PlacesError> {
            self.queries.lock().unwrap().push(text.to_string());
            if self.fail {
                return Err(PlacesError::RateLimited);
            }
            Ok(vec![Suggestion {
                place_id: format!("id-{text}"),
                description: text.to_string(),
            }])
        }

        async fn details(&self, _place_id: &str) -> Result<Option<PlaceDetails>, PlacesError> {
            Ok(None)
        }

        async fn reverse_geocode(
            &self,
            _lat: f64,
            _lng: f64,
        ) -> Result<Option<PlaceDetails>, PlacesError> {
            Ok(None)
        }
    }

    fn queries(debouncer: &SuggestionDebouncer<RecordingLookup>) -> Vec<String> {
        debouncer.lookup().queries.lock().unwrap().clone()
    }

    #[tokio::test(start_paused = true)]
    async fn short_text_never_fires() {
        let debouncer = SuggestionDebouncer::new(RecordingLookup::default());
        assert_eq!(debouncer.submit("Pun").await, Debounced::Ready(Vec::new()));
        assert!(queries(&debouncer).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn settled_text_fires_once() {
        let debouncer = SuggestionDebouncer::new(RecordingLookup::default());
        match debouncer.submit("Pune").await {
            Debounced::Ready(suggestions) => assert_eq!(suggestions[0].place_id, "id-Pune"),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(queries(&debouncer), vec!["Pune"]);
    }

    #[tokio::test(start_paused = true)]
    async fn only_latest_keystroke_fires() {
        let debouncer = Arc::new(SuggestionDebouncer::new(RecordingLookup::default()));

        let first = tokio::spawn({
            let debouncer = Arc::clone(&debouncer);
            async move { debouncer.submit("Mumb").await }
        });
        tokio::time::sleep(Duration::from_millis(100)).await;
        let second = tokio::spawn({
            let debouncer = Arc::clone(&debouncer);
            async move { debouncer.submit("Mumba").await }
        });

        assert_eq!(first.await.unwrap(), Debounced::Superseded);
        assert!(matches!(second.await.unwrap(), Debounced::Ready(s) if s.len() == 1));
        assert_eq!(queries(&debouncer), vec!["Mumba"]);
    }

    #[tokio::test(start_paused = true)]
    async fn clearing_the_field_cancels_pending_lookup() {
        let debouncer = Arc::new(SuggestionDebouncer::new(RecordingLookup::default()));

        let pending = tokio::spawn({
            let debouncer = Arc::clone(&debouncer);
            async move { debouncer.submit("Mumbai").await }
        });
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(debouncer.submit("").await, Debounced::Ready(Vec::new()));

        assert_eq!(pending.await.unwrap(), Debounced::Superseded);
        assert!(queries(&debouncer).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn failures_read_as_empty() {
        let debouncer = SuggestionDebouncer::new(RecordingLookup {
            fail: true,
            ..Default::default()
        })
        .with_quiet_period(Duration::from_millis(10));

        assert_eq!(debouncer.submit("Nashik").await, Debounced::Ready(Vec::new()));
        assert_eq!(queries(&debouncer), vec!["Nashik"]);
    }
}
