//! Simulated engagement signals: the per-render view count and reading progress.
//!
//! View counts are presentational filler drawn from an injected random source and are
//! never stored. Reading progress is tracked per open progress stream; each stream holds a
//! [`ScrollSubscription`] whose drop releases the session, so a reader navigating away
//! never leaves state behind.

use std::sync::{Arc, Mutex, PoisonError};

use dashmap::DashMap;
use metrics::{counter, gauge};
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::Deserialize;
use thiserror::Error;
use tokio::sync::watch;
use tracing::debug;
use uuid::Uuid;

use crate::{
    domain::posts::PostId,
    infra::telemetry::{READING_SESSIONS_ACTIVE, SCROLL_REPORTS_TOTAL},
};

pub const VIEW_COUNT_MIN: u32 = 100;
pub const VIEW_COUNT_MAX: u32 = 1099;

/// Source of simulated view counts.
pub trait ViewCounter: Send + Sync {
    /// Draw a count in `VIEW_COUNT_MIN..=VIEW_COUNT_MAX`.
    fn draw(&self) -> u32;
}

pub struct RandomViewCounter {
    rng: Mutex<StdRng>,
}

impl RandomViewCounter {
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl ViewCounter for RandomViewCounter {
    fn draw(&self) -> u32 {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.gen_range(VIEW_COUNT_MIN..=VIEW_COUNT_MAX)
    }
}

/// Viewport readings sent by the browser on scroll.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

/// Percentage of the scrollable height already read, always within `0.0..=100.0`.
///
/// A page that does not scroll (document no taller than the viewport) reads as 0, as do
/// non-finite readings.
pub fn scroll_progress(metrics: ScrollMetrics) -> f64 {
    let ScrollMetrics {
        scroll_y,
        document_height,
        viewport_height,
    } = metrics;

    let scrollable = document_height - viewport_height;
    if !scroll_y.is_finite() || !scrollable.is_finite() || scrollable <= 0.0 {
        return 0.0;
    }

    let progress = scroll_y / scrollable * 100.0;
    if progress.is_finite() {
        progress.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

#[derive(Debug, Error)]
pub enum EngagementError {
    #[error("post `{0}` does not exist")]
    UnknownPost(String),
    #[error("reading session `{0}` is not open")]
    UnknownVisit(Uuid),
    #[error("reading session `{visit}` does not belong to post `{post}`")]
    VisitMismatch { visit: Uuid, post: u32 },
}

struct ReadingSession {
    post_id: PostId,
    progress: watch::Sender<f64>,
}

/// Open reading sessions keyed by visit id.
#[derive(Clone, Default)]
pub struct ReadingRegistry {
    sessions: Arc<DashMap<Uuid, ReadingSession>>,
}

impl ReadingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a session for `post_id`. The session lives exactly as long as the returned guard.
    pub fn subscribe(&self, post_id: PostId) -> ScrollSubscription {
        let visit = Uuid::new_v4();
        let (sender, receiver) = watch::channel(0.0);
        self.sessions.insert(
            visit,
            ReadingSession {
                post_id,
                progress: sender,
            },
        );
        gauge!(READING_SESSIONS_ACTIVE).set(self.sessions.len() as f64);
        debug!(
            target = "pdr_portal::engagement",
            visit = %visit,
            post_id = post_id.0,
            "reading session opened"
        );

        ScrollSubscription {
            visit,
            post_id,
            receiver,
            sessions: Arc::clone(&self.sessions),
        }
    }

    /// Record a scroll reading for an open session and return the computed progress.
    pub fn report(
        &self,
        visit: Uuid,
        post_id: PostId,
        metrics: ScrollMetrics,
    ) -> Result<f64, EngagementError> {
        let session = self
            .sessions
            .get(&visit)
            .ok_or(EngagementError::UnknownVisit(visit))?;
        if session.post_id != post_id {
            return Err(EngagementError::VisitMismatch {
                visit,
                post: post_id.0,
            });
        }

        let progress = scroll_progress(metrics);
        session.progress.send_replace(progress);
        counter!(SCROLL_REPORTS_TOTAL).increment(1);
        Ok(progress)
    }

    pub fn active_sessions(&self) -> usize {
        self.sessions.len()
    }
}

/// Scoped registration of one reader's scroll updates.
pub struct ScrollSubscription {
    visit: Uuid,
    post_id: PostId,
    receiver: watch::Receiver<f64>,
    sessions: Arc<DashMap<Uuid, ReadingSession>>,
}

impl ScrollSubscription {
    pub fn visit(&self) -> Uuid {
        self.visit
    }

    pub fn latest(&self) -> f64 {
        *self.receiver.borrow()
    }

    /// Wait for the next progress value. Intermediate values may be skipped; only the
    /// latest reading is delivered.
    pub async fn next_progress(&mut self) -> Option<f64> {
        self.receiver.changed().await.ok()?;
        Some(*self.receiver.borrow_and_update())
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        self.sessions.remove(&self.visit);
        gauge!(READING_SESSIONS_ACTIVE).set(self.sessions.len() as f64);
        debug!(
            target = "pdr_portal::engagement",
            visit = %self.visit,
            post_id = self.post_id.0,
            "reading session closed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(scroll_y: f64, document_height: f64, viewport_height: f64) -> ScrollMetrics {
        ScrollMetrics {
            scroll_y,
            document_height,
            viewport_height,
        }
    }

    #[test]
    fn progress_is_ratio_of_scrollable_height() {
        assert_eq!(scroll_progress(metrics(0.0, 2000.0, 1000.0)), 0.0);
        assert_eq!(scroll_progress(metrics(500.0, 2000.0, 1000.0)), 50.0);
        assert_eq!(scroll_progress(metrics(1000.0, 2000.0, 1000.0)), 100.0);
    }

    #[test]
    fn progress_is_zero_when_nothing_scrolls() {
        assert_eq!(scroll_progress(metrics(0.0, 800.0, 800.0)), 0.0);
        assert_eq!(scroll_progress(metrics(10.0, 600.0, 800.0)), 0.0);
    }

    #[test]
    fn progress_is_clamped_during_resizes() {
        assert_eq!(scroll_progress(metrics(1500.0, 2000.0, 1000.0)), 100.0);
        assert_eq!(scroll_progress(metrics(-40.0, 2000.0, 1000.0)), 0.0);
    }

    #[test]
    fn progress_ignores_non_finite_readings() {
        assert_eq!(scroll_progress(metrics(f64::NAN, 2000.0, 1000.0)), 0.0);
        assert_eq!(scroll_progress(metrics(10.0, f64::INFINITY, 1000.0)), 0.0);
        assert_eq!(scroll_progress(metrics(f64::INFINITY, 2000.0, 1000.0)), 0.0);
    }

    #[test]
    fn progress_stays_in_bounds_across_grid() {
        for scroll_y in [0.0, 1.0, 250.0, 999.0, 5000.0] {
            for document_height in [0.0, 500.0, 1000.0, 1001.0, 4000.0] {
                for viewport_height in [0.0, 500.0, 1000.0] {
                    let value = scroll_progress(metrics(scroll_y, document_height, viewport_height));
                    assert!(value.is_finite());
                    assert!((0.0..=100.0).contains(&value), "{value} out of range");
                }
            }
        }
    }

    #[test]
    fn view_counts_fall_in_range() {
        let counter = RandomViewCounter::from_entropy();
        for _ in 0..1_000 {
            let value = counter.draw();
            assert!((VIEW_COUNT_MIN..=VIEW_COUNT_MAX).contains(&value));
        }
    }

    #[test]
    fn seeded_counters_are_reproducible_and_draws_independent() {
        let first = RandomViewCounter::seeded(7);
        let second = RandomViewCounter::seeded(7);
        let left: Vec<u32> = (0..16).map(|_| first.draw()).collect();
        let right: Vec<u32> = (0..16).map(|_| second.draw()).collect();
        assert_eq!(left, right);

        let mut distinct = left.clone();
        distinct.sort_unstable();
        distinct.dedup();
        assert!(distinct.len() > 1, "consecutive draws should vary");
    }

    #[tokio::test]
    async fn subscription_releases_session_on_drop() {
        let registry = ReadingRegistry::new();
        let subscription = registry.subscribe(PostId(3));
        let visit = subscription.visit();
        assert_eq!(registry.active_sessions(), 1);
        assert_eq!(subscription.latest(), 0.0);

        drop(subscription);
        assert_eq!(registry.active_sessions(), 0);
        assert!(matches!(
            registry.report(visit, PostId(3), metrics(10.0, 2000.0, 1000.0)),
            Err(EngagementError::UnknownVisit(id)) if id == visit
        ));
    }

    #[tokio::test]
    async fn reports_reach_the_subscriber() {
        let registry = ReadingRegistry::new();
        let mut subscription = registry.subscribe(PostId(1));
        let visit = subscription.visit();

        let progress = registry
            .report(visit, PostId(1), metrics(250.0, 1500.0, 500.0))
            .expect("report accepted");
        assert_eq!(progress, 25.0);
        assert_eq!(subscription.next_progress().await, Some(25.0));
        assert_eq!(subscription.latest(), 25.0);
    }

    #[tokio::test]
    async fn latest_report_wins() {
        let registry = ReadingRegistry::new();
        let mut subscription = registry.subscribe(PostId(1));
        let visit = subscription.visit();

        for scroll_y in [100.0, 200.0, 300.0] {
            registry
                .report(visit, PostId(1), metrics(scroll_y, 1400.0, 400.0))
                .expect("report accepted");
        }
        assert_eq!(subscription.next_progress().await, Some(30.0));
    }

    #[test]
    fn reports_for_other_posts_are_rejected() {
        let registry = ReadingRegistry::new();
        let subscription = registry.subscribe(PostId(1));

        let err = registry
            .report(subscription.visit(), PostId(2), metrics(0.0, 10.0, 5.0))
            .expect_err("mismatched post");
        assert!(matches!(err, EngagementError::VisitMismatch { post: 2, .. }));
        assert_eq!(subscription.latest(), 0.0);
    }

    #[test]
    fn sessions_are_independent() {
        let registry = ReadingRegistry::new();
        let first = registry.subscribe(PostId(1));
        let second = registry.subscribe(PostId(1));
        assert_ne!(first.visit(), second.visit());

        registry
            .report(first.visit(), PostId(1), metrics(50.0, 200.0, 100.0))
            .expect("report accepted");
        assert_eq!(first.latest(), 50.0);
        assert_eq!(second.latest(), 0.0);

        drop(first);
        assert_eq!(registry.active_sessions(), 1);
    }
}
