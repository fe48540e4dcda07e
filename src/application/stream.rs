//! Helpers for building server-driven datastar SSE responses.

use std::convert::Infallible;

use async_stream::stream;
use axum::response::sse::Event;
use datastar::prelude::PatchSignals;
use futures::Stream;
use serde_json::json;

use crate::application::engagement::ScrollSubscription;

/// Signal patch announcing a freshly opened reading session.
pub fn session_signals(subscription: &ScrollSubscription) -> String {
    json!({
        "visit": subscription.visit().to_string(),
        "readingProgress": subscription.latest(),
    })
    .to_string()
}

pub fn progress_signals(progress: f64) -> String {
    json!({ "readingProgress": progress }).to_string()
}

/// Event stream that owns `subscription` for as long as the client stays connected.
///
/// The first event hands the visit id to the page; every later event carries the latest
/// reading progress. Dropping the stream releases the session.
pub fn reading_progress_stream(
    mut subscription: ScrollSubscription,
) -> impl Stream<Item = Result<Event, Infallible>> + Send + 'static {
    stream! {
        let opened = PatchSignals::new(session_signals(&subscription)).write_as_axum_sse_event();
        yield Ok::<Event, Infallible>(opened);

        while let Some(progress) = subscription.next_progress().await {
            let event = PatchSignals::new(progress_signals(progress)).write_as_axum_sse_event();
            yield Ok(event);
        }
    }
}
