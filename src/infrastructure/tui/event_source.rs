use std::{collections::VecDeque, sync::Arc};

use tokio::sync::Mutex;

use crate::infrastructure::tui::{Event, TuiLike};

/// Where the runner pulls terminal events from.
///
/// `Scripted` replays a fixed list and then reports the stream as ended,
/// which the runner treats like a closed terminal.
pub enum EventSource {
    Terminal(Arc<Mutex<dyn TuiLike + Send>>),
    Scripted(VecDeque<Event>),
}

impl EventSource {
    pub fn real(tui: Arc<Mutex<dyn TuiLike + Send>>) -> Self {
        EventSource::Terminal(tui)
    }

    pub fn test(events: impl IntoIterator<Item = Event>) -> Self {
        EventSource::Scripted(events.into_iter().collect())
    }

    /// Events still queued; always `None` for a live terminal.
    pub fn remaining(&self) -> Option<usize> {
        match self {
            EventSource::Terminal(_) => None,
            EventSource::Scripted(queue) => Some(queue.len()),
        }
    }

    pub async fn next(&mut self) -> Option<Event> {
        match self {
            EventSource::Terminal(tui) => tui.lock().await.next().await,
            EventSource::Scripted(queue) => queue.pop_front(),
        }
    }
}
