use std::collections::BTreeMap;

use crate::view_model::{AppViewModel, PublishRowView};
use crate::{Article, Destination};

pub type RequestId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No article yet.
    #[default]
    Idle,
    /// A generation request is in flight.
    Generating,
    /// An article is available for publishing.
    Ready,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    Published { url: Option<String> },
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishStatus {
    InFlight,
    Completed(PublishOutcome),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingGeneration {
    request_id: RequestId,
    topic: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    session: SessionState,
    next_request_id: RequestId,
    pending: Option<PendingGeneration>,
    article: Option<Article>,
    publishes: BTreeMap<Destination, PublishStatus>,
    last_error: Option<String>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            session: self.session,
            article: self.article.clone(),
            publishes: self
                .publishes
                .iter()
                .map(|(destination, status)| PublishRowView {
                    destination: *destination,
                    in_flight: matches!(status, PublishStatus::InFlight),
                    outcome: match status {
                        PublishStatus::InFlight => None,
                        PublishStatus::Completed(outcome) => Some(outcome.clone()),
                    },
                })
                .collect(),
            last_error: self.last_error.clone(),
            dirty: self.dirty,
        }
    }

    pub fn session(&self) -> SessionState {
        self.session
    }

    pub fn article(&self) -> Option<&Article> {
        self.article.as_ref()
    }

    /// Returns whether the view changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Start a generation for `topic`, forgetting earlier publish results.
    pub(crate) fn begin_generation(&mut self, topic: String) -> RequestId {
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.pending = Some(PendingGeneration { request_id, topic });
        self.session = SessionState::Generating;
        self.publishes.clear();
        self.last_error = None;
        self.dirty = true;
        request_id
    }

    /// Topic of the pending generation if `request_id` is the current one.
    pub(crate) fn take_pending(&mut self, request_id: RequestId) -> Option<String> {
        match &self.pending {
            Some(pending) if pending.request_id == request_id => {
                self.pending.take().map(|pending| pending.topic)
            }
            _ => None,
        }
    }

    pub(crate) fn set_article(&mut self, article: Article) {
        self.article = Some(article);
        self.session = SessionState::Ready;
        self.dirty = true;
    }

    pub(crate) fn replace_article(&mut self, article: Article) {
        self.pending = None;
        self.publishes.clear();
        self.last_error = None;
        self.set_article(article);
    }

    pub(crate) fn fail_generation(&mut self, reason: String) {
        self.session = if self.article.is_some() {
            SessionState::Ready
        } else {
            SessionState::Idle
        };
        self.last_error = Some(reason);
        self.dirty = true;
    }

    pub(crate) fn is_publishing(&self, destination: Destination) -> bool {
        matches!(self.publishes.get(&destination), Some(PublishStatus::InFlight))
    }

    pub(crate) fn begin_publish(&mut self, destination: Destination) {
        self.publishes.insert(destination, PublishStatus::InFlight);
        self.dirty = true;
    }

    pub(crate) fn finish_publish(&mut self, destination: Destination, outcome: PublishOutcome) {
        self.publishes
            .insert(destination, PublishStatus::Completed(outcome));
        self.dirty = true;
    }
}
