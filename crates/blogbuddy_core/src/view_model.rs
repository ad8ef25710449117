use crate::{Article, Destination, PublishOutcome, SessionState};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub session: SessionState,
    pub article: Option<Article>,
    pub publishes: Vec<PublishRowView>,
    pub last_error: Option<String>,
    pub dirty: bool,
}

impl AppViewModel {
    /// True while a generation or any publish attempt is outstanding.
    pub fn is_busy(&self) -> bool {
        self.session == SessionState::Generating || self.publishes.iter().any(|row| row.in_flight)
    }

    pub fn publish_row(&self, destination: Destination) -> Option<&PublishRowView> {
        self.publishes
            .iter()
            .find(|row| row.destination == destination)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishRowView {
    pub destination: Destination,
    pub in_flight: bool,
    pub outcome: Option<PublishOutcome>,
}
