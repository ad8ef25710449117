use crate::{Article, Destination, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the generator to complete `prompt`.
    Generate { request_id: RequestId, prompt: String },
    /// Publish a snapshot of the current article to one destination.
    Publish {
        destination: Destination,
        article: Article,
    },
}
