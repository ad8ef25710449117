use crate::{Destination, GenerationRequest, PublishOutcome, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User asked for a new article.
    GenerateRequested(GenerationRequest),
    /// Generator finished; `Err` carries the upstream message verbatim.
    GenerationCompleted {
        request_id: RequestId,
        result: Result<String, String>,
    },
    /// User supplied an already written article instead of generating one.
    ArticleProvided {
        title: Option<String>,
        content: String,
        topic: String,
    },
    /// User asked to publish the current article to one destination.
    PublishRequested(Destination),
    /// Engine finished a publish attempt.
    PublishCompleted {
        destination: Destination,
        outcome: PublishOutcome,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
