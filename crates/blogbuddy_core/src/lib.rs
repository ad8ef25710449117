//! BlogBuddy core: article normalization, prompt construction and the pure
//! generate/publish session state machine.
mod article;
mod body;
mod destination;
mod document;
mod effect;
mod extract;
mod msg;
mod normalize;
mod prompt;
mod state;
mod tags;
mod update;
mod view_model;

pub use article::Article;
pub use body::clean_body;
pub use destination::{Destination, UnknownDestination};
pub use document::{parse_document, render_document, ParsedDocument};
pub use effect::Effect;
pub use extract::{extract, first_heading, Extracted, BODY_MARKER, TITLE_MARKER};
pub use msg::Msg;
pub use normalize::{normalize, normalize_parts, PLACEHOLDER_TITLE};
pub use prompt::{build_prompt, GenerationRequest, SEO_KEYWORDS};
pub use state::{AppState, PublishOutcome, PublishStatus, RequestId, SessionState};
pub use tags::{derive_tags, BASE_TAGS, MAX_TAGS};
pub use update::{update, BLANK_TOPIC};
pub use view_model::{AppViewModel, PublishRowView};
