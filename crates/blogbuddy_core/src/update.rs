use crate::{build_prompt, normalize, normalize_parts, AppState, Effect, Msg, SessionState};

/// Reported when generation is requested without a topic.
pub const BLANK_TOPIC: &str = "topic must not be blank";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::GenerateRequested(request) => {
            // One generation at a time; the topic drives both prompt and tags.
            if state.session() == SessionState::Generating {
                return (state, Vec::new());
            }
            if request.topic.trim().is_empty() {
                state.fail_generation(BLANK_TOPIC.to_string());
                return (state, Vec::new());
            }
            let prompt = build_prompt(&request);
            let request_id = state.begin_generation(request.topic);
            vec![Effect::Generate { request_id, prompt }]
        }
        Msg::GenerationCompleted { request_id, result } => {
            let Some(topic) = state.take_pending(request_id) else {
                return (state, Vec::new());
            };
            match result {
                Ok(raw) => state.set_article(normalize(&raw, &topic)),
                Err(reason) => state.fail_generation(reason),
            }
            Vec::new()
        }
        Msg::ArticleProvided {
            title,
            content,
            topic,
        } => {
            state.replace_article(normalize_parts(title.as_deref(), &content, &topic));
            Vec::new()
        }
        Msg::PublishRequested(destination) => {
            if state.session() != SessionState::Ready || state.is_publishing(destination) {
                return (state, Vec::new());
            }
            let Some(article) = state.article().cloned() else {
                return (state, Vec::new());
            };
            state.begin_publish(destination);
            vec![Effect::Publish {
                destination,
                article,
            }]
        }
        Msg::PublishCompleted {
            destination,
            outcome,
        } => {
            // Results for attempts cleared by a newer article are dropped.
            if state.is_publishing(destination) {
                state.finish_publish(destination, outcome);
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
