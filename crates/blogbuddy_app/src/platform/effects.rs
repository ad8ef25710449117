use std::time::Duration;

use blogbuddy_core::{Effect, Msg, PublishOutcome};
use blogbuddy_engine::{EngineConfig, EngineError, EngineEvent, EngineHandle};
use buddy_logging::{buddy_info, buddy_warn};

/// Bridges core effects to engine commands and engine events back to core
/// messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        Ok(Self {
            engine: EngineHandle::new(config)?,
        })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Generate { request_id, prompt } => {
                    buddy_info!(
                        "Generate request_id={} prompt_len={}",
                        request_id,
                        prompt.len()
                    );
                    self.engine.generate(request_id, prompt);
                }
                Effect::Publish {
                    destination,
                    article,
                } => {
                    buddy_info!(
                        "Publish destination={} title={:?} tags={:?}",
                        destination,
                        article.title(),
                        article.tags()
                    );
                    self.engine.publish(destination, article);
                }
            }
        }
    }

    /// Wait up to `timeout` for the next engine event, as a core message.
    ///
    /// Fails once the engine worker is gone.
    pub fn next_msg(&self, timeout: Duration) -> Result<Option<Msg>, EngineError> {
        Ok(self.engine.recv_timeout(timeout)?.map(map_event))
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::GenerationCompleted { request_id, result } => Msg::GenerationCompleted {
            request_id,
            result: result.map_err(|err| {
                buddy_warn!("Generation {} failed: {}", request_id, err);
                err.to_string()
            }),
        },
        EngineEvent::PublishCompleted {
            destination,
            result,
        } => Msg::PublishCompleted {
            destination,
            outcome: match result {
                Ok(published) => PublishOutcome::Published { url: published.url },
                Err(err) => PublishOutcome::Failed {
                    reason: err.to_string(),
                },
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::map_event;
    use blogbuddy_core::{Destination, Msg, PublishOutcome};
    use blogbuddy_engine::{
        EngineEvent, FailureKind, GenerationError, GenerationFailureKind, PublishError, Published,
    };

    #[test]
    fn publish_failure_keeps_upstream_message() {
        let msg = map_event(EngineEvent::PublishCompleted {
            destination: Destination::DevTo,
            result: Err(PublishError::new(
                FailureKind::HttpStatus(401),
                r#"{"error":"unauthorized","status":401}"#,
            )),
        });
        assert_eq!(
            msg,
            Msg::PublishCompleted {
                destination: Destination::DevTo,
                outcome: PublishOutcome::Failed {
                    reason: r#"http status 401: {"error":"unauthorized","status":401}"#.into()
                },
            }
        );
    }

    #[test]
    fn published_url_is_forwarded() {
        let msg = map_event(EngineEvent::PublishCompleted {
            destination: Destination::Hashnode,
            result: Ok(Published { url: None }),
        });
        assert_eq!(
            msg,
            Msg::PublishCompleted {
                destination: Destination::Hashnode,
                outcome: PublishOutcome::Published { url: None },
            }
        );
    }

    #[test]
    fn generation_error_becomes_message_text() {
        let msg = map_event(EngineEvent::GenerationCompleted {
            request_id: 3,
            result: Err(GenerationError::new(
                GenerationFailureKind::HttpStatus(429),
                "quota exceeded",
            )),
        });
        assert_eq!(
            msg,
            Msg::GenerationCompleted {
                request_id: 3,
                result: Err("http status 429: quota exceeded".into()),
            }
        );
    }
}
