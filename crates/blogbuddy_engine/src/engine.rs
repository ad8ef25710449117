use std::collections::BTreeMap;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use blogbuddy_core::{Article, Destination, RequestId};
use buddy_logging::{buddy_debug, buddy_error};

use crate::{
    dispatch_one, publisher_for, EngineConfig, EngineEvent, FailureKind, GeminiGenerator,
    GenerationError, GenerationFailureKind, Generator, PublishError, Publisher,
};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to build http client: {0}")]
    Client(#[from] reqwest::Error),
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("engine worker stopped")]
    Disconnected,
}

enum EngineCommand {
    Generate {
        request_id: RequestId,
        prompt: String,
    },
    Publish {
        destination: Destination,
        article: Article,
    },
}

/// What a command was for, kept so a task that dies can still be answered.
#[derive(Debug, Clone, Copy)]
enum CommandOrigin {
    Generate(RequestId),
    Publish(Destination),
}

impl CommandOrigin {
    fn of(command: &EngineCommand) -> Self {
        match command {
            EngineCommand::Generate { request_id, .. } => CommandOrigin::Generate(*request_id),
            EngineCommand::Publish { destination, .. } => CommandOrigin::Publish(*destination),
        }
    }

    fn failure(self, message: String) -> EngineEvent {
        match self {
            CommandOrigin::Generate(request_id) => EngineEvent::GenerationCompleted {
                request_id,
                result: Err(GenerationError::new(GenerationFailureKind::Internal, message)),
            },
            CommandOrigin::Publish(destination) => EngineEvent::PublishCompleted {
                destination,
                result: Err(PublishError::new(FailureKind::Internal, message)),
            },
        }
    }
}

/// Handle to the background worker that runs generation and publish calls.
///
/// Every command runs as its own task; results come back as [`EngineEvent`]s
/// in completion order. A task that panics is reported as an `Internal`
/// failure for its command. Dropping the handle stops the worker.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        let client = config.http.build_client()?;
        let generator: Arc<dyn Generator> =
            Arc::new(GeminiGenerator::new(config.generator.clone(), client.clone()));
        let publishers = Destination::ALL
            .into_iter()
            .map(|destination| {
                let publisher = publisher_for(destination, config.destination(destination), client.clone());
                (destination, publisher)
            })
            .collect();
        Self::with_components(generator, publishers)
    }

    /// Run the worker around caller-supplied collaborators.
    pub fn with_components(
        generator: Arc<dyn Generator>,
        publishers: BTreeMap<Destination, Arc<dyn Publisher>>,
    ) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;
        let publishers = Arc::new(publishers);

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let generator = generator.clone();
                let publishers = publishers.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let origin = CommandOrigin::of(&command);
                    let task = tokio::spawn(handle_command(generator, publishers, command));
                    let event = match task.await {
                        Ok(event) => event,
                        Err(err) => {
                            buddy_error!("Engine task for {:?} died: {}", origin, err);
                            origin.failure(err.to_string())
                        }
                    };
                    let _ = event_tx.send(event);
                });
            }
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn generate(&self, request_id: RequestId, prompt: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Generate {
            request_id,
            prompt: prompt.into(),
        });
    }

    pub fn publish(&self, destination: Destination, article: Article) {
        let _ = self.cmd_tx.send(EngineCommand::Publish {
            destination,
            article,
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Wait up to `timeout` for the next event.
    ///
    /// `Ok(None)` means nothing arrived in time; an error means the worker is
    /// gone and no further events will come.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<Option<EngineEvent>, EngineError> {
        match self.event_rx.recv_timeout(timeout) {
            Ok(event) => Ok(Some(event)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => Err(EngineError::Disconnected),
        }
    }
}

async fn handle_command(
    generator: Arc<dyn Generator>,
    publishers: Arc<BTreeMap<Destination, Arc<dyn Publisher>>>,
    command: EngineCommand,
) -> EngineEvent {
    match command {
        EngineCommand::Generate { request_id, prompt } => {
            buddy_debug!("Generate request_id={} prompt_len={}", request_id, prompt.len());
            let result = generator.complete(&prompt).await;
            EngineEvent::GenerationCompleted { request_id, result }
        }
        EngineCommand::Publish {
            destination,
            article,
        } => {
            let result = match publishers.get(&destination) {
                Some(publisher) => dispatch_one(&article, publisher.as_ref()).await,
                None => Err(PublishError::missing_config(destination, "publisher")),
            };
            EngineEvent::PublishCompleted {
                destination,
                result,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;
    use std::time::Duration;

    use super::{EngineError, EngineHandle};

    #[test]
    fn stopped_worker_is_reported_as_disconnected() {
        let (cmd_tx, _cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        drop(event_tx);
        let engine = EngineHandle { cmd_tx, event_rx };

        let result = engine.recv_timeout(Duration::from_millis(10));
        assert!(matches!(result, Err(EngineError::Disconnected)));
    }

    #[test]
    fn quiet_worker_is_a_timeout() {
        let (cmd_tx, _cmd_rx) = mpsc::channel();
        let (_event_tx, event_rx) = mpsc::channel();
        let engine = EngineHandle { cmd_tx, event_rx };

        let result = engine.recv_timeout(Duration::from_millis(10));
        assert!(matches!(result, Ok(None)));
    }
}
