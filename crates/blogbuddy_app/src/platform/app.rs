use std::fs;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use blogbuddy_core::{parse_document, update, AppState, Destination, GenerationRequest, Msg};
use buddy_logging::{buddy_debug, buddy_info};

use super::config::load_config;
use super::effects::EffectRunner;
use super::report::{has_failures, render_json, render_text};
use crate::cli::{Cli, Command, GenerateArgs, PublishArgs};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub fn run_app(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = load_config(cli.config.as_deref()).context("loading configuration")?;
    buddy_debug!("Generator configured as {:?}", config.generator);
    let runner = EffectRunner::new(config).context("starting engine")?;
    let mut session = Session::new(runner);

    let json = match &cli.command {
        Command::Generate(args) => args.json,
        Command::Publish(args) => args.json,
    };
    let include_article = matches!(cli.command, Command::Generate(_));

    match cli.command {
        Command::Generate(args) => generate(&mut session, args)?,
        Command::Publish(args) => publish(&mut session, args)?,
    }

    let view = session.state.view();
    let output = if json {
        render_json(&view, include_article).context("rendering json report")?
    } else {
        render_text(&view, include_article)
    };
    print!("{output}");

    if has_failures(&view) {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn generate(session: &mut Session, args: GenerateArgs) -> anyhow::Result<()> {
    let mut request = GenerationRequest {
        topic: args.topic,
        tone: args.tone,
        length: args.length,
        keywords: args.keywords,
    };
    if args.seo {
        request = request.with_seo_focus();
    }

    session.dispatch(Msg::GenerateRequested(request));
    session.settle()?;

    if session.state.article().is_some() {
        session.publish_all(&args.publish)?;
    }
    Ok(())
}

fn publish(session: &mut Session, args: PublishArgs) -> anyhow::Result<()> {
    let text = fs::read_to_string(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;
    let document = parse_document(&text);
    buddy_info!(
        "Loaded {} ({} bytes, frontmatter title: {})",
        args.file.display(),
        text.len(),
        document.title.is_some()
    );

    session.dispatch(Msg::ArticleProvided {
        title: args.title.or(document.title),
        content: document.body,
        topic: args.topic,
    });
    session.publish_all(&args.to)
}

/// Drives the pure state machine: applies messages, hands effects to the
/// runner and feeds engine results back in.
struct Session {
    state: AppState,
    runner: EffectRunner,
}

impl Session {
    fn new(runner: EffectRunner) -> Self {
        Self {
            state: AppState::new(),
            runner,
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.enqueue(effects);
    }

    /// Block until no generation or publish attempt is outstanding.
    fn settle(&mut self) -> anyhow::Result<()> {
        while self.state.view().is_busy() {
            let next = self
                .runner
                .next_msg(POLL_INTERVAL)
                .context("waiting for engine results")?;
            if let Some(msg) = next {
                self.dispatch(msg);
            }
        }
        Ok(())
    }

    /// Request every destination at once, then wait for all of them.
    fn publish_all(&mut self, destinations: &[Destination]) -> anyhow::Result<()> {
        for destination in destinations {
            self.dispatch(Msg::PublishRequested(*destination));
        }
        self.settle()
    }
}
