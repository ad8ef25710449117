use std::path::PathBuf;

use blogbuddy_core::Destination;
use clap::{Args, Parser, Subcommand};
use log::LevelFilter;

use crate::platform::logging::LogDestination;

#[derive(Parser, Debug)]
#[command(
    name = "blogbuddy",
    version,
    about = "Generate blog posts with AI and publish them to DEV.to, Hashnode and Blogger"
)]
pub struct Cli {
    /// RON config file (defaults to ./blogbuddy.ron when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write logs to ./blogbuddy.log
    #[arg(long, global = true)]
    pub log_file: bool,

    /// Keep logs off the terminal
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// `None` when logging is switched off entirely.
    pub fn log_destination(&self) -> Option<LogDestination> {
        match (self.log_file, self.quiet) {
            (true, true) => Some(LogDestination::File),
            (true, false) => Some(LogDestination::Both),
            (false, true) => None,
            (false, false) => Some(LogDestination::Terminal),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a post, optionally publishing it right away
    Generate(GenerateArgs),
    /// Publish an existing markdown post
    Publish(PublishArgs),
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// What the post is about; also the source of its tags
    #[arg(long, value_parser = non_blank)]
    pub topic: String,

    /// Writing tone, e.g. "casual" or "professional"
    #[arg(long, default_value = "")]
    pub tone: String,

    /// Desired length, e.g. "short" or "1500-word"
    #[arg(long, default_value = "")]
    pub length: String,

    /// Comma-separated keywords to work into the post
    #[arg(long, default_value = "")]
    pub keywords: String,

    /// Add SEO-oriented keywords
    #[arg(long)]
    pub seo: bool,

    /// Publish the generated post to this destination (repeatable)
    #[arg(long = "publish", value_name = "DESTINATION")]
    pub publish: Vec<Destination>,

    /// Print JSON instead of a markdown document
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct PublishArgs {
    /// Markdown file, with or without frontmatter
    #[arg(long, value_name = "PATH")]
    pub file: PathBuf,

    /// Title override; otherwise frontmatter, then the first `# ` heading
    #[arg(long)]
    pub title: Option<String>,

    /// Topic used to derive tags
    #[arg(long, default_value = "")]
    pub topic: String,

    /// Destination to publish to (repeatable)
    #[arg(long = "to", value_name = "DESTINATION", required = true)]
    pub to: Vec<Destination>,

    /// Print JSON results
    #[arg(long)]
    pub json: bool,
}

fn non_blank(value: &str) -> Result<String, String> {
    if value.trim().is_empty() {
        Err("must not be blank".to_string())
    } else {
        Ok(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use blogbuddy_core::Destination;
    use clap::{CommandFactory, Parser};

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn publish_accepts_repeated_destinations() {
        let cli = Cli::try_parse_from([
            "blogbuddy", "publish", "--file", "post.md", "--to", "devto", "--to", "Hashnode",
        ])
        .unwrap();
        match cli.command {
            Command::Publish(args) => {
                assert_eq!(args.to, vec![Destination::DevTo, Destination::Hashnode]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn unknown_destination_is_rejected() {
        let result = Cli::try_parse_from(["blogbuddy", "publish", "--file", "x", "--to", "medium"]);
        assert!(result.is_err());
    }

    #[test]
    fn generate_rejects_blank_topic() {
        for topic in ["", "   "] {
            let result = Cli::try_parse_from(["blogbuddy", "generate", "--topic", topic]);
            assert!(result.is_err(), "accepted topic {topic:?}");
        }
    }

    #[test]
    fn generate_collects_publish_destinations() {
        let cli = Cli::try_parse_from([
            "blogbuddy", "generate", "--topic", "Rust async", "--publish", "blogger",
        ])
        .unwrap();
        match cli.command {
            Command::Generate(args) => {
                assert_eq!(args.topic, "Rust async");
                assert_eq!(args.publish, vec![Destination::Blogger]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
