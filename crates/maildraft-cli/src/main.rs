use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use maildraft_core::composer::{build_messages, CollectionMode, Composer};
use maildraft_core::llm::{ChatCompletion, CompletionClient};
use maildraft_core::{prompt, ConfigLoader};
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "maildraft",
    author,
    version = "0.1.0",
    about = "Interactive email drafting against a chat-completion endpoint"
)]
struct Cli {
    #[clap(
        long,
        short,
        default_value = "config.json",
        help = "Path to the JSON configuration file"
    )]
    config: String,

    #[clap(long, help = "Override the instruction file named in the configuration")]
    prompt: Option<PathBuf>,

    #[clap(
        long,
        value_enum,
        help = "Override the configured input collection mode"
    )]
    mode: Option<ModeArg>,

    #[clap(long, short, default_value = "info")]
    log_level: String,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum ModeArg {
    MultilineSections,
    IterativeYesNo,
}

impl From<ModeArg> for CollectionMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::MultilineSections => CollectionMode::MultilineSections,
            ModeArg::IterativeYesNo => CollectionMode::IterativeYesNo,
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level_filter = cli.log_level.parse().unwrap_or(LevelFilter::Info);
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .init();

    // Fatal preconditions (configuration, instruction file) exit non-zero
    // before any operator interaction; a failed dispatch is reported and the
    // run still terminates normally.
    if let Err(e) = run(cli).await {
        eprintln!("Fatal: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = ConfigLoader::from_file(&cli.config).await?;
    log::info!("configuration loaded from {}", cli.config);

    if let Some(prompt_file) = cli.prompt {
        config.prompt_file = prompt_file;
    }
    if let Some(mode) = cli.mode {
        config.composer.mode = mode.into();
    }

    let instruction = prompt::load_instruction(&config.prompt_file).await?;
    let client = CompletionClient::from_config(&config)?;

    let accumulated = {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut composer = Composer::new(
            stdin.lock(),
            stdout.lock(),
            config.composer.end_marker.clone(),
        );
        composer.compose(config.composer.mode)?
    };

    let messages = build_messages(&instruction, &accumulated);
    log::debug!("dispatching {} messages to {}", messages.len(), config.api.base_url);

    match client.complete(messages).await {
        Ok(reply) => println!("Reply:\n{}", reply),
        Err(e) => eprintln!("Request failed: {}", e),
    }

    println!("END");
    Ok(())
}
