use anyhow::Context;
use clap::Parser;
use futures::executor::block_on;
use log::*;
use std::io;
use std::path::Path;
use woordspel::categories;
use woordspel::chat::OpenRouterClient;
use woordspel::config::{Cli, Command, ServerConfig};
use woordspel::console::Console;
use woordspel::round::RoundGenerator;
use woordspel::validator::AnswerValidator;

fn round_generator(dir: Option<&Path>) -> anyhow::Result<RoundGenerator> {
    let generator = categories::round_generator(dir).with_context(|| {
        format!(
            "Could not load categories from {}",
            dir.map(|d| d.display().to_string()).unwrap_or_default()
        )
    })?;
    Ok(generator)
}

fn play(cli: &Cli) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    let api_key = match cli.api_key() {
        Some(key) => key,
        None => console
            .ask_api_key()?
            .context("No OpenRouter API key given")?,
    };

    let generator = round_generator(cli.categories.as_deref())?;
    let validator = AnswerValidator::new(Box::new(OpenRouterClient::new(
        cli.base_url.as_str(),
        api_key,
        cli.model.as_str(),
    )));

    console.run(&generator, &mut rand::thread_rng(), &validator)?;
    Ok(())
}

fn serve(cli: &Cli, bind: &str) -> anyhow::Result<()> {
    let config = ServerConfig::from_cli(cli, bind)?;

    let generator = round_generator(config.categories.as_deref())?;
    info!(
        "Serving {} categories, judged by {}",
        generator.categories().len(),
        config.model
    );

    let validator = AnswerValidator::new(Box::new(OpenRouterClient::new(
        config.base_url,
        config.api_key,
        config.model,
    )));

    block_on(woordspel::run_server(config.bind_address, generator, validator))
        .context("Could not open socket")?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();

    match cli.command() {
        Command::Play => play(&cli),
        Command::Serve { bind } => serve(&cli, &bind),
    }
}
