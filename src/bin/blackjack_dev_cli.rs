// src/bin/blackjack_dev_cli.rs
//
// Dev-CLI: читает запросы со stdin построчно и гонит их через реестр сессий.
//
//   create-session alice amount=100
//   bet alice amount=10
//   deal alice
//   show-deck alice auth=titanoboa
//   resize-deck alice count=4 auth=titanoboa

use std::path::PathBuf;

use anyhow::Context;
use blackjack_engine::api::{handle_request, parse_request, Operation, Request};
use blackjack_engine::engine::{Command, Report};
use blackjack_engine::infra::{init_logger, ServiceConfig};
use blackjack_engine::SessionRegistry;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Debug, Parser)]
#[command(name = "blackjack_dev_cli", about = "Play blackjack sessions from stdin")]
struct Args {
    /// TOML-конфиг сервиса.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed для воспроизводимых колод.
    #[arg(long)]
    seed: Option<u64>,

    /// Печатать снимок `status` как JSON.
    #[arg(long)]
    json: bool,

    #[arg(short, long)]
    verbose: bool,
}

/// `op name key=value ...` -> Request.
fn parse_line(line: &str) -> Option<Request> {
    let mut parts = line.split_whitespace();
    let op = parts.next()?;
    let mut request = Request::new(op);
    if let Some(name) = parts.next() {
        request = request.param("name", name);
    }
    for kv in parts {
        if let Some((k, v)) = kv.split_once('=') {
            request = request.param(k, v);
        }
    }
    Some(request)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);

    let config = match &args.config {
        Some(path) => ServiceConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ServiceConfig::default(),
    };

    let registry = match args.seed {
        Some(seed) => SessionRegistry::with_seed(config, seed),
        None => SessionRegistry::new(config),
    };

    println!("blackjack_dev_cli: введите команды (Ctrl-D: выход)");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some(request) = parse_line(line) else {
            continue;
        };

        if args.json {
            if let Ok(Operation::Session {
                name,
                command: Command::Status,
            }) = parse_request(&request)
            {
                match registry.submit(&name, Command::Status).await {
                    Ok(Report::Status(snapshot)) => {
                        println!("{}", serde_json::to_string_pretty(&snapshot)?)
                    }
                    Ok(other) => println!("{other}"),
                    Err(err) => println!("error: {err}"),
                }
                continue;
            }
        }

        match handle_request(&registry, &request).await {
            Ok(text) => println!("{text}\n"),
            Err(err) => println!("error: {err}\n"),
        }
    }

    Ok(())
}
