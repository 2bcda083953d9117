//! Headless command line front end.
//!
//! `scan` runs a live session whose detector is fed from stdin, one event per
//! line:
//!
//! - `<symbology>\t<payload>`: a decoded code, e.g. `org.gs1.EAN-13\t4006381333931`
//! - `<payload>`: a decoded QR code
//! - `:activate` / `:dismiss`: present or dismiss the scanner

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use bc_app::SessionCommand;
use bc_core::{DecodedSymbol, DeepLinkRequest, ScanId, ScanKind};

use crate::bootstrap::WiredApp;

#[derive(Debug, Parser)]
#[command(name = "barcode-copier", version, about = "Scan barcodes and QR codes into the clipboard")]
pub struct Cli {
    /// Config file (defaults to config.toml in the app data directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run a live scanner session fed by detector lines on stdin
    Scan {
        /// Deep link that opened the app, e.g. barcodecopier://scanner
        #[arg(long)]
        deep_link: Option<String>,
    },
    /// Scan a code from a PNG or JPEG photo
    Import { image: PathBuf },
    /// Print the history grouped by day
    History,
    /// Copy a stored scan back to the clipboard
    Copy { id: String },
    /// Remove one stored scan
    Remove { id: String },
    /// Remove every stored scan
    Clear,
}

impl Command {
    fn mutates_history(&self) -> bool {
        !matches!(self, Command::History | Command::Copy { .. })
    }
}

/// Map one stdin line to a session command. Blank lines map to nothing.
pub fn parse_detector_line(line: &str) -> Option<SessionCommand> {
    let line = line.trim_end_matches(['\r', '\n']);
    match line {
        "" => None,
        ":activate" => Some(SessionCommand::Activate),
        ":dismiss" => Some(SessionCommand::Dismiss),
        _ => {
            let symbol = match line.split_once('\t') {
                Some((symbology, payload)) => DecodedSymbol::new(payload, symbology),
                None => DecodedSymbol::new(line, ScanKind::qr_code()),
            };
            Some(SessionCommand::Decoded(symbol))
        }
    }
}

pub async fn run(command: Command, wired: WiredApp) -> Result<()> {
    let mutates = command.mutates_history();
    let WiredApp {
        app,
        session,
        runtime,
    } = wired;
    let history = app.history();
    history.load().await;

    match command {
        Command::Scan { deep_link } => {
            let runtime_task = tokio::spawn(runtime.run());
            open_scanner(&session, deep_link.as_deref()).await?;

            let on_decoded = session.detector_callback();
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
                match parse_detector_line(&line) {
                    Some(SessionCommand::Decoded(symbol)) => on_decoded(symbol),
                    Some(other) => session.send(other).await?,
                    None => {}
                }
            }

            session.send(SessionCommand::Shutdown).await?;
            runtime_task.await.context("scan session runtime panicked")?;
        }
        Command::Import { image } => {
            let bytes = tokio::fs::read(&image)
                .await
                .with_context(|| format!("failed to read image: {}", image.display()))?;
            match app.import_photo_scan().execute(&bytes).await? {
                Some(record) => println!("{}\t{}\t{}", record.id, record.kind.display_name(), record.content),
                None => println!("no new code found"),
            }
        }
        Command::History => {
            for group in history.grouped_for_display(Local::now().date_naive(), &Local).await {
                println!("{}", group.label);
                for record in &group.records {
                    println!(
                        "  {}\t{}\t{}",
                        record.id,
                        record.kind.display_name(),
                        record.clipboard_text()
                    );
                }
            }
        }
        Command::Copy { id } => {
            if !app.copy_from_history().execute(&ScanId::from(id.as_str())).await? {
                anyhow::bail!("no scan with id {id}");
            }
        }
        Command::Remove { id } => {
            if !history.remove_by_id(&ScanId::from(id.as_str())).await {
                anyhow::bail!("no scan with id {id}");
            }
        }
        Command::Clear => history.clear().await,
    }

    if mutates {
        history.checkpoint().await;
    }
    Ok(())
}

async fn open_scanner(session: &bc_app::SessionHandle, deep_link: Option<&str>) -> Result<()> {
    let Some(url) = deep_link else {
        return session.send(SessionCommand::Activate).await;
    };
    match DeepLinkRequest::parse(url) {
        Ok(Some(DeepLinkRequest::OpenScanner)) => session.send(SessionCommand::Activate).await,
        Ok(None) => {
            info!(url, "deep link has no action");
            Ok(())
        }
        Err(err) => {
            warn!(error = %err, url, "deep link rejected");
            Ok(())
        }
    }
}
