//! runlog-viewer: headless front end for saved simulation runs.
//!
//! Usage:
//!   runlog-viewer --dir ./docs --galaxy 1 --dimboost 6 --strategy Optimized
//!   runlog-viewer --base-url https://example.org/viewer --ipc-mode
//!   runlog-viewer --summarize ./docs/Saved_Runs/Optimized --description-file desc.txt

mod render;

use anyhow::Result;
use runlog_core::{
    command::ViewerCommand,
    config::{SourceConfig, ViewerConfig},
    engine::ViewerEngine,
    event::{DownloadRequest, Effect, ViewerEvent},
    summary_builder::write_summary,
    types::Platform,
    view::ViewModel,
};
use std::env;
use std::path::Path;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;

/// Control messages understood by the IPC loop in addition to commands.
#[derive(serde::Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
enum IpcControl {
    GetState,
    Quit,
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum IpcMessage {
    Control(IpcControl),
    Command(ViewerCommand),
}

#[derive(serde::Serialize)]
struct IpcReply<'a> {
    view:     &'a ViewModel,
    #[serde(skip_serializing_if = "Option::is_none")]
    download: Option<&'a DownloadRequest>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if let Some(dir) = string_arg(&args, "--summarize") {
        return summarize(&args, dir);
    }

    let mut config = match string_arg(&args, "--config") {
        Some(path) => ViewerConfig::load(path)?,
        None => ViewerConfig::default(),
    };
    if let Some(dir) = string_arg(&args, "--dir") {
        config.source = SourceConfig::Dir(dir.to_string());
    }
    if let Some(url) = string_arg(&args, "--base-url") {
        config.source = SourceConfig::Http(url.to_string());
    }
    if let Some(db) = string_arg(&args, "--db") {
        config.settings_db = db.to_string();
    }

    let mut engine = ViewerEngine::build(&config)?;
    engine.start().await;

    if args.iter().any(|a| a == "--ipc-mode") {
        return run_ipc_loop(&mut engine).await;
    }

    for command in selection_commands(&args) {
        engine.dispatch(command).await;
    }
    if args.iter().any(|a| a == "--info") {
        engine.dispatch(ViewerCommand::ToggleStrategyInfo).await;
    }
    if args.iter().any(|a| a == "--expand") {
        for index in 0..engine.state.iteration_count() {
            engine.dispatch(ViewerCommand::ToggleIteration { index }).await;
        }
    }

    print!("{}", render::render(&engine.view())?);

    if args.iter().any(|a| a == "--download") {
        if let Some(request) = engine.dispatch(ViewerCommand::Download).await {
            save_download(&engine, &request).await?;
        }
    }
    Ok(())
}

/// Commands implied by the selection flags, in dropdown order.
fn selection_commands(args: &[String]) -> Vec<ViewerCommand> {
    let mut commands = Vec::new();
    if let Some(platform) = string_arg(args, "--platform").and_then(|p| p.parse::<Platform>().ok()) {
        commands.push(ViewerCommand::SelectPlatform { platform });
    }
    if let Some(galaxy) = string_arg(args, "--galaxy").and_then(|g| g.parse().ok()) {
        commands.push(ViewerCommand::SelectGalaxy { galaxy });
    }
    if let Some(dimboost) = string_arg(args, "--dimboost").and_then(|d| d.parse().ok()) {
        commands.push(ViewerCommand::SelectDimboost { dimboost });
    }
    if let Some(sacrifice) = string_arg(args, "--sacrifice").and_then(|s| s.parse().ok()) {
        commands.push(ViewerCommand::SetSacrifice { sacrifice });
    }
    if let Some(strategy) = string_arg(args, "--strategy") {
        commands.push(ViewerCommand::SelectStrategy { strategy: strategy.to_string() });
    }
    commands
}

/// Line-delimited JSON over stdin/stdout.
///
/// Fetches run in the background; a reply is written after every command
/// and every completed fetch. Superseded run loads are dropped by the
/// reducer's generation check.
async fn run_ipc_loop(engine: &mut ViewerEngine) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<ViewerEvent>();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    write_reply(&mut stdout, &engine.view(), None).await?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break; // EOF
                };
                if line.trim().is_empty() {
                    continue;
                }
                let message: IpcMessage = match serde_json::from_str(&line) {
                    Ok(m) => m,
                    Err(e) => {
                        log::warn!("unknown IPC message: {line}");
                        let err_json = serde_json::json!({ "error": e.to_string() });
                        stdout.write_all(format!("{err_json}\n").as_bytes()).await?;
                        stdout.flush().await?;
                        continue;
                    }
                };
                let download = match message {
                    IpcMessage::Control(IpcControl::Quit) => break,
                    IpcMessage::Control(IpcControl::GetState) => None,
                    IpcMessage::Command(command) => {
                        let pending = engine.handle(command);
                        spawn_fetches(engine, pending, &tx)
                    }
                };
                write_reply(&mut stdout, &engine.view(), download.as_ref()).await?;
            }
            Some(event) = rx.recv() => {
                let pending = engine.apply(event);
                let download = spawn_fetches(engine, pending, &tx);
                write_reply(&mut stdout, &engine.view(), download.as_ref()).await?;
            }
        }
    }
    Ok(())
}

/// Spawn every fetch in `pending`; return the download request, if any.
fn spawn_fetches(
    engine: &ViewerEngine,
    pending: Vec<Effect>,
    tx: &mpsc::UnboundedSender<ViewerEvent>,
) -> Option<DownloadRequest> {
    let mut download = None;
    for effect in pending {
        if let Effect::Download(request) = effect {
            download = Some(request);
            continue;
        }
        if let Some(task) = engine.fetch_task(&effect) {
            let tx = tx.clone();
            tokio::spawn(async move {
                // Receiver gone means the loop has exited.
                let _ = tx.send(task.await);
            });
        }
    }
    download
}

async fn write_reply(
    stdout: &mut tokio::io::Stdout,
    view: &ViewModel,
    download: Option<&DownloadRequest>,
) -> Result<()> {
    let reply = serde_json::to_string(&IpcReply { view, download })?;
    stdout.write_all(reply.as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await?;
    Ok(())
}

async fn save_download(engine: &ViewerEngine, request: &DownloadRequest) -> Result<()> {
    match engine.download_text(request).await {
        Ok(text) => {
            std::fs::write(&request.file_name, text)?;
            println!("saved {}", request.file_name);
        }
        Err(e) => log::warn!("cannot download {}: {e}", request.path),
    }
    Ok(())
}

fn summarize(args: &[String], dir: &str) -> Result<()> {
    let description = match string_arg(args, "--description-file") {
        Some(path) => std::fs::read_to_string(path)?
            .lines()
            .map(|l| l.trim().to_string())
            .collect(),
        None => {
            let name = Path::new(dir)
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| dir.to_string());
            vec![name]
        }
    };
    let written = write_summary(Path::new(dir), description)?;
    println!("wrote {}", written.display());
    Ok(())
}

fn string_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}
