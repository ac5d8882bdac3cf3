// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod render;
mod seed;

use clap::Parser;
use error::CliError;
use render::{render_error, render_outcome, render_vocabulary, render_view};
use seed::load_seed;
use socialcare::{CommandOutcome, Dataset, Engine, Notification};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::Mutex;
use tracing::{debug, info};

/// SocialCare - command shell for the volunteer ledger
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON seed file with `volunteers`, `events` and `records`.
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Path to a file of commands to run before the prompt, one per line.
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Exit after the script instead of reading standard input.
    #[arg(long)]
    no_interactive: bool,
}

/// Session state shared by the prompt loop and the renderer.
///
/// Every command and every read of the views goes through the same lock.
#[derive(Clone)]
struct AppState {
    engine: Arc<Mutex<Engine>>,
}

impl AppState {
    fn new(engine: Engine) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
        }
    }
}

/// Whether the shell keeps reading after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Executes one input line and renders its result.
async fn handle_line(state: &AppState, line: &str) -> (String, Flow) {
    let mut engine = state.engine.lock().await;
    match engine.execute(line) {
        Ok(outcome) => {
            let flow: Flow = exit_flow(&outcome);
            (render_outcome(&engine, &outcome), flow)
        }
        Err(error) => (render_error(&error), Flow::Continue),
    }
}

fn exit_flow(outcome: &CommandOutcome) -> Flow {
    if outcome.notification == Some(Notification::Exit) {
        Flow::Exit
    } else {
        Flow::Continue
    }
}

/// Runs every command of a script file. Blank lines and `#` comments are skipped.
async fn run_script<W: Write + Send>(
    state: &AppState,
    path: &Path,
    out: &mut W,
) -> Result<Flow, CliError> {
    let text: String = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "Running script");

    for line in text.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        writeln!(out, "> {line}")?;
        let (rendered, flow): (String, Flow) = handle_line(state, line).await;
        writeln!(out, "{rendered}")?;
        if flow == Flow::Exit {
            return Ok(Flow::Exit);
        }
    }
    Ok(Flow::Continue)
}

/// Reads commands from standard input until `exit` or end of input.
async fn run_prompt<W: Write + Send>(state: &AppState, out: &mut W) -> Result<(), CliError> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let prompt: String = {
            let engine = state.engine.lock().await;
            format!("{}> ", engine.context().as_str())
        };
        write!(out, "{prompt}")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            debug!("End of input");
            return Ok(());
        };
        let (rendered, flow): (String, Flow) = handle_line(state, &line).await;
        writeln!(out, "{rendered}")?;
        if flow == Flow::Exit {
            return Ok(());
        }
    }
}

async fn banner(state: &AppState) -> String {
    let engine = state.engine.lock().await;
    format!(
        "Welcome to SocialCare.\n{}\n{}",
        render_vocabulary(engine.context()),
        render_view(&engine)
    )
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing on stderr so it never mixes with command output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Initializing SocialCare shell");

    let dataset: Dataset = if let Some(path) = &args.data {
        info!(path = %path.display(), "Loading seed data");
        load_seed(path)?
    } else {
        info!("Starting with an empty dataset");
        Dataset::new()
    };

    let mut engine: Engine = Engine::default();
    engine.reset_data(dataset);
    let state: AppState = AppState::new(engine);

    let mut out = std::io::stdout();
    writeln!(out, "{}", banner(&state).await)?;

    let flow: Flow = match &args.script {
        Some(path) => run_script(&state, path, &mut out).await?,
        None => Flow::Continue,
    };

    if flow == Flow::Continue && !args.no_interactive {
        run_prompt(&state, &mut out).await?;
    }

    info!("Shell closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use socialcare::ContextId;

    /// Helper to create shell state holding one volunteer and one event.
    fn create_test_app_state() -> AppState {
        let text: &str = r#"{
            "volunteers": [{
                "id": "S1234567A", "name": "Alice Tan", "gender": "female",
                "birthday": "01-01-1991", "phone": "91234567",
                "email": "alice@example.com", "address": "123 Main Street"
            }],
            "events": [{
                "id": 1, "name": "Beach Cleanup", "location": "East Coast Park",
                "start_date": "01-06-2026", "end_date": "01-06-2026",
                "start_time": "09:00", "end_time": "12:00", "description": "Pick up litter"
            }],
            "records": [{ "event_id": 1, "volunteer_id": "S1234567A", "hour": 3 }]
        }"#;
        let mut engine: Engine = Engine::default();
        engine.reset_data(seed::parse_seed(text).unwrap());
        AppState::new(engine)
    }

    #[test]
    fn test_args_parse_flags() {
        let args: Args = Args::try_parse_from([
            "socialcare",
            "--data",
            "seed.json",
            "--script",
            "commands.txt",
            "--no-interactive",
        ])
        .unwrap();

        assert_eq!(args.data, Some(PathBuf::from("seed.json")));
        assert_eq!(args.script, Some(PathBuf::from("commands.txt")));
        assert!(args.no_interactive);
    }

    #[test]
    fn test_args_default_to_interactive_empty_session() {
        let args: Args = Args::try_parse_from(["socialcare"]).unwrap();

        assert!(args.data.is_none());
        assert!(args.script.is_none());
        assert!(!args.no_interactive);
    }

    #[tokio::test]
    async fn test_handle_line_renders_view_after_edit() {
        let state: AppState = create_test_app_state();

        let (rendered, flow): (String, Flow) = handle_line(&state, "edit 1 p/81234567").await;

        assert_eq!(flow, Flow::Continue);
        assert!(rendered.starts_with("Edited volunteer: Alice Tan"));
        assert!(rendered.contains("-- Volunteers --"));
        assert!(rendered.contains("Total hours: 3"));
    }

    #[tokio::test]
    async fn test_handle_line_renders_error_code() {
        let state: AppState = create_test_app_state();

        let (rendered, flow): (String, Flow) = handle_line(&state, "delete 5").await;

        assert_eq!(flow, Flow::Continue);
        assert!(rendered.starts_with("Error [INVALID_DISPLAYED_INDEX]"));
    }

    #[tokio::test]
    async fn test_manage_renders_record_vocabulary() {
        let state: AppState = create_test_app_state();

        let (rendered, _): (String, Flow) = handle_line(&state, "manage 1").await;

        assert!(rendered.contains("[Records] commands: find, list"));
        assert!(rendered.contains("Alice Tan (S1234567A) @ Beach Cleanup [1]: 3 hour(s)"));
        assert_eq!(state.engine.lock().await.context(), ContextId::Record);
    }

    #[tokio::test]
    async fn test_exit_stops_the_shell() {
        let state: AppState = create_test_app_state();

        let (_, flow): (String, Flow) = handle_line(&state, "exit").await;

        assert_eq!(flow, Flow::Exit);
    }

    #[tokio::test]
    async fn test_script_runs_until_exit() {
        let state: AppState = create_test_app_state();
        let mut file: tempfile::NamedTempFile = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# seed a second event").unwrap();
        writeln!(file, "switch -e").unwrap();
        writeln!(
            file,
            "add n/Food Drive l/Hall sd/01-07-2026 ed/01-07-2026 st/09:00 et/10:00 d/Collect food"
        )
        .unwrap();
        writeln!(file).unwrap();
        writeln!(file, "exit").unwrap();
        writeln!(file, "clear").unwrap();

        let mut out: Vec<u8> = Vec::new();
        let flow: Flow = run_script(&state, file.path(), &mut out).await.unwrap();

        assert_eq!(flow, Flow::Exit);
        let engine = state.engine.lock().await;
        assert_eq!(engine.dataset().events().len(), 2);
        assert_eq!(engine.command_log().len(), 3);
        let printed: String = String::from_utf8(out).unwrap();
        assert!(printed.contains("> switch -e"));
        assert!(printed.contains("New event added: Food Drive [2]"));
        assert!(!printed.contains("> clear"));
    }

    #[tokio::test]
    async fn test_missing_script_is_read_error() {
        let state: AppState = create_test_app_state();
        let mut out: Vec<u8> = Vec::new();

        let result: Result<Flow, CliError> =
            run_script(&state, Path::new("/nonexistent/commands.txt"), &mut out).await;

        assert!(matches!(result, Err(CliError::Read { .. })));
    }
}
