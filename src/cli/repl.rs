//! Interactive mode for the gavel binary.
//!
//! Launch with `gavel` (no subcommand). The session holds the catalogue
//! from the most recent successful fetch; download and export act on it
//! without re-fetching. Type `/help` for commands, Tab for completion.

use rustyline::completion::{Completer, Pair};
use rustyline::config::CompletionType;
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{
    Cmd, ConditionalEventHandler, Config, Editor, Event, EventContext, EventHandler, Helper,
    KeyEvent, RepeatCount,
};
use std::path::{Path, PathBuf};

use crate::actions::{download_action, export_action, fetch_action, FetchOutcome};
use crate::cli::output;
use crate::download::DEFAULT_IMAGE_DIR;
use crate::export::DEFAULT_EXPORT_FILE;
use crate::fetch::{PageClient, DEFAULT_TIMEOUT_MS};
use crate::selectors::SelectorProfile;
use crate::session::Catalogue;

/// Available commands.
const COMMANDS: &[(&str, &str)] = &[
    ("/fetch", "Fetch a listings page: /fetch <url>"),
    ("/show", "Show the current catalogue"),
    ("/download", "Download all images: /download [dir]"),
    ("/export", "Export the catalogue as CSV: /export [file]"),
    ("/selectors", "Show the active selector profile"),
    ("/clear", "Clear the screen"),
    ("/help", "Show available commands"),
    ("/exit", "Quit"),
];

/// REPL helper for tab completion and inline hints.
#[derive(Default)]
struct GavelHelper;

impl Completer for GavelHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let input = &line[..pos];

        if !input.contains(' ') {
            let matches: Vec<Pair> = COMMANDS
                .iter()
                .filter(|(cmd, _)| cmd.starts_with(input))
                .map(|(cmd, desc)| Pair {
                    display: format!("{cmd:<12} {desc}"),
                    replacement: format!("{cmd} "),
                })
                .collect();
            return Ok((0, matches));
        }

        Ok((pos, Vec::new()))
    }
}

impl Hinter for GavelHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<String> {
        if pos < line.len() || line.is_empty() {
            return None;
        }
        if line.starts_with('/') && !line.contains(' ') {
            for (cmd, _) in COMMANDS {
                if cmd.starts_with(line) && *cmd != line {
                    return Some(cmd[line.len()..].to_string());
                }
            }
        }
        None
    }
}

impl Highlighter for GavelHelper {}
impl Validator for GavelHelper {}
impl Helper for GavelHelper {}

struct TabCompleteOrAcceptHint;

impl ConditionalEventHandler for TabCompleteOrAcceptHint {
    fn handle(
        &self,
        _evt: &Event,
        _n: RepeatCount,
        _positive: bool,
        ctx: &EventContext<'_>,
    ) -> Option<Cmd> {
        if ctx.has_hint() {
            Some(Cmd::CompleteHint)
        } else {
            Some(Cmd::Complete)
        }
    }
}

/// Session state for one interactive run.
struct ReplState {
    catalogue: Catalogue,
    profile: SelectorProfile,
    client: PageClient,
}

fn history_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".gavel")
        .join("history")
}

/// Run the interactive session.
pub async fn run(profile: SelectorProfile) -> anyhow::Result<()> {
    eprintln!();
    eprintln!(
        "  \x1b[32m\u{25c9}\x1b[0m \x1b[1mgavel v{}\x1b[0m \x1b[90m\u{2014} art-auction catalogue scraper\x1b[0m",
        env!("CARGO_PKG_VERSION")
    );
    eprintln!();
    eprintln!(
        "    Start with \x1b[36m/fetch <url>\x1b[0m, \x1b[90mTab\x1b[0m to complete, \x1b[90m/exit\x1b[0m to quit."
    );
    eprintln!();

    let config = Config::builder()
        .history_ignore_space(true)
        .auto_add_history(true)
        .completion_type(CompletionType::List)
        .completion_prompt_limit(20)
        .build();

    let mut rl: Editor<GavelHelper, rustyline::history::DefaultHistory> =
        Editor::with_config(config)?;
    rl.set_helper(Some(GavelHelper));
    rl.bind_sequence(
        KeyEvent::from('\t'),
        EventHandler::Conditional(Box::new(TabCompleteOrAcceptHint)),
    );

    let hist_path = history_path();
    if hist_path.exists() {
        let _ = rl.load_history(&hist_path);
    }

    let mut state = ReplState {
        catalogue: Catalogue::new(),
        profile,
        client: PageClient::new(DEFAULT_TIMEOUT_MS),
    };
    let prompt = " \x1b[36mgavel>\x1b[0m ";

    loop {
        match rl.readline(prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let input = line.strip_prefix('/').unwrap_or(line);
                if input.is_empty() {
                    cmd_help();
                    continue;
                }

                let mut parts = input.splitn(2, ' ');
                let cmd = parts.next().unwrap_or("");
                let args = parts.next().unwrap_or("").trim();

                match cmd {
                    "exit" | "quit" => break,
                    "help" | "h" | "?" => cmd_help(),
                    "clear" | "cls" => eprint!("\x1b[2J\x1b[H"),
                    "fetch" => cmd_fetch(args, &mut state).await,
                    "show" => cmd_show(&state),
                    "download" => cmd_download(args, &state).await,
                    "export" => cmd_export(args, &state),
                    "selectors" => cmd_selectors(&state),
                    _ => {
                        eprintln!("  Unknown command '/{cmd}'. Type /help for commands.");
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                eprintln!("  \x1b[90m(Ctrl+C)\x1b[0m Type \x1b[1m/exit\x1b[0m to quit.");
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("  Error: {err}");
                break;
            }
        }
    }

    let _ = std::fs::create_dir_all(hist_path.parent().unwrap_or(Path::new(".")));
    let _ = rl.save_history(&hist_path);

    Ok(())
}

fn cmd_help() {
    eprintln!();
    eprintln!("  Commands:");
    eprintln!();
    for (cmd, desc) in COMMANDS {
        eprintln!("    {cmd:<12} {desc}");
    }
    eprintln!();
}

async fn cmd_fetch(args: &str, state: &mut ReplState) {
    if args.is_empty() {
        output::error("Please enter a URL: /fetch <url>");
        return;
    }

    match fetch_action(&mut state.catalogue, &state.client, args, &state.profile).await {
        Ok(FetchOutcome::Loaded(count)) => {
            output::print_table(state.catalogue.listings());
            output::success(&format!("Fetched {count} listings."));
        }
        Ok(FetchOutcome::NoItems) => {
            output::warn("No art items found. Check the URL or the page structure.");
        }
        Err(e) => output::error(&format!("Fetch failed: {e:#}")),
    }
}

fn cmd_show(state: &ReplState) {
    if state.catalogue.is_empty() {
        output::status("No catalogue loaded. Run /fetch <url> first.");
        return;
    }
    output::print_table(state.catalogue.listings());
    if let Some(source) = state.catalogue.source() {
        output::status(&format!("{} listings from {source}", state.catalogue.len()));
    }
}

async fn cmd_download(args: &str, state: &ReplState) {
    if state.catalogue.is_empty() {
        output::status("No catalogue loaded. Run /fetch <url> first.");
        return;
    }

    let dir = if args.is_empty() { DEFAULT_IMAGE_DIR } else { args };
    let out_dir = PathBuf::from(dir);

    match download_action(&state.catalogue, &state.client, &out_dir, !output::is_quiet()).await {
        Ok(summary) => output::success(&format!(
            "{} images saved to {}, {} skipped, {} failed",
            summary.written,
            out_dir.display(),
            summary.skipped,
            summary.failed
        )),
        Err(e) => output::error(&format!("Download failed: {e:#}")),
    }
}

fn cmd_export(args: &str, state: &ReplState) {
    if state.catalogue.is_empty() {
        output::status("No catalogue loaded. Run /fetch <url> first.");
        return;
    }

    let file = if args.is_empty() { DEFAULT_EXPORT_FILE } else { args };
    let path = PathBuf::from(file);

    match export_action(&state.catalogue, &path) {
        Ok(bytes) => output::success(&format!(
            "{} rows exported to {} ({} bytes)",
            state.catalogue.len(),
            path.display(),
            bytes.len()
        )),
        Err(e) => output::error(&format!("Export failed: {e:#}")),
    }
}

fn cmd_selectors(state: &ReplState) {
    eprintln!();
    eprintln!("  Selector profile:");
    eprintln!();
    eprintln!("    item    {}", state.profile.item);
    eprintln!("    artist  {}", state.profile.artist);
    eprintln!("    title   {}", state.profile.title);
    eprintln!("    image   {}", state.profile.image);
    eprintln!();
}
