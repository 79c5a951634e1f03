//! Call Inspector - API call inspector with persistent history
//!
//! Usage:
//!   call-inspector                          Run interactive TUI
//!   call-inspector call GET /users/me       Perform one call and print its view
//!   call-inspector history --filter error   List saved entries
//!   call-inspector show <ID>                Print one entry as JSON
//!   call-inspector delete <ID>              Delete one entry
//!   call-inspector reset --yes              Wipe the saved history
//!   call-inspector base-url [URL]           Show or set the saved base URL

use call_inspector::app::App;
use call_inspector::cli::{Cli, Command};
use call_inspector::config::{self, Config};
use call_inspector::console::{ConsoleState, EntryBody};
use call_inspector::error::{InspectorError, Result};
use call_inspector::history::{normalize_base_url, FileStorage, FilterMode, LogStore};
use call_inspector::intercept::{BaseUrl, CallRequest, HttpTransport, Interceptor, UrlNormalizer};
use call_inspector::logging::init_tracing;
use call_inspector::ui;
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;

fn main() -> ExitCode {
    let cli = Cli::parse();
    // Keep the alternate screen clean unless debug output was asked for
    if cli.verbose || cli.command.is_some() {
        init_tracing(cli.verbose);
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let cfg = config::load(cli.config.as_deref());
    let data_dir = config::data_dir(&cfg, cli.data_dir.as_deref())?;
    info!("History directory: {}", data_dir.display());

    let store = LogStore::new(
        Box::new(FileStorage::new(&data_dir)),
        cfg.history.max_entries,
    );
    let base_url = BaseUrl::new(normalize_base_url(&cfg.http.base_url));
    let mut console = ConsoleState::new(store, base_url.clone(), cfg.default_filter());
    console.restore();

    // Session override, never persisted
    if let Some(url) = &cli.base_url {
        base_url.set(normalize_base_url(url));
    }
    let origin = cli.origin.clone().or_else(|| cfg.http.origin.clone());

    match cli.command {
        None => {
            let rt = runtime()?;
            let (interceptor, entries) = build_interceptor(&cfg, base_url, origin)?;
            let mut app = App::new(console, Arc::new(interceptor), entries);
            rt.block_on(ui::run(&mut app))
        }
        Some(Command::Call {
            method,
            url,
            body,
            raw,
        }) => {
            let mut request = CallRequest::new(method.to_uppercase(), url);
            if let Some(body) = body {
                let body = serde_json::from_str(&body).map_err(|e| {
                    InspectorError::InvalidRequest {
                        reason: format!("body is not JSON: {}", e),
                    }
                })?;
                request = request.with_body(body);
            }
            let rt = runtime()?;
            let (interceptor, entries) = build_interceptor(&cfg, base_url, origin)?;
            rt.block_on(run_call(&mut console, interceptor, entries, request, raw))
        }
        Some(Command::History { filter }) => {
            print_history(&mut console, filter);
            Ok(())
        }
        Some(Command::Show { id }) => {
            println!("{}", console.entry_json(&id)?);
            Ok(())
        }
        Some(Command::Delete { id }) => {
            if console.delete(&id) {
                println!("Deleted {}", id);
                Ok(())
            } else {
                Err(InspectorError::EntryNotFound { id })
            }
        }
        Some(Command::Reset { yes }) => {
            if !yes {
                return Err(InspectorError::InvalidRequest {
                    reason: "reset erases all saved entries, pass --yes to confirm".into(),
                });
            }
            console.reset();
            println!("History reset");
            Ok(())
        }
        Some(Command::BaseUrl { url }) => {
            match url {
                Some(url) => println!("{}", console.set_base_url(&url)),
                None => println!("{}", console.base_url()),
            }
            Ok(())
        }
    }
}

fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Runtime::new().map_err(|source| InspectorError::Runtime { source })
}

type EntryReceiver = tokio::sync::mpsc::UnboundedReceiver<call_inspector::history::LogEntry>;

fn build_interceptor(
    cfg: &Config,
    base_url: BaseUrl,
    origin: Option<String>,
) -> Result<(Interceptor<HttpTransport>, EntryReceiver)> {
    let transport = HttpTransport::new(base_url.clone(), origin.clone(), cfg.timeout())?;
    Ok(Interceptor::new(
        transport,
        UrlNormalizer::new(base_url, origin),
    ))
}

async fn run_call(
    console: &mut ConsoleState,
    interceptor: Interceptor<HttpTransport>,
    mut entries: EntryReceiver,
    request: CallRequest,
    raw: bool,
) -> Result<()> {
    let result = interceptor.call(&request).await;

    if let Some(entry) = entries.recv().await {
        println!("{}", entry.summary());
        let body = EntryBody::build(&entry);
        let text = match (&body.ui, raw) {
            (Some(fragment), false) => fragment.to_text(),
            _ => body.raw.to_text(),
        };
        println!("{}", text);
        console.ingest(entry);
    }

    if let Err(e) = result {
        eprintln!("Call failed: {}", e);
    }
    Ok(())
}

fn print_history(console: &mut ConsoleState, filter: FilterMode) {
    console.set_filter(filter);
    let view = console.view();
    for mounted in view.visible() {
        println!("{}", mounted.entry.summary());
    }
    let counts = view.counts();
    eprintln!("{}/{} entries", counts.visible, counts.total);
}
