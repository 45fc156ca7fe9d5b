//! Line-oriented terminal front end for the Whispr dashboard.
//!
//! Reads one command per line from stdin, dispatches it to a [`Dashboard`]
//! backed by the JSON export, and re-renders after every change.
//!
//! Search edits are debounced: a `search` line only takes effect once no
//! further edit arrived for `search_debounce_ms`, or immediately on `apply`.
//! Any other command applies a pending search first.
//!
//! # Usage
//!
//! ```text
//! whispr-dash [CONFIG.toml]
//! ```
//!
//! # Commands
//!
//! - `view grid|list|card`, `type all|<type>`, `sort newest|oldest|type`
//! - `search <text>` (empty text clears), `apply`, `clear`
//! - `next`, `prev`, `swipe <start_x> <end_x>`
//! - `open <id>`, `current`, `close`
//! - `delete <id>`, `delcur`, `read <id>`
//! - `reload`, `quit`

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::str::FromStr;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Instant;
use whispr_dash::app::{Dashboard, Event, SearchDebouncer};
use whispr_dash::observability::init_tracing;
use whispr_dash::ui::render_to_string;
use whispr_dash::{initialize, Config, JsonRepository, WhisprError, WhisprRepository};

fn main() {
    if let Err(e) = run() {
        eprintln!("whispr-dash: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), WhisprError> {
    let config = match std::env::args().nth(1) {
        Some(path) => Config::from_file(Path::new(&path))?,
        None => Config::default(),
    };

    init_tracing(&config);
    tracing::info!(user_id = %config.user_id, "dashboard starting");

    let repo = JsonRepository::open(config.data_path())?;
    let mut dashboard = Dashboard::with_state(repo, initialize(&config));
    let mut debouncer = SearchDebouncer::new(config.search_debounce());

    dashboard.dispatch(Event::Reload)?;
    redraw(&mut dashboard, config.color, &mut io::stdout())?;

    let lines = spawn_stdin_reader();

    loop {
        let received = match debouncer.deadline() {
            Some(deadline) => lines.recv_timeout(deadline.saturating_duration_since(Instant::now())),
            None => lines.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };

        let line = match received {
            Ok(line) => line?,
            Err(RecvTimeoutError::Timeout) => {
                if let Some(term) = debouncer.poll(Instant::now()) {
                    apply(&mut dashboard, vec![Event::SetSearch(term)], config.color)?;
                }
                continue;
            }
            Err(RecvTimeoutError::Disconnected) => {
                if let Some(term) = debouncer.flush() {
                    apply(&mut dashboard, vec![Event::SetSearch(term)], config.color)?;
                }
                break;
            }
        };

        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => println!("{HELP}"),
            Ok(Command::Search(term)) => debouncer.input(term, Instant::now()),
            Ok(Command::Apply) => {
                let events = debouncer.flush().map(Event::SetSearch).into_iter().collect();
                apply(&mut dashboard, events, config.color)?;
            }
            Ok(Command::Dispatch(events)) => {
                let events = debouncer
                    .flush()
                    .map(Event::SetSearch)
                    .into_iter()
                    .chain(events)
                    .collect();
                apply(&mut dashboard, events, config.color)?;
            }
            Err(message) => println!("{message}"),
        }
    }

    tracing::info!("dashboard exiting");
    Ok(())
}

/// Forwards stdin lines over a channel so the main loop can wait on the
/// search deadline and on input at the same time.
fn spawn_stdin_reader() -> mpsc::Receiver<io::Result<String>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

fn apply(
    dashboard: &mut Dashboard<JsonRepository>,
    events: Vec<Event>,
    colored: bool,
) -> Result<(), WhisprError> {
    let mut changed = false;
    for event in events {
        changed |= dashboard.dispatch(event)?;
    }
    if changed {
        redraw(dashboard, colored, &mut io::stdout())?;
    }
    Ok(())
}

const HELP: &str = "commands: view grid|list|card, type all|<type>, sort newest|oldest|type, \
search <text>, apply, clear, next, prev, swipe <start_x> <end_x>, open <id>, current, close, \
delete <id>, delcur, read <id>, reload, quit";

fn redraw<R: WhisprRepository>(
    dashboard: &mut Dashboard<R>,
    colored: bool,
    out: &mut impl Write,
) -> io::Result<()> {
    let vm = dashboard.state().compute_viewmodel(chrono::Utc::now());
    out.write_all(render_to_string(&vm, colored).as_bytes())?;
    for (message, is_error) in dashboard.drain_toasts() {
        let marker = if is_error { '!' } else { '*' };
        writeln!(out, "{marker} {message}")?;
    }
    out.flush()
}

#[derive(Debug, PartialEq)]
enum Command {
    Dispatch(Vec<Event>),
    Search(String),
    /// Applies a pending search without waiting out the debounce.
    Apply,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (verb, rest) = line
        .trim_start()
        .split_once(' ')
        .map_or((line.trim(), ""), |(verb, rest)| (verb, rest));
    let arg = rest.trim();

    let single = |event: Event| -> Result<Command, String> { Ok(Command::Dispatch(vec![event])) };
    let need_id = |event: fn(String) -> Event| {
        if arg.is_empty() {
            Err(format!("usage: {verb} <id>"))
        } else {
            Ok(Command::Dispatch(vec![event(arg.to_string())]))
        }
    };

    match verb {
        "" => Ok(Command::Dispatch(vec![])),
        "help" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        "view" => parsed(arg, Event::SetViewMode),
        "type" => parsed(arg, Event::SelectType),
        "sort" => parsed(arg, Event::SetSort),
        // Search text is taken verbatim, surrounding spaces included.
        "search" => Ok(Command::Search(rest.to_string())),
        "apply" => Ok(Command::Apply),
        "clear" => single(Event::ClearFilters),
        "next" | "n" => single(Event::NextCard),
        "prev" | "p" => single(Event::PreviousCard),
        "swipe" => parse_swipe(arg),
        "open" => need_id(|id| Event::OpenWhispr { id }),
        "current" => single(Event::OpenCurrent),
        "close" => single(Event::CloseWhispr),
        "delete" => need_id(|id| Event::DeleteWhispr { id }),
        "delcur" => single(Event::DeleteCurrent),
        "read" => need_id(|id| Event::MarkRead { id }),
        "reload" => single(Event::Reload),
        other => Err(format!("unknown command '{other}', try 'help'")),
    }
}

fn parsed<T>(arg: &str, event: fn(T) -> Event) -> Result<Command, String>
where
    T: FromStr<Err = WhisprError>,
{
    arg.parse()
        .map(|value| Command::Dispatch(vec![event(value)]))
        .map_err(|e: WhisprError| e.to_string())
}

/// Expands `swipe START END` into the touch event sequence of a drag.
fn parse_swipe(arg: &str) -> Result<Command, String> {
    let coords: Vec<f64> = arg
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<_, _>>()
        .map_err(|_| "usage: swipe <start_x> <end_x>".to_string())?;

    match coords.as_slice() {
        [start, end] => Ok(Command::Dispatch(vec![
            Event::TouchStart { x: *start },
            Event::TouchMove { x: *end },
            Event::TouchEnd,
        ])),
        _ => Err("usage: swipe <start_x> <end_x>".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use whispr_dash::{FilterState, InMemoryRepository, SortOption, TypeFilter, ViewMode, Whispr, WhisprType};

    fn events(line: &str) -> Vec<Event> {
        match parse_command(line).unwrap() {
            Command::Dispatch(events) => events,
            other => panic!("expected events, got {other:?}"),
        }
    }

    #[test]
    fn parses_filter_commands() {
        assert_eq!(events("view card"), vec![Event::SetViewMode(ViewMode::Card)]);
        assert_eq!(
            events("type hot_take"),
            vec![Event::SelectType(TypeFilter::Only(WhisprType::HotTake))]
        );
        assert_eq!(events("type all"), vec![Event::SelectType(TypeFilter::All)]);
        assert_eq!(events("sort oldest"), vec![Event::SetSort(SortOption::Oldest)]);
        assert!(parse_command("view carousel").is_err());
    }

    #[test]
    fn search_keeps_text_verbatim() {
        assert_eq!(parse_command("search  a b ").unwrap(), Command::Search(" a b ".to_string()));
        assert_eq!(parse_command("search").unwrap(), Command::Search(String::new()));
        assert_eq!(parse_command("apply").unwrap(), Command::Apply);
    }

    #[test]
    fn swipe_expands_to_touch_sequence() {
        assert_eq!(
            events("swipe 200 120"),
            vec![
                Event::TouchStart { x: 200.0 },
                Event::TouchMove { x: 120.0 },
                Event::TouchEnd
            ]
        );
        assert!(parse_command("swipe 1").is_err());
        assert!(parse_command("swipe a b").is_err());
    }

    #[test]
    fn id_commands_require_an_id() {
        assert_eq!(events("open w1"), vec![Event::OpenWhispr { id: "w1".to_string() }]);
        assert_eq!(events("read w2"), vec![Event::MarkRead { id: "w2".to_string() }]);
        assert!(parse_command("delete").is_err());
    }

    #[test]
    fn control_commands() {
        assert_eq!(parse_command("quit").unwrap(), Command::Quit);
        assert_eq!(parse_command("help").unwrap(), Command::Help);
        assert_eq!(events(""), vec![]);
        assert!(parse_command("dance").is_err());
    }

    struct FailingFlush(Vec<u8>);

    impl Write for FailingFlush {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    fn dashboard() -> Dashboard<InMemoryRepository> {
        let mut repo = InMemoryRepository::new();
        repo.insert("ana", Whispr::new("w1", "hello", WhisprType::Question, "2024-01-01"));
        let mut dashboard = Dashboard::new(repo, "ana", FilterState::default());
        dashboard.dispatch(Event::Reload).unwrap();
        dashboard
    }

    #[test]
    fn redraw_writes_view_and_toasts() {
        let mut dashboard = dashboard();
        dashboard.dispatch(Event::DeleteWhispr { id: "w1".to_string() }).unwrap();

        let mut out = Vec::new();
        redraw(&mut dashboard, false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("No whisprs yet"));
        assert!(text.contains("* Whispr deleted"));
    }

    #[test]
    fn redraw_reports_write_errors() {
        let mut dashboard = dashboard();
        let mut out = FailingFlush(Vec::new());
        let err = redraw(&mut dashboard, false, &mut out).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert!(!out.0.is_empty());
    }
}
