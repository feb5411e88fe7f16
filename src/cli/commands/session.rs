//! Interactive habit logging session.
//!
//! The store is started once per session (which wipes `habit_log`) and then
//! handed explicitly to every command. Each input line is parsed as a
//! [`SessionLine`] and executed synchronously; a failing command prints its
//! error and the prompt comes back.

use crate::cli::parser::{SessionCommand, SessionLine, ViewArgs};
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::clear::ClearLogic;
use crate::core::report;
use crate::core::view::{ViewLogic, ViewQuery};
use crate::db::SessionStore;
use crate::db::stats::print_store_info;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::feedback::{FeedbackLogic, FeedbackProvider, GeminiProvider, TerminalSink};
use crate::models::filter::HabitFilter;
use crate::ui::messages::{ask_confirmation, error, info, prompt_line, warning};
use crate::utils::args::split_line;
use crate::utils::date;
use crate::utils::time::parse_time_arg;
use clap::Parser;
use std::io::{self, BufRead};
use tracing::debug;

const PROMPT: &str = "habitlog>";

/// What the loop does after a command.
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = SessionStore::start(&cfg.database)?;

    info(format!(
        "New session on {} (previous entries were discarded). Type `help` for commands.",
        cfg.database
    ));

    let stdin = io::stdin();
    let mut input = stdin.lock();
    run_loop(&store, cfg, &mut input)?;

    info("Session closed.");
    Ok(())
}

/// Read-eval loop until `exit` or EOF.
pub fn run_loop<R: BufRead>(store: &SessionStore, cfg: &Config, input: &mut R) -> AppResult<()> {
    while let Some(line) = prompt_line(input, PROMPT)? {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let args = match split_line(line) {
            Ok(a) => a,
            Err(e) => {
                error(e);
                continue;
            }
        };

        let parsed = match SessionLine::try_parse_from(args) {
            Ok(p) => p,
            Err(e) => {
                // help and usage errors are printed by clap itself
                let _ = e.print();
                continue;
            }
        };

        match execute(store, cfg, parsed.command, input) {
            Ok(Flow::Exit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => error(e),
        }
    }

    Ok(())
}

pub fn execute<R: BufRead>(
    store: &SessionStore,
    cfg: &Config,
    command: SessionCommand,
    input: &mut R,
) -> AppResult<Flow> {
    debug!(command = command_name(&command), "session command");

    match command {
        SessionCommand::Add {
            habit,
            start,
            end,
            date,
        } => {
            let start = parse_time_arg(&start)?;
            let end = parse_time_arg(&end)?;
            let d = date::parse_optional_date(date.as_ref())?;
            AddLogic::apply(store, &habit.join(" "), start, end, d)?;
        }

        SessionCommand::List(view) => {
            let query = resolve_view(&view, cfg)?;
            let entries = ViewLogic::load(store, &query)?;
            report::print_entries(&entries);
        }

        SessionCommand::Summary(view) => {
            let query = resolve_view(&view, cfg)?;
            let entries = ViewLogic::load(store, &query)?;
            report::print_summary(&entries);
        }

        SessionCommand::Chart(view) => {
            let query = resolve_view(&view, cfg)?;
            let entries = ViewLogic::load(store, &query)?;
            report::print_chart(&entries);
        }

        SessionCommand::Habits => {
            let habits = store.habits()?;
            if habits.is_empty() {
                info("No habits logged yet.");
            } else {
                println!("All");
                for h in habits {
                    println!("{h}");
                }
            }
        }

        SessionCommand::Export {
            format,
            file,
            chart,
            force,
            view,
        } => {
            let query = resolve_view(&view, cfg)?;
            ExportLogic::export(store, &query, format, &file, chart, force, input)?;
        }

        SessionCommand::Feedback(view) => {
            let query = resolve_view(&view, cfg)?;
            let mut sink = TerminalSink::new(io::stdout());
            FeedbackLogic::run(
                store,
                &query,
                || {
                    let provider = GeminiProvider::from_config(&cfg.gemini)?;
                    Ok(Box::new(provider) as Box<dyn FeedbackProvider>)
                },
                &mut sink,
            )?;
        }

        SessionCommand::Info => {
            print_store_info(store, &cfg.database)?;
        }

        SessionCommand::Clear { yes } => {
            if !yes
                && !ask_confirmation(input, "Delete ALL entries? This action is irreversible.")
            {
                info("Operation cancelled.");
                return Ok(Flow::Continue);
            }
            ClearLogic::apply(store)?;
        }

        SessionCommand::Exit => return Ok(Flow::Exit),
    }

    Ok(Flow::Continue)
}

/// Turn the habit/window/since arguments into a view predicate anchored on today.
pub fn resolve_view(view: &ViewArgs, cfg: &Config) -> AppResult<ViewQuery> {
    let today = date::today();
    let habit = HabitFilter::parse(&view.habit);

    if let Some(since) = &view.since {
        let since = date::parse_date_arg(since)?;
        if since > today {
            warning(format!("--since {since} is in the future, the view will be empty."));
        }
        return Ok(ViewQuery::since(habit, since, today));
    }

    let window = view.window.unwrap_or(cfg.default_window);
    Ok(ViewQuery::from_window(habit, window, today))
}

fn command_name(command: &SessionCommand) -> &'static str {
    match command {
        SessionCommand::Add { .. } => "add",
        SessionCommand::List(_) => "list",
        SessionCommand::Summary(_) => "summary",
        SessionCommand::Chart(_) => "chart",
        SessionCommand::Habits => "habits",
        SessionCommand::Export { .. } => "export",
        SessionCommand::Feedback(_) => "feedback",
        SessionCommand::Info => "info",
        SessionCommand::Clear { .. } => "clear",
        SessionCommand::Exit => "exit",
    }
}
