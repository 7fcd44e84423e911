// IEP Scheduler - terminal dashboard
// Prints the scheduling views for a roster, optionally exporting them as iCalendar

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, bail, Context, Result};
use chrono::{Local, NaiveDate};
use log::{error, info};

use iep_scheduler::utils::logging::{init_logging, log_error_with_context};
use iep_scheduler::{config, export, ui, CalendarMonth, Roster, SchedulingMessage, SchedulingState};

const USAGE: &str = "\
Usage: iep-scheduler [OPTIONS]

Options:
  --today YYYY-MM-DD   Reference date (default: local today)
  --month YYYY-MM      Month to display (default: month of --today)
  --roster FILE        JSON roster of students and manual events (default: demo caseload)
  --ics FILE           Also write all events to an iCalendar file
  --json               Print the views as JSON instead of text
  -h, --help           Show this help";

#[derive(Debug, Default)]
struct CliArgs {
    today: Option<NaiveDate>,
    month: Option<CalendarMonth>,
    roster: Option<PathBuf>,
    ics: Option<PathBuf>,
    json: bool,
    help: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliArgs> {
    let mut parsed = CliArgs::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let mut value = |flag: &str| {
            args.next()
                .ok_or_else(|| anyhow!("missing value for {}", flag))
        };

        match arg.as_str() {
            "--today" => {
                let raw = value("--today")?;
                let date = NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                    .with_context(|| format!("invalid --today '{}'", raw))?;
                parsed.today = Some(date);
            }
            "--month" => {
                let raw = value("--month")?;
                let month = raw
                    .parse::<CalendarMonth>()
                    .map_err(|e| anyhow!(e.to_string()))?;
                parsed.month = Some(month);
            }
            "--roster" => parsed.roster = Some(PathBuf::from(value("--roster")?)),
            "--ics" => parsed.ics = Some(PathBuf::from(value("--ics")?)),
            "--json" => parsed.json = true,
            "-h" | "--help" => parsed.help = true,
            other => bail!("unknown argument '{}'", other),
        }
    }

    Ok(parsed)
}

fn run(args: CliArgs) -> Result<()> {
    let settings = config::load_settings().map_err(|e| anyhow!(e.to_safe_string()))?;

    let roster = match &args.roster {
        Some(path) => Roster::load(path)
            .map_err(|e| anyhow!(e.to_safe_string()))
            .with_context(|| format!("failed to load roster {}", path.display()))?,
        None => {
            info!("No roster given, using demo caseload");
            Roster::demo()
        }
    };

    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let mut state = SchedulingState::new(today, roster, settings);
    if let Some(month) = args.month {
        state = state
            .update(SchedulingMessage::JumpToMonth(month))
            .map_err(|e| anyhow!(e.to_safe_string()))?;
    }

    let events = state.events();
    let views = state.views(&events);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&views)?);
    } else {
        print!(
            "{}",
            ui::calendar::render_dashboard(&views, state.settings.max_events_per_day)
        );
    }

    if let Some(path) = &args.ics {
        fs::write(path, export::to_ics(&events))
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("Wrote {} events to {}", events.len(), path.display());
    }

    Ok(())
}

fn main() -> ExitCode {
    if let Err(e) = init_logging() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let args = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            error!("{}", e);
            eprintln!("{}\n\n{}", e, USAGE);
            return ExitCode::from(2);
        }
    };

    if args.help {
        println!("{}", USAGE);
        return ExitCode::SUCCESS;
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log_error_with_context(&e, "iep-scheduler");
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
