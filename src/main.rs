mod app;
mod calculator;
mod cli;
mod ui;

use anyhow::Result;
use app::{action_for_key, update, Flow, FormState};
use clap::Parser;
use cli::Args;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::{
    fs::File,
    io::{self, Write},
};

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args);

    if args.is_one_shot() {
        log::info!("Running once without the form");
        return print_quotes(&args, &mut io::stdout().lock());
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    log::info!("Starting interactive form");
    let res = run_app(&mut terminal, FormState::default());

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("Event loop failed: {:?}", err);
        println!("{:?}", err)
    }

    log::info!("Exiting");
    Ok(())
}

fn init_logging(args: &Args) {
    let Some(path) = &args.log_file else {
        return;
    };
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    match File::create(path) {
        Ok(log_file) => {
            let _ = WriteLogger::init(level, log_config, log_file);
        }
        Err(e) => eprintln!("Could not open log file {}: {}", path.display(), e),
    }
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut state: FormState) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &state))?;

        if let Event::Key(key) = event::read()? {
            let Some(action) = action_for_key(key) else {
                continue;
            };
            if update(&mut state, action) == Flow::Quit {
                return Ok(());
            }
        }
    }
}

fn print_quotes(args: &Args, out: &mut impl Write) -> Result<()> {
    let budget = args.budget.as_deref().unwrap_or_default();
    let down_payment = args.down_payment.as_deref().unwrap_or_default();
    let rate = args.rate.as_deref().unwrap_or_default();

    if args.json {
        let quotes = calculator::quote_table(budget, down_payment, rate);
        serde_json::to_writer_pretty(&mut *out, &quotes)?;
        writeln!(out)?;
        return Ok(());
    }

    write!(out, "{}", ui::RESULTS_HEADER)?;
    for line in calculator::calculate(budget, down_payment, rate) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_once(argv: &[&str]) -> String {
        let args = Args::try_parse_from(argv).unwrap();
        let mut out = Vec::new();
        print_quotes(&args, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_print_table() {
        let out = run_once(&[
            "homebuyer-estimate",
            "--budget",
            "500000",
            "--down-payment",
            "20",
            "--rate",
            "6",
        ]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "Estimated Monthly Payments:");
        assert_eq!(lines[5], "6.000% | $2398.20 + fees");
    }

    #[test]
    fn test_missing_fields_print_invalid_input() {
        let out = run_once(&["homebuyer-estimate", "--rate", "6"]);
        assert_eq!(out.matches("Invalid input").count(), 5);
    }

    #[test]
    fn test_print_json() {
        let out = run_once(&[
            "homebuyer-estimate",
            "--budget",
            "500000",
            "--down-payment",
            "20",
            "--rate",
            "0.1",
            "--json",
        ]);
        let quotes: serde_json::Value = serde_json::from_str(&out).unwrap();
        let quotes = quotes.as_array().unwrap();
        assert_eq!(quotes.len(), 5);
        assert_eq!(quotes[0]["valid"], false);
        assert_eq!(quotes[4]["valid"], true);
    }

    #[test]
    fn test_print_json_invalid_input_is_null() {
        let out = run_once(&["homebuyer-estimate", "--budget", "abc", "--json"]);
        assert_eq!(out.trim(), "null");
    }
}
