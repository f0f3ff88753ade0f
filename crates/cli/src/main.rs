use std::process::ExitCode;

use clap::Parser;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use calc_lib::prelude::*;

const PROMPT: &str = "calc> ";

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Expression to parse; multiple arguments are joined with single spaces
    expr: Vec<String>,

    /// Read, print and evaluate expressions interactively instead
    #[arg(short, long)]
    interactive: bool,
}

/// One-shot mode: echo the input, print the parsed tree, and map the
/// outcome to an exit code. Only the printer runs here; evaluation is
/// the interactive mode's business.
fn run_once(input: &str) -> ExitCode {
    println!("input: '{input}'");

    match parse(input) {
        ParseOutcome::Complete(expr) => {
            println!("output:");
            print!("{}", TreeView::new(&expr));
            ExitCode::SUCCESS
        }
        ParseOutcome::Trailing(_, _) => {
            eprintln!("not all input consumed.");
            ExitCode::FAILURE
        }
        ParseOutcome::Failed(errs) => {
            report_errors("args", input, &errs);
            eprintln!("parsing failed.");
            ExitCode::FAILURE
        }
    }
}

fn process_line(input: &str) {
    match parse(input) {
        ParseOutcome::Complete(expr) => {
            print!("{}", TreeView::new(&expr));
            match evaluate(&expr) {
                Ok(leaf) => println!("= {leaf}"),
                Err(err) => eprintln!("evaluation failed: {}", err.msg),
            }
        }
        ParseOutcome::Trailing(_, rest) => {
            eprintln!("not all input consumed (unparsed input starts at offset {rest}).");
        }
        ParseOutcome::Failed(errs) => {
            report_errors("repl", input, &errs);
            eprintln!("parsing failed.");
        }
    }
}

fn repl() -> rustyline::Result<()> {
    let mut rl = DefaultEditor::new()?;
    #[cfg(feature = "with-file-history")]
    if rl.load_history(".calc_history").is_err() {
        println!("No previous history.");
    }

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                rl.add_history_entry(line.as_str())?;
                process_line(&line);
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("Error: {err:?}");
                break;
            }
        }
    }

    #[cfg(feature = "with-file-history")]
    if let Err(err) = rl.save_history(".calc_history") {
        eprintln!("Failed to save history file:");
        eprintln!("{err}");
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.interactive {
        match repl() {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{err}");
                ExitCode::FAILURE
            }
        }
    } else {
        run_once(&cli.expr.join(" "))
    }
}
