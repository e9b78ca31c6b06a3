//! Interactive lot editor.
//!
//! Each line is one command against a single calculator session. Lot
//! numbers are 1-based, matching the "Purchase N" labels.

use anyhow::{bail, Context, Result};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use share_average_core::models::lot::LotField;
use share_average_core::models::settings::Settings;
use share_average_core::ShareAverageCalculator;

use crate::render;

const HELP: &str = "\
Commands:
  add                        add an empty purchase
  set <n> <price|quantity> [value]
                             set (or clear) a field of purchase n
  lot <n> <price> <quantity> set both fields of purchase n
  remove <n>                 remove purchase n (1 and 2 cannot be removed)
  calc                       calculate totals and chart data
  show                       list purchases and the last results
  chart                      show chart data from the last calculation
  reset                      start over with two empty purchases
  load <file>                replace purchases with a JSON snapshot
  export                     print purchases as a JSON snapshot
  help                       show this help
  quit                       leave the shell";

/// What the shell loop should do after a command.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Print the text (if any) and read the next command.
    Continue(String),
    /// Leave the shell.
    Exit,
}

/// Run the interactive shell until `quit` or end of input.
pub fn run(settings: Settings) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    let mut calc = ShareAverageCalculator::with_settings(settings)?;

    println!("Share average calculator. Type `help` for commands.");
    println!();
    print!("{}", render::render_lots(&calc));

    loop {
        match rl.readline("share-average> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line.trim());

                match execute_line(&mut calc, &line) {
                    Ok(Outcome::Continue(text)) => {
                        if !text.is_empty() {
                            println!("{}", text.trim_end());
                        }
                    }
                    Ok(Outcome::Exit) => break,
                    Err(e) => eprintln!("error: {e:#}"),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("(interrupted)");
            }
            Err(ReadlineError::Eof) => {
                println!("exit");
                break;
            }
            Err(err) => {
                eprintln!("error: {err}");
                break;
            }
        }
    }

    Ok(())
}

/// Apply one command line to the session.
pub fn execute_line(calc: &mut ShareAverageCalculator, line: &str) -> Result<Outcome> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(Outcome::Continue(String::new()));
    };
    let rest: Vec<&str> = words.collect();

    let text = match command.to_lowercase().as_str() {
        "add" => {
            let index = calc.add_purchase();
            format!("Added {}", calc.slot_title(index))
        }
        "set" => {
            let (words, value) = take_words(line, 3);
            let [_, n, field] = words.as_slice() else {
                bail!("usage: set <n> <price|quantity> [value]");
            };
            let field = field.parse::<LotField>()?;
            calc.set_field(lot_index(n)?, field, value)?;
            render::render_lots(calc)
        }
        "lot" => {
            let [n, price, quantity] = rest.as_slice() else {
                bail!("usage: lot <n> <price> <quantity>");
            };
            calc.set_lot(lot_index(n)?, *price, *quantity)?;
            render::render_lots(calc)
        }
        "remove" | "rm" => {
            let [n] = rest.as_slice() else {
                bail!("usage: remove <n>");
            };
            let index = lot_index(n)?;
            if calc.remove_purchase(index) {
                render::render_lots(calc)
            } else if index < 2 {
                String::from("The first two purchases cannot be removed.")
            } else {
                format!("There is no purchase {}.", index + 1)
            }
        }
        "calc" | "calculate" => {
            calc.calculate();
            render::render_report(calc)
        }
        "show" => format!(
            "{}\n{}",
            render::render_lots(calc),
            render::render_summary(calc)
        ),
        "chart" | "charts" => render::render_charts(calc),
        "reset" => {
            calc.reset();
            render::render_lots(calc)
        }
        "load" => {
            let [path] = rest.as_slice() else {
                bail!("usage: load <file>");
            };
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {path}"))?;
            let count = calc.import_ledger_json(&json)?;
            format!("Loaded {count} purchases")
        }
        "export" => calc.export_ledger_json()?,
        "help" | "?" => HELP.to_string(),
        "quit" | "exit" | "q" => return Ok(Outcome::Exit),
        other => bail!("unknown command '{other}' (type `help`)"),
    };

    Ok(Outcome::Continue(text))
}

/// Split off the first `n` words of `line`. The remainder is returned as
/// typed, inner spacing included.
fn take_words(line: &str, n: usize) -> (Vec<&str>, &str) {
    let mut words = Vec::with_capacity(n);
    let mut rest = line.trim_start();
    while words.len() < n && !rest.is_empty() {
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        words.push(&rest[..end]);
        rest = rest[end..].trim_start();
    }
    (words, rest)
}

/// Convert a 1-based purchase number to a ledger index.
fn lot_index(n: &str) -> Result<usize> {
    let number: usize = n
        .parse()
        .with_context(|| format!("'{n}' is not a purchase number"))?;
    if number == 0 {
        bail!("purchase numbers start at 1");
    }
    Ok(number - 1)
}
