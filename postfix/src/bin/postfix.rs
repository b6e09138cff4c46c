use std::path::PathBuf;

use clap::Parser;
use log::{debug, LevelFilter};

/// Convert infix integer expressions to postfix and evaluate them.
/// Tokens must be separated by blanks, eg: ( 1 + 2 ) * 3
#[derive(Parser, Debug)]
#[command(name = "postfix", version, about)]
struct Args {
    /// Input is already postfix, just evaluate it
    #[arg(long)]
    rpn: bool,

    /// Only print the postfix form of the input
    #[arg(long, conflicts_with = "rpn")]
    convert: bool,

    /// History file for the interactive prompt [default: ~/.postfix_history]
    #[arg(long, value_name = "PATH")]
    history: Option<PathBuf>,

    /// More logging, repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Expression to process, an interactive prompt starts when missing
    expr: Vec<String>,
}

mod repl {
    use postfix::{evaluate_postfix, tokenize, Error, RPNExpr, ShuntingParser};

    #[derive(Clone, Copy, Debug)]
    pub enum Mode {
        Eval,
        Convert,
        Rpn,
    }

    pub fn evalexpr(mode: Mode, input: &str) -> Result<String, Error> {
        match mode {
            Mode::Eval => {
                let rpn = ShuntingParser::parse_str(input)?;
                let result = rpn.eval()?;
                Ok(format!("{} = {}", rpn, result))
            }
            Mode::Convert => Ok(ShuntingParser::parse_str(input)?.to_string()),
            Mode::Rpn => {
                let result = evaluate_postfix(input)?;
                // evaluation succeeded so the tokens form a single tree
                let infix = RPNExpr(tokenize(input))
                    .to_infix()
                    .unwrap_or_else(|| input.trim().to_string());
                Ok(format!("{} = {}", infix, result))
            }
        }
    }
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() -> Result<(), String> {
    let args = Args::parse();
    // RUST_LOG wins over -v
    env_logger::Builder::new()
        .filter_level(log_level(args.verbose))
        .parse_default_env()
        .init();

    let mode = if args.rpn {
        repl::Mode::Rpn
    } else if args.convert {
        repl::Mode::Convert
    } else {
        repl::Mode::Eval
    };

    if !args.expr.is_empty() {
        let input = args.expr.join(" ");
        match repl::evalexpr(mode, &input) {
            Ok(output) => println!("{}", output),
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    use rustyline::error::ReadlineError;
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    let histpath = args
        .history
        .or_else(|| dirs::home_dir().map(|h| h.join(".postfix_history")));
    if let Some(ref path) = histpath {
        if rl.load_history(path).is_err() {
            debug!("No history yet at {}", path.display());
        }
    }
    loop {
        match rl.readline(">> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line.as_str());
                match repl::evalexpr(mode, &line) {
                    Ok(output) => println!("{}", output),
                    Err(e) => println!("{}", e),
                }
            }
        }
    }
    if let Some(ref path) = histpath {
        rl.save_history(path).map_err(|e| e.to_string())?;
    }
    Ok(())
}
