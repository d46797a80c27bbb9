use std::io::{self, BufRead, Write};

use clap::Parser;
use log::LevelFilter;
use mathtree::{solve_to, OutputMode, SolveOptions};

#[derive(Debug, Parser)]
#[command(
    name = "mathtree",
    version,
    about = "Validate, parse and evaluate arithmetic expressions",
    long_about = "mathtree checks arithmetic expressions for syntax errors, prints the\n\
        parsed tree in fully parenthesised form and evaluates it.\n\n\
        Supported: numbers, ( ), + - * / ^, unary + and -, sqrt, log and log_<base>.\n\n\
        EXAMPLES:\n\
        \n  mathtree '2*(3+4)'             Evaluate one expression\n\
        \n  mathtree --json 'sqrt16'       Show the tree as JSON\n\
        \n  echo '1-3-10' | mathtree       Evaluate each line of stdin"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print the parsed tree as JSON instead of infix text
    #[arg(long)]
    json: bool,

    /// Print the token stream of each expression
    #[arg(long)]
    tokens: bool,

    /// Expressions to evaluate (reads lines from stdin if none are given)
    #[arg(value_name = "EXPRESSION")]
    expressions: Vec<String>,
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .try_init();
}

fn run_cli() -> i32 {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let options = SolveOptions {
        mode: if cli.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        },
        show_tokens: cli.tokens,
    };

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    let expressions: Box<dyn Iterator<Item = io::Result<String>>> = if cli.expressions.is_empty() {
        Box::new(io::stdin().lock().lines())
    } else {
        Box::new(cli.expressions.into_iter().map(Ok))
    };

    let mut rc = 0;
    for line in expressions {
        let text = match line {
            Ok(text) => text,
            Err(e) => {
                let _ = writeln!(err, "error: {e}");
                return 2;
            }
        };
        if text.trim().is_empty() {
            continue;
        }
        match solve_to(&text, options, &mut out, &mut err) {
            Ok(true) => {}
            Ok(false) => rc = 1,
            Err(e) => {
                let _ = writeln!(err, "error: {e}");
                return 2;
            }
        }
        let _ = writeln!(out);
    }
    rc
}

fn main() {
    std::process::exit(run_cli());
}
