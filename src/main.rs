use std::io::{self, BufRead};

use clap::Parser;
use simplelog::LevelFilter;

use goolean::repl;

#[derive(Debug, Parser)]
#[command(author, version, about = "goolean - a simple CLI to solve boolean algebra")]
struct Cli {
    /// Expressions to evaluate. Without any, lines are read from stdin.
    #[arg(value_name = "EXPRESSION")]
    expressions: Vec<String>,

    /// Prompt printed before each line is read.
    #[arg(long, value_name = "STR", default_value = repl::PROMPT)]
    prompt: String,

    /// Log level (off, error, warn, info, debug, trace).
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        args.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;
    log::debug!("args = {:?}", args);

    let mut stdout = io::stdout().lock();
    if args.expressions.is_empty() {
        repl::run(io::stdin().lock().lines(), &mut stdout, &args.prompt)?;
    } else {
        repl::process_all(&args.expressions, &mut stdout)?;
    }

    Ok(())
}
