use std::{
    fs,
    io::{self, Cursor},
    path::PathBuf,
    process::ExitCode,
};

use calcrepl::{
    Session,
    repl::{DEFAULT_PROMPT, ReplConfig, ReplStats, run, run_each},
};
use clap::Parser;
use tracing::Level;

/// calcrepl evaluates arithmetic with variables, one line at a time.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates this line instead of starting the prompt. May be given more
    /// than once; all lines share one session.
    #[arg(short, long = "eval", value_name = "LINE")]
    eval: Vec<String>,

    /// Runs every line of a script file in one session.
    #[arg(short, long, value_name = "PATH", conflicts_with = "eval")]
    file: Option<PathBuf>,

    /// Prompt printed before each interactive line.
    #[arg(long, default_value = DEFAULT_PROMPT)]
    prompt: String,

    /// Skips the welcome banner.
    #[arg(long)]
    no_banner: bool,

    /// Most verbose level of diagnostics written to stderr.
    #[arg(long, default_value_t = Level::WARN)]
    log_level: Level,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt().with_max_level(args.log_level)
                             .with_target(false)
                             .with_writer(io::stderr)
                             .init();

    let mut session = Session::new();
    let mut stdout = io::stdout().lock();

    let outcome = if let Some(path) = &args.file {
        let script = match fs::read_to_string(path) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", path.display());
                return ExitCode::FAILURE;
            },
        };
        run(&ReplConfig::quiet(), &mut session, Cursor::new(script), &mut stdout)
    } else if !args.eval.is_empty() {
        run_each(&mut session, args.eval.iter().map(String::as_str), &mut stdout)
    } else {
        let config = ReplConfig { prompt: args.prompt,
                                  banner: !args.no_banner, };
        run(&config, &mut session, io::stdin().lock(), &mut stdout).map(|_| ReplStats::default())
    };

    match outcome {
        Ok(stats) if stats.errors > 0 => ExitCode::FAILURE,
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("I/O error: {e}");
            ExitCode::FAILURE
        },
    }
}
