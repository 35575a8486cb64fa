use std::io::{self, BufRead, Write};

use tracing::info;

use crate::Session;

/// Printed once when an interactive session starts.
pub const BANNER: &str = "Tiny Language REPL (Variables & Assignment)\nType 'exit' or 'quit' to end.";
/// Default prompt printed before every line.
pub const DEFAULT_PROMPT: &str = "calc> ";

/// Settings for one run of the loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    /// Text written before each line is read. An empty prompt writes nothing.
    pub prompt: String,
    /// Whether to write [`BANNER`] before the first prompt.
    pub banner: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self { prompt: DEFAULT_PROMPT.to_string(),
               banner: true, }
    }
}

impl ReplConfig {
    /// Configuration for non-interactive input: no banner, no prompt.
    #[must_use]
    pub const fn quiet() -> Self {
        Self { prompt: String::new(),
               banner: false, }
    }
}

/// Counts gathered over one run of the loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplStats {
    /// Non-blank lines passed to the session.
    pub evaluated: usize,
    /// Lines that ended in an error.
    pub errors:    usize,
}

/// Returns `true` if `line` asks to end the session.
///
/// `exit` and `quit` are recognised in any letter case, ignoring surrounding
/// whitespace. Anywhere else they are ordinary identifiers.
///
/// # Example
/// ```
/// use calcrepl::repl::is_exit_command;
///
/// assert!(is_exit_command("exit"));
/// assert!(is_exit_command("  QUIT\n"));
/// assert!(!is_exit_command("exit = 1"));
/// ```
#[must_use]
pub fn is_exit_command(line: &str) -> bool {
    let line = line.trim();
    line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit")
}

/// Runs the read-eval-print loop until `exit`, `quit` or end of input.
///
/// Each non-blank line is handed to `session`. Expression results are written
/// on their own line, assignments write nothing, and failures are written as
/// `Error: <error>` before the loop carries on with the next line.
///
/// # Errors
/// Only I/O errors from `input` or `output` stop the loop early.
///
/// # Example
/// ```
/// use calcrepl::{
///     Session,
///     repl::{ReplConfig, run},
/// };
///
/// let input = "x = 10 + 5\nx * 2\n10 / 0\nexit\n";
/// let mut output = Vec::new();
/// let stats = run(&ReplConfig::quiet(), &mut Session::new(), input.as_bytes(), &mut output)
///     .unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(),
///            "30\nError: Runtime error: Division by zero\n");
/// assert_eq!(stats.errors, 1);
/// ```
pub fn run<R, W>(config: &ReplConfig,
                 session: &mut Session,
                 mut input: R,
                 output: &mut W)
                 -> io::Result<ReplStats>
    where R: BufRead,
          W: Write
{
    let mut stats = ReplStats::default();
    let mut line = String::new();

    if config.banner {
        writeln!(output, "{BANNER}")?;
    }
    info!("session started");

    loop {
        if !config.prompt.is_empty() {
            write!(output, "{}", config.prompt)?;
            output.flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            if !config.prompt.is_empty() {
                writeln!(output)?;
            }
            break;
        }

        if is_exit_command(&line) {
            break;
        }
        let source = line.trim_end_matches(['\n', '\r']);
        if source.trim().is_empty() {
            continue;
        }

        report(session, source, output, &mut stats)?;
    }

    info!(evaluated = stats.evaluated,
          errors = stats.errors,
          variables = session.symbols().len(),
          "session ended");
    Ok(stats)
}

/// Evaluates each entry of `lines` as one complete line, in order, in one
/// session.
///
/// Unlike [`run`], entries are never split or filtered: `exit` is an ordinary
/// identifier here, and an entry containing a newline is still a single line.
/// Output is written exactly as [`run`] writes it.
///
/// # Errors
/// Only I/O errors from `output` stop early.
///
/// # Example
/// ```
/// use calcrepl::{Session, repl::run_each};
///
/// let mut output = Vec::new();
/// let stats = run_each(&mut Session::new(), ["x = 4", "x * x"], &mut output).unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(), "16\n");
/// assert_eq!(stats.evaluated, 2);
/// ```
pub fn run_each<'a, I, W>(session: &mut Session, lines: I, output: &mut W) -> io::Result<ReplStats>
    where I: IntoIterator<Item = &'a str>,
          W: Write
{
    let mut stats = ReplStats::default();
    for line in lines {
        report(session, line, output, &mut stats)?;
    }
    Ok(stats)
}

/// Runs one line and writes its value or error.
fn report<W>(session: &mut Session,
             source: &str,
             output: &mut W,
             stats: &mut ReplStats)
             -> io::Result<()>
    where W: Write
{
    stats.evaluated += 1;
    match session.run_line(source) {
        Ok(Some(value)) => writeln!(output, "{value}")?,
        Ok(None) => {},
        Err(e) => {
            stats.errors += 1;
            writeln!(output, "Error: {e}")?;
        },
    }
    output.flush()
}
