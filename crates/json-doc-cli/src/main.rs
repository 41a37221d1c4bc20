//! json-compact: validates a JSON document and prints it in compact form.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use json_doc::{Limits, LoadError, ParseError, DEFAULT_MAX_DEPTH};

#[derive(Parser)]
#[command(name = "json-compact")]
#[command(about = "Parse a JSON document and print it without whitespace", long_about = None)]
#[command(version)]
struct Cli {
    /// File to read; standard input when omitted
    path: Option<PathBuf>,

    /// Maximum nesting of arrays and objects
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Reject inputs larger than this many bytes
    #[arg(long)]
    max_input_size: Option<usize>,

    /// Only validate; print nothing on success
    #[arg(long)]
    check: bool,

    /// Show the text of the line where parsing stopped
    #[arg(long)]
    debug: bool,
}

impl Cli {
    fn limits(&self) -> Limits {
        let limits = Limits::default().with_max_depth(self.max_depth);
        match self.max_input_size {
            Some(size) => limits.with_max_input_size(size),
            None => limits,
        }
    }
}

fn report_parse_error(source: &str, err: &ParseError, debug: bool) {
    eprintln!("{source}: {err}");
    if debug {
        eprintln!("Last parsed line({}): {}", err.position().line, err.context());
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let limits = cli.limits();

    let (source, result) = match &cli.path {
        Some(path) => (path.display().to_string(), json_doc::parse_file_with(path, limits)),
        None => ("<stdin>".to_owned(), json_doc::parse_reader(io::stdin().lock(), limits)),
    };

    let doc = match result {
        Ok(doc) => doc,
        Err(LoadError::Parse(err)) => {
            report_parse_error(&source, &err, cli.debug);
            return ExitCode::from(1);
        }
        Err(err @ LoadError::Io { .. }) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
    };

    if cli.check {
        return ExitCode::SUCCESS;
    }

    let mut out = io::stdout().lock();
    if let Err(err) = writeln!(out, "{doc}") {
        eprintln!("failed to write output: {err}");
        return ExitCode::from(2);
    }
    ExitCode::SUCCESS
}
