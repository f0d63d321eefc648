use logtint_parser::PipeHeaderParser;
use logtint_pipeline::{HighlightMode, LineProcessor, PipelineDesc, driver};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::env;
use std::io::{self, BufWriter};
use std::process;
use std::sync::Arc;

fn print_usage() {
    eprintln!("Usage: logtint [OPTIONS]");
    eprintln!();
    eprintln!("Reads structured log lines on stdin and reprints them on stdout,");
    eprintln!("colorized by severity. Metric sample lines are dropped; lines");
    eprintln!("without a recognizable header pass through unchanged.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --highlight <words>        Comma-separated list of words to highlight");
    eprintln!("  --highlight-mode <and|or>  Highlight mode (default: or)");
    eprintln!("  --intoCurrentTimezone      Convert header timestamps from UTC to local time");
    eprintln!("  --help, -h                 Print this help message");
}

struct CliOptions {
    highlights: Vec<String>,
    mode: HighlightMode,
    into_local_time: bool,
    help: bool,
}

impl CliOptions {
    fn from_args(args: &[String]) -> Result<Self, io::Error> {
        let mut options = Self {
            highlights: Vec::new(),
            mode: HighlightMode::Or,
            into_local_time: false,
            help: false,
        };

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--highlight" => {
                    options.highlights = split_highlight_words(flag_value(&mut iter, arg)?);
                }
                "--highlight-mode" => {
                    options.mode = HighlightMode::from_flag(flag_value(&mut iter, arg)?);
                }
                "--intoCurrentTimezone" => options.into_local_time = true,
                "--help" | "-h" => options.help = true,
                other => {
                    if let Some(value) = other.strip_prefix("--highlight=") {
                        options.highlights = split_highlight_words(value);
                    } else if let Some(value) = other.strip_prefix("--highlight-mode=") {
                        options.mode = HighlightMode::from_flag(value);
                    } else {
                        print_usage();
                        return Err(io::Error::new(
                            io::ErrorKind::InvalidInput,
                            "Unknown option",
                        ));
                    }
                }
            }
        }

        Ok(options)
    }
}

fn flag_value<'a>(iter: &mut std::slice::Iter<'a, String>, flag: &str) -> Result<&'a str, io::Error> {
    match iter.next() {
        Some(value) => Ok(value.as_str()),
        None => {
            print_usage();
            Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Missing value for {flag}"),
            ))
        }
    }
}

// empty fragments from "a,,b" carry no meaning; order and duplicates are kept
fn split_highlight_words(value: &str) -> Vec<String> {
    value
        .split(',')
        .filter(|word| !word.is_empty())
        .map(str::to_owned)
        .collect()
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let options = match CliOptions::from_args(&args) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    if options.help {
        print_usage();
        return;
    }

    // diagnostics go to stderr so the stdout data stream stays clean
    if TermLogger::init(
        LevelFilter::Warn,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .is_err()
    {
        eprintln!("Warning: stderr logger could not be installed");
    }
    if color_eyre::install().is_err() {
        eprintln!("Warning: color_eyre could not be installed");
    }

    let desc = PipelineDesc {
        highlights: options.highlights,
        mode: options.mode,
        into_local_time: options.into_local_time,
    };
    let processor = LineProcessor::new(Arc::new(PipeHeaderParser::new()), desc);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let output = BufWriter::new(stdout.lock());
    if let Err(err) = driver::run(stdin.lock(), output, &processor) {
        eprintln!("Error reading input: {err}");
        process::exit(1);
    }
}
