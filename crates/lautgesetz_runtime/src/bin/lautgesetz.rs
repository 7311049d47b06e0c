//! Lautgesetz CLI entry point.

use lautgesetz_foundation::{DevoicePolicy, Notation};
use lautgesetz_runtime::{OutputFormat, Repl, Session, logging};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

/// CLI configuration parsed from arguments.
#[derive(Debug, Default)]
struct CliConfig {
    words: Vec<String>,
    notation: Option<Notation>,
    inventory_dir: Option<PathBuf>,
    show_help: bool,
    show_version: bool,
    interactive: bool,
    keep_aspiration: bool,
    analyze: bool,
    json: bool,
    trace: bool,
    verbose: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();
    let mut args = args.into_iter().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-i" | "--interactive" => config.interactive = true,
            "-a" | "--analyze" => config.analyze = true,
            "-v" | "--verbose" => config.verbose = true,
            "--keep-aspiration" => config.keep_aspiration = true,
            "--json" => config.json = true,
            "--trace" => config.trace = true,
            "-n" | "--notation" => {
                let tag = args.next().ok_or("--notation requires a value")?;
                config.notation = Some(tag.parse()?);
            }
            "-d" | "--inventory-dir" => {
                let dir = args.next().ok_or("--inventory-dir requires a value")?;
                config.inventory_dir = Some(PathBuf::from(dir));
            }
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(format!("unknown option: {flag}").into());
            }
            _ => config.words.push(arg),
        }
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("lautgesetz {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    logging::init(if config.verbose {
        "debug"
    } else {
        logging::DEFAULT_DIRECTIVE
    });

    let mut session = build_session(&config)?;

    for word in &config.words {
        println!("{}", session.run(word)?);
    }

    if config.interactive || config.words.is_empty() {
        let mut repl = Repl::new(session)?;
        if !config.words.is_empty() {
            repl = repl.without_banner();
        }
        repl.run()?;
    }

    Ok(())
}

fn build_session(config: &CliConfig) -> Result<Session, Box<dyn std::error::Error>> {
    let session = match &config.inventory_dir {
        Some(dir) => Session::from_dir(dir)?,
        None => Session::new()?,
    };

    let mut derivation = *session.config();
    if let Some(notation) = config.notation {
        derivation = derivation.with_ancestor(notation);
    }
    if config.keep_aspiration {
        derivation = derivation.with_devoice_policy(DevoicePolicy::KeepAspiration);
    }

    let format = if config.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    Ok(session
        .with_config(derivation)
        .with_format(format)
        .with_analysis(config.analyze)
        .with_trace(config.trace))
}

fn print_help() {
    println!(
        "\x1b[1mLautgesetz\x1b[0m - Proto-Indo-European to Proto-Balto-Slavic sound laws

\x1b[1mUSAGE:\x1b[0m
    lautgesetz [OPTIONS] [WORDS...]

\x1b[1mARGUMENTS:\x1b[0m
    [WORDS...]    Words to derive; with none, start the REPL

\x1b[1mOPTIONS:\x1b[0m
    -h, --help               Print help information
    -V, --version            Print version information
    -i, --interactive        Start the REPL after deriving WORDS
    -n, --notation TAG       Notation of the input (default: PIE)
    -d, --inventory-dir DIR  Load TAG.graphemes files from DIR
    -a, --analyze            Print graphemes, phonemes and syllabicity first
        --keep-aspiration    Devoice gʰ to a voiceless aspirate, not k
        --json               Print derivations as JSON
    -v, --verbose            Log at debug level (LAUTGESETZ_LOG overrides)

\x1b[1mDEBUG OPTIONS:\x1b[0m
    --trace                  Echo derivation trace records to stderr

\x1b[1mEXAMPLES:\x1b[0m
    lautgesetz                        Start interactive REPL
    lautgesetz dʰugh₂tḗr              Derive one word
    lautgesetz -a nókʷts              Show the parse, then derive
    lautgesetz --json weks sed        Derive two words as JSON

\x1b[1mREPL COMMANDS:\x1b[0m
    :analyze WORD        Show graphemes, phonemes and syllabicity
    :trace on|off        Echo trace records to stderr
    :trace last N        Show recent trace records
    :trace only TYPE...  Record only these trace events
    :json on|off         Switch output format
    :notation TAG        Change the input notation
    :aspiration keep|drop
    :laws                List the laws in order
    Ctrl+D               Exit REPL"
    );
}
