use std::{fs::read_to_string, path::{Path, PathBuf}, process::ExitCode, time::Instant};

use clap::{builder::RangedU64ValueParser, Parser as ClapParser};
use insanelang::{
    emitter::emitter::{Emitter, ListingEmitter},
    errors::errors::{ErrorTip, SyntaxError},
    get_line_at_position,
    lexer::lexer::{Lexer, LexicalWarning},
    parser::parser::{parse_with_config, ParserConfig},
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Deepest nesting `--max-depth` may ask for on the main thread's stack.
const MAX_DEPTH_CEILING: u64 = 1024;

/// Tokenizes and parses an InsaneLang source file.
#[derive(ClapParser, Debug)]
#[command(version, about)]
struct Cli {
    /// Path to the source file
    source: PathBuf,

    /// Print every token before parsing
    #[arg(long)]
    tokens: bool,

    /// Print the emitter listing of the parsed module
    #[arg(long)]
    emit: bool,

    /// Deepest expression nesting the parser accepts
    #[arg(
        long,
        default_value_t = ParserConfig::default().max_depth,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_DEPTH_CEILING)
    )]
    max_depth: usize,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let file_contents = match read_to_string(&cli.source) {
        Ok(contents) => contents,
        Err(error) => {
            eprintln!("Failed to open file {}: {}", cli.source.display(), error);
            return ExitCode::FAILURE;
        }
    };

    let module_name = cli
        .source
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    let start = Instant::now();

    let mut lexer = Lexer::new(file_contents.as_str());
    let tokens: Vec<_> = lexer.by_ref().collect();

    info!("Tokenized in {:?}", start.elapsed());

    for warning in lexer.warnings() {
        match warning {
            LexicalWarning::UnterminatedString { position } => {
                eprintln!("Warning: unterminated string literal at {}", position);
            }
        }
    }

    if cli.tokens {
        for token in &tokens {
            println!("{}", token);
        }
    }

    let parse_start = Instant::now();
    let config = ParserConfig {
        max_depth: cli.max_depth,
    };

    let module = match parse_with_config(tokens, &module_name, config) {
        Ok(module) => module,
        Err(error) => {
            display_error(&error, &cli.source, &file_contents);
            return ExitCode::FAILURE;
        }
    };

    info!("Parsed in {:?}", parse_start.elapsed());

    if cli.emit {
        print!("{}", ListingEmitter::new().generate(module));
    } else {
        println!("Parsing completed.");
    }

    ExitCode::SUCCESS
}

fn display_error(error: &SyntaxError, file: &Path, source: &str) {
    /*
        Error: MissingExpectedSymbol (Expected `)` before `{`)
        -> bad.insane
           |
         1 | func bad( { }
           | ----------^
    */

    let position = error.get_position();
    let line_text = get_line_at_position(source, position.line).unwrap_or("");

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {} ({})", error.get_error_name(), error);
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    eprintln!("-> {}:{}", file.display(), position);
    eprintln!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    eprintln!("{} | {}", line_string, line_text_removed.trim_end());

    let arrows = position.column.saturating_sub(removed_whitespace).max(1);

    eprintln!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start_matches([' ', '\t']);
    let removed = string.chars().count() - trimmed.chars().count();

    (trimmed, removed)
}
