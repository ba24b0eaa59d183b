//! # Gherkin token dump
//!
//! Tokenizes feature files and prints the tokens, their JSON form, or editor
//! markers for any diagnostics.

use clap::{Parser, ValueEnum};
use gherkin_lexer::config::{LexicalPreferences, RuntimeConfig};
use gherkin_lexer::file_processor::FileProcessor;
use gherkin_lexer::lexical::tokenize_file_result_with_preferences;
use gherkin_lexer::{format_tokens, log_info, logging, to_editor_markers};
use gherkin_lexer::{ParserError, SourceMap};
use std::error::Error;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "gherkin_tokens")]
#[command(version, about = "Tokenize Gherkin feature files")]
struct Args {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Tokens)]
    format: OutputFormat,

    /// Dialect active before any `# language:` directive
    #[arg(long)]
    language: Option<String>,

    /// TOML file with runtime preferences
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit log events as JSON lines on stderr
    #[arg(long)]
    structured_logs: bool,

    /// Feature files to tokenize
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// `(line:column)Type:keyword/text/items`, one token per line
    Tokens,
    /// Token list as JSON
    Json,
    /// Editor markers as JSON
    Markers,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => RuntimeConfig::load(path)?,
        None => RuntimeConfig::default(),
    };
    if let Some(language) = &args.language {
        config.lexical.default_dialect = language.clone();
    }
    if args.structured_logs {
        config.logging.use_structured_logging = true;
    }

    logging::config::init_runtime_preferences(config.logging.clone())?;
    logging::init_global_logging()?;
    log_info!("Gherkin tokenizer starting", "files" => args.files.len());

    let processor = FileProcessor::from_preferences(&config.file_processor);
    let show_headers = args.files.len() > 1 && args.format == OutputFormat::Tokens;
    let mut failed = 0;

    for (index, path) in args.files.iter().enumerate() {
        if show_headers {
            println!("==> {} <==", path.display());
        }

        let succeeded = logging::with_document_context(path.clone(), index + 1, || {
            tokenize_document(path, &processor, &config.lexical, args.format)
        })?;
        if !succeeded {
            failed += 1;
        }
    }

    if let Some(summary) = logging::cargo_style_summary() {
        eprintln!("{}", summary);
    }

    let summary = logging::get_processing_summary();
    log_info!("Gherkin tokenizer finished",
        "documents" => summary.total_documents,
        "failed" => summary.failed_documents,
        "errors" => summary.total_errors);

    if failed > 0 {
        std::process::exit(1);
    }

    Ok(())
}

/// Tokenize one document and print it. `Ok(false)` means the document had
/// problems that were reported.
fn tokenize_document(
    path: &Path,
    processor: &FileProcessor,
    preferences: &LexicalPreferences,
    format: OutputFormat,
) -> Result<bool, Box<dyn Error>> {
    let Ok(file_result) = processor.process_file(&path.display().to_string()) else {
        return Ok(false);
    };

    match tokenize_file_result_with_preferences(&file_result, preferences.clone()) {
        Ok(tokens) => {
            match format {
                OutputFormat::Tokens => println!("{}", format_tokens(&tokens)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&tokens)?),
                OutputFormat::Markers => println!("[]"),
            }
            Ok(true)
        }
        Err(error) => {
            match format {
                OutputFormat::Markers => {
                    println!("{}", serde_json::to_string_pretty(&to_editor_markers(&error))?)
                }
                _ => print_diagnostics(&error, &file_result.source),
            }
            Ok(false)
        }
    }
}

fn print_diagnostics(error: &ParserError, source: &str) {
    let source_map = SourceMap::new(source);

    for diagnostic in error.flatten() {
        match diagnostic.location() {
            Some(location) => eprintln!("{}", source_map.format_error(&location, diagnostic.message())),
            None => eprintln!("{}", diagnostic.message()),
        }
    }
}
