use clap::ValueEnum;
use colored::*;
use gazetag::GazetagError;
use gazetag::pipeline::TaggedSentence;
use gazetag::span::Span;
use serde::Serialize;
use serde_json::json;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables
    #[default]
    Table,
    /// Machine-readable JSON
    Json,
}

impl OutputFormat {
    pub fn is_json(self) -> bool {
        self == OutputFormat::Json
    }
}

pub struct CliColors;

impl CliColors {
    pub fn error() -> Color {
        Color::TrueColor {
            r: 239,
            g: 68,
            b: 68,
        }
    }

    pub fn warning() -> Color {
        Color::TrueColor {
            r: 245,
            g: 158,
            b: 11,
        }
    }

    pub fn info() -> Color {
        Color::TrueColor {
            r: 59,
            g: 130,
            b: 246,
        }
    }

    pub fn label() -> Color {
        Color::TrueColor {
            r: 168,
            g: 85,
            b: 247,
        }
    }

    pub fn muted() -> Color {
        Color::TrueColor {
            r: 148,
            g: 163,
            b: 184,
        }
    }

    pub fn primary() -> Color {
        Color::White
    }

    pub fn accent() -> Color {
        Color::TrueColor {
            r: 59,
            g: 130,
            b: 246,
        }
    }
}

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    );
}

/// Output a GazetagError in structured JSON format
pub fn output_error_json(error: &GazetagError, output_format: OutputFormat) {
    if output_format.is_json() {
        let (code, message, details) = match error {
            GazetagError::InvalidInput(msg) => ("INVALID_INPUT", msg.clone(), None),
            GazetagError::Gazetteer(msg) => ("GAZETTEER_ERROR", msg.clone(), None),
            GazetagError::Io { path, source } => (
                "IO_ERROR",
                source.to_string(),
                Some(json!({
                    "path": path
                })),
            ),
            GazetagError::Configuration(msg) => ("CONFIGURATION_ERROR", msg.clone(), None),
            GazetagError::Logging(e) => ("LOGGING_ERROR", e.to_string(), None),
            GazetagError::Other(msg) => ("OTHER_ERROR", msg.clone(), None),
        };

        let mut error_response = json!({
            "error": true,
            "code": code,
            "message": message,
            "timestamp": chrono::Utc::now().to_rfc3339()
        });

        if let Some(details) = details {
            error_response["details"] = details;
        }

        eprintln!(
            "{}",
            serde_json::to_string_pretty(&error_response).unwrap_or_else(|_| "{}".to_string())
        );
    } else {
        eprintln!("{}", format_error(&error.to_string()));
    }
}

pub fn format_error(msg: &str) -> String {
    format!(
        "{} {}",
        "✗".color(CliColors::error()).bold(),
        msg.color(CliColors::error())
    )
}

pub fn format_warning(msg: &str) -> String {
    format!(
        "{} {}",
        "⚠".color(CliColors::warning()).bold(),
        msg.color(CliColors::warning())
    )
}

pub fn format_info(msg: &str) -> String {
    format!(
        "{} {}",
        "ℹ".color(CliColors::info()).bold(),
        msg.color(CliColors::info())
    )
}

/// Color a BILOU tag: outside tags muted, span boundaries bold.
pub fn format_tag(tag: &str) -> ColoredString {
    match tag.split_once('-') {
        None => tag.color(CliColors::muted()),
        Some(("B" | "U", _)) => tag.color(CliColors::label()).bold(),
        Some(_) => tag.color(CliColors::label()),
    }
}

fn format_labels(span: &Span) -> String {
    span.labels
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn print_tagged_sentence(sentence: &TaggedSentence) {
    if sentence.is_empty() {
        println!("{}", format_info("No tokens to tag."));
        return;
    }

    let width = sentence
        .tokens
        .iter()
        .map(|token| token.chars().count())
        .max()
        .unwrap_or(0)
        .max("Token".len());

    println!(
        "{}  {}",
        format!("{:<width$}", "Token").color(CliColors::muted()).bold(),
        "Tag".color(CliColors::muted()).bold()
    );
    for (token, tag) in sentence.pairs() {
        println!(
            "{}  {}",
            format!("{:<width$}", token).color(CliColors::primary()),
            format_tag(tag)
        );
    }

    println!();
    println!(
        "{}: {} of {} candidate{} kept",
        "Spans".color(CliColors::muted()),
        sentence.spans.len().to_string().color(CliColors::accent()).bold(),
        sentence.candidates.len(),
        if sentence.candidates.len() == 1 { "" } else { "s" }
    );
    for span in &sentence.spans {
        print_span(span);
    }
}

fn print_span(span: &Span) {
    println!(
        "  {} {} {}",
        format!("[{}, {})", span.start, span.end).color(CliColors::muted()),
        span.text.color(CliColors::primary()).bold(),
        format!("{{{}}}", format_labels(span)).color(CliColors::label())
    );
}

pub fn print_span_list(spans: &[Span], title: &str) {
    if spans.is_empty() {
        println!("{}", format_info(&format!("No {} found.", title)));
        return;
    }

    println!(
        "{} ({})",
        title.color(CliColors::accent()).bold(),
        spans.len()
    );
    for span in spans {
        print_span(span);
    }
}

pub fn print_labels(labels: &[&str], entries: usize) {
    if labels.is_empty() {
        println!("{}", format_warning("The gazetteer has no entries."));
        return;
    }

    println!(
        "{} ({} entries)",
        "Labels".color(CliColors::accent()).bold(),
        entries
    );
    for label in labels {
        println!("  {}", label.color(CliColors::label()));
    }
}
