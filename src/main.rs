//! # Nestlight - Bracket Nesting Highlighter
//!
//! Shows how the brackets around one or more cursors would be painted.
//!
//! ## Quick Start
//!
//! ```bash
//! # Highlight around offset 42
//! cargo run -- path/to/file.lisp --cursor 42
//!
//! # Two cursors given as LINE:COL, JSON output
//! cargo run -- path/to/file.lisp -c 3:7 -c 10:1 --json
//!
//! # Write the default settings file
//! cargo run -- --init-config
//! ```

use anyhow::Context;
use clap::Parser;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nestlight_buffer::{BufferError, LexicalRules, Position, TextBuffer};
use nestlight_core::{Highlighter, RenderPlan, Settings};

/// A cursor given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CursorArg {
    /// Character offset from the start of the file
    Offset(usize),
    /// 1-indexed `LINE:COL`
    Position(Position),
}

impl FromStr for CursorArg {
    type Err = BufferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains(':') {
            return s.parse().map(CursorArg::Position);
        }
        s.trim()
            .parse()
            .map(CursorArg::Offset)
            .map_err(|_| BufferError::InvalidPosition(s.to_string()))
    }
}

/// Nestlight - highlights bracket nesting around cursors
#[derive(Parser, Debug)]
#[command(name = "nestlight")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File to highlight
    #[arg(value_name = "FILE", required_unless_present = "init_config")]
    file: Option<PathBuf>,

    /// Cursor as a character offset or 1-indexed LINE:COL (repeatable)
    #[arg(short, long = "cursor", value_name = "CURSOR")]
    cursors: Vec<CursorArg>,

    /// Settings file (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Syntax name used for overrides and comment/string detection
    #[arg(short, long, value_name = "NAME")]
    syntax: Option<String>,

    /// Characters scanned on each side of a cursor
    #[arg(short, long, value_name = "N")]
    radius: Option<usize>,

    /// Print the render plan as JSON
    #[arg(long)]
    json: bool,

    /// Write the default settings file and exit
    #[arg(long)]
    init_config: bool,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Guesses a syntax name from a file extension.
fn syntax_for_path(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?;
    let syntax = match extension {
        "lisp" | "lsp" | "cl" => "lisp",
        "el" => "elisp",
        "scm" | "ss" => "scheme",
        "rkt" => "racket",
        "clj" | "cljs" | "cljc" | "edn" => "clojure",
        "rs" => "rust",
        "c" | "h" => "c",
        "cc" | "cpp" | "hpp" => "cpp",
        "java" => "java",
        "js" | "mjs" => "javascript",
        "go" => "go",
        _ => return None,
    };
    Some(syntax)
}

fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    match path {
        Some(path) => Settings::load_from(path)
            .with_context(|| format!("Failed to load settings from {}", path.display())),
        None => Ok(Settings::load()),
    }
}

fn init_config(path: Option<&Path>) -> anyhow::Result<String> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => Settings::default_path()?,
    };
    Settings::default()
        .save_to(&path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(format!("Wrote default settings to {}\n", path.display()))
}

/// Renders the plan as one line per painted region.
fn format_plan(buffer: &TextBuffer, plan: &RenderPlan) -> anyhow::Result<String> {
    let mut out = String::new();
    for (region, color) in plan.spans() {
        let from = buffer.char_idx_to_position(region.begin)?;
        let to = buffer.char_idx_to_position(region.end)?;
        let text = buffer.slice(region.as_range())?;
        writeln!(
            out,
            "{from}-{to}\t{region}\t{}\t{:?}",
            color.scope_name(),
            text.as_ref()
        )?;
    }
    Ok(out)
}

/// Runs the command and returns what should be printed.
fn run(args: &Args) -> anyhow::Result<String> {
    if args.init_config {
        return init_config(args.config.as_deref());
    }

    let path = args.file.as_deref().context("No file given")?;
    if args.cursors.is_empty() {
        anyhow::bail!("At least one --cursor is required");
    }

    let syntax = args
        .syntax
        .clone()
        .or_else(|| syntax_for_path(path).map(str::to_string));
    tracing::debug!("Syntax: {:?}", syntax);

    let settings = load_settings(args.config.as_deref())?;
    let mut config = settings.resolve(syntax.as_deref())?;
    if let Some(radius) = args.radius {
        config.scan_radius = radius;
    }

    let mut buffer = TextBuffer::from_file(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let rules = syntax
        .as_deref()
        .and_then(LexicalRules::for_syntax)
        .unwrap_or_default();
    buffer.annotate(&rules);

    let cursors = args
        .cursors
        .iter()
        .map(|cursor| match *cursor {
            CursorArg::Offset(offset) => Ok(offset),
            CursorArg::Position(position) => buffer.position_to_char_idx(position),
        })
        .collect::<Result<Vec<_>, _>>()?;

    let plan = Highlighter::new(config).highlight(&buffer, &cursors)?;
    tracing::info!("{} color pair(s) in plan", plan.len());

    if args.json {
        Ok(serde_json::to_string_pretty(&plan)? + "\n")
    } else {
        format_plan(&buffer, &plan)
    }
}

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    let log_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    tracing::info!("Starting Nestlight v{}", env!("CARGO_PKG_VERSION"));

    let output = run(&args)?;
    print!("{output}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing() {
        let args = Args::parse_from(["nestlight", "test.lisp", "-c", "4", "--cursor", "2:3"]);
        assert_eq!(args.file, Some(PathBuf::from("test.lisp")));
        assert_eq!(
            args.cursors,
            vec![
                CursorArg::Offset(4),
                CursorArg::Position(Position::new(1, 2))
            ]
        );
        assert!(!args.json);
    }

    #[test]
    fn test_file_required_without_init_config() {
        assert!(Args::try_parse_from(["nestlight"]).is_err());
        assert!(Args::try_parse_from(["nestlight", "--init-config"]).is_ok());
        assert!(Args::try_parse_from(["nestlight", "a.lisp", "-c", "x"]).is_err());
    }

    proptest::proptest! {
        #[test]
        fn prop_cursor_arg_forms(offset in 0usize..1_000_000, line in 1usize..1000, col in 1usize..200) {
            proptest::prop_assert_eq!(
                offset.to_string().parse::<CursorArg>().unwrap(),
                CursorArg::Offset(offset)
            );
            proptest::prop_assert_eq!(
                format!("{line}:{col}").parse::<CursorArg>().unwrap(),
                CursorArg::Position(Position::new(line - 1, col - 1))
            );
        }
    }

    #[test]
    fn test_syntax_for_path() {
        assert_eq!(syntax_for_path(Path::new("a/b.scm")), Some("scheme"));
        assert_eq!(syntax_for_path(Path::new("main.rs")), Some("rust"));
        assert_eq!(syntax_for_path(Path::new("README")), None);
    }

    #[test]
    fn test_run_text_output() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("sample.lisp");
        std::fs::write(&file, "(a (b) c)").unwrap();
        let config = dir.path().join("config.toml");
        std::fs::write(&config, "[secondary]\nmode = \"none\"\n").unwrap();

        let args = Args::parse_from([
            "nestlight",
            file.to_str().unwrap(),
            "-c",
            "5",
            "--config",
            config.to_str().unwrap(),
        ]);
        let output = run(&args).unwrap();

        assert_eq!(output, "1:4-1:7\t[3, 6)\tnestlight.FFD700.3A3520\t\"(b)\"\n");
    }

    #[test]
    fn test_run_json_output() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("sample.lisp");
        std::fs::write(&file, "(x) ; (\n").unwrap();
        let config = dir.path().join("config.toml");
        std::fs::write(&config, "").unwrap();

        let args = Args::parse_from([
            "nestlight",
            file.to_str().unwrap(),
            "-c",
            "1:2",
            "--config",
            config.to_str().unwrap(),
            "--json",
        ]);
        let output = run(&args).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();

        let entries = json["entries"].as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["color"]["foreground"], "#FFD700");
        assert_eq!(entries[0]["regions"][0]["begin"], 0);
        assert_eq!(entries[0]["regions"][0]["end"], 3);
    }

    #[test]
    fn test_init_config_writes_loadable_settings() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("nestlight.toml");

        let args = Args::parse_from([
            "nestlight",
            "--init-config",
            "--config",
            config.to_str().unwrap(),
        ]);
        run(&args).unwrap();

        let settings = Settings::load_from(&config).unwrap();
        assert!(settings.resolve(None).is_ok());
    }
}
