//! CLI command implementations
//!
//! `solve`, `explain` and `batch` run the engine in-process and write to
//! stdout. `serve` loads configuration and hands off to the HTTP adapter.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{log_event_with_fields, Event, Logger, Severity};
use crate::solver::{self, Explanation};

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::{read_requests, write_error, write_json, write_text};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Host, port, CORS and question limit
    #[serde(flatten)]
    pub server: HttpServerConfig,

    /// Minimum log severity (default "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: HttpServerConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Loads `path` when given, otherwise returns defaults
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> CliResult<()> {
        if self.server.max_question_len == 0 {
            return Err(CliError::config_error("max_question_len must be > 0"));
        }

        if Severity::parse(&self.log_level).is_none() {
            return Err(CliError::config_error(format!(
                "Invalid log_level: '{}'. Must be one of trace, info, warn, error, fatal.",
                self.log_level
            )));
        }

        Ok(())
    }

    /// Parsed minimum severity
    pub fn severity(&self) -> Severity {
        Severity::parse(&self.log_level).unwrap_or(Severity::Info)
    }
}

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    Logger::init_from_env();

    match cmd {
        Command::Solve { question } => solve(&question, &mut io::stdout()),
        Command::Explain { question } => explain(&question, &mut io::stdout()),
        Command::Batch => batch(io::stdin().lock(), &mut io::stdout()),
        Command::Serve { config, port } => serve(config.as_deref(), port),
    }
}

fn require_question(question: &str) -> CliResult<()> {
    if question.trim().is_empty() {
        return Err(CliError::empty_question());
    }
    Ok(())
}

/// Solve one question and write the result as a JSON line
pub fn solve<W: Write>(question: &str, out: &mut W) -> CliResult<()> {
    require_question(question)?;
    write_json(out, &solver::solve(question))
}

/// Solve one question and write the readable walkthrough
pub fn explain<W: Write>(question: &str, out: &mut W) -> CliResult<()> {
    require_question(question)?;
    let explanation = Explanation::from_result(&solver::solve(question));
    write_text(out, &explanation.to_string())
}

/// Solve every request line, writing one result line each.
///
/// A bad line produces an error line and the batch continues.
pub fn batch<R: BufRead, W: Write>(input: R, out: &mut W) -> CliResult<()> {
    for request in read_requests(input) {
        let line = match request {
            Ok(line) => line,
            Err(e) => {
                write_error(out, e.code_str(), e.message())?;
                continue;
            }
        };

        match line.question {
            Some(q) if !q.trim().is_empty() => write_json(out, &solver::solve(&q))?,
            _ => {
                let e = CliError::empty_question();
                write_error(out, e.code_str(), e.message())?;
            }
        }
    }
    Ok(())
}

/// Start the HTTP adapter
///
/// 1. Load configuration (defaults when no path is given)
/// 2. Apply the configured log level; `STEPWISE_LOG` still wins
/// 3. Serve until Ctrl-C
pub fn serve(config_path: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    let mut config = Config::load_or_default(config_path)?;
    if let Some(port) = port {
        config.server.port = port;
    }

    Logger::set_min_severity(config.severity());
    Logger::init_from_env();

    let source = config_path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "defaults".to_string());
    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("addr", &config.server.socket_addr()),
            ("log_level", &config.log_level),
            ("source", &source),
        ],
    );

    let server = HttpServer::with_config(config.server);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })
}

#[cfg(test)]
mod tests {
    use super::super::errors::CliErrorCode;
    use super::*;
    use serde_json::json;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn output_lines(out: Vec<u8>) -> Vec<serde_json::Value> {
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_solve_writes_json_line() {
        let mut out = Vec::new();
        solve("What is 30 percent of 200", &mut out).unwrap();

        let lines = output_lines(out);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["answer"], 60.0);
        assert_eq!(lines[0]["subtype"], "percentage");
    }

    #[test]
    fn test_solve_rejects_blank_question() {
        let mut out = Vec::new();
        let err = solve("  ", &mut out).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::EmptyQuestion);
        assert!(out.is_empty());
    }

    #[test]
    fn test_explain_writes_text() {
        let mut out = Vec::new();
        explain("derivative of x squared", &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Rule: power_rule"));
        assert!(text.contains("bring_power_down"));
    }

    #[test]
    fn test_batch_one_line_per_request() {
        let input = Cursor::new(
            "{\"question\": \"derivative of x^2\"}\n\
             {\"question\": \"\"}\n\
             garbage\n\
             {\"question\": \"bananas are tasty\"}\n",
        );
        let mut out = Vec::new();
        batch(input, &mut out).unwrap();

        let lines = output_lines(out);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0]["topic"], "differentiation");
        assert_eq!(lines[1]["code"], "STEP_CLI_EMPTY_QUESTION");
        assert_eq!(lines[2]["code"], "STEP_CLI_IO_ERROR");
        assert_eq!(lines[3]["code"], "STEP_UNSUPPORTED_QUESTION");
    }

    #[test]
    fn test_config_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("stepwise.json");
        fs::write(&config_path, "{}").unwrap();

        let config = Config::load(&config_path).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.max_question_len, 500);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.severity(), Severity::Info);
    }

    #[test]
    fn test_config_flattened_fields() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("stepwise.json");
        let config_json = json!({
            "port": 8080,
            "max_question_len": 120,
            "log_level": "trace"
        });
        fs::write(&config_path, config_json.to_string()).unwrap();

        let config = Config::load(&config_path).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.max_question_len, 120);
        assert_eq!(config.severity(), Severity::Trace);
    }

    #[test]
    fn test_config_rejects_zero_length_limit() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("stepwise.json");
        fs::write(&config_path, json!({"max_question_len": 0}).to_string()).unwrap();

        let err = Config::load(&config_path).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::ConfigError);
    }

    #[test]
    fn test_config_rejects_unknown_log_level() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("stepwise.json");
        fs::write(&config_path, json!({"log_level": "loud"}).to_string()).unwrap();

        assert!(Config::load(&config_path).is_err());
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("absent.json");

        let err = Config::load_or_default(Some(&missing)).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::ConfigError);
        assert_eq!(Config::load_or_default(None).unwrap(), Config::default());
    }
}
