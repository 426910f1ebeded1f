use cadence_domain::config::{Config, ConfigSeverity, OutputFormat};

/// Result of `cadence config validate`.
#[derive(Debug)]
pub struct ValidationReport {
    pub text: String,
    /// No `Error`-severity issues were found.
    pub ok: bool,
}

/// Summarize the settings `cadence` will actually run with, followed by any
/// validation issues.
pub fn validate(config: &Config, config_path: &str) -> ValidationReport {
    let format = match config.output.format {
        OutputFormat::Text => "text",
        OutputFormat::Json if config.output.pretty => "json (pretty)",
        OutputFormat::Json => "json (compact)",
    };
    let log_style = if config.logging.json { "json" } else { "compact" };

    let mut lines = vec![
        format!("config:  {config_path}"),
        format!("output:  {format}"),
        format!(
            "logging: {} to stderr, filter {:?} (RUST_LOG overrides)",
            log_style, config.logging.filter
        ),
    ];

    let issues = config.validate();
    let errors = issues
        .iter()
        .filter(|i| i.severity == ConfigSeverity::Error)
        .count();
    lines.extend(issues.iter().map(|i| i.to_string()));
    lines.push(if issues.is_empty() {
        "ok".to_string()
    } else {
        format!("{errors} error(s), {} warning(s)", issues.len() - errors)
    });

    ValidationReport {
        text: lines.join("\n"),
        ok: errors == 0,
    }
}

/// Render the resolved config (with all defaults filled in) as TOML.
pub fn show(config: &Config) -> anyhow::Result<String> {
    toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("serializing config: {e}"))
}
