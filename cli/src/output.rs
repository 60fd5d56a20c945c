//! Rendering of resolved rates.

use std::fmt::Write;
use std::str::FromStr;

use curconv_fx::Resolution;

use crate::error::CliError;

const SEPARATOR: &str = "--------------";

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

/// Render a resolution in the requested format, newline terminated.
pub fn render(resolution: &Resolution, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(render_text(resolution)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(resolution)?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn render_text(resolution: &Resolution) -> String {
    let mut out = String::new();

    if let Some(trace) = &resolution.trace {
        out.push_str("Steps:\n");
        for hop in trace {
            let _ = writeln!(out, "{}", hop);
        }
        out.push_str(SEPARATOR);
        out.push('\n');
    }

    let _ = writeln!(
        out,
        "1 {} = {:.6} {}",
        resolution.from, resolution.rate, resolution.to
    );
    out
}
