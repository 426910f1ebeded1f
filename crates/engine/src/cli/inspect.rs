//! One-shot `parse`, `build` and `describe` commands.

use std::io::Read;

use anyhow::Context;
use serde::Serialize;

use cadence_domain::recurrence::{Frequency, RecurrenceDescriptor};

use super::Output;
use crate::schedules::{build, describe, is_malformed, parse};

#[derive(Debug, Serialize)]
struct Described<'a> {
    expression: &'a str,
    frequency: Frequency,
    description: String,
}

/// Classify `cron`. Text output is the descriptor JSON as well, since it is
/// the only faithful rendering of every field.
pub fn parse_cmd(cron: &str, out: Output) -> anyhow::Result<String> {
    if is_malformed(cron) {
        tracing::warn!(cron, "expected 5 fields, falling back to defaults");
    }
    out.to_json(&parse(cron))
}

/// Build a cron string from descriptor JSON.
pub fn build_cmd(descriptor_json: &str, out: Output) -> anyhow::Result<String> {
    let descriptor: RecurrenceDescriptor = serde_json::from_str(descriptor_json)
        .map_err(cadence_domain::Error::from)
        .context("reading descriptor")?;
    let expression = build(&descriptor);
    tracing::debug!(frequency = %descriptor.frequency, %expression, "built");
    if out.json {
        out.to_json(&serde_json::json!({ "expression": expression }))
    } else {
        Ok(expression)
    }
}

/// Read descriptor JSON from `file`, or stdin when `None`.
pub fn read_descriptor_input(file: Option<&str>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .map_err(cadence_domain::Error::from)
            .with_context(|| format!("reading {path}")),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(cadence_domain::Error::from)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}

pub fn describe_cmd(cron: &str, out: Output) -> anyhow::Result<String> {
    let descriptor = parse(cron);
    let description = describe(&descriptor);
    if out.json {
        out.to_json(&Described {
            expression: cron,
            frequency: descriptor.frequency,
            description,
        })
    } else {
        Ok(description)
    }
}
