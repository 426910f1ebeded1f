//! `cadence edit` — drive a [`ScheduleEditor`] from the command line.

use serde::Serialize;

use cadence_domain::recurrence::RecurrenceDescriptor;

use super::Output;
use crate::schedules::{Edit, ScheduleEditor};

/// Everything an editing session produced.
#[derive(Debug, Serialize)]
pub struct Transcript {
    pub initial: String,
    /// `(edit, expression the change callback received)` in order.
    pub steps: Vec<(String, String)>,
    pub expression: String,
    pub description: String,
    pub descriptor: RecurrenceDescriptor,
}

/// Apply `edits` (each `field=value`) to `cron` in order.
///
/// All edits are parsed before any is applied, so a typo leaves nothing
/// half-done.
pub fn run_edits(cron: &str, edits: &[String]) -> anyhow::Result<Transcript> {
    let edits = edits
        .iter()
        .map(|raw| raw.parse::<Edit>())
        .collect::<Result<Vec<_>, _>>()?;

    let mut received = Vec::with_capacity(edits.len());
    let mut labels = Vec::with_capacity(edits.len());
    let mut editor = ScheduleEditor::new(cron, |expr: &str| received.push(expr.to_string()));
    let initial = editor.expression();

    for edit in edits {
        labels.push(edit.to_string());
        editor.apply(edit);
    }

    let expression = editor.expression();
    let description = editor.preview();
    let descriptor = editor.into_descriptor();

    Ok(Transcript {
        initial,
        steps: labels.into_iter().zip(received).collect(),
        expression,
        description,
        descriptor,
    })
}

/// Render a transcript for printing.
pub fn render(transcript: &Transcript, out: Output) -> anyhow::Result<String> {
    if out.json {
        return out.to_json(transcript);
    }
    let mut lines = vec![format!("  {}", transcript.initial)];
    for (edit, expression) in &transcript.steps {
        lines.push(format!("{edit:<24} -> {expression}"));
    }
    lines.push(String::new());
    lines.push(transcript.expression.clone());
    lines.push(transcript.description.clone());
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edits(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn records_each_callback() {
        let t = run_edits(
            "0 2 * * *",
            &edits(&["frequency=weekly", "days=Mon,Fri", "hour=14", "minute=30"]),
        )
        .unwrap();
        assert_eq!(t.initial, "0 2 * * *");
        assert_eq!(
            t.steps,
            vec![
                ("frequency=weekly".to_string(), "0 2 * * 1".to_string()),
                ("days=Mon,Fri".to_string(), "0 2 * * 1,5".to_string()),
                ("hour=14".to_string(), "0 14 * * 1,5".to_string()),
                ("minute=30".to_string(), "30 14 * * 1,5".to_string()),
            ]
        );
        assert_eq!(t.expression, "30 14 * * 1,5");
        assert_eq!(t.description, "Every Mon, Fri at 2:30 PM");
    }

    #[test]
    fn bad_edit_applies_nothing() {
        let err = run_edits("0 2 * * *", &edits(&["hour=3", "colour=blue"])).unwrap_err();
        assert!(err.to_string().contains("unknown field 'colour'"));
    }

    #[test]
    fn text_rendering_ends_with_expression_and_description() {
        let t = run_edits("*/5 * * * *", &edits(&["minute_interval=1"])).unwrap();
        let text = render(&t, Output { json: false, pretty: false }).unwrap();
        let last: Vec<&str> = text.lines().rev().take(2).collect();
        assert_eq!(last, vec!["Every 1 minute", "*/1 * * * *"]);
    }

    #[test]
    fn json_rendering_includes_descriptor() {
        let t = run_edits("0 3 15 * *", &edits(&["day_of_month=40"])).unwrap();
        let json = render(&t, Output { json: true, pretty: true }).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["expression"], "0 3 31 * *");
        assert_eq!(value["descriptor"]["dayOfMonth"], 31);
        assert_eq!(value["steps"][0][1], "0 3 31 * *");
    }
}
