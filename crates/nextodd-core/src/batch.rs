//! JSON batch evaluation.
//!
//! A batch is a JSON array of inputs (`[3, 2.9, "5"]`). Every element is
//! evaluated independently; a failure becomes an error record instead of
//! aborting the rest of the batch.

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Read;

use crate::coerce::Input;
use crate::policy::Policy;

/// Result of evaluating one batch element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchRecord {
    pub input: Input,
    #[serde(flatten)]
    pub outcome: Outcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Result(i64),
    Error(String),
}

impl BatchRecord {
    pub fn is_error(&self) -> bool {
        matches!(self.outcome, Outcome::Error(_))
    }
}

/// Decode a JSON array of inputs.
pub fn parse_inputs<R: Read>(reader: R) -> Result<Vec<Input>> {
    serde_json::from_reader(reader).context("Failed to parse JSON array of inputs")
}

pub fn evaluate_batch(policy: Policy, inputs: &[Input]) -> Vec<BatchRecord> {
    let records: Vec<BatchRecord> = inputs
        .iter()
        .map(|input| {
            let outcome = match policy.evaluate(input) {
                Ok(result) => Outcome::Result(result),
                Err(e) => Outcome::Error(e.to_string()),
            };
            BatchRecord {
                input: input.clone(),
                outcome,
            }
        })
        .collect();

    let failed = records.iter().filter(|r| r.is_error()).count();
    log::info!(
        "Batch complete: {} evaluated, {} failed",
        records.len(),
        failed
    );

    records
}

/// Pretty-printed JSON array of records.
pub fn to_json(records: &[BatchRecord]) -> Result<String> {
    serde_json::to_string_pretty(records).context("Failed to serialize batch results")
}
