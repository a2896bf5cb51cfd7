use std::path::Path;

use anyhow::Context;

pub mod schema;
pub mod types;

pub fn load_request<P: AsRef<Path>>(
    file: P,
) -> Result<types::JsonOptimizationRequest, anyhow::Error> {
    let file = file.as_ref();
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    serde_json::from_str(&content).with_context(|| format!("Invalid request in {}", file.display()))
}
