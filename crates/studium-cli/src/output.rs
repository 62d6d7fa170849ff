//! Output helpers for plain and JSON modes.

use anyhow::Result;
use serde::Serialize;

/// Envelope for machine-readable output.
#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Print a value as pretty JSON in the `{ok, data}` envelope.
pub fn print_json<T: Serialize>(data: T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonOut { ok: true, data })?
    );
    Ok(())
}
