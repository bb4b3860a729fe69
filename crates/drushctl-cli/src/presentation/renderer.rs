use anyhow::Result;
use serde::Serialize;

/// JSON output is always the full view model, pretty-printed; plain-mode
/// truncation never applies to it.
pub fn render_json<T: Serialize>(view_model: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(view_model)?);
    Ok(())
}
