//! Subcommand implementations

pub mod operations;
pub mod run;
pub mod verify;

use std::io::Write;

use serde::Serialize;

/// Write `value` to `out` as pretty JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn writes_pretty_json_with_trailing_newline() {
        let mut out = Vec::new();
        write_json(&mut out, &json!([{"id": "1"}])).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("]\n"));
        assert_eq!(serde_json::from_str::<serde_json::Value>(&text).unwrap(), json!([{"id": "1"}]));
    }
}
