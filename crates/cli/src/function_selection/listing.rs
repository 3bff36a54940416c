use std::io::Write;

use lambda_cuts_core::error::{Error, Result};
use lambda_cuts_core::function_definitions::FunctionRecord;

/// Writes one `<ordinal>. <path> <name>` line per function, numbered from 1.
pub fn render_listing<W: Write>(functions: &[FunctionRecord], out: &mut W) -> Result<()> {
    for (index, function) in functions.iter().enumerate() {
        writeln!(out, "{}. {}", index + 1, function).map_err(Error::Stdio)?;
    }

    Ok(())
}

/// Maps a 1-based ordinal back to its function.
pub fn resolve_selection(functions: &[FunctionRecord], ordinal: i64) -> Option<&FunctionRecord> {
    let actual_index = usize::try_from(ordinal.checked_sub(1)?).ok()?;
    functions.get(actual_index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn functions() -> Vec<FunctionRecord> {
        vec![
            FunctionRecord::new(PathBuf::from("marine/ingest"), "IngestFn".to_string()),
            FunctionRecord::new(PathBuf::from("road/toll"), "TollFn".to_string()),
        ]
    }

    #[test]
    fn test_render_listing() {
        let mut out = Vec::new();
        render_listing(&functions(), &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1. marine/ingest IngestFn\n2. road/toll TollFn\n"
        );
    }

    #[test]
    fn test_render_listing_empty() {
        let mut out = Vec::new();
        render_listing(&[], &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_resolve_selection_in_range() {
        let functions = functions();
        assert_eq!(resolve_selection(&functions, 1), Some(&functions[0]));
        assert_eq!(resolve_selection(&functions, 2), Some(&functions[1]));
    }

    #[test]
    fn test_resolve_selection_out_of_range() {
        let functions = functions();
        assert_eq!(resolve_selection(&functions, 0), None);
        assert_eq!(resolve_selection(&functions, 3), None);
        assert_eq!(resolve_selection(&functions, -1), None);
        assert_eq!(resolve_selection(&functions, i64::MIN), None);
        assert_eq!(resolve_selection(&functions, i64::MAX), None);
    }
}
