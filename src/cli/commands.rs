use crate::error::{LexpError, LexpResult};
use crate::writer::{self, OutputFormat};
use colored::Colorize;
use std::path::PathBuf;

/// Parse a 1-based sheet index from the command line.
///
/// The index must be a positive integer; `0` and non-numeric tokens are
/// reported as errors instead of panicking or being silently dropped.
pub fn parse_sheet_index(raw: &str) -> Result<usize, LexpError> {
    match raw.parse::<usize>() {
        Ok(index) if index >= 1 => Ok(index),
        _ => Err(LexpError::InvalidSheetIndex(raw.to_string())),
    }
}

/// Execute the convert command: spreadsheet in, JSON or XML out.
pub fn convert(file: PathBuf, format: OutputFormat, sheets: Vec<usize>) -> LexpResult<()> {
    println!("{}", "🌐 Lexp - Exporting locale sheets".bold().green());
    println!("   File:   {}", file.display());
    println!("   Format: {}", format.label().bright_blue().bold());
    println!(
        "   Sheets: {}\n",
        sheets
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );

    let output = writer::export(&file, format, &sheets)?;

    println!("{}", "✅ Export complete!".bold().green());
    println!("   Output: {}\n", output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sheet_index_valid() {
        assert_eq!(parse_sheet_index("1").unwrap(), 1);
        assert_eq!(parse_sheet_index("12").unwrap(), 12);
    }

    #[test]
    fn test_parse_sheet_index_zero_rejected() {
        assert!(matches!(
            parse_sheet_index("0"),
            Err(LexpError::InvalidSheetIndex(_))
        ));
    }

    #[test]
    fn test_parse_sheet_index_non_integer_rejected() {
        assert!(parse_sheet_index("abc").is_err());
        assert!(parse_sheet_index("-1").is_err());
        assert!(parse_sheet_index("1.5").is_err());
    }

    #[test]
    fn test_convert_nonexistent_file() {
        let result = convert(
            PathBuf::from("nonexistent.xlsx"),
            OutputFormat::Json,
            vec![1],
        );
        assert!(result.is_err(), "Convert should fail on nonexistent file");
    }
}
