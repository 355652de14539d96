//! Line and field splitting for certificate CSV uploads.
//!
//! Splitting is deliberately naive: lines on `\n`, fields on `,`. Quoted
//! fields are not understood, so a comma inside quotes still splits.

use certivault_core::AppError;

/// One data line of an upload, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRow {
    /// Line number as the user sees it: the header is line 1, the first data row is 2.
    pub row_number: usize,
    pub raw_fields: Vec<String>,
}

/// Split upload text into data rows, discarding blank lines and the header.
///
/// Fails when fewer than two non-blank lines remain.
pub fn parse_import_rows(text: &str) -> Result<Vec<ImportRow>, AppError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let lines: Vec<&str> = text.split('\n').filter(|l| !l.trim().is_empty()).collect();
    if lines.len() < 2 {
        return Err(AppError::BadRequest(
            "CSV file must contain at least a header and one data row".to_string(),
        ));
    }

    Ok(lines
        .into_iter()
        .skip(1)
        .enumerate()
        .map(|(index, line)| ImportRow {
            row_number: index + 2,
            raw_fields: split_fields(line),
        })
        .collect())
}

/// Split one line on commas, trimming whitespace and one surrounding quote from each field.
pub fn split_fields(line: &str) -> Vec<String> {
    line.split(',').map(clean_field).collect()
}

fn clean_field(field: &str) -> String {
    let field = field.trim();
    let field = field.strip_prefix('"').unwrap_or(field);
    let field = field.strip_suffix('"').unwrap_or(field);
    field.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_only_is_rejected() {
        let err = parse_import_rows("Name,Certificate ID,Issue Date,Course/Program,Email\n")
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert!(parse_import_rows("").is_err());
        assert!(parse_import_rows("\n\n  \n").is_err());
    }

    #[test]
    fn test_row_numbers_skip_header_and_ignore_blank_lines() {
        let text = "Name,ID,Date,Course\n\nAlice,C-1,2024-01-15,A\n   \nBob,C-2,2024-01-16,B\n";
        let rows = parse_import_rows(text).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].row_number, 2);
        assert_eq!(rows[0].raw_fields[0], "Alice");
        // Blank lines are dropped before numbering.
        assert_eq!(rows[1].row_number, 3);
        assert_eq!(rows[1].raw_fields[0], "Bob");
    }

    #[test]
    fn test_crlf_and_bom_are_tolerated() {
        let text = "\u{feff}Name,ID,Date,Course,Email\r\nAlice,C-1,2024-01-15,A,alice@x.com\r\n";
        let rows = parse_import_rows(text).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].raw_fields[4], "alice@x.com");
    }

    #[test]
    fn test_split_fields_trims_whitespace_and_quotes() {
        assert_eq!(
            split_fields(r#" "Alice" , CERT-1,2024-01-15 ,"Course A","#),
            vec!["Alice", "CERT-1", "2024-01-15", "Course A", ""]
        );
    }

    #[test]
    fn test_split_fields_strips_only_one_quote_each_side() {
        assert_eq!(split_fields(r#"""Quoted"""#), vec![r#""Quoted""#]);
        assert_eq!(split_fields(r#"""#), vec![""]);
    }

    #[test]
    fn test_quoted_comma_still_splits() {
        assert_eq!(
            split_fields(r#""Doe, Jane",CERT-1"#),
            vec!["Doe", "Jane", "CERT-1"]
        );
    }
}
