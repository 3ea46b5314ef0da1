//! Generic row/column tables parsed from CSV.

use crate::error::SentimentError;

/// Cell values read as missing.
const NULL_TOKENS: &[&str] = &[
    "#N/A", "#NA", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// A parsed CSV table. `None` marks a null cell.
///
/// Every row has exactly `headers.len()` cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl Table {
    /// Build a table, padding short rows with nulls and dropping cells past
    /// the last header.
    #[must_use]
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, None);
                row
            })
            .collect();
        Self { headers, rows }
    }

    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The first `n` rows, for previews.
    #[must_use]
    pub fn head(&self, n: usize) -> Table {
        Table {
            headers: self.headers.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }

    /// Non-null values of `column`, in row order.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::ColumnNotFound`] if no header equals `column`.
    pub fn extract_column(&self, column: &str) -> Result<Vec<String>, SentimentError> {
        let index = self
            .headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| SentimentError::ColumnNotFound {
                column: column.to_string(),
                available: self.headers.clone(),
            })?;

        Ok(self
            .rows
            .iter()
            .filter_map(|row| row[index].clone())
            .collect())
    }
}

/// Parse CSV bytes (header row first) into a [`Table`].
///
/// Rows shorter than the header are padded with nulls; a row longer than the
/// header fails the whole parse.
///
/// # Errors
///
/// - [`SentimentError::Csv`] for invalid CSV or non-UTF-8 content.
/// - [`SentimentError::MalformedCsv`] if there is no header or a row is too wide.
pub fn parse_csv(bytes: &[u8]) -> Result<Table, SentimentError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(bytes);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if headers.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
        return Err(SentimentError::MalformedCsv(
            "no columns to parse".to_string(),
        ));
    }

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        if record.len() > headers.len() {
            return Err(SentimentError::MalformedCsv(format!(
                "row {} has {} fields, expected at most {}",
                index + 1,
                record.len(),
                headers.len()
            )));
        }
        rows.push(record.iter().map(cell_value).collect());
    }

    Ok(Table::new(headers, rows))
}

fn cell_value(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || NULL_TOKENS.contains(&trimmed) {
        None
    } else {
        Some(raw.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_column_in_row_order() {
        let table =
            parse_csv(b"id,comment\n1,great service\n2,terrible wait times\n3,it was fine\n")
                .unwrap();
        assert_eq!(table.headers(), ["id", "comment"]);
        assert_eq!(table.row_count(), 3);
        assert_eq!(
            table.extract_column("comment").unwrap(),
            vec!["great service", "terrible wait times", "it was fine"]
        );
    }

    #[test]
    fn numeric_cells_come_back_as_strings() {
        let table = parse_csv(b"id,comment\n1,a\n2,b\n").unwrap();
        assert_eq!(table.extract_column("id").unwrap(), vec!["1", "2"]);
    }

    #[test]
    fn null_cells_are_skipped() {
        let table = parse_csv(b"comment,other\nfirst,x\n,y\nNA,z\n  ,w\nlast,v\n").unwrap();
        assert_eq!(table.extract_column("comment").unwrap(), vec!["first", "last"]);
    }

    #[test]
    fn missing_column_is_an_error_never_partial() {
        let table = parse_csv(b"comment\nhello\n").unwrap();
        let err = table.extract_column("text").unwrap_err();
        match err {
            SentimentError::ColumnNotFound { column, available } => {
                assert_eq!(column, "text");
                assert_eq!(available, vec!["comment".to_string()]);
            }
            other => panic!("expected ColumnNotFound, got {other:?}"),
        }
    }

    #[test]
    fn column_lookup_is_exact() {
        let table = parse_csv(b"Comment\nhello\n").unwrap();
        assert!(table.extract_column("comment").is_err());
    }

    #[test]
    fn short_rows_are_padded_with_nulls() {
        let table = parse_csv(b"a,b\n1\n2,x\n").unwrap();
        assert_eq!(table.rows()[0], vec![Some("1".to_string()), None]);
        assert_eq!(table.extract_column("b").unwrap(), vec!["x"]);
    }

    #[test]
    fn wide_rows_fail_the_whole_table() {
        let err = parse_csv(b"a,b\n1,2\n3,4,5\n").unwrap_err();
        assert!(matches!(err, SentimentError::MalformedCsv(_)), "got {err:?}");
        assert!(err.is_parse_error());
    }

    #[test]
    fn empty_input_has_no_columns() {
        let err = parse_csv(b"").unwrap_err();
        assert!(err.is_parse_error(), "got {err:?}");
    }

    #[test]
    fn invalid_utf8_is_a_parse_error() {
        let err = parse_csv(b"comment\n\xff\xfe\n").unwrap_err();
        assert!(matches!(err, SentimentError::Csv(_)), "got {err:?}");
    }

    #[test]
    fn quoted_fields_keep_commas_and_newlines() {
        let table = parse_csv(b"comment\n\"slow, but friendly\"\n\"two\nlines\"\n").unwrap();
        assert_eq!(
            table.extract_column("comment").unwrap(),
            vec!["slow, but friendly", "two\nlines"]
        );
    }

    #[test]
    fn head_limits_rows() {
        let table = parse_csv(b"n\n1\n2\n3\n").unwrap();
        let head = table.head(2);
        assert_eq!(head.row_count(), 2);
        assert_eq!(head.headers(), table.headers());
        assert_eq!(table.head(10).row_count(), 3);
    }
}
