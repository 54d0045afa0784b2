//! CSV rendering for "Exportar CSV". The browser download lives in the frontend.

/// Rows that can be exported as CSV.
pub trait CsvExportable {
    /// Column headers
    fn headers() -> Vec<&'static str>;

    /// One value per header
    fn to_csv_row(&self) -> Vec<String>;
}

pub const CSV_SEPARATOR: char = ',';

/// Builds the whole document: header line, then one line per row.
pub fn render_csv<T: CsvExportable>(rows: &[T]) -> String {
    let mut content = String::new();
    let headers: Vec<String> = T::headers().iter().map(|h| escape_csv_cell(h)).collect();
    content.push_str(&headers.join(&CSV_SEPARATOR.to_string()));
    for row in rows {
        content.push('\n');
        let cells: Vec<String> = row.to_csv_row().iter().map(|c| escape_csv_cell(c)).collect();
        content.push_str(&cells.join(&CSV_SEPARATOR.to_string()));
    }
    content
}

/// Quotes a cell that contains the separator, quotes or line breaks.
pub fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(CSV_SEPARATOR) || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Line(&'static str, i64);

    impl CsvExportable for Line {
        fn headers() -> Vec<&'static str> {
            vec!["Nombre", "Cantidad"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.0.to_string(), self.1.to_string()]
        }
    }

    #[test]
    fn renders_header_and_rows() {
        let csv = render_csv(&[Line("Gasas", 3), Line("Jeringa", 10)]);
        assert_eq!(csv, "Nombre,Cantidad\nGasas,3\nJeringa,10");
    }

    #[test]
    fn escapes_separator_and_quotes() {
        assert_eq!(escape_csv_cell("a,b"), "\"a,b\"");
        assert_eq!(escape_csv_cell("dijo \"hola\""), "\"dijo \"\"hola\"\"\"");
        assert_eq!(escape_csv_cell("simple"), "simple");
    }

    #[test]
    fn header_only_for_empty_rows() {
        assert_eq!(render_csv::<Line>(&[]), "Nombre,Cantidad");
    }
}
