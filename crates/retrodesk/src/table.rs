/// Box-drawn table with column widths fitted to the content.
pub struct TableFormatter {
    headers: Vec<&'static str>,
    widths: Vec<usize>,
}

impl TableFormatter {
    /// Each column is at least as wide as its header and at most `max_width`.
    pub fn new(headers: &[&'static str], rows: &[Vec<String>], max_width: usize) -> Self {
        let widths = headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                rows.iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.chars().count())
                    .max()
                    .unwrap_or(0)
                    .max(header.chars().count())
                    .min(max_width.max(header.chars().count()))
            })
            .collect();

        Self {
            headers: headers.to_vec(),
            widths,
        }
    }

    pub fn print_table(&self, rows: &[Vec<String>]) {
        for line in self.render(rows) {
            println!("{}", line);
        }
    }

    pub fn render(&self, rows: &[Vec<String>]) -> Vec<String> {
        let mut lines = Vec::with_capacity(rows.len() + 4);
        lines.push(self.border('┌', '┬', '┐'));
        let header_cells: Vec<String> = self.headers.iter().map(|h| h.to_string()).collect();
        lines.push(self.row(&header_cells));
        lines.push(self.border('├', '┼', '┤'));
        for row in rows {
            lines.push(self.row(row));
        }
        lines.push(self.border('└', '┴', '┘'));
        lines
    }

    fn row(&self, cells: &[String]) -> String {
        let body: Vec<String> = self
            .widths
            .iter()
            .enumerate()
            .map(|(i, &width)| truncate(cells.get(i).map(String::as_str).unwrap_or(""), width))
            .collect();
        format!("│ {} │", body.join(" │ "))
    }

    fn border(&self, left: char, middle: char, right: char) -> String {
        let segments: Vec<String> = self.widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}", left, segments.join(&middle.to_string()), right)
    }
}

/// Truncate a string to a maximum display width, adding "..." if truncated.
///
/// Uses character count (not byte count) so multi-byte characters are never
/// split.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}
