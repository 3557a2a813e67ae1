//! Plain-text table renderer for CLI outputs. Column widths are declared
//! minimums and grow to the widest cell; padding measures the visible
//! text, so ANSI-colored cells stay aligned.

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

/// Length of a cell as printed, with ANSI escape sequences skipped.
fn visible_len(s: &str) -> usize {
    let mut len = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else if c == '\x1b' {
            in_escape = true;
        } else {
            len += 1;
        }
    }
    len
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = self
            .columns
            .iter()
            .map(|c| c.width.max(c.header.chars().count()))
            .collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(visible_len(cell));
            }
        }

        let mut out = String::new();

        for (col, w) in self.columns.iter().zip(&widths) {
            out.push_str(&format!("{:<width$} ", col.header, width = w));
        }
        out.push('\n');

        for w in &widths {
            out.push_str(&"-".repeat(*w));
            out.push(' ');
        }
        out.push('\n');

        for row in &self.rows {
            for (i, w) in widths.iter().enumerate() {
                let pad = w.saturating_sub(visible_len(&row[i]));
                out.push_str(&row[i]);
                out.push_str(&" ".repeat(pad + 1));
            }
            out.push('\n');
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_len_skips_ansi_sequences() {
        assert_eq!(visible_len("plain"), 5);
        assert_eq!(visible_len("\x1b[32m3\x1b[0m"), 1);
    }

    #[test]
    fn columns_grow_to_widest_cell() {
        let mut table = Table::new(vec![Column {
            header: "Name".to_string(),
            width: 2,
        }]);
        table.add_row(vec!["a-much-longer-name".to_string()]);

        let rendered = table.render();
        let header_line = rendered.lines().next().unwrap();
        assert!(header_line.starts_with("Name"));
        assert_eq!(header_line.len(), "a-much-longer-name ".len());
    }
}
