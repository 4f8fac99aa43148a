/// A simple column-aligned text table for terminal output
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a new table with the given headers
    pub fn new(headers: Vec<&str>) -> Self {
        Table {
            headers: headers.into_iter().map(String::from).collect(),
            rows: Vec::new(),
        }
    }

    /// Add a row to the table
    pub fn add_row(&mut self, row: Vec<&str>) {
        self.rows.push(row.into_iter().map(String::from).collect());
    }

    /// Render the table as a formatted string
    pub fn render(&self) -> String {
        let widths = self.column_widths();

        let mut output = String::new();
        output.push_str(&render_row(&self.headers, &widths));
        output.push('\n');
        output.push_str(&render_separator(&widths));
        output.push('\n');
        for row in &self.rows {
            output.push_str(&render_row(row, &widths));
            output.push('\n');
        }
        output
    }

    /// Width of each column: the widest cell, header included
    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.len()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(cell.len());
                }
            }
        }
        widths
    }
}

fn render_row(row: &[String], widths: &[usize]) -> String {
    row.iter()
        .zip(widths.iter())
        .map(|(cell, &width)| format!("{:<width$}", cell, width = width))
        .collect::<Vec<String>>()
        .join(" | ")
}

fn render_separator(widths: &[usize]) -> String {
    widths
        .iter()
        .map(|&width| "-".repeat(width))
        .collect::<Vec<String>>()
        .join("-+-")
}
