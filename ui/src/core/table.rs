//! The in-memory response table: ordered columns over loosely typed cells.
//!
//! Cells are typed at load time. A field becomes a `Number` only when it
//! parses as a float *and* carries no significant leading zero, so phone
//! numbers and zero-padded identifiers survive as text.

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Number(f64),
    Null,
}

impl Value {
    /// Classify a raw CSV field.
    pub fn from_field(field: &str) -> Self {
        let trimmed = field.trim();
        if trimmed.is_empty() {
            return Value::Null;
        }
        if has_significant_leading_zero(trimmed) {
            return Value::Text(trimmed.to_string());
        }
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => Value::Number(n),
            _ => Value::Text(trimmed.to_string()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Display form used for category labels, the table panel, and CSV export.
    /// Whole numbers render without a fractional part (`Display` on f64
    /// already drops trailing `.0`).
    pub fn display(&self) -> String {
        match self {
            Value::Text(s) => s.clone(),
            Value::Number(n) => format!("{n}"),
            Value::Null => String::new(),
        }
    }
}

fn has_significant_leading_zero(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    digits.len() > 1 && digits.starts_with('0') && !digits.starts_with("0.")
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataTable {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl DataTable {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Self { columns, rows }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a CSV document with a header row. Cell typing follows
    /// [`Value::from_field`].
    pub fn from_csv_str(input: &str) -> Result<Self, csv::Error> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(input.as_bytes());

        let columns: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let width = columns.len();
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let mut row: Vec<Value> = record.iter().map(Value::from_field).collect();
            // Ragged rows are padded so column indexing stays safe.
            row.resize(width, Value::Null);
            rows.push(row);
        }

        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Iterate the cells of one column; empty iterator when the column is
    /// absent (the caller-side "silent skip" contract).
    pub fn column_values<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a Value> + 'a {
        let index = self.column_index(name);
        self.rows
            .iter()
            .filter_map(move |row| index.and_then(|i| row.get(i)))
    }

    /// Fresh table containing the rows matching `keep`; the source table is
    /// never mutated. Every filtered view in the app goes through here.
    pub fn filtered<F>(&self, keep: F) -> DataTable
    where
        F: Fn(&[Value]) -> bool,
    {
        DataTable {
            columns: self.columns.clone(),
            rows: self
                .rows
                .iter()
                .filter(|row| keep(row))
                .cloned()
                .collect(),
        }
    }

    /// Rewrite one column in place with `transform`. Null cells are passed
    /// through untouched. No-op when the column is absent.
    pub fn map_column<F>(&mut self, name: &str, transform: F)
    where
        F: Fn(&Value) -> Value,
    {
        if let Some(index) = self.column_index(name) {
            for row in &mut self.rows {
                if let Some(cell) = row.get_mut(index) {
                    if !cell.is_null() {
                        *cell = transform(cell);
                    }
                }
            }
        }
    }
}
