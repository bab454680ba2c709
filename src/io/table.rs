use super::error::IoError;
use crate::domain::Cell;

/// Field values treated as missing, matching common spreadsheet exports
pub const NULL_MARKERS: [&str; 9] = ["", "NA", "N/A", "NaN", "nan", "null", "NULL", "None", "#N/A"];

pub fn is_null_marker(raw: &str) -> bool {
    NULL_MARKERS.contains(&raw)
}

/// Type inferred for a whole column from its non-null values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// No non-null values at all
    Empty,
    Integer,
    Float,
    Text,
}

impl ColumnKind {
    fn infer<'a>(values: impl Iterator<Item = &'a str>) -> Self {
        let mut kind = Self::Empty;

        for raw in values.map(str::trim).filter(|raw| !is_null_marker(raw)) {
            let value_kind = if raw.parse::<i64>().is_ok() {
                Self::Integer
            } else if raw.parse::<f64>().is_ok_and(f64::is_finite) {
                Self::Float
            } else {
                return Self::Text;
            };

            kind = match (kind, value_kind) {
                (Self::Empty, k) => k,
                (Self::Integer, Self::Integer) => Self::Integer,
                _ => Self::Float,
            };
        }

        kind
    }
}

/// Byte-level framing of a sheet file, reproduced when it is written back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Layout {
    /// File started with a UTF-8 byte order mark
    pub bom: bool,
    /// Records ended with `\r\n` rather than `\n`
    pub crlf: bool,
}

impl Layout {
    /// Detect the framing of decoded sheet text (BOM still attached)
    pub fn detect(text: &str) -> Self {
        Self {
            bom: text.starts_with('\u{feff}'),
            crlf: text
                .find('\n')
                .is_some_and(|end| text[..end].ends_with('\r')),
        }
    }
}

/// An in-memory delimited sheet
///
/// Raw field text is kept as loaded (surrounding whitespace included) so the
/// sheet can be written back without reformatting values; lookups and typed
/// access go through [`Table::raw`] and [`Table::cell`], which trim.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    delimiter: u8,
    layout: Layout,
    headers: Vec<String>,
    kinds: Vec<ColumnKind>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table, inferring one kind per column
    ///
    /// Fails with [`IoError::RaggedRow`] unless every row has exactly
    /// `headers.len()` fields.
    pub fn new(delimiter: u8, headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, IoError> {
        if let Some((index, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != headers.len())
        {
            return Err(IoError::RaggedRow {
                row: index + 1,
                expected: headers.len(),
                found: row.len(),
            });
        }

        let kinds = (0..headers.len())
            .map(|col| ColumnKind::infer(rows.iter().map(|row| row[col].as_str())))
            .collect();

        Ok(Self {
            delimiter,
            layout: Layout::default(),
            headers,
            kinds,
            rows,
        })
    }

    /// Record the file framing to reproduce on write
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    pub fn kind(&self, col: usize) -> ColumnKind {
        self.kinds[col]
    }

    /// Trimmed field text, `None` when the field holds a null marker
    pub fn raw(&self, row: usize, col: usize) -> Option<&str> {
        let raw = self.rows[row][col].trim();
        (!is_null_marker(raw)).then_some(raw)
    }

    /// Typed value of a field, interpreted through its column kind
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        let Some(raw) = self.raw(row, col) else {
            return Cell::Null;
        };

        match self.kinds[col] {
            ColumnKind::Integer => raw
                .parse()
                .map(Cell::Integer)
                .unwrap_or_else(|_| Cell::Text(raw.to_string())),
            ColumnKind::Float => raw
                .parse()
                .map(Cell::Float)
                .unwrap_or_else(|_| Cell::Text(raw.to_string())),
            ColumnKind::Text | ColumnKind::Empty => Cell::Text(raw.to_string()),
        }
    }

    /// Overwrite one field and re-infer its column kind
    pub fn set(&mut self, row: usize, col: usize, value: impl Into<String>) {
        self.rows[row][col] = value.into();
        self.kinds[col] = ColumnKind::infer(self.rows.iter().map(|r| r[col].as_str()));
    }
}
