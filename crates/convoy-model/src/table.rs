//! In-memory tables passed between stages.

/// Header row plus text rows, as held by the spreadsheet and CSV stages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TextTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Header row plus integer rows, as held by the database and export stages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegerTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<i64>>,
}

impl IntegerTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<i64>>) -> Self {
        Self { headers, rows }
    }

    /// Empty table sharing the given headers.
    pub fn with_headers(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }
}
