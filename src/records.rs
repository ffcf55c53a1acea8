/// Column-Oriented Record Set Module
///
/// Input to row insertion is column-oriented: each column name maps to the
/// full sequence of values for that column across all rows. This module
/// holds that representation and transposes it into the row-oriented tuples
/// a parameterized insert needs.
///
/// Columns keep insertion order, and that order is the single source of
/// truth for both the generated column list and the placeholder list.
use rusqlite::types::Value;

/// A column-oriented set of rows to insert: ordered (name, values) pairs.
#[derive(Debug, Clone, Default)]
pub struct RecordSet {
    columns: Vec<(String, Vec<Value>)>,
}

impl RecordSet {
    /// Creates an empty record set.
    pub fn new() -> Self {
        RecordSet::default()
    }

    /// Appends a column, builder-style.
    ///
    /// # Examples
    ///
    /// ```
    /// use litetab::records::RecordSet;
    ///
    /// let records = RecordSet::new()
    ///     .column("symbol", ["BA".to_string(), "DGE".to_string()])
    ///     .column("price", [177.30, 2289.50]);
    /// assert_eq!(records.row_count(), 2);
    /// ```
    pub fn column<N, I, V>(mut self, name: N, values: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.push_column(name, values);
        self
    }

    /// Appends a column in place.
    pub fn push_column<N, I, V>(&mut self, name: N, values: I)
    where
        N: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values = values.into_iter().map(Into::into).collect();
        self.columns.push((name.into(), values));
    }

    /// Returns the column names in insertion order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Returns true if the set has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Number of rows the set will produce when transposed.
    ///
    /// Ragged columns truncate to the shortest column's length (zip
    /// semantics); unequal lengths are not an error.
    pub fn row_count(&self) -> usize {
        self.columns
            .iter()
            .map(|(_, values)| values.len())
            .min()
            .unwrap_or(0)
    }

    /// Transposes the column sequences into row tuples.
    ///
    /// Row i consists of the i-th element of each column's sequence, with
    /// columns visited in insertion order to match `column_names`.
    pub fn rows(&self) -> Vec<Vec<&Value>> {
        let count = self.row_count();
        (0..count)
            .map(|i| self.columns.iter().map(|(_, values)| &values[i]).collect())
            .collect()
    }
}
