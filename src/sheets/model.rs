use serde::Deserialize;
use serde_json::Value;

/// A single cell as returned by the values API.
///
/// `Missing` never comes off the wire, it stands for a position past the end
/// of a short row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub enum Cell {
    String(String),
    Number(f64),
    Boolean(bool),
    Null,
    Missing,
}

impl From<Value> for Cell {
    fn from(value: Value) -> Self {
        match value {
            Value::String(it) => Cell::String(it),
            Value::Number(it) => it.as_f64().map(Cell::Number).unwrap_or(Cell::Null),
            Value::Bool(it) => Cell::Boolean(it),
            Value::Null | Value::Array(_) | Value::Object(_) => Cell::Null,
        }
    }
}

impl Cell {
    pub fn as_str(&self) -> &str {
        match self {
            Cell::String(it) => it,
            _ => "",
        }
    }
}

static MISSING: Cell = Cell::Missing;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Row(Vec<Cell>);

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Row(cells)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn cell(&self, index: usize) -> &Cell {
        self.0.get(index).unwrap_or(&MISSING)
    }

    /// Cell content if it's a string, empty otherwise.
    pub fn text(&self, index: usize) -> &str {
        self.cell(index).as_str()
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.0.iter()
    }
}

impl<S: Into<String>> FromIterator<S> for Row {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Row(iter.into_iter().map(|it| Cell::String(it.into())).collect())
    }
}

#[derive(Debug, Deserialize)]
pub struct ValueRange {
    #[serde(default)]
    pub range: String,
    #[serde(default)]
    pub values: Vec<Row>,
}
