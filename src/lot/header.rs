use crate::sheets::Row;
use crate::{Error, Result};
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Column {
    #[strum(to_string = "Lot_info")]
    LotInfo,
    #[strum(to_string = "Link")]
    Link,
}

impl Column {
    fn accepts(&self, header: &str) -> bool {
        match self {
            Column::LotInfo => matches!(header, "lot_info" | "lot info"),
            Column::Link => header == "link",
        }
    }

    /// Position of this column in the header row. The last matching cell
    /// wins if a header is repeated.
    pub fn find(&self, header: &Row) -> Option<usize> {
        header
            .cells()
            .enumerate()
            .filter(|(_, cell)| self.accepts(&normalize_header(cell.as_str())))
            .map(|(index, _)| index)
            .last()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndices {
    pub lot_info: usize,
    pub link: usize,
}

pub fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase()
}

pub fn resolve_columns(header: &Row) -> Result<ColumnIndices> {
    let find = |column: Column| column.find(header).ok_or(Error::MissingColumn(column));
    Ok(ColumnIndices {
        lot_info: find(Column::LotInfo)?,
        link: find(Column::Link)?,
    })
}
