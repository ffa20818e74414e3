use super::header::resolve_columns;
use super::projector::{project_rows, Projection, FIRST_DATA_ROW};
use crate::sheets::SheetSource;
use crate::Result;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Last sheet row we ever read. Anything below it is silently left out.
pub const MAX_ROW: usize = 10000;

pub struct LotService {
    source: Arc<dyn SheetSource>,
    sheet_name: String,
}

impl LotService {
    pub fn new(source: Arc<dyn SheetSource>, sheet_name: impl Into<String>) -> Self {
        LotService {
            source,
            sheet_name: sheet_name.into(),
        }
    }

    pub fn header_range(&self) -> String {
        format!("{}!1:1", self.sheet_name)
    }

    pub fn data_range(&self) -> String {
        format!("{}!{FIRST_DATA_ROW}:{MAX_ROW}", self.sheet_name)
    }

    /// Reads the header row, then the data rows, and projects them into points.
    ///
    /// Fails with `Error::MissingColumn` before reading any data if the header
    /// lacks a required column. Any other error means the sheet couldn't be read.
    pub async fn points(&self) -> Result<Projection> {
        let header_range = self.header_range();
        let header = self
            .source
            .read_range(&header_range)
            .await
            .inspect_err(|e| {
                error!(range = %header_range, error = %e, "Failed to read sheet header")
            })?
            .into_iter()
            .next()
            .unwrap_or_default();

        let columns = resolve_columns(&header).inspect_err(|e| {
            error!(error = %e, "Required column is missing from sheet header")
        })?;

        let data_range = self.data_range();
        let rows = self
            .source
            .read_range(&data_range)
            .await
            .inspect_err(|e| {
                error!(range = %data_range, error = %e, "Failed to read sheet data")
            })?;

        if rows.len() > MAX_ROW - FIRST_DATA_ROW {
            warn!(
                rows = rows.len(),
                max_row = MAX_ROW,
                "Row limit reached, lots below it are not returned",
            );
        }

        let projection = project_rows(&rows, columns);
        info!(
            points = projection.points.len(),
            skipped = projection.skipped.len(),
            "Projected lot points",
        );
        Ok(projection)
    }
}
