use super::header::ColumnIndices;
use super::model::{LotInfo, LotPoint};
use crate::sheets::Row;
use tracing::warn;

/// Sheet row number of the first data row, the header takes row 1.
pub const FIRST_DATA_ROW: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    MalformedJson(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    /// 1-based row number as shown in the sheet
    pub row: usize,
    pub reason: SkipReason,
}

#[derive(Debug, Default, PartialEq)]
pub struct Projection {
    pub points: Vec<LotPoint>,
    pub skipped: Vec<SkippedRow>,
}

/// Turns data rows into lot points, keeping row order.
///
/// Rows without lot info or without coordinates are dropped silently.
/// Rows with undecodable lot info are dropped and reported in `skipped`,
/// they never affect the rows around them.
pub fn project_rows(rows: &[Row], columns: ColumnIndices) -> Projection {
    rows.iter()
        .enumerate()
        .fold(Projection::default(), |mut res, (index, row)| {
            match project_row(row, columns) {
                Ok(Some(point)) => res.points.push(point),
                Ok(None) => {}
                Err(e) => {
                    let row = index + FIRST_DATA_ROW;
                    warn!(row, error = %e, "Failed to parse lot info, skipping row");
                    res.skipped.push(SkippedRow {
                        row,
                        reason: SkipReason::MalformedJson(e.to_string()),
                    });
                }
            }
            res
        })
}

fn project_row(row: &Row, columns: ColumnIndices) -> Result<Option<LotPoint>, serde_json::Error> {
    if row.is_empty() {
        return Ok(None);
    }
    let lot_info = row.text(columns.lot_info);
    if lot_info.is_empty() {
        return Ok(None);
    }
    let link = row.text(columns.link);
    let lot_info = LotInfo::from_json(lot_info)?;
    if !lot_info.point.has_coordinates() {
        return Ok(None);
    }
    Ok(Some(LotPoint::new(lot_info, link)))
}

#[cfg(test)]
mod test {
    use super::{project_rows, Projection, SkipReason, SkippedRow};
    use crate::lot::{ColumnIndices, LotPoint};
    use crate::sheets::{Cell, Row};
    use crate::test::{lot_info, row};
    use pretty_assertions::assert_eq;

    const COLUMNS: ColumnIndices = ColumnIndices {
        lot_info: 0,
        link: 1,
    };

    #[test]
    fn single_point() {
        let rows = vec![row(&[
            r#"{"point":{"lat":55.7,"lon":37.6},"lotName":"A","lotDescription":"d"}"#,
            "http://x",
        ])];
        let res = project_rows(&rows, COLUMNS);
        assert_eq!(
            vec![LotPoint {
                lat: 55.7,
                lon: 37.6,
                lot_name: "A".into(),
                lot_description: "d".into(),
                link: "http://x".into(),
            }],
            res.points,
        );
        assert!(res.skipped.is_empty());
    }

    #[test]
    fn empty_rows_are_skipped() {
        let rows = vec![Row::default(), row(&[&lot_info(1.0, 2.0, "A"), ""])];
        let res = project_rows(&rows, COLUMNS);
        assert_eq!(1, res.points.len());
        assert!(res.skipped.is_empty());
    }

    #[test]
    fn empty_lot_info_is_skipped_regardless_of_link() {
        let rows = vec![row(&["", "http://x"]), row(&["", ""])];
        let res = project_rows(&rows, COLUMNS);
        assert_eq!(Projection::default(), res);
    }

    #[test]
    fn zero_coordinates_are_skipped_silently() {
        let rows = vec![
            row(&[&lot_info(0.0, 0.0, "A"), "http://x"]),
            row(&[r#"{"lotName":"B"}"#, "http://y"]),
        ];
        let res = project_rows(&rows, COLUMNS);
        assert_eq!(Projection::default(), res);
    }

    #[test]
    fn malformed_row_does_not_affect_others() {
        let rows = vec![
            row(&[&lot_info(1.0, 1.0, "A"), "a"]),
            row(&["{not json", "b"]),
            row(&[&lot_info(3.0, 3.0, "C"), "c"]),
        ];
        let res = project_rows(&rows, COLUMNS);
        let names: Vec<&str> = res.points.iter().map(|it| it.lot_name.as_str()).collect();
        assert_eq!(vec!["A", "C"], names);
        assert_eq!(1, res.skipped.len());
        assert_eq!(3, res.skipped[0].row);
        assert!(matches!(res.skipped[0].reason, SkipReason::MalformedJson(_)));
    }

    #[test]
    fn wrong_json_type_is_malformed() {
        let rows = vec![row(&[r#"{"point":{"lat":"55.7","lon":37.6}}"#, ""])];
        let res = project_rows(&rows, COLUMNS);
        assert!(res.points.is_empty());
        assert_eq!(
            vec![2],
            res.skipped.iter().map(|it: &SkippedRow| it.row).collect::<Vec<_>>(),
        );
    }

    #[test]
    fn null_description_is_kept() {
        let rows = vec![row(&[
            r#"{"point":{"lat":55.7,"lon":37.6},"lotName":"A","lotDescription":null}"#,
            "http://x",
        ])];
        let res = project_rows(&rows, COLUMNS);
        assert_eq!(
            vec![LotPoint {
                lat: 55.7,
                lon: 37.6,
                lot_name: "A".into(),
                lot_description: "".into(),
                link: "http://x".into(),
            }],
            res.points,
        );
        assert!(res.skipped.is_empty());
    }

    #[test]
    fn capitalized_keys_are_kept() {
        let rows = vec![row(&[r#"{"Point":{"Lat":55.7,"Lon":37.6},"LotName":"A"}"#, ""])];
        let res = project_rows(&rows, COLUMNS);
        assert_eq!(1, res.points.len());
        assert_eq!(55.7, res.points[0].lat);
        assert_eq!(37.6, res.points[0].lon);
        assert_eq!("A", res.points[0].lot_name);
    }

    #[test]
    fn null_lot_info_is_skipped_silently() {
        let rows = vec![row(&["null", "http://x"]), row(&[r#"{"point":null}"#, ""])];
        let res = project_rows(&rows, COLUMNS);
        assert_eq!(Projection::default(), res);
    }

    #[test]
    fn order_is_preserved() {
        let rows: Vec<Row> = (1..=5)
            .rev()
            .map(|i| row(&[&lot_info(i as f64, i as f64, &i.to_string()), ""]))
            .collect();
        let res = project_rows(&rows, COLUMNS);
        let names: Vec<&str> = res.points.iter().map(|it| it.lot_name.as_str()).collect();
        assert_eq!(vec!["5", "4", "3", "2", "1"], names);
    }

    #[test]
    fn short_row_without_link() {
        let rows = vec![row(&[&lot_info(1.0, 2.0, "A")])];
        let res = project_rows(&rows, COLUMNS);
        assert_eq!("", res.points[0].link);
    }

    #[test]
    fn lot_info_column_past_row_end() {
        let columns = ColumnIndices {
            lot_info: 3,
            link: 0,
        };
        let rows = vec![row(&["http://x"])];
        let res = project_rows(&rows, columns);
        assert_eq!(Projection::default(), res);
    }

    #[test]
    fn non_string_cells_read_as_empty() {
        let rows = vec![
            Row::new(vec![Cell::Number(5.0), Cell::String("http://x".into())]),
            Row::new(vec![
                Cell::String(lot_info(1.0, 2.0, "A")),
                Cell::Boolean(true),
            ]),
        ];
        let res = project_rows(&rows, COLUMNS);
        assert_eq!(1, res.points.len());
        assert_eq!("", res.points[0].link);
    }
}
