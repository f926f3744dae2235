//! Polars conversion.

use polars::prelude::*;
use svr_model::NormalizedDataset;

use crate::csv::CSV_HEADER;

/// Build a three-column string frame with one row per flattened row.
///
/// Column names match [`CSV_HEADER`]; rows keep traversal order.
pub fn to_dataframe(dataset: &NormalizedDataset) -> PolarsResult<DataFrame> {
    let rows = dataset.rows();
    let dependent: Vec<&str> = rows.iter().map(|r| r.dependent_label.as_str()).collect();
    let independent: Vec<&str> = rows.iter().map(|r| r.independent_label.as_str()).collect();
    let values: Vec<&str> = rows.iter().map(|r| r.independent_value.as_str()).collect();

    let [dependent_name, independent_name, value_name] = CSV_HEADER;
    DataFrame::new(vec![
        Series::new(dependent_name.into(), dependent).into_column(),
        Series::new(independent_name.into(), independent).into_column(),
        Series::new(value_name.into(), values).into_column(),
    ])
}

#[cfg(test)]
mod tests {
    use svr_model::FlattenedRow;

    use super::*;

    #[test]
    fn frame_keeps_row_order() {
        let dataset = NormalizedDataset::new(
            vec![
                FlattenedRow::new("A", "x1", "1"),
                FlattenedRow::new("B", "x1", "3"),
            ],
            vec!["A".to_string(), "B".to_string()],
            Some(1),
        );
        let df = to_dataframe(&dataset).unwrap();
        assert_eq!(df.shape(), (2, 3));
        let labels = df.column("dependent_label").unwrap().str().unwrap();
        assert_eq!(labels.get(0), Some("A"));
        assert_eq!(labels.get(1), Some("B"));
        let values = df.column("independent_value").unwrap().str().unwrap();
        assert_eq!(values.get(1), Some("3"));
    }

    #[test]
    fn empty_dataset_gives_empty_frame() {
        let df = to_dataframe(&NormalizedDataset::default()).unwrap();
        assert_eq!(df.shape(), (0, 3));
    }
}
