//! Content digest for normalized datasets.

use sha2::{Digest, Sha256};
use svr_model::NormalizedDataset;

/// SHA-256 over the feature count, dependent labels and rows, hex encoded.
///
/// Every string is length-prefixed, so field boundaries cannot shift
/// between datasets. Identical datasets always produce identical digests.
pub fn dataset_digest(dataset: &NormalizedDataset) -> String {
    let mut hasher = Sha256::new();

    match dataset.feature_count() {
        Some(count) => {
            hasher.update([1u8]);
            hasher.update((count as u64).to_le_bytes());
        }
        None => hasher.update([0u8]),
    }

    let labels = dataset.dependent_labels();
    hasher.update((labels.len() as u64).to_le_bytes());
    for label in labels {
        update_str(&mut hasher, label);
    }

    let rows = dataset.rows();
    hasher.update((rows.len() as u64).to_le_bytes());
    for row in rows {
        update_str(&mut hasher, &row.dependent_label);
        update_str(&mut hasher, &row.independent_label);
        update_str(&mut hasher, &row.independent_value);
    }

    hex::encode(hasher.finalize())
}

fn update_str(hasher: &mut Sha256, value: &str) {
    hasher.update((value.len() as u64).to_le_bytes());
    hasher.update(value.as_bytes());
}

#[cfg(test)]
mod tests {
    use svr_model::FlattenedRow;

    use super::*;

    fn sample() -> NormalizedDataset {
        NormalizedDataset::new(
            vec![
                FlattenedRow::new("A", "x1", "1"),
                FlattenedRow::new("A", "x2", "2"),
            ],
            vec!["A".to_string()],
            Some(2),
        )
    }

    #[test]
    fn known_digest() {
        assert_eq!(
            dataset_digest(&sample()),
            "222493ea0e9305d65336697724b4ede2cce7bc0a5b23c069eaff521a095e944b"
        );
        assert_eq!(
            dataset_digest(&NormalizedDataset::default()),
            "0a88111852095cae045340ea1f0b279944b2a756a213d9b50107d7489771e159"
        );
    }

    #[test]
    fn field_boundaries_matter() {
        let left = NormalizedDataset::new(
            vec![FlattenedRow::new("A", "x1", "12")],
            vec!["A".to_string()],
            Some(1),
        );
        let right = NormalizedDataset::new(
            vec![FlattenedRow::new("A", "x11", "2")],
            vec!["A".to_string()],
            Some(1),
        );
        assert_ne!(dataset_digest(&left), dataset_digest(&right));
    }
}
