//! Behavioral tests for document normalization.

use svr_model::{FlattenedRow, Issue, RawDocument, RawObservation, RawPredictor};
use svr_normalize::{NormalizeError, StructureError, normalize};
use svr_validate::{FeatureRule, NumericValidator, ValidationRules};

fn observation(criterion: &str, values: &[(&str, &str)]) -> RawObservation {
    RawObservation::new(criterion, values.iter().copied())
}

#[test]
fn two_observations_with_three_features() {
    let document = RawDocument::new(vec![
        observation("A", &[("x1", "1"), ("x2", "2.5"), ("x3", "-3")]),
        observation("B", &[("x1", "4"), ("x2", "5e-1"), ("x3", "6")]),
    ]);

    let dataset = normalize(&document, &NumericValidator::default()).unwrap();

    assert_eq!(dataset.row_count(), 6);
    assert_eq!(dataset.dependent_labels(), ["A", "B"]);
    assert_eq!(dataset.feature_count(), Some(3));
    assert_eq!(dataset.rows()[0], FlattenedRow::new("A", "x1", "1"));
    assert_eq!(dataset.rows()[4], FlattenedRow::new("B", "x2", "5e-1"));
}

#[test]
fn single_invalid_value_yields_one_issue() {
    let document = RawDocument::new(vec![observation("A", &[("x1", "1"), ("x2", "abc")])]);

    let error = normalize(&document, &NumericValidator::default()).unwrap_err();

    let NormalizeError::Validation(rejection) = &error else {
        panic!("expected validation failure, got {error:?}");
    };
    assert_eq!(
        rejection.issues,
        vec![Issue::NotNumeric {
            value: "abc".to_string()
        }]
    );
    assert_eq!(rejection.location.observation, 0);
    assert_eq!(rejection.location.predictor, 1);
    assert_eq!(rejection.location.feature, "x2");
    assert_eq!(rejection.location.dependent_label, "A");
    assert_eq!(error.issues().len(), 1);
}

#[test]
fn empty_document_is_an_empty_success() {
    let dataset = normalize(&RawDocument::default(), &NumericValidator::default()).unwrap();
    assert!(dataset.rows().is_empty());
    assert!(dataset.dependent_labels().is_empty());
    assert_eq!(dataset.feature_count(), None);
}

#[test]
fn feature_count_comes_from_first_observation_only() {
    let document = RawDocument::new(vec![
        observation("A", &[("x1", "1"), ("x2", "2")]),
        observation("B", &[("x1", "3")]),
        observation("C", &[("x1", "4"), ("x2", "5"), ("x3", "6"), ("x4", "7")]),
    ]);

    let dataset = normalize(&document, &NumericValidator::default()).unwrap();

    assert_eq!(dataset.feature_count(), Some(2));
    assert_eq!(dataset.row_count(), 7);
}

#[test]
fn first_observation_without_predictors_sets_zero() {
    let document = RawDocument::new(vec![
        observation("A", &[]),
        observation("B", &[("x1", "1")]),
    ]);
    let dataset = normalize(&document, &NumericValidator::default()).unwrap();
    assert_eq!(dataset.feature_count(), Some(0));
    assert_eq!(dataset.dependent_labels(), ["A", "B"]);
}

#[test]
fn duplicate_dependent_labels_are_preserved() {
    let document = RawDocument::new(vec![
        observation("A", &[("x1", "1")]),
        observation("A", &[("x1", "2")]),
        observation("B", &[("x1", "3")]),
    ]);
    let dataset = normalize(&document, &NumericValidator::default()).unwrap();
    assert_eq!(dataset.dependent_labels(), ["A", "A", "B"]);
    assert_eq!(dataset.distinct_dependent_labels(), vec!["A", "B"]);
}

#[test]
fn invalid_value_in_last_observation_discards_everything() {
    let document = RawDocument::new(vec![
        observation("A", &[("x1", "1"), ("x2", "2")]),
        observation("B", &[("x1", "3"), ("x2", "")]),
    ]);

    let result = normalize(&document, &NumericValidator::default());

    match result {
        Err(NormalizeError::Validation(rejection)) => {
            assert_eq!(rejection.location.observation, 1);
            assert!(matches!(rejection.issues.as_slice(), [Issue::Missing { .. }]));
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[test]
fn processing_stops_at_first_rejected_value() {
    let document = RawDocument::new(vec![observation(
        "A",
        &[("x1", "bad"), ("x2", "also bad")],
    )]);
    let error = normalize(&document, &NumericValidator::default()).unwrap_err();
    assert_eq!(
        error.issues(),
        vec![Issue::NotNumeric {
            value: "bad".to_string()
        }]
    );
}

#[test]
fn multiple_reasons_for_one_value_are_kept() {
    let rules = ValidationRules::default()
        .with_feature("age", FeatureRule::integer().with_range(0.0, 120.0));
    let document = RawDocument::new(vec![observation("A", &[("age", "130.5")])]);

    let error = normalize(&document, &NumericValidator::new(rules)).unwrap_err();

    let issues = error.issues();
    assert_eq!(issues.len(), 2);
    assert!(matches!(issues[0], Issue::NotInteger { .. }));
    assert!(matches!(issues[1], Issue::AboveMaximum { .. }));
}

#[test]
fn missing_criterion_is_structural() {
    let document = RawDocument::new(vec![RawObservation {
        criterion: None,
        predictors: Some(vec![RawPredictor::new("x1", "1")]),
    }]);
    assert_eq!(
        normalize(&document, &NumericValidator::default()),
        Err(NormalizeError::Structure(StructureError::MissingCriterion {
            observation: 0
        }))
    );
}

#[test]
fn missing_predictor_list_is_structural() {
    let document = RawDocument::new(vec![
        observation("A", &[("x1", "1")]),
        RawObservation {
            criterion: Some("B".to_string()),
            predictors: None,
        },
    ]);
    let error = normalize(&document, &NumericValidator::default()).unwrap_err();
    assert!(error.is_structural());
    assert_eq!(
        error.issues(),
        vec![Issue::MissingField {
            path: "observation[1]".to_string(),
            field: "predictor".to_string(),
        }]
    );
}

#[test]
fn predictor_without_value_is_structural() {
    let document = RawDocument::new(vec![RawObservation {
        criterion: Some("A".to_string()),
        predictors: Some(vec![
            RawPredictor::new("x1", "1"),
            RawPredictor {
                label: Some("x2".to_string()),
                value: None,
            },
        ]),
    }]);
    assert_eq!(
        normalize(&document, &NumericValidator::default()),
        Err(NormalizeError::Structure(StructureError::MissingValue {
            observation: 0,
            predictor: 1
        }))
    );
}

#[test]
fn earlier_invalid_value_wins_over_later_structural_defect() {
    let document = RawDocument::new(vec![
        observation("A", &[("x1", "oops")]),
        RawObservation::default(),
    ]);
    let error = normalize(&document, &NumericValidator::default()).unwrap_err();
    assert!(!error.is_structural());
}

#[test]
fn accepted_values_are_kept_verbatim() {
    let document = RawDocument::new(vec![observation("A", &[("x1", " 1000 ")])]);
    let dataset = normalize(&document, &NumericValidator::default()).unwrap();
    assert_eq!(dataset.rows()[0].independent_value, " 1000 ");
}

#[test]
fn separator_formatted_values_are_rejected() {
    for value in ["1,5", ",,,7,,", "1 000", "1,000"] {
        let document = RawDocument::new(vec![observation("A", &[("x1", "1"), ("x2", value)])]);
        let error = normalize(&document, &NumericValidator::default()).unwrap_err();
        assert_eq!(
            error.issues(),
            vec![Issue::NotNumeric {
                value: value.to_string()
            }],
            "{value:?}"
        );
        assert_eq!(error.location().map(|l| l.predictor), Some(1));
    }
}
