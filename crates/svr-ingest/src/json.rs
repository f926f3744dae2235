//! JSON adaptation.
//!
//! The JSON form mirrors the XML element names, the way an XML-to-dictionary
//! conversion would lay them out. A single object is accepted wherever a
//! list of observations or predictors is expected.

use serde_json::{Map, Value};
use svr_model::{RawDocument, RawObservation, RawPredictor};

use crate::error::{IngestError, Result};
use crate::names::{CRITERION, DATASET, LABEL, OBSERVATION, PREDICTOR, VALUE};

/// Parse a JSON observation document.
pub fn parse_json(source: &str) -> Result<RawDocument> {
    let root: Value = serde_json::from_str(source)?;
    let Value::Object(mut root) = root else {
        return Err(IngestError::malformed("document root must be an object"));
    };
    let Some(dataset) = root.remove(DATASET) else {
        return Err(IngestError::UnexpectedRoot {
            expected: DATASET,
            found: root.keys().next().cloned().unwrap_or_default(),
        });
    };

    let observations = match dataset {
        Value::Null => Vec::new(),
        Value::Object(mut dataset) => match dataset.remove(OBSERVATION) {
            None | Some(Value::Null) => Vec::new(),
            Some(entries) => one_or_many(entries)
                .into_iter()
                .enumerate()
                .map(|(index, entry)| observation(index, entry))
                .collect::<Result<Vec<_>>>()?,
        },
        _ => return Err(IngestError::malformed("'dataset' must be an object")),
    };

    let document = RawDocument::new(observations);
    tracing::debug!(observations = document.len(), "parsed JSON document");
    Ok(document)
}

fn one_or_many(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        other => vec![other],
    }
}

fn observation(index: usize, entry: Value) -> Result<RawObservation> {
    let path = format!("observation[{index}]");
    let mut fields = object(&path, entry)?;

    let criterion = fields
        .remove(CRITERION)
        .map(|value| scalar(&format!("{path}.{CRITERION}"), value))
        .transpose()?;

    let predictors = match fields.remove(PREDICTOR) {
        None | Some(Value::Null) => None,
        Some(entries) => Some(
            one_or_many(entries)
                .into_iter()
                .enumerate()
                .map(|(position, entry)| predictor(&format!("{path}.{PREDICTOR}[{position}]"), entry))
                .collect::<Result<Vec<_>>>()?,
        ),
    };

    Ok(RawObservation {
        criterion,
        predictors,
    })
}

fn predictor(path: &str, entry: Value) -> Result<RawPredictor> {
    let mut fields = object(path, entry)?;
    let label = fields
        .remove(LABEL)
        .map(|value| scalar(&format!("{path}.{LABEL}"), value))
        .transpose()?;
    let value = fields
        .remove(VALUE)
        .map(|value| scalar(&format!("{path}.{VALUE}"), value))
        .transpose()?;
    Ok(RawPredictor { label, value })
}

fn object(path: &str, value: Value) -> Result<Map<String, Value>> {
    match value {
        Value::Object(fields) => Ok(fields),
        _ => Err(IngestError::malformed(format!("{path} must be an object"))),
    }
}

/// Render a JSON scalar as the raw text the validator sees.
fn scalar(path: &str, value: Value) -> Result<String> {
    match value {
        Value::String(text) => Ok(text),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        Value::Null => Ok(String::new()),
        Value::Array(_) | Value::Object(_) => Err(IngestError::malformed(format!(
            "{path} must be a scalar"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lists_and_numbers() {
        let document = parse_json(
            r#"{"dataset": {"observation": [
                {"criterion": "A", "predictor": [{"label": "x1", "value": 1.5}, {"label": "x2", "value": "2"}]},
                {"criterion": "B", "predictor": {"label": "x1", "value": 3}}
            ]}}"#,
        )
        .unwrap();
        assert_eq!(
            document,
            RawDocument::new(vec![
                RawObservation::new("A", [("x1", "1.5"), ("x2", "2")]),
                RawObservation::new("B", [("x1", "3")]),
            ])
        );
    }

    #[test]
    fn empty_dataset_forms() {
        assert!(parse_json(r#"{"dataset": null}"#).unwrap().is_empty());
        assert!(parse_json(r#"{"dataset": {}}"#).unwrap().is_empty());
        assert!(parse_json(r#"{"dataset": {"observation": []}}"#).unwrap().is_empty());
    }

    #[test]
    fn null_value_is_empty_text() {
        let document = parse_json(
            r#"{"dataset": {"observation": {"criterion": "A", "predictor": [{"label": "x", "value": null}]}}}"#,
        )
        .unwrap();
        let predictor = &document.observations[0].predictors.as_ref().unwrap()[0];
        assert_eq!(predictor.value.as_deref(), Some(""));
    }

    #[test]
    fn absent_keys_stay_none() {
        let document =
            parse_json(r#"{"dataset": {"observation": [{"predictor": [{"value": "1"}]}]}}"#)
                .unwrap();
        let observation = &document.observations[0];
        assert_eq!(observation.criterion, None);
        assert_eq!(observation.predictors.as_ref().unwrap()[0].label, None);
    }

    #[test]
    fn rejects_missing_dataset_key() {
        let result = parse_json(r#"{"rows": []}"#);
        assert!(matches!(
            result,
            Err(IngestError::UnexpectedRoot { found, .. }) if found == "rows"
        ));
    }

    #[test]
    fn rejects_nested_value() {
        let err = parse_json(
            r#"{"dataset": {"observation": [{"criterion": "A", "predictor": [{"label": "x", "value": [1]}]}]}}"#,
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "malformed document: observation[0].predictor[0].value must be a scalar"
        );
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(matches!(parse_json("{"), Err(IngestError::Json(_))));
    }
}
