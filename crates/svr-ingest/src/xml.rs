//! XML adaptation using the quick-xml pull parser.

use std::borrow::Cow;

use quick_xml::Reader;
use quick_xml::escape::unescape;
use quick_xml::events::Event;
use svr_model::{RawDocument, RawObservation, RawPredictor};

use crate::error::{IngestError, Result};
use crate::names::{CRITERION, DATASET, LABEL, OBSERVATION, PREDICTOR, VALUE};

const OBSERVATION_PATH: &[&str] = &[DATASET, OBSERVATION];
const PREDICTOR_PATH: &[&str] = &[DATASET, OBSERVATION, PREDICTOR];

/// Parse an XML observation document.
///
/// Elements other than the known ones are skipped together with their
/// content. Leaf text is entity-decoded and trimmed; an empty leaf such as
/// `<value/>` yields an empty string, while an absent leaf yields `None`.
/// Leaves hold text only: an element nested in a criterion, label or value
/// makes the document malformed.
pub fn parse_xml(source: &str) -> Result<RawDocument> {
    let mut reader = Reader::from_str(source);
    let mut adapter = XmlAdapter::default();

    loop {
        let event = reader.read_event().map_err(|err| IngestError::Xml {
            position: reader.error_position(),
            message: err.to_string(),
        })?;
        match event {
            Event::Start(element) => adapter.start(&utf8(element.local_name().as_ref())?)?,
            Event::Empty(element) => {
                adapter.start(&utf8(element.local_name().as_ref())?)?;
                adapter.end()?;
            }
            Event::End(_) => adapter.end()?,
            Event::Text(text) => {
                let raw = utf8(&text)?;
                let decoded = unescape(&raw).map_err(|err| IngestError::malformed(err.to_string()))?;
                adapter.text(&decoded);
            }
            Event::CData(data) => adapter.text(&utf8(&data)?),
            Event::GeneralRef(reference) => {
                let entity = format!("&{};", utf8(&reference)?);
                let decoded =
                    unescape(&entity).map_err(|err| IngestError::malformed(err.to_string()))?;
                adapter.text(&decoded);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    let document = adapter.finish()?;
    tracing::debug!(observations = document.len(), "parsed XML document");
    Ok(document)
}

fn utf8(bytes: &[u8]) -> Result<Cow<'_, str>> {
    std::str::from_utf8(bytes)
        .map(Cow::Borrowed)
        .map_err(|err| IngestError::malformed(format!("invalid UTF-8: {err}")))
}

/// Builds the raw document from a stream of element events.
#[derive(Default)]
struct XmlAdapter {
    path: Vec<String>,
    saw_root: bool,
    observations: Vec<RawObservation>,
    observation: Option<RawObservation>,
    predictor: Option<RawPredictor>,
    /// Text buffer of the leaf being read, with the depth it was opened at.
    leaf: Option<(usize, String)>,
}

impl XmlAdapter {
    fn at(&self, expected: &[&str]) -> bool {
        self.path.iter().map(String::as_str).eq(expected.iter().copied())
    }

    fn start(&mut self, name: &str) -> Result<()> {
        if self.leaf.is_some() {
            let parent = self.path.last().map_or("", String::as_str);
            return Err(IngestError::malformed(format!(
                "'{parent}' must contain text only, found element '{name}'"
            )));
        }
        if self.path.is_empty() {
            if self.saw_root {
                return Err(IngestError::malformed("document has more than one root element"));
            }
            if name != DATASET {
                return Err(IngestError::UnexpectedRoot {
                    expected: DATASET,
                    found: name.to_string(),
                });
            }
            self.saw_root = true;
        } else if self.at(&[DATASET]) && name == OBSERVATION {
            self.observation = Some(RawObservation::default());
        } else if self.at(OBSERVATION_PATH) && name == PREDICTOR {
            self.predictor = Some(RawPredictor::default());
        } else if (self.at(OBSERVATION_PATH) && name == CRITERION)
            || (self.at(PREDICTOR_PATH) && (name == LABEL || name == VALUE))
        {
            self.leaf = Some((self.path.len() + 1, String::new()));
        }
        self.path.push(name.to_string());
        Ok(())
    }

    fn text(&mut self, text: &str) {
        if let Some((depth, buffer)) = self.leaf.as_mut()
            && *depth == self.path.len()
        {
            buffer.push_str(text);
        }
    }

    fn end(&mut self) -> Result<()> {
        let Some(name) = self.path.pop() else {
            return Err(IngestError::malformed("unbalanced closing tag"));
        };

        if self.at(PREDICTOR_PATH) && (name == LABEL || name == VALUE) {
            let text = self.take_leaf();
            let observation_index = self.observations.len();
            let predictor_index = self
                .observation
                .as_ref()
                .map_or(0, RawObservation::predictor_count);
            let predictor = self.predictor.get_or_insert_with(RawPredictor::default);
            let slot = if name == LABEL {
                &mut predictor.label
            } else {
                &mut predictor.value
            };
            if slot.is_some() {
                return Err(IngestError::malformed(format!(
                    "observation[{observation_index}].predictor[{predictor_index}] has more than one '{name}'"
                )));
            }
            *slot = Some(text);
        } else if self.at(OBSERVATION_PATH) && name == CRITERION {
            let text = self.take_leaf();
            let observation_index = self.observations.len();
            let observation = self.observation.get_or_insert_with(RawObservation::default);
            if observation.criterion.is_some() {
                return Err(IngestError::malformed(format!(
                    "observation[{observation_index}] has more than one '{CRITERION}'"
                )));
            }
            observation.criterion = Some(text);
        } else if self.at(OBSERVATION_PATH) && name == PREDICTOR {
            if let Some(predictor) = self.predictor.take() {
                self.observation
                    .get_or_insert_with(RawObservation::default)
                    .predictors
                    .get_or_insert_with(Vec::new)
                    .push(predictor);
            }
        } else if self.at(&[DATASET]) && name == OBSERVATION {
            if let Some(observation) = self.observation.take() {
                self.observations.push(observation);
            }
        }
        Ok(())
    }

    fn take_leaf(&mut self) -> String {
        self.leaf
            .take()
            .map(|(_, text)| text.trim().to_string())
            .unwrap_or_default()
    }

    fn finish(self) -> Result<RawDocument> {
        if !self.saw_root {
            return Err(IngestError::malformed("document has no root element"));
        }
        if !self.path.is_empty() {
            return Err(IngestError::malformed(format!(
                "unexpected end of document inside '{}'",
                self.path.join("/")
            )));
        }
        Ok(RawDocument::new(self.observations))
    }
}
