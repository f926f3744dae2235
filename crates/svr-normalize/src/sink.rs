//! Destination for finished datasets.

use std::convert::Infallible;

use svr_model::NormalizedDataset;

/// Receives finished datasets (persistence, export, model fitting).
///
/// Sinks only ever see complete datasets; a rejected document never
/// reaches one.
pub trait DatasetSink {
    type Error: std::error::Error + Send + Sync + 'static;

    fn store(&mut self, dataset: &NormalizedDataset) -> Result<(), Self::Error>;
}

/// Keeps datasets in memory.
impl DatasetSink for Vec<NormalizedDataset> {
    type Error = Infallible;

    fn store(&mut self, dataset: &NormalizedDataset) -> Result<(), Self::Error> {
        self.push(dataset.clone());
        Ok(())
    }
}

impl<S: DatasetSink + ?Sized> DatasetSink for &mut S {
    type Error = S::Error;

    fn store(&mut self, dataset: &NormalizedDataset) -> Result<(), Self::Error> {
        (**self).store(dataset)
    }
}
