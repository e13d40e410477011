use burn::data::dataset::Dataset;
use std::path::Path;

use crate::data::builder::{BuildError, CheckWindow, ExampleBuilder};
use crate::data::filter::LengthFilter;
use crate::data::loader::{self, JsonAnnotationLoader, LoadError, TRAIN_SPLIT};
use crate::data::registry::DatasetSpec;
use crate::domain::annotation::CheckingRecord;
use crate::domain::conversation::{SamplingConfig, TrainingExample};
use crate::domain::traits::AnnotationSource;

/// Checking records of one source after length filtering.
/// Examples are built on every access and never cached.
///
/// The burn `Dataset` view skips records whose context window is
/// rejected, so `get` is total over `0..len()`.
pub struct CheckingDataset {
    source:     String,
    annos:      Vec<CheckingRecord>,
    /// Indices into `annos` whose window can be built
    buildable:  Vec<usize>,
    raw_length: usize,
    builder:    ExampleBuilder,
}

impl CheckingDataset {
    /// Load a registered dataset from disk.
    pub fn open(
        spec:      &DatasetSpec,
        data_root: &Path,
        filter:    &LengthFilter,
        sampling:  SamplingConfig,
    ) -> Result<Self, LoadError> {
        let annotations = JsonAnnotationLoader::new(spec.resolve(data_root));
        Self::from_source(&annotations, spec.source, filter, sampling)
    }

    pub fn from_source<S>(
        annotations: &S,
        source:      &str,
        filter:      &LengthFilter,
        sampling:    SamplingConfig,
    ) -> Result<Self, LoadError>
    where
        S: AnnotationSource,
        LoadError: From<S::Error>,
    {
        let raw_annos  = loader::load(annotations, source, TRAIN_SPLIT)?;
        let raw_length = raw_annos.len();
        let annos      = filter.apply(raw_annos);

        tracing::info!("[{}] kept {} of {} checking records", source, annos.len(), raw_length);

        let mut buildable = Vec::with_capacity(annos.len());
        for (i, record) in annos.iter().enumerate() {
            match CheckWindow::for_record(record) {
                Ok(_) => buildable.push(i),
                Err(e) => tracing::warn!("[{}] skipping record {}: {}", source, i, e),
            }
        }

        Ok(Self {
            source: source.to_string(),
            annos,
            buildable,
            raw_length,
            builder: ExampleBuilder::new(sampling),
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Number of checking records before length filtering
    pub fn raw_length(&self) -> usize {
        self.raw_length
    }

    pub fn records(&self) -> &[CheckingRecord] {
        &self.annos
    }

    /// Number of kept records whose context window is rejected
    pub fn rejected(&self) -> usize {
        self.annos.len() - self.buildable.len()
    }

    /// Build the example at `index`; None when out of range.
    pub fn example(&self, index: usize) -> Option<Result<TrainingExample, BuildError>> {
        self.annos.get(index).map(|r| self.builder.build(r))
    }
}

impl Dataset<TrainingExample> for CheckingDataset {
    fn get(&self, index: usize) -> Option<TrainingExample> {
        let record = *self.buildable.get(index)?;
        self.example(record)?.ok()
    }

    fn len(&self) -> usize {
        self.buildable.len()
    }
}
