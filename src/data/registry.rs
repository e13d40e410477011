// ============================================================
// Layer 4 — Dataset Registry
// ============================================================
// Every checking dataset shares the loader, filter and builder;
// they differ only in where their annotations live and the tag
// stamped on each record. The registry maps a name to that pair.
//
// Annotation paths are relative to a data root chosen at run
// time (--data-root, default ".").

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("unknown dataset '{name}' (known: {known})")]
    UnknownDataset { name: String, known: String },
}

/// Where one dataset's annotations live and how its records are tagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetSpec {
    pub name:      &'static str,
    pub anno_path: &'static str,
    pub source:    &'static str,
}

impl DatasetSpec {
    /// A spec whose source tag is its name
    pub const fn named(name: &'static str, anno_path: &'static str) -> Self {
        Self { name, anno_path, source: name }
    }

    /// Annotation path joined onto `data_root`
    pub fn resolve(&self, data_root: &Path) -> PathBuf {
        data_root.join(self.anno_path)
    }
}

const BUILTIN: &[DatasetSpec] = &[
    DatasetSpec::named("qvhighlights_check_2b", "data/checking/checking_qvhighlights_2b.json"),
    DatasetSpec::named("didemo_check_2b",       "data/verifying/verifying_didemo_2b.json"),
    DatasetSpec::named("tacos_check_2b",        "data/verifying/verifying_tacos_2b.json"),
    DatasetSpec::named("qvhighlights_check_7b", "data/verifying/verifying_qvhighlights_7b.json"),
    DatasetSpec::named("didemo_check_7b",       "data/verifying/verifying_didemo_7b.json"),
    DatasetSpec::named("tacos_check_7b",        "data/verifying/verifying_tacos_7b.json"),
];

/// Name → DatasetSpec lookup, in registration order.
#[derive(Debug, Clone)]
pub struct DatasetRegistry {
    specs: Vec<DatasetSpec>,
}

impl DatasetRegistry {
    pub fn builtin() -> Self {
        Self { specs: BUILTIN.to_vec() }
    }

    pub fn get(&self, name: &str) -> Result<&DatasetSpec, RegistryError> {
        self.specs
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| RegistryError::UnknownDataset {
                name:  name.to_string(),
                known: self.names().join(", "),
            })
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.specs.iter().map(|s| s.name).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DatasetSpec> {
        self.specs.iter()
    }
}

impl Default for DatasetRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
