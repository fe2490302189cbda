use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};

use crate::helper::error::Result;
use crate::helper::subsample_dict::{MinCountStore, SubsampleDict};

pub const GENE_DICT_PREFIX: &str = "GENE_SUB_DICT_";
pub const GROUP_DICT_PREFIX: &str = "SUB_DICT_";

/// Scope of one subsample dictionary.
///
/// `Group` normalizes whole files of a group against each other; `Gene` normalizes
/// each gene separately within a group and sub-region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Namespace {
    Group { group: String },
    Gene { group: String, region: String },
}

impl Namespace {
    pub fn new(group: &str, region: Option<&str>) -> Self {
        match region {
            Some(region) => Namespace::Gene {
                group: group.to_string(),
                region: region.to_string(),
            },
            None => Namespace::Group {
                group: group.to_string(),
            },
        }
    }

    pub fn is_gene_mode(&self) -> bool {
        matches!(self, Namespace::Gene { .. })
    }

    pub fn dict_name(&self) -> String {
        match self {
            Namespace::Group { group } => format!("{}{}", GROUP_DICT_PREFIX, group),
            Namespace::Gene { group, region } => {
                format!("{}{}_{}", GENE_DICT_PREFIX, group, region)
            }
        }
    }

    pub fn dict_dir(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(self.dict_name())
    }

    /// Opens the namespace dictionary, creating its directory on first use.
    pub fn open(&self, base_dir: &Path) -> Result<SubsampleDict> {
        let dir = self.dict_dir(base_dir);
        fs::create_dir_all(&dir)?;
        SubsampleDict::open(&self.dict_name(), &dir)
    }

    /// Opens the dictionary and drops whatever a previous scan left in it.
    pub fn open_cleared(&self, base_dir: &Path) -> Result<SubsampleDict> {
        let mut dict = self.open(base_dir)?;
        dict.clear()?;
        Ok(dict)
    }
}

impl Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Namespace::Group { group } => write!(f, "group {}", group),
            Namespace::Gene { group, region } => write!(f, "group {} / region {}", group, region),
        }
    }
}
