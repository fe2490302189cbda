use std::collections::{BTreeMap, HashMap};
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::helper::error::{Result, SubsampleError};

/// Minimum read counts shared between the scan and draw steps.
pub trait MinCountStore {
    fn clear(&mut self) -> Result<()>;
    fn store(&mut self, key: &str, value: u64) -> Result<()>;
    /// A missing key means the scan step never ran for it.
    fn fetch(&self, key: &str) -> Result<u64>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct DictEntry {
    key: String,
    value: u64,
}

/// Disk-backed dictionary living in a namespace directory.
///
/// Entries are appended to `{dir}/{name}.jsonl` as they are stored, so a dictionary
/// reopened by a later process sees everything written before. On load the last
/// write of a key wins.
#[derive(Debug)]
pub struct SubsampleDict {
    name: String,
    path: PathBuf,
    entries: HashMap<String, u64>,
}

impl SubsampleDict {
    pub fn open(name: &str, dir: &Path) -> Result<Self> {
        let path = dir.join(format!("{}.jsonl", name));
        let mut entries = HashMap::new();

        if path.exists() {
            let reader = BufReader::new(File::open(&path)?);
            for line in reader.lines() {
                let line = line?;
                if line.is_empty() {
                    continue;
                }
                let entry: DictEntry = serde_json::from_str(&line)?;
                entries.insert(entry.key, entry.value);
            }
        }

        Ok(SubsampleDict {
            name: name.to_string(),
            path,
            entries,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All entries, sorted by key.
    pub fn entries(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self
            .entries
            .iter()
            .map(|(k, v)| (k.as_str(), *v))
            .collect();
        entries.sort_unstable();
        entries
    }
}

impl MinCountStore for SubsampleDict {
    fn clear(&mut self) -> Result<()> {
        File::create(&self.path)?;
        self.entries.clear();
        Ok(())
    }

    fn store(&mut self, key: &str, value: u64) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let entry = DictEntry {
            key: key.to_string(),
            value,
        };
        writeln!(file, "{}", serde_json::to_string(&entry)?)?;
        file.flush()?;
        self.entries.insert(entry.key, value);
        Ok(())
    }

    fn fetch(&self, key: &str) -> Result<u64> {
        self.entries
            .get(key)
            .copied()
            .ok_or_else(|| SubsampleError::MissingMinimum {
                namespace: self.name.clone(),
                key: key.to_string(),
            })
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

impl MinCountStore for BTreeMap<String, u64> {
    fn clear(&mut self) -> Result<()> {
        BTreeMap::clear(self);
        Ok(())
    }

    fn store(&mut self, key: &str, value: u64) -> Result<()> {
        self.insert(key.to_string(), value);
        Ok(())
    }

    fn fetch(&self, key: &str) -> Result<u64> {
        self.get(key)
            .copied()
            .ok_or_else(|| SubsampleError::MissingMinimum {
                namespace: "in-memory".to_string(),
                key: key.to_string(),
            })
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
}

/// Deletes everything inside `dir`, keeping `dir` itself.
pub fn clear_directory(dir: &Path) -> Result<()> {
    if !dir.exists() {
        return Ok(());
    }
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() && !path.is_symlink() {
            fs::remove_dir_all(&path)?;
        } else {
            fs::remove_file(&path)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut dict = SubsampleDict::open("GENE_SUB_DICT_A_exon", dir.path()).unwrap();
            dict.store("geneX", 6).unwrap();
            dict.store("geneY", 3).unwrap();
            dict.store("geneX", 4).unwrap();
        }

        let dict = SubsampleDict::open("GENE_SUB_DICT_A_exon", dir.path()).unwrap();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.fetch("geneX").unwrap(), 4);
        assert_eq!(dict.entries(), vec![("geneX", 4), ("geneY", 3)]);
    }

    #[test]
    fn test_clear_drops_entries_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let mut dict = SubsampleDict::open("SUB_DICT_A", dir.path()).unwrap();
        dict.store("A", 10).unwrap();
        dict.clear().unwrap();
        assert!(dict.is_empty());

        let dict = SubsampleDict::open("SUB_DICT_A", dir.path()).unwrap();
        assert!(dict.is_empty());
    }

    #[test]
    fn test_fetch_missing_key() {
        let dir = tempfile::tempdir().unwrap();
        let dict = SubsampleDict::open("SUB_DICT_A", dir.path()).unwrap();
        let err = dict.fetch("geneZ").unwrap_err();
        assert_eq!(
            err.to_string(),
            "No minimum stored for key 'geneZ' in SUB_DICT_A, run the scan step first"
        );
    }

    #[test]
    fn test_clear_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("nested/deeper")).unwrap();
        fs::write(dir.path().join("a.jsonl"), "{}").unwrap();
        fs::write(dir.path().join("nested/b.txt"), "b").unwrap();

        clear_directory(dir.path()).unwrap();

        assert!(dir.path().exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
