//! Configuration file access
//!
//! Reads single configuration files and scans corpus directories for them.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::domain::entities::Configuration;
use crate::error::{FmError, FmResult};

/// Extension marking a configuration file
pub const CONFIG_EXTENSION: &str = "config";

/// Default number of directory levels descended below the corpus root
pub const DEFAULT_MAX_DEPTH: usize = 4;

/// Reads the active configuration
pub fn read_configuration(path: &Path) -> FmResult<Configuration> {
    if !path.is_file() {
        return Err(FmError::MissingConfigFile {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path)?;
    Ok(Configuration::from_content(path, &content))
}

/// Collects configuration files below `dir`.
///
/// Files directly inside a directory are always collected; sub-directories
/// are entered only while `max_depth > 0`. A `.config` file passed as `dir`
/// is returned on its own; anything else that is not a directory yields an
/// empty list. Entries are visited in file-name order.
pub fn collect_configs(dir: &Path, max_depth: usize) -> FmResult<Vec<PathBuf>> {
    let mut found = Vec::new();
    if dir.is_dir() {
        collect_into(dir, max_depth, &mut found)?;
    } else if is_config_file(dir) {
        found.push(dir.to_path_buf());
    }
    debug!(dir = %dir.display(), max_depth, files = found.len(), "Collected configuration files");
    Ok(found)
}

fn collect_into(dir: &Path, max_depth: usize, found: &mut Vec<PathBuf>) -> FmResult<()> {
    let mut entries: Vec<PathBuf> = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<_, _>>()?;
    entries.sort();

    for path in entries {
        if path.is_dir() {
            if max_depth > 0 {
                collect_into(&path, max_depth - 1, found)?;
            } else {
                trace!(dir = %path.display(), "Depth exhausted, not descending");
            }
        } else if is_config_file(&path) {
            found.push(path);
        }
    }
    Ok(())
}

fn is_config_file(path: &Path) -> bool {
    path.is_file() && path.extension().map(|e| e == CONFIG_EXTENSION).unwrap_or(false)
}

/// Reads every file of a corpus
pub fn read_corpus(paths: &[PathBuf]) -> FmResult<Vec<Configuration>> {
    paths
        .iter()
        .map(|path| -> FmResult<Configuration> {
            let content = fs::read_to_string(path)?;
            Ok(Configuration::from_content(path, &content))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn touch(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn names(paths: &[PathBuf], root: &Path) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn collects_config_files_in_name_order() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("b.config"), "X");
        touch(&dir.path().join("a.config"), "X");
        touch(&dir.path().join("notes.txt"), "X");
        touch(&dir.path().join("sub/c.config"), "X");

        let found = collect_configs(dir.path(), DEFAULT_MAX_DEPTH).unwrap();
        assert_eq!(names(&found, dir.path()), vec!["a.config", "b.config", "sub/c.config"]);
    }

    #[test]
    fn zero_depth_does_not_descend() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("nested/a.config"), "X");
        touch(&dir.path().join("other/deeper/b.config"), "X");

        assert!(collect_configs(dir.path(), 0).unwrap().is_empty());
    }

    #[test]
    fn depth_bounds_descent() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("top.config"), "X");
        touch(&dir.path().join("l1/one.config"), "X");
        touch(&dir.path().join("l1/l2/two.config"), "X");

        let found = collect_configs(dir.path(), 1).unwrap();
        assert_eq!(names(&found, dir.path()), vec!["l1/one.config", "top.config"]);
    }

    #[test]
    fn single_config_file_is_its_own_corpus() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("only.config");
        touch(&file, "X");
        assert_eq!(collect_configs(&file, 0).unwrap(), vec![file]);

        let other = dir.path().join("model.xml");
        touch(&other, "<x/>");
        assert!(collect_configs(&other, 4).unwrap().is_empty());
    }

    #[test]
    fn missing_directory_is_an_empty_corpus() {
        let dir = tempdir().unwrap();
        assert!(collect_configs(&dir.path().join("absent"), 4).unwrap().is_empty());
    }

    #[test]
    fn read_configuration_reports_missing_file() {
        let dir = tempdir().unwrap();
        let err = read_configuration(&dir.path().join("a.config")).unwrap_err();
        assert!(matches!(err, FmError::MissingConfigFile { .. }));
    }

    #[test]
    fn read_corpus_reads_every_file() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("a.config"), "X\nY\n");
        touch(&dir.path().join("b.config"), "X\n");
        let paths = collect_configs(dir.path(), 0).unwrap();
        let corpus = read_corpus(&paths).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus[0].lines(), &["X", "Y"]);
    }
}
