//! Loading gazetteers from a directory of label files.
//!
//! Each `*.txt` file contributes one label (the file stem) and one entry per
//! non-blank line, so `res/ner/COUNTRY.txt` containing `South Korea` yields the
//! entry `("South Korea", "COUNTRY")`.

use super::{Gazetteer, GazetteerBuilder};
use crate::{GazetagError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

impl Gazetteer {
    /// Load every `*.txt` file in `dir`, in file-name order.
    pub fn load_dir(dir: impl AsRef<Path>, case_insensitive: bool) -> Result<Self> {
        let dir = dir.as_ref();
        let files = label_files(dir)?;

        let mut builder = GazetteerBuilder::new().case_insensitive(case_insensitive);
        for path in &files {
            let label = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .ok_or_else(|| {
                    GazetagError::Gazetteer(format!(
                        "Gazetteer file name is not valid UTF-8: {}",
                        path.display()
                    ))
                })?;

            let content = fs::read_to_string(path).map_err(|e| GazetagError::io(path, e))?;
            let added = content
                .lines()
                .filter(|line| builder.insert(line, label))
                .count();

            debug!(file = %path.display(), label, entries = added, "read gazetteer file");
        }

        let gazetteer = builder.build()?;
        if gazetteer.is_empty() {
            warn!(dir = %dir.display(), "No gazetteer entries found");
        } else {
            info!(
                dir = %dir.display(),
                files = files.len(),
                entries = gazetteer.len(),
                "Loaded gazetteer"
            );
        }

        Ok(gazetteer)
    }
}

fn label_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir).map_err(|e| GazetagError::io(dir, e))? {
        let path = entry.map_err(|e| GazetagError::io(dir, e))?.path();
        if path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some("txt") {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}
