use crate::round::{RoundGenerator, CATEGORIES};
use log::*;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, thiserror::Error)]
pub enum CategoryError {
    #[error("Could not walk category directory: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid category list in {path}: {source}")]
    Ron {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

/// Load extra categories from `.ron` and `.lines` files below `dir`
///
/// A `.ron` file holds a list of strings, a `.lines` file one category per
/// line. Files with other extensions are skipped.
pub fn load_category_files(dir: &Path) -> Result<Vec<String>, CategoryError> {
    let mut result = vec![];

    let mut files = vec![];
    for entry in WalkDir::new(dir) {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    // Directory order is platform dependent
    files.sort();

    for path in files {
        let extension = match path.extension().map(|e| e.to_string_lossy()) {
            Some(v) => v.into_owned(),
            _ => continue,
        };

        if extension != "ron" && extension != "lines" {
            continue;
        }

        let contents = std::fs::read_to_string(&path).map_err(|source| CategoryError::Read {
            path: path.clone(),
            source,
        })?;

        if extension == "ron" {
            let mut contents: Vec<String> =
                ron::de::from_str(&contents).map_err(|source| CategoryError::Ron {
                    path: path.clone(),
                    source,
                })?;
            result.append(&mut contents);
        } else {
            contents
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .for_each(|line| result.push(line.to_string()));
        }
    }

    Ok(result)
}

/// The built-in categories followed by everything found in `dir`
pub fn load_categories(dir: &Path) -> Result<Vec<String>, CategoryError> {
    let mut result: Vec<String> = CATEGORIES.iter().map(|c| c.to_string()).collect();

    for category in load_category_files(dir)? {
        if !result.contains(&category) {
            result.push(category);
        }
    }

    info!("Loaded {} categories", result.len());

    Ok(result)
}

/// Built-in categories, extended from `dir` when one is configured
pub fn round_generator(dir: Option<&Path>) -> Result<RoundGenerator, CategoryError> {
    match dir {
        Some(dir) => Ok(RoundGenerator::with_categories(load_categories(dir)?)),
        None => Ok(RoundGenerator::new()),
    }
}
