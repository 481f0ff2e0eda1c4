// File: src/persistence.rs
use crate::corpus::Corpus;
use crate::error::Result;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

/// Writes a bincode snapshot of the corpus. The file is written next to the
/// target and renamed over it, so a crash never leaves a half-written file.
pub fn save_corpus(corpus: &Corpus, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        bincode::serialize_into(&mut writer, corpus)?;
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| e.error)?;
    info!(path = %path.display(), "corpus snapshot saved");
    Ok(())
}

pub fn load_corpus(path: &Path) -> Result<Corpus> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let corpus: Corpus = bincode::deserialize_from(reader)?;
    info!(path = %path.display(), "corpus snapshot loaded");
    Ok(corpus)
}

/// Loads the snapshot if there is one, otherwise the built-in corpus.
pub fn load_corpus_or_builtin(path: Option<&Path>) -> Result<Corpus> {
    match path {
        Some(path) if path.exists() => load_corpus(path),
        _ => Ok(Corpus::builtin()),
    }
}
