//! Loading the sentence dataset from disk.

use std::path::{Path, PathBuf};

use quiz_core::model::{Sentence, SentenceStore};
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DatasetError {
    #[error("cannot read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid dataset {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse a JSON array of sentence objects.
///
/// # Errors
///
/// Returns the `serde_json` error if the input is not an array of objects that
/// each carry a prompt and an answer.
pub fn parse_sentences(json: &str) -> Result<SentenceStore, serde_json::Error> {
    let sentences: Vec<Sentence> = serde_json::from_str(json)?;
    Ok(SentenceStore::new(sentences))
}

/// Read and parse the dataset file once, at startup.
///
/// # Errors
///
/// Returns `DatasetError::Io` if the file cannot be read and
/// `DatasetError::Parse` if its content is not a valid sentence list.
pub fn load_sentences(path: &Path) -> Result<SentenceStore, DatasetError> {
    let raw = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let store = parse_sentences(&raw).map_err(|source| DatasetError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), count = store.len(), "loaded sentence dataset");
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_dataset_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"sentence": "Je ___ faim", "answer": "suis", "options": ["suis", "ai"]}},
               {{"text": "Bonjour ___", "answer": "madame"}}]"#
        )
        .unwrap();

        let store = load_sentences(file.path()).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(0).unwrap().answer(), "suis");
        assert_eq!(store.get(1).unwrap().text(), "Bonjour ___");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_sentences(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }

    #[test]
    fn non_array_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"text": "a", "answer": "b"}}"#).unwrap();
        let err = load_sentences(file.path()).unwrap_err();
        assert!(matches!(err, DatasetError::Parse { .. }));
    }

    #[test]
    fn empty_array_is_allowed() {
        let store = parse_sentences("[]").unwrap();
        assert!(store.is_empty());
    }
}
