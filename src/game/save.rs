//! Saved-game persistence
//!
//! Carries one player's session across process runs. The save is a small
//! JSON document written atomically; a missing or unreadable save simply
//! means a fresh game starts.

use super::session::{GameSession, GuessRecord};
use crate::core::Word;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter};
use std::path::Path;
use tempfile::NamedTempFile;

/// The serialized session: target plus guess history.
#[derive(Serialize, Deserialize)]
struct SavedSession {
    target: String,
    guesses: Vec<GuessRecord>,
}

/// Persist the session to `path`, replacing any previous save.
///
/// # Errors
/// Returns an I/O error if the save cannot be written.
pub fn save_session(session: &GameSession, path: &Path) -> io::Result<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent)?;

    let saved = SavedSession {
        target: session.target().text().to_string(),
        guesses: session.attempts().to_vec(),
    };

    let temp = NamedTempFile::new_in(parent)?;
    serde_json::to_writer(BufWriter::new(&temp), &saved).map_err(io::Error::other)?;
    temp.persist(path)?;
    Ok(())
}

/// Load a previously saved session, if a usable one exists.
///
/// Returns `Ok(None)` when there is no save or when the save cannot be
/// parsed; a damaged save is not worth failing startup over.
///
/// # Errors
/// Returns an I/O error only if an existing file cannot be read.
pub fn load_session(path: &Path) -> io::Result<Option<GameSession>> {
    if !path.exists() {
        return Ok(None);
    }

    let reader = BufReader::new(File::open(path)?);
    let Ok(saved) = serde_json::from_reader::<_, SavedSession>(reader) else {
        return Ok(None);
    };
    let Ok(target) = Word::new(&saved.target) else {
        return Ok(None);
    };
    // Restored guesses must honor the word invariant too; downstream code
    // indexes by uppercase letter, so the stored form must already be the
    // normalized one
    let guesses_valid = saved
        .guesses
        .iter()
        .all(|record| Word::new(&record.guess).is_ok_and(|w| w.text() == record.guess));
    if !guesses_valid {
        return Ok(None);
    }

    Ok(Some(GameSession::restore(target, saved.guesses)))
}

/// Remove the save file if present.
///
/// # Errors
/// Returns an I/O error if removal fails for a reason other than the file
/// already being gone.
pub fn clear_session(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path() -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        (dir, path)
    }

    #[test]
    fn save_and_load_roundtrip() {
        let (_dir, path) = temp_path();

        let mut session = GameSession::with_target(Word::new("example").unwrap());
        session.submit_guess("between").unwrap();
        session.submit_guess("examply").unwrap();
        save_session(&session, &path).unwrap();

        let loaded = load_session(&path).unwrap().unwrap();
        assert_eq!(loaded.target().text(), "EXAMPLE");
        assert_eq!(loaded.attempts(), session.attempts());
    }

    #[test]
    fn load_missing_file_is_none() {
        let (_dir, path) = temp_path();
        assert!(load_session(&path).unwrap().is_none());
    }

    #[test]
    fn load_corrupt_file_is_none() {
        let (_dir, path) = temp_path();
        fs::write(&path, "{ not json").unwrap();
        assert!(load_session(&path).unwrap().is_none());
    }

    #[test]
    fn load_invalid_target_is_none() {
        let (_dir, path) = temp_path();
        fs::write(&path, r#"{"target":"bad","guesses":[]}"#).unwrap();
        assert!(load_session(&path).unwrap().is_none());
    }

    #[test]
    fn load_invalid_guess_record_is_none() {
        let (_dir, path) = temp_path();
        // Guess with a non-letter character
        fs::write(
            &path,
            r#"{"target":"EXAMPLE","guesses":[{"guess":"examp1e","feedback":["gray","gray","gray","gray","gray","gray","gray"]}]}"#,
        )
        .unwrap();
        assert!(load_session(&path).unwrap().is_none());
    }

    #[test]
    fn load_non_normalized_guess_is_none() {
        let (_dir, path) = temp_path();
        // Valid letters, but not the stored uppercase form
        fs::write(
            &path,
            r#"{"target":"EXAMPLE","guesses":[{"guess":"between","feedback":["gray","gray","gray","gray","gray","gray","gray"]}]}"#,
        )
        .unwrap();
        assert!(load_session(&path).unwrap().is_none());
    }

    #[test]
    fn clear_session_removes_save() {
        let (_dir, path) = temp_path();

        let session = GameSession::with_target(Word::new("example").unwrap());
        save_session(&session, &path).unwrap();
        assert!(path.exists());

        clear_session(&path).unwrap();
        assert!(!path.exists());

        // Clearing again is fine
        clear_session(&path).unwrap();
    }
}
