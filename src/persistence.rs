//! Save files
//!
//! Reads and writes [`GameStateDto`] as pretty-printed JSON. The engine never
//! touches storage; callers move the DTO through here.

use crate::game::{GameEngine, GameError, GameStateDto};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors while reading or writing a save file
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("could not access save file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("save data is not valid JSON for a game")]
    Format(#[from] serde_json::Error),
    #[error(transparent)]
    Game(#[from] GameError),
}

/// Write a game to any writer
///
/// # Errors
///
/// Returns `PersistenceError::Format` if serialization or the write fails.
pub fn save_to_writer<W: Write>(writer: W, dto: &GameStateDto) -> Result<(), PersistenceError> {
    serde_json::to_writer_pretty(writer, dto)?;
    Ok(())
}

/// Read a game from any reader
///
/// The result still has to pass [`GameEngine::restore`](crate::game::GameEngine::restore)
/// validation.
///
/// # Errors
///
/// Returns `PersistenceError::Format` if the data is not a saved game.
pub fn load_from_reader<R: Read>(reader: R) -> Result<GameStateDto, PersistenceError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Write a game to a file, replacing it if it exists
///
/// # Errors
///
/// Returns `PersistenceError::Io` if the file cannot be created or flushed.
pub fn save_to_path(path: &Path, dto: &GameStateDto) -> Result<(), PersistenceError> {
    let io_error = |source| PersistenceError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    save_to_writer(&mut writer, dto)?;
    writer.flush().map_err(io_error)?;

    info!(path = %path.display(), "saved game");
    Ok(())
}

/// Read a game from a file
///
/// # Errors
///
/// Returns `PersistenceError::Io` if the file cannot be opened and
/// `PersistenceError::Format` if it does not hold a saved game.
pub fn load_from_path(path: &Path) -> Result<GameStateDto, PersistenceError> {
    let file = File::open(path).map_err(|source| PersistenceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let dto = load_from_reader(BufReader::new(file))?;

    info!(path = %path.display(), "loaded game");
    Ok(dto)
}

/// Save the engine's current game and clear its modified flag
///
/// # Errors
///
/// Returns `PersistenceError::Game` if no game has been started, otherwise any
/// error from [`save_to_path`]. The modified flag is only cleared on success.
pub fn save_game<S>(engine: &mut GameEngine<S>, path: &Path) -> Result<(), PersistenceError> {
    let dto = engine.serialize()?;
    save_to_path(path, &dto)?;
    engine.mark_saved();
    Ok(())
}

/// Replace the engine's current game with the one saved at `path`
///
/// # Errors
///
/// Returns any error from [`load_from_path`], or `PersistenceError::Game` if
/// the saved data is rejected. The current game is untouched on error.
pub fn load_game<S>(engine: &mut GameEngine<S>, path: &Path) -> Result<(), PersistenceError> {
    let dto = load_from_path(path)?;
    engine.restore(&dto)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{CorruptSave, Phase};
    use crate::wordlists::RandomWordSource;

    fn sample_dto() -> GameStateDto {
        let mut engine = GameEngine::new(RandomWordSource::seeded(vec!["lantern".to_string()], 0));
        engine.start().unwrap();
        engine.guess('n').unwrap();
        engine.guess('z').unwrap();
        engine.hint().unwrap();
        engine.serialize().unwrap()
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("hangman-{name}-{}.json", std::process::id()))
    }

    #[test]
    fn writer_reader_round_trip() {
        let dto = sample_dto();
        let mut buf = Vec::new();
        save_to_writer(&mut buf, &dto).unwrap();

        let loaded = load_from_reader(buf.as_slice()).unwrap();
        assert_eq!(loaded, dto);
    }

    #[test]
    fn saved_json_layout() {
        let mut buf = Vec::new();
        save_to_writer(&mut buf, &sample_dto()).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(json["targetWord"], "lantern");
        assert_eq!(json["goodGuesses"], serde_json::json!(["l", "n"]));
        assert_eq!(json["badGuesses"], serde_json::json!(["z"]));
        assert_eq!(json["allGuesses"], serde_json::json!(["l", "n", "z"]));
        assert_eq!(json["remainingGuesses"], 9);
        assert_eq!(json["hintUsed"], true);
    }

    #[test]
    fn reads_handwritten_save() {
        let text = r#"{
            "targetWord": "cat",
            "goodGuesses": ["c"],
            "badGuesses": ["x", "y"],
            "allGuesses": ["c", "x", "y"],
            "remainingGuesses": 8,
            "hintUsed": false
        }"#;

        let dto = load_from_reader(text.as_bytes()).unwrap();
        assert_eq!(dto.target_word, "cat");
        assert_eq!(dto.remaining_guesses, 8);
        assert_eq!(dto.bad_guesses.len(), 2);
    }

    #[test]
    fn negative_remaining_parses_for_later_rejection() {
        let text = r#"{"targetWord":"cat","goodGuesses":[],"badGuesses":[],
            "allGuesses":[],"remainingGuesses":-1,"hintUsed":false}"#;
        let dto = load_from_reader(text.as_bytes()).unwrap();
        assert_eq!(dto.remaining_guesses, -1);
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            load_from_reader("not json".as_bytes()),
            Err(PersistenceError::Format(_))
        ));

        let multi_char = r#"{"targetWord":"cat","goodGuesses":["ca"],"badGuesses":[],
            "allGuesses":[],"remainingGuesses":10,"hintUsed":false}"#;
        assert!(load_from_reader(multi_char.as_bytes()).is_err());

        let missing_field = r#"{"targetWord":"cat"}"#;
        assert!(load_from_reader(missing_field.as_bytes()).is_err());
    }

    #[test]
    fn file_round_trip() {
        let path = temp_path("file-round-trip");
        let dto = sample_dto();

        save_to_path(&path, &dto).unwrap();
        let loaded = load_from_path(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, dto);
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = temp_path("does-not-exist");
        match load_from_path(&path) {
            Err(PersistenceError::Io { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn save_game_clears_modified_flag() {
        let path = temp_path("save-game");
        let mut engine = GameEngine::new(());
        engine.start_with_word("castle").unwrap();
        engine.guess('a').unwrap();
        assert!(engine.is_modified());

        save_game(&mut engine, &path).unwrap();
        assert!(!engine.is_modified());

        let mut other = GameEngine::new(());
        load_game(&mut other, &path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(other.target_word(), Some("castle"));
        assert_eq!(other.phase(), Phase::Active);
        assert!(other.state().unwrap().good_guesses().contains(&'a'));
    }

    #[test]
    fn save_game_without_game_fails() {
        let path = temp_path("save-nothing");
        let mut engine = GameEngine::new(());

        assert!(matches!(
            save_game(&mut engine, &path),
            Err(PersistenceError::Game(_))
        ));
        assert!(!path.exists());
    }

    #[test]
    fn load_game_rejects_corrupt_save_and_keeps_game() {
        let path = temp_path("load-corrupt");
        std::fs::write(
            &path,
            r#"{"targetWord":"cat","goodGuesses":["z"],"badGuesses":[],
            "allGuesses":["z"],"remainingGuesses":10,"hintUsed":false}"#,
        )
        .unwrap();

        let mut engine = GameEngine::new(());
        engine.start_with_word("tree").unwrap();
        let result = load_game(&mut engine, &path);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(
            result,
            Err(PersistenceError::Game(GameError::CorruptSave(
                CorruptSave::GoodLetterNotInWord('z')
            )))
        ));
        assert_eq!(engine.target_word(), Some("tree"));
    }
}
