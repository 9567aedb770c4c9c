use clabyrinth::MazeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Maze error; {0}")]
    Maze(#[from] MazeError),
    #[error("IO error; {0}")]
    Io(#[from] std::io::Error),
    #[error("Settings error; {0}")]
    Settings(#[from] ron::error::SpannedError),
    #[error("JSON error; {0}")]
    Json(#[from] serde_json::Error),
    #[error("Logger error; {0}")]
    Logger(#[from] log::SetLoggerError),
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;
    use crate::logging;

    #[test]
    fn logger_installed_twice() {
        let _ = logging::init(log::LevelFilter::Off);
        let err = Error::from(logging::init(log::LevelFilter::Off).unwrap_err());

        assert!(matches!(err, Error::Logger(_)));
        assert!(err.to_string().starts_with("Logger error; "));
        assert!(err.source().is_some());
    }

    #[test]
    fn maze_error_message() {
        let err = Error::from(MazeError::InvalidDimension {
            width: 0,
            height: 2,
        });

        assert!(err.to_string().starts_with("Maze error; "));
        assert!(err.source().is_some());
    }
}
