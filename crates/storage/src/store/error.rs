#![forbid(unsafe_code)]

#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Sql(rusqlite::Error),
    InvalidInput(&'static str),
    UnknownWorkspace,
    UnknownBoard,
    UnknownColumn,
    UnknownTask,
    /// The destination id exists but names an entity of another kind,
    /// e.g. a task move whose destination turned out to be a board.
    WrongParentKind {
        expected: &'static str,
        actual: &'static str,
    },
    /// A parent scope whose positions are not exactly 1..=N. Never produced
    /// by a committed operation of this store; surfacing it is an alert, not
    /// something to repair in place.
    CorruptOrdering {
        parent_id: String,
        positions: Vec<i64>,
    },
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "io: {err}"),
            Self::Sql(err) => write!(f, "sqlite: {err}"),
            Self::InvalidInput(message) => write!(f, "invalid input: {message}"),
            Self::UnknownWorkspace => write!(f, "unknown workspace"),
            Self::UnknownBoard => write!(f, "unknown board"),
            Self::UnknownColumn => write!(f, "unknown column"),
            Self::UnknownTask => write!(f, "unknown task"),
            Self::WrongParentKind { expected, actual } => {
                write!(f, "destination is a {actual}, expected a {expected}")
            }
            Self::CorruptOrdering {
                parent_id,
                positions,
            } => write!(
                f,
                "corrupt ordering in scope {parent_id} (positions={positions:?})"
            ),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sql(value)
    }
}

impl StoreError {
    /// True for failures worth retrying with the same inputs: the move path
    /// re-reads current state on every attempt, so a connection or lock
    /// error leaves nothing behind that a retry could trip over.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Sql(_))
    }
}
