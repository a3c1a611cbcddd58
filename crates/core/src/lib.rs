#![forbid(unsafe_code)]

pub mod ids {
    /// Shared validation failure for every id newtype.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum IdError {
        Empty,
        TooLong,
        InvalidFirstChar,
        InvalidChar { ch: char, index: usize },
    }

    impl std::fmt::Display for IdError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Self::Empty => write!(f, "id must not be empty"),
                Self::TooLong => write!(f, "id exceeds 64 characters"),
                Self::InvalidFirstChar => write!(f, "id must start with an ascii alphanumeric"),
                Self::InvalidChar { ch, index } => {
                    write!(f, "id contains invalid char {ch:?} at index {index}")
                }
            }
        }
    }

    impl std::error::Error for IdError {}

    fn validate_id(value: &str) -> Result<(), IdError> {
        if value.is_empty() {
            return Err(IdError::Empty);
        }
        if value.len() > 64 {
            return Err(IdError::TooLong);
        }
        let mut chars = value.chars();
        let Some(first) = chars.next() else {
            return Err(IdError::Empty);
        };
        if !first.is_ascii_alphanumeric() {
            return Err(IdError::InvalidFirstChar);
        }
        for (index, ch) in value.chars().enumerate() {
            if index == 0 {
                continue;
            }
            if ch.is_ascii_alphanumeric() || matches!(ch, '.' | '_' | '-') {
                continue;
            }
            return Err(IdError::InvalidChar { ch, index });
        }
        Ok(())
    }

    macro_rules! string_id {
        ($(#[$doc:meta])* $name:ident) => {
            $(#[$doc])*
            #[derive(Clone, Debug, PartialEq, Eq, Hash)]
            pub struct $name(String);

            impl $name {
                pub fn try_new(value: impl Into<String>) -> Result<Self, IdError> {
                    let value = value.into();
                    validate_id(&value)?;
                    Ok(Self(value))
                }

                pub fn as_str(&self) -> &str {
                    &self.0
                }

                pub fn into_string(self) -> String {
                    self.0
                }
            }

            impl std::fmt::Display for $name {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(&self.0)
                }
            }
        };
    }

    string_id!(
        /// Tenant scope. Every board hangs off exactly one workspace.
        WorkspaceId
    );
    string_id!(
        /// Parent scope for ordered columns.
        BoardId
    );
    string_id!(
        /// Parent scope for ordered tasks.
        ColumnId
    );
    string_id!(TaskId);

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn accepts_ulid_shaped_ids() {
            let id = BoardId::try_new("01J0QZ5X7N8R9T2V3W4X5Y6Z7A").expect("ulid id");
            assert_eq!(id.as_str(), "01J0QZ5X7N8R9T2V3W4X5Y6Z7A");
        }

        #[test]
        fn rejects_empty_and_oversized() {
            assert_eq!(WorkspaceId::try_new("").unwrap_err(), IdError::Empty);
            let long = "a".repeat(65);
            assert_eq!(WorkspaceId::try_new(long).unwrap_err(), IdError::TooLong);
        }

        #[test]
        fn rejects_non_ascii_and_bad_first_char() {
            assert_eq!(
                TaskId::try_new("-leading").unwrap_err(),
                IdError::InvalidFirstChar
            );
            assert!(matches!(
                TaskId::try_new("task id").unwrap_err(),
                IdError::InvalidChar { ch: ' ', index: 4 }
            ));
        }
    }
}

pub mod model {
    use serde::{Deserialize, Serialize};

    /// A tenant scope row.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Workspace {
        pub id: String,
        pub name: String,
        pub created_at_ms: i64,
    }

    /// Parent scope for columns. Boards themselves are unordered.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Board {
        pub id: String,
        pub workspace_id: String,
        pub name: String,
        pub created_at_ms: i64,
        pub updated_at_ms: i64,
    }

    /// An ordered item of the board scope. `position` is 1-based and dense:
    /// the columns of a board always occupy exactly 1..=N.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Column {
        pub id: String,
        pub board_id: String,
        pub position: i64,
        pub title: String,
        pub created_at_ms: i64,
        pub updated_at_ms: i64,
    }

    /// An ordered item of the column scope. Same density contract as
    /// [`Column`], scoped by `column_id`.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Task {
        pub id: String,
        pub column_id: String,
        pub position: i64,
        pub title: String,
        pub description: Option<String>,
        pub created_at_ms: i64,
        pub updated_at_ms: i64,
    }
}
