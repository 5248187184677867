use std::fmt::{self, Display, Formatter};

use serde::{Serialize, Serializer};

/// Location of a group of commands within a script.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MenuPath {
    /// A configuration menu such as `/ip pool` or `/ppp profile`.
    Menu(String),
    /// Bare script lines emitted without a menu header. Never reordered,
    /// deduplicated, or canonicalized.
    RawBody,
}

impl MenuPath {
    /// Build a menu path. An empty string yields [`MenuPath::RawBody`].
    pub fn menu(path: impl Into<String>) -> Self {
        let path = path.into();
        if path.is_empty() {
            Self::RawBody
        } else {
            Self::Menu(path)
        }
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, Self::RawBody)
    }

    /// Header text for this path; empty for the raw body.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Menu(path) => path,
            Self::RawBody => "",
        }
    }
}

impl From<&str> for MenuPath {
    fn from(value: &str) -> Self {
        Self::menu(value)
    }
}

impl From<String> for MenuPath {
    fn from(value: String) -> Self {
        Self::menu(value)
    }
}

impl Display for MenuPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for MenuPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
