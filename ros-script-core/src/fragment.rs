use std::fmt::{self, Display, Formatter};

use serde::Serialize;

use crate::path::MenuPath;

/// Commands collected under one [`MenuPath`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub path: MenuPath,
    pub commands: Vec<String>,
}

impl Section {
    pub fn new(path: MenuPath) -> Self {
        Self {
            path,
            commands: Vec::new(),
        }
    }
}

/// An ordered mapping from menu path to ordered command lines.
///
/// Paths keep the order in which they were first added and each path occurs
/// once; adding commands for a known path appends to its section. Builder
/// methods consume `self`, so a fragment handed to another function is never
/// changed behind its back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Fragment {
    sections: Vec<Section>,
}

impl Fragment {
    /// Create an empty fragment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fragment holding one path and its commands.
    pub fn single<I, S>(path: impl Into<MenuPath>, commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new().with_commands(path, commands)
    }

    /// Create a fragment of bare script lines.
    pub fn raw<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::single(MenuPath::RawBody, lines)
    }

    /// Append commands under `path`, creating the section if needed.
    pub fn with_commands<I, S>(mut self, path: impl Into<MenuPath>, commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let section = self.section_mut(path.into());
        section.commands.extend(commands.into_iter().map(Into::into));
        self
    }

    /// Append a single command under `path`.
    pub fn with_command(self, path: impl Into<MenuPath>, command: impl Into<String>) -> Self {
        self.with_commands(path, [command.into()])
    }

    /// Declare `path` without adding commands. Empty paths survive merging
    /// and canonicalization and are dropped by the serializer.
    pub fn with_path(mut self, path: impl Into<MenuPath>) -> Self {
        self.section_mut(path.into());
        self
    }

    /// Return the commands stored under `path`.
    pub fn get(&self, path: &MenuPath) -> Option<&[String]> {
        self.sections
            .iter()
            .find(|section| &section.path == path)
            .map(|section| section.commands.as_slice())
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Paths in first-seen order.
    pub fn paths(&self) -> impl Iterator<Item = &MenuPath> {
        self.sections.iter().map(|section| &section.path)
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Total number of commands across all paths.
    pub fn command_count(&self) -> usize {
        self.sections.iter().map(|s| s.commands.len()).sum()
    }

    pub(crate) fn section_mut(&mut self, path: MenuPath) -> &mut Section {
        let idx = match self.sections.iter().position(|s| s.path == path) {
            Some(idx) => idx,
            None => {
                self.sections.push(Section::new(path));
                self.sections.len() - 1
            }
        };
        &mut self.sections[idx]
    }
}

impl IntoIterator for Fragment {
    type Item = Section;
    type IntoIter = std::vec::IntoIter<Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.into_iter()
    }
}

impl<'a> IntoIterator for &'a Fragment {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}

impl Display for Fragment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::serialize::serialize(self))
    }
}
