pub mod pairwise;
pub mod trie;

use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use trie::Trie;

/// Which consistency checker backs the name book.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Checker {
    Pairwise,
    Trie,
}

impl fmt::Display for Checker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Checker::Pairwise => "pairwise",
            Checker::Trie => "trie",
        })
    }
}

/// Stores names and maintains a consistency flag as they are added. A list is
/// consistent when no name begins with the sequence of letters that makes up
/// another whole name.
pub struct NameBook {
    checker: Checker,
    names: Vec<String>,
    trie: Trie,
    consistent: bool,
    first_collision: Option<String>,
}

impl NameBook {
    pub fn new(checker: Checker) -> Self {
        Self {
            checker,
            names: Vec::new(),
            trie: Trie::new(),
            consistent: true,
            first_collision: None,
        }
    }

    /// Validate and add one name, updating the running consistency flag.
    pub fn add_name(&mut self, raw: &str) -> Result<()> {
        let name = normalize_name(raw)?;
        let collides = match self.checker {
            Checker::Pairwise => pairwise::collides_with_any(&name, &self.names),
            Checker::Trie => self.trie.insert(&name)?,
        };
        if collides {
            self.consistent = false;
            if self.first_collision.is_none() {
                self.first_collision = Some(name.clone());
            }
        }
        self.names.push(name);
        Ok(())
    }

    /// Read whitespace-separated names from a file.
    pub fn read_names(&mut self, path: &Path) -> Result<()> {
        let content = fs::read_to_string(path)?;
        for token in content.split_whitespace() {
            self.add_name(token)?;
        }
        Ok(())
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The running consistency flag, maintained incrementally by `add_name`.
    pub fn consistent(&self) -> bool {
        self.consistent
    }

    /// The first name whose insertion collided, if any.
    pub fn first_collision(&self) -> Option<&String> {
        self.first_collision.as_ref()
    }

    /// Full pairwise rescan of everything stored, independent of the running
    /// flag and of the configured checker.
    pub fn is_consistent(&self) -> bool {
        pairwise::find_collision(&self.names).is_none()
    }
}

/// Lowercase a raw token and reject anything that is not a letter. Empty
/// names are rejected as well: the pairwise rule would make one a prefix of
/// every other name, which is never what a name list means.
fn normalize_name(raw: &str) -> Result<String> {
    if raw.is_empty() {
        return Err(Error::InvalidInput("empty name".to_string()));
    }
    let name = raw.to_ascii_lowercase();
    if let Some(ch) = name.chars().find(|c| !c.is_ascii_lowercase()) {
        return Err(Error::InvalidName {
            name: raw.to_string(),
            ch,
        });
    }
    Ok(name)
}
