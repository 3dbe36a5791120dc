use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::ops::Index;
use serde::{Deserialize, Serialize};

use crate::*;

/// Characters accepted between words in pasted text: newlines and both the
/// ASCII and the fullwidth comma.
pub const WORD_SEPARATORS: [char; 3] = ['\n', ',', '，'];

/// Ordered, non-empty list of words. Duplicates are allowed, the index is
/// what identifies a cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Builds a list from already-split entries, trimming each one and
    /// dropping the blank ones.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_string())
            .filter(|word| !word.is_empty())
            .collect();

        if words.is_empty() {
            Err(GameError::EmptyWordList)
        } else {
            Ok(Self { words })
        }
    }

    /// Splits raw text on [`WORD_SEPARATORS`].
    pub fn parse(text: &str) -> Result<Self> {
        Self::from_words(text.split(WORD_SEPARATORS))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, index: CellIndex) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn validate_index(&self, index: CellIndex) -> Result<CellIndex> {
        if index < self.words.len() {
            Ok(index)
        } else {
            Err(GameError::InvalidIndex)
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// One word per line, the normalised form written back to the input box.
    pub fn to_lines(&self) -> String {
        self.words.join("\n")
    }
}

impl Index<CellIndex> for WordList {
    type Output = str;

    fn index(&self, index: CellIndex) -> &Self::Output {
        &self.words[index]
    }
}

impl TryFrom<Vec<String>> for WordList {
    type Error = GameError;

    fn try_from(words: Vec<String>) -> Result<Self> {
        Self::from_words(words)
    }
}

impl From<WordList> for Vec<String> {
    fn from(list: WordList) -> Self {
        list.words
    }
}
