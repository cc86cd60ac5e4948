// This file is part of WordGridSolver.
//
// WordGridSolver is free software: you can redistribute it and/or modify it under the terms of the
// GNU General Public License as published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// WordGridSolver is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See
// the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with WordGridSolver. If
// not, see <https://www.gnu.org/licenses/>.
//

use std::path::Path;

use tracing::info;

use crate::error::{Error, Result};
use crate::trie::PrefixIndex;

/// The word list a search runs against: uppercased, trimmed, and filtered to a
/// minimum length before it reaches the [`PrefixIndex`].
#[derive(Debug, Clone)]
pub struct Dictionary {
    index: PrefixIndex,
    min_word_length: usize,
}

impl Dictionary {
    pub fn from_file(path: &Path, min_word_length: usize) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let dictionary = Self::from_words(text.lines(), min_word_length);
        info!(path = %path.display(), words = dictionary.len(), min_word_length, "loaded dictionary");
        return Ok(dictionary);
    }

    pub fn from_words<I, S>(words: I, min_word_length: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let index = words.into_iter()
            .map(|word| word.as_ref().trim().to_uppercase())
            .filter(|word| !word.is_empty() && word.chars().count() >= min_word_length)
            .collect();
        return Self { index, min_word_length };
    }

    /// Case-insensitive membership.
    pub fn contains(&self, word: &str) -> bool {
        return self.index.is_word(&word.to_uppercase());
    }

    pub fn index(&self) -> &PrefixIndex { return &self.index; }

    pub fn min_word_length(&self) -> usize { return self.min_word_length; }

    pub fn len(&self) -> usize { return self.index.len(); }

    pub fn is_empty(&self) -> bool { return self.index.is_empty(); }
}

#[cfg(test)]
mod tests {
    use super::Dictionary;

    #[test]
    fn contains_ignores_case() {
        let dictionary = Dictionary::from_words(["CAT", "DOG", "BIRD", "ELEPHANT", "ZEBRA"], 3);
        assert!(dictionary.contains("CAT"));
        assert!(dictionary.contains("cat"));
        assert!(dictionary.contains("Zebra"));
        assert!(!dictionary.contains("MOUSE"));
    }

    #[test]
    fn words_are_trimmed_and_uppercased() {
        let dictionary = Dictionary::from_words(["  green ", "Greet\r"], 3);
        assert!(dictionary.index().is_word("GREEN"));
        assert!(dictionary.index().is_word("GREET"));
        assert!(dictionary.index().is_prefix("GREE"));
    }

    #[test]
    fn short_and_blank_lines_are_dropped() {
        let dictionary = Dictionary::from_words(["A", "AT", "", "   ", "CAT"], 2);
        assert_eq!(dictionary.len(), 2);
        assert!(!dictionary.index().is_word("A"));
        assert!(dictionary.index().is_word("AT"));
    }

    #[test]
    fn duplicates_count_once() {
        let dictionary = Dictionary::from_words(["DO", "do", "Do"], 2);
        assert_eq!(dictionary.len(), 1);
    }
}
