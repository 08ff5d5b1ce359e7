// Piece names derived from the seed: "<Adjective> <Noun>".
//
// The noun is picked by `seed % nouns`, the adjective by the quotient, so
// consecutive seeds cycle through nouns first. No randomness is consumed;
// naming never disturbs the generator's PRNG stream.
//
// Word lists are loaded from JSON (`data/song_words.json`, embedded at
// compile time by `default_words()`).

use crate::error::{MusicError, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct WordLists {
    adjectives: Vec<String>,
    nouns: Vec<String>,
}

impl WordLists {
    pub fn from_json(json: &str) -> Result<Self> {
        let words: WordLists = serde_json::from_str(json)?;
        if words.adjectives.is_empty() {
            return Err(MusicError::EmptyTable("adjectives"));
        }
        if words.nouns.is_empty() {
            return Err(MusicError::EmptyTable("nouns"));
        }
        Ok(words)
    }

    /// Display name for a seed, e.g. "Silent Harbor".
    pub fn name_from_seed(&self, seed: u64) -> String {
        let n = self.nouns.len() as u64;
        let noun = &self.nouns[(seed % n) as usize];
        let adjective = &self.adjectives[((seed / n) % self.adjectives.len() as u64) as usize];
        format!("{} {}", capitalize(adjective), capitalize(noun))
    }
}

/// The word lists shipped with the crate.
pub fn default_words() -> Result<WordLists> {
    WordLists::from_json(include_str!("../../data/song_words.json"))
}

/// File stem for a display name: spaces become underscores.
pub fn file_stem(name: &str) -> String {
    name.replace(' ', "_")
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => {
            let upper: String = c.to_uppercase().collect();
            format!("{}{}", upper, chars.as_str())
        }
    }
}
