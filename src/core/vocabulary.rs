// --- File: src/core/vocabulary.rs
use crate::core::types::{TokenId, UNKNOWN_TOKEN};
use crate::corpus::Corpus;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::info;

/// Character to identifier mapping, built once from a corpus and read-only
/// afterwards. Identifiers start at 1 in order of first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vocabulary {
    ids: HashMap<char, TokenId>,
    /// `chars[id - 1]` is the character for `id`.
    chars: Vec<char>,
}

impl Vocabulary {
    /// Walks categories, then samples, then characters, all in corpus order.
    pub fn from_corpus(corpus: &Corpus) -> Self {
        let vocab = Self::from_texts(
            corpus
                .categories()
                .flat_map(|c| c.samples.iter().map(String::as_str)),
        );
        info!(size = vocab.len(), "vocabulary built");
        vocab
    }

    pub fn from_texts<'a, I>(texts: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut vocab = Self::default();
        for text in texts {
            for c in text.chars() {
                vocab.intern(c);
            }
        }
        vocab
    }

    fn intern(&mut self, c: char) -> TokenId {
        if let Some(&id) = self.ids.get(&c) {
            return id;
        }
        self.chars.push(c);
        let id = self.chars.len() as TokenId;
        self.ids.insert(c, id);
        id
    }

    /// Identifier for `c`, or [`UNKNOWN_TOKEN`] if it was never seen.
    pub fn id_of(&self, c: char) -> TokenId {
        self.ids.get(&c).copied().unwrap_or(UNKNOWN_TOKEN)
    }

    pub fn char_of(&self, id: TokenId) -> Option<char> {
        let index = usize::try_from(id).ok()?.checked_sub(1)?;
        self.chars.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// `(char, id)` pairs in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (char, TokenId)> + '_ {
        self.chars
            .iter()
            .enumerate()
            .map(|(i, &c)| (c, i as TokenId + 1))
    }
}
