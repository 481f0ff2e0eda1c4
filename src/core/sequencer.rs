// File: src/core/sequencer.rs
use crate::core::types::Sequence;
use crate::core::vocabulary::Vocabulary;

/// Maps each character of `text` to its vocabulary id, 0 for unknown.
pub fn text_to_sequence(text: &str, vocab: &Vocabulary) -> Sequence {
    text.chars().map(|c| vocab.id_of(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Corpus;

    #[test]
    fn one_id_per_character() {
        let vocab = Vocabulary::from_corpus(&Corpus::builtin());
        for text in ["开心", "哈哈，太搞笑了", "xyz", "我捡到10元钱!"] {
            let seq = text_to_sequence(text, &vocab);
            assert_eq!(seq.len(), text.chars().count());
            assert!(seq.iter().all(|&id| id as usize <= vocab.len()));
        }
    }

    #[test]
    fn unknown_characters_become_zero() {
        let vocab = Vocabulary::from_texts(["ab"]);
        assert_eq!(text_to_sequence("abz", &vocab), vec![1, 2, 0]);
    }

    #[test]
    fn empty_text_gives_empty_sequence() {
        let vocab = Vocabulary::from_corpus(&Corpus::builtin());
        assert!(text_to_sequence("", &vocab).is_empty());
    }
}
