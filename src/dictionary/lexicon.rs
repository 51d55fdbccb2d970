//! Consulta de léxico
//!
//! El analizador solo conoce este trait: el vocabulario se inyecta desde
//! fuera y se trata como dato de solo lectura.

use super::trie::{Trie, WordInfo};

/// Capacidad de búsqueda de solo lectura: palabra → (categoría, número)
pub trait Lexicon {
    /// Busca una palabra sin distinguir mayúsculas
    fn lookup(&self, word: &str) -> Option<WordInfo>;
}

impl Lexicon for Trie {
    fn lookup(&self, word: &str) -> Option<WordInfo> {
        self.get(word).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{Number, WordCategory};

    #[test]
    fn test_trie_lookup_is_case_insensitive() {
        let mut trie = Trie::new();
        trie.insert("table", WordInfo::new(WordCategory::Noun, Number::SingularCountable));

        assert!(trie.lookup("TABLE").is_some());
        assert!(trie.lookup("chair").is_none());
    }

    #[test]
    fn test_lookup_through_trait_object() {
        let mut trie = Trie::new();
        trie.insert("near", WordInfo::new(WordCategory::Preposition, Number::Any));
        let lexicon: &dyn Lexicon = &trie;

        let info = lexicon.lookup("Near").unwrap();
        assert_eq!(info.category, WordCategory::Preposition);
    }
}
