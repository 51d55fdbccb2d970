//! Estructura Trie para búsqueda eficiente de palabras

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

/// Categoría gramatical de una palabra
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WordCategory {
    Determiner,
    Noun,
    Pronoun,
    Verb,
    Auxiliary,
    Adjective,
    Preposition,
    /// Separador de oraciones (coma)
    Comma,
}

impl WordCategory {
    /// Acepta el código corto (`DET`) o el nombre largo (`determiner`)
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "det" | "determiner" | "determinante" => Some(WordCategory::Determiner),
            "n" | "noun" | "sustantivo" => Some(WordCategory::Noun),
            "pron" | "pronoun" | "pronombre" => Some(WordCategory::Pronoun),
            "v" | "verb" | "verbo" => Some(WordCategory::Verb),
            "aux" | "auxiliary" | "auxiliar" => Some(WordCategory::Auxiliary),
            "adj" | "adjective" | "adjetivo" => Some(WordCategory::Adjective),
            "prep" | "preposition" | "preposicion" => Some(WordCategory::Preposition),
            "comma" | "," => Some(WordCategory::Comma),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            WordCategory::Determiner => "DET",
            WordCategory::Noun => "N",
            WordCategory::Pronoun => "PRON",
            WordCategory::Verb => "V",
            WordCategory::Auxiliary => "AUX",
            WordCategory::Adjective => "ADJ",
            WordCategory::Preposition => "PREP",
            WordCategory::Comma => "COMMA",
        }
    }

    /// ¿Puede esta categoría abrir un sintagma nominal?
    pub fn starts_noun_phrase(&self) -> bool {
        matches!(
            self,
            WordCategory::Determiner | WordCategory::Pronoun | WordCategory::Noun
        )
    }
}

impl fmt::Display for WordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.code())
    }
}

/// Número gramatical
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Number {
    Singular,
    Plural,
    /// Singular contable
    SingularCountable,
    /// No contable
    Uncountable,
    /// Colectivo
    Collective,
    /// Vale para singular y plural
    Any,
}

impl Number {
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "sg" | "s" | "sing" | "singular" => Some(Number::Singular),
            "pl" | "p" | "plural" => Some(Number::Plural),
            "sgc" | "countable" | "singular-countable" => Some(Number::SingularCountable),
            "unc" | "uncountable" => Some(Number::Uncountable),
            "coll" | "collective" => Some(Number::Collective),
            "any" | "" => Some(Number::Any),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Number::Singular => "SG",
            Number::Plural => "PL",
            Number::SingularCountable => "SGC",
            Number::Uncountable => "UNC",
            Number::Collective => "COLL",
            Number::Any => "ANY",
        }
    }

    /// Número efectivo a efectos de concordancia.
    /// Contables, incontables y colectivos cuentan como singular.
    pub fn agreement(&self) -> Number {
        match self {
            Number::Plural => Number::Plural,
            Number::Any => Number::Any,
            _ => Number::Singular,
        }
    }

    /// Plurales, incontables y colectivos pueden ir sin determinante
    pub fn allows_bare_noun(&self) -> bool {
        matches!(
            self,
            Number::Plural | Number::Uncountable | Number::Collective
        )
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.code())
    }
}

/// Información asociada a una palabra
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordInfo {
    pub category: WordCategory,
    pub number: Number,
}

impl WordInfo {
    pub fn new(category: WordCategory, number: Number) -> Self {
        Self { category, number }
    }
}

/// Nodo del Trie
#[derive(Debug, Default)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    word_info: Option<WordInfo>,
}

/// Estructura Trie para almacenamiento y búsqueda de palabras
#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
    word_count: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self {
            root: TrieNode::default(),
            word_count: 0,
        }
    }

    /// Inserta una palabra en el Trie.
    /// Si la palabra ya existe, la nueva entrada reemplaza a la anterior.
    pub fn insert(&mut self, word: &str, info: WordInfo) {
        let word_lower = word.to_lowercase();
        let mut node = &mut self.root;

        for ch in word_lower.chars() {
            node = node.children.entry(ch).or_default();
        }

        if node.word_info.is_none() {
            self.word_count += 1;
        }
        node.word_info = Some(info);
    }

    fn find(&self, word: &str) -> Option<&TrieNode> {
        let word_lower = word.to_lowercase();
        let mut node = &self.root;

        for ch in word_lower.chars() {
            node = node.children.get(&ch)?;
        }

        Some(node)
    }

    /// Verifica si una palabra existe en el Trie
    pub fn contains(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    /// Obtiene la información de una palabra
    pub fn get(&self, word: &str) -> Option<&WordInfo> {
        self.find(word).and_then(|node| node.word_info.as_ref())
    }

    /// Obtiene todas las palabras del Trie con su información
    pub fn get_all_words(&self) -> Vec<(String, WordInfo)> {
        let mut words = Vec::with_capacity(self.word_count);
        Self::collect_words(&self.root, String::new(), &mut words);
        words
    }

    fn collect_words(node: &TrieNode, prefix: String, words: &mut Vec<(String, WordInfo)>) {
        if let Some(info) = node.word_info {
            words.push((prefix.clone(), info));
        }

        for (ch, child) in &node.children {
            let mut new_prefix = prefix.clone();
            new_prefix.push(*ch);
            Self::collect_words(child, new_prefix, words);
        }
    }

    /// Número de palabras en el Trie
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Verifica si el Trie está vacío
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noun(number: Number) -> WordInfo {
        WordInfo::new(WordCategory::Noun, number)
    }

    #[test]
    fn test_insert_and_contains() {
        let mut trie = Trie::new();
        trie.insert("dog", noun(Number::SingularCountable));
        trie.insert("dogs", noun(Number::Plural));

        assert!(trie.contains("dog"));
        assert!(trie.contains("dogs"));
        assert!(!trie.contains("do"));
        assert!(!trie.contains("cat"));
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn test_case_insensitive() {
        let mut trie = Trie::new();
        trie.insert("Water", noun(Number::Uncountable));

        assert!(trie.contains("water"));
        assert!(trie.contains("WATER"));
        assert!(trie.contains("wAtEr"));
    }

    #[test]
    fn test_reinsert_replaces_info() {
        let mut trie = Trie::new();
        trie.insert("work", noun(Number::Uncountable));
        trie.insert("work", WordInfo::new(WordCategory::Verb, Number::Plural));

        assert_eq!(trie.len(), 1);
        let info = trie.get("work").unwrap();
        assert_eq!(info.category, WordCategory::Verb);
        assert_eq!(info.number, Number::Plural);
    }

    #[test]
    fn test_agreement_collapses_to_singular() {
        assert_eq!(Number::SingularCountable.agreement(), Number::Singular);
        assert_eq!(Number::Uncountable.agreement(), Number::Singular);
        assert_eq!(Number::Collective.agreement(), Number::Singular);
        assert_eq!(Number::Plural.agreement(), Number::Plural);
    }

    #[test]
    fn test_bare_noun_permission() {
        assert!(Number::Plural.allows_bare_noun());
        assert!(Number::Uncountable.allows_bare_noun());
        assert!(Number::Collective.allows_bare_noun());
        assert!(!Number::SingularCountable.allows_bare_noun());
    }

    #[test]
    fn test_codes_round_trip_through_aliases() {
        assert_eq!(WordCategory::from_code("noun"), Some(WordCategory::Noun));
        assert_eq!(WordCategory::from_code("PREP"), Some(WordCategory::Preposition));
        assert_eq!(WordCategory::from_code("adverb"), None);
        assert_eq!(Number::from_code("coll"), Some(Number::Collective));
        assert_eq!(Number::from_code("dual"), None);
        assert_eq!(WordCategory::Auxiliary.to_string(), "AUX");
        assert_eq!(Number::SingularCountable.to_string(), "SGC");
    }
}
