//! Léxico inglés incorporado
//!
//! Vocabulario fijo de la gramática reducida. Se construye una sola vez y
//! se comparte entre todos los análisis.

use once_cell::sync::Lazy;

use super::trie::Number as N;
use super::trie::WordCategory as C;
use super::trie::{Number, Trie, WordCategory, WordInfo};

const ENTRIES: &[(&str, WordCategory, Number)] = &[
    // Determinantes
    ("the", C::Determiner, N::Any),
    ("a", C::Determiner, N::Singular),
    ("an", C::Determiner, N::Singular),
    ("this", C::Determiner, N::Singular),
    ("that", C::Determiner, N::Singular),
    ("these", C::Determiner, N::Plural),
    ("those", C::Determiner, N::Plural),

    // Pronombres
    ("i", C::Pronoun, N::Plural),
    ("you", C::Pronoun, N::Plural),
    ("we", C::Pronoun, N::Plural),
    ("they", C::Pronoun, N::Plural),
    ("he", C::Pronoun, N::Singular),
    ("she", C::Pronoun, N::Singular),
    ("it", C::Pronoun, N::Singular),

    // Sustantivos
    ("time", C::Noun, N::Uncountable),
    ("year", C::Noun, N::SingularCountable),
    ("people", C::Noun, N::Plural),
    ("day", C::Noun, N::SingularCountable),
    ("man", C::Noun, N::SingularCountable),
    ("men", C::Noun, N::Plural),
    ("woman", C::Noun, N::SingularCountable),
    ("women", C::Noun, N::Plural),
    ("child", C::Noun, N::SingularCountable),
    ("children", C::Noun, N::Plural),
    ("world", C::Noun, N::SingularCountable),
    ("school", C::Noun, N::SingularCountable),
    ("state", C::Noun, N::SingularCountable),
    ("family", C::Noun, N::Collective),
    ("student", C::Noun, N::SingularCountable),
    ("students", C::Noun, N::Plural),
    ("group", C::Noun, N::Collective),
    ("country", C::Noun, N::SingularCountable),
    ("problem", C::Noun, N::SingularCountable),
    ("hand", C::Noun, N::SingularCountable),
    ("part", C::Noun, N::SingularCountable),
    ("place", C::Noun, N::SingularCountable),
    ("case", C::Noun, N::SingularCountable),
    ("company", C::Noun, N::SingularCountable),
    ("system", C::Noun, N::SingularCountable),
    ("program", C::Noun, N::SingularCountable),
    ("question", C::Noun, N::SingularCountable),
    ("number", C::Noun, N::SingularCountable),
    ("night", C::Noun, N::SingularCountable),
    ("home", C::Noun, N::SingularCountable),
    ("room", C::Noun, N::SingularCountable),
    ("fact", C::Noun, N::SingularCountable),
    ("water", C::Noun, N::Uncountable),
    ("car", C::Noun, N::SingularCountable),
    ("cars", C::Noun, N::Plural),
    ("house", C::Noun, N::SingularCountable),
    ("houses", C::Noun, N::Plural),
    ("friend", C::Noun, N::SingularCountable),
    ("friends", C::Noun, N::Plural),
    ("father", C::Noun, N::SingularCountable),
    ("mother", C::Noun, N::SingularCountable),
    ("boy", C::Noun, N::SingularCountable),
    ("boys", C::Noun, N::Plural),
    ("girl", C::Noun, N::SingularCountable),
    ("girls", C::Noun, N::Plural),
    ("apple", C::Noun, N::SingularCountable),
    ("apples", C::Noun, N::Plural),
    ("book", C::Noun, N::SingularCountable),
    ("books", C::Noun, N::Plural),
    ("city", C::Noun, N::SingularCountable),
    ("cities", C::Noun, N::Plural),
    ("job", C::Noun, N::SingularCountable),
    ("jobs", C::Noun, N::Plural),
    ("money", C::Noun, N::Uncountable),
    ("story", C::Noun, N::SingularCountable),
    ("stories", C::Noun, N::Plural),
    ("childhood", C::Noun, N::Uncountable),
    ("food", C::Noun, N::Uncountable),
    ("door", C::Noun, N::SingularCountable),
    ("table", C::Noun, N::SingularCountable),
    ("library", C::Noun, N::SingularCountable),
    ("libraries", C::Noun, N::Plural),
    ("park", C::Noun, N::SingularCountable),
    ("parks", C::Noun, N::Plural),
    ("dog", C::Noun, N::SingularCountable),
    ("cat", C::Noun, N::SingularCountable),
    ("teacher", C::Noun, N::SingularCountable),
    ("ball", C::Noun, N::SingularCountable),
    ("dogs", C::Noun, N::Plural),
    ("cats", C::Noun, N::Plural),
    ("teachers", C::Noun, N::Plural),

    // Verbos en presente simple
    ("work", C::Verb, N::Plural),
    ("am", C::Verb, N::Plural),
    ("are", C::Verb, N::Plural),
    ("is", C::Verb, N::Singular),
    ("have", C::Verb, N::Plural),
    ("has", C::Verb, N::Singular),
    ("do", C::Verb, N::Plural),
    ("does", C::Verb, N::Singular),
    ("read", C::Verb, N::Plural),
    ("reads", C::Verb, N::Singular),
    ("drink", C::Verb, N::Plural),
    ("drinks", C::Verb, N::Singular),
    ("go", C::Verb, N::Plural),
    ("goes", C::Verb, N::Singular),
    ("say", C::Verb, N::Plural),
    ("says", C::Verb, N::Singular),
    ("get", C::Verb, N::Plural),
    ("gets", C::Verb, N::Singular),
    ("make", C::Verb, N::Plural),
    ("makes", C::Verb, N::Singular),
    ("know", C::Verb, N::Plural),
    ("knows", C::Verb, N::Singular),
    ("think", C::Verb, N::Plural),
    ("thinks", C::Verb, N::Singular),
    ("take", C::Verb, N::Plural),
    ("takes", C::Verb, N::Singular),
    ("see", C::Verb, N::Plural),
    ("sees", C::Verb, N::Singular),
    ("come", C::Verb, N::Plural),
    ("comes", C::Verb, N::Singular),
    ("want", C::Verb, N::Plural),
    ("wants", C::Verb, N::Singular),
    ("use", C::Verb, N::Plural),
    ("uses", C::Verb, N::Singular),
    ("find", C::Verb, N::Plural),
    ("finds", C::Verb, N::Singular),
    ("give", C::Verb, N::Plural),
    ("gives", C::Verb, N::Singular),
    ("tell", C::Verb, N::Plural),
    ("tells", C::Verb, N::Singular),
    ("works", C::Verb, N::Singular),
    ("call", C::Verb, N::Plural),
    ("calls", C::Verb, N::Singular),
    ("try", C::Verb, N::Plural),
    ("tries", C::Verb, N::Singular),
    ("ask", C::Verb, N::Plural),
    ("asks", C::Verb, N::Singular),
    ("need", C::Verb, N::Plural),
    ("needs", C::Verb, N::Singular),
    ("feel", C::Verb, N::Plural),
    ("feels", C::Verb, N::Singular),
    ("become", C::Verb, N::Plural),
    ("becomes", C::Verb, N::Singular),
    ("leave", C::Verb, N::Plural),
    ("leaves", C::Verb, N::Singular),
    ("put", C::Verb, N::Plural),
    ("puts", C::Verb, N::Singular),
    ("mean", C::Verb, N::Plural),
    ("means", C::Verb, N::Singular),
    ("keep", C::Verb, N::Plural),
    ("keeps", C::Verb, N::Singular),
    ("let", C::Verb, N::Plural),
    ("lets", C::Verb, N::Singular),
    ("begin", C::Verb, N::Plural),
    ("begins", C::Verb, N::Singular),
    ("seem", C::Verb, N::Plural),
    ("seems", C::Verb, N::Singular),
    ("help", C::Verb, N::Plural),
    ("helps", C::Verb, N::Singular),
    ("talk", C::Verb, N::Plural),
    ("talks", C::Verb, N::Singular),
    ("turn", C::Verb, N::Plural),
    ("turns", C::Verb, N::Singular),
    ("start", C::Verb, N::Plural),
    ("starts", C::Verb, N::Singular),
    ("show", C::Verb, N::Plural),
    ("shows", C::Verb, N::Singular),
    ("hear", C::Verb, N::Plural),
    ("hears", C::Verb, N::Singular),
    ("play", C::Verb, N::Plural),
    ("plays", C::Verb, N::Singular),
    ("run", C::Verb, N::Plural),
    ("runs", C::Verb, N::Singular),
    ("move", C::Verb, N::Plural),
    ("moves", C::Verb, N::Singular),
    ("like", C::Verb, N::Plural),
    ("likes", C::Verb, N::Singular),
    ("live", C::Verb, N::Plural),
    ("lives", C::Verb, N::Singular),
    ("believe", C::Verb, N::Plural),
    ("believes", C::Verb, N::Singular),
    ("hold", C::Verb, N::Plural),
    ("holds", C::Verb, N::Singular),
    ("bring", C::Verb, N::Plural),
    ("brings", C::Verb, N::Singular),
    ("happen", C::Verb, N::Plural),
    ("happens", C::Verb, N::Singular),
    ("write", C::Verb, N::Plural),
    ("writes", C::Verb, N::Singular),
    ("provide", C::Verb, N::Plural),
    ("provides", C::Verb, N::Singular),
    ("sit", C::Verb, N::Plural),
    ("sits", C::Verb, N::Singular),
    ("stand", C::Verb, N::Plural),
    ("stands", C::Verb, N::Singular),
    ("lose", C::Verb, N::Plural),
    ("loses", C::Verb, N::Singular),
    ("pay", C::Verb, N::Plural),
    ("pays", C::Verb, N::Singular),
    ("meet", C::Verb, N::Plural),
    ("meets", C::Verb, N::Singular),
    ("include", C::Verb, N::Plural),
    ("includes", C::Verb, N::Singular),
    ("continue", C::Verb, N::Plural),
    ("continues", C::Verb, N::Singular),
    ("learn", C::Verb, N::Plural),
    ("learns", C::Verb, N::Singular),
    ("change", C::Verb, N::Plural),
    ("changes", C::Verb, N::Singular),
    ("understand", C::Verb, N::Plural),
    ("understands", C::Verb, N::Singular),
    ("watch", C::Verb, N::Plural),
    ("watches", C::Verb, N::Singular),
    ("stop", C::Verb, N::Plural),
    ("stops", C::Verb, N::Singular),
    ("create", C::Verb, N::Plural),
    ("creates", C::Verb, N::Singular),
    ("eat", C::Verb, N::Plural),
    ("eats", C::Verb, N::Singular),

    // Auxiliares modales
    ("can", C::Auxiliary, N::Any),
    ("may", C::Auxiliary, N::Any),
    ("must", C::Auxiliary, N::Any),

    // Adjetivos
    ("other", C::Adjective, N::Any),
    ("new", C::Adjective, N::Any),
    ("good", C::Adjective, N::Any),
    ("high", C::Adjective, N::Any),
    ("old", C::Adjective, N::Any),
    ("great", C::Adjective, N::Any),
    ("big", C::Adjective, N::Any),
    ("small", C::Adjective, N::Any),
    ("large", C::Adjective, N::Any),
    ("young", C::Adjective, N::Any),
    ("different", C::Adjective, N::Any),
    ("long", C::Adjective, N::Any),
    ("little", C::Adjective, N::Any),
    ("important", C::Adjective, N::Any),
    ("bad", C::Adjective, N::Any),
    ("right", C::Adjective, N::Any),
    ("early", C::Adjective, N::Any),
    ("able", C::Adjective, N::Any),
    ("happy", C::Adjective, N::Any),
    ("sad", C::Adjective, N::Any),
    ("black", C::Adjective, N::Any),
    ("white", C::Adjective, N::Any),
    ("real", C::Adjective, N::Any),
    ("best", C::Adjective, N::Any),
    ("public", C::Adjective, N::Any),
    ("sure", C::Adjective, N::Any),
    ("low", C::Adjective, N::Any),
    ("local", C::Adjective, N::Any),
    ("late", C::Adjective, N::Any),
    ("human", C::Adjective, N::Any),
    ("strong", C::Adjective, N::Any),
    ("weak", C::Adjective, N::Any),
    ("beautiful", C::Adjective, N::Any),
    ("ugly", C::Adjective, N::Any),
    ("easy", C::Adjective, N::Any),
    ("difficult", C::Adjective, N::Any),
    ("hot", C::Adjective, N::Any),
    ("cold", C::Adjective, N::Any),
    ("fast", C::Adjective, N::Any),
    ("slow", C::Adjective, N::Any),
    ("busy", C::Adjective, N::Any),
    ("free", C::Adjective, N::Any),
    ("clean", C::Adjective, N::Any),
    ("dirty", C::Adjective, N::Any),
    ("full", C::Adjective, N::Any),
    ("empty", C::Adjective, N::Any),

    // Preposiciones
    ("in", C::Preposition, N::Any),
    ("on", C::Preposition, N::Any),
    ("under", C::Preposition, N::Any),
    ("with", C::Preposition, N::Any),
    ("near", C::Preposition, N::Any),
    ("from", C::Preposition, N::Any),
    ("to", C::Preposition, N::Any),
    ("at", C::Preposition, N::Any),
    ("for", C::Preposition, N::Any),
];

static ENGLISH: Lazy<Trie> = Lazy::new(|| {
    let mut trie = Trie::new();
    for &(word, category, number) in ENTRIES {
        trie.insert(word, WordInfo::new(category, number));
    }
    trie
});

/// Léxico inglés por defecto
pub fn english() -> &'static Trie {
    &ENGLISH
}

/// Copia mutable del léxico por defecto, para ampliarlo con diccionarios propios
pub fn english_owned() -> Trie {
    let mut trie = Trie::new();
    for (word, info) in ENGLISH.get_all_words() {
        trie.insert(&word, info);
    }
    trie
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Lexicon;

    #[test]
    fn test_builtin_has_no_duplicates() {
        assert_eq!(english().len(), ENTRIES.len());
    }

    #[test]
    fn test_work_is_a_verb() {
        // "work" solo figura como verbo, no como sustantivo incontable
        let info = english().lookup("work").unwrap();
        assert_eq!(info.category, WordCategory::Verb);
        assert_eq!(info.number, Number::Plural);
    }

    #[test]
    fn test_first_person_pronoun_takes_plural_verb() {
        let info = english().lookup("I").unwrap();
        assert_eq!(info.category, WordCategory::Pronoun);
        assert_eq!(info.number, Number::Plural);
    }

    #[test]
    fn test_separator_is_not_a_lexicon_entry() {
        assert!(english().lookup(",").is_none());
    }

    #[test]
    fn test_owned_copy_matches() {
        let copy = english_owned();
        assert_eq!(copy.len(), english().len());
        assert_eq!(copy.get("family"), english().get("family"));
    }
}
