//! Analizador sintáctico descendente recursivo
//!
//! Gramática (un token de anticipación decide cada producción):
//!
//! ```text
//! Program    -> Sentence ( COMMA Sentence )*
//! Sentence   -> NounPhrase VerbPhrase
//! NounPhrase -> PRON
//!             | DET AdjList N PPList
//!             | N PPList                  (solo plurales, incontables y colectivos)
//! AdjList    -> ADJ AdjList | ε
//! PPList     -> PP PPList | ε
//! PP         -> PREP NounPhrase
//! VerbPhrase -> AuxList V VPBody
//! AuxList    -> AUX AuxList | ε
//! VPBody     -> NounPhrase PPList | PPList | ε
//! ```
//!
//! Las concordancias se validan durante el análisis, en cuanto se acepta
//! el token que las decide.

use crate::dictionary::{Number, WordCategory};

use super::error::ParseError;
use super::tokenizer::Token;

/// Cursor sobre la secuencia de tokens. Solo avanza.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Token actual o `None` al final de la entrada
    pub fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Índice del siguiente token sin consumir
    pub fn cursor(&self) -> usize {
        self.pos
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Descarta el token actual sin validarlo
    pub fn skip(&mut self) -> Option<&'a Token> {
        let token = self.current()?;
        self.pos += 1;
        Some(token)
    }

    fn current_is(&self, category: WordCategory) -> bool {
        self.current().is_some_and(|t| t.is(category))
    }

    /// Posición que se informa cuando la entrada se acaba
    fn end_position(&self) -> usize {
        self.tokens.last().map_or(1, |t| t.position + 1)
    }

    /// Consume el token actual si es de la categoría esperada
    pub fn accept(&mut self, expected: WordCategory) -> Result<&'a Token, ParseError> {
        let Some(token) = self.current() else {
            return Err(ParseError::UnexpectedEnd {
                expected,
                position: self.end_position(),
            });
        };

        if token.category != expected {
            return Err(ParseError::UnexpectedToken {
                expected,
                found: token.category,
                word: token.word.clone(),
                position: token.position,
            });
        }

        self.pos += 1;
        Ok(token)
    }

    /// Sentence -> NounPhrase VerbPhrase
    ///
    /// Devuelve el número del sujeto.
    pub fn sentence(&mut self) -> Result<Number, ParseError> {
        let subject = self.noun_phrase()?;
        self.verb_phrase(subject)?;
        Ok(subject)
    }

    /// NounPhrase -> PRON | DET AdjList N PPList | N PPList
    ///
    /// Devuelve el número efectivo del sintagma.
    pub fn noun_phrase(&mut self) -> Result<Number, ParseError> {
        let Some(token) = self.current() else {
            return Err(ParseError::MissingNounPhrase {
                position: self.end_position(),
            });
        };

        match token.category {
            WordCategory::Pronoun => {
                let pronoun = self.accept(WordCategory::Pronoun)?;
                Ok(pronoun.number)
            }
            WordCategory::Determiner => {
                let determiner = self.accept(WordCategory::Determiner)?;
                self.adjective_list();
                let noun = self.accept(WordCategory::Noun)?;
                let noun_number = noun.number.agreement();

                if determiner.number != Number::Any && determiner.number != noun_number {
                    return Err(ParseError::DeterminerAgreement {
                        determiner: determiner.word.clone(),
                        determiner_number: determiner.number,
                        noun: noun.word.clone(),
                        noun_number: noun.number,
                        position: noun.position,
                    });
                }

                self.prepositional_list()?;
                Ok(noun_number)
            }
            WordCategory::Noun => {
                let noun = self.accept(WordCategory::Noun)?;

                if !noun.number.allows_bare_noun() {
                    return Err(ParseError::BareSingularNoun {
                        noun: noun.word.clone(),
                        position: noun.position,
                    });
                }

                self.prepositional_list()?;
                Ok(noun.number.agreement())
            }
            found => Err(ParseError::InvalidNounPhraseStart {
                found,
                word: token.word.clone(),
                position: token.position,
            }),
        }
    }

    /// AdjList -> ADJ AdjList | ε
    fn adjective_list(&mut self) {
        while self.current_is(WordCategory::Adjective) {
            self.pos += 1;
        }
    }

    /// PPList -> PP PPList | ε
    fn prepositional_list(&mut self) -> Result<(), ParseError> {
        while self.current_is(WordCategory::Preposition) {
            self.prepositional_phrase()?;
        }
        Ok(())
    }

    /// PP -> PREP NounPhrase
    fn prepositional_phrase(&mut self) -> Result<(), ParseError> {
        self.accept(WordCategory::Preposition)?;
        self.noun_phrase()?;
        Ok(())
    }

    /// AuxList -> AUX AuxList | ε
    fn auxiliary_list(&mut self) {
        while self.current_is(WordCategory::Auxiliary) {
            self.pos += 1;
        }
    }

    /// VerbPhrase -> AuxList V VPBody
    ///
    /// Los auxiliares no intervienen en la concordancia sujeto-verbo.
    fn verb_phrase(&mut self, subject: Number) -> Result<(), ParseError> {
        self.auxiliary_list();
        let verb = self.accept(WordCategory::Verb)?;

        if verb.number != subject {
            return Err(ParseError::SubjectVerbAgreement {
                subject,
                verb: verb.word.clone(),
                verb_number: verb.number,
                position: verb.position,
            });
        }

        self.verb_phrase_body()
    }

    /// VPBody -> NounPhrase PPList | PPList | ε
    fn verb_phrase_body(&mut self) -> Result<(), ParseError> {
        if self.current().is_some_and(|t| t.category.starts_noun_phrase()) {
            // Objeto directo
            self.noun_phrase()?;
        }
        self.prepositional_list()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::english;
    use crate::grammar::Tokenizer;

    fn tokens(text: &str) -> Vec<Token> {
        Tokenizer::new().tokenize(text, english::english()).unwrap()
    }

    #[test]
    fn test_sentence_returns_subject_number() {
        let toks = tokens("the dogs eat the apple");
        let mut parser = Parser::new(&toks);

        assert_eq!(parser.sentence(), Ok(Number::Plural));
        assert!(parser.is_at_end());
    }

    #[test]
    fn test_uncountable_subject_is_singular() {
        let toks = tokens("water helps");
        let mut parser = Parser::new(&toks);

        assert_eq!(parser.sentence(), Ok(Number::Singular));
    }

    #[test]
    fn test_collective_subject_is_singular() {
        let toks = tokens("family lives in the house");
        let mut parser = Parser::new(&toks);

        assert_eq!(parser.sentence(), Ok(Number::Singular));
        assert!(parser.is_at_end());
    }

    #[test]
    fn test_adjectives_and_auxiliaries() {
        let toks = tokens("the big old dogs can must eat the small apples");
        let mut parser = Parser::new(&toks);

        assert_eq!(parser.sentence(), Ok(Number::Plural));
        assert!(parser.is_at_end());
    }

    #[test]
    fn test_nested_prepositional_phrases() {
        let toks = tokens("the book on the table near the door is");
        let mut parser = Parser::new(&toks);

        assert_eq!(parser.sentence(), Ok(Number::Singular));
        assert!(parser.is_at_end());
    }

    #[test]
    fn test_determiner_agreement_stops_before_modifiers() {
        let toks = tokens("these dog in the house runs");
        let mut parser = Parser::new(&toks);

        let err = parser.noun_phrase().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Agreement Error: Determiner 'these' (PL) mismatch with noun 'dog' (SGC) at position 2."
        );
        // Los tokens posteriores al sustantivo no se han consumido
        assert_eq!(parser.cursor(), 2);
    }

    #[test]
    fn test_any_determiner_agrees_with_everything() {
        for text in ["the dog runs", "the dogs run", "the water helps"] {
            let toks = tokens(text);
            assert!(Parser::new(&toks).sentence().is_ok(), "{text}");
        }
    }

    #[test]
    fn test_bare_singular_countable_noun() {
        let toks = tokens("dog eats the apple");
        let err = Parser::new(&toks).sentence().unwrap_err();

        assert_eq!(
            err,
            ParseError::BareSingularNoun {
                noun: "dog".to_string(),
                position: 1,
            }
        );
    }

    #[test]
    fn test_subject_verb_agreement() {
        let toks = tokens("the dog eat the apple");
        let err = Parser::new(&toks).sentence().unwrap_err();

        assert_eq!(
            err,
            ParseError::SubjectVerbAgreement {
                subject: Number::Singular,
                verb: "eat".to_string(),
                verb_number: Number::Plural,
                position: 3,
            }
        );
    }

    #[test]
    fn test_missing_verb_at_end() {
        let toks = tokens("the dog");
        let err = Parser::new(&toks).sentence().unwrap_err();

        assert_eq!(
            err,
            ParseError::UnexpectedEnd {
                expected: WordCategory::Verb,
                position: 3,
            }
        );
    }

    #[test]
    fn test_noun_phrase_cannot_start_with_verb() {
        let toks = tokens("eats the apple");
        let err = Parser::new(&toks).sentence().unwrap_err();

        assert!(matches!(
            err,
            ParseError::InvalidNounPhraseStart {
                found: WordCategory::Verb,
                position: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_preposition_without_object() {
        let toks = tokens("he runs to");
        let err = Parser::new(&toks).sentence().unwrap_err();

        assert_eq!(err, ParseError::MissingNounPhrase { position: 4 });
    }

    #[test]
    fn test_stops_before_separator() {
        let toks = tokens("he runs , she runs");
        let mut parser = Parser::new(&toks);

        assert!(parser.sentence().is_ok());
        assert!(parser.current().unwrap().is_separator());
    }
}
