//! Tokenizador de texto

use crate::dictionary::{Lexicon, Number, WordCategory};

use super::error::LexicalError;

/// Separador de oraciones
pub const SEPARATOR: char = ',';

/// Puntuación final que se elimina de cada palabra
const SENTENCE_PUNCTUATION: &[char] = &['.', '!', '?'];

/// Token clasificado por el léxico. Inmutable una vez creado.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Palabra limpia y en minúsculas
    pub word: String,
    pub category: WordCategory,
    pub number: Number,
    /// Posición en la oración (1, 2, 3, ...)
    pub position: usize,
}

impl Token {
    pub fn new(word: &str, category: WordCategory, number: Number, position: usize) -> Self {
        Self {
            word: word.to_string(),
            category,
            number,
            position,
        }
    }

    pub fn is(&self, category: WordCategory) -> bool {
        self.category == category
    }

    pub fn is_separator(&self) -> bool {
        self.is(WordCategory::Comma)
    }
}

/// Tokenizador de texto
#[derive(Debug, Clone, Default)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Tokeniza una oración consultando el léxico.
    ///
    /// Falla en la primera palabra desconocida: la entrada completa se
    /// rechaza antes de analizarla.
    pub fn tokenize(&self, text: &str, lexicon: &dyn Lexicon) -> Result<Vec<Token>, LexicalError> {
        // Separar el separador para que sea un token independiente
        let separator = SEPARATOR.to_string();
        let processed = text.replace(SEPARATOR, &format!(" {} ", separator));
        let lowered = processed.to_lowercase();

        let mut tokens = Vec::new();

        for (index, unit) in lowered.split_whitespace().enumerate() {
            let position = index + 1;
            let clean = unit.trim_matches(SENTENCE_PUNCTUATION);

            // Palabra vacía tras limpiar la puntuación: consume posición pero no genera token
            if clean.is_empty() {
                continue;
            }

            if clean == separator {
                tokens.push(Token::new(clean, WordCategory::Comma, Number::Any, position));
                continue;
            }

            let info = lexicon
                .lookup(clean)
                .ok_or_else(|| LexicalError::UnknownWord {
                    word: clean.to_string(),
                    position,
                })?;

            tokens.push(Token::new(clean, info.category, info.number, position));
        }

        Ok(tokens)
    }
}
