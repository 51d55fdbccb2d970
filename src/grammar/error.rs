//! Errores léxicos y sintácticos

use thiserror::Error;

use crate::dictionary::{Number, WordCategory};

/// Palabra ausente del léxico. Invalida toda la entrada antes de analizarla.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexicalError {
    #[error("Unknown word '{word}' at position {position}")]
    UnknownWord { word: String, position: usize },
}

/// Error de sintaxis o de concordancia dentro de una oración.
/// Siempre recuperable sincronizando en el separador.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Expected {expected}, found {found} ('{word}') at position {position}.")]
    UnexpectedToken {
        expected: WordCategory,
        found: WordCategory,
        word: String,
        position: usize,
    },

    #[error("Unexpected end of input at position {position}. Expected category: {expected}.")]
    UnexpectedEnd {
        expected: WordCategory,
        position: usize,
    },

    #[error("Expected NP, found end of sentence at position {position}.")]
    MissingNounPhrase { position: usize },

    #[error("Expected DET, PRON or N to start NP, found {found} ('{word}') at position {position}.")]
    InvalidNounPhraseStart {
        found: WordCategory,
        word: String,
        position: usize,
    },

    #[error("Agreement Error: Determiner '{determiner}' ({determiner_number}) mismatch with noun '{noun}' ({noun_number}) at position {position}.")]
    DeterminerAgreement {
        determiner: String,
        determiner_number: Number,
        noun: String,
        noun_number: Number,
        position: usize,
    },

    #[error("Grammar Error: Countable singular noun '{noun}' cannot appear without a determiner (position {position}).")]
    BareSingularNoun { noun: String, position: usize },

    #[error("Subject–Verb Agreement Error: Subject is {subject}, but verb '{verb}' is {verb_number} (position {position}).")]
    SubjectVerbAgreement {
        subject: Number,
        verb: String,
        verb_number: Number,
        position: usize,
    },

    #[error("Unexpected comma found at start of sentence (position {position}).")]
    LeadingSeparator { position: usize },

    #[error("Expected ',' or End of Input, found '{word}' at position {position}.")]
    ExpectedSeparator { word: String, position: usize },
}

impl ParseError {
    /// Posición (1-based) del token que provocó el error
    pub fn position(&self) -> usize {
        match self {
            ParseError::UnexpectedToken { position, .. }
            | ParseError::UnexpectedEnd { position, .. }
            | ParseError::MissingNounPhrase { position }
            | ParseError::InvalidNounPhraseStart { position, .. }
            | ParseError::DeterminerAgreement { position, .. }
            | ParseError::BareSingularNoun { position, .. }
            | ParseError::SubjectVerbAgreement { position, .. }
            | ParseError::LeadingSeparator { position }
            | ParseError::ExpectedSeparator { position, .. } => *position,
        }
    }
}
