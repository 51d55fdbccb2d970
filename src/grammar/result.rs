//! Resultado del análisis

use serde::Serialize;

pub const SUCCESS_MESSAGE: &str = "Parsing successful.";
pub const NO_INPUT_MESSAGE: &str = "No input provided.";

/// Resultado final devuelto al llamador: éxito y mensajes en orden de aparición
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    pub ok: bool,
    pub messages: Vec<String>,
}

impl ParseResult {
    pub fn success() -> Self {
        Self {
            ok: true,
            messages: vec![SUCCESS_MESSAGE.to_string()],
        }
    }

    pub fn failure(messages: Vec<String>) -> Self {
        Self { ok: false, messages }
    }

    pub fn no_input() -> Self {
        Self::failure(vec![NO_INPUT_MESSAGE.to_string()])
    }

    /// Mensajes de error (vacío si el análisis tuvo éxito)
    pub fn errors(&self) -> &[String] {
        if self.ok {
            &[]
        } else {
            &self.messages
        }
    }
}
