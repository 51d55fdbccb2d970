//! Verificador - Analizador sintáctico de un subconjunto del inglés
//!
//! Tokeniza oraciones contra un léxico de solo lectura y las analiza con un
//! parser descendente recursivo que valida concordancias y se recupera de
//! los errores sincronizando en la coma.

pub mod config;
pub mod dictionary;
pub mod grammar;
pub mod verificador;

pub use config::{Config, OutputFormat};
pub use grammar::ParseResult;
pub use verificador::{analyze_sentence, ConfigError, Verificador};
