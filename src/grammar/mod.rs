//! Motor de gramática
//!
//! Tokenización contra el léxico y análisis descendente recursivo con
//! recuperación en modo pánico.

pub mod error;
pub mod parser;
pub mod recovery;
pub mod result;
pub mod tokenizer;

pub use error::{LexicalError, ParseError};
pub use parser::Parser;
pub use recovery::{parse_program, ProgramReport};
pub use result::ParseResult;
pub use tokenizer::{Token, Tokenizer};
