//! Módulo de diccionario
//!
//! Proporciona el léxico (palabra → categoría y número) y su carga desde archivos.

pub mod english;
pub mod lexicon;
pub mod loader;
pub mod trie;

pub use lexicon::Lexicon;
pub use loader::{DictionaryLoader, LoadError};
pub use trie::{Number, Trie, WordCategory, WordInfo};
