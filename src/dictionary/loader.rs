//! Cargador de léxicos desde archivos

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::trie::{Number, Trie, WordCategory, WordInfo};

/// Error al cargar un archivo de léxico
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("No se pudo abrir el archivo '{}': {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("Error leyendo línea {line}: {source}")]
    Read { line: usize, source: io::Error },

    #[error("Línea {line}: formato esperado 'palabra|categoría|número', se encontró '{content}'")]
    Malformed { line: usize, content: String },

    #[error("Línea {line}: categoría desconocida '{value}'")]
    UnknownCategory { line: usize, value: String },

    #[error("Línea {line}: número desconocido '{value}'")]
    UnknownNumber { line: usize, value: String },
}

pub struct DictionaryLoader;

impl DictionaryLoader {
    /// Carga un léxico desde un archivo
    ///
    /// Formato esperado: palabra|categoría|número
    /// Ejemplo: dog|N|SGC
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Trie, LoadError> {
        let mut trie = Trie::new();
        Self::append_from_file(&mut trie, path)?;
        Ok(trie)
    }

    /// Añade las entradas de un archivo a un trie existente.
    /// Devuelve el número de entradas leídas.
    pub fn append_from_file<P: AsRef<Path>>(trie: &mut Trie, path: P) -> Result<usize, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        Self::append_from_reader(trie, BufReader::new(file))
    }

    /// Igual que `append_from_file`, pero sobre cualquier lector
    pub fn append_from_reader<R: BufRead>(trie: &mut Trie, reader: R) -> Result<usize, LoadError> {
        let mut count = 0;

        for (index, line_result) in reader.lines().enumerate() {
            let line_num = index + 1;
            let line = line_result.map_err(|source| LoadError::Read {
                line: line_num,
                source,
            })?;

            let line = line.trim();

            // Ignorar líneas vacías y comentarios
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (word, info) = Self::parse_line(line, line_num)?;
            trie.insert(word, info);
            count += 1;
        }

        Ok(count)
    }

    fn parse_line(line: &str, line_num: usize) -> Result<(&str, WordInfo), LoadError> {
        let parts: Vec<&str> = line.split('|').map(str::trim).collect();

        let (word, category, number) = match parts.as_slice() {
            [word, category] => (*word, *category, "ANY"),
            [word, category, number] => (*word, *category, *number),
            _ => {
                return Err(LoadError::Malformed {
                    line: line_num,
                    content: line.to_string(),
                })
            }
        };

        if word.is_empty() {
            return Err(LoadError::Malformed {
                line: line_num,
                content: line.to_string(),
            });
        }

        let category = WordCategory::from_code(category).ok_or_else(|| LoadError::UnknownCategory {
            line: line_num,
            value: category.to_string(),
        })?;
        let number = Number::from_code(number).ok_or_else(|| LoadError::UnknownNumber {
            line: line_num,
            value: number.to_string(),
        })?;

        Ok((word, WordInfo::new(category, number)))
    }
}
