//! Motor principal de verificación

use thiserror::Error;

use crate::config::Config;
use crate::dictionary::{english, DictionaryLoader, Lexicon, LoadError, Trie};
use crate::grammar::{parse_program, LexicalError, ParseResult, Token, Tokenizer};

/// Error al preparar el verificador
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Error cargando léxico: {0}")]
    Lexicon(#[source] LoadError),

    #[error("Error cargando diccionario adicional: {0}")]
    CustomDict(#[source] LoadError),
}

/// Origen del léxico activo
enum ActiveLexicon {
    Builtin,
    Loaded(Trie),
}

/// Motor principal del verificador
pub struct Verificador {
    lexicon: ActiveLexicon,
    tokenizer: Tokenizer,
}

impl Verificador {
    /// Crea el verificador según la configuración.
    ///
    /// Sin opciones usa el léxico inglés incorporado; `lexicon` lo reemplaza
    /// y `custom_dict` lo amplía.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let mut loaded = match config.lexicon {
            Some(ref path) => Some(DictionaryLoader::load_from_file(path).map_err(ConfigError::Lexicon)?),
            None => None,
        };

        if let Some(ref custom) = config.custom_dict {
            let trie = loaded.get_or_insert_with(english::english_owned);
            let added = DictionaryLoader::append_from_file(trie, custom).map_err(ConfigError::CustomDict)?;
            if config.verbose {
                eprintln!("Diccionario adicional '{}': {} entradas", custom.display(), added);
            }
        }

        let lexicon = match loaded {
            Some(trie) => {
                if trie.is_empty() {
                    eprintln!("Advertencia: el léxico cargado está vacío.");
                }
                ActiveLexicon::Loaded(trie)
            }
            None => ActiveLexicon::Builtin,
        };

        let verificador = Self {
            lexicon,
            tokenizer: Tokenizer::new(),
        };

        if config.verbose {
            eprintln!("Léxico activo: {} palabras", verificador.trie().len());
        }

        Ok(verificador)
    }

    /// Verificador con el léxico incorporado
    pub fn english() -> Self {
        Self {
            lexicon: ActiveLexicon::Builtin,
            tokenizer: Tokenizer::new(),
        }
    }

    fn trie(&self) -> &Trie {
        match self.lexicon {
            ActiveLexicon::Builtin => english::english(),
            ActiveLexicon::Loaded(ref trie) => trie,
        }
    }

    pub fn lexicon(&self) -> &dyn Lexicon {
        self.trie()
    }

    /// Tokens de una oración, para diagnóstico
    pub fn tokens(&self, text: &str) -> Result<Vec<Token>, LexicalError> {
        self.tokenizer.tokenize(text, self.lexicon())
    }

    /// Analiza una oración (o varias separadas por comas)
    pub fn analyze(&self, text: &str) -> ParseResult {
        analyze_with(&self.tokenizer, text, self.lexicon())
    }

    /// Analiza cada línea no vacía del texto por separado
    pub fn analyze_lines<'t>(&self, text: &'t str) -> Vec<(&'t str, ParseResult)> {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| (line, self.analyze(line)))
            .collect()
    }
}

/// Analiza una oración con el tokenizador por defecto.
///
/// Un error léxico rechaza la entrada completa; los errores sintácticos se
/// acumulan, uno por oración fallida.
pub fn analyze_sentence(text: &str, lexicon: &dyn Lexicon) -> ParseResult {
    analyze_with(&Tokenizer::new(), text, lexicon)
}

fn analyze_with(tokenizer: &Tokenizer, text: &str, lexicon: &dyn Lexicon) -> ParseResult {
    match tokenizer.tokenize(text, lexicon) {
        Ok(tokens) => parse_program(&tokens).into_result(),
        Err(e) => ParseResult::failure(vec![format!("Lexical Error: {}", e)]),
    }
}
