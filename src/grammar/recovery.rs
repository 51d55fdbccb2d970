//! Recuperación de errores en modo pánico
//!
//! Procesa una lista de oraciones separadas por comas. La coma es a la vez
//! separador sintáctico y token de sincronización: tras un error se
//! descartan tokens hasta la siguiente coma y el análisis continúa con la
//! oración siguiente.

use super::error::ParseError;
use super::parser::Parser;
use super::result::ParseResult;
use super::tokenizer::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    ScanningSentence,
    Recovering,
}

/// Resumen del recorrido completo de la entrada
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramReport {
    /// Oraciones analizadas sin errores
    pub sentences: usize,
    /// Errores en orden de aparición, uno por oración fallida
    pub errors: Vec<ParseError>,
}

impl ProgramReport {
    pub fn into_result(self) -> ParseResult {
        if !self.errors.is_empty() {
            ParseResult::failure(self.errors.iter().map(ToString::to_string).collect())
        } else if self.sentences == 0 {
            ParseResult::no_input()
        } else {
            ParseResult::success()
        }
    }
}

/// Program -> Sentence ( COMMA Sentence )*
pub fn parse_program(tokens: &[Token]) -> ProgramReport {
    let mut report = ProgramReport::default();

    // Solo separadores: no hay ninguna oración que intentar
    if tokens.iter().all(Token::is_separator) {
        return report;
    }

    let mut parser = Parser::new(tokens);
    let mut state = State::ScanningSentence;

    while let Some(token) = parser.current() {
        state = match state {
            State::ScanningSentence => match scan_sentence(&mut parser, token) {
                Ok(()) => {
                    report.sentences += 1;
                    State::ScanningSentence
                }
                Err(err) => {
                    report.errors.push(err);
                    State::Recovering
                }
            },
            State::Recovering => {
                synchronize(&mut parser);
                State::ScanningSentence
            }
        };
    }

    report
}

/// Analiza una oración completa y su delimitador
fn scan_sentence(parser: &mut Parser<'_>, first: &Token) -> Result<(), ParseError> {
    if first.is_separator() {
        return Err(ParseError::LeadingSeparator {
            position: first.position,
        });
    }

    parser.sentence()?;

    match parser.current() {
        None => Ok(()),
        Some(token) if token.is_separator() => {
            parser.skip();
            Ok(())
        }
        Some(token) => Err(ParseError::ExpectedSeparator {
            word: token.word.clone(),
            position: token.position,
        }),
    }
}

/// Descarta tokens hasta consumir un separador o agotar la entrada
fn synchronize(parser: &mut Parser<'_>) {
    while let Some(token) = parser.skip() {
        if token.is_separator() {
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::english;
    use crate::grammar::Tokenizer;

    fn report(text: &str) -> ProgramReport {
        let tokens = Tokenizer::new().tokenize(text, english::english()).unwrap();
        parse_program(&tokens)
    }

    #[test]
    fn test_several_valid_sentences() {
        let report = report("the dog eats , the cats run , she reads a book");
        assert_eq!(report.sentences, 3);
        assert!(report.errors.is_empty());
        assert!(report.into_result().ok);
    }

    #[test]
    fn test_error_then_recovery() {
        let report = report("the dogs eats , the cat runs");
        assert_eq!(report.sentences, 1);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].position(), 3);
    }

    #[test]
    fn test_one_error_per_failed_sentence() {
        let report = report("dog runs , the cat runs , the dogs runs");
        assert_eq!(report.sentences, 1);
        assert_eq!(report.errors.len(), 2);
        assert_eq!(report.errors[0].position(), 1);
        assert_eq!(report.errors[1].position(), 10);
    }

    #[test]
    fn test_leading_separator() {
        let report = report(", the dog eats");
        assert_eq!(report.errors, vec![ParseError::LeadingSeparator { position: 1 }]);
        // La sincronización consume la coma y la oración siguiente se analiza
        assert_eq!(report.sentences, 1);
    }

    #[test]
    fn test_trailing_words_after_sentence() {
        let report = report("the dog eats the apple the cat");
        assert_eq!(
            report.errors,
            vec![ParseError::ExpectedSeparator {
                word: "the".to_string(),
                position: 6,
            }]
        );
    }

    #[test]
    fn test_trailing_separator_is_accepted() {
        let report = report("the dog eats ,");
        assert_eq!(report.sentences, 1);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_double_separator() {
        let report = report("he runs , , she runs");
        assert_eq!(report.sentences, 2);
        assert_eq!(report.errors, vec![ParseError::LeadingSeparator { position: 4 }]);
    }

    #[test]
    fn test_only_separators_report_no_input() {
        for text in [",", ", ,", " ,, "] {
            let report = report(text);
            assert_eq!(report.sentences, 0);
            assert!(report.errors.is_empty(), "{:?}", text);
            assert_eq!(report.into_result(), ParseResult::no_input());
        }
    }

    #[test]
    fn test_empty_input_reports_no_input() {
        let result = parse_program(&[]).into_result();
        assert_eq!(result, ParseResult::no_input());
    }
}
