//! Configuración y argumentos CLI

use std::path::PathBuf;

use clap::{CommandFactory, Parser, ValueEnum};

/// Formato de salida de los resultados
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Oración a analizar (argumento posicional)
    pub text: Option<String>,
    /// Archivo de entrada, una oración por línea
    pub input_file: Option<PathBuf>,
    /// Léxico que reemplaza al incorporado
    pub lexicon: Option<PathBuf>,
    /// Léxico adicional que amplía el activo
    pub custom_dict: Option<PathBuf>,
    /// Formato de salida (default: text)
    pub format: OutputFormat,
    /// Mostrar los tokens antes del análisis
    pub show_tokens: bool,
    /// Mensajes informativos por stderr
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            text: None,
            input_file: None,
            lexicon: None,
            custom_dict: None,
            format: OutputFormat::Text,
            show_tokens: false,
            verbose: false,
        }
    }
}

/// Verificador sintáctico para un subconjunto reducido del inglés
#[derive(Debug, Parser)]
#[command(name = "verificador", version, about)]
#[command(after_help = r#"EJEMPLOS:
    verificador "the dog eats the apple"
    verificador -f oraciones.txt
    verificador --format json "the dogs eats , the cat runs"
    verificador -d mi_lexico.txt "the robot beeps""#)]
struct Cli {
    /// Oración a analizar
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    text: Option<String>,

    /// Archivo de entrada (una oración por línea)
    #[arg(short = 'f', long = "file", value_name = "ARCHIVO")]
    file: Option<PathBuf>,

    /// Léxico que reemplaza al incorporado (formato palabra|categoría|número)
    #[arg(long, value_name = "ARCHIVO")]
    lexicon: Option<PathBuf>,

    /// Léxico adicional que amplía el activo
    #[arg(short = 'd', long = "custom-dict", value_name = "ARCHIVO")]
    custom_dict: Option<PathBuf>,

    /// Formato de salida
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Muestra los tokens reconocidos
    #[arg(short = 't', long = "tokens")]
    tokens: bool,

    /// Mensajes informativos por stderr
    #[arg(short, long)]
    verbose: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            text: cli.text,
            input_file: cli.file,
            lexicon: cli.lexicon,
            custom_dict: cli.custom_dict,
            format: cli.format,
            show_tokens: cli.tokens,
            verbose: cli.verbose,
        }
    }
}

impl Config {
    /// Interpreta los argumentos (el primero es el nombre del programa)
    pub fn from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Cli::try_parse_from(args).map(Config::from)
    }

    /// Texto de ayuda de la línea de comandos
    pub fn help() -> String {
        Cli::command().render_help().to_string()
    }

    pub fn print_help() {
        println!("{}", Self::help());
    }
}
