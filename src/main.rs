use std::fs;
use std::process;

use clap::error::ErrorKind;
use serde::Serialize;

use verificador::{Config, OutputFormat, ParseResult, Verificador};

/// Resultado de una línea en modo archivo
#[derive(Serialize)]
struct LineReport<'a> {
    sentence: &'a str,
    #[serde(flatten)]
    result: &'a ParseResult,
}

fn main() {
    let config = match Config::from_args(std::env::args_os()) {
        Ok(config) => config,
        Err(e) => {
            // --help y --version también llegan aquí, por stdout
            let _ = e.print();
            if e.kind() == ErrorKind::MissingRequiredArgument {
                eprintln!();
                Config::print_help();
            }
            process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    let verificador = match Verificador::new(&config) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error inicializando verificador: {}", e);
            process::exit(1);
        }
    };

    if let Some(ref input_file) = config.input_file {
        let content = match fs::read_to_string(input_file) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error leyendo archivo '{}': {}", input_file.display(), e);
                process::exit(1);
            }
        };

        let results = verificador.analyze_lines(&content);
        if results.is_empty() && config.verbose {
            eprintln!("Advertencia: el archivo no contiene oraciones.");
        }

        match config.format {
            OutputFormat::Text => {
                for (sentence, result) in &results {
                    if config.show_tokens {
                        print_tokens(&verificador, sentence);
                    }
                    print_line_result(sentence, result);
                }
            }
            OutputFormat::Json => {
                let reports: Vec<LineReport> = results
                    .iter()
                    .map(|(sentence, result)| LineReport {
                        sentence: *sentence,
                        result,
                    })
                    .collect();
                print_json(&reports);
            }
        }
    } else if let Some(ref text) = config.text {
        let result = verificador.analyze(text);

        match config.format {
            OutputFormat::Text => {
                if config.show_tokens {
                    print_tokens(&verificador, text);
                }
                print_result(&result);
            }
            OutputFormat::Json => print_json(&result),
        }
    }
}

fn print_result(result: &ParseResult) {
    if result.ok {
        for message in &result.messages {
            println!("✔ {}", message);
        }
    } else {
        println!("✘ Invalid sentence.");
        for message in &result.messages {
            println!("  Detail: {}", message);
        }
    }
}

fn print_line_result(sentence: &str, result: &ParseResult) {
    let status = if result.ok { "OK" } else { "ERROR" };
    println!("[{}] {}", status, sentence);
    for message in result.errors() {
        println!("   -> {}", message);
    }
}

fn print_tokens(verificador: &Verificador, text: &str) {
    match verificador.tokens(text) {
        Ok(tokens) => {
            for token in tokens {
                println!(
                    "  {:>3}  {:<12} {:<5} {}",
                    token.position, token.word, token.category, token.number
                );
            }
        }
        Err(e) => eprintln!("Advertencia: {}", e),
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error generando JSON: {}", e);
            process::exit(1);
        }
    }
}
