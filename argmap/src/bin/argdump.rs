// Test runner: parses its own arguments and prints the result.
//
// Output, one item per line on stdout:
//   option KEY            option without a value
//   option KEY=VALUE      option with a value
//   argument TEXT         additional argument
//   typed KEY=VALUE       converted value (only with ARGDUMP_TYPE)
//
// ARGDUMP_TYPE=bool|string|int|long|double converts every option value with
// the matching parser. The first failure exits with status 1.

use std::fmt::Display;
use std::process::ExitCode;

use argmap::{OptionValue, ParseResult};
use tracing_subscriber::EnvFilter;

fn print_typed<T: OptionValue + Display>(result: &ParseResult) -> argmap::Result<()> {
    for option in result.options() {
        if let Some(value) = result.get::<T>(option.key())? {
            println!("typed {}={}", option.key(), value);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let result = argmap::parse_env();

    for option in result.options() {
        match option.value() {
            Some(value) => println!("option {}={}", option.key(), value),
            None => println!("option {}", option.key()),
        }
    }
    for arg in result.additional() {
        println!("argument {}", arg);
    }

    let Ok(type_name) = std::env::var("ARGDUMP_TYPE") else {
        return ExitCode::SUCCESS;
    };
    let typed = match type_name.as_str() {
        "bool" => print_typed::<bool>(&result),
        "string" => print_typed::<String>(&result),
        "int" => print_typed::<i32>(&result),
        "long" => print_typed::<i64>(&result),
        "double" => print_typed::<f64>(&result),
        other => {
            eprintln!("argdump: unknown ARGDUMP_TYPE '{}'", other);
            return ExitCode::from(2);
        }
    };

    match typed {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "conversion failed");
            eprintln!("argdump: {}", e);
            ExitCode::FAILURE
        }
    }
}
