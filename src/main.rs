use std::io::{self, BufRead, Write};

use calq::evaluate;
use clap::Parser;

/// calq evaluates a single-line arithmetic expression over integers, the
/// operators `+ - * /`, and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The expression to evaluate. When omitted, calq prompts for one line
    /// on standard input instead.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    let expression = if let Some(expression) = args.expression {
        expression
    } else {
        read_expression().unwrap_or_else(|e| {
            eprintln!("Failed to read an expression from standard input: {e}");
            std::process::exit(1);
        })
    };

    match evaluate(&expression) {
        Ok(value) => println!("{expression}={value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}

/// Prompts for an expression and reads one line from standard input.
fn read_expression() -> io::Result<String> {
    print!("Enter an expression: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    Ok(line.trim_end().to_string())
}
