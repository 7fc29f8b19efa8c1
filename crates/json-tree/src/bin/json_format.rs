//! json-format — read JSON on stdin, write pretty-printed JSON on stdout.

use std::io::{self, Read, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut input = String::new();
    if let Err(err) = io::stdin().read_to_string(&mut input) {
        eprintln!("json-format: {err}");
        return ExitCode::FAILURE;
    }
    let value = match json_tree::parse(&input) {
        Ok(value) => value,
        Err(err) => {
            eprintln!("json-format: {err}");
            return ExitCode::FAILURE;
        }
    };
    let mut stdout = io::stdout().lock();
    let result = json_tree::write_to(&value, json_tree::Format::Pretty, &mut stdout)
        .and_then(|()| stdout.write_all(b"\n"));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("json-format: {err}");
            ExitCode::FAILURE
        }
    }
}
