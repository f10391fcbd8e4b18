use std::fmt::Display;

use serde::Serialize;

/// Report `err` on stderr and exit with status 1.
pub fn fail(err: impl Display) -> ! {
    eprintln!("error: {}", err);
    std::process::exit(1);
}

/// Print rendered command output, or fail with its error message.
pub fn emit(rendered: Result<String, String>) {
    match rendered {
        Ok(out) => println!("{}", out),
        Err(msg) => fail(msg),
    }
}

pub fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("JSON serialization failed: {}", e))
}
