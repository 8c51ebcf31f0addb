//! C-Minus front end CLI entry point
//!
//! Logging is initialized inside `cli::run` once the `--trace-scan` / `--echo-source` toggles are known.

fn main() {
    cminus::cli::run();
}
