//! Turtle graphics console.
//!
//! Reads one command per line from stdin and feeds it to the session
//! until a case-insensitive `exit` (or end of input).

fn main() {
    if let Err(e) = turtle_repl::run() {
        eprintln!("console error: {}", e);
        std::process::exit(1);
    }
}
