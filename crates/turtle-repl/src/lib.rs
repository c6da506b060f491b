//! Console front end for the turtle graphics session.
//!
//! A deliberately plain line loop: one producer, one session, no widgets.
//! The console thread owns the session for its whole life, so commands are
//! fully applied one at a time in arrival order.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;

use turtle_canvas::{BufferCanvas, CanvasConfig};
use turtle_session::{FileStore, NullImageStore, Session};

/// Command-line options.
#[derive(Debug, Parser)]
#[command(name = "turtle", about = "Interactive turtle graphics console")]
pub struct Args {
    /// Canvas width in pixels.
    #[arg(long, default_value_t = 800)]
    pub width: i32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 400)]
    pub height: i32,

    /// File used by `save commands` / `load commands`.
    #[arg(long, default_value = "commands.txt")]
    pub commands_file: PathBuf,

    /// Command script to replay before reading from stdin.
    #[arg(long)]
    pub script: Option<PathBuf>,
}

/// Run the console loop until `exit` or end of input.
pub fn run() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let canvas = BufferCanvas::new(CanvasConfig {
        width: args.width,
        height: args.height,
    });
    let mut session = Session::with_stores(
        canvas,
        Box::new(FileStore::new(&args.commands_file)),
        Box::new(NullImageStore),
    );

    if let Some(path) = &args.script {
        let text = std::fs::read_to_string(path)?;
        let lines: Vec<String> = text.lines().map(str::to_string).collect();
        tracing::info!(path = %path.display(), count = lines.len(), "replaying script");
        session.replay_lines(&lines);
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        print!("Enter command: ");
        stdout.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break; // end of input
        }
        let command = line.trim();
        if command.is_empty() {
            continue;
        }
        if command.eq_ignore_ascii_case("exit") {
            println!("Exiting program...");
            break;
        }
        if command.eq_ignore_ascii_case("undo") {
            println!("{}", session.undo());
            continue;
        }

        match session.execute(command) {
            Ok(message) => println!("{message}"),
            Err(error) => println!("{error}"),
        }
    }

    if session.drawing_unsaved() || session.commands_unsaved() {
        eprintln!("Warning: exiting with unsaved work.");
    }
    Ok(())
}
