extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
extern crate mortal;

mod console;
mod surface;

pub use console::ConsoleHost;

use crate::mach::Runtime;
use ansi_term::Style;
use linefeed::{Interface, ReadResult, Signal};
use std::fs;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub fn main() {
    if std::env::args().count() > 2 {
        println!("Usage: itl [FILENAME]");
        return;
    }
    let mut args = std::env::args();
    let _executable = args.next();
    let filename = match args.next() {
        Some(f) => f,
        _ => "".into(),
    };
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    match main_loop(interrupted, filename) {
        Ok(code) => std::process::exit(code),
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(1);
        }
    }
}

fn main_loop(interrupted: Arc<AtomicBool>, filename: String) -> std::io::Result<i32> {
    let host = ConsoleHost::new(interrupted)?;
    let mut runtime = Runtime::new(host);

    if !filename.is_empty() {
        let source = match fs::read_to_string(&filename) {
            Ok(source) => source,
            Err(error) => {
                let message = format!("Error: Cannot open file '{}': {}", filename, error);
                eprintln!("{}", Style::new().bold().paint(message));
                return Ok(1);
            }
        };
        runtime.load(&source);
        runtime.run();
        return Ok(0);
    }

    runtime.set_repl(true);
    let command = Interface::new("itl")?;
    command.set_report_signal(Signal::Interrupt, true);
    println!("ITL (Incredibly Tiny Language) REPL v0.5.0");
    println!("Type ':help' for the list of commands.");
    println!("Type ':exit' to quit.");
    println!();

    loop {
        command.set_prompt(&runtime.prompt())?;
        match command.read_line()? {
            ReadResult::Input(line) => {
                if runtime.enter(&line) {
                    command.add_history_unique(line);
                }
                if runtime.done() {
                    break;
                }
            }
            ReadResult::Signal(_) => continue,
            ReadResult::Eof => break,
        }
    }
    Ok(0)
}
