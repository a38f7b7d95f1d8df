// Session input/output formatting

use std::io::{self, Write};

/// Horizontal rule printed around each message block.
const DIVIDER: &str = "____________________________________________________________";

/// Reads raw lines from stdin and prints framed message blocks.
///
/// Confirmations go to stdout; errors go to stderr with an `Error:`
/// prefix. Both use the same framed layout.
pub struct Ui {
    stdin: io::Stdin,
}

impl Ui {
    pub fn new() -> Self {
        Self { stdin: io::stdin() }
    }

    pub fn show_greeting(&self) {
        self.show("Hello! I'm Bob.\nWhat can I do for you?");
    }

    /// Print a confirmation block.
    pub fn show(&self, message: &str) {
        println!("{}", DIVIDER);
        for line in message.lines() {
            println!(" {}", line);
        }
        println!("{}", DIVIDER);
        let _ = io::stdout().flush();
    }

    /// Print an error block.
    pub fn show_error(&self, message: &str) {
        eprintln!("{}", DIVIDER);
        eprintln!(" Error: {}", message);
        eprintln!("{}", DIVIDER);
    }

    /// Read the next raw input line. Returns None at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        let n = self.stdin.read_line(&mut line)?;
        if n == 0 {
            Ok(None)
        } else {
            Ok(Some(line))
        }
    }
}

impl Default for Ui {
    fn default() -> Self {
        Self::new()
    }
}
