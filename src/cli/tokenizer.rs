// Free-text command tokenizer
//
// A command line is the command keyword, an optional unnamed argument, and
// named arguments introduced by `/name` markers:
//
//   event trip /from 5/3 1000 /to tomorrow
//
// tokenizes to command "event", positional "trip", from = "5/3 1000",
// to = "tomorrow". A marker is a token that starts with the prefix and has
// at least one more non-whitespace character; a lone `/` or a slash inside
// a word (like `5/3`) is ordinary text.

use std::collections::HashMap;

/// Prefix character introducing a named argument.
const ARGUMENT_PREFIX: char = '/';

/// Key the unnamed (positional) argument is stored under.
pub const POSITIONAL: &str = "";

/// One tokenized input line: the command keyword plus its arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokens {
    pub command: String,
    pub args: HashMap<String, String>,
}

impl Tokens {
    /// Value of a named argument, or of the positional one via
    /// [`POSITIONAL`].
    pub fn get(&self, name: &str) -> Option<&str> {
        self.args.get(name).map(String::as_str)
    }
}

/// Tokenize one raw input line. Never fails: a line with no recognizable
/// arguments yields just the command keyword.
///
/// A marker's value is the trimmed text up to the next marker (empty if
/// the marker is last). Repeated names keep the last occurrence. Text
/// before the first marker becomes the positional argument.
pub fn tokenize(line: &str) -> Tokens {
    let (command, rest) = match line.split_once(' ') {
        Some((command, rest)) => (command, rest),
        None => (line, ""),
    };

    let mut tokens = Tokens {
        command: command.to_string(),
        args: HashMap::new(),
    };

    // Scan whitespace-delimited words, cutting a segment each time a
    // marker starts; the segment belongs to the previous marker, or is
    // the positional argument if no marker has been seen yet.
    let mut cursor = 0;
    let mut pending: Option<&str> = None;
    for (start, word) in words_with_offsets(rest) {
        if is_marker(word) {
            store(&mut tokens.args, pending.take(), rest[cursor..start].trim());
            pending = Some(&word[ARGUMENT_PREFIX.len_utf8()..]);
            cursor = start + word.len();
        }
    }
    store(&mut tokens.args, pending, rest[cursor..].trim());

    tokens
}

fn is_marker(word: &str) -> bool {
    word.starts_with(ARGUMENT_PREFIX) && word.len() > ARGUMENT_PREFIX.len_utf8()
}

fn store(args: &mut HashMap<String, String>, name: Option<&str>, value: &str) {
    match name {
        Some(name) => {
            args.insert(name.to_string(), value.to_string());
        }
        // No marker seen yet: non-empty text is the positional argument.
        None if !value.is_empty() => {
            args.insert(POSITIONAL.to_string(), value.to_string());
        }
        None => {}
    }
}

fn words_with_offsets(s: &str) -> Vec<(usize, &str)> {
    let mut words = Vec::new();
    let mut start = None;
    for (i, c) in s.char_indices() {
        if c.is_whitespace() {
            if let Some(word_start) = start.take() {
                words.push((word_start, &s[word_start..i]));
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(word_start) = start {
        words.push((word_start, &s[word_start..]));
    }
    words
}
