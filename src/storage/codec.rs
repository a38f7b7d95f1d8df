// Line codec for persisted tasks
//
// One task per line, no newlines inside a record:
//
//   T<done><description>
//   D<done><len(desc)#4><description><by>
//   E<done><len(desc)#4><description><len(from)#4><from><to>
//
// <done> is '1' or '0'. Length prefixes are 4-digit zero-padded character
// counts; they exist only where a variable-length field precedes more
// data. Timestamps use the fixed-width layout from utils::date, so the
// trailing field needs no prefix.

use crate::models::{Task, TaskKind};
use crate::utils::date::{decode_date_time, encode_date_time};
use thiserror::Error;

/// A persisted line that does not follow the encoding format.
///
/// Every decode failure (unknown tag, bad done flag, bad or lying length
/// prefix, truncated line, unparseable timestamp) collapses to this one
/// error; the storage layer attaches the line number.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("corrupted record")]
pub struct DecodeError;

/// Encode a task as one line of text (without the trailing newline).
pub fn encode(task: &Task) -> String {
    let tag = task.kind.type_tag();
    let done = if task.done { '1' } else { '0' };
    match &task.kind {
        TaskKind::Todo => format!("{}{}{}", tag, done, task.description),
        TaskKind::Deadline { by } => format!(
            "{}{}{:04}{}{}",
            tag,
            done,
            task.description.chars().count(),
            task.description,
            encode_date_time(by)
        ),
        TaskKind::Event { from, to } => {
            let from = encode_date_time(from);
            format!(
                "{}{}{:04}{}{:04}{}{}",
                tag,
                done,
                task.description.chars().count(),
                task.description,
                from.chars().count(),
                from,
                encode_date_time(to)
            )
        }
    }
}

/// Decode one line back into a task. Inverse of [`encode`].
pub fn decode(line: &str) -> Result<Task, DecodeError> {
    let mut reader = Reader::new(line);
    let tag = reader.next_char()?;
    let done = match reader.next_char()? {
        '1' => true,
        '0' => false,
        _ => return Err(DecodeError),
    };

    let mut task = match tag {
        'T' => Task::todo(reader.rest()),
        'D' => {
            let n = reader.length_prefix()?;
            let description = reader.take(n)?;
            let by = decode_date_time(&reader.rest()).map_err(|_| DecodeError)?;
            Task::deadline(description, by)
        }
        'E' => {
            let n = reader.length_prefix()?;
            let description = reader.take(n)?;
            let m = reader.length_prefix()?;
            let from = decode_date_time(&reader.take(m)?).map_err(|_| DecodeError)?;
            let to = decode_date_time(&reader.rest()).map_err(|_| DecodeError)?;
            Task::event(description, from, to)
        }
        _ => return Err(DecodeError),
    };
    task.done = done;
    Ok(task)
}

/// Cursor over the characters of one record. Length prefixes count
/// characters, not bytes, so non-ASCII descriptions round-trip.
struct Reader {
    chars: Vec<char>,
    pos: usize,
}

impl Reader {
    fn new(line: &str) -> Self {
        Self {
            chars: line.chars().collect(),
            pos: 0,
        }
    }

    fn next_char(&mut self) -> Result<char, DecodeError> {
        let c = self.chars.get(self.pos).copied().ok_or(DecodeError)?;
        self.pos += 1;
        Ok(c)
    }

    /// Exactly `n` characters, or an error if the line is too short.
    fn take(&mut self, n: usize) -> Result<String, DecodeError> {
        let end = self.pos.checked_add(n).ok_or(DecodeError)?;
        if end > self.chars.len() {
            return Err(DecodeError);
        }
        let s = self.chars[self.pos..end].iter().collect();
        self.pos = end;
        Ok(s)
    }

    /// A 4-digit zero-padded length prefix.
    fn length_prefix(&mut self) -> Result<usize, DecodeError> {
        let digits = self.take(4)?;
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DecodeError);
        }
        digits.parse().map_err(|_| DecodeError)
    }

    /// Everything left on the line, possibly empty.
    fn rest(&mut self) -> String {
        let s: String = self.chars[self.pos..].iter().collect();
        self.pos = self.chars.len();
        s
    }
}
