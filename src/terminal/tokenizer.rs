//! Output stream tokenizer.
//!
//! Splits a chunk of terminal output into tokens. At every position the
//! recognizers are tried in a fixed priority order and the first one that
//! matches wins:
//!
//! 1. OSC sequence (`ESC ]` or `0x9D`, terminated by `BEL`)
//! 2. CSI sequence (`ESC [` or `0x9B`, parameters, intermediates, final byte)
//! 3. Any other `ESC` followed by one ASCII character
//! 4. A run of printable ASCII characters
//! 5. A single character (backspace, CR, LF, or anything else)
//!
//! Every token consumes at least one character, so tokenizing always
//! terminates, even on malformed input.

const ESC: char = '\x1b';
const BEL: u8 = 0x07;
const OSC_C1: char = '\u{9d}';
const CSI_C1: char = '\u{9b}';

/// A token extracted from the output stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Operating system command (window title etc.), never rendered
    Osc,
    /// Control sequence: raw parameter/intermediate bytes and the final byte
    Csi { params: &'a str, action: char },
    /// Two-character escape that is not OSC or CSI
    Escape(char),
    /// Run of printable characters
    Text(&'a str),
    Backspace,
    CarriageReturn,
    LineFeed,
    /// Any other single character
    Unknown(char),
}

/// Iterator over the tokens of one output chunk.
pub struct Tokenizer<'a> {
    rest: &'a str,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { rest: input }
    }

    fn advance(&mut self, len: usize, token: Token<'a>) -> Option<Token<'a>> {
        self.rest = &self.rest[len..];
        Some(token)
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let input = self.rest;
        let first = input.chars().next()?;

        if let Some(len) = match_osc(input) {
            return self.advance(len, Token::Osc);
        }
        if let Some((len, params, action)) = match_csi(input) {
            return self.advance(len, Token::Csi { params, action });
        }
        if let Some((len, c)) = match_escape(input) {
            return self.advance(len, Token::Escape(c));
        }
        let text_len = printable_run(input);
        if text_len > 0 {
            return self.advance(text_len, Token::Text(&input[..text_len]));
        }

        let token = match first {
            '\x08' => Token::Backspace,
            '\r' => Token::CarriageReturn,
            '\n' => Token::LineFeed,
            other => Token::Unknown(other),
        };
        self.advance(first.len_utf8(), token)
    }
}

/// Length of the introducer if `input` starts with the 7-bit or 8-bit form.
fn introducer(input: &str, seven_bit: char, eight_bit: char) -> Option<usize> {
    let mut chars = input.chars();
    match chars.next()? {
        ESC if chars.next() == Some(seven_bit) => Some(2),
        c if c == eight_bit => Some(c.len_utf8()),
        _ => None,
    }
}

fn match_osc(input: &str) -> Option<usize> {
    let start = introducer(input, ']', OSC_C1)?;
    let end = input.as_bytes()[start..].iter().position(|&b| b == BEL)?;
    Some(start + end + 1)
}

fn match_csi(input: &str) -> Option<(usize, &str, char)> {
    let start = introducer(input, '[', CSI_C1)?;
    let bytes = &input.as_bytes()[start..];

    let mut i = 0;
    while i < bytes.len() && (0x30..=0x3f).contains(&bytes[i]) {
        i += 1;
    }
    while i < bytes.len() && (0x20..=0x2f).contains(&bytes[i]) {
        i += 1;
    }
    let action = *bytes.get(i)?;
    if !(0x40..=0x7e).contains(&action) {
        return None;
    }

    let params = &input[start..start + i];
    Some((start + i + 1, params, action as char))
}

fn match_escape(input: &str) -> Option<(usize, char)> {
    let mut chars = input.chars();
    if chars.next()? != ESC {
        return None;
    }
    let c = chars.next().filter(char::is_ascii)?;
    Some((2, c))
}

fn printable_run(input: &str) -> usize {
    input
        .bytes()
        .position(|b| !(0x20..=0x7e).contains(&b))
        .unwrap_or(input.len())
}
