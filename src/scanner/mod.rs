// License: MIT

use indexmap::IndexMap;

use crate::ast::{Document, Value};
use crate::QuillError;

mod decode;
mod number;

/// Single-pass scanner over a fully materialized character sequence.
///
/// Walks top-level `name = value` declarations separated by commas or
/// end-of-input and hands each accumulated value substring to the recursive
/// value-literal decoder. One scanner instance serves one `parse` call;
/// independent inputs get independent scanners.
pub struct Scanner {
    input: Vec<char>,
    pos: usize,
    line_pos: usize,
    inside_string: bool,
    inside_array: bool,
    array_depth: u32,
    inside_map: bool,
    value_parse: bool,
}

impl Scanner {
    pub fn new(input: &str) -> Self {
        Scanner {
            input: input.chars().collect(),
            pos: 0,
            line_pos: 0,
            inside_string: false,
            inside_array: false,
            array_depth: 0,
            inside_map: false,
            value_parse: false,
        }
    }

    /// Parse the whole input into a declaration table.
    ///
    /// Every declaration is fully decoded and inserted before the scan
    /// advances to the next one. Any decode failure aborts the entire parse.
    pub fn parse(&mut self) -> Result<Document, QuillError> {
        let mut name = String::new();
        let mut value = String::new();
        let mut declarations = IndexMap::new();

        while self.pos < self.input.len() {
            let c = self.next();

            // A carriage-return/line-feed pair is a single line break. A bare
            // line feed is not specially handled.
            if c == '\r' && self.peek() == Some('\n') {
                self.jump();
                self.line_pos = 0;
                continue;
            }

            // Comment lines are recognized only at column 0 and elided
            // entirely, never appended to a name or value.
            if c == '#' && self.line_pos == 0 && !self.inside_string {
                self.jump_line();
                continue;
            }

            // The space character is the only insignificant whitespace.
            if c == ' ' && !self.inside_string {
                continue;
            }

            // `=` switches from name accumulation to value accumulation. Not
            // a toggle: a stray second `=` leaves the mode unchanged.
            if c == '=' && !self.inside_map && !self.inside_string {
                self.value_parse = true;
                continue;
            }

            // A top-level `,` closes the current declaration.
            if c == ',' && !self.inside_string && !self.inside_array && !self.inside_map {
                self.close_declaration(&mut name, &mut value, &mut declarations)?;
                continue;
            }

            match c {
                '"' => self.inside_string = !self.inside_string,
                '[' => {
                    self.inside_array = true;
                    self.array_depth += 1;
                }
                ']' => {
                    // Only the outermost closing bracket clears the flag.
                    if self.array_depth == 1 {
                        self.inside_array = false;
                    }
                    self.array_depth = self.array_depth.saturating_sub(1);
                }
                '{' => self.inside_map = true,
                '}' => self.inside_map = false,
                _ => {}
            }

            if self.value_parse {
                value.push(c);
            } else {
                name.push(c);
            }
            self.line_pos += 1;
        }

        // End-of-input is not itself a delimiter character, so the final
        // character has already been captured above; flush whatever is
        // pending once the open-literal state checks out.
        if !name.is_empty() || !value.is_empty() {
            if self.inside_string {
                return Err(unterminated('"'));
            }
            if self.array_depth > 0 {
                return Err(unterminated('['));
            }
            if self.inside_map {
                return Err(unterminated('{'));
            }
            self.close_declaration(&mut name, &mut value, &mut declarations)?;
        }

        Ok(Document { declarations })
    }

    fn close_declaration(
        &mut self,
        name: &mut String,
        value: &mut String,
        declarations: &mut IndexMap<String, Value>,
    ) -> Result<(), QuillError> {
        let decoded = decode::decode_value(value)?;
        declarations.insert(std::mem::take(name), decoded);
        value.clear();
        self.value_parse = false;
        self.line_pos = 0;
        Ok(())
    }

    fn next(&mut self) -> char {
        let c = self.input[self.pos];
        self.pos += 1;
        c
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.pos).copied()
    }

    fn jump(&mut self) {
        self.pos += 1;
    }

    /// Discard the remainder of the current line, line break included.
    fn jump_line(&mut self) {
        while self.pos < self.input.len() {
            if self.next() == '\n' {
                break;
            }
        }
        self.line_pos = 0;
    }
}

fn unterminated(delimiter: char) -> QuillError {
    QuillError::UnterminatedLiteral {
        delimiter,
        hint: Some("Literal still open at end of input".into()),
        code: Some(110),
    }
}
