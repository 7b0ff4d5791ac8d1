//! Indentation-aware lexer.
//!
//! The lexer exposes a one-token cursor: `current` returns the most recently
//! produced token and `next_token` advances. Indentation depth is tracked in
//! pairs of spaces; crossing a level at the start of a line synthesizes
//! `Indent`/`Dedent` tokens, one level per token.

mod error;
mod token;

pub use error::{LexError, LexResult};
pub use token::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexerState {
    /// Immediately after an emitted Newline, Indent or Dedent: leading
    /// spaces are significant and compared against the depth counter.
    LineBegin,
    /// Inside a line: spaces are insignificant separators.
    TokenStart,
}

pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    depth: usize,
    state: LexerState,
    current: Token,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer and primes the cursor with the first token.
    pub fn new(input: &'a str) -> LexResult<Self> {
        let mut lexer = Self {
            input,
            pos: 0,
            depth: 0,
            // The start of input is not a line start: a first line indented
            // by stray spaces is scanned like interior whitespace.
            state: LexerState::TokenStart,
            current: Token::Eof,
        };
        lexer.next_token()?;
        Ok(lexer)
    }

    pub fn current(&self) -> &Token {
        &self.current
    }

    /// Produces the next token, stores it as current and returns it. Once
    /// `Eof` is reached it is returned on every subsequent call.
    pub fn next_token(&mut self) -> LexResult<Token> {
        let token = self.scan_token()?;
        self.current = token.clone();
        Ok(token)
    }

    fn scan_token(&mut self) -> LexResult<Token> {
        loop {
            if self.state == LexerState::LineBegin {
                match self.scan_line_begin()? {
                    Some(token) => return Ok(token),
                    None => continue,
                }
            }

            self.consume_while(|c| c == ' ');
            match self.peek_char() {
                None => return Ok(self.eof_token()),
                Some('\n') => {
                    self.consume_char();
                    if matches!(self.current, Token::Eof | Token::Newline) {
                        // Nothing emitted on this line yet: the newline of an
                        // empty leading line is dropped.
                        continue;
                    }
                    self.state = LexerState::LineBegin;
                    return Ok(Token::Newline);
                }
                Some('#') => {
                    self.skip_comment();
                }
                Some(c) if c.is_ascii_alphabetic() || c == '_' => return Ok(self.read_word()),
                Some(c) if c.is_ascii_digit() => return self.read_number(),
                Some(c @ ('"' | '\'')) => return self.read_string(c),
                Some(c) => return self.read_operator(c),
            }
        }
    }

    /// Handles the leading spaces of a fresh line. Returns `Some` for a
    /// synthesized Indent/Dedent, `None` when scanning should continue
    /// (blank or comment-only line, or the line joins at the current depth).
    fn scan_line_begin(&mut self) -> LexResult<Option<Token>> {
        let line_start = self.pos;
        let space_count = self.consume_while(|c| c == ' ');

        if let Some('#') = self.peek_char() {
            self.skip_comment();
        }
        match self.peek_char() {
            None => {
                self.state = LexerState::TokenStart;
                return Ok(None);
            }
            Some('\n') => {
                // Blank and comment-only lines do not change indentation.
                self.consume_char();
                return Ok(None);
            }
            _ => {}
        }

        if space_count % 2 != 0 {
            return Err(LexError::OddIndentation {
                spaces: space_count,
                position: line_start,
            });
        }
        let pairs = space_count / 2;
        if pairs == self.depth {
            self.state = LexerState::TokenStart;
            return Ok(None);
        }

        // Cross one level per token and re-examine the spaces on the next
        // call, so multi-level jumps surface as chains of Indent/Dedent.
        self.pos = line_start;
        if pairs > self.depth {
            self.depth += 1;
            Ok(Some(Token::Indent))
        } else {
            self.depth -= 1;
            Ok(Some(Token::Dedent))
        }
    }

    /// End of input: unwind pending dedents, then close the last logical
    /// line with a Newline unless one is already implied, then report Eof.
    fn eof_token(&mut self) -> Token {
        if self.depth > 0 {
            self.depth -= 1;
            return Token::Dedent;
        }
        if !matches!(self.current, Token::Eof | Token::Dedent | Token::Newline) {
            return Token::Newline;
        }
        Token::Eof
    }

    fn read_word(&mut self) -> Token {
        let start = self.pos;
        self.consume_while(|c| c.is_ascii_alphanumeric() || c == '_');
        let lexeme = &self.input[start..self.pos];

        if lexeme.starts_with('_') {
            return Token::Id(lexeme.to_string());
        }
        match lexeme {
            "class" => Token::Class,
            "return" => Token::Return,
            "if" => Token::If,
            "else" => Token::Else,
            "def" => Token::Def,
            "print" => Token::Print,
            "and" => Token::And,
            "or" => Token::Or,
            "not" => Token::Not,
            "None" => Token::None,
            "True" => Token::True,
            "False" => Token::False,
            _ => Token::Id(lexeme.to_string()),
        }
    }

    fn read_number(&mut self) -> LexResult<Token> {
        let start = self.pos;
        self.consume_while(|c| c.is_ascii_digit());
        let literal = &self.input[start..self.pos];
        let number = literal
            .parse::<i64>()
            .map_err(|_| LexError::InvalidIntegerLiteral {
                literal: literal.to_string(),
                position: start,
            })?;
        Ok(Token::Number(number))
    }

    fn read_string(&mut self, quote: char) -> LexResult<Token> {
        let start = self.pos;
        self.consume_char();
        let mut value = String::new();
        loop {
            match self.consume_char() {
                None | Some('\n') => {
                    return Err(LexError::UnterminatedString { position: start });
                }
                Some(c) if c == quote => break,
                Some('\\') => {
                    let escape_pos = self.pos;
                    let escaped = self
                        .consume_char()
                        .ok_or(LexError::UnterminatedString { position: start })?;
                    match escaped {
                        'n' => value.push('\n'),
                        't' => value.push('\t'),
                        'r' => value.push('\r'),
                        '"' => value.push('"'),
                        '\'' => value.push('\''),
                        '\\' => value.push('\\'),
                        other => {
                            return Err(LexError::UnrecognizedEscape {
                                character: other,
                                position: escape_pos,
                            });
                        }
                    }
                }
                Some(c) => value.push(c),
            }
        }
        Ok(Token::String(value))
    }

    fn read_operator(&mut self, first: char) -> LexResult<Token> {
        let position = self.pos;
        self.consume_char();
        let token = match first {
            '+' | '-' | '*' | '/' | '.' | ',' | ':' | '(' | ')' => Token::Char(first),
            '=' => {
                if self.eat_char('=') {
                    Token::Eq
                } else {
                    Token::Char('=')
                }
            }
            '<' => {
                if self.eat_char('=') {
                    Token::LessOrEq
                } else {
                    Token::Char('<')
                }
            }
            '>' => {
                if self.eat_char('=') {
                    Token::GreaterOrEq
                } else {
                    Token::Char('>')
                }
            }
            '!' => {
                if self.eat_char('=') {
                    Token::NotEq
                } else {
                    return Err(LexError::IncompleteNotEqual { position });
                }
            }
            other => {
                return Err(LexError::UnexpectedCharacter {
                    character: other,
                    position,
                });
            }
        };
        Ok(token)
    }

    fn skip_comment(&mut self) {
        self.consume_while(|c| c != '\n');
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn consume_char(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat_char(&mut self, expected: char) -> bool {
        if self.peek_char() == Some(expected) {
            self.consume_char();
            return true;
        }
        false
    }

    fn consume_while<P>(&mut self, keep: P) -> usize
    where
        P: Fn(char) -> bool,
    {
        let mut count = 0;
        while let Some(c) = self.peek_char() {
            if !keep(c) {
                break;
            }
            self.consume_char();
            count += 1;
        }
        count
    }
}

/// Lexes the whole input into a vector ending with `Eof`.
pub fn tokenize(input: &str) -> LexResult<Vec<Token>> {
    let mut lexer = Lexer::new(input)?;
    let mut tokens = vec![lexer.current().clone()];
    while tokens.last() != Some(&Token::Eof) {
        tokens.push(lexer.next_token()?);
    }
    Ok(tokens)
}
