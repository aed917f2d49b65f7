pub mod cursor;
pub mod tokens;

use cursor::Cursor;
use thiserror::Error;
use tokens::{check_literal_prefix, Token, TokenKind};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unterminated string literal at position {position} in '{expression}'")]
    UnterminatedStringLiteral { position: usize, expression: String },

    #[error("unterminated '{prefix}' literal at position {position} in '{expression}'")]
    UnterminatedTypePrefixedLiteral {
        prefix: String,
        position: usize,
        expression: String,
    },

    #[error("invalid character '{character}' at position {position} in '{expression}'")]
    InvalidCharacter {
        character: char,
        position: usize,
        expression: String,
    },

    #[error("a digit was expected at position {position} in '{expression}'")]
    DigitExpected { position: usize, expression: String },

    #[error("expected {expected} at position {position} in '{expression}', found '{found}'")]
    SyntaxError {
        expected: TokenKind,
        found: String,
        position: usize,
        expression: String,
    },
}

/// Lexer over one query expression. Produces tokens strictly left to right;
/// lookahead runs the scanner on a clone of the cursor, so peeking can never
/// corrupt state. One lexer per expression, never shared.
#[derive(Debug)]
pub struct ExpressionLexer<'a> {
    cursor: Cursor<'a>,
    token: Token,
}

impl<'a> ExpressionLexer<'a> {
    /// Lexer with the first token already scanned.
    pub fn new(expression: &'a str) -> Result<Self, LexError> {
        let mut lexer = Self::unprimed(expression);
        lexer.next_token()?;
        Ok(lexer)
    }

    /// Lexer that has not scanned anything yet; `current_token` is a
    /// placeholder until the first `next_token` call.
    pub fn unprimed(expression: &'a str) -> Self {
        Self {
            cursor: Cursor::new(expression),
            token: Token::dummy(),
        }
    }

    pub fn expression(&self) -> &'a str {
        self.cursor.src()
    }

    pub fn current_token(&self) -> &Token {
        &self.token
    }

    /// Scans and consumes the next token, advancing the lexer past it.
    pub fn next_token(&mut self) -> Result<&Token, LexError> {
        self.token = self.cursor.scan_token()?;
        Ok(&self.token)
    }

    /// Computes what `next_token` would return without consuming it.
    pub fn peek_next_token(&self) -> Result<Token, LexError> {
        let mut probe = self.cursor.clone();
        probe.scan_token()
    }

    /// Peek that swallows the scan error; probe call sites pick the failure
    /// up when they actually consume.
    pub fn try_peek_next_token(&self) -> Option<Token> {
        self.peek_next_token().ok()
    }

    /// Fails unless the current token has the expected kind.
    pub fn validate_token(&self, expected: TokenKind) -> Result<(), LexError> {
        if self.token.kind == expected {
            Ok(())
        } else {
            Err(LexError::SyntaxError {
                expected,
                found: self.token.text.clone(),
                position: self.token.position,
                expression: self.cursor.src().to_owned(),
            })
        }
    }

    /// Reads a dotted name like `Namespace.Sub.Type` starting at the current
    /// identifier token. Whitespace around the dots is dropped, and the
    /// lexer ends up on the first token past the dotted name.
    pub fn read_dotted_identifier(&mut self) -> Result<String, LexError> {
        self.validate_token(TokenKind::Identifier)?;
        let mut name = self.token.text.clone();

        while self.next_token()?.kind == TokenKind::Dot {
            self.next_token()?;
            self.validate_token(TokenKind::Identifier)?;
            name.push('.');
            name.push_str(&self.token.text);
        }

        Ok(name)
    }
}

/// Tokenizes a whole expression, stopping after an error or before the
/// `End` token.
pub fn tokenize(input: &str) -> impl Iterator<Item = Result<Token, LexError>> + '_ {
    let mut cursor = Cursor::new(input);
    let mut done = false;
    std::iter::from_fn(move || {
        if done {
            return None;
        }
        match cursor.scan_token() {
            Ok(token) if token.kind == TokenKind::End => {
                done = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(e) => {
                done = true;
                Some(Err(e))
            }
        }
    })
}

impl<'a> Cursor<'a> {
    fn scan_token(&mut self) -> Result<Token, LexError> {
        self.eat_while(char::is_whitespace);
        let start = self.pos();

        let Some(first) = self.first() else {
            return Ok(Token::end(start));
        };

        let kind = match first {
            '(' => self.punct(TokenKind::OpenParen),
            ')' => self.punct(TokenKind::CloseParen),
            ',' => self.punct(TokenKind::Comma),
            '.' => self.punct(TokenKind::Dot),
            '=' => self.punct(TokenKind::Eq),
            '/' => self.punct(TokenKind::Slash),
            '?' => self.punct(TokenKind::Question),
            ':' => self.punct(TokenKind::Colon),
            '*' => self.punct(TokenKind::Star),

            '-' => self.scan_minus()?,

            '\'' => {
                self.scan_quoted(start)?;
                TokenKind::StringLiteral
            }

            c if is_ident_start(c) => self.scan_ident_or_literal(start)?,

            c if c.is_ascii_digit() => self.scan_number()?,

            c => {
                return Err(LexError::InvalidCharacter {
                    character: c,
                    position: start,
                    expression: self.src().to_owned(),
                })
            }
        };

        Ok(Token::new(kind, self.slice_from(start), start))
    }

    fn punct(&mut self, kind: TokenKind) -> TokenKind {
        self.bump();
        kind
    }

    /// Disambiguates `-`: a negative numeric literal, a negative infinity
    /// spelling, or a bare minus. The trials run forward and rewind by
    /// restoring a cursor snapshot, never by unwinding.
    fn scan_minus(&mut self) -> Result<TokenKind, LexError> {
        match self.second() {
            Some(c) if c.is_ascii_digit() => {
                let saved = self.clone();
                self.bump();
                let kind = self.scan_number()?;
                if kind.is_numeric() {
                    Ok(kind)
                } else {
                    // '-0x..' is a minus applied to a binary literal, not a
                    // negative number
                    *self = saved;
                    self.bump();
                    Ok(TokenKind::Minus)
                }
            }
            Some(c) if is_ident_start(c) => {
                let saved = self.clone();
                self.bump();
                let ident_start = self.pos();
                self.eat_while(is_ident_continue);
                match self.slice_from(ident_start) {
                    "INF" => Ok(TokenKind::DoubleLiteral),
                    "INFf" | "INFF" => Ok(TokenKind::SingleLiteral),
                    _ => {
                        *self = saved;
                        self.bump();
                        Ok(TokenKind::Minus)
                    }
                }
            }
            _ => {
                self.bump();
                Ok(TokenKind::Minus)
            }
        }
    }

    /// Scans a quoted run starting at the cursor's quote character. A
    /// doubled quote is an escaped quote and does not terminate the run.
    fn scan_quoted(&mut self, start: usize) -> Result<(), LexError> {
        self.bump();
        loop {
            match self.bump() {
                Some('\'') => {
                    if self.first() == Some('\'') {
                        self.bump();
                    } else {
                        return Ok(());
                    }
                }
                Some(_) => {}
                None => {
                    return Err(LexError::UnterminatedStringLiteral {
                        position: start,
                        expression: self.src().to_owned(),
                    })
                }
            }
        }
    }

    fn scan_ident_or_literal(&mut self, start: usize) -> Result<TokenKind, LexError> {
        self.eat_while(is_ident_continue);
        let text = self.slice_from(start);

        // An identifier glued to a quote may be a type-prefixed literal;
        // the token then spans prefix and quotes.
        if self.first() == Some('\'') {
            if let Some(kind) = check_literal_prefix(text) {
                let prefix = text.to_owned();
                self.scan_quoted(start).map_err(|_| {
                    LexError::UnterminatedTypePrefixedLiteral {
                        prefix,
                        position: start,
                        expression: self.src().to_owned(),
                    }
                })?;
                return Ok(kind);
            }
        }

        Ok(match text {
            "INF" | "NaN" => TokenKind::DoubleLiteral,
            "INFf" | "INFF" | "NaNf" | "NaNF" => TokenKind::SingleLiteral,
            "true" | "false" => TokenKind::BooleanLiteral,
            "null" => TokenKind::NullLiteral,
            _ => TokenKind::Identifier,
        })
    }

    fn scan_number(&mut self) -> Result<TokenKind, LexError> {
        if self.first() == Some('0') && matches!(self.second(), Some('x' | 'X')) {
            self.bump();
            self.bump();
            if !self.first().is_some_and(|c| c.is_ascii_hexdigit()) {
                return Err(LexError::DigitExpected {
                    position: self.pos(),
                    expression: self.src().to_owned(),
                });
            }
            self.eat_while(|c| c.is_ascii_hexdigit());
            return Ok(TokenKind::BinaryLiteral);
        }

        self.eat_while(|c| c.is_ascii_digit());
        let mut kind = TokenKind::IntegerLiteral;

        if self.first() == Some('.') {
            self.bump();
            self.expect_digits()?;
            kind = TokenKind::DoubleLiteral;
        }

        if matches!(self.first(), Some('e' | 'E')) {
            self.bump();
            if matches!(self.first(), Some('+' | '-')) {
                self.bump();
            }
            self.expect_digits()?;
            kind = TokenKind::DoubleLiteral;
        }

        Ok(match self.first() {
            Some('m' | 'M') => self.punct(TokenKind::DecimalLiteral),
            Some('d' | 'D') => self.punct(TokenKind::DoubleLiteral),
            Some('l' | 'L') => self.punct(TokenKind::Int64Literal),
            Some('f' | 'F') => self.punct(TokenKind::SingleLiteral),
            _ => kind,
        })
    }

    fn expect_digits(&mut self) -> Result<(), LexError> {
        if !self.first().is_some_and(|c| c.is_ascii_digit()) {
            return Err(LexError::DigitExpected {
                position: self.pos(),
                expression: self.src().to_owned(),
            });
        }
        self.eat_while(|c| c.is_ascii_digit());
        Ok(())
    }
}

pub fn is_ident_start(c: char) -> bool {
    c == '_' || c == '$' || unicode_ident::is_xid_start(c)
}

pub fn is_ident_continue(c: char) -> bool {
    c == '$' || unicode_ident::is_xid_continue(c)
}
