use std::fmt::Display;

use phf::phf_map;

/// Closed set of lexeme categories produced by the expression lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    OpenParen,     // (
    CloseParen,    // )
    Comma,         // ,
    Dot,           // .
    Minus,         // -
    Eq,            // =
    Slash,         // /
    Question,      // ?
    Colon,         // :
    Star,          // *

    Identifier,

    StringLiteral,
    IntegerLiteral,
    Int64Literal,
    DecimalLiteral,
    DoubleLiteral,
    SingleLiteral,
    BooleanLiteral,
    NullLiteral,

    // Literals of the form prefix'body'
    DateTimeLiteral,
    DateTimeOffsetLiteral,
    TimeLiteral,
    GuidLiteral,
    BinaryLiteral,
    GeographyLiteral,
    GeometryLiteral,

    End,
    /// Placeholder kind of a token that has not been scanned yet.
    Unknown,
}

impl TokenKind {
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            TokenKind::IntegerLiteral
                | TokenKind::DecimalLiteral
                | TokenKind::DoubleLiteral
                | TokenKind::Int64Literal
                | TokenKind::SingleLiteral
        )
    }

    pub fn is_literal(self) -> bool {
        self.is_numeric()
            || matches!(
                self,
                TokenKind::StringLiteral
                    | TokenKind::BooleanLiteral
                    | TokenKind::NullLiteral
                    | TokenKind::DateTimeLiteral
                    | TokenKind::DateTimeOffsetLiteral
                    | TokenKind::TimeLiteral
                    | TokenKind::GuidLiteral
                    | TokenKind::BinaryLiteral
                    | TokenKind::GeographyLiteral
                    | TokenKind::GeometryLiteral
            )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let val = match self {
            TokenKind::OpenParen => "'('",
            TokenKind::CloseParen => "')'",
            TokenKind::Comma => "','",
            TokenKind::Dot => "'.'",
            TokenKind::Minus => "'-'",
            TokenKind::Eq => "'='",
            TokenKind::Slash => "'/'",
            TokenKind::Question => "'?'",
            TokenKind::Colon => "':'",
            TokenKind::Star => "'*'",
            TokenKind::Identifier => "identifier",
            TokenKind::StringLiteral => "string literal",
            TokenKind::IntegerLiteral => "integer literal",
            TokenKind::Int64Literal => "int64 literal",
            TokenKind::DecimalLiteral => "decimal literal",
            TokenKind::DoubleLiteral => "double literal",
            TokenKind::SingleLiteral => "single literal",
            TokenKind::BooleanLiteral => "boolean literal",
            TokenKind::NullLiteral => "null literal",
            TokenKind::DateTimeLiteral => "datetime literal",
            TokenKind::DateTimeOffsetLiteral => "datetimeoffset literal",
            TokenKind::TimeLiteral => "time literal",
            TokenKind::GuidLiteral => "guid literal",
            TokenKind::BinaryLiteral => "binary literal",
            TokenKind::GeographyLiteral => "geography literal",
            TokenKind::GeometryLiteral => "geometry literal",
            TokenKind::End => "end of expression",
            TokenKind::Unknown => "unknown",
        };
        write!(f, "{val}")
    }
}

/// One scanned lexeme: its kind, its verbatim input text (delimiters and
/// type prefix included), and the zero-based offset where it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: &str, position: usize) -> Self {
        Self {
            kind,
            text: text.to_owned(),
            position,
        }
    }

    pub fn end(position: usize) -> Self {
        Self {
            kind: TokenKind::End,
            text: String::new(),
            position,
        }
    }

    pub fn dummy() -> Self {
        Self {
            kind: TokenKind::Unknown,
            text: String::new(),
            position: 0,
        }
    }
}

/// Prefixes of type-prefixed literals, keyed lowercase; lookups are
/// case-insensitive.
const LITERAL_PREFIX: phf::Map<&'static str, TokenKind> = phf_map! {
    "datetime" => TokenKind::DateTimeLiteral,
    "datetimeoffset" => TokenKind::DateTimeOffsetLiteral,
    "time" => TokenKind::TimeLiteral,
    "guid" => TokenKind::GuidLiteral,
    "binary" => TokenKind::BinaryLiteral,
    "x" => TokenKind::BinaryLiteral,
    "geography" => TokenKind::GeographyLiteral,
    "geometry" => TokenKind::GeometryLiteral,
};

/// Literal kind named by `ident` when it directly precedes a quote.
/// The typed-null form `null'...'` is the one exact-case entry.
pub fn check_literal_prefix(ident: &str) -> Option<TokenKind> {
    if ident == "null" {
        return Some(TokenKind::NullLiteral);
    }
    LITERAL_PREFIX
        .get(ident.to_ascii_lowercase().as_str())
        .copied()
}
