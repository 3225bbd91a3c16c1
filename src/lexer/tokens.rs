use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

/// Symbols in match order. Any symbol that is a prefix of another comes after it.
pub const SYMBOLS: &[(&str, TokenKind)] = &[
    ("||", TokenKind::Or),
    ("<=", TokenKind::LessEquals),
    ("&&", TokenKind::And),
    ("==", TokenKind::Equals),
    ("!=", TokenKind::NotEquals),
    (">=", TokenKind::GreaterEquals),
    ("+", TokenKind::Plus),
    ("-", TokenKind::Minus),
    ("<", TokenKind::Less),
    (">", TokenKind::Greater),
    ("*", TokenKind::Star),
    ("/", TokenKind::Slash),
    ("%", TokenKind::Percent),
    ("!", TokenKind::Not),
    ("=", TokenKind::Assignment),
    (";", TokenKind::Semicolon),
    (",", TokenKind::Comma),
    ("{", TokenKind::OpenCurly),
    ("}", TokenKind::CloseCurly),
    ("(", TokenKind::OpenParen),
    (")", TokenKind::CloseParen),
];

/// Marks the rest of the line as a comment. Not a token.
pub const COMMENT_MARKER: &str = "//";

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("print", TokenKind::Print);
        map.insert("bool", TokenKind::Bool);
        map.insert("else", TokenKind::Else);
        map.insert("false", TokenKind::False);
        map.insert("if", TokenKind::If);
        map.insert("true", TokenKind::True);
        map.insert("float", TokenKind::Float);
        map.insert("int", TokenKind::Int);
        map.insert("while", TokenKind::While);
        // `main` shares the `while` kind.
        map.insert("main", TokenKind::While);
        map
    };
    pub static ref SYMBOL_LOOKUP: HashMap<&'static str, TokenKind> =
        SYMBOLS.iter().copied().collect();
}

pub fn lookup_symbol(text: &str) -> Option<TokenKind> {
    SYMBOL_LOOKUP.get(text).copied()
}

pub fn lookup_keyword(text: &str) -> Option<TokenKind> {
    RESERVED_LOOKUP.get(text).copied()
}

#[repr(u16)]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    FileNotFound = 0,
    Illegal = 1,
    EOF = 2,
    InvalidFileName = 3,

    Identifier = 10,
    IntLiteral = 11,
    FloatLiteral = 12,
    StringLiteral = 13,

    Or = 20,         // ||
    Plus = 21,       // +
    Minus = 22,      // -
    Less = 23,       // <
    LessEquals = 24, // <=
    And = 25,        // &&
    Equals = 26,     // ==
    NotEquals = 27,  // !=
    Greater = 28,
    GreaterEquals = 29,
    Star = 30,
    Slash = 31,
    Percent = 32,
    Not = 33,        // !
    Assignment = 34, // =

    Semicolon = 40,
    Comma = 41,
    OpenCurly = 42,
    CloseCurly = 43,
    OpenParen = 44,
    CloseParen = 45,

    // Reserved
    Print = 50,
    Bool = 51,
    Else = 52,
    False = 53,
    If = 54,
    True = 55,
    Float = 56,
    Int = 57,
    While = 58,
}

impl TokenKind {
    pub fn code(self) -> u16 {
        self as u16
    }

    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::EOF => "End-Of-File",
            TokenKind::Illegal => "Illegal-Token",
            TokenKind::FileNotFound => "File-Not-Found",
            TokenKind::InvalidFileName => "Invalid-File-Name",
            TokenKind::Identifier => "Identifier",
            TokenKind::IntLiteral => "Int-Literal",
            TokenKind::FloatLiteral => "Float-Literal",
            TokenKind::StringLiteral => "String-Literal",
            TokenKind::Or => "Or",
            TokenKind::Plus => "Plus",
            TokenKind::Minus => "Minus",
            TokenKind::Less => "Less",
            TokenKind::LessEquals => "Less-Equal",
            TokenKind::And => "And",
            TokenKind::Equals => "Equal",
            TokenKind::NotEquals => "Not-Equal",
            TokenKind::Greater => "Greater",
            TokenKind::GreaterEquals => "Greater-Equal",
            TokenKind::Star => "Multiply",
            TokenKind::Slash => "Divide",
            TokenKind::Percent => "Modul",
            TokenKind::Not => "Logical-Not",
            TokenKind::Assignment => "Assign",
            TokenKind::Semicolon => "Semi-Col",
            TokenKind::Comma => "Comma",
            TokenKind::OpenCurly => "Left-Curly-Brace",
            TokenKind::CloseCurly => "Right-Curly-Brace",
            TokenKind::OpenParen => "Left-Paren",
            TokenKind::CloseParen => "Right-Paren",
            TokenKind::Print
            | TokenKind::Bool
            | TokenKind::Else
            | TokenKind::False
            | TokenKind::If
            | TokenKind::True
            | TokenKind::Float
            | TokenKind::Int
            | TokenKind::While => "Keyword",
        }
    }

    /// Control conditions rather than source content.
    pub fn is_sentinel(self) -> bool {
        matches!(
            self,
            TokenKind::EOF | TokenKind::FileNotFound | TokenKind::InvalidFileName
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    /// 1-based source line; 0 for sentinels raised before any line was read.
    pub line: usize,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::EOF => write!(f, "End of File: {}(EOF Code)", self.kind.code()),
            TokenKind::FileNotFound | TokenKind::InvalidFileName => {
                write!(f, "('{}', '{}')", self.kind, self.lexeme)
            }
            _ => write!(f, "('{}', '{}', {})", self.kind, self.lexeme, self.line),
        }
    }
}

impl Token {
    pub fn is_sentinel(&self) -> bool {
        self.kind.is_sentinel()
    }
}
