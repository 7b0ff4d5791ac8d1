/// A single lexical token. Equality compares the tag and any payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Number(i64),
    Id(String),
    String(String),
    /// Single-character operator or punctuation: `+ - * / . , : ( ) = < >`.
    Char(char),

    // Keywords
    Class,
    Return,
    If,
    Else,
    Def,
    Print,
    And,
    Or,
    Not,
    None,
    True,
    False,

    // Two-character comparison operators
    Eq,        // ==
    NotEq,     // !=
    LessOrEq,  // <=
    GreaterOrEq, // >=

    // Structural
    Newline,
    Indent,
    Dedent,
    Eof,
}
