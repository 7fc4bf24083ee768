//! Token definitions for ABNF grammars
//!
//! Tokens are produced by the logos derive macro. Blanks are skipped, and so
//! is a line ending (with an optional comment in front of it) that is followed
//! by whitespace: in ABNF such a line is a continuation of the current rule.
//! Every other line ending is significant and ends the current rule.
//!
//! Unterminated strings, prose descriptions and comments get their own
//! tokens so the parser can report them at the offending position.
use logos::Logos;
use std::fmt;

/// All tokens of the ABNF grammar notation
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[logos(skip r"[ \t]+|(;[ \t!-~]*)?(\r\n|\r|\n)[ \t]+")]
pub enum Token {
    #[regex(r"[A-Za-z][A-Za-z0-9-]*")]
    Rulename,

    #[token("=")]
    DefinedAs,
    #[token("=/")]
    IncrementalAs,

    #[token("/")]
    Slash,
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("[")]
    OpenBracket,
    #[token("]")]
    CloseBracket,
    #[token("&")]
    And,
    #[token("!")]
    Not,

    /// `N`, `N*`, `*M`, `N*M` or `*`
    #[regex(r"[0-9]*\*[0-9]*|[0-9]+")]
    Repeat,

    /// `"..."`, possibly prefixed with `%i`
    #[regex(r#""[ !#-~]*""#)]
    #[regex(r#"%[iI]"[ !#-~]*""#)]
    QuotedString,
    /// `%s"..."`
    #[regex(r#"%[sS]"[ !#-~]*""#)]
    CaseSensitiveString,
    #[regex(r#"(%[iIsS])?"[ !#-~]*"#)]
    UnterminatedString,

    #[regex(r"<[ -=?-~]*>")]
    Prose,
    #[regex(r"<[ -=?-~]*")]
    UnterminatedProse,

    #[regex(r"%[bB][01]*(-[01]*|(\.[01]*)+)?")]
    BinaryValue,
    #[regex(r"%[dD][0-9]*(-[0-9]*|(\.[0-9]*)+)?")]
    DecimalValue,
    #[regex(r"%[xX][0-9A-Fa-f]*(-[0-9A-Fa-f]*|(\.[0-9A-Fa-f]*)+)?")]
    HexValue,
    /// `%` not followed by a base specifier
    #[token("%")]
    Percent,

    /// A comment running to the end of its line, line ending included
    #[regex(r";[ \t!-~]*(\r\n|\r|\n)")]
    Comment,
    /// A comment without a line ending, either at the very end of the input
    /// or cut short by a character other than a blank or visible ASCII
    #[regex(r";[ \t!-~]*")]
    UnterminatedComment,
    #[regex(r"\r\n|\r|\n")]
    Newline,

    /// Any character the grammar does not know about
    Invalid,
    /// Zero-width marker between two elements written without whitespace
    /// in between, inserted after lexing
    MissingSpace,
    /// Zero-width marker for blanks after a repeat count or a predicate
    /// operator, inserted after lexing
    DetachedOperand,
}

impl Token {
    /// Tokens that end a logical line.
    pub fn is_line_end(&self) -> bool {
        matches!(self, Token::Newline | Token::Comment)
    }

    /// Tokens that start a numeric value.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Token::BinaryValue | Token::DecimalValue | Token::HexValue
        )
    }

    /// Tokens that can close an element.
    pub fn ends_element(&self) -> bool {
        matches!(
            self,
            Token::Rulename
                | Token::QuotedString
                | Token::CaseSensitiveString
                | Token::Prose
                | Token::BinaryValue
                | Token::DecimalValue
                | Token::HexValue
                | Token::CloseParen
                | Token::CloseBracket
        )
    }

    /// Tokens that have to be immediately followed by their operand.
    pub fn binds_operand(&self) -> bool {
        matches!(self, Token::Repeat | Token::And | Token::Not)
    }

    /// Tokens that can open a predicate, repetition or element.
    pub fn starts_predicate(&self) -> bool {
        (self.ends_element() && !matches!(self, Token::CloseParen | Token::CloseBracket))
            || matches!(
                self,
                Token::UnterminatedString
                    | Token::UnterminatedProse
                    | Token::Percent
                    | Token::OpenParen
                    | Token::OpenBracket
                    | Token::And
                    | Token::Not
                    | Token::Repeat
            )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Token::Rulename => "<rulename>",
            Token::DefinedAs => "=",
            Token::IncrementalAs => "=/",
            Token::Slash => "/",
            Token::OpenParen => "(",
            Token::CloseParen => ")",
            Token::OpenBracket => "[",
            Token::CloseBracket => "]",
            Token::And => "&",
            Token::Not => "!",
            Token::Repeat => "<repeat>",
            Token::QuotedString => "<string>",
            Token::CaseSensitiveString => "<case-sensitive-string>",
            Token::UnterminatedString => "<unterminated-string>",
            Token::Prose => "<prose>",
            Token::UnterminatedProse => "<unterminated-prose>",
            Token::BinaryValue => "<binary-value>",
            Token::DecimalValue => "<decimal-value>",
            Token::HexValue => "<hex-value>",
            Token::Percent => "%",
            Token::Comment => "<comment>",
            Token::UnterminatedComment => "<unterminated-comment>",
            Token::Newline => "<newline>",
            Token::Invalid => "<invalid>",
            Token::MissingSpace => "<missing-space>",
            Token::DetachedOperand => "<detached-operand>",
        };
        f.write_str(s)
    }
}
