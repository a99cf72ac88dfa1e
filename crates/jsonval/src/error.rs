use thiserror::Error;

/// Every way a [`crate::parse`] call can fail.
///
/// Variant names follow the status codes of the JSON grammar they police
/// rather than a generic "syntax error", so callers can match on the exact
/// failure without parsing the message.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The input held nothing but whitespace (or was empty) where a value
    /// was required.
    #[error("expected a value")]
    ExpectValue,
    /// A `null`/`true`/`false` literal or number lexeme did not match the
    /// JSON grammar.
    #[error("invalid value")]
    InvalidValue,
    /// Trailing non-whitespace bytes followed a complete root value.
    #[error("the document contains more than one root value")]
    RootNotSingular,
    /// A syntactically valid number literal overflows `f64`.
    #[error("number is too large to represent")]
    NumberTooBig,
    /// A string value was never closed with `"`.
    #[error("missing closing quotation mark")]
    MissQuotationMark,
    /// A `\` was followed by a byte that is not a recognized escape.
    #[error("invalid escape sequence in string")]
    InvalidStringEscape,
    /// An unescaped control byte (< 0x20) appeared inside a string.
    #[error("invalid unescaped control character in string")]
    InvalidStringChar,
    /// A `\uXXXX` escape did not contain four hex digits.
    #[error("invalid \\u hex digits")]
    InvalidUnicodeHex,
    /// A high surrogate was not followed by a matching low surrogate.
    #[error("invalid UTF-16 surrogate pair")]
    InvalidUnicodeSurrogate,
    /// An array element was not followed by `,` or `]`.
    #[error("expected ',' or ']' after array element")]
    MissCommaOrSquareBracket,
    /// An object member did not begin with a `"` key.
    #[error("expected a string key")]
    MissKey,
    /// An object key was not followed by `:`.
    #[error("expected ':' after object key")]
    MissColon,
    /// An object member was not followed by `,` or `}`.
    #[error("expected ',' or '}}' after object member")]
    MissCommaOrCurlyBracket,
}

/// Convenience alias for fallible parser operations.
pub type ParseResult<T> = Result<T, ParseError>;

impl ParseError {
    /// A short, stable, `SCREAMING_SNAKE_CASE` identifier for the error,
    /// useful for machine-readable diagnostics or test assertions.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::ExpectValue => "EXPECT_VALUE",
            Self::InvalidValue => "INVALID_VALUE",
            Self::RootNotSingular => "ROOT_NOT_SINGULAR",
            Self::NumberTooBig => "NUMBER_TOO_BIG",
            Self::MissQuotationMark => "MISS_QUOTATION_MARK",
            Self::InvalidStringEscape => "INVALID_STRING_ESCAPE",
            Self::InvalidStringChar => "INVALID_STRING_CHAR",
            Self::InvalidUnicodeHex => "INVALID_UNICODE_HEX",
            Self::InvalidUnicodeSurrogate => "INVALID_UNICODE_SURROGATE",
            Self::MissCommaOrSquareBracket => "MISS_COMMA_OR_SQUARE_BRACKET",
            Self::MissKey => "MISS_KEY",
            Self::MissColon => "MISS_COLON",
            Self::MissCommaOrCurlyBracket => "MISS_COMMA_OR_CURLY_BRACKET",
        }
    }
}
