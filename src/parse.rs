// ji-toolkit -- just intonation utilities for patching environments
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Text syntax for values, e.g. `[3/2 [5/4 7/4] 6900 1.5]`.
//!
//! Atoms are separated by whitespace. Integers and floats become numbers, `nil`, `true` and
//! `false` are keywords, and every other bare word is a string, which makes `3/2` a ratio.
//! Strings containing whitespace or brackets can be quoted with `"`.

use std::fmt;

use crate::error::{Error, Result};
use crate::value::Value;

/// The types of syntax errors.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SyntaxErrorKind {
    UnexpectedClose,
    UnclosedList,
    UnterminatedString,
    /// More than one value where exactly one was expected
    TrailingInput,
    EmptyInput,
}

impl fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxErrorKind::UnexpectedClose => write!(f, "unexpected `]`"),
            SyntaxErrorKind::UnclosedList => write!(f, "unclosed `[`"),
            SyntaxErrorKind::UnterminatedString => write!(f, "unterminated string literal"),
            SyntaxErrorKind::TrailingInput => write!(f, "expected a single value"),
            SyntaxErrorKind::EmptyInput => write!(f, "expected a value"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Token<'a> {
    Open,
    Close,
    Word(&'a str),
    Quoted(String),
}

struct Lexer<'a> {
    input: &'a str,
    stream: std::str::CharIndices<'a>,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            stream: input.char_indices(),
        }
    }

    /// Return the byte-offset of the next character that would be read.
    fn current_offset(&self) -> usize {
        self.peek_char().map_or(self.input.len(), |(pos, _)| pos)
    }

    fn peek_char(&self) -> Option<(usize, char)> {
        self.stream.clone().next()
    }

    fn next_char(&mut self) -> Option<(usize, char)> {
        self.stream.next()
    }

    fn skip_while<P: Fn(char) -> bool>(&mut self, predicate: P) {
        while let Some((_, ch)) = self.peek_char() {
            if predicate(ch) {
                self.next_char();
            } else {
                break;
            }
        }
    }

    /// Identify the next token together with its starting offset.
    fn next_token(&mut self) -> Option<Result<(usize, Token<'a>)>> {
        self.skip_while(char::is_whitespace);
        let (pos, ch) = self.next_char()?;
        let token = match ch {
            '[' => Ok(Token::Open),
            ']' => Ok(Token::Close),
            '"' => self.lex_quoted(pos),
            _ => {
                self.skip_while(|c| !c.is_whitespace() && c != '[' && c != ']' && c != '"');
                let input = self.input;
                Ok(Token::Word(&input[pos..self.current_offset()]))
            }
        };
        Some(token.map(|token| (pos, token)))
    }

    fn lex_quoted(&mut self, start: usize) -> Result<Token<'a>> {
        let mut contents = String::new();
        while let Some((_, ch)) = self.next_char() {
            match ch {
                '"' => return Ok(Token::Quoted(contents)),
                '\\' => match self.next_char() {
                    Some((_, escaped)) => contents.push(escaped),
                    None => break,
                },
                _ => contents.push(ch),
            }
        }
        Err(Error::Syntax {
            offset: start,
            kind: SyntaxErrorKind::UnterminatedString,
        })
    }
}

fn atom(word: &str) -> Value {
    match word {
        "nil" => Value::Nil,
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => {
            if let Ok(int) = word.parse::<i64>() {
                Value::Int(int)
            } else if looks_like_float(word) {
                word.parse::<f64>()
                    .map_or_else(|_| Value::Str(word.to_owned()), Value::Float)
            } else {
                Value::Str(word.to_owned())
            }
        }
    }
}

/// Rust happily parses `inf` and `NaN` as floats, but those are meant to be strings here.
fn looks_like_float(word: &str) -> bool {
    word.trim_start_matches(|c: char| c == '-' || c == '+')
        .starts_with(|c: char| c.is_ascii_digit() || c == '.')
}

/// Parse a whitespace separated sequence of values.
///
/// # Examples
///
/// ```
/// use ji_toolkit::parse::parse_values;
/// use ji_toolkit::value::Value;
///
/// assert_eq!(
///     parse_values("3/2 [1 2.5] nil"),
///     Ok(vec![
///         Value::from("3/2"),
///         Value::List(vec![Value::Int(1), Value::Float(2.5)]),
///         Value::Nil,
///     ])
/// );
/// ```
pub fn parse_values(input: &str) -> Result<Vec<Value>> {
    let mut lexer = Lexer::new(input);
    // stack of unfinished lists together with the offset of their `[`
    let mut stack: Vec<(usize, Vec<Value>)> = Vec::new();
    let mut top = Vec::new();

    while let Some(token) = lexer.next_token() {
        let (pos, token) = token?;
        let value = match token {
            Token::Open => {
                stack.push((pos, Vec::new()));
                continue;
            }
            Token::Close => match stack.pop() {
                Some((_, items)) => Value::List(items),
                None => {
                    return Err(Error::Syntax {
                        offset: pos,
                        kind: SyntaxErrorKind::UnexpectedClose,
                    })
                }
            },
            Token::Word(word) => atom(word),
            Token::Quoted(s) => Value::Str(s),
        };
        match stack.last_mut() {
            Some((_, items)) => items.push(value),
            None => top.push(value),
        }
    }

    if let Some((offset, _)) = stack.pop() {
        return Err(Error::Syntax {
            offset,
            kind: SyntaxErrorKind::UnclosedList,
        });
    }
    Ok(top)
}

/// Parse exactly one value.
///
/// ```
/// use ji_toolkit::parse::parse_value;
/// use ji_toolkit::value::Value;
///
/// assert_eq!(parse_value(" 6900 "), Ok(Value::Int(6900)));
/// assert!(parse_value("1 2").is_err());
/// assert!(parse_value("").is_err());
/// ```
pub fn parse_value(input: &str) -> Result<Value> {
    let mut values = parse_values(input)?;
    match values.len() {
        0 => Err(Error::Syntax {
            offset: input.len(),
            kind: SyntaxErrorKind::EmptyInput,
        }),
        1 => Ok(values.remove(0)),
        _ => Err(Error::Syntax {
            offset: 0,
            kind: SyntaxErrorKind::TrailingInput,
        }),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use expect_test::{expect, Expect};

    fn check(input: &str, output: Expect) {
        let parsed = format!("{:?}", parse_values(input));
        output.assert_eq(&parsed);
    }

    #[test]
    fn atoms() {
        check(
            "3/2 -7 0.5 1e3 inf true nil abc",
            expect![[r#"Ok([Str("3/2"), Int(-7), Float(0.5), Float(1000.0), Str("inf"), Bool(true), Nil, Str("abc")])"#]],
        );
    }

    #[test]
    fn nested_lists() {
        check(
            "[[1/1 3/1] [1/3 1/1]]",
            expect![[r#"Ok([List([List([Str("1/1"), Str("3/1")]), List([Str("1/3"), Str("1/1")])])])"#]],
        );
        check("[]", expect![[r#"Ok([List([])])"#]]);
    }

    #[test]
    fn quoted_strings() {
        check(
            r#""a b" "[x]" "q\"q""#,
            expect![[r#"Ok([Str("a b"), Str("[x]"), Str("q\"q")])"#]],
        );
    }

    #[test]
    fn errors() {
        check(
            "[1 2",
            expect![[r#"Err(Syntax { offset: 0, kind: UnclosedList })"#]],
        );
        check(
            "1 ]",
            expect![[r#"Err(Syntax { offset: 2, kind: UnexpectedClose })"#]],
        );
        check(
            "\"open",
            expect![[r#"Err(Syntax { offset: 0, kind: UnterminatedString })"#]],
        );
    }
}
