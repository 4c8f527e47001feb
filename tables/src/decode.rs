//! Parsing of rendered literals, used to check output before it is written.

use crate::{
    encode::OutputKind,
    square::{SQUARE_COUNT, SquareIndex},
    table::{Bitboard, FeatureTable},
};
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("literal must start with '{{' and end with '}};'")]
    MissingBraces,
    #[error("expected 64 entries, found {0}")]
    WrongLength(usize),
    #[error("invalid token: '{0}'")]
    InvalidToken(String),
    #[error("entry for square {0} does not match the table")]
    Mismatch(SquareIndex),
}

fn body(literal: &str) -> Result<&str, DecodeError> {
    literal
        .trim()
        .strip_prefix('{')
        .and_then(|body| body.strip_suffix("};"))
        .ok_or(DecodeError::MissingBraces)
}

fn check_length<T>(entries: Vec<T>) -> Result<Vec<T>, DecodeError> {
    if entries.len() != SQUARE_COUNT {
        return Err(DecodeError::WrongLength(entries.len()));
    }
    Ok(entries)
}

fn parse_square(token: &str) -> Result<SquareIndex, DecodeError> {
    token
        .trim()
        .parse::<SquareIndex>()
        .ok()
        .filter(|&square| (square as usize) < SQUARE_COUNT)
        .ok_or_else(|| DecodeError::InvalidToken(token.to_owned()))
}

fn parse_token(token: &str) -> Result<Bitboard, DecodeError> {
    let invalid = || DecodeError::InvalidToken(token.to_owned());
    let digits = token.strip_prefix("0x").ok_or_else(invalid)?;
    if digits.len() != 16 || !digits.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
        return Err(invalid());
    }
    Bitboard::from_str_radix(digits, 16).map_err(|_| invalid())
}

/// Parses an array literal into its 64 index lists.
pub fn parse_array_literal(literal: &str) -> Result<Vec<Vec<SquareIndex>>, DecodeError> {
    let mut rest = body(literal)?.trim();
    let mut groups = Vec::new();
    while !rest.is_empty() {
        let (group, tail) = rest
            .strip_prefix('{')
            .and_then(|group| group.split_once('}'))
            .ok_or_else(|| DecodeError::InvalidToken(rest.to_owned()))?;
        let squares = if group.is_empty() {
            Vec::new()
        } else {
            group
                .split(',')
                .map(parse_square)
                .collect::<Result<Vec<_>, _>>()?
        };
        groups.push(squares);

        let tail = tail.trim_start();
        rest = match tail.strip_prefix(',') {
            Some(tail) => tail.trim_start(),
            None if tail.is_empty() => tail,
            None => return Err(DecodeError::InvalidToken(tail.to_owned())),
        };
    }
    check_length(groups)
}

/// Parses a bitboard literal in any layout into its 64 words.
pub fn parse_bitboard_literal(literal: &str) -> Result<Vec<Bitboard>, DecodeError> {
    let bitboards = body(literal)?
        .split(',')
        .map(|token| parse_token(token.trim()))
        .collect::<Result<Vec<_>, _>>()?;
    check_length(bitboards)
}

/// Decodes `literal` and compares every entry with `table`.
pub fn verify(kind: OutputKind, table: &FeatureTable, literal: &str) -> Result<(), DecodeError> {
    let mismatch = match kind {
        OutputKind::Array => parse_array_literal(literal)?
            .iter()
            .zip(table.sets())
            .position(|(squares, set)| squares.as_slice() != set.as_slice()),
        OutputKind::Bitboard => parse_bitboard_literal(literal)?
            .into_iter()
            .zip(table.sets())
            .position(|(bitboard, set)| bitboard != set.to_bitboard()),
    };
    match mismatch {
        Some(square) => Err(DecodeError::Mismatch(square as SquareIndex)),
        None => Ok(()),
    }
}
