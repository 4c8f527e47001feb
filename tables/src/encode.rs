use crate::{
    feature::Feature,
    table::{Bitboard, FeatureTable},
};
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OutputKind {
    /// Nested initializer list of square indices.
    Array,
    /// One 64 bit literal per square.
    Bitboard,
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputKind::Array => f.write_str("array"),
            OutputKind::Bitboard => f.write_str("bitboard"),
        }
    }
}

/// Whitespace inside a bitboard literal. Tokens and separators are the same
/// in every layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Layout {
    Inline,
    /// Line break after every eighth token, one line per origin rank.
    #[default]
    Ranks,
}

/// Renders the table of `feature` as a literal of the given kind.
pub fn generate(kind: OutputKind, feature: Feature, layout: Layout) -> String {
    encode(kind, &FeatureTable::build(feature), layout)
}

pub fn encode(kind: OutputKind, table: &FeatureTable, layout: Layout) -> String {
    match kind {
        OutputKind::Array => array_literal(table),
        OutputKind::Bitboard => bitboard_literal(table, layout),
    }
}

/// `{{10,17}, {11,16,18}, ..., {46,53}};`
pub fn array_literal(table: &FeatureTable) -> String {
    let groups = table
        .sets()
        .iter()
        .map(|set| {
            let squares = set.iter().map(|square| square.to_string()).collect::<Vec<_>>();
            format!("{{{}}}", squares.join(","))
        })
        .collect::<Vec<_>>();
    format!("{{{}}};", groups.join(", "))
}

/// `{0x0000000000020400, ...};`
pub fn bitboard_literal(table: &FeatureTable, layout: Layout) -> String {
    let bitboards = table.bitboards();
    let mut literal = String::from("{");
    for (n, &bitboard) in bitboards.iter().enumerate() {
        literal.push_str(&bitboard_token(bitboard));
        if n != bitboards.len() - 1 {
            literal.push_str(", ");
        }
        if layout == Layout::Ranks && n % 8 == 7 {
            literal.push('\n');
        }
    }
    literal.push_str("};");
    literal
}

/// `0x` and sixteen zero padded lowercase hex digits.
#[inline]
pub fn bitboard_token(bitboard: Bitboard) -> String {
    format!("{:#018x}", bitboard)
}

/// The table's bitboards as little endian words, 512 bytes in total.
pub fn bitboard_bytes(table: &FeatureTable) -> Vec<u8> {
    let words = table.bitboards().map(u64::to_le);
    bytemuck::cast_slice::<u64, u8>(&words).to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_width() {
        assert_eq!(bitboard_token(0), "0x0000000000000000");
        assert_eq!(bitboard_token(0x20400), "0x0000000000020400");
        assert_eq!(bitboard_token(u64::MAX), "0xffffffffffffffff");
        assert_eq!(bitboard_token(1 << 63).len(), 18);
    }

    #[test]
    fn identity_array() {
        let literal = generate(OutputKind::Array, Feature::SquareIdentity, Layout::Inline);
        let expected = (0..64).map(|n| format!("{{{n}}}")).collect::<Vec<_>>().join(", ");
        assert_eq!(literal, format!("{{{expected}}};"));
    }

    #[test]
    fn knight_array_prefix() {
        let literal = generate(OutputKind::Array, Feature::KnightMoves, Layout::Ranks);
        assert!(literal.starts_with("{{10,17}, {11,16,18}, {8,12,17,19}, "));
        assert!(literal.ends_with(", {46,53}};"));
    }

    #[test]
    fn empty_sets_render_as_braces() {
        let literal = generate(OutputKind::Array, Feature::WhitePawnAttacks, Layout::Inline);
        assert!(literal.ends_with(", {}, {}, {}, {}, {}, {}, {}, {}};"));
    }

    #[test]
    fn bitboard_inline() {
        let literal = generate(OutputKind::Bitboard, Feature::KnightMoves, Layout::Inline);
        assert!(literal.starts_with("{0x0000000000020400, 0x0000000000050800, "));
        assert!(literal.ends_with(", 0x0020400000000000};"));
        assert!(!literal.contains('\n'));
        assert_eq!(literal.matches(", ").count(), 63);
        assert_eq!(literal.len(), 1 + 64 * 18 + 63 * 2 + 2);
    }

    #[test]
    fn bitboard_ranks() {
        let table = FeatureTable::build(Feature::SquareIdentity);
        let ranks = bitboard_literal(&table, Layout::Ranks);
        let lines = ranks.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0].len(), 1 + 8 * 18 + 8 * 2);
        assert!(lines[0].ends_with("0x0000000000000080, "));
        assert_eq!(lines[7], "0x0100000000000000, 0x0200000000000000, 0x0400000000000000, \
            0x0800000000000000, 0x1000000000000000, 0x2000000000000000, \
            0x4000000000000000, 0x8000000000000000");
        assert_eq!(lines[8], "};");
        assert_eq!(ranks.replace('\n', ""), bitboard_literal(&table, Layout::Inline));
    }

    #[test]
    fn blob_is_little_endian() {
        let table = FeatureTable::build(Feature::SquareIdentity);
        let bytes = bitboard_bytes(&table);
        assert_eq!(bytes.len(), 512);
        assert_eq!(&bytes[..8], &[1, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(&bytes[504..], &[0, 0, 0, 0, 0, 0, 0, 0x80]);
    }
}
