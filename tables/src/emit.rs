use crate::{
    decode::{self, DecodeError},
    encode::{self, Layout, OutputKind},
    feature::Feature,
    table::Tables,
};
use std::io::{self, Write};
use thiserror::Error;

/// One declaration in the generated source.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Block {
    pub kind: OutputKind,
    pub feature: Feature,
}

impl Block {
    #[inline]
    pub const fn new(kind: OutputKind, feature: Feature) -> Self {
        Block { kind, feature }
    }

    pub const fn symbol(&self) -> &'static str {
        match (self.kind, self.feature) {
            (OutputKind::Bitboard, Feature::KnightMoves) => "KnightAttacks",
            (OutputKind::Bitboard, Feature::KingMoves) => "KingAttacks",
            (OutputKind::Bitboard, Feature::SquareIdentity) => "SquareBits",
            (_, feature) => feature.symbol(),
        }
    }

    pub fn declaration(&self) -> String {
        match self.kind {
            OutputKind::Array => format!(
                "constexpr std::vector<std::vector<uint8_t>> {} = ",
                self.symbol()
            ),
            OutputKind::Bitboard => format!("constexpr uint64_t {}[] = ", self.symbol()),
        }
    }
}

/// Index lists for the knight and king, then bitboards for every feature.
pub fn default_batch() -> Vec<Block> {
    [Feature::KnightMoves, Feature::KingMoves]
        .into_iter()
        .map(|feature| Block::new(OutputKind::Array, feature))
        .chain(
            Feature::ALL
                .into_iter()
                .map(|feature| Block::new(OutputKind::Bitboard, feature)),
        )
        .collect()
}

/// Every combination of `kinds` and `features`, grouped by kind.
pub fn batch(kinds: &[OutputKind], features: &[Feature]) -> Vec<Block> {
    kinds
        .iter()
        .flat_map(|&kind| features.iter().map(move |&feature| Block::new(kind, feature)))
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct EmitOptions {
    pub layout: Layout,
    /// Decode each literal and compare it with its table before accepting it.
    pub check: bool,
}

impl EmitOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_check(mut self, check: bool) -> Self {
        self.check = check;
        self
    }
}

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("{kind} table for {feature} failed verification: {error}")]
    Verify {
        kind: OutputKind,
        feature: Feature,
        error: DecodeError,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub fn render_block(block: Block, tables: &Tables, options: &EmitOptions) -> Result<String, EmitError> {
    let table = tables.get(block.feature);
    let literal = encode::encode(block.kind, table, options.layout);
    if options.check {
        decode::verify(block.kind, table, &literal).map_err(|error| EmitError::Verify {
            kind: block.kind,
            feature: block.feature,
            error,
        })?;
    }
    Ok(format!("{}{}\n", block.declaration(), literal))
}

/// Renders all blocks, separated by blank lines. Nothing is returned unless
/// every block succeeds.
pub fn render(blocks: &[Block], tables: &Tables, options: &EmitOptions) -> Result<String, EmitError> {
    let rendered = blocks
        .iter()
        .map(|&block| render_block(block, tables, options))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rendered.join("\n"))
}

pub fn write_batch<W: Write>(
    writer: &mut W,
    blocks: &[Block],
    tables: &Tables,
    options: &EmitOptions,
) -> Result<(), EmitError> {
    let text = render(blocks, tables, options)?;
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_batch_layout() {
        let blocks = default_batch();
        assert_eq!(blocks.len(), 2 + Feature::COUNT);
        assert_eq!(blocks[0], Block::new(OutputKind::Array, Feature::KnightMoves));
        assert_eq!(blocks[1], Block::new(OutputKind::Array, Feature::KingMoves));
        assert_eq!(blocks[2], Block::new(OutputKind::Bitboard, Feature::WhitePawnAttacks));
        assert_eq!(blocks[14], Block::new(OutputKind::Bitboard, Feature::BlackBackwardPawnMask));
    }

    #[test]
    fn symbols() {
        assert_eq!(Block::new(OutputKind::Array, Feature::KnightMoves).symbol(), "KnightMoves");
        assert_eq!(Block::new(OutputKind::Bitboard, Feature::KnightMoves).symbol(), "KnightAttacks");
        assert_eq!(Block::new(OutputKind::Bitboard, Feature::SquareIdentity).symbol(), "SquareBits");
        assert_eq!(
            Block::new(OutputKind::Bitboard, Feature::IsolatedPawnMask).declaration(),
            "constexpr uint64_t IsolatedPawnMask[] = "
        );
    }

    #[test]
    fn batch_groups_by_kind() {
        let blocks = batch(
            &[OutputKind::Array, OutputKind::Bitboard],
            &[Feature::KingArea, Feature::KnightMoves],
        );
        assert_eq!(
            blocks,
            vec![
                Block::new(OutputKind::Array, Feature::KingArea),
                Block::new(OutputKind::Array, Feature::KnightMoves),
                Block::new(OutputKind::Bitboard, Feature::KingArea),
                Block::new(OutputKind::Bitboard, Feature::KnightMoves),
            ]
        );
    }

    #[test]
    fn write_checked_batch() {
        let tables = Tables::build();
        let options = EmitOptions::new().with_check(true);
        let mut out = Vec::new();
        write_batch(&mut out, &default_batch(), &tables, &options).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("constexpr std::vector<std::vector<uint8_t>> KnightMoves = {{10,17}, "));
        assert!(text.contains("};\n\nconstexpr std::vector<std::vector<uint8_t>> KingMoves = {{1,8,9}, "));
        assert!(text.contains("\nconstexpr uint64_t SquareBits[] = {0x0000000000000001, "));
        assert!(text.ends_with("\n};\n"));
        assert_eq!(text.matches("constexpr").count(), 15);
    }

    #[test]
    fn inline_single_block() {
        let tables = Tables::build_sequential();
        let options = EmitOptions::new().with_layout(Layout::Inline);
        let text = render(
            &[Block::new(OutputKind::Bitboard, Feature::KingArea)],
            &tables,
            &options,
        )
        .unwrap();
        assert!(text.starts_with("constexpr uint64_t KingArea[] = {0x0000000000000303, "));
        assert_eq!(text.lines().count(), 1);
    }
}
