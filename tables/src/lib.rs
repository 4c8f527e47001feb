//! Precomputed square relations for an 8x8 board, rendered as constant
//! tables for inclusion in engine source.

pub mod decode;
pub mod emit;
pub mod encode;
pub mod feature;
pub mod geometry;
pub mod square;
pub mod table;

pub use encode::{Layout, OutputKind, generate};
pub use feature::{Feature, ParseFeatureError};
pub use square::{Coord, SquareIndex};
pub use table::{Bitboard, FeatureTable, SquareSet, Tables};
