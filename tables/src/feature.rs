use crate::{
    geometry::{self, Candidates},
    square::Coord,
};
use dama::Color;
use std::{fmt, str::FromStr};
use thiserror::Error;

/// One square relation, evaluated independently for every origin square.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Feature {
    WhitePawnAttacks,
    BlackPawnAttacks,
    KnightMoves,
    KingMoves,
    WhitePassedPawnMask,
    WhitePassedPawnFilter,
    BlackPassedPawnMask,
    BlackPassedPawnFilter,
    SquareIdentity,
    KingArea,
    IsolatedPawnMask,
    WhiteBackwardPawnMask,
    BlackBackwardPawnMask,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown feature '{0}'")]
pub struct ParseFeatureError(pub String);

impl Feature {
    pub const COUNT: usize = 13;

    pub const ALL: [Feature; Self::COUNT] = [
        Feature::WhitePawnAttacks,
        Feature::BlackPawnAttacks,
        Feature::KnightMoves,
        Feature::KingMoves,
        Feature::WhitePassedPawnMask,
        Feature::WhitePassedPawnFilter,
        Feature::BlackPassedPawnMask,
        Feature::BlackPassedPawnFilter,
        Feature::SquareIdentity,
        Feature::KingArea,
        Feature::IsolatedPawnMask,
        Feature::WhiteBackwardPawnMask,
        Feature::BlackBackwardPawnMask,
    ];

    /// Position in [`Feature::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Unfiltered related squares of `origin`.
    pub fn candidates(self, origin: Coord) -> Candidates {
        match self {
            Feature::WhitePawnAttacks => geometry::pawn_attacks(Color::White, origin),
            Feature::BlackPawnAttacks => geometry::pawn_attacks(Color::Black, origin),
            Feature::KnightMoves => geometry::knight_moves(origin),
            Feature::KingMoves => geometry::king_moves(origin),
            Feature::WhitePassedPawnMask => geometry::passed_pawn_mask(Color::White, origin),
            Feature::WhitePassedPawnFilter => geometry::passed_pawn_filter(Color::White, origin),
            Feature::BlackPassedPawnMask => geometry::passed_pawn_mask(Color::Black, origin),
            Feature::BlackPassedPawnFilter => geometry::passed_pawn_filter(Color::Black, origin),
            Feature::SquareIdentity => geometry::square_identity(origin),
            Feature::KingArea => geometry::king_area(origin),
            Feature::IsolatedPawnMask => geometry::isolated_pawn_mask(origin),
            Feature::WhiteBackwardPawnMask => geometry::backward_pawn_mask(Color::White, origin),
            Feature::BlackBackwardPawnMask => geometry::backward_pawn_mask(Color::Black, origin),
        }
    }

    /// Command line name, e.g. `knight-moves`.
    pub const fn name(self) -> &'static str {
        match self {
            Feature::WhitePawnAttacks => "white-pawn-attacks",
            Feature::BlackPawnAttacks => "black-pawn-attacks",
            Feature::KnightMoves => "knight-moves",
            Feature::KingMoves => "king-moves",
            Feature::WhitePassedPawnMask => "white-passed-pawn-mask",
            Feature::WhitePassedPawnFilter => "white-passed-pawn-filter",
            Feature::BlackPassedPawnMask => "black-passed-pawn-mask",
            Feature::BlackPassedPawnFilter => "black-passed-pawn-filter",
            Feature::SquareIdentity => "square-identity",
            Feature::KingArea => "king-area",
            Feature::IsolatedPawnMask => "isolated-pawn-mask",
            Feature::WhiteBackwardPawnMask => "white-backward-pawn-mask",
            Feature::BlackBackwardPawnMask => "black-backward-pawn-mask",
        }
    }

    /// Identifier used when the table is declared in generated source.
    pub const fn symbol(self) -> &'static str {
        match self {
            Feature::WhitePawnAttacks => "WhitePawnAttacks",
            Feature::BlackPawnAttacks => "BlackPawnAttacks",
            Feature::KnightMoves => "KnightMoves",
            Feature::KingMoves => "KingMoves",
            Feature::WhitePassedPawnMask => "WhitePassedPawnMask",
            Feature::WhitePassedPawnFilter => "WhitePassedPawnFilter",
            Feature::BlackPassedPawnMask => "BlackPassedPawnMask",
            Feature::BlackPassedPawnFilter => "BlackPassedPawnFilter",
            Feature::SquareIdentity => "SquareIdentity",
            Feature::KingArea => "KingArea",
            Feature::IsolatedPawnMask => "IsolatedPawnMask",
            Feature::WhiteBackwardPawnMask => "WhiteBackwardPawnMask",
            Feature::BlackBackwardPawnMask => "BlackBackwardPawnMask",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Feature {
    type Err = ParseFeatureError;

    fn from_str(s: &str) -> Result<Feature, ParseFeatureError> {
        Feature::ALL
            .into_iter()
            .find(|feature| feature.name() == s)
            .ok_or_else(|| ParseFeatureError(s.to_owned()))
    }
}
