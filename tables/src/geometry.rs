//! Unfiltered square relations for a single origin.
//!
//! None of these know about the board edge: a knight on a1 still yields all
//! eight jumps here and it is up to [`crate::square::on_board`] to clip them.

use crate::square::Coord;
use arrayvec::ArrayVec;
use dama::Color;

/// Seven ranks of three files is the largest rule output.
pub const MAX_CANDIDATES: usize = 24;

pub type Candidates = ArrayVec<Coord, MAX_CANDIDATES>;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (1, 2),
    (1, -2),
    (-2, 1),
    (-2, -1),
    (-1, 2),
    (-1, -2),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

const ADJACENT_FILES: [i8; 2] = [1, -1];

#[inline]
const fn forward(color: Color) -> i8 {
    match color {
        Color::White => 1,
        Color::Black => -1,
    }
}

#[inline]
const fn last_rank(color: Color) -> i8 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}

/// Ranks strictly in front of `rank`, up to and including the far edge.
fn ranks_ahead(color: Color, rank: i8) -> ArrayVec<i8, 8> {
    match color {
        Color::White => (rank + 1..8).collect(),
        Color::Black => (0..rank).rev().collect(),
    }
}

/// `rank` itself and every rank behind it down to the home edge.
fn ranks_behind(color: Color, rank: i8) -> ArrayVec<i8, 8> {
    match color {
        Color::White => (0..=rank).rev().collect(),
        Color::Black => (rank..8).collect(),
    }
}

fn offsets(origin: Coord, offsets: &[(i8, i8)]) -> Candidates {
    offsets
        .iter()
        .map(|&(file, rank)| origin.offset(file, rank))
        .collect()
}

pub fn pawn_attacks(color: Color, origin: Coord) -> Candidates {
    if origin.rank == last_rank(color) {
        return Candidates::new();
    }
    let rank = forward(color);
    offsets(origin, &[(-1, rank), (1, rank)])
}

pub fn knight_moves(origin: Coord) -> Candidates {
    offsets(origin, &KNIGHT_OFFSETS)
}

pub fn king_moves(origin: Coord) -> Candidates {
    offsets(origin, &KING_OFFSETS)
}

pub fn king_area(origin: Coord) -> Candidates {
    let mut area = king_moves(origin);
    area.push(origin);
    area
}

/// Own file and both neighbours on every rank ahead.
pub fn passed_pawn_mask(color: Color, origin: Coord) -> Candidates {
    ranks_ahead(color, origin.rank)
        .into_iter()
        .flat_map(|rank| [1, 0, -1].map(|file| Coord::new(origin.file + file, rank)))
        .collect()
}

/// Own file only on every rank ahead.
pub fn passed_pawn_filter(color: Color, origin: Coord) -> Candidates {
    ranks_ahead(color, origin.rank)
        .into_iter()
        .map(|rank| Coord::new(origin.file, rank))
        .collect()
}

pub fn square_identity(origin: Coord) -> Candidates {
    Candidates::from_iter([origin])
}

/// Both neighbouring files over the whole board height.
pub fn isolated_pawn_mask(origin: Coord) -> Candidates {
    ADJACENT_FILES
        .into_iter()
        .flat_map(|file| (0..8).map(move |rank| Coord::new(origin.file + file, rank)))
        .collect()
}

/// Neighbouring files from the origin rank back to the home edge. The origin
/// rank is part of the mask.
pub fn backward_pawn_mask(color: Color, origin: Coord) -> Candidates {
    ranks_behind(color, origin.rank)
        .into_iter()
        .flat_map(|rank| ADJACENT_FILES.map(|file| Coord::new(origin.file + file, rank)))
        .collect()
}
