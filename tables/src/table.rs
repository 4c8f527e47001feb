use crate::{
    feature::Feature,
    square::{self, Coord, SQUARE_COUNT, SquareIndex},
};
use arrayvec::ArrayVec;
use std::{array, ops, slice};

pub type Bitboard = u64;

/// Ascending, duplicate free set of squares related to one origin.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SquareSet(ArrayVec<SquareIndex, SQUARE_COUNT>);

impl SquareSet {
    pub fn new() -> Self {
        SquareSet(ArrayVec::new())
    }

    /// Clips `coords` to the board, converts and sorts them.
    pub fn from_coords<I>(coords: I) -> Self
    where
        I: IntoIterator<Item = Coord>,
    {
        let mut squares: ArrayVec<_, SQUARE_COUNT> =
            square::on_board(coords).map(Coord::index).collect();
        squares.sort_unstable();
        debug_assert!(squares.windows(2).all(|pair| pair[0] < pair[1]));
        SquareSet(squares)
    }

    pub fn from_bitboard(mut bitboard: Bitboard) -> Self {
        let mut squares = ArrayVec::new();
        while bitboard != 0 {
            squares.push(bitboard.trailing_zeros() as SquareIndex);
            bitboard &= bitboard - 1;
        }
        SquareSet(squares)
    }

    #[inline]
    pub fn to_bitboard(&self) -> Bitboard {
        self.0.iter().fold(0, |bitboard, &square| bitboard | 1u64 << square)
    }

    #[inline]
    pub fn contains(&self, square: SquareIndex) -> bool {
        self.0.binary_search(&square).is_ok()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, SquareIndex> {
        self.0.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[SquareIndex] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a SquareSet {
    type Item = &'a SquareIndex;
    type IntoIter = slice::Iter<'a, SquareIndex>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The related squares of `feature` for all 64 origins, in index order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeatureTable {
    feature: Feature,
    sets: [SquareSet; SQUARE_COUNT],
}

impl FeatureTable {
    pub fn build(feature: Feature) -> Self {
        FeatureTable {
            feature,
            sets: array::from_fn(|index| {
                let origin = Coord::from_index(index as SquareIndex);
                SquareSet::from_coords(feature.candidates(origin))
            }),
        }
    }

    #[inline]
    pub fn feature(&self) -> Feature {
        self.feature
    }

    #[inline]
    pub fn sets(&self) -> &[SquareSet; SQUARE_COUNT] {
        &self.sets
    }

    pub fn bitboards(&self) -> [Bitboard; SQUARE_COUNT] {
        array::from_fn(|index| self.sets[index].to_bitboard())
    }
}

impl ops::Index<SquareIndex> for FeatureTable {
    type Output = SquareSet;

    #[inline]
    fn index(&self, square: SquareIndex) -> &SquareSet {
        &self.sets[square as usize]
    }
}

/// Every feature table, addressable by feature.
#[derive(Clone, Debug)]
pub struct Tables(Vec<FeatureTable>);

impl Tables {
    /// Builds all tables, one scoped worker per feature.
    pub fn build() -> Self {
        let tables = crossbeam::thread::scope(|scope| {
            let workers: Vec<_> = Feature::ALL
                .into_iter()
                .map(|feature| scope.spawn(move |_| FeatureTable::build(feature)))
                .collect();
            workers
                .into_iter()
                .map(|worker| worker.join().expect("table worker panicked"))
                .collect()
        })
        .expect("table worker panicked");
        Tables(tables)
    }

    /// Builds all tables on the calling thread.
    pub fn build_sequential() -> Self {
        Tables(Feature::ALL.into_iter().map(FeatureTable::build).collect())
    }

    #[inline]
    pub fn get(&self, feature: Feature) -> &FeatureTable {
        &self.0[feature.index()]
    }

    pub fn iter(&self) -> slice::Iter<'_, FeatureTable> {
        self.0.iter()
    }
}

impl ops::Index<Feature> for Tables {
    type Output = FeatureTable;

    #[inline]
    fn index(&self, feature: Feature) -> &FeatureTable {
        self.get(feature)
    }
}

#[cfg(test)]
mod tests {
    use super::{FeatureTable, SquareSet, Tables};
    use crate::feature::Feature;

    #[test]
    fn sets_are_strictly_ascending() {
        for table in Tables::build().iter() {
            for set in table.sets() {
                assert!(set.iter().all(|&square| square < 64));
                assert!(set.as_slice().windows(2).all(|pair| pair[0] < pair[1]));
            }
        }
    }

    #[test]
    fn parallel_matches_sequential() {
        let parallel = Tables::build();
        let sequential = Tables::build_sequential();
        for feature in Feature::ALL {
            assert_eq!(parallel[feature], sequential[feature]);
            assert_eq!(parallel[feature].feature(), feature);
        }
    }

    #[test]
    fn corner_knight_and_king_area() {
        assert_eq!(FeatureTable::build(Feature::KnightMoves)[0].as_slice(), &[10, 17]);
        assert_eq!(FeatureTable::build(Feature::KingArea)[0].as_slice(), &[0, 1, 8, 9]);
        assert_eq!(FeatureTable::build(Feature::KingMoves)[63].as_slice(), &[54, 55, 62]);
    }

    #[test]
    fn identity_and_king_origin() {
        let identity = FeatureTable::build(Feature::SquareIdentity);
        let king_moves = FeatureTable::build(Feature::KingMoves);
        let king_area = FeatureTable::build(Feature::KingArea);
        for square in 0..64 {
            assert_eq!(identity[square].as_slice(), &[square]);
            assert!(!king_moves[square].contains(square));
            assert!(king_area[square].contains(square));
            assert_eq!(king_area[square].len(), king_moves[square].len() + 1);
        }
    }

    #[test]
    fn knight_and_king_are_symmetric() {
        for feature in [Feature::KnightMoves, Feature::KingMoves] {
            let table = FeatureTable::build(feature);
            for a in 0..64 {
                for b in 0..64 {
                    assert_eq!(table[a].contains(b), table[b].contains(a), "{feature} {a} {b}");
                }
            }
        }
    }

    #[test]
    fn pawn_attacks_from_last_rank() {
        let white = FeatureTable::build(Feature::WhitePawnAttacks);
        let black = FeatureTable::build(Feature::BlackPawnAttacks);
        for file in 0..8 {
            assert!(white[56 + file].is_empty());
            assert!(black[file].is_empty());
        }
        assert_eq!(white[8].as_slice(), &[17]);
        assert_eq!(black[12].as_slice(), &[3, 5]);
    }

    #[test]
    fn pawn_structure_masks() {
        let passed = FeatureTable::build(Feature::WhitePassedPawnMask);
        assert_eq!(passed[52].as_slice(), &[59, 60, 61]);
        let filter = FeatureTable::build(Feature::BlackPassedPawnFilter);
        assert_eq!(filter[20].as_slice(), &[4, 12]);
        let isolated = FeatureTable::build(Feature::IsolatedPawnMask);
        assert_eq!(isolated[0].as_slice(), &[1, 9, 17, 25, 33, 41, 49, 57]);
        assert_eq!(isolated[63].as_slice(), isolated[7].as_slice());
        let backward = FeatureTable::build(Feature::WhiteBackwardPawnMask);
        assert_eq!(backward[12].as_slice(), &[3, 5, 11, 13]);
        let backward = FeatureTable::build(Feature::BlackBackwardPawnMask);
        assert_eq!(backward[56].as_slice(), &[57]);
    }

    #[test]
    fn bitboard_roundtrip() {
        for table in Tables::build().iter() {
            for (set, bitboard) in table.sets().iter().zip(table.bitboards()) {
                assert_eq!(bitboard.count_ones() as usize, set.len());
                assert_eq!(&SquareSet::from_bitboard(bitboard), set);
            }
        }
        assert_eq!(SquareSet::from_bitboard(0), SquareSet::new());
    }
}
