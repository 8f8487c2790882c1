use std::{
    fmt::{self, Display},
    mem::size_of,
    ops::{Index, IndexMut},
    str::FromStr,
};

use crate::chess::{
    chessmove::Move,
    piece::{Colour, PieceType},
    squareset::SquareSet,
};

#[derive(PartialEq, Eq, Clone, Copy, PartialOrd, Ord, Hash, Debug)]
#[repr(u8)]
pub enum File {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

const _FILE_ASSERT: () = assert!(size_of::<File>() == size_of::<Option<File>>());

impl File {
    pub const fn abs_diff(self, other: Self) -> u8 {
        (self as u8).abs_diff(other as u8)
    }

    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 8 {
            // SAFETY: inner is less than 8, so it corresponds to a valid enum variant.
            Some(unsafe { std::mem::transmute::<u8, Self>(index) })
        } else {
            None
        }
    }

    pub fn all() -> impl DoubleEndedIterator<Item = Self> {
        // SAFETY: all values are within `0..8`.
        (0..8u8).map(|i| unsafe { std::mem::transmute(i) })
    }
}

impl<T> Index<File> for [T; 8] {
    type Output = T;

    fn index(&self, index: File) -> &Self::Output {
        // SAFETY: the legal values for this type are all in bounds.
        unsafe { self.get_unchecked(index as usize) }
    }
}

impl<T> IndexMut<File> for [T; 8] {
    fn index_mut(&mut self, index: File) -> &mut Self::Output {
        // SAFETY: the legal values for this type are all in bounds.
        unsafe { self.get_unchecked_mut(index as usize) }
    }
}

#[derive(PartialEq, Eq, Clone, Copy, PartialOrd, Ord, Hash, Debug)]
#[repr(u8)]
pub enum Rank {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
}

const _RANK_ASSERT: () = assert!(size_of::<Rank>() == size_of::<Option<Rank>>());

impl Rank {
    pub const fn abs_diff(self, other: Self) -> u8 {
        (self as u8).abs_diff(other as u8)
    }

    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 8 {
            // SAFETY: inner is less than 8, so it corresponds to a valid enum variant.
            Some(unsafe { std::mem::transmute::<u8, Self>(index) })
        } else {
            None
        }
    }

    /// The rank at the given distance from this colour's home rank.
    pub const fn relative_to(self, side: Colour) -> Self {
        if matches!(side, Colour::White) {
            self
        } else {
            // SAFETY: XOR with 7 keeps the value within `0..8`.
            unsafe { std::mem::transmute(self as u8 ^ 7) }
        }
    }
}

#[rustfmt::skip]
#[derive(PartialEq, Eq, Clone, Copy, PartialOrd, Ord, Hash, Debug, Default)]
#[repr(u8)]
pub enum Square {
    #[default]
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

const _SQUARE_ASSERT: () = assert!(size_of::<Square>() == size_of::<Option<Square>>());

impl<T> Index<Square> for [T; 64] {
    type Output = T;

    fn index(&self, index: Square) -> &Self::Output {
        // SAFETY: the legal values for this type are all in bounds.
        unsafe { self.get_unchecked(index as usize) }
    }
}

impl<T> IndexMut<Square> for [T; 64] {
    fn index_mut(&mut self, index: Square) -> &mut Self::Output {
        // SAFETY: the legal values for this type are all in bounds.
        unsafe { self.get_unchecked_mut(index as usize) }
    }
}

static SQUARE_NAMES: [&str; 64] = [
    "a1", "b1", "c1", "d1", "e1", "f1", "g1", "h1", "a2", "b2", "c2", "d2", "e2", "f2", "g2", "h2",
    "a3", "b3", "c3", "d3", "e3", "f3", "g3", "h3", "a4", "b4", "c4", "d4", "e4", "f4", "g4", "h4",
    "a5", "b5", "c5", "d5", "e5", "f5", "g5", "h5", "a6", "b6", "c6", "d6", "e6", "f6", "g6", "h6",
    "a7", "b7", "c7", "d7", "e7", "f7", "g7", "h7", "a8", "b8", "c8", "d8", "e8", "f8", "g8", "h8",
];

impl Square {
    pub const fn from_rank_file(rank: Rank, file: File) -> Self {
        let inner = rank as u8 * 8 + file as u8;
        // SAFETY: Rank and File are constrained such that inner is always < 64.
        unsafe { std::mem::transmute(inner) }
    }

    pub const fn new(inner: u8) -> Option<Self> {
        if inner < 64 {
            // SAFETY: inner is less than 64, so it corresponds to a valid enum variant.
            Some(unsafe { std::mem::transmute::<u8, Self>(inner) })
        } else {
            None
        }
    }

    pub const fn new_clamped(inner: u8) -> Self {
        let inner = if inner < 63 { inner } else { 63 };
        if let Some(sq) = Self::new(inner) {
            sq
        } else {
            panic!()
        }
    }

    /// SAFETY: you may only call this function with value of `inner` less than 64.
    pub const unsafe fn new_unchecked(inner: u8) -> Self {
        debug_assert!(inner < 64);
        // SAFETY: caller's precondition.
        unsafe { std::mem::transmute(inner) }
    }

    /// The file that this square is on.
    pub const fn file(self) -> File {
        // SAFETY: `self as u8` is less than 64, and this operation can only
        // decrease the value, so cannot construct a value >= 8.
        unsafe { std::mem::transmute(self as u8 % 8) }
    }

    /// The rank that this square is on.
    pub const fn rank(self) -> Rank {
        // SAFETY: `self as u8` is less than 64, and this operation can only
        // decrease the value, so cannot construct a value >= 8.
        unsafe { std::mem::transmute(self as u8 / 8) }
    }

    pub const fn distance(a: Self, b: Self) -> u8 {
        let file_diff = a.file().abs_diff(b.file());
        let rank_diff = a.rank().abs_diff(b.rank());
        if file_diff > rank_diff {
            file_diff
        } else {
            rank_diff
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn inner(self) -> u8 {
        self as u8
    }

    pub const fn signed_inner(self) -> i8 {
        #![allow(clippy::cast_possible_wrap)]
        self as i8
    }

    pub const fn add(self, offset: u8) -> Option<Self> {
        Self::new(self as u8 + offset)
    }

    pub const fn sub(self, offset: u8) -> Option<Self> {
        if let Some(res) = (self as u8).checked_sub(offset) {
            Self::new(res)
        } else {
            None
        }
    }

    pub const fn as_set(self) -> SquareSet {
        SquareSet::from_inner(1 << self as u8)
    }

    /// The square one step towards the opponent's back rank.
    pub const fn pawn_push(self, side: Colour) -> Option<Self> {
        if matches!(side, Colour::White) {
            self.add(8)
        } else {
            self.sub(8)
        }
    }

    pub fn all() -> impl DoubleEndedIterator<Item = Self> {
        // SAFETY: all values are within `0..64`.
        (0..64u8).map(|i| unsafe { std::mem::transmute(i) })
    }

    pub fn name(self) -> &'static str {
        SQUARE_NAMES[self]
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", SQUARE_NAMES[*self])
    }
}

impl FromStr for Square {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SQUARE_NAMES
            .iter()
            .position(|&name| name == s)
            .and_then(|index| -> Option<u8> { index.try_into().ok() })
            .and_then(Self::new)
            .ok_or("Invalid square name")
    }
}

impl From<Square> for u16 {
    fn from(square: Square) -> Self {
        square as Self
    }
}

/// Which rooks may still castle, stored as the set of rook origin squares.
///
/// The raw mask doubles as the castling contribution to the zobrist hash.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct CastlingRights {
    rooks: SquareSet,
}

impl CastlingRights {
    pub const NONE: Self = Self {
        rooks: SquareSet::EMPTY,
    };

    const KINGSIDE: [SquareSet; 2] = [Square::H1.as_set(), Square::H8.as_set()];
    const QUEENSIDE: [SquareSet; 2] = [Square::A1.as_set(), Square::A8.as_set()];

    pub const fn hash_mask(self) -> u64 {
        self.rooks.inner()
    }

    pub fn kingside(self, side: Colour) -> bool {
        (self.rooks & Self::KINGSIDE[side]).non_empty()
    }

    pub fn queenside(self, side: Colour) -> bool {
        (self.rooks & Self::QUEENSIDE[side]).non_empty()
    }

    pub fn grant_kingside(&mut self, side: Colour) {
        self.rooks |= Self::KINGSIDE[side];
    }

    pub fn grant_queenside(&mut self, side: Colour) {
        self.rooks |= Self::QUEENSIDE[side];
    }

    /// Revoke both of a colour's rights (its king moved).
    pub fn clear(&mut self, side: Colour) {
        self.rooks -= Self::KINGSIDE[side] | Self::QUEENSIDE[side];
    }

    /// Revoke any right whose rook origin square appears in `squares`
    /// (a rook moved away, or something captured on its square).
    pub fn discard(&mut self, squares: SquareSet) {
        self.rooks -= squares;
    }

    pub fn is_empty(self) -> bool {
        self.rooks.is_empty()
    }
}

impl Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        if self.kingside(Colour::White) {
            write!(f, "K")?;
        }
        if self.queenside(Colour::White) {
            write!(f, "Q")?;
        }
        if self.kingside(Colour::Black) {
            write!(f, "k")?;
        }
        if self.queenside(Colour::Black) {
            write!(f, "q")?;
        }
        Ok(())
    }
}

/// Zobrist keys for a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Keys {
    /// The running hash of the whole position.
    pub zobrist: u64,
    /// The hash of the pawns only.
    pub pawn: u64,
    /// The hash of the non-pawn material, split by colour.
    pub non_pawn: [u64; 2],
}

/// One frame of the position history: everything needed to restore the
/// board by popping the frame.
///
/// Field order is largest-alignment-first so the frame packs tightly;
/// the whole struct must stay within 128 bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State {
    /// Zobrist hashes, maintained incrementally.
    pub keys: Keys,
    /// Occupancy per colour.
    pub colours: [SquareSet; 2],
    /// Occupancy per piece kind, both colours folded together.
    pub pieces: [SquareSet; 6],
    /// Enemy pieces currently giving check to the side to move.
    pub checkers: SquareSet,
    /// Remaining castling rights.
    pub castling: CastlingRights,
    /// The move that produced this frame, if any.
    pub last_move: Option<Move>,
    /// Incremented after Black's move.
    pub fullmove_number: u16,
    pub side_to_move: Colour,
    /// The square a pawn just skipped on a double push.
    pub ep_square: Option<Square>,
    /// Plies since the last pawn move or capture.
    pub halfmove_clock: u8,
    /// Piece kind captured by `last_move`, if any.
    pub captured: Option<PieceType>,
}

const _STATE_SIZE_ASSERT: () = assert!(size_of::<State>() <= 128);

impl Default for State {
    fn default() -> Self {
        Self {
            keys: Keys::default(),
            colours: [SquareSet::EMPTY; 2],
            pieces: [SquareSet::EMPTY; 6],
            checkers: SquareSet::EMPTY,
            castling: CastlingRights::NONE,
            last_move: None,
            fullmove_number: 1,
            side_to_move: Colour::White,
            ep_square: None,
            halfmove_clock: 0,
            captured: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_geometry() {
        assert_eq!(Square::A1.file(), File::A);
        assert_eq!(Square::A1.rank(), Rank::One);
        assert_eq!(Square::H8.file(), File::H);
        assert_eq!(Square::H8.rank(), Rank::Eight);
        assert_eq!(Square::from_rank_file(Rank::Four, File::E), Square::E4);
        assert_eq!(Square::E4.index(), 28);
    }

    #[test]
    fn square_names() {
        assert_eq!(Square::E4.name(), "e4");
        assert_eq!("e4".parse::<Square>(), Ok(Square::E4));
        assert!("z9".parse::<Square>().is_err());
    }

    #[test]
    fn castling_rights_mask() {
        let mut rights = CastlingRights::NONE;
        rights.grant_kingside(Colour::White);
        rights.grant_queenside(Colour::White);
        rights.grant_kingside(Colour::Black);
        rights.grant_queenside(Colour::Black);
        assert_eq!(rights.to_string(), "KQkq");

        rights.discard(Square::H1.as_set());
        assert!(!rights.kingside(Colour::White));
        assert!(rights.queenside(Colour::White));

        rights.clear(Colour::Black);
        assert_eq!(rights.to_string(), "Q");
    }

    #[test]
    fn state_frame_is_compact() {
        assert!(std::mem::size_of::<State>() <= 128);
    }
}
