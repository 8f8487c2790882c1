//! Cuckoo hash tables of reversible moves, used by the upcoming-repetition
//! probe.
//!
//! For every non-pawn piece of either colour and every pair of squares it
//! could shuttle between on an empty board, the table stores the zobrist
//! delta that move induces (piece out, piece in, side flipped). Probing
//! the current hash XOR an ancestor hash against the table answers "is
//! there a single reversible move connecting these two positions?" in two
//! lookups.

use std::sync::LazyLock;

use crate::{
    chess::{
        board::movegen::attacks_by_type,
        chessmove::Move,
        piece::{Colour, PieceType},
        squareset::SquareSet,
        types::Square,
    },
    lookups::{PIECE_KEYS, SIDE_KEY},
};

pub const TABLE_SIZE: usize = 8192;

/// The number of reversible (piece, from, to) triples over both colours.
const EXPECTED_ENTRIES: usize = 3668;

pub struct CuckooTables {
    pub keys: Box<[u64; TABLE_SIZE]>,
    pub moves: Box<[Option<Move>; TABLE_SIZE]>,
}

pub const fn h1(key: u64) -> usize {
    (key & 0x1FFF) as usize
}

pub const fn h2(key: u64) -> usize {
    ((key >> 16) & 0x1FFF) as usize
}

static TABLES: LazyLock<CuckooTables> = LazyLock::new(|| {
    let mut keys = vec![0u64; TABLE_SIZE];
    let mut moves = vec![None::<Move>; TABLE_SIZE];

    // tally the insertions to sanity-check the table contents
    let mut count = 0;

    for colour in Colour::all() {
        for piece_type in PieceType::all() {
            if piece_type == PieceType::Pawn {
                continue;
            }
            for from in Square::all() {
                for to in Square::all().filter(|&to| to > from) {
                    let reachable = attacks_by_type(piece_type, from, SquareSet::EMPTY)
                        .contains_square(to);
                    if !reachable {
                        continue;
                    }

                    let mut mv = Some(Move::new_quiet(from, to, piece_type));
                    let mut key = PIECE_KEYS[colour][piece_type][from]
                        ^ PIECE_KEYS[colour][piece_type][to]
                        ^ SIDE_KEY;

                    // cuckoo insertion: evict whatever occupies the slot
                    // and re-home it at its other hash
                    let mut slot = h1(key);
                    loop {
                        std::mem::swap(&mut keys[slot], &mut key);
                        std::mem::swap(&mut moves[slot], &mut mv);

                        if mv.is_none() {
                            break;
                        }

                        slot = if slot == h1(key) { h2(key) } else { h1(key) };
                    }
                    count += 1;
                }
            }
        }
    }
    assert_eq!(count, EXPECTED_ENTRIES);

    CuckooTables {
        keys: keys.into_boxed_slice().try_into().unwrap(),
        moves: moves.into_boxed_slice().try_into().unwrap(),
    }
});

pub fn tables() -> &'static CuckooTables {
    &TABLES
}
