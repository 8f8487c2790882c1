//! The core of a chess engine: a bitboard position with incremental
//! zobrist hashing and a make/unmake state stack, a legal move
//! generator, static exchange evaluation, repetition detection with a
//! cuckoo-table upcoming-repetition probe, and an iterative-deepening
//! alpha-beta search driver.
//!
//! The search is generic over its evaluation function (see
//! [`search::Evaluator`]); a material-count reference implementation is
//! provided. Protocol front-ends, transposition tables, and evaluation
//! networks live outside this crate.

pub mod chess;
pub mod cuckoo;
pub mod errors;
pub mod lookups;
pub mod perft;
pub mod rng;
pub mod search;

pub use chess::{
    board::{movegen::MoveList, Board},
    chessmove::Move,
    piece::{Colour, Piece, PieceType},
    squareset::SquareSet,
    types::Square,
};
pub use search::{Evaluator, Limits, MaterialEvaluator, SearchShared, SearchThread};
