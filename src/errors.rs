use thiserror::Error;

use crate::chess::{piece::Colour, types::Rank};

/// Errors that can occur when parsing a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenParseError {
    #[error("FEN string is missing board part")]
    MissingBoard,
    #[error("board part of FEN has {0} segments, expected 8")]
    BoardSegments(usize),
    #[error("wrong number of squares in board segment")]
    BadSquaresInSegment,
    #[error("adjacent digits in board segment are not allowed")]
    AdjacentDigits,
    #[error("unexpected character in piece placement: '{0}'")]
    UnexpectedCharacter(char),
    #[error("expected side to be 'w' or 'b', got \"{0}\"")]
    InvalidSide(String),
    #[error("expected side part")]
    MissingSide,
    #[error("expected castling part")]
    MissingCastling,
    #[error("invalid castling format: \"{0}\"")]
    InvalidCastling(String),
    #[error("{0} king is missing")]
    MissingKing(Colour),
    #[error("more than one {0} king")]
    DuplicateKings(Colour),
    #[error("pawns present on backranks")]
    PawnsOnBackranks,
    #[error("expected en passant part")]
    MissingEnPassant,
    #[error("invalid en passant square: \"{0}\"")]
    InvalidEnPassant(String),
    #[error("invalid en passant rank for square \"{square}\": expected {expected:?}, got {got:?}")]
    InvalidEnPassantRank {
        square: String,
        expected: Rank,
        got: Rank,
    },
    #[error("invalid halfmove clock: \"{0}\"")]
    InvalidHalfmoveClock(String),
    #[error("invalid fullmove number: \"{0}\"")]
    InvalidFullmoveNumber(String),
    #[error("fullmove number must be at least 1")]
    FullmoveNumberZero,
}

/// Errors that can occur when parsing a UCI move string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveParseError {
    #[error("invalid move length {0}")]
    InvalidLength(usize),
    #[error("invalid from-square file {0}")]
    InvalidFromSquareFile(char),
    #[error("invalid from-square rank {0}")]
    InvalidFromSquareRank(char),
    #[error("invalid to-square file {0}")]
    InvalidToSquareFile(char),
    #[error("invalid to-square rank {0}")]
    InvalidToSquareRank(char),
    #[error("invalid promotion piece {0}")]
    InvalidPromotionPiece(char),
    #[error("illegal move {0}")]
    IllegalMove(String),
}

/// Description of a corrupt position detected by the debug-mode validator.
pub type PositionValidityError = String;
