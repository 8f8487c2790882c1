use crate::{
    chess::{
        piece::{Colour, Piece, PieceType},
        squareset::SquareSet,
        types::{CastlingRights, File, Rank, Square},
    },
    errors::FenParseError,
};

/// A parsed FEN record.
///
/// The first four fields are required; the halfmove clock and fullmove
/// number default to 0 and 1 when absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fen {
    pub colours: [SquareSet; 2],
    pub pieces: [SquareSet; 6],
    pub turn: Colour,
    pub castling: CastlingRights,
    pub ep: Option<Square>,
    pub halfmove: u8,
    pub fullmove: u16,
}

impl Fen {
    pub fn parse(fen: &str) -> Result<Self, FenParseError> {
        let mut tokens = fen.split_whitespace();

        let board_str = tokens.next().ok_or(FenParseError::MissingBoard)?;
        let (colours, pieces) = Self::parse_board(board_str)?;

        let turn = match tokens.next() {
            Some("w") => Colour::White,
            Some("b") => Colour::Black,
            Some(s) => return Err(FenParseError::InvalidSide(s.to_string())),
            None => return Err(FenParseError::MissingSide),
        };

        let castling = match tokens.next() {
            Some(s) => Self::parse_castling(s)?,
            None => return Err(FenParseError::MissingCastling),
        };

        let ep = match tokens.next() {
            Some(s) => Self::parse_ep(s, turn)?,
            None => return Err(FenParseError::MissingEnPassant),
        };

        let halfmove = match tokens.next() {
            Some(s) => s
                .parse()
                .map_err(|_| FenParseError::InvalidHalfmoveClock(s.to_string()))?,
            None => 0,
        };

        let fullmove = match tokens.next() {
            Some(s) => {
                let value: u16 = s
                    .parse()
                    .map_err(|_| FenParseError::InvalidFullmoveNumber(s.to_string()))?;
                if value == 0 {
                    return Err(FenParseError::FullmoveNumberZero);
                }
                value
            }
            None => 1,
        };

        Ok(Self {
            colours,
            pieces,
            turn,
            castling,
            ep,
            halfmove,
            fullmove,
        })
    }

    fn parse_board(board_str: &str) -> Result<([SquareSet; 2], [SquareSet; 6]), FenParseError> {
        let mut colours = [SquareSet::EMPTY; 2];
        let mut pieces = [SquareSet::EMPTY; 6];

        let ranks: Vec<&str> = board_str.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenParseError::BoardSegments(ranks.len()));
        }

        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            // FEN ranks run from 8 down to 1.
            let rank = Rank::from_index(7 - rank_idx as u8).unwrap();
            let mut file_idx = 0u8;
            let mut prev_was_digit = false;

            for c in rank_str.chars() {
                match c {
                    '1'..='8' => {
                        if prev_was_digit {
                            return Err(FenParseError::AdjacentDigits);
                        }
                        prev_was_digit = true;
                        file_idx += c as u8 - b'0';
                        if file_idx > 8 {
                            return Err(FenParseError::BadSquaresInSegment);
                        }
                    }
                    _ => {
                        prev_was_digit = false;
                        let piece = Piece::from_char(c)
                            .ok_or(FenParseError::UnexpectedCharacter(c))?;
                        let file = File::from_index(file_idx)
                            .ok_or(FenParseError::BadSquaresInSegment)?;
                        let sq = Square::from_rank_file(rank, file);
                        colours[piece.colour()] |= sq.as_set();
                        pieces[piece.piece_type()] |= sq.as_set();
                        file_idx += 1;
                    }
                }
            }

            if file_idx != 8 {
                return Err(FenParseError::BadSquaresInSegment);
            }
        }

        if (pieces[PieceType::Pawn] & SquareSet::BACK_RANKS).non_empty() {
            return Err(FenParseError::PawnsOnBackranks);
        }

        for colour in Colour::all() {
            match (pieces[PieceType::King] & colours[colour]).count() {
                0 => return Err(FenParseError::MissingKing(colour)),
                1 => (),
                _ => return Err(FenParseError::DuplicateKings(colour)),
            }
        }

        Ok((colours, pieces))
    }

    fn parse_castling(s: &str) -> Result<CastlingRights, FenParseError> {
        let mut rights = CastlingRights::NONE;
        if s == "-" {
            return Ok(rights);
        }

        for c in s.chars() {
            match c {
                'K' => rights.grant_kingside(Colour::White),
                'Q' => rights.grant_queenside(Colour::White),
                'k' => rights.grant_kingside(Colour::Black),
                'q' => rights.grant_queenside(Colour::Black),
                _ => return Err(FenParseError::InvalidCastling(s.to_string())),
            }
        }

        Ok(rights)
    }

    fn parse_ep(s: &str, turn: Colour) -> Result<Option<Square>, FenParseError> {
        if s == "-" {
            return Ok(None);
        }

        let sq: Square = s
            .parse()
            .map_err(|_| FenParseError::InvalidEnPassant(s.to_string()))?;

        // If White is to move a black pawn just double-pushed, so the
        // skipped square is on rank 6, and vice versa.
        let expected = match turn {
            Colour::White => Rank::Six,
            Colour::Black => Rank::Three,
        };
        if sq.rank() != expected {
            return Err(FenParseError::InvalidEnPassantRank {
                square: s.to_string(),
                expected,
                got: sq.rank(),
            });
        }

        Ok(Some(sq))
    }
}
