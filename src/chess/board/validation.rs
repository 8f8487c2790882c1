use crate::{
    chess::{
        board::Board,
        piece::{Colour, PieceType},
        squareset::SquareSet,
    },
    errors::PositionValidityError,
};

impl Board {
    /// Cross-check every structural invariant of the position. Called
    /// after make/unmake in debug builds; far too slow for release.
    #[allow(clippy::cognitive_complexity)]
    pub fn check_validity(&self) -> Result<(), PositionValidityError> {
        let st = self.state();

        let white = st.colours[Colour::White];
        let black = st.colours[Colour::Black];

        if (white & black).non_empty() {
            return Err(format!(
                "colour occupancies overlap: {:#x}",
                (white & black).inner()
            ));
        }

        let occupied = white | black;
        let piece_union = st
            .pieces
            .iter()
            .fold(SquareSet::EMPTY, |acc, &bb| acc | bb);
        if piece_union != occupied {
            return Err(format!(
                "piece occupancy {:#x} does not match colour occupancy {:#x}",
                piece_union.inner(),
                occupied.inner()
            ));
        }

        let piece_counts: u32 = st.pieces.iter().map(|bb| bb.count()).sum();
        if piece_counts != occupied.count() {
            return Err(format!(
                "piece kinds overlap: {piece_counts} piece bits for {} occupied squares",
                occupied.count()
            ));
        }

        for colour in Colour::all() {
            let kings = (st.pieces[PieceType::King] & st.colours[colour]).count();
            if kings != 1 {
                return Err(format!("{colour} has {kings} kings"));
            }
        }

        let stm = st.side_to_move;
        let king_sq = self.king_square(stm);
        let expected_checkers = self.attackers(king_sq, occupied) & st.colours[!stm];
        if st.checkers != expected_checkers {
            return Err(format!(
                "checkers are corrupt: expected {:#x}, got {:#x}",
                expected_checkers.inner(),
                st.checkers.inner()
            ));
        }

        let expected_keys = self.regenerate_keys();
        if st.keys != expected_keys {
            return Err(format!(
                "keys are corrupt: expected {expected_keys:?}, got {:?}",
                st.keys
            ));
        }

        if let Some(ep) = st.ep_square {
            let expected_rank = match stm {
                Colour::White => crate::chess::types::Rank::Six,
                Colour::Black => crate::chess::types::Rank::Three,
            };
            if ep.rank() != expected_rank {
                return Err(format!("en passant square {ep} is on the wrong rank"));
            }
        }

        Ok(())
    }
}
