use std::fmt::Display;

use arrayvec::ArrayVec;

use crate::{chess::chessmove::Move, search::MAX_PLY};

/// A principal variation: the line of best play found below some node.
#[derive(Clone, Debug)]
pub struct PVariation {
    pub(crate) moves: ArrayVec<Move, MAX_PLY>,
}

impl Default for PVariation {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl PVariation {
    pub const EMPTY: Self = Self {
        moves: ArrayVec::new_const(),
    };

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn first(&self) -> Option<Move> {
        self.moves.first().copied()
    }

    pub(crate) fn clear(&mut self) {
        self.moves.clear();
    }

    pub(crate) fn load_from(&mut self, m: Move, rest: &Self) {
        self.moves.clear();
        self.moves.push(m);
        self.moves
            .try_extend_from_slice(&rest.moves)
            .expect("attempted to construct a PV longer than MAX_PLY.");
    }
}

impl Display for PVariation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.moves.is_empty() {
            write!(f, "pv ")?;
        }
        for &m in self.moves() {
            write!(f, "{m} ")?;
        }
        Ok(())
    }
}
