//! Perft: counts the leaf positions of the legal-move tree to a fixed
//! depth. The oracle for move-generator and make/unmake correctness.

use crate::chess::board::{
    movegen::{MoveGenMode, MoveList},
    Board,
};

pub fn perft(pos: &mut Board, depth: usize) -> u64 {
    #[cfg(debug_assertions)]
    pos.check_validity().unwrap();

    if depth == 0 {
        return 1;
    }

    let mut ml = MoveList::new();
    pos.pseudolegal_moves(&mut ml, MoveGenMode::All);
    let pinned = pos.pinned();

    if depth == 1 {
        return ml
            .iter_moves()
            .filter(|&&m| pos.is_pseudolegal_legal(m, pinned))
            .count() as u64;
    }

    let mut count = 0;
    for &m in ml.iter_moves() {
        if !pos.is_pseudolegal_legal(m, pinned) {
            continue;
        }
        pos.make_move(m);
        count += perft(pos, depth - 1);
        pos.unmake_move();
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    const POSITION_3: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
    const POSITION_4: &str = "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2pP/R2Q1RK1 w kq - 0 1";
    const POSITION_5: &str = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8";

    fn expect(fen: &str, depth: usize, nodes: u64) {
        let mut pos = Board::from_fen(fen).unwrap();
        assert_eq!(perft(&mut pos, depth), nodes, "fen {fen} depth {depth}");
        // the walk must leave the position untouched
        assert_eq!(pos.fen(), Board::from_fen(fen).unwrap().fen());
    }

    #[test]
    fn perft_start_position() {
        let mut pos = Board::startpos();
        assert_eq!(perft(&mut pos, 1), 20);
        assert_eq!(perft(&mut pos, 2), 400);
        assert_eq!(perft(&mut pos, 3), 8_902);
        assert_eq!(perft(&mut pos, 4), 197_281);
    }

    #[test]
    fn perft_kiwipete() {
        expect(KIWIPETE, 1, 48);
        expect(KIWIPETE, 2, 2_039);
        expect(KIWIPETE, 3, 97_862);
    }

    #[test]
    fn perft_position_3() {
        expect(POSITION_3, 1, 14);
        expect(POSITION_3, 2, 191);
        expect(POSITION_3, 3, 2_812);
        expect(POSITION_3, 4, 43_238);
        expect(POSITION_3, 5, 674_624);
    }

    #[test]
    fn perft_position_4() {
        expect(POSITION_4, 1, 6);
        expect(POSITION_4, 2, 264);
        expect(POSITION_4, 3, 9_467);
    }

    #[test]
    fn perft_position_5() {
        expect(POSITION_5, 1, 44);
        expect(POSITION_5, 2, 1_486);
        expect(POSITION_5, 3, 62_379);
    }

    // The full-depth reference counts. Run these in release mode:
    // `cargo test --release -- --ignored`

    #[test]
    #[ignore]
    fn perft_start_position_deep() {
        let mut pos = Board::startpos();
        assert_eq!(perft(&mut pos, 5), 4_865_609);
        assert_eq!(perft(&mut pos, 6), 119_060_324);
    }

    #[test]
    #[ignore]
    fn perft_kiwipete_deep() {
        expect(KIWIPETE, 4, 4_085_603);
        expect(KIWIPETE, 5, 193_690_690);
    }

    #[test]
    #[ignore]
    fn perft_position_3_deep() {
        expect(POSITION_3, 6, 11_030_083);
    }

    #[test]
    #[ignore]
    fn perft_position_4_deep() {
        expect(POSITION_4, 4, 422_333);
        expect(POSITION_4, 5, 15_833_292);
    }

    #[test]
    #[ignore]
    fn perft_position_5_deep() {
        expect(POSITION_5, 4, 2_103_487);
        expect(POSITION_5, 5, 89_941_194);
    }
}
