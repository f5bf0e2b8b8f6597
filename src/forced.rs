//! Mandatory moves.
//!
//! A rule class scans the board for moves the side to move is obliged
//! to play. Classes carry a priority; only the offers of the
//! highest-priority class with any offer at all bind the mover, and
//! classes of equal priority pool their offers. En passant is currently
//! the only class and sits at the top priority.

use crate::{
    board::Board,
    color::Color,
    m::{ForcedMove, MoveRecord},
    movegen,
    square::Square,
    variant::{RuleFlags, Variant},
};

type ForcedRule = fn(&Board, Color, Option<&MoveRecord>) -> Vec<ForcedMove>;

const RULES: [(u8, ForcedRule); 1] = [(u8::MAX, en_passant_offers)];

/// Every move the given side is obliged to choose from, or empty when
/// nothing binds them.
pub(crate) fn forced_moves(
    board: &Board,
    color: Color,
    last_move: Option<&MoveRecord>,
    variant: &Variant,
) -> Vec<ForcedMove> {
    if !variant.rules.contains(RuleFlags::FORCED_EN_PASSANT) {
        return Vec::new();
    }
    let mut best: Option<(u8, Vec<ForcedMove>)> = None;
    for (priority, rule) in RULES {
        let offers = rule(board, color, last_move);
        if offers.is_empty() {
            continue;
        }
        match &mut best {
            Some((p, pooled)) if *p == priority => pooled.extend(offers),
            Some((p, _)) if *p > priority => {}
            _ => best = Some((priority, offers)),
        }
    }
    best.map(|(_, offers)| offers).unwrap_or_default()
}

fn en_passant_offers(
    board: &Board,
    color: Color,
    last_move: Option<&MoveRecord>,
) -> Vec<ForcedMove> {
    let mut offers = Vec::new();
    let dy = color.forward();
    for (from, piece) in board.by_color(color) {
        if !piece.role.is_pawn() {
            continue;
        }
        for dx in [-1, 1] {
            if !movegen::en_passant_beside(board, from, color, dx, last_move) {
                continue;
            }
            let to = Square::new(from.x + dx, from.y + dy);
            if board.contains(to) && board.piece_at(to).is_none() {
                offers.push(ForcedMove { from, to });
            }
        }
    }
    offers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        fen,
        m::MovedPiece,
        role::Role,
    };

    fn double_advance(from: Square, to: Square) -> MoveRecord {
        MoveRecord {
            moved: vec![MovedPiece {
                piece: Role::Pawn,
                from,
                to,
            }],
            captured: vec![],
            promotion: None,
        }
    }

    #[test]
    fn test_no_history_no_force() {
        let board = fen::parse_placement("8/8/8/8/3pP3/8/8/8/8/8").expect("valid placement");
        let offers = forced_moves(&board, Color::White, None, &Variant::anarchy());
        assert!(offers.is_empty());
    }

    #[test]
    fn test_en_passant_is_forced() {
        // Black pawn just advanced d7-d5 beside the white pawn on e5.
        let board = fen::parse_placement("8/8/8/8/3pP~3/8/8/8/8/8").expect("valid placement");
        let record = double_advance(Square::new(3, 7), Square::new(3, 5));
        let offers = forced_moves(&board, Color::White, Some(&record), &Variant::anarchy());
        assert_eq!(
            offers,
            vec![ForcedMove {
                from: Square::new(4, 5),
                to: Square::new(3, 6),
            }]
        );
    }

    #[test]
    fn test_multiple_offers_pooled() {
        // Two white pawns flank the freshly advanced black pawn.
        let board = fen::parse_placement("8/8/8/8/2P~pP~3/8/8/8/8/8").expect("valid placement");
        let record = double_advance(Square::new(3, 7), Square::new(3, 5));
        let offers = forced_moves(&board, Color::White, Some(&record), &Variant::anarchy());
        assert_eq!(offers.len(), 2);
        assert!(offers.iter().all(|offer| offer.to == Square::new(3, 6)));
    }

    #[test]
    fn test_flag_off_disables_force() {
        let board = fen::parse_placement("8/8/8/8/3pP~3/8/8/8/8/8").expect("valid placement");
        let record = double_advance(Square::new(3, 7), Square::new(3, 5));
        let mut variant = Variant::anarchy();
        variant.rules.remove(RuleFlags::FORCED_EN_PASSANT);
        assert!(forced_moves(&board, Color::White, Some(&record), &variant).is_empty());
    }
}
