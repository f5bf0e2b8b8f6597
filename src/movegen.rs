//! Pure destination generation, one rule per piece type.
//!
//! Everything here is a pure function of the board, the origin square,
//! the immediately preceding move (for en passant) and the variant
//! configuration. Ray walks collect squares in order of increasing
//! distance and stop at the first occupied square, including it only on
//! an enemy piece; all arithmetic is integer coordinate deltas.

use crate::{
    board::Board,
    color::Color,
    m::{Destinations, MoveRecord},
    role::Role,
    square::Square,
    types::Piece,
    variant::{CastlingTargets, RuleFlags, Variant},
};

const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const HORSE: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];
const AROUND: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Computes the destination set for the piece on `from`.
///
/// Returns an empty set if the square is empty or off the board. The
/// ordering within each ray is nearest to farthest.
pub fn destinations(
    board: &Board,
    from: Square,
    last_move: Option<&MoveRecord>,
    variant: &Variant,
) -> Destinations {
    let mut moves = Destinations::new();
    let Some(piece) = board.piece_at(from) else {
        return moves;
    };

    match piece.role {
        Role::Rook => rays(board, from, piece.color, &ORTHOGONAL, &mut moves),
        Role::Bishop | Role::Xook => rays(board, from, piece.color, &DIAGONAL, &mut moves),
        Role::Queen => {
            rays(board, from, piece.color, &ORTHOGONAL, &mut moves);
            rays(board, from, piece.color, &DIAGONAL, &mut moves);
        }
        Role::Horse | Role::Antiqueen => steps(board, from, piece.color, &mut moves),
        Role::Knook => knook(board, from, piece.color, &mut moves),
        Role::Archbishop => archbishop(board, from, piece.color, &mut moves),
        Role::King => king(board, from, piece, variant, &mut moves),
        Role::Pawn | Role::ChildPawn => pawn(board, from, piece, last_move, variant, &mut moves),
    }

    moves
}

fn ray(board: &Board, from: Square, us: Color, (dx, dy): (i8, i8), moves: &mut Destinations) {
    let mut sq = from;
    while let Some(next) = sq.offset(dx, dy) {
        if !board.contains(next) {
            break;
        }
        match board.piece_at(next) {
            Some(piece) => {
                if piece.color != us {
                    moves.push(next);
                }
                break;
            }
            None => moves.push(next),
        }
        sq = next;
    }
}

fn rays(board: &Board, from: Square, us: Color, dirs: &[(i8, i8)], moves: &mut Destinations) {
    for &dir in dirs {
        ray(board, from, us, dir, moves);
    }
}

/// Horse-pattern offsets, same-color occupants excluded.
fn steps(board: &Board, from: Square, us: Color, moves: &mut Destinations) {
    offsets(board, from, us, &HORSE, moves);
}

fn offsets(
    board: &Board,
    from: Square,
    us: Color,
    table: &[(i8, i8)],
    moves: &mut Destinations,
) {
    for &(dx, dy) in table {
        let Some(to) = from.offset(dx, dy) else {
            continue;
        };
        if !board.contains(to) {
            continue;
        }
        match board.piece_at(to) {
            Some(piece) if piece.color == us => {}
            _ => moves.push(to),
        }
    }
}

/// Moves like a horse, captures like a rook: horse offsets restricted
/// to empty squares, plus the first enemy piece along each orthogonal
/// ray.
fn knook(board: &Board, from: Square, us: Color, moves: &mut Destinations) {
    for &(dx, dy) in &HORSE {
        let Some(to) = from.offset(dx, dy) else {
            continue;
        };
        if board.contains(to) && board.piece_at(to).is_none() {
            moves.push(to);
        }
    }
    for &(dx, dy) in &ORTHOGONAL {
        let mut sq = from;
        while let Some(next) = sq.offset(dx, dy) {
            if !board.contains(next) {
                break;
            }
            if let Some(piece) = board.piece_at(next) {
                if piece.color != us {
                    moves.push(next);
                }
                break;
            }
            sq = next;
        }
    }
}

/// Orthogonal rays thinned to every other square: a destination at ray
/// distance `d` survives only when `d` is even, matching the parity of
/// the origin.
fn archbishop(board: &Board, from: Square, us: Color, moves: &mut Destinations) {
    for &(dx, dy) in &ORTHOGONAL {
        let mut sq = from;
        let mut d: i8 = 0;
        while let Some(next) = sq.offset(dx, dy) {
            d += 1;
            if !board.contains(next) {
                break;
            }
            match board.piece_at(next) {
                Some(piece) => {
                    if piece.color != us && d % 2 == 0 {
                        moves.push(next);
                    }
                    break;
                }
                None => {
                    if d % 2 == 0 {
                        moves.push(next);
                    }
                }
            }
            sq = next;
        }
    }
}

fn king(board: &Board, from: Square, piece: Piece, variant: &Variant, moves: &mut Destinations) {
    offsets(board, from, piece.color, &AROUND, moves);

    if piece.moved {
        return;
    }
    for (dir, targets) in [(-1, variant.queenside), (1, variant.kingside)] {
        if let Some(rook) = castle_rook(board, from, piece.color, dir, variant) {
            if !castle_targets_clear(board, from, rook, targets) {
                continue;
            }
            let to = Square::new(targets.king, from.y);
            if to != from && !moves.contains(&to) {
                moves.push(to);
            }
        }
    }
}

/// Finds the rook an unmoved king on `king` would castle with towards
/// `dir`: the scan outward along the rank must reach an unmoved
/// same-color rook, crossing only empty squares, except that a single
/// piece of the variant's jumpable role may be crossed.
pub(crate) fn castle_rook(
    board: &Board,
    king: Square,
    us: Color,
    dir: i8,
    variant: &Variant,
) -> Option<Square> {
    let mut jumped = false;
    let mut sq = king;
    while let Some(next) = sq.offset(dir, 0) {
        if !board.contains(next) {
            return None;
        }
        match board.piece_at(next) {
            Some(piece) if piece.color == us && piece.role == Role::Rook && !piece.moved => {
                return Some(next);
            }
            Some(piece) => {
                if jumped || variant.castle_jump != Some(piece.role) {
                    return None;
                }
                jumped = true;
            }
            None => {}
        }
        sq = next;
    }
    None
}

/// The king's landing square must be empty outright; the rook's landing
/// square may also be either origin, since both vacate. A jumped piece
/// stays on the board, so it must not stand on a target.
fn castle_targets_clear(
    board: &Board,
    king: Square,
    rook: Square,
    targets: CastlingTargets,
) -> bool {
    let king_to = Square::new(targets.king, king.y);
    let rook_to = Square::new(targets.rook, king.y);
    board.contains(king_to)
        && board.contains(rook_to)
        && (king_to == king || board.piece_at(king_to).is_none())
        && (rook_to == king || rook_to == rook || board.piece_at(rook_to).is_none())
}

fn pawn(
    board: &Board,
    from: Square,
    piece: Piece,
    last_move: Option<&MoveRecord>,
    variant: &Variant,
    moves: &mut Destinations,
) {
    let dy = piece.color.forward();

    let mut sq = from;
    for _ in 0..advance_limit(piece, from.x, variant) {
        let Some(next) = sq.offset(0, dy) else {
            break;
        };
        if !board.contains(next) || board.piece_at(next).is_some() {
            break;
        }
        moves.push(next);
        sq = next;
    }

    for dx in [-1, 1] {
        let Some(diag) = from.offset(dx, dy) else {
            continue;
        };
        if !board.contains(diag) {
            continue;
        }
        match board.piece_at(diag) {
            Some(target) => {
                if target.color != piece.color {
                    moves.push(diag);
                }
            }
            None => {
                if en_passant_beside(board, from, piece.color, dx, last_move) {
                    moves.push(diag);
                }
            }
        }
    }
}

/// How many empty squares forward a pawn-kind piece may advance: one
/// once moved, otherwise two, or three for a full pawn on a center file
/// when the boost rule is on. Child-pawns never get the boost.
fn advance_limit(piece: Piece, x: i8, variant: &Variant) -> i8 {
    if piece.moved {
        1
    } else if piece.role != Role::ChildPawn
        && variant.rules.contains(RuleFlags::CENTER_FILE_BOOST)
        && variant.is_center_file(x)
    {
        3
    } else {
        2
    }
}

/// Whether the pawn-kind piece on `from` may capture en passant towards
/// `dx`: the beside square holds an enemy pawn-kind piece, and the
/// immediately preceding move shows exactly that piece advancing two or
/// more squares along its file to land there.
pub(crate) fn en_passant_beside(
    board: &Board,
    from: Square,
    us: Color,
    dx: i8,
    last_move: Option<&MoveRecord>,
) -> bool {
    let Some(beside) = from.offset(dx, 0) else {
        return false;
    };
    let Some(neighbor) = board.piece_at(beside) else {
        return false;
    };
    if neighbor.color == us || !neighbor.role.is_pawn() {
        return false;
    }
    let Some(record) = last_move else {
        return false;
    };
    record.moved.iter().any(|m| {
        m.piece.is_pawn() && m.to == beside && m.from.x == m.to.x && (m.to.y - m.from.y).abs() >= 2
    })
}
