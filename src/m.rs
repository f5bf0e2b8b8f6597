use core::fmt;

use arrayvec::ArrayVec;

use crate::{role::Role, square::Square};

/// A container for destination squares that can be stored inline on the
/// stack.
///
/// The capacity suffices for any piece on any constructible board: with
/// both dimensions capped at
/// [`Board::MAX_DIMENSION`](crate::Board::MAX_DIMENSION) (32), a queen
/// reaches at most 124 squares.
pub type Destinations = ArrayVec<Square, 128>;

/// One piece transition inside a [`MoveRecord`].
///
/// `piece` is the role as it stands *after* the move, so a promotion
/// records the promoted-to role.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovedPiece {
    pub piece: Role,
    pub from: Square,
    pub to: Square,
}

/// One capture inside a [`MoveRecord`].
///
/// The captured square is recorded explicitly because it need not equal
/// any destination: en passant removes the pawn beside the origin.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Capture {
    pub square: Square,
    pub piece: Role,
}

/// The log entry produced by applying a move.
///
/// `moved` holds one transition for ordinary moves and two for castling
/// (king first, then rook). `captured` holds zero or one squares that
/// held an enemy piece at the instant of capture. Replaying the record
/// against the pre-move board (clear every captured square, then
/// perform every transition in order) reproduces the post-move board.
#[allow(missing_docs)]
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveRecord {
    pub moved: Vec<MovedPiece>,
    pub captured: Vec<Capture>,
    pub promotion: Option<Role>,
}

impl MoveRecord {
    /// Checks if the move captured anything.
    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }

    /// Checks if the move was a castling move (two transitions in one).
    pub fn is_castle(&self) -> bool {
        self.moved.len() == 2
    }

    /// Checks if the move was an en passant capture: the captured
    /// square differs from every destination.
    pub fn is_en_passant(&self) -> bool {
        self.captured
            .iter()
            .any(|capture| self.moved.iter().all(|m| m.to != capture.square))
    }

    /// Checks if the move was a promotion.
    pub fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, m) in self.moved.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            write!(
                f,
                "{}{}{}{}",
                m.piece.upper_char(),
                m.from,
                if self.is_capture() { 'x' } else { '-' },
                m.to
            )?;
        }
        if let Some(promotion) = self.promotion {
            write!(f, "={}", promotion.upper_char())?;
        }
        Ok(())
    }
}

/// A mandatory move on offer, reported by
/// [`GameError::ForcedMoveViolation`](crate::GameError::ForcedMoveViolation).
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForcedMove {
    pub from: Square,
    pub to: Square,
}

impl fmt::Display for ForcedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.from, self.to)
    }
}
