use core::fmt;
use std::error::Error;

use crate::m::ForcedMove;

/// Error when parsing an invalid square name.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ParseSquareError;

impl fmt::Display for ParseSquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid square name")
    }
}

impl Error for ParseSquareError {}

/// Errors that can occur when parsing placement notation.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ParseFenError {
    /// A character is neither a piece letter, an empty-run count, a
    /// `~` moved-marker nor a rank separator.
    InvalidCharacter,
    /// Ranks expand to differing widths, or a rank is empty.
    UnevenRanks,
    /// A dimension exceeds [`Board::MAX_DIMENSION`](crate::Board::MAX_DIMENSION).
    TooLarge,
    /// The placement does not match the dimensions the variant expects.
    WrongDimensions,
}

impl fmt::Display for ParseFenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ParseFenError::InvalidCharacter => "invalid character in placement",
            ParseFenError::UnevenRanks => "placement ranks have uneven widths",
            ParseFenError::TooLarge => "placement exceeds the maximum board dimensions",
            ParseFenError::WrongDimensions => "placement does not match variant dimensions",
        })
    }
}

impl Error for ParseFenError {}

/// Errors attempting to query or play a move.
///
/// All of these are local and recoverable: the game is left exactly as
/// it was and the caller may retry with different input.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum GameError {
    /// Coordinates outside the board dimensions.
    OutOfBounds,
    /// No piece on the origin square.
    EmptyOriginSquare,
    /// The origin piece does not belong to the side to move.
    NotTurnOwner,
    /// The destination is not in the origin piece's legal set.
    IllegalDestination,
    /// A mandatory move was available and the submitted move is not one
    /// of them. Carries every offered (from, to) pair.
    ForcedMoveViolation(Vec<ForcedMove>),
    /// Promotion target missing on a promoting move, or a pawn-kind or
    /// king target on any move.
    InvalidPromotionTarget,
    /// The game has already received a terminal result.
    GameOver,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::OutOfBounds => f.write_str("coordinates out of bounds"),
            GameError::EmptyOriginSquare => f.write_str("no piece on origin square"),
            GameError::NotTurnOwner => f.write_str("piece does not belong to the side to move"),
            GameError::IllegalDestination => f.write_str("destination is not a legal move"),
            GameError::ForcedMoveViolation(offers) => {
                f.write_str("a mandatory move must be played:")?;
                for offer in offers {
                    write!(f, " {offer}")?;
                }
                Ok(())
            }
            GameError::InvalidPromotionTarget => {
                f.write_str("missing or disallowed promotion target")
            }
            GameError::GameOver => f.write_str("the game is already over"),
        }
    }
}

impl Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::square::Square;

    #[test]
    fn test_forced_move_display() {
        let err = GameError::ForcedMoveViolation(vec![ForcedMove {
            from: Square::new(2, 4),
            to: Square::new(3, 5),
        }]);
        assert_eq!(err.to_string(), "a mandatory move must be played: c5xd6");
    }
}
