use crate::{color::Color, role::Role};

/// A piece with [`Color`], [`Role`] and a `moved` flag.
///
/// The flag starts out `false` and is set by
/// [`Game::apply`](crate::Game::apply) the first time the piece moves;
/// it never transitions back. It gates castling eligibility (king and
/// rook must be unmoved) and the pawn multi-square first advance.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    pub color: Color,
    pub role: Role,
    pub moved: bool,
}

impl Piece {
    /// Gets the placement-notation letter: uppercase for white,
    /// lowercase for black.
    pub fn char(self) -> char {
        self.color
            .fold_wb(self.role.upper_char(), self.role.char())
    }

    pub fn from_char(ch: char) -> Option<Piece> {
        Role::from_char(ch).map(|role| role.of(Color::from_white(ch.is_ascii_uppercase())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_roundtrip() {
        for role in Role::ALL {
            for color in Color::ALL {
                let piece = role.of(color);
                assert_eq!(Piece::from_char(piece.char()), Some(piece));
            }
        }
    }
}
