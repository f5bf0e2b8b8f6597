use core::fmt;

use crate::{color::Color, types::Piece};

/// The closed roster of piece types in the variant.
///
/// Orthodox pieces keep their orthodox movement; the composites combine
/// or restrict it:
///
/// * `Knook` moves like a horse but captures like a rook.
/// * `Xook` moves on diagonal rays like a bishop.
/// * `Archbishop` moves on orthogonal rays, but only every other square.
/// * `Antiqueen` moves like a horse.
/// * `ChildPawn` is a pawn that never gets the center-file advance
///   boost.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Role {
    Pawn = 1,
    ChildPawn = 2,
    Horse = 3,
    Bishop = 4,
    Xook = 5,
    Archbishop = 6,
    Rook = 7,
    Knook = 8,
    Queen = 9,
    Antiqueen = 10,
    King = 11,
}

impl Role {
    /// Gets the piece type from its letter used in placement notation.
    ///
    /// # Examples
    ///
    /// ```
    /// use anarchess::Role;
    ///
    /// assert_eq!(Role::from_char('k'), Some(Role::King));
    /// assert_eq!(Role::from_char('N'), Some(Role::Knook));
    ///
    /// assert_eq!(Role::from_char('j'), None);
    /// ```
    pub const fn from_char(ch: char) -> Option<Role> {
        match ch {
            'P' | 'p' => Some(Role::Pawn),
            'C' | 'c' => Some(Role::ChildPawn),
            'H' | 'h' => Some(Role::Horse),
            'B' | 'b' => Some(Role::Bishop),
            'X' | 'x' => Some(Role::Xook),
            'A' | 'a' => Some(Role::Archbishop),
            'R' | 'r' => Some(Role::Rook),
            'N' | 'n' => Some(Role::Knook),
            'Q' | 'q' => Some(Role::Queen),
            'Z' | 'z' => Some(Role::Antiqueen),
            'K' | 'k' => Some(Role::King),
            _ => None,
        }
    }

    /// Gets the lowercase letter for the piece type.
    pub const fn char(self) -> char {
        match self {
            Role::Pawn => 'p',
            Role::ChildPawn => 'c',
            Role::Horse => 'h',
            Role::Bishop => 'b',
            Role::Xook => 'x',
            Role::Archbishop => 'a',
            Role::Rook => 'r',
            Role::Knook => 'n',
            Role::Queen => 'q',
            Role::Antiqueen => 'z',
            Role::King => 'k',
        }
    }

    /// Gets the uppercase letter for the piece type.
    pub const fn upper_char(self) -> char {
        self.char().to_ascii_uppercase()
    }

    /// Gets the hyphenated name used in payloads and piece sets.
    pub const fn name(self) -> &'static str {
        match self {
            Role::Pawn => "pawn",
            Role::ChildPawn => "child-pawn",
            Role::Horse => "horse",
            Role::Bishop => "bishop",
            Role::Xook => "xook",
            Role::Archbishop => "archbishop",
            Role::Rook => "rook",
            Role::Knook => "knook",
            Role::Queen => "queen",
            Role::Antiqueen => "antiqueen",
            Role::King => "king",
        }
    }

    /// Gets the piece type from its hyphenated name.
    pub fn from_name(name: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|role| role.name() == name)
    }

    /// Gets a [`Piece`] of the given color with a fresh `moved` flag.
    #[inline]
    pub const fn of(self, color: Color) -> Piece {
        Piece {
            color,
            role: self,
            moved: false,
        }
    }

    /// Whether the piece type belongs to the pawn family.
    ///
    /// Pawn-kind pieces advance forward, capture diagonally, take part
    /// in en passant (on both ends) and promote on the farthest rank.
    #[inline]
    pub const fn is_pawn(self) -> bool {
        matches!(self, Role::Pawn | Role::ChildPawn)
    }

    /// Whether a pawn may promote into this piece type.
    ///
    /// # Examples
    ///
    /// ```
    /// use anarchess::Role;
    ///
    /// assert!(Role::Knook.is_promotable());
    /// assert!(!Role::King.is_promotable());
    /// assert!(!Role::ChildPawn.is_promotable());
    /// ```
    #[inline]
    pub const fn is_promotable(self) -> bool {
        !self.is_pawn() && !matches!(self, Role::King)
    }

    /// All piece types, in discriminant order.
    pub const ALL: [Role; 11] = [
        Role::Pawn,
        Role::ChildPawn,
        Role::Horse,
        Role::Bishop,
        Role::Xook,
        Role::Archbishop,
        Role::Rook,
        Role::Knook,
        Role::Queen,
        Role::Antiqueen,
        Role::King,
    ];
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
