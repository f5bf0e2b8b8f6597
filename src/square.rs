use core::{fmt, str::FromStr};

use crate::errors::ParseSquareError;

/// A coordinate pair on a rectangular board.
///
/// `x` counts files from the left, `y` counts ranks from white's side,
/// both zero-based. Squares are plain coordinates: whether a square
/// actually exists on a given board depends on that board's dimensions
/// (see [`Board::contains`](crate::Board::contains)).
///
/// # Display
///
/// Squares display in algebraic style with a file letter and a 1-based
/// rank number, e.g. `a1` or `e10`.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Square {
    pub x: i8,
    pub y: i8,
}

impl Square {
    #[inline]
    pub const fn new(x: i8, y: i8) -> Square {
        Square { x, y }
    }

    /// Offsets the square by coordinate deltas. `None` if the result
    /// leaves the representable coordinate range.
    ///
    /// # Examples
    ///
    /// ```
    /// use anarchess::Square;
    ///
    /// assert_eq!(Square::new(3, 4).offset(1, 2), Some(Square::new(4, 6)));
    /// assert_eq!(Square::new(0, 0).offset(-1, 0), Some(Square::new(-1, 0)));
    /// ```
    #[inline]
    pub const fn offset(self, dx: i8, dy: i8) -> Option<Square> {
        match (self.x.checked_add(dx), self.y.checked_add(dy)) {
            (Some(x), Some(y)) => Some(Square { x, y }),
            _ => None,
        }
    }

    /// The Chebyshev distance to another square.
    #[inline]
    pub const fn distance(self, other: Square) -> i8 {
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        if dx > dy {
            dx
        } else {
            dy
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (0..26).contains(&self.x) && self.y >= 0 {
            write!(f, "{}{}", (b'a' + self.x as u8) as char, self.y + 1)
        } else {
            write!(f, "({},{})", self.x, self.y)
        }
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Square, ParseSquareError> {
        let mut chars = s.chars();
        let file = match chars.next() {
            Some(ch @ 'a'..='z') => ch as i8 - 'a' as i8,
            _ => return Err(ParseSquareError),
        };
        let rank: i8 = btoi::btoi(chars.as_str().as_bytes()).map_err(|_| ParseSquareError)?;
        if rank < 1 {
            return Err(ParseSquareError);
        }
        Ok(Square::new(file, rank - 1))
    }
}
