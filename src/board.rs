use core::fmt;

use crate::{color::Color, square::Square, types::Piece};

/// A rectangular grid of optionally occupied squares.
///
/// Dimensions are fixed at construction and immutable for the life of
/// the board. At most one piece sits on a square. `Clone` produces a
/// deep copy suitable for speculative computation.
///
/// Mutation happens only through [`Game::apply`](crate::Game::apply);
/// the setters are crate-internal.
#[derive(Clone, Eq, PartialEq)]
pub struct Board {
    width: i8,
    height: i8,
    squares: Vec<Option<Piece>>,
}

impl Board {
    /// The largest supported width or height. The cap keeps every
    /// piece's destination count within the inline capacity of
    /// [`Destinations`](crate::Destinations): a queen on a 32×32 board
    /// reaches at most 124 squares.
    pub const MAX_DIMENSION: i8 = 32;

    /// Creates an empty board.
    ///
    /// # Panics
    ///
    /// Panics if a dimension is not in `1..=MAX_DIMENSION`. Boards built
    /// from untrusted input go through
    /// [`fen::parse_placement`](crate::fen::parse_placement), which
    /// reports oversize dimensions as a typed error instead.
    pub fn empty(width: i8, height: i8) -> Board {
        assert!(
            width > 0
                && height > 0
                && width <= Board::MAX_DIMENSION
                && height <= Board::MAX_DIMENSION,
            "board dimensions must be in 1..={}",
            Board::MAX_DIMENSION
        );
        Board {
            width,
            height,
            squares: vec![None; width as usize * height as usize],
        }
    }

    #[inline]
    pub const fn width(&self) -> i8 {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> i8 {
        self.height
    }

    /// `(width, height)`.
    #[inline]
    pub const fn dimensions(&self) -> (i8, i8) {
        (self.width, self.height)
    }

    /// Whether the square exists on this board.
    #[inline]
    pub const fn contains(&self, sq: Square) -> bool {
        0 <= sq.x && sq.x < self.width && 0 <= sq.y && sq.y < self.height
    }

    #[inline]
    fn index(&self, sq: Square) -> usize {
        debug_assert!(self.contains(sq));
        sq.y as usize * self.width as usize + sq.x as usize
    }

    /// Gets the piece on a square. `None` for empty or nonexistent
    /// squares.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        if self.contains(sq) {
            self.squares[self.index(sq)]
        } else {
            None
        }
    }

    pub(crate) fn set_piece_at(&mut self, sq: Square, piece: Piece) {
        let idx = self.index(sq);
        self.squares[idx] = Some(piece);
    }

    pub(crate) fn remove_piece_at(&mut self, sq: Square) -> Option<Piece> {
        let idx = self.index(sq);
        self.squares[idx].take()
    }

    /// Iterates over all occupied squares, rank by rank from `y = 0`.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares.iter().enumerate().filter_map(move |(i, sq)| {
            sq.map(|piece| {
                (
                    Square::new(
                        (i % self.width as usize) as i8,
                        (i / self.width as usize) as i8,
                    ),
                    piece,
                )
            })
        })
    }

    /// Iterates over the occupied squares of one color.
    pub fn by_color(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                match self.piece_at(Square::new(x, y)) {
                    Some(piece) => f.write_fmt(format_args!("{}", piece.char()))?,
                    None => f.write_str(".")?,
                }
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
