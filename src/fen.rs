//! Parse and write placement notation.
//!
//! The notation generalizes FEN board syntax to rectangular boards of
//! any size up to [`Board::MAX_DIMENSION`](crate::Board::MAX_DIMENSION)
//! a side: ranks from the top of the board (largest `y`) down to the
//! bottom, separated by `/`; empty runs as decimal integers (possibly
//! multi-digit); one letter per piece, uppercase for white. A `~` after
//! a letter marks a piece whose `moved` flag is already set, so castling
//! and double-advance eligibility survive a round trip.
//!
//! ```
//! use anarchess::fen;
//!
//! let board = fen::parse_placement("3k4/8/8/8/8/8/8/8/8/R3K3")?;
//! assert_eq!(board.dimensions(), (8, 10));
//! assert_eq!(fen::placement(&board), "3k4/8/8/8/8/8/8/8/8/R3K3");
//! # Ok::<_, anarchess::ParseFenError>(())
//! ```

use core::fmt::Write as _;

use crate::{board::Board, errors::ParseFenError, square::Square, types::Piece};

/// Parses placement notation. Dimensions are inferred: the rank count
/// gives the height, the uniform expanded rank length gives the width.
pub fn parse_placement(s: &str) -> Result<Board, ParseFenError> {
    let mut ranks = Vec::new();
    for rank_part in s.split('/') {
        let mut rank: Vec<Option<Piece>> = Vec::new();
        let mut digits = String::new();
        for ch in rank_part.chars() {
            if ch.is_ascii_digit() {
                digits.push(ch);
                continue;
            }
            flush_run(&mut rank, &mut digits)?;
            if ch == '~' {
                match rank.last_mut() {
                    Some(Some(piece)) if !piece.moved => piece.moved = true,
                    _ => return Err(ParseFenError::InvalidCharacter),
                }
            } else {
                rank.push(Some(
                    Piece::from_char(ch).ok_or(ParseFenError::InvalidCharacter)?,
                ));
            }
        }
        flush_run(&mut rank, &mut digits)?;
        if rank.is_empty() {
            return Err(ParseFenError::UnevenRanks);
        }
        if rank.len() > Board::MAX_DIMENSION as usize {
            return Err(ParseFenError::TooLarge);
        }
        ranks.push(rank);
    }

    if ranks.len() > Board::MAX_DIMENSION as usize {
        return Err(ParseFenError::TooLarge);
    }
    let width = ranks[0].len();
    if ranks.iter().any(|rank| rank.len() != width) {
        return Err(ParseFenError::UnevenRanks);
    }

    let height = ranks.len();
    let mut board = Board::empty(width as i8, height as i8);
    for (i, rank) in ranks.into_iter().enumerate() {
        let y = (height - 1 - i) as i8;
        for (x, square) in rank.into_iter().enumerate() {
            if let Some(piece) = square {
                board.set_piece_at(Square::new(x as i8, y), piece);
            }
        }
    }
    Ok(board)
}

fn flush_run(rank: &mut Vec<Option<Piece>>, digits: &mut String) -> Result<(), ParseFenError> {
    if digits.is_empty() {
        return Ok(());
    }
    let run: u8 = btoi::btoi(digits.as_bytes()).map_err(|_| ParseFenError::UnevenRanks)?;
    if run == 0 {
        return Err(ParseFenError::UnevenRanks);
    }
    for _ in 0..run {
        rank.push(None);
    }
    digits.clear();
    Ok(())
}

/// Writes a board back to placement notation.
pub fn placement(board: &Board) -> String {
    let mut result = String::new();
    for y in (0..board.height()).rev() {
        let mut empty = 0u32;
        for x in 0..board.width() {
            match board.piece_at(Square::new(x, y)) {
                Some(piece) => {
                    if empty > 0 {
                        let _ = write!(result, "{empty}");
                        empty = 0;
                    }
                    result.push(piece.char());
                    if piece.moved {
                        result.push('~');
                    }
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            let _ = write!(result, "{empty}");
        }
        if y > 0 {
            result.push('/');
        }
    }
    result
}
