use bitflags::bitflags;

use crate::{board::Board, errors::ParseFenError, fen, role::Role};

bitflags! {
    /// Rule toggles distinguishing variant revisions.
    #[derive(Copy, Clone, Eq, PartialEq, Debug)]
    pub struct RuleFlags: u8 {
        /// En passant is mandatory when available.
        const FORCED_EN_PASSANT = 1 << 0;
        /// Unmoved full pawns on a center file may advance three
        /// squares instead of two. Child-pawns are exempt.
        const CENTER_FILE_BOOST = 1 << 1;
    }
}

/// The files king and rook land on when castling to one side.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct CastlingTargets {
    pub king: i8,
    pub rook: i8,
}

/// A configured ruleset: board dimensions, initial placement and rule
/// flags.
///
/// The default configuration is [`Variant::anarchy`], the 8×10 anarchy
/// board. Custom variants are plain values; nothing in the engine
/// hardcodes the defaults.
#[derive(Clone, Debug)]
pub struct Variant {
    /// Board width in files.
    pub width: i8,
    /// Board height in ranks.
    pub height: i8,
    /// Initial placement in placement notation (see [`crate::fen`]).
    pub placement: String,
    /// Rule toggles.
    pub rules: RuleFlags,
    /// A piece type the king may jump over while castling, if any.
    /// At most one such piece may stand between king and rook.
    pub castle_jump: Option<Role>,
    /// Castling target files towards the low-`x` side of the king.
    pub queenside: CastlingTargets,
    /// Castling target files towards the high-`x` side of the king.
    pub kingside: CastlingTargets,
}

/// The default 8×10 anarchy placement: an orthodox back rank, a rank of
/// composites, and a pawn rank with child-pawns on the center files.
const ANARCHY_PLACEMENT: &str =
    "rhbqkbhr/nxazzaxn/pppccppp/8/8/8/8/PPPCCPPP/NXAZZAXN/RHBQKBHR";

impl Variant {
    /// The anarchy variant: 8×10 board, forced en passant, center-file
    /// pawn boost, a single bishop may be jumped while castling.
    pub fn anarchy() -> Variant {
        Variant {
            width: 8,
            height: 10,
            placement: ANARCHY_PLACEMENT.to_owned(),
            rules: RuleFlags::FORCED_EN_PASSANT | RuleFlags::CENTER_FILE_BOOST,
            castle_jump: Some(Role::Bishop),
            queenside: CastlingTargets { king: 2, rook: 3 },
            kingside: CastlingTargets { king: 6, rook: 5 },
        }
    }

    /// Parses the initial placement into a board.
    ///
    /// Errors if the placement text is malformed or does not match the
    /// configured dimensions.
    pub fn initial_board(&self) -> Result<Board, ParseFenError> {
        let board = fen::parse_placement(&self.placement)?;
        if board.dimensions() != (self.width, self.height) {
            return Err(ParseFenError::WrongDimensions);
        }
        Ok(board)
    }

    /// The files an unmoved pawn gets the three-square advance on, when
    /// [`RuleFlags::CENTER_FILE_BOOST`] is set: the middle file, or the
    /// middle two files on boards of even width.
    pub(crate) fn is_center_file(&self, x: i8) -> bool {
        let half = self.width / 2;
        if self.width % 2 == 0 {
            x == half - 1 || x == half
        } else {
            x == half
        }
    }
}

impl Default for Variant {
    fn default() -> Variant {
        Variant::anarchy()
    }
}
