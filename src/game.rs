//! A complete game: board, turn, history and move validation.

use std::collections::HashMap;

use crate::{
    board::Board,
    color::Color,
    errors::{GameError, ParseFenError},
    forced,
    m::{Capture, Destinations, ForcedMove, MoveRecord, MovedPiece},
    movegen,
    role::Role,
    square::Square,
    types::Piece,
    variant::Variant,
};

/// A terminal game result.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// One side won.
    Decisive {
        /// The winning side.
        winner: Color,
    },
    /// Nobody won.
    Draw,
}

/// Whether the game is running or finished.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameState {
    /// Waiting for the given side to move.
    AwaitingMove(Color),
    /// Finished with the given result.
    GameOver(Outcome),
}

/// A game in progress.
///
/// [`Game::apply`] is the single entry point for mutation: every check
/// runs before the board is touched, so a rejected move leaves the game
/// exactly as it was. Legal destination sets are cached per origin
/// square until the next successful move.
///
/// ```
/// use anarchess::{Game, Square, Variant};
///
/// let mut game = Game::new(Variant::anarchy())?;
/// // An unmoved child-pawn may open with a double advance.
/// let moves = game.legal_moves(Square::new(3, 2))?;
/// assert!(moves.contains(&Square::new(3, 4)));
/// game.apply(Square::new(3, 2), Square::new(3, 4), None)?;
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    variant: Variant,
    board: Board,
    history: Vec<MoveRecord>,
    cache: HashMap<Square, Destinations>,
    state: GameState,
}

impl Game {
    /// Starts a game from the variant's initial placement, white to
    /// move.
    pub fn new(variant: Variant) -> Result<Game, ParseFenError> {
        let board = variant.initial_board()?;
        Ok(Game {
            variant,
            board,
            history: Vec::new(),
            cache: HashMap::new(),
            state: GameState::AwaitingMove(Color::White),
        })
    }

    /// Starts a game from an arbitrary position with no history.
    ///
    /// Errors if the board does not match the variant's dimensions.
    pub fn from_setup(variant: Variant, board: Board, turn: Color) -> Result<Game, ParseFenError> {
        if board.dimensions() != (variant.width, variant.height) {
            return Err(ParseFenError::WrongDimensions);
        }
        Ok(Game {
            variant,
            board,
            history: Vec::new(),
            cache: HashMap::new(),
            state: GameState::AwaitingMove(turn),
        })
    }

    pub fn variant(&self) -> &Variant {
        &self.variant
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Every move played so far, oldest first.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// The side to move, or `None` once the game is over.
    pub fn turn(&self) -> Option<Color> {
        match self.state {
            GameState::AwaitingMove(color) => Some(color),
            GameState::GameOver(_) => None,
        }
    }

    /// Ends the game. Results come from outside the move rules
    /// (resignation, timeout, adjudication), so any outcome may be set
    /// at any point, including over an earlier one.
    pub fn set_outcome(&mut self, outcome: Outcome) {
        self.state = GameState::GameOver(outcome);
    }

    /// The mandatory moves currently binding the side to move. Empty
    /// when nothing binds them or the game is over.
    pub fn forced_moves(&self) -> Vec<ForcedMove> {
        match self.turn() {
            Some(color) => {
                forced::forced_moves(&self.board, color, self.history.last(), &self.variant)
            }
            None => Vec::new(),
        }
    }

    /// The legal destinations of the piece on `from`.
    ///
    /// This is a query, not an intent to move: it answers for either
    /// color regardless of whose turn it is, and still answers after the
    /// game is over. Results are cached until the next successful
    /// [`Game::apply`].
    pub fn legal_moves(&mut self, from: Square) -> Result<Destinations, GameError> {
        if !self.board.contains(from) {
            return Err(GameError::OutOfBounds);
        }
        if self.board.piece_at(from).is_none() {
            return Err(GameError::EmptyOriginSquare);
        }
        if let Some(moves) = self.cache.get(&from) {
            return Ok(moves.clone());
        }
        let moves = movegen::destinations(&self.board, from, self.history.last(), &self.variant);
        self.cache.insert(from, moves.clone());
        Ok(moves)
    }

    /// Validates and plays a move for the side to move.
    ///
    /// `promotion` names the role a pawn-kind piece reaching the far
    /// rank becomes; it is required exactly then and must not be a
    /// pawn-kind role or a king. On success the move record is appended
    /// to the history and also returned.
    ///
    /// Every error leaves the game untouched.
    pub fn apply(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Role>,
    ) -> Result<MoveRecord, GameError> {
        let turn = match self.state {
            GameState::AwaitingMove(color) => color,
            GameState::GameOver(_) => return Err(GameError::GameOver),
        };
        if !self.board.contains(from) {
            return Err(GameError::OutOfBounds);
        }
        let piece = self
            .board
            .piece_at(from)
            .ok_or(GameError::EmptyOriginSquare)?;
        if piece.color != turn {
            return Err(GameError::NotTurnOwner);
        }
        if !self.board.contains(to) {
            return Err(GameError::OutOfBounds);
        }
        if !self.legal_moves(from)?.contains(&to) {
            return Err(GameError::IllegalDestination);
        }

        let offers = forced::forced_moves(&self.board, turn, self.history.last(), &self.variant);
        if !offers.is_empty() && !offers.contains(&ForcedMove { from, to }) {
            return Err(GameError::ForcedMoveViolation(offers));
        }

        if let Some(target) = promotion {
            if !target.is_promotable() {
                return Err(GameError::InvalidPromotionTarget);
            }
        }
        let promoting = piece.role.is_pawn() && to.y == self.promotion_rank(turn);
        if promoting && promotion.is_none() {
            return Err(GameError::InvalidPromotionTarget);
        }

        let record = if piece.role == Role::King && to.y == from.y && (to.x - from.x).abs() > 1 {
            self.castle(from, to, piece.color)?
        } else {
            let mut captured = Vec::new();
            if let Some(target) = self.board.piece_at(to) {
                captured.push(Capture {
                    square: to,
                    piece: target.role,
                });
                self.board.remove_piece_at(to);
            } else if piece.role.is_pawn() && to.x != from.x {
                // Diagonal onto an empty square is en passant; the
                // victim sits beside the origin.
                let beside = Square::new(to.x, from.y);
                if let Some(victim) = self.board.remove_piece_at(beside) {
                    captured.push(Capture {
                        square: beside,
                        piece: victim.role,
                    });
                }
            }

            let role = if promoting {
                promotion.unwrap_or(piece.role)
            } else {
                piece.role
            };
            self.board.remove_piece_at(from);
            self.board.set_piece_at(
                to,
                Piece {
                    color: piece.color,
                    role,
                    moved: true,
                },
            );
            MoveRecord {
                moved: vec![MovedPiece {
                    piece: role,
                    from,
                    to,
                }],
                captured,
                promotion: if promoting { promotion } else { None },
            }
        };

        self.history.push(record.clone());
        self.cache.clear();
        self.state = GameState::AwaitingMove(!turn);
        Ok(record)
    }

    fn castle(&mut self, from: Square, to: Square, color: Color) -> Result<MoveRecord, GameError> {
        let (dir, targets) = if to.x < from.x {
            (-1, self.variant.queenside)
        } else {
            (1, self.variant.kingside)
        };
        let rook_from = movegen::castle_rook(&self.board, from, color, dir, &self.variant)
            .ok_or(GameError::IllegalDestination)?;
        let king_to = Square::new(targets.king, from.y);
        let rook_to = Square::new(targets.rook, from.y);

        let mut king = self
            .board
            .remove_piece_at(from)
            .ok_or(GameError::EmptyOriginSquare)?;
        let mut rook = self
            .board
            .remove_piece_at(rook_from)
            .ok_or(GameError::IllegalDestination)?;
        king.moved = true;
        rook.moved = true;
        self.board.set_piece_at(king_to, king);
        self.board.set_piece_at(rook_to, rook);

        Ok(MoveRecord {
            moved: vec![
                MovedPiece {
                    piece: Role::King,
                    from,
                    to: king_to,
                },
                MovedPiece {
                    piece: Role::Rook,
                    from: rook_from,
                    to: rook_to,
                },
            ],
            captured: vec![],
            promotion: None,
        })
    }

    fn promotion_rank(&self, color: Color) -> i8 {
        color.fold_wb(self.variant.height - 1, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fen;

    fn setup(placement: &str, turn: Color) -> Game {
        let board = fen::parse_placement(placement).expect("valid placement");
        Game::from_setup(Variant::anarchy(), board, turn).expect("matching dimensions")
    }

    #[test]
    fn test_opening_moves() {
        let mut game = Game::new(Variant::anarchy()).expect("valid variant");
        assert_eq!(game.turn(), Some(Color::White));

        let record = game
            .apply(Square::new(3, 2), Square::new(3, 4), None)
            .expect("legal double advance");
        assert!(!record.is_capture());
        assert_eq!(game.turn(), Some(Color::Black));
        assert_eq!(game.history().len(), 1);
        assert_eq!(
            game.board().piece_at(Square::new(3, 4)).map(|p| p.role),
            Some(Role::ChildPawn)
        );
    }

    #[test]
    fn test_turn_enforced() {
        let mut game = Game::new(Variant::anarchy()).expect("valid variant");
        assert_eq!(
            game.apply(Square::new(3, 7), Square::new(3, 5), None),
            Err(GameError::NotTurnOwner)
        );
    }

    #[test]
    fn test_rejected_move_leaves_game_untouched() {
        let mut game = Game::new(Variant::anarchy()).expect("valid variant");
        let before = game.board().clone();
        assert_eq!(
            game.apply(Square::new(0, 0), Square::new(5, 5), None),
            Err(GameError::IllegalDestination)
        );
        assert_eq!(game.board(), &before);
        assert!(game.history().is_empty());
        assert_eq!(game.turn(), Some(Color::White));
    }

    #[test]
    fn test_origin_errors() {
        let mut game = Game::new(Variant::anarchy()).expect("valid variant");
        assert_eq!(
            game.apply(Square::new(8, 0), Square::new(0, 0), None),
            Err(GameError::OutOfBounds)
        );
        assert_eq!(
            game.legal_moves(Square::new(-1, 4)),
            Err(GameError::OutOfBounds)
        );
        assert_eq!(
            game.apply(Square::new(4, 4), Square::new(4, 5), None),
            Err(GameError::EmptyOriginSquare)
        );
    }

    #[test]
    fn test_queries_ignore_turn() {
        let mut game = Game::new(Variant::anarchy()).expect("valid variant");
        // White to move, but black pieces still answer queries.
        let moves = game.legal_moves(Square::new(3, 7)).expect("occupied");
        assert!(moves.contains(&Square::new(3, 5)));
    }

    #[test]
    fn test_castle_application() {
        let mut game = setup("3k4/8/8/8/8/8/8/8/8/R3K3", Color::White);
        let record = game
            .apply(Square::new(4, 0), Square::new(2, 0), None)
            .expect("legal castle");
        assert!(record.is_castle());
        assert_eq!(
            game.board().piece_at(Square::new(2, 0)).map(|p| p.role),
            Some(Role::King)
        );
        assert_eq!(
            game.board().piece_at(Square::new(3, 0)).map(|p| p.role),
            Some(Role::Rook)
        );
        assert_eq!(game.board().piece_at(Square::new(4, 0)), None);
        assert_eq!(game.board().piece_at(Square::new(0, 0)), None);
        assert!(game.board().piece_at(Square::new(2, 0)).expect("king").moved);
        assert!(game.board().piece_at(Square::new(3, 0)).expect("rook").moved);
    }

    #[test]
    fn test_en_passant_is_mandatory() {
        // White pawn on e5, black pawn ready to double-advance d7-d5.
        let mut game = setup("3k4/8/3p4/8/4P~3/8/8/8/8/3K4", Color::Black);
        game.apply(Square::new(3, 7), Square::new(3, 5), None)
            .expect("double advance");
        assert_eq!(game.forced_moves().len(), 1);

        // White must capture en passant; a king move is rejected.
        let err = game
            .apply(Square::new(3, 0), Square::new(3, 1), None)
            .expect_err("forced move pending");
        match err {
            GameError::ForcedMoveViolation(offers) => {
                assert_eq!(
                    offers,
                    vec![ForcedMove {
                        from: Square::new(4, 5),
                        to: Square::new(3, 6),
                    }]
                );
            }
            other => panic!("expected forced move violation, got {other:?}"),
        }

        let record = game
            .apply(Square::new(4, 5), Square::new(3, 6), None)
            .expect("en passant");
        assert!(record.is_en_passant());
        assert_eq!(game.board().piece_at(Square::new(3, 5)), None);
        assert_eq!(
            game.board().piece_at(Square::new(3, 6)).map(|p| p.role),
            Some(Role::Pawn)
        );
    }

    #[test]
    fn test_promotion() {
        let mut game = setup("3k4/P7/8/8/8/8/8/8/8/3K4", Color::White);

        // Missing target on a promoting move.
        assert_eq!(
            game.apply(Square::new(0, 8), Square::new(0, 9), None),
            Err(GameError::InvalidPromotionTarget)
        );
        // Pawn-kind and king targets are never allowed.
        assert_eq!(
            game.apply(Square::new(0, 8), Square::new(0, 9), Some(Role::ChildPawn)),
            Err(GameError::InvalidPromotionTarget)
        );
        assert_eq!(
            game.apply(Square::new(0, 8), Square::new(0, 9), Some(Role::King)),
            Err(GameError::InvalidPromotionTarget)
        );

        let record = game
            .apply(Square::new(0, 8), Square::new(0, 9), Some(Role::Knook))
            .expect("promotion to knook");
        assert!(record.is_promotion());
        assert_eq!(record.moved[0].piece, Role::Knook);
        assert_eq!(
            game.board().piece_at(Square::new(0, 9)).map(|p| p.role),
            Some(Role::Knook)
        );
    }

    #[test]
    fn test_forced_check_precedes_promotion_validation() {
        // A pawn one step from promotion while an en passant is
        // pending: submitting the promotion without a target reports
        // the pending obligation, not the missing target.
        let mut game = setup("3k4/P~7/3p4/8/4P~3/8/8/8/8/3K4", Color::Black);
        game.apply(Square::new(3, 7), Square::new(3, 5), None)
            .expect("double advance");

        match game.apply(Square::new(0, 8), Square::new(0, 9), None) {
            Err(GameError::ForcedMoveViolation(offers)) => {
                assert_eq!(
                    offers,
                    vec![ForcedMove {
                        from: Square::new(4, 5),
                        to: Square::new(3, 6),
                    }]
                );
            }
            other => panic!("expected a forced move violation, got {other:?}"),
        }
    }

    #[test]
    fn test_promotion_target_ignored_off_rank() {
        let mut game = Game::new(Variant::anarchy()).expect("valid variant");
        let record = game
            .apply(Square::new(0, 2), Square::new(0, 3), Some(Role::Queen))
            .expect("ordinary advance");
        assert!(!record.is_promotion());
    }

    #[test]
    fn test_game_over_blocks_moves() {
        let mut game = Game::new(Variant::anarchy()).expect("valid variant");
        game.set_outcome(Outcome::Decisive {
            winner: Color::Black,
        });
        assert_eq!(game.turn(), None);
        assert_eq!(
            game.apply(Square::new(3, 2), Square::new(3, 3), None),
            Err(GameError::GameOver)
        );
        // Queries still answer.
        assert!(game.legal_moves(Square::new(3, 2)).is_ok());
    }

    #[test]
    fn test_cache_cleared_on_apply() {
        let mut game = Game::new(Variant::anarchy()).expect("valid variant");
        let first = game.legal_moves(Square::new(0, 1)).expect("knook");
        let again = game.legal_moves(Square::new(0, 1)).expect("knook");
        assert_eq!(first, again);
        assert!(!first.contains(&Square::new(2, 2)));

        // Vacating c3 frees a horse square for the knook.
        game.apply(Square::new(2, 2), Square::new(2, 3), None)
            .expect("advance");
        game.apply(Square::new(3, 7), Square::new(3, 6), None)
            .expect("reply");
        let after = game.legal_moves(Square::new(0, 1)).expect("knook");
        assert!(after.contains(&Square::new(2, 2)));
    }
}
