//! Rules and move generation for an anarchy chess variant.
//!
//! The default configuration plays on an 8×10 board with an extended
//! roster (knooks, xooks, archbishops, antiqueens and child-pawns),
//! mandatory en passant and a three-square opening advance for unmoved
//! full pawns on the center files. Board dimensions, placement,
//! castling geometry and the rule toggles are all configurable through
//! [`Variant`].
//!
//! # Examples
//!
//! Query legal destinations in the starting position:
//!
//! ```
//! use anarchess::{Game, Square, Variant};
//!
//! let mut game = Game::new(Variant::anarchy())?;
//! let moves = game.legal_moves(Square::new(0, 1))?;
//! assert!(moves.contains(&Square::new(1, 3)));
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```
//!
//! Play moves:
//!
//! ```
//! use anarchess::{Game, Square, Variant};
//!
//! let mut game = Game::new(Variant::anarchy())?;
//! let record = game.apply(Square::new(4, 2), Square::new(4, 3), None)?;
//! assert_eq!(record.to_string(), "Ce3-e4");
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```
//!
//! Mandatory moves surface as errors carrying the offers:
//!
//! ```
//! use anarchess::{Game, GameError, Square, Variant};
//!
//! let mut game = Game::new(Variant::anarchy())?;
//! game.apply(Square::new(5, 2), Square::new(5, 4), None)?;
//! game.apply(Square::new(4, 7), Square::new(4, 6), None)?;
//! game.apply(Square::new(5, 4), Square::new(5, 5), None)?;
//! game.apply(Square::new(6, 7), Square::new(6, 5), None)?;
//!
//! // The f6 pawn must now take g7 en passant; anything else is
//! // rejected.
//! match game.apply(Square::new(0, 2), Square::new(0, 3), None) {
//!     Err(GameError::ForcedMoveViolation(offers)) => {
//!         assert_eq!(offers.len(), 1);
//!         assert_eq!(offers[0].to_string(), "f6xg7");
//!     }
//!     other => panic!("expected a forced move, got {other:?}"),
//! }
//! game.apply(Square::new(5, 5), Square::new(6, 6), None)?;
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```
//!
//! # Feature flags
//!
//! * `serde`: Implements [`serde::Serialize`](https://docs.rs/serde/1/serde/trait.Serialize.html)
//!   and [`serde::Deserialize`](https://docs.rs/serde/1/serde/trait.Deserialize.html) for
//!   the vocabulary and move record types.

#![doc(html_root_url = "https://docs.rs/anarchess/0.1.0")]
#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]
#![cfg_attr(docs_rs, feature(doc_auto_cfg))]

mod board;
mod color;
mod errors;
mod forced;
mod game;
mod m;
mod movegen;
mod role;
mod square;
mod types;
mod variant;

pub mod fen;

pub use board::Board;
pub use color::Color;
pub use errors::{GameError, ParseFenError, ParseSquareError};
pub use game::{Game, GameState, Outcome};
pub use m::{Capture, Destinations, ForcedMove, MoveRecord, MovedPiece};
pub use movegen::destinations;
pub use role::Role;
pub use square::Square;
pub use types::Piece;
pub use variant::{CastlingTargets, RuleFlags, Variant};
