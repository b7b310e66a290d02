//! Position evaluation
//!
//! The agent ranks moves by the material balance of the position each move
//! leads to. There is no positional or mobility term.
//!
//! ## Module Organization
//!
//! - `material` - Material balance from a list of placed pieces

mod material;

pub use material::{evaluate_material, piece_value};

use crate::rules::RulesEngine;
use crate::types::Side;

/// Evaluate a rules-engine position from `tracked`'s point of view
pub fn evaluate_position<R: RulesEngine>(rules: &R, position: &R::Position, tracked: Side) -> f64 {
    evaluate_material(rules.pieces(position), tracked)
}
