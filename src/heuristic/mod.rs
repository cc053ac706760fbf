//! Board evaluation functions for [minimax](crate::ai::minimax).
pub mod tablut;
