//! Caller-side driver.
//!
//! The rules are pure functions over snapshots. `LudoGame` is the thin
//! stateful layer a host puts in front of them: it holds the current
//! snapshot and a die source, and reports refused input as `LudoError`.

mod session;

pub use session::LudoGame;
