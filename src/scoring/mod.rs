//! Frame and turn state, and the scorer that totals them.

pub mod frame;
pub mod scorer;
pub mod turn;

pub use frame::{Frame, MAX_KNOCKS};
pub use scorer::Scorer;
pub use turn::Turn;
