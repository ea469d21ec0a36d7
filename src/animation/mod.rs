//! Frame-paced animation: tweens, swap ghosts, and bar visibility holds.

pub mod ghost;
pub mod hold;
pub mod swap;
pub mod tween;

pub use swap::{SwapAnimator, SwapId, SwapOutcome, SwapRequest, SwapScene};
pub use tween::{Tween, TweenId, Tweener};
