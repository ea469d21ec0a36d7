//! Per-bar visibility hold taken by in-flight swap animations.

use std::num::NonZeroU32;

/// How many swap animations currently hide a bar's primary representation.
///
/// A bar is visible exactly when no animation holds it. Overlapping swaps
/// that touch the same bar each take their own hold, so the bar only
/// reappears when the last of them releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationHold {
    /// No animation references the bar.
    #[default]
    Idle,
    /// Hidden behind this many ghost animations.
    Hidden(NonZeroU32),
}

impl AnimationHold {
    /// Take a hold. Returns `true` if the bar just became hidden.
    pub fn begin(&mut self) -> bool {
        match *self {
            Self::Idle => {
                *self = Self::Hidden(NonZeroU32::MIN);
                true
            }
            Self::Hidden(count) => {
                *self = Self::Hidden(count.saturating_add(1));
                false
            }
        }
    }

    /// Release a hold. Returns `true` if the bar just became visible.
    ///
    /// Releasing an idle bar is a no-op.
    pub fn end(&mut self) -> bool {
        match *self {
            Self::Idle => {
                log::warn!("animation hold released on an idle bar");
                false
            }
            Self::Hidden(count) => match NonZeroU32::new(count.get() - 1) {
                Some(rest) => {
                    *self = Self::Hidden(rest);
                    false
                }
                None => {
                    *self = Self::Idle;
                    true
                }
            },
        }
    }

    /// Number of holds.
    #[must_use]
    pub fn count(&self) -> u32 {
        match self {
            Self::Idle => 0,
            Self::Hidden(count) => count.get(),
        }
    }

    /// Whether the primary representation should be shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_only_after_last_release() {
        let mut hold = AnimationHold::default();
        assert!(hold.is_visible());

        assert!(hold.begin());
        assert!(!hold.begin());
        assert_eq!(hold.count(), 2);
        assert!(!hold.is_visible());

        assert!(!hold.end());
        assert_eq!(hold.count(), 1);
        assert!(!hold.is_visible());

        assert!(hold.end());
        assert_eq!(hold, AnimationHold::Idle);
        assert!(hold.is_visible());
    }

    #[test]
    fn release_on_idle_saturates() {
        let mut hold = AnimationHold::Idle;
        assert!(!hold.end());
        assert_eq!(hold.count(), 0);
    }
}
