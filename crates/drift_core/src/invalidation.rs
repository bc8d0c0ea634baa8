//! Invalidation flags
//!
//! A surface never lays itself out or paints on its own. Setters record what
//! changed as [`Invalidation`] flags and the driver (the owner of the layout
//! and render pipeline) decides when to act on them.
//!
//! | Flag | Raised by | Driver response |
//! |------|-----------|-----------------|
//! | `RENDER` | presentation setters | run the render pass once |
//! | `CONSTRAINTS` | bottom overflow changes | push the changed constraints, re-solve |
//! | `LAYOUT` | size or structure changes | full layout pass |

use bitflags::bitflags;

bitflags! {
    /// Pending work a surface is waiting on
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[must_use]
    pub struct Invalidation: u8 {
        /// Presentation attributes changed; frames are unaffected
        const RENDER = 1;
        /// Only existing constraint constants changed
        const CONSTRAINTS = 1 << 1;
        /// The node structure or the surface size changed
        const LAYOUT = 1 << 2;
    }
}

impl Invalidation {
    /// Merge `flags` into `self`, returning only the flags that were not
    /// already pending.
    pub fn raise(&mut self, flags: Invalidation) -> Invalidation {
        let fresh = flags.difference(*self);
        self.insert(fresh);
        fresh
    }
}

/// Receiver for invalidation requests, implemented by the layout/render driver
///
/// Called only when a flag goes from clear to pending, so a burst of setters
/// within one frame produces a single request per flag.
pub trait InvalidationSink {
    fn invalidate(&self, flags: Invalidation);
}

impl<F> InvalidationSink for F
where
    F: Fn(Invalidation),
{
    fn invalidate(&self, flags: Invalidation) {
        self(flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raise_reports_fresh_flags_only() {
        let mut pending = Invalidation::empty();

        assert_eq!(pending.raise(Invalidation::RENDER), Invalidation::RENDER);
        assert_eq!(pending.raise(Invalidation::RENDER), Invalidation::empty());

        let fresh = pending.raise(Invalidation::RENDER | Invalidation::CONSTRAINTS);
        assert_eq!(fresh, Invalidation::CONSTRAINTS);
        assert!(pending.contains(Invalidation::RENDER | Invalidation::CONSTRAINTS));
        assert!(!pending.contains(Invalidation::LAYOUT));
    }

    #[test]
    fn test_closure_sink() {
        use std::cell::Cell;

        let seen = Cell::new(Invalidation::empty());
        let sink = |flags: Invalidation| seen.set(seen.get() | flags);
        sink.invalidate(Invalidation::LAYOUT);
        assert_eq!(seen.get(), Invalidation::LAYOUT);
    }
}
