//! Scope taxonomy.
//!
//! Every registered definition is classified along two independent 2-bit
//! fields packed into a single nibble:
//!
//! ```text
//!   bit:   3      2      1      0
//!        BLOCK  INLINE  BLOT  ATTR
//!        \__ LEVEL __/  \__ TYPE __/
//! ```
//!
//! The role constants ([`Scope::ATTRIBUTE`], [`Scope::BLOT`]) fill the whole
//! LEVEL field and the level constants ([`Scope::INLINE`], [`Scope::BLOCK`])
//! fill the whole TYPE field, so that intersecting one of each yields a
//! fully specified scope such as [`Scope::BLOCK_BLOT`].

use std::fmt;

bitflags::bitflags! {
    /// A 4-bit classification combining role (attribute/blot) and level
    /// (inline/block).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Scope: u8 {
        /// Role field mask (lower two bits).
        const TYPE = 0b0011;
        /// Level field mask (upper two bits).
        const LEVEL = 0b1100;

        /// Any attribute, at any level.
        const ATTRIBUTE = (1 << 0) | Self::LEVEL.bits();
        /// Any blot, at any level.
        const BLOT = (1 << 1) | Self::LEVEL.bits();
        /// Anything inline.
        const INLINE = (1 << 2) | Self::TYPE.bits();
        /// Anything block-level.
        const BLOCK = (1 << 3) | Self::TYPE.bits();

        /// A block-level blot.
        const BLOCK_BLOT = Self::BLOCK.bits() & Self::BLOT.bits();
        /// An inline blot.
        const INLINE_BLOT = Self::INLINE.bits() & Self::BLOT.bits();
        /// A block-level attribute.
        const BLOCK_ATTRIBUTE = Self::BLOCK.bits() & Self::ATTRIBUTE.bits();
        /// An inline attribute.
        const INLINE_ATTRIBUTE = Self::INLINE.bits() & Self::ATTRIBUTE.bits();

        /// Every bit set.
        const ANY = Self::TYPE.bits() | Self::LEVEL.bits();
    }
}

impl Scope {
    /// The LEVEL portion of this scope.
    pub const fn level(self) -> Scope {
        self.intersection(Scope::LEVEL)
    }

    /// The TYPE (role) portion of this scope.
    pub const fn role(self) -> Scope {
        self.intersection(Scope::TYPE)
    }

    /// Whether a definition declared with `self` passes `filter`.
    ///
    /// Both sub-fields must agree independently: sharing a level bit is not
    /// enough if the roles are disjoint, and vice versa.
    pub const fn matches(self, filter: Scope) -> bool {
        let shared = self.intersection(filter);
        shared.intersects(Scope::LEVEL) && shared.intersects(Scope::TYPE)
    }

    /// True when the LEVEL portion overlaps the block level bit.
    pub const fn is_block_level(self) -> bool {
        self.intersects(Scope::LEVEL.intersection(Scope::BLOCK))
    }

    /// True when the LEVEL portion overlaps the inline level bit.
    pub const fn is_inline_level(self) -> bool {
        self.intersects(Scope::LEVEL.intersection(Scope::INLINE))
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06b}", self.bits())
    }
}
