use serde::{Deserialize, Serialize};

/// Why a chart needs to be redrawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvalidationReason {
    DataChanged,
    Resized,
    ConfigChanged,
}

impl InvalidationReason {
    const fn bit(self) -> u8 {
        match self {
            Self::DataChanged => 1 << 0,
            Self::Resized => 1 << 1,
            Self::ConfigChanged => 1 << 2,
        }
    }
}

/// Accumulated invalidation reasons since the last successful render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PendingInvalidation {
    bits: u8,
}

impl PendingInvalidation {
    #[must_use]
    pub const fn none() -> Self {
        Self { bits: 0 }
    }

    #[must_use]
    pub const fn from_reason(reason: InvalidationReason) -> Self {
        Self { bits: reason.bit() }
    }

    #[must_use]
    pub const fn with_reason(self, reason: InvalidationReason) -> Self {
        Self {
            bits: self.bits | reason.bit(),
        }
    }

    #[must_use]
    pub const fn contains(self, reason: InvalidationReason) -> bool {
        (self.bits & reason.bit()) != 0
    }

    #[must_use]
    pub const fn is_pending(self) -> bool {
        self.bits != 0
    }

    pub fn mark(&mut self, reason: InvalidationReason) {
        *self = self.with_reason(reason);
    }

    pub fn clear(&mut self) {
        self.bits = 0;
    }

    /// Pending reasons in declaration order.
    pub fn reasons(self) -> impl Iterator<Item = InvalidationReason> {
        [
            InvalidationReason::DataChanged,
            InvalidationReason::Resized,
            InvalidationReason::ConfigChanged,
        ]
        .into_iter()
        .filter(move |reason| self.contains(*reason))
    }
}
