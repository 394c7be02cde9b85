// Copyright 2026 the Midnight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mount-time errors.
//!
//! The countdown checks for its surfaces exactly once, when it is mounted. A
//! failure there means the loop never starts; nothing is checked per tick.

use core::fmt;

/// Errors from mounting page components.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MountError {
    /// There is no global window or document to mount into.
    NoDocument,
    /// No element carries the given id.
    MissingSurface {
        /// The id that was looked up.
        id: &'static str,
    },
}

impl fmt::Display for MountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDocument => f.write_str("no document to mount into"),
            Self::MissingSurface { id } => write!(f, "no element with id `{id}`"),
        }
    }
}

impl core::error::Error for MountError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display() {
        let e = MountError::MissingSurface { id: "progress-bar" };
        assert_eq!(e.to_string(), "no element with id `progress-bar`");
        assert_eq!(MountError::NoDocument.to_string(), "no document to mount into");
    }
}
