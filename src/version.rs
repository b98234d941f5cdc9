//! Host-interpreter version identification.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur while parsing a version string
#[derive(Error, Debug)]
pub enum VersionError {
    #[error("Malformed version string: {0}")]
    Malformed(String),

    #[error("Invalid version component: {0}")]
    InvalidComponent(String),
}

/// A host-interpreter version, known at build or process-start time.
///
/// The codec factory dispatches on this value once per process; it is never
/// consulted per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InterpreterVersion {
    pub major: u8,
    pub minor: u8,
}

impl InterpreterVersion {
    /// First version family using the 2-byte unit encoding.
    pub const V3_0: Self = Self { major: 3, minor: 0 };
    /// Loop/except setup opcodes retired here.
    pub const V3_8: Self = Self { major: 3, minor: 8 };
    /// CALL_FINALLY retired here.
    pub const V3_9: Self = Self { major: 3, minor: 9 };
    /// Newest version family with finalized encoding rules.
    pub const V3_10: Self = Self { major: 3, minor: 10 };
    /// Encoding rules not finalized in this component yet.
    pub const V3_11: Self = Self { major: 3, minor: 11 };

    pub const fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for InterpreterVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for InterpreterVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (major, minor) = s
            .split_once('.')
            .ok_or_else(|| VersionError::Malformed(s.to_string()))?;

        let major = major
            .parse::<u8>()
            .map_err(|_| VersionError::InvalidComponent(major.to_string()))?;
        let minor = minor
            .parse::<u8>()
            .map_err(|_| VersionError::InvalidComponent(minor.to_string()))?;

        Ok(Self { major, minor })
    }
}
