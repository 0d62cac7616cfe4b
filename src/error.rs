//! Error types for ADF listing.

use core::fmt;

/// Error type for ADF listing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdfError {
    /// Sector index outside the image.
    SectorOutOfRange {
        /// Requested sector (on-disk pointers are signed).
        sector: i64,
        /// Number of whole sectors in the image.
        sector_count: u64,
    },
    /// Root block is not a root header (strict mode only).
    MalformedRoot {
        /// Block type found at offset 0.
        block_type: i32,
        /// Secondary type found at offset 508.
        sec_type: i32,
    },
    /// A hash chain exceeded the configured guard.
    CorruptChain {
        /// Hash bucket the chain started from.
        bucket: usize,
        /// Sector being visited when the guard tripped.
        sector: u32,
    },
    /// Sector is not a directory header.
    NotADirectory {
        /// Offending sector.
        sector: u32,
    },
}

impl fmt::Display for AdfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SectorOutOfRange {
                sector,
                sector_count,
            } => write!(
                f,
                "sector {sector} out of range (image has {sector_count} sectors)"
            ),
            Self::MalformedRoot {
                block_type,
                sec_type,
            } => write!(
                f,
                "malformed root block (type {block_type}, secondary type {sec_type})"
            ),
            Self::CorruptChain { bucket, sector } => write!(
                f,
                "corrupt hash chain in bucket {bucket} at sector {sector}"
            ),
            Self::NotADirectory { sector } => write!(f, "sector {sector} is not a directory"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AdfError {}

/// Result type for ADF listing operations.
pub type Result<T> = core::result::Result<T, AdfError>;
