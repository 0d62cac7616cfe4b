//! Sector-level access to an in-memory disk image.

use crate::constants::*;
use crate::error::{AdfError, Result};

/// Floppy density.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Density {
    /// Double density (880KB).
    Dd,
    /// High density (1.76MB).
    Hd,
}

impl Density {
    /// Root block location for this density.
    #[inline]
    pub const fn root_block(self) -> u32 {
        match self {
            Self::Dd => ROOT_BLOCK_DD,
            Self::Hd => ROOT_BLOCK_HD,
        }
    }

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dd => "DD (880KB)",
            Self::Hd => "HD (1.76MB)",
        }
    }
}

/// Image geometry derived from its length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    /// Whole sectors in the image. A trailing partial sector is dropped.
    pub sector_count: u64,
    /// Detected density.
    pub density: Density,
    /// Root block number.
    pub root_block: u32,
}

impl Geometry {
    /// Detect geometry from an image length in bytes.
    pub const fn detect(len: usize) -> Self {
        let sector_count = (len / BLOCK_SIZE) as u64;
        let density = if sector_count > FLOPPY_DD_SECTORS {
            Density::Hd
        } else {
            Density::Dd
        };

        Self {
            sector_count,
            density,
            root_block: density.root_block(),
        }
    }
}

/// Read-only view of a disk image as an array of 512-byte sectors.
#[derive(Debug, Clone, Copy)]
pub struct Image<'a> {
    data: &'a [u8],
}

impl<'a> Image<'a> {
    /// Wrap raw image bytes.
    #[inline]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Raw image bytes.
    #[inline]
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    /// Image length in bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the image holds no bytes.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of whole sectors.
    #[inline]
    pub const fn sector_count(&self) -> u64 {
        (self.data.len() / BLOCK_SIZE) as u64
    }

    /// Geometry of this image.
    #[inline]
    pub const fn geometry(&self) -> Geometry {
        Geometry::detect(self.data.len())
    }

    /// Borrow the sector at `index`.
    ///
    /// Fails with [`AdfError::SectorOutOfRange`] unless the whole sector
    /// lies inside the image; a truncated sector is never returned.
    pub fn sector(&self, index: u32) -> Result<&'a [u8; BLOCK_SIZE]> {
        let out_of_range = || AdfError::SectorOutOfRange {
            sector: i64::from(index),
            sector_count: self.sector_count(),
        };

        let start = (index as usize)
            .checked_mul(BLOCK_SIZE)
            .ok_or_else(out_of_range)?;
        let end = start.checked_add(BLOCK_SIZE).ok_or_else(out_of_range)?;

        self.data
            .get(start..end)
            .and_then(|s| s.try_into().ok())
            .ok_or_else(out_of_range)
    }

    /// Borrow the sector named by a signed on-disk pointer.
    ///
    /// Negative pointers are out of range.
    pub fn sector_at(&self, pointer: i32) -> Result<&'a [u8; BLOCK_SIZE]> {
        match u32::try_from(pointer) {
            Ok(index) => self.sector(index),
            Err(_) => Err(AdfError::SectorOutOfRange {
                sector: i64::from(pointer),
                sector_count: self.sector_count(),
            }),
        }
    }
}
