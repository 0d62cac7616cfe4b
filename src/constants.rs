//! Constants for the ADF on-disk layout.

/// Sector size in bytes.
pub const BLOCK_SIZE: usize = 512;

/// Hash table size (buckets per directory).
pub const HASH_TABLE_SIZE: usize = 72;

/// Maximum name length.
pub const MAX_NAME_LEN: usize = 30;

/// Sector count of a standard DD floppy (880KB).
///
/// Images with more sectors than this are treated as HD.
pub const FLOPPY_DD_SECTORS: u64 = 1760;

/// Root block on a DD floppy.
pub const ROOT_BLOCK_DD: u32 = 880;

/// Root block on an HD floppy.
pub const ROOT_BLOCK_HD: u32 = 1760;

// Field offsets within a header block
/// Block type (i32).
pub const OFFSET_BLOCK_TYPE: usize = 0;
/// Hash table (72 x i32).
pub const OFFSET_HASH_TABLE: usize = 24;
/// File size in bytes (i32).
pub const OFFSET_BYTE_SIZE: usize = 324;
/// Name length (u8).
pub const OFFSET_NAME_LEN: usize = 432;
/// Name bytes.
pub const OFFSET_NAME: usize = 433;
/// Next entry with the same hash (i32).
pub const OFFSET_HASH_CHAIN: usize = 496;
/// Secondary type (i32).
pub const OFFSET_SEC_TYPE: usize = 508;

// Block types
/// Header block type.
pub const T_HEADER: i32 = 2;

// Secondary types
/// Root block secondary type.
pub const ST_ROOT: i32 = 1;
/// Directory secondary type.
pub const ST_DIR: i32 = 2;
/// File secondary type.
pub const ST_FILE: i32 = -3;
