//! # adf-list
//!
//! A `no_std` compatible crate for listing the root directory of Amiga ADF
//! floppy images.
//!
//! The whole image is held in memory. Geometry is derived from its length
//! (more than 1760 sectors is HD), the root block's 72-bucket hash table is
//! walked chain by chain, and the file and directory entries found are
//! returned sorted by name.
//!
//! ## Features
//!
//! - `no_std` compatible (requires `alloc`)
//! - DD and HD floppies, OFS and FFS layouts
//! - Borrowed sector views, no copying of the image
//! - Configurable handling of damaged hash chains
//! - Diagnostics through the `log` facade
//!
//! ## Example
//!
//! ```ignore
//! let data = std::fs::read("disk.adf")?;
//! let listing = adf_list::list_volume(&data)?;
//!
//! println!("Volume: {}", listing.volume_name);
//! for entry in &listing.entries {
//!     println!("{:?} {} {}", entry.kind, entry.size, entry.name);
//! }
//! println!("{} bytes total", listing.total_size);
//! ```

#![no_std]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs)]
#![warn(clippy::all)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

mod block;
mod constants;
mod dir;
mod error;
#[cfg(feature = "std")]
mod fs;
mod image;
mod listing;
mod options;
mod text;

pub use block::{HeaderBlock, RootBlock, read_i32_be};
pub use constants::*;
pub use dir::{EntryKind, HashChain, ListedEntry, read_dir};
pub use error::AdfError;
#[cfg(feature = "std")]
pub use fs::{ListFileError, list_file, list_file_with};
pub use image::{Density, Geometry, Image};
pub use listing::{Listing, list_dir, list_volume, list_volume_with, sort_entries, total_size};
pub use options::{ChainGuard, ListOptions, UnexpectedBlock};
pub use text::{CodePage, REPLACEMENT_CHAR, decode_name};
