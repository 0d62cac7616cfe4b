//! Volume listing.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::block::{HeaderBlock, RootBlock};
use crate::constants::*;
use crate::dir::{ListedEntry, read_dir};
use crate::error::{AdfError, Result};
use crate::image::{Geometry, Image};
use crate::options::ListOptions;
use crate::text::decode_name;

/// Root directory listing of a volume.
///
/// # Example
///
/// ```ignore
/// let data = std::fs::read("workbench.adf")?;
/// let listing = adf_list::list_volume(&data)?;
///
/// println!("Volume: {}", listing.volume_name);
/// for entry in &listing.entries {
///     println!("{:>7} {}", entry.size, entry.name);
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    /// Image length in bytes.
    pub image_len: usize,
    /// Detected geometry.
    pub geometry: Geometry,
    /// Volume name.
    pub volume_name: String,
    /// Root entries, sorted case-insensitively by name.
    pub entries: Vec<ListedEntry>,
    /// Sum of file sizes. Directories contribute nothing.
    pub total_size: u64,
}

impl Listing {
    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the root directory lists nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// File entries.
    pub fn files(&self) -> impl Iterator<Item = &ListedEntry> {
        self.entries.iter().filter(|e| e.is_file())
    }

    /// Number of file entries.
    pub fn file_count(&self) -> usize {
        self.files().count()
    }

    /// Number of directory entries.
    pub fn dir_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_dir()).count()
    }

    /// Find an entry by name, ignoring case.
    pub fn find(&self, name: &str) -> Option<&ListedEntry> {
        self.entries.iter().find(|e| {
            e.name
                .chars()
                .flat_map(char::to_lowercase)
                .eq(name.chars().flat_map(char::to_lowercase))
        })
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const RULE: &str = "----------------------------------------";

        writeln!(
            f,
            "Size: {} bytes ({} sectors)",
            self.image_len, self.geometry.sector_count
        )?;
        writeln!(f, "Type: {}", self.geometry.density.label())?;
        writeln!(f, "Root block: {}", self.geometry.root_block)?;
        writeln!(f)?;
        writeln!(f, "Volume: {}", self.volume_name)?;
        writeln!(f, "{RULE}")?;

        for entry in &self.entries {
            if entry.is_dir() {
                writeln!(f, "  [DIR]  {}", entry.name)?;
            } else {
                writeln!(f, "  {:>7} {}", entry.size, entry.name)?;
            }
        }

        writeln!(f, "{RULE}")?;
        write!(f, "{} files, {} bytes total", self.len(), self.total_size)
    }
}

/// Sort entries by lower-cased name. Entries with equal keys keep their order.
pub fn sort_entries(entries: &mut [ListedEntry]) {
    entries.sort_by_cached_key(|e| e.name.to_lowercase());
}

/// Sum of file sizes.
pub fn total_size(entries: &[ListedEntry]) -> u64 {
    entries
        .iter()
        .filter(|e| e.is_file())
        .map(|e| u64::from(e.size))
        .sum()
}

/// List the root directory of an image with default options.
pub fn list_volume(data: &[u8]) -> Result<Listing> {
    list_volume_with(data, &ListOptions::default())
}

/// List the root directory of an image.
pub fn list_volume_with(data: &[u8], options: &ListOptions) -> Result<Listing> {
    let image = Image::new(data);
    let geometry = image.geometry();
    log::debug!(
        "{} sectors, {:?}, root block {}",
        geometry.sector_count,
        geometry.density,
        geometry.root_block
    );

    let root = RootBlock::new(image.sector(geometry.root_block)?);
    if options.strict_root && !root.is_valid() {
        return Err(AdfError::MalformedRoot {
            block_type: root.block_type(),
            sec_type: root.sec_type(),
        });
    }

    let volume_name = decode_name(root.volume_name(), options.code_page);

    let mut entries = read_dir(image, &root, options)?;
    sort_entries(&mut entries);
    let total_size = total_size(&entries);

    log::debug!(
        "volume {volume_name:?}: {} entries, {total_size} bytes",
        entries.len()
    );

    Ok(Listing {
        image_len: data.len(),
        geometry,
        volume_name,
        entries,
        total_size,
    })
}

/// List any directory by its header block, sorted like [`list_volume`].
///
/// `block` may be the root block or a user directory header.
pub fn list_dir(data: &[u8], block: u32, options: &ListOptions) -> Result<Vec<ListedEntry>> {
    let image = Image::new(data);
    let dir = HeaderBlock::new(image.sector(block)?);

    if !dir.is_header() || !matches!(dir.sec_type(), ST_ROOT | ST_DIR) {
        return Err(AdfError::NotADirectory { sector: block });
    }

    let mut entries = read_dir(image, &dir, options)?;
    sort_entries(&mut entries);
    Ok(entries)
}
