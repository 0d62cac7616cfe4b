//! Directory traversal.

use alloc::string::String;
use alloc::vec::Vec;

use crate::block::HeaderBlock;
use crate::constants::*;
use crate::error::{AdfError, Result};
use crate::image::Image;
use crate::options::{ListOptions, UnexpectedBlock};
use crate::text::{CodePage, decode_name};

/// Kind of a listed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// File.
    File,
    /// Subdirectory.
    Dir,
}

impl EntryKind {
    /// Create from secondary type value. Other types are not listed.
    pub const fn from_sec_type(sec_type: i32) -> Option<Self> {
        match sec_type {
            ST_FILE => Some(Self::File),
            ST_DIR => Some(Self::Dir),
            _ => None,
        }
    }
}

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedEntry {
    /// Decoded name.
    pub name: String,
    /// Size in bytes (0 for directories).
    pub size: u32,
    /// Entry kind.
    pub kind: EntryKind,
    /// Header block of this entry.
    pub block: u32,
}

impl ListedEntry {
    /// Create from a header block, or `None` if its secondary type is not listed.
    pub fn from_header(block: u32, header: &HeaderBlock<'_>, code_page: CodePage) -> Option<Self> {
        let kind = EntryKind::from_sec_type(header.sec_type())?;

        let size = match kind {
            EntryKind::File => {
                let raw = header.byte_size();
                u32::try_from(raw).unwrap_or_else(|_| {
                    log::warn!("block {block}: negative file size {raw}, using 0");
                    0
                })
            }
            EntryKind::Dir => 0,
        };

        Some(Self {
            name: decode_name(header.name(), code_page),
            size,
            kind,
            block,
        })
    }

    /// Check if this is a directory.
    #[inline]
    pub const fn is_dir(&self) -> bool {
        matches!(self.kind, EntryKind::Dir)
    }

    /// Check if this is a file.
    #[inline]
    pub const fn is_file(&self) -> bool {
        matches!(self.kind, EntryKind::File)
    }
}

/// Iterator over the header blocks of one hash bucket.
///
/// Yields `(block, header)` for every header block in the chain. The chain
/// ends at a zero pointer, at a non-header block (under
/// [`UnexpectedBlock::Truncate`]), or after the first error.
pub struct HashChain<'a> {
    image: Image<'a>,
    bucket: usize,
    next: i32,
    visited: u64,
    max_len: Option<u64>,
    policy: UnexpectedBlock,
}

impl<'a> HashChain<'a> {
    /// Start a chain at `head`, the pointer stored in hash bucket `bucket`.
    pub fn new(image: Image<'a>, bucket: usize, head: i32, options: &ListOptions) -> Self {
        Self {
            image,
            bucket,
            next: head,
            visited: 0,
            max_len: options.chain_guard.max_len(image.sector_count()),
            policy: options.unexpected_block,
        }
    }

    /// Hash bucket this chain belongs to.
    #[inline]
    pub const fn bucket(&self) -> usize {
        self.bucket
    }

    fn fail(&mut self, err: AdfError) -> Option<Result<(u32, HeaderBlock<'a>)>> {
        self.next = 0;
        Some(Err(err))
    }
}

impl<'a> Iterator for HashChain<'a> {
    type Item = Result<(u32, HeaderBlock<'a>)>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.next == 0 {
                return None;
            }

            let pointer = self.next;
            let buf = match self.image.sector_at(pointer) {
                Ok(buf) => buf,
                Err(e) => return self.fail(e),
            };
            // sector_at rejects negative pointers
            let block = pointer as u32;

            self.visited += 1;
            if let Some(max) = self.max_len {
                if self.visited > max {
                    log::warn!(
                        "bucket {}: chain longer than {max} sectors at block {block}",
                        self.bucket
                    );
                    return self.fail(AdfError::CorruptChain {
                        bucket: self.bucket,
                        sector: block,
                    });
                }
            }

            let header = HeaderBlock::new(buf);
            log::trace!("bucket {}: block {block}", self.bucket);

            if !header.is_header() {
                log::warn!(
                    "bucket {}: block {block} has type {}, not a header",
                    self.bucket,
                    header.block_type()
                );
                match self.policy {
                    UnexpectedBlock::Truncate => {
                        self.next = 0;
                        return None;
                    }
                    UnexpectedBlock::Skip => {
                        self.next = header.next_same_hash();
                        continue;
                    }
                }
            }

            self.next = header.next_same_hash();
            return Some(Ok((block, header)));
        }
    }
}

/// Collect the listed entries of a directory's hash table, unsorted.
///
/// `dir` is the root block or a user directory header. Entries come out in
/// bucket order, then chain order.
pub fn read_dir(
    image: Image<'_>,
    dir: &HeaderBlock<'_>,
    options: &ListOptions,
) -> Result<Vec<ListedEntry>> {
    let mut entries = Vec::new();

    for (bucket, head) in dir.hash_table() {
        if head == 0 {
            continue;
        }

        for item in HashChain::new(image, bucket, head, options) {
            let (block, header) = item?;
            match ListedEntry::from_header(block, &header, options.code_page) {
                Some(entry) => entries.push(entry),
                None => log::debug!(
                    "block {block}: secondary type {} not listed",
                    header.sec_type()
                ),
            }
        }
    }

    Ok(entries)
}
