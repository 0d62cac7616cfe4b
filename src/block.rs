//! Typed access to header and root blocks.
//!
//! Both views borrow a sector and decode fields lazily at the offsets in
//! [`crate::constants`]. The root block shares the header layout, so
//! [`RootBlock`] derefs to [`HeaderBlock`].

use core::ops::Deref;

use crate::constants::*;

/// Read a big-endian i32 from a sector.
#[inline]
pub const fn read_i32_be(buf: &[u8; BLOCK_SIZE], offset: usize) -> i32 {
    i32::from_be_bytes([
        buf[offset],
        buf[offset + 1],
        buf[offset + 2],
        buf[offset + 3],
    ])
}

/// Header block view (file, directory or root).
#[derive(Debug, Clone, Copy)]
pub struct HeaderBlock<'a> {
    buf: &'a [u8; BLOCK_SIZE],
}

impl<'a> HeaderBlock<'a> {
    /// Interpret a sector as a header block.
    ///
    /// No validation is done here; check [`Self::is_header`] before trusting
    /// the remaining fields.
    #[inline]
    pub const fn new(buf: &'a [u8; BLOCK_SIZE]) -> Self {
        Self { buf }
    }

    /// Raw sector bytes.
    #[inline]
    pub const fn as_bytes(&self) -> &'a [u8; BLOCK_SIZE] {
        self.buf
    }

    /// Block type.
    #[inline]
    pub const fn block_type(&self) -> i32 {
        read_i32_be(self.buf, OFFSET_BLOCK_TYPE)
    }

    /// Returns true if the block type is `T_HEADER`.
    #[inline]
    pub const fn is_header(&self) -> bool {
        self.block_type() == T_HEADER
    }

    /// Secondary type.
    #[inline]
    pub const fn sec_type(&self) -> i32 {
        read_i32_be(self.buf, OFFSET_SEC_TYPE)
    }

    /// Raw file size field.
    #[inline]
    pub const fn byte_size(&self) -> i32 {
        read_i32_be(self.buf, OFFSET_BYTE_SIZE)
    }

    /// Next entry in the same hash bucket, 0 at the end of the chain.
    #[inline]
    pub const fn next_same_hash(&self) -> i32 {
        read_i32_be(self.buf, OFFSET_HASH_CHAIN)
    }

    /// Name length, clamped to [`MAX_NAME_LEN`].
    #[inline]
    pub fn name_len(&self) -> usize {
        usize::from(self.buf[OFFSET_NAME_LEN]).min(MAX_NAME_LEN)
    }

    /// Name bytes.
    #[inline]
    pub fn name(&self) -> &'a [u8] {
        &self.buf[OFFSET_NAME..OFFSET_NAME + self.name_len()]
    }

    /// Hash table entry (also used by directory headers).
    ///
    /// # Panics
    /// Panics if `index >= HASH_TABLE_SIZE`.
    #[inline]
    pub const fn hash_entry(&self, index: usize) -> i32 {
        assert!(index < HASH_TABLE_SIZE);
        read_i32_be(self.buf, OFFSET_HASH_TABLE + index * 4)
    }

    /// Iterate over `(bucket, pointer)` for every hash table entry.
    pub fn hash_table(&self) -> impl Iterator<Item = (usize, i32)> + use<'a> {
        let buf = self.buf;
        (0..HASH_TABLE_SIZE).map(move |i| (i, read_i32_be(buf, OFFSET_HASH_TABLE + i * 4)))
    }
}

/// Root block view.
#[derive(Debug, Clone, Copy)]
pub struct RootBlock<'a> {
    header: HeaderBlock<'a>,
}

impl<'a> RootBlock<'a> {
    /// Interpret a sector as the root block.
    #[inline]
    pub const fn new(buf: &'a [u8; BLOCK_SIZE]) -> Self {
        Self {
            header: HeaderBlock::new(buf),
        }
    }

    /// Returns true if both type fields match a root block.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.header.is_header() && self.header.sec_type() == ST_ROOT
    }

    /// Volume name bytes.
    #[inline]
    pub fn volume_name(&self) -> &'a [u8] {
        self.header.name()
    }
}

impl<'a> Deref for RootBlock<'a> {
    type Target = HeaderBlock<'a>;

    fn deref(&self) -> &Self::Target {
        &self.header
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_i32_be(buf: &mut [u8; BLOCK_SIZE], offset: usize, val: i32) {
        buf[offset..offset + 4].copy_from_slice(&val.to_be_bytes());
    }

    #[test]
    fn test_read_i32_be() {
        let mut buf = [0u8; BLOCK_SIZE];
        buf[0] = 0xFF;
        buf[1] = 0xFF;
        buf[2] = 0xFF;
        buf[3] = 0xFD;
        assert_eq!(read_i32_be(&buf, 0), -3);
    }

    #[test]
    fn test_header_fields() {
        let mut buf = [0u8; BLOCK_SIZE];
        write_i32_be(&mut buf, OFFSET_BLOCK_TYPE, T_HEADER);
        write_i32_be(&mut buf, OFFSET_SEC_TYPE, ST_FILE);
        write_i32_be(&mut buf, OFFSET_BYTE_SIZE, 1024);
        write_i32_be(&mut buf, OFFSET_HASH_CHAIN, 900);
        buf[OFFSET_NAME_LEN] = 8;
        buf[OFFSET_NAME..OFFSET_NAME + 8].copy_from_slice(b"TEST.TXT");

        let header = HeaderBlock::new(&buf);
        assert!(header.is_header());
        assert_eq!(header.sec_type(), ST_FILE);
        assert_eq!(header.byte_size(), 1024);
        assert_eq!(header.next_same_hash(), 900);
        assert_eq!(header.name(), b"TEST.TXT");
    }

    #[test]
    fn test_name_len_clamped() {
        let mut buf = [0u8; BLOCK_SIZE];
        buf[OFFSET_NAME_LEN] = 0xFF;
        buf[OFFSET_NAME..OFFSET_NAME + 40].fill(b'x');

        let header = HeaderBlock::new(&buf);
        assert_eq!(header.name_len(), MAX_NAME_LEN);
        assert_eq!(header.name().len(), MAX_NAME_LEN);
    }

    #[test]
    fn test_hash_table() {
        let mut buf = [0u8; BLOCK_SIZE];
        write_i32_be(&mut buf, OFFSET_HASH_TABLE + 5 * 4, 882);
        write_i32_be(&mut buf, OFFSET_HASH_TABLE + 71 * 4, 1000);

        let header = HeaderBlock::new(&buf);
        assert_eq!(header.hash_entry(5), 882);
        assert_eq!(header.hash_entry(71), 1000);

        let used: alloc::vec::Vec<_> = header.hash_table().filter(|&(_, p)| p != 0).collect();
        assert_eq!(used, [(5usize, 882i32), (71, 1000)]);
    }

    #[test]
    fn test_root_validity() {
        let mut buf = [0u8; BLOCK_SIZE];
        assert!(!RootBlock::new(&buf).is_valid());

        write_i32_be(&mut buf, OFFSET_BLOCK_TYPE, T_HEADER);
        write_i32_be(&mut buf, OFFSET_SEC_TYPE, ST_ROOT);
        buf[OFFSET_NAME_LEN] = 5;
        buf[OFFSET_NAME..OFFSET_NAME + 5].copy_from_slice(b"Empty");

        let root = RootBlock::new(&buf);
        assert!(root.is_valid());
        assert_eq!(root.volume_name(), b"Empty");
        assert_eq!(root.block_type(), T_HEADER);
    }
}
