//! Listing configuration.

use crate::text::CodePage;

/// What to do when a hash chain reaches a sector that is not a header block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnexpectedBlock {
    /// Stop the chain at the unexpected block.
    #[default]
    Truncate,
    /// Ignore the block's contents but keep following its chain pointer.
    Skip,
}

/// Bound on the number of sectors visited in one hash chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChainGuard {
    /// A chain may visit at most as many sectors as the image holds.
    /// Any longer chain must revisit a sector.
    #[default]
    SectorCount,
    /// A chain may visit at most this many sectors.
    Limit(usize),
    /// No bound. A cyclic chain never terminates.
    Unbounded,
}

impl ChainGuard {
    /// Maximum chain length for an image of `sector_count` sectors.
    #[inline]
    pub fn max_len(self, sector_count: u64) -> Option<u64> {
        match self {
            Self::SectorCount => Some(sector_count),
            Self::Limit(n) => Some(n as u64),
            Self::Unbounded => None,
        }
    }
}

/// Options controlling how a volume is listed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Code page for volume and entry names.
    pub code_page: CodePage,
    /// Reject a root block whose type fields do not match.
    pub strict_root: bool,
    /// Policy for non-header blocks found mid-chain.
    pub unexpected_block: UnexpectedBlock,
    /// Chain length bound.
    pub chain_guard: ChainGuard,
}

impl ListOptions {
    /// Default options.
    pub const fn new() -> Self {
        Self {
            code_page: CodePage::Latin1,
            strict_root: false,
            unexpected_block: UnexpectedBlock::Truncate,
            chain_guard: ChainGuard::SectorCount,
        }
    }

    /// Set the code page.
    pub const fn code_page(mut self, code_page: CodePage) -> Self {
        self.code_page = code_page;
        self
    }

    /// Enable or disable strict root validation.
    pub const fn strict_root(mut self, strict: bool) -> Self {
        self.strict_root = strict;
        self
    }

    /// Set the unexpected block policy.
    pub const fn unexpected_block(mut self, policy: UnexpectedBlock) -> Self {
        self.unexpected_block = policy;
        self
    }

    /// Set the chain guard.
    pub const fn chain_guard(mut self, guard: ChainGuard) -> Self {
        self.chain_guard = guard;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(ListOptions::new(), ListOptions::default());
        assert_eq!(ListOptions::new().unexpected_block, UnexpectedBlock::Truncate);
    }

    #[test]
    fn test_chain_guard_max_len() {
        assert_eq!(ChainGuard::SectorCount.max_len(1760), Some(1760));
        assert_eq!(ChainGuard::Limit(8).max_len(1760), Some(8));
        assert_eq!(ChainGuard::Unbounded.max_len(1760), None);
    }

    #[test]
    fn test_builder() {
        let opts = ListOptions::new()
            .code_page(CodePage::Ascii)
            .strict_root(true)
            .unexpected_block(UnexpectedBlock::Skip)
            .chain_guard(ChainGuard::Limit(4));
        assert_eq!(opts.code_page, CodePage::Ascii);
        assert!(opts.strict_root);
        assert_eq!(opts.unexpected_block, UnexpectedBlock::Skip);
        assert_eq!(opts.chain_guard, ChainGuard::Limit(4));
    }
}
