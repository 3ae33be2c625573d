mod entry;
mod page;

use log::info;
use physical_memory::FrameGrant;

pub use entry::PageTableEntry;
pub use page::Page;
pub use physical_memory::FrameNumber;

pub type PageNumber = usize;

#[derive(Debug, PartialEq)]
pub enum PageTableError {
    AllocationFailure,
    InvalidPageNumber,
}

/// Per-process table mapping page numbers to frames.
///
/// Each entry owns the page for its slot; nothing outside the table holds
/// an owning handle to a page.
pub struct PageTable {
    entries: Vec<PageTableEntry>,
}

impl PageTable {
    /// Builds one unmapped entry per page-number slot. The entry storage
    /// is reserved fallibly; a failed reservation is the one fatal
    /// condition in the system.
    pub fn init(page_count: usize) -> Result<Self, PageTableError> {
        let mut entries = Vec::new();
        entries
            .try_reserve_exact(page_count)
            .map_err(|_| PageTableError::AllocationFailure)?;
        for page_number in 0..page_count {
            entries.push(PageTableEntry::unmapped(Page::new(page_number)));
        }
        Ok(PageTable { entries })
    }

    pub fn page_count(&self) -> usize {
        self.entries.len()
    }

    /// Binds `page_number` to the granted frame and marks the page loaded.
    ///
    /// An out-of-range page number leaves the table untouched. The grant
    /// is consumed either way; frames have no undo.
    pub fn map(&mut self, page_number: PageNumber, grant: FrameGrant) -> Result<(), PageTableError> {
        let entry = self
            .entries
            .get_mut(page_number)
            .ok_or(PageTableError::InvalidPageNumber)?;
        entry.bind(grant.frame_number());
        Ok(())
    }

    pub fn get(&self, page_number: PageNumber) -> Option<&PageTableEntry> {
        self.entries.get(page_number)
    }

    /// Frame holding `page_number`, or `None` when the page is out of
    /// range or not mapped.
    pub fn frame_of(&self, page_number: PageNumber) -> Option<FrameNumber> {
        self.entries.get(page_number)?.frame_number()
    }

    /// Ends the life of the table and every page it owns. Taking the
    /// table by value makes a later map or lookup a compile error.
    pub fn release(self) {
        info!("released page table with {} entries", self.entries.len());
    }
}
