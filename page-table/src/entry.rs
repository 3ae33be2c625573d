use physical_memory::FrameNumber;

use crate::page::Page;

/// One slot of the page table: the owned page plus its mapping state.
///
/// `frame_number` stays `None` until the slot is bound to an allocated
/// frame; a `Some` value always names a frame the allocator handed out
/// and implies the page is loaded.
#[derive(Debug)]
pub struct PageTableEntry {
    page: Page,
    frame_number: Option<FrameNumber>,
}

impl PageTableEntry {
    pub(crate) fn unmapped(page: Page) -> Self {
        PageTableEntry {
            page,
            frame_number: None,
        }
    }

    pub(crate) fn bind(&mut self, frame_number: FrameNumber) {
        self.frame_number = Some(frame_number);
        self.page.set_loaded();
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn frame_number(&self) -> Option<FrameNumber> {
        self.frame_number
    }

    pub fn is_valid(&self) -> bool {
        self.frame_number.is_some()
    }
}
