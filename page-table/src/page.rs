use crate::PageNumber;

/// A fixed-size unit of a process's virtual address space.
#[derive(Debug)]
pub struct Page {
    page_number: PageNumber,
    is_loaded: bool,
}

impl Page {
    pub(crate) fn new(page_number: PageNumber) -> Self {
        Page {
            page_number,
            is_loaded: false,
        }
    }

    pub fn page_number(&self) -> PageNumber {
        self.page_number
    }

    pub fn is_loaded(&self) -> bool {
        self.is_loaded
    }

    pub(crate) fn set_loaded(&mut self) {
        self.is_loaded = true;
    }
}
