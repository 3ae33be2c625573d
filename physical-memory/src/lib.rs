use log::debug;

pub type FrameNumber = usize;

#[derive(Debug, PartialEq)]
pub enum MemoryError {
    FrameExhausted,
}

/// A unit of physical memory, large enough to hold one page.
///
/// The frame does not own the page resident in it. It only keeps the page
/// number as a back-reference for as long as the page stays loaded; the
/// owning side lives in the process's page table.
#[derive(Debug)]
pub struct Frame {
    frame_number: FrameNumber,
    resident_page: Option<usize>,
    is_free: bool,
}

impl Frame {
    fn empty(frame_number: FrameNumber) -> Self {
        Frame {
            frame_number,
            resident_page: None,
            is_free: true,
        }
    }

    pub fn frame_number(&self) -> FrameNumber {
        self.frame_number
    }

    pub fn is_free(&self) -> bool {
        self.is_free
    }

    pub fn resident_page(&self) -> Option<usize> {
        self.resident_page
    }
}

/// Proof that a frame was handed out by the allocator.
///
/// `PageTable::map` consumes one of these, so a frame number that never
/// went through `allocate_frame` cannot end up in a page table.
#[derive(Debug)]
pub struct FrameGrant {
    frame_number: FrameNumber,
}

impl FrameGrant {
    pub fn frame_number(&self) -> FrameNumber {
        self.frame_number
    }
}

/// The fixed pool of frames shared by every simulated process.
///
/// Frames are consumed once and never returned to the pool; there is no
/// release or eviction path.
pub struct PhysicalMemory {
    frames: Vec<Frame>,
}

impl PhysicalMemory {
    pub fn init(frame_count: usize) -> Self {
        let mut frames = Vec::with_capacity(frame_count);
        for frame_number in 0..frame_count {
            frames.push(Frame::empty(frame_number));
        }
        PhysicalMemory { frames }
    }

    /// First-fit scan: bind the lowest-numbered free frame to `page_number`.
    pub fn allocate_frame(&mut self, page_number: usize) -> Result<FrameGrant, MemoryError> {
        for frame in self.frames.iter_mut() {
            if frame.is_free {
                frame.is_free = false;
                frame.resident_page = Some(page_number);
                debug!(
                    "allocated frame[{}] to page {}",
                    frame.frame_number, page_number
                );
                return Ok(FrameGrant {
                    frame_number: frame.frame_number,
                });
            }
        }
        debug!("no free frames");
        Err(MemoryError::FrameExhausted)
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn free_frames(&self) -> usize {
        self.frames.iter().filter(|frame| frame.is_free).count()
    }

    pub fn get(&self, frame_number: FrameNumber) -> Option<&Frame> {
        self.frames.get(frame_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_all_free() {
        let memory = PhysicalMemory::init(4);
        assert_eq!(memory.frame_count(), 4);
        assert_eq!(memory.free_frames(), 4);
        for frame_number in 0..4 {
            let frame = memory.get(frame_number).unwrap();
            assert!(frame.is_free());
            assert_eq!(frame.resident_page(), None);
            assert_eq!(frame.frame_number(), frame_number);
        }
    }

    #[test]
    fn test_allocate_first_fit_order() {
        let mut memory = PhysicalMemory::init(3);
        assert_eq!(memory.allocate_frame(7).unwrap().frame_number(), 0);
        assert_eq!(memory.allocate_frame(8).unwrap().frame_number(), 1);
        assert_eq!(memory.allocate_frame(9).unwrap().frame_number(), 2);
    }

    #[test]
    fn test_allocate_binds_page() {
        let mut memory = PhysicalMemory::init(2);
        let grant = memory.allocate_frame(3).unwrap();
        let frame = memory.get(grant.frame_number()).unwrap();
        assert!(!frame.is_free());
        assert_eq!(frame.resident_page(), Some(3));
        assert_eq!(memory.free_frames(), 1);
    }

    #[test]
    fn test_allocate_exhausted() {
        let mut memory = PhysicalMemory::init(2);
        memory.allocate_frame(0).unwrap();
        memory.allocate_frame(1).unwrap();
        assert_eq!(
            memory.allocate_frame(2).unwrap_err(),
            MemoryError::FrameExhausted
        );
        assert_eq!(memory.free_frames(), 0);
    }

    #[test]
    fn test_out_of_range_frame() {
        let memory = PhysicalMemory::init(2);
        assert!(memory.get(2).is_none());
    }
}
