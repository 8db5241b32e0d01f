use futures::future::{AbortHandle, AbortRegistration};
use std::cell::{Cell, RefCell};

/// Single-flight bookkeeping for one query instance.
///
/// Starting a fetch aborts the previous one and bumps the generation. A
/// result may only touch shared state while its generation is current and
/// the owner is still mounted.
pub(crate) struct LifecycleGuard {
    mounted: Cell<bool>,
    generation: Cell<u64>,
    in_flight: RefCell<Option<AbortHandle>>,
}

pub(crate) struct Ticket {
    pub generation: u64,
    pub registration: AbortRegistration,
}

impl LifecycleGuard {
    pub fn new() -> Self {
        Self {
            mounted: Cell::new(true),
            generation: Cell::new(0),
            in_flight: RefCell::new(None),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }

    pub fn begin(&self) -> Ticket {
        self.cancel_in_flight();
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        let (handle, registration) = AbortHandle::new_pair();
        *self.in_flight.borrow_mut() = Some(handle);
        Ticket {
            generation,
            registration,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation.get()
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.is_mounted() && self.generation.get() == generation
    }

    /// Release the in-flight slot if `generation` still owns it.
    pub fn finish(&self, generation: u64) {
        if self.generation.get() == generation {
            self.in_flight.borrow_mut().take();
        }
    }

    pub fn has_in_flight(&self) -> bool {
        self.in_flight.borrow().is_some()
    }

    pub fn unmount(&self) {
        self.mounted.set(false);
        self.cancel_in_flight();
    }

    fn cancel_in_flight(&self) {
        if let Some(handle) = self.in_flight.borrow_mut().take() {
            handle.abort();
        }
    }
}
