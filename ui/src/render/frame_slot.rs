use std::cell::RefCell;
use std::rc::Rc;

/// Home of a callback that re-schedules itself every animation frame.
///
/// The callback keeps a clone of its own slot, so the cycle only breaks
/// when the callback is taken out again.
pub struct FrameSlot<C>(Rc<RefCell<Option<C>>>);

impl<C> Clone for FrameSlot<C> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<C> Default for FrameSlot<C> {
    fn default() -> Self {
        Self(Rc::new(RefCell::new(None)))
    }
}

impl<C> FrameSlot<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fill(&self, cb: C) {
        *self.0.borrow_mut() = Some(cb);
    }

    pub fn with<R>(&self, f: impl FnOnce(&C) -> R) -> Option<R> {
        self.0.borrow().as_ref().map(f)
    }

    /// Empties the slot. A callback taking itself out must not drop the
    /// result until its own call has returned.
    pub fn take(&self) -> Option<C> {
        self.0.borrow_mut().take()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_none()
    }

    /// Live handles to this slot, the callback's own included.
    pub fn handles(&self) -> usize {
        Rc::strong_count(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Callback {
        _own_slot: FrameSlot<Callback>,
    }

    #[test]
    fn taking_the_callback_frees_the_cycle() {
        let slot = FrameSlot::new();
        slot.fill(Callback { _own_slot: slot.clone() });
        assert_eq!(slot.handles(), 2);

        let cb = slot.take();
        assert!(slot.is_empty());
        drop(cb);
        assert_eq!(slot.handles(), 1);
    }

    #[test]
    fn empty_slot_runs_nothing() {
        let slot: FrameSlot<u32> = FrameSlot::new();
        assert_eq!(slot.with(|n| n + 1), None);
        slot.fill(41);
        assert_eq!(slot.with(|n| n + 1), Some(42));
    }
}
