use std::cell::Cell;

/// Leading-edge gate that lets at most one animation frame be pending.
///
/// Scroll events call [`FrameGate::try_acquire`] and only schedule a frame
/// when it returns `true`; the frame callback calls [`FrameGate::release`]
/// before doing its work.
#[derive(Debug, Default)]
pub struct FrameGate {
    scheduled: Cell<bool>,
    handle: Cell<Option<i32>>,
}

impl FrameGate {
    pub fn try_acquire(&self) -> bool {
        !self.scheduled.replace(true)
    }

    /// Remembers the id returned by `requestAnimationFrame` for cancellation.
    pub fn set_handle(&self, handle: i32) {
        if self.scheduled.get() {
            self.handle.set(Some(handle));
        }
    }

    pub fn release(&self) {
        self.scheduled.set(false);
        self.handle.set(None);
    }

    /// Releases the gate and hands back the pending frame, if any.
    pub fn take_pending(&self) -> Option<i32> {
        let handle = self.handle.take();
        self.scheduled.set(false);
        handle
    }
}
