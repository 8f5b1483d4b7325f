//! Start/stop contract for the per-frame tick.
//!
//! The host environment (requestAnimationFrame in the browser, a manual
//! driver in tests) implements [`FrameHost`]. [`FrameLoop`] keeps at most one
//! frame request outstanding and guarantees that once stopped it neither
//! requests another frame nor lets a late callback run a tick.

/// Something that can schedule one callback for the next display refresh.
pub trait FrameHost {
    type Handle: Copy + PartialEq + std::fmt::Debug;

    /// Ask for one frame callback. `None` means the host could not schedule.
    fn request_frame(&mut self) -> Option<Self::Handle>;

    /// Withdraw a request made by `request_frame`.
    fn cancel_frame(&mut self, handle: Self::Handle);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
    Stopped,
}

#[derive(Debug)]
pub struct FrameLoop<H: FrameHost> {
    host: H,
    state: LoopState,
    pending: Option<H::Handle>,
    frames: u64,
}

impl<H: FrameHost> FrameLoop<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            state: LoopState::Idle,
            pending: None,
            frames: 0,
        }
    }

    /// Request the first frame. No-op when already running or stopped.
    pub fn start(&mut self) {
        if self.state != LoopState::Idle {
            return;
        }
        self.state = LoopState::Running;
        self.pending = self.host.request_frame();
        if self.pending.is_none() {
            log::warn!("[frame] host refused the first frame request");
        }
    }

    /// Called from the host callback. Returns whether a tick must run now.
    pub fn begin_frame(&mut self) -> bool {
        if self.state != LoopState::Running {
            return false;
        }
        if self.pending.take().is_none() {
            return false;
        }
        self.frames += 1;
        true
    }

    /// Re-arm for the next refresh after a tick ran.
    pub fn end_frame(&mut self) {
        if self.state == LoopState::Running && self.pending.is_none() {
            self.pending = self.host.request_frame();
        }
    }

    /// Cancel any outstanding request. Terminal: the loop cannot be restarted.
    pub fn stop(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.host.cancel_frame(handle);
        }
        self.state = LoopState::Stopped;
    }

    #[inline]
    pub fn state(&self) -> LoopState {
        self.state
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Number of frames for which `begin_frame` returned true.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

/// Host that records requests and cancellations; frames fire when the caller
/// says so. Used by the host-side tests and handy for offline simulation.
#[derive(Debug, Default)]
pub struct ManualHost {
    next: u32,
    pub requested: Vec<u32>,
    pub cancelled: Vec<u32>,
}

impl FrameHost for ManualHost {
    type Handle = u32;

    fn request_frame(&mut self) -> Option<u32> {
        self.next += 1;
        self.requested.push(self.next);
        Some(self.next)
    }

    fn cancel_frame(&mut self, handle: u32) {
        self.cancelled.push(handle);
    }
}
