//! Square window enforcement

/// Default lower bound for the window edge, in physical pixels
pub const DEFAULT_MIN_WINDOW_SIZE: u32 = 600;

/// One-shot token for a resize we requested ourselves.
///
/// While armed, a resize event matching the request is treated as our own
/// echo. Any resize event disarms it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResizeGuard {
    expected: Option<(u32, u32)>,
}

impl ResizeGuard {
    pub fn arm(&mut self, width: u32, height: u32) {
        self.expected = Some((width, height));
    }

    pub fn is_armed(&self) -> bool {
        self.expected.is_some()
    }

    pub fn expected(&self) -> Option<(u32, u32)> {
        self.expected
    }

    /// Consume the token. Returns the size we asked for, if armed.
    pub fn absorb(&mut self) -> Option<(u32, u32)> {
        self.expected.take()
    }
}

#[derive(Debug, Clone)]
pub struct WindowState {
    /// Last known inner size (physical pixels)
    pub size: (u32, u32),
    pub min_size: u32,
    guard: ResizeGuard,
}

impl WindowState {
    pub fn new(min_size: u32) -> Self {
        Self {
            size: (min_size, min_size),
            min_size,
            guard: ResizeGuard::default(),
        }
    }

    pub fn guard(&self) -> &ResizeGuard {
        &self.guard
    }

    /// The size we have asked for if a request is pending, else the last known size
    pub fn target_size(&self) -> (u32, u32) {
        self.guard.expected().unwrap_or(self.size)
    }

    /// Record a resize event and decide whether it needs squaring.
    ///
    /// Returns the edge length to request, or `None` when the event was our
    /// own echo or the window is already square and large enough.
    pub fn on_resized(&mut self, width: u32, height: u32) -> Option<u32> {
        self.size = (width, height);
        let side = width.max(height).max(self.min_size);
        let square = width == side && height == side;

        if let Some(expected) = self.guard.absorb() {
            if expected == (width, height) || square {
                return None;
            }
            // Asking again for the same size would bounce against a window
            // manager that refuses it
            if expected == (side, side) {
                tracing::debug!(
                    ?expected,
                    actual = ?(width, height),
                    "Window manager refused our resize request"
                );
                return None;
            }
            tracing::debug!(
                ?expected,
                actual = ?(width, height),
                "Resize does not match our request"
            );
        }

        if square {
            return None;
        }
        self.guard.arm(side, side);
        tracing::trace!(width, height, side, "Squaring window");
        Some(side)
    }

    /// Ask for a square window of at least `side` (clamped to the minimum)
    pub fn request_square(&mut self, side: u32) -> Option<u32> {
        let side = side.max(self.min_size);
        if self.size == (side, side) {
            return None;
        }
        self.guard.arm(side, side);
        Some(side)
    }
}
