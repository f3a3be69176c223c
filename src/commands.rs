//! Side-effect commands returned from update

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw of the window
    Redraw,
    /// Ask the window for a square inner size (physical pixels)
    ResizeWindow { size: u32 },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
    /// Request application exit
    Quit,
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Redraw, plus a window resize when the layout asked for one
    pub fn redraw_with_resize(resize: Option<u32>) -> Self {
        match resize {
            Some(size) => Cmd::Batch(vec![Cmd::ResizeWindow { size }, Cmd::Redraw]),
            None => Cmd::Redraw,
        }
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            // The resize event that follows triggers its own redraw
            Cmd::ResizeWindow { .. } => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
            Cmd::Quit => false,
        }
    }

    /// The window size requested by this command, if any (last one wins)
    pub fn requested_size(&self) -> Option<u32> {
        match self {
            Cmd::ResizeWindow { size } => Some(*size),
            Cmd::Batch(cmds) => cmds.iter().filter_map(Cmd::requested_size).last(),
            _ => None,
        }
    }
}
