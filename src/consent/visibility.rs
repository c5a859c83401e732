/// Which body the dialog shows while mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogView {
    /// Accept-all and open-settings actions.
    Collapsed,
    /// Per-category toggles plus confirm/close actions.
    Expanded,
}

/// Whether the dialog is shown at all, and in which presentation.
///
/// `active` is fixed by whoever mounts the dialog. Nothing in here turns it
/// off; dismissing the dialog is the host's call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityState {
    active: bool,
    expanded: bool,
}

impl VisibilityState {
    pub fn new(active: bool) -> Self {
        Self {
            active,
            expanded: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn expand(&mut self) {
        self.expanded = true;
    }

    pub fn collapse(&mut self) {
        self.expanded = false;
    }

    /// Projection used by the renderer. `None` means render nothing.
    pub fn view(&self) -> Option<DialogView> {
        if !self.active {
            return None;
        }
        if self.expanded {
            Some(DialogView::Expanded)
        } else {
            Some(DialogView::Collapsed)
        }
    }
}

impl Default for VisibilityState {
    fn default() -> Self {
        Self::new(true)
    }
}
