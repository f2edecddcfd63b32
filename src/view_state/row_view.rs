//! Per-row presentation state machine.

/// Presentation state of a single row.
///
/// Two states with a single unconditional toggle transition between them;
/// there are no other states and no async transitions. The initial state is
/// `Collapsed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowViewState {
    /// Compact strip showing only width-permitting columns.
    #[default]
    Collapsed,
    /// Full-detail rendering of every row attribute.
    Expanded,
}

impl RowViewState {
    /// Flip the state.
    pub fn toggled(self) -> Self {
        match self {
            RowViewState::Collapsed => RowViewState::Expanded,
            RowViewState::Expanded => RowViewState::Collapsed,
        }
    }

    /// Whether this is the expanded state.
    pub fn is_expanded(&self) -> bool {
        matches!(self, RowViewState::Expanded)
    }
}
