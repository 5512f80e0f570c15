/// Semantic state of a managed client
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClientState {
    /// Shown and holding input focus
    Active,
    /// Shown without focus
    Visible,
    /// Hidden, e.g. it lives on another desktop
    Invisible,
    /// Minimized and represented by an icon
    Icon,
    /// Being moved through a placeholder
    Moving,
    /// Being resized through a placeholder
    Resizing,
}

impl ClientState {
    /// Ordinary on-screen windows, the ones ordered by layer
    pub fn is_on_screen(self) -> bool {
        matches!(self, ClientState::Active | ClientState::Visible)
    }

    /// States backed by a move/resize session
    pub fn in_session(self) -> bool {
        matches!(self, ClientState::Moving | ClientState::Resizing)
    }
}

/// Where a state transition is headed
///
/// `Destroy` is only ever a destination; no client rests in it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    State(ClientState),
    Destroy,
}

impl From<ClientState> for Target {
    fn from(state: ClientState) -> Self {
        Target::State(state)
    }
}

/// A registry entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Client {
    pub state: ClientState,
    /// The window is a dialog of another window
    pub transient: bool,
}

impl Client {
    pub(crate) fn new(transient: bool) -> Self {
        Self {
            state: ClientState::Visible,
            transient,
        }
    }
}
