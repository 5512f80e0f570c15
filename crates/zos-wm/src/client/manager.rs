//! Client manager
//!
//! Owns every piece of per-client state (registry, layers, icons and the
//! move/resize session) and is the only thing that mutates it. The outer
//! event loop translates window-system events and user commands into calls
//! on [`ClientManager`]; nothing here ever returns an error.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use super::icon::Icon;
use super::session::{MoveResizeSession, SessionKind};
use super::state::{Client, ClientState, Target};
use super::transition::{self, Effect};
use crate::config::WmConfig;
use crate::desktop::{DesktopId, DesktopManager, DesktopTracker};
use crate::display::{NotificationKind, WindowSystem};
use crate::layer::{stacking_order, LayerTable};
use crate::math::Point;
use crate::placement::{self, SnapDir};
use crate::policy::ClassActions;
use crate::types::{Layer, WindowId, DEFAULT_LAYER, DIALOG_LAYER};

/// Client lifecycle state machine and layer manager
///
/// # Example
///
/// ```rust
/// use zos_wm::{ClientManager, ClientState, MemoryDisplay, MemoryWindow, Rect, WmConfig};
///
/// let mut display = MemoryDisplay::new();
/// let window = display.add_window(MemoryWindow::new(Rect::new(0, 0, 640, 480)));
///
/// let mut wm = ClientManager::new(display, WmConfig::default());
/// wm.create(window);
/// assert_eq!(wm.state(window), Some(ClientState::Active));
///
/// wm.state_transition(window, ClientState::Icon);
/// assert!(wm.icon_of(window).is_some());
/// ```
#[derive(Debug)]
pub struct ClientManager<W, D = DesktopManager> {
    display: W,
    desktops: D,
    config: WmConfig,
    clients: BTreeMap<WindowId, Client>,
    layers: LayerTable,
    /// Keyed by client window
    icons: BTreeMap<WindowId, Icon>,
    session: Option<MoveResizeSession>,
    /// Nesting depth of notification suppression scopes
    suppress_depth: u32,
}

impl<W: WindowSystem> ClientManager<W, DesktopManager> {
    /// Create a manager with the stock desktop bookkeeping.
    pub fn new(display: W, config: WmConfig) -> Self {
        let desktops = DesktopManager::new(config.desktops);
        Self::with_desktops(display, desktops, config)
    }

    /// Show another desktop.
    pub fn switch_desktop(&mut self, desktop: DesktopId) {
        if self.desktops.switch_to(desktop) {
            debug!(desktop, "switched desktop");
            self.redesktop();
        }
    }

    /// Show the next desktop, wrapping around.
    pub fn next_desktop(&mut self) {
        self.desktops.next();
        self.redesktop();
    }

    /// Show the previous desktop, wrapping around.
    pub fn prev_desktop(&mut self) {
        self.desktops.prev();
        self.redesktop();
    }

    /// Send a client to the next desktop.
    pub fn client_next_desktop(&mut self, window: WindowId) {
        if self.is_client(window) && self.desktops.move_next(window) {
            self.redesktop();
        }
    }

    /// Send a client to the previous desktop.
    pub fn client_prev_desktop(&mut self, window: WindowId) {
        if self.is_client(window) && self.desktops.move_prev(window) {
            self.redesktop();
        }
    }
}

impl<W: WindowSystem, D: DesktopTracker> ClientManager<W, D> {
    /// Create a manager around existing desktop bookkeeping.
    pub fn with_desktops(display: W, desktops: D, config: WmConfig) -> Self {
        Self {
            display,
            desktops,
            config,
            clients: BTreeMap::new(),
            layers: LayerTable::new(),
            icons: BTreeMap::new(),
            session: None,
            suppress_depth: 0,
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Whether a window is managed
    pub fn is_client(&self, window: WindowId) -> bool {
        self.clients.contains_key(&window)
    }

    /// State of a managed window
    pub fn state(&self, window: WindowId) -> Option<ClientState> {
        self.clients.get(&window).map(|c| c.state)
    }

    /// Layer of a managed window
    pub fn layer(&self, window: WindowId) -> Option<Layer> {
        self.layers.get(window)
    }

    /// The focused client, if any
    pub fn active(&self) -> Option<WindowId> {
        self.clients
            .iter()
            .find(|(_, c)| c.state == ClientState::Active)
            .map(|(&w, _)| w)
    }

    /// Icon standing in for a client
    pub fn icon_of(&self, client: WindowId) -> Option<&Icon> {
        self.icons.get(&client)
    }

    /// All icons, in client id order
    pub fn icons(&self) -> impl Iterator<Item = &Icon> + '_ {
        self.icons.values()
    }

    /// The running move/resize session
    pub fn session(&self) -> Option<&MoveResizeSession> {
        self.session.as_ref()
    }

    /// All clients, in window id order
    pub fn clients(&self) -> impl Iterator<Item = (WindowId, &Client)> + '_ {
        self.clients.iter().map(|(&w, c)| (w, c))
    }

    /// Number of managed clients
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    /// True when nothing is managed
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    /// The layer table
    pub fn layers(&self) -> &LayerTable {
        &self.layers
    }

    /// The window system
    pub fn display(&self) -> &W {
        &self.display
    }

    /// Mutable access to the window system, for the event loop
    pub fn display_mut(&mut self) -> &mut W {
        &mut self.display
    }

    /// Desktop bookkeeping
    pub fn desktops(&self) -> &D {
        &self.desktops
    }

    /// Active configuration
    pub fn config(&self) -> &WmConfig {
        &self.config
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Start managing a window.
    ///
    /// Override-redirect windows, windows unknown to the window system and
    /// windows that are already clients are ignored.
    pub fn create(&mut self, window: WindowId) {
        let Some(attrs) = self.display.attributes(window) else {
            trace!(window, "create: window system does not know window");
            return;
        };
        if attrs.override_redirect || self.is_client(window) {
            trace!(window, "create: not managing window");
            return;
        }

        let transient = self.display.transient_for(window).is_some();
        debug!(window, transient, "managing new client");

        self.suppressed(|wm| {
            wm.display.select_structure_events(window);
            wm.display.set_border_width(window, wm.config.border_width);

            wm.clients.insert(window, Client::new(transient));
            let layer = if transient { DIALOG_LAYER } else { DEFAULT_LAYER };
            wm.layers.set(window, layer);
            wm.desktops.add_desktop(window);

            wm.apply_actions(window);
            wm.unfocus(window);
            wm.redesktop();
            wm.focus(window);
        });
    }

    /// Forget a window.
    ///
    /// Clears the layer, desktop and registry entries along with any icon
    /// or session still bound to the window. Safe on untracked windows.
    pub fn destroy(&mut self, window: WindowId) {
        if let Some(icon) = self.icons.remove(&window) {
            self.display.destroy_window(icon.window);
        }
        if self.session.is_some_and(|s| s.client == window) {
            self.finish_session(false);
        }

        self.delete_layer(window);
        self.desktops.delete_desktop(window);
        if self.clients.remove(&window).is_some() {
            debug!(window, "client destroyed");
        }
    }

    /// Ask a client to close itself. The client's destruction arrives later
    /// as a window-system event.
    pub fn close(&mut self, window: WindowId) {
        if self.is_client(window) {
            debug!(window, "requesting close");
            self.display.send_close_request(window);
        }
    }

    /// Move a client into a new state.
    ///
    /// Untracked windows and transitions outside the table are ignored, as
    /// is a request to start moving or resizing while another session runs.
    pub fn state_transition(&mut self, window: WindowId, target: impl Into<Target>) {
        let target = target.into();
        let Some(from) = self.state(window) else {
            trace!(window, ?target, "state_transition: not a client");
            return;
        };
        let Some(steps) = transition::effects(from, target) else {
            trace!(window, ?from, ?target, "illegal transition ignored");
            return;
        };

        if matches!(target, Target::State(to) if to.in_session()) {
            if self.session.is_some() {
                debug!(window, "move/resize already in progress");
                return;
            }
            if self.display.attributes(window).is_none() {
                return;
            }
        }

        trace!(window, ?from, ?target, "state transition");
        self.suppressed(|wm| {
            for &step in steps {
                wm.apply(window, step);
            }
        });
    }

    fn apply(&mut self, window: WindowId, effect: Effect) {
        match effect {
            Effect::Unfocus => self.unfocus(window),
            Effect::Map => self.display.map(window),
            Effect::Unmap => self.display.unmap(window),
            Effect::MakeIcon => self.make_icon(window),
            Effect::DeleteIcon => self.delete_icon(window),
            Effect::SetState(state) => self.set_state(window, state),
            Effect::BeginSession(kind) => self.begin_session(window, kind),
            Effect::EndSession => self.finish_session(true),
            Effect::AbortSession => self.finish_session(false),
            Effect::Focus => self.focus(window),
            Effect::ResetDesktop => self.desktops.reset_desktop(window),
            Effect::Relayer => self.relayer(),
            Effect::Destroy => self.destroy(window),
        }
    }

    fn set_state(&mut self, window: WindowId, state: ClientState) {
        if let Some(client) = self.clients.get_mut(&window) {
            client.state = state;
        }
    }

    // =========================================================================
    // Focus
    // =========================================================================

    /// Give a client input focus, taking it from the current holder.
    ///
    /// Only `Visible` or `Active` clients can be focused. If the window
    /// cannot take input, or the window system does not honour the request,
    /// the client is left `Visible`.
    pub fn focus(&mut self, window: WindowId) {
        if !self.state(window).is_some_and(ClientState::is_on_screen) {
            trace!(window, "focus: not an on-screen client");
            return;
        }

        if let Some(current) = self.active() {
            self.state_transition(current, ClientState::Visible);
        }

        let accepts_input = self
            .display
            .attributes(window)
            .is_some_and(|a| !a.input_only && a.viewable);
        if !accepts_input {
            debug!(window, "focus: window cannot take input");
            return;
        }

        self.display.ungrab_buttons(window);
        self.display.set_input_focus(window);

        // Focus requests are silently dropped by windows that refuse input
        if self.display.input_focus() != Some(window) {
            debug!(window, "focus request rejected");
            self.unfocus(window);
            self.set_state(window, ClientState::Visible);
            return;
        }

        self.display
            .set_border_color(window, self.config.focused_border);
        self.set_state(window, ClientState::Active);
        debug!(window, "client focused");
    }

    /// Drop a client's focus decoration and re-arm click-to-focus.
    pub fn unfocus(&mut self, window: WindowId) {
        if !self.is_client(window) {
            return;
        }
        self.display
            .set_border_color(window, self.config.unfocused_border);
        self.display.grab_buttons(window);
    }

    // =========================================================================
    // Icons
    // =========================================================================

    fn make_icon(&mut self, window: WindowId) {
        let icon_window = self.display.create_icon_window(window);
        self.display.map(icon_window);
        self.icons.insert(
            window,
            Icon {
                client: window,
                window: icon_window,
            },
        );
        self.set_state(window, ClientState::Icon);
        debug!(window, icon = icon_window, "client iconified");
    }

    fn delete_icon(&mut self, window: WindowId) {
        if let Some(icon) = self.icons.remove(&window) {
            self.display.destroy_window(icon.window);
        }
        self.set_state(window, ClientState::Visible);
    }

    // =========================================================================
    // Move / Resize
    // =========================================================================

    fn begin_session(&mut self, window: WindowId, kind: SessionKind) {
        let Some(attrs) = self.display.attributes(window) else {
            return;
        };

        let placeholder = self.display.create_placeholder(attrs.geometry);
        self.display.map(placeholder);
        self.display.grab_pointer(placeholder);

        self.session = Some(MoveResizeSession {
            client: window,
            placeholder,
            kind,
            pointer: self.display.pointer_position(),
        });
        self.set_state(window, kind.state());
        debug!(window, placeholder, ?kind, "move/resize started");

        self.relayer();
    }

    /// End the session, copying the placeholder's geometry to the client
    /// when `commit` is set.
    fn finish_session(&mut self, commit: bool) {
        let Some(session) = self.session.take() else {
            return;
        };

        let geometry = self
            .display
            .attributes(session.placeholder)
            .map(|a| a.geometry);
        self.display.ungrab_pointer();
        self.display.destroy_window(session.placeholder);

        if commit {
            if let Some(geometry) = geometry {
                self.display.move_resize(session.client, geometry);
            }
        }
        self.set_state(session.client, ClientState::Visible);
        debug!(window = session.client, commit, "move/resize finished");
    }

    /// Apply pointer motion to the running session's placeholder.
    ///
    /// `pointer` is the root position carried by the motion notification
    /// being handled. Any newer motion still queued supersedes it.
    pub fn handle_motion(&mut self, pointer: Point) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let latest = self.display.latest_motion().unwrap_or(pointer);
        let delta = session.advance(latest);
        let (placeholder, kind) = (session.placeholder, session.kind);

        let Some(attrs) = self.display.attributes(placeholder) else {
            return;
        };
        match kind {
            SessionKind::Move => {
                let position = attrs.geometry.translated(delta).position();
                self.display.move_window(placeholder, position);
            }
            SessionKind::Resize => {
                let size = attrs.geometry.resized_by(delta).size();
                self.display.resize_window(placeholder, size);
            }
        }
    }

    // =========================================================================
    // Layers
    // =========================================================================

    /// Put a client on a layer (clamped into range) and restack.
    pub fn set_layer(&mut self, window: WindowId, layer: Layer) {
        if !self.is_client(window) {
            return;
        }
        self.layers.set(window, layer);
        self.relayer();
    }

    /// Move a client up one layer. Does nothing at the top layer.
    pub fn raise_layer(&mut self, window: WindowId) {
        if self.is_client(window) && self.layers.raise(window) {
            self.relayer();
        }
    }

    /// Move a client down one layer. Does nothing at the bottom layer.
    pub fn lower_layer(&mut self, window: WindowId) {
        if self.is_client(window) && self.layers.lower(window) {
            self.relayer();
        }
    }

    /// Drop a window's layer entry.
    pub fn delete_layer(&mut self, window: WindowId) {
        self.layers.remove(window);
    }

    /// Restack every window: clients by layer, then icons, then the
    /// move/resize placeholder.
    pub fn relayer(&mut self) {
        self.suppressed(|wm| {
            let clients = &wm.clients;
            let order = stacking_order(
                &wm.layers,
                |w| clients.get(&w).map(|c| c.state),
                wm.icons.values().map(|icon| icon.window),
                wm.session.map(|s| s.placeholder),
            );
            trace!(?order, "restacking");
            wm.display.restack(&order);
        });
    }

    // =========================================================================
    // Desktops
    // =========================================================================

    /// Hide clients that left the current desktop and show those that joined it.
    ///
    /// Icons and clients in a move/resize session are left alone.
    pub fn update_desktop(&mut self) {
        let changes: Vec<(WindowId, ClientState)> = self
            .clients
            .iter()
            .filter_map(|(&window, client)| {
                let wanted = self.desktops.is_visible(window);
                match (client.state, wanted) {
                    (ClientState::Invisible, true) => Some((window, ClientState::Visible)),
                    (ClientState::Visible | ClientState::Active, false) => {
                        Some((window, ClientState::Invisible))
                    }
                    _ => None,
                }
            })
            .collect();

        for (window, state) in changes {
            self.state_transition(window, state);
        }
    }

    /// Resync desktop visibility, then restack.
    pub fn redesktop(&mut self) {
        self.suppressed(|wm| {
            wm.update_desktop();
            wm.relayer();
        });
    }

    /// Toggle whether a client shows on every desktop.
    pub fn toggle_sticky(&mut self, window: WindowId) {
        if self.is_client(window) {
            self.desktops.flip_sticky(window);
            self.redesktop();
        }
    }

    // =========================================================================
    // Class Actions
    // =========================================================================

    /// Add or replace the actions for a window class.
    pub fn register_action(&mut self, class: impl Into<String>, actions: ClassActions) {
        self.config.actions.insert(class.into(), actions);
    }

    /// Apply the actions registered for a client's class.
    pub fn apply_actions(&mut self, window: WindowId) {
        if !self.is_client(window) {
            return;
        }
        let class = self.display.class_name(window).unwrap_or_default();
        let Some(actions) = self
            .config
            .actions_for(&class)
            .filter(|a| !a.is_empty())
            .cloned()
        else {
            return;
        };
        debug!(window, class = %class, ?actions, "applying class actions");

        if actions.stick {
            self.desktops.flip_sticky(window);
        }
        if actions.maximize {
            self.maximize(window);
        }
        if let Some(layer) = actions.layer {
            self.set_layer(window, layer);
        }
        if let Some(side) = actions.snap {
            self.snap(window, side);
        }
    }

    /// Fill the screen below the icon bar.
    pub fn maximize(&mut self, window: WindowId) {
        if !self.state(window).is_some_and(ClientState::is_on_screen) {
            return;
        }
        let geometry = placement::maximized(self.config.screen, self.config.icon_size.height);
        self.suppressed(|wm| wm.display.move_resize(window, geometry));
    }

    /// Fill half the screen against one edge.
    pub fn snap(&mut self, window: WindowId, side: SnapDir) {
        if !self.state(window).is_some_and(ClientState::is_on_screen) {
            return;
        }
        let geometry =
            placement::snapped(self.config.screen, self.config.icon_size.height, side);
        self.suppressed(|wm| wm.display.move_resize(window, geometry));
    }

    // =========================================================================
    // Notification Suppression
    // =========================================================================

    /// Run `f`, then discard the configure notifications it caused.
    ///
    /// Scopes nest; the drain happens once, when the outermost scope closes,
    /// so it runs whichever way `f` returned.
    fn suppressed<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.suppress_depth += 1;
        let result = f(self);
        self.suppress_depth -= 1;

        if self.suppress_depth == 0 {
            let dropped = self.display.drain_notifications(NotificationKind::Configure);
            if dropped > 0 {
                trace!(dropped, "discarded self-generated configure notifications");
            }
        }
        result
    }
}

#[cfg(test)]
#[path = "manager_tests.rs"]
mod manager_tests;
