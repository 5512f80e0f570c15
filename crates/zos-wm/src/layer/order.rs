use super::LayerTable;
use crate::client::ClientState;
use crate::types::WindowId;

/// Compute the back-to-front stacking order.
///
/// Three tiers, back to front:
/// 1. `Visible` and `Active` clients by ascending layer, ties by window id
/// 2. icon windows, in the order given
/// 3. the move/resize placeholder, if any
///
/// Clients in any other state are left out; they are unmapped or
/// represented by an icon or placeholder.
pub fn stacking_order<S, I>(
    layers: &LayerTable,
    state_of: S,
    icons: I,
    placeholder: Option<WindowId>,
) -> Vec<WindowId>
where
    S: Fn(WindowId) -> Option<ClientState>,
    I: IntoIterator<Item = WindowId>,
{
    let mut clients: Vec<_> = layers
        .iter()
        .filter(|&(window, _)| state_of(window).is_some_and(ClientState::is_on_screen))
        .collect();
    // Stable sort keeps id order within a layer
    clients.sort_by_key(|&(_, layer)| layer);

    let mut order: Vec<WindowId> = clients.into_iter().map(|(window, _)| window).collect();
    order.extend(icons);
    order.extend(placeholder);
    order
}
