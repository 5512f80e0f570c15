//! Property tests: random event sequences never break the manager's
//! bookkeeping.

use std::collections::BTreeSet;

use proptest::prelude::*;
use zos_wm::{
    ClientManager, ClientState, MemoryDisplay, MemoryWindow, Point, Rect, Target, WindowId,
    WmConfig, MAX_LAYER, MIN_LAYER,
};

const WINDOWS: usize = 4;

#[derive(Clone, Debug)]
enum Op {
    Create(usize),
    Destroy(usize),
    Transition(usize, ClientState),
    Focus(usize),
    Raise(usize),
    Lower(usize),
    SetLayer(usize, u8),
    Motion(i32, i32),
    SwitchDesktop(u32),
    ClientNextDesktop(usize),
    ToggleSticky(usize),
}

fn state_strategy() -> impl Strategy<Value = ClientState> {
    prop_oneof![
        Just(ClientState::Active),
        Just(ClientState::Visible),
        Just(ClientState::Invisible),
        Just(ClientState::Icon),
        Just(ClientState::Moving),
        Just(ClientState::Resizing),
    ]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    let slot = 0..WINDOWS;
    prop_oneof![
        3 => slot.clone().prop_map(Op::Create),
        1 => slot.clone().prop_map(Op::Destroy),
        4 => (slot.clone(), state_strategy()).prop_map(|(w, s)| Op::Transition(w, s)),
        2 => slot.clone().prop_map(Op::Focus),
        1 => slot.clone().prop_map(Op::Raise),
        1 => slot.clone().prop_map(Op::Lower),
        1 => (slot.clone(), any::<u8>()).prop_map(|(w, l)| Op::SetLayer(w, l)),
        2 => (-50i32..50, -50i32..50).prop_map(|(x, y)| Op::Motion(x, y)),
        1 => (0u32..7).prop_map(Op::SwitchDesktop),
        1 => slot.clone().prop_map(Op::ClientNextDesktop),
        1 => slot.prop_map(Op::ToggleSticky),
    ]
}

fn setup() -> (ClientManager<MemoryDisplay>, Vec<WindowId>) {
    let mut display = MemoryDisplay::new();
    let windows = (0..WINDOWS)
        .map(|i| {
            let offset = i as i32 * 30;
            display.add_window(MemoryWindow::new(Rect::new(offset, offset, 200, 150)))
        })
        .collect();
    (ClientManager::new(display, WmConfig::default()), windows)
}

fn run(wm: &mut ClientManager<MemoryDisplay>, windows: &[WindowId], op: &Op) {
    match *op {
        Op::Create(i) => wm.create(windows[i]),
        Op::Destroy(i) => wm.state_transition(windows[i], Target::Destroy),
        Op::Transition(i, state) => wm.state_transition(windows[i], state),
        Op::Focus(i) => wm.focus(windows[i]),
        Op::Raise(i) => wm.raise_layer(windows[i]),
        Op::Lower(i) => wm.lower_layer(windows[i]),
        Op::SetLayer(i, layer) => wm.set_layer(windows[i], layer),
        Op::Motion(x, y) => wm.handle_motion(Point::new(x, y)),
        Op::SwitchDesktop(d) => wm.switch_desktop(d),
        Op::ClientNextDesktop(i) => wm.client_next_desktop(windows[i]),
        Op::ToggleSticky(i) => wm.toggle_sticky(windows[i]),
    }
}

fn check(wm: &ClientManager<MemoryDisplay>) -> Result<(), TestCaseError> {
    let active = wm
        .clients()
        .filter(|(_, c)| c.state == ClientState::Active)
        .count();
    prop_assert!(active <= 1, "{} active clients", active);

    let registry: BTreeSet<WindowId> = wm.clients().map(|(w, _)| w).collect();
    let layered: BTreeSet<WindowId> = wm.layers().iter().map(|(w, _)| w).collect();
    let desktops: BTreeSet<WindowId> = wm.desktops().windows().collect();
    prop_assert_eq!(&registry, &layered);
    prop_assert_eq!(&registry, &desktops);

    for (window, layer) in wm.layers().iter() {
        prop_assert!(
            (MIN_LAYER..=MAX_LAYER).contains(&layer),
            "window {} on layer {}",
            window,
            layer
        );
    }

    let iconified: BTreeSet<WindowId> = wm
        .clients()
        .filter(|(_, c)| c.state == ClientState::Icon)
        .map(|(w, _)| w)
        .collect();
    let icons: BTreeSet<WindowId> = wm.icons().map(|icon| icon.client).collect();
    prop_assert_eq!(iconified, icons);

    let in_session: Vec<WindowId> = wm
        .clients()
        .filter(|(_, c)| c.state.in_session())
        .map(|(w, _)| w)
        .collect();
    match wm.session() {
        Some(session) => prop_assert_eq!(in_session, vec![session.client]),
        None => prop_assert!(in_session.is_empty()),
    }

    if let Some(active) = wm.active() {
        prop_assert!(wm.display().window(active).is_some_and(|w| w.mapped));
    }

    Ok(())
}

/// Back to front: on-screen clients by non-decreasing layer, then icons,
/// then the placeholder.
fn check_stacking(wm: &ClientManager<MemoryDisplay>) -> Result<(), TestCaseError> {
    let placeholder = wm.session().map(|s| s.placeholder);
    let icons: BTreeSet<WindowId> = wm.icons().map(|icon| icon.window).collect();

    let ranks: Vec<(u8, u8)> = wm
        .display()
        .stacking_order()
        .iter()
        .filter_map(|&w| {
            if Some(w) == placeholder {
                Some((2, 0))
            } else if icons.contains(&w) {
                Some((1, 0))
            } else if wm.state(w).is_some_and(ClientState::is_on_screen) {
                wm.layer(w).map(|layer| (0, layer))
            } else {
                None
            }
        })
        .collect();

    prop_assert!(
        ranks.windows(2).all(|pair| pair[0] <= pair[1]),
        "stacking out of order: {:?}",
        ranks
    );
    Ok(())
}

proptest! {
    /// Bookkeeping holds after every step of a random event sequence
    #[test]
    fn bookkeeping_holds(ops in prop::collection::vec(op_strategy(), 1..60)) {
        let (mut wm, windows) = setup();
        for op in &ops {
            let restacks = wm.display().restack_count();
            run(&mut wm, &windows, op);
            check(&wm)?;
            if wm.display().restack_count() > restacks {
                check_stacking(&wm)?;
            }
        }
    }

    /// Destroying every client leaves no trace in any table
    #[test]
    fn destroy_all_empties_tables(ops in prop::collection::vec(op_strategy(), 1..60)) {
        let (mut wm, windows) = setup();
        for op in &ops {
            run(&mut wm, &windows, op);
        }

        for &window in &windows {
            wm.destroy(window);
        }

        prop_assert!(wm.is_empty());
        prop_assert!(wm.layers().is_empty());
        prop_assert!(wm.desktops().is_empty());
        prop_assert_eq!(wm.icons().count(), 0);
        prop_assert!(wm.session().is_none());
        prop_assert_eq!(wm.display().pointer_grab(), None);
    }

    /// Illegal transitions never touch the window system
    #[test]
    fn illegal_transitions_are_silent(
        ops in prop::collection::vec(op_strategy(), 0..30),
        slot in 0..WINDOWS,
        target in state_strategy(),
    ) {
        let (mut wm, windows) = setup();
        for op in &ops {
            run(&mut wm, &windows, op);
        }

        let window = windows[slot];
        let legal = match wm.state(window) {
            None => false,
            Some(from) => match (from, target) {
                (ClientState::Active, to) => to != ClientState::Active,
                (ClientState::Visible, to) => to != ClientState::Visible,
                (ClientState::Invisible, to) => to == ClientState::Visible,
                (ClientState::Icon | ClientState::Moving | ClientState::Resizing, to) => {
                    to == ClientState::Active
                }
            },
        };
        prop_assume!(!legal);

        let requests = wm.display().request_count();
        wm.state_transition(window, target);
        prop_assert_eq!(wm.display().request_count(), requests);
    }
}
