//! Client state transition table
//!
//! Each legal `(from, to)` pair maps to the ordered side effects that carry
//! it out. Anything not listed is illegal and ignored by the caller.
//!
//! Ordering matters: focus is dropped before a window is unmapped, and a
//! window is unmapped before it turns into an icon, goes invisible, or
//! hands off to a placeholder.

use super::session::SessionKind;
use super::state::{ClientState, Target};

/// One step of a transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Effect {
    /// Unfocused border, re-arm click-to-focus
    Unfocus,
    Map,
    Unmap,
    /// Create and show an icon window; state becomes `Icon`
    MakeIcon,
    /// Destroy the icon window; state becomes `Visible`
    DeleteIcon,
    SetState(ClientState),
    /// Create the placeholder and start tracking the pointer
    BeginSession(SessionKind),
    /// Copy placeholder geometry back to the client and end the session
    EndSession,
    /// End the session without touching the client
    AbortSession,
    Focus,
    ResetDesktop,
    Relayer,
    Destroy,
}

use ClientState::{Active, Icon, Invisible, Moving, Resizing, Visible};
use Effect::*;

/// Effects for a transition, or `None` if it is illegal.
pub(crate) fn effects(from: ClientState, to: Target) -> Option<&'static [Effect]> {
    let steps: &'static [Effect] = match (from, to) {
        (Active, Target::State(Icon)) => &[Unfocus, Unmap, MakeIcon],
        (Active, Target::State(Visible)) => &[Unfocus, SetState(Visible)],
        (Active, Target::State(Invisible)) => &[Unfocus, Unmap, SetState(Invisible)],
        (Active, Target::State(Moving)) => &[Unfocus, Unmap, BeginSession(SessionKind::Move)],
        (Active, Target::State(Resizing)) => {
            &[Unfocus, Unmap, BeginSession(SessionKind::Resize)]
        }
        (Active, Target::Destroy) => &[Unfocus, Destroy],

        (Visible, Target::State(Icon)) => &[Unmap, MakeIcon],
        (Visible, Target::State(Active)) => &[Focus],
        (Visible, Target::State(Invisible)) => &[Unmap, SetState(Invisible)],
        (Visible, Target::State(Moving)) => &[Unmap, BeginSession(SessionKind::Move)],
        (Visible, Target::State(Resizing)) => &[Unmap, BeginSession(SessionKind::Resize)],
        (Visible, Target::Destroy) => &[Destroy],

        // Only desktop switches reach this, and they relayer afterwards
        (Invisible, Target::State(Visible)) => &[Map, SetState(Visible)],
        (Invisible, Target::Destroy) => &[Destroy],

        (Icon, Target::State(Active)) => &[DeleteIcon, Map, Focus, ResetDesktop, Relayer],
        (Icon, Target::Destroy) => &[DeleteIcon, Destroy],

        // The desktop may have changed under a drag; the client lands on the current one
        (Moving | Resizing, Target::State(Active)) => {
            &[Map, EndSession, Focus, ResetDesktop, Relayer]
        }
        (Moving | Resizing, Target::Destroy) => &[AbortSession, Destroy],

        _ => return None,
    };
    Some(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATES: [ClientState; 6] = [Active, Visible, Invisible, Icon, Moving, Resizing];

    fn all_targets() -> Vec<Target> {
        let mut targets: Vec<Target> = STATES.iter().copied().map(Target::State).collect();
        targets.push(Target::Destroy);
        targets
    }

    #[test]
    fn test_table_size() {
        let legal = STATES
            .iter()
            .flat_map(|&from| all_targets().into_iter().map(move |to| (from, to)))
            .filter(|&(from, to)| effects(from, to).is_some())
            .count();
        // 6 from Active, 6 from Visible, 2 from Invisible, 2 from Icon, 2 each from Moving/Resizing
        assert_eq!(legal, 20);
    }

    #[test]
    fn test_self_transitions_illegal() {
        for state in STATES {
            assert_eq!(effects(state, Target::State(state)), None, "{:?}", state);
        }
    }

    #[test]
    fn test_every_state_can_be_destroyed() {
        for state in STATES {
            let steps = effects(state, Target::Destroy).unwrap();
            assert_eq!(steps.last(), Some(&Destroy));
        }
    }

    #[test]
    fn test_unfocus_precedes_unmap() {
        for to in all_targets() {
            if let Some(steps) = effects(Active, to) {
                assert_eq!(steps[0], Unfocus, "{:?}", to);
            }
        }
    }

    #[test]
    fn test_invisible_to_visible_skips_relayer() {
        let steps = effects(Invisible, Target::State(Visible)).unwrap();
        assert!(!steps.contains(&Relayer));
    }

    #[test]
    fn test_restricted_states() {
        assert_eq!(effects(Invisible, Target::State(Active)), None);
        assert_eq!(effects(Invisible, Target::State(Icon)), None);
        assert_eq!(effects(Icon, Target::State(Visible)), None);
        assert_eq!(effects(Icon, Target::State(Moving)), None);
        assert_eq!(effects(Moving, Target::State(Resizing)), None);
        assert_eq!(effects(Resizing, Target::State(Visible)), None);
    }

    #[test]
    fn test_session_end_maps_before_focus() {
        for from in [Moving, Resizing] {
            assert_eq!(
                effects(from, Target::State(Active)),
                Some(&[Map, EndSession, Focus, ResetDesktop, Relayer][..])
            );
        }
    }
}
