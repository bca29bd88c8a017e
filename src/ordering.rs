//! Canonical per-monitor ordering of the global workspace list.
//!
//! Every navigation action sees the same view: the global list filtered to
//! one monitor and sorted by the ordinal hidden in each name.  Names that
//! never went through the codec (legacy workspaces, `special:*`, user
//! creations) must not break the sort — the list falls back to Hyprland's
//! workspace ids, which are stable and unique.

use crate::slot;
use crate::snapshot::Workspace;

/// Filter `workspaces` down to one monitor and sort into the canonical
/// local order.
///
/// Decodable lists sort by ordinal ascending (ids break ties).  If any
/// member fails to decode, the whole list is ordered by workspace id
/// instead: a per-pair fallback would not be a total order once decodable
/// and undecodable names mix, and the sort must be deterministic in all
/// cases.
pub fn sorted_local(workspaces: &[Workspace], monitor_id: i32) -> Vec<Workspace> {
    let mut local: Vec<(Option<usize>, Workspace)> = workspaces
        .iter()
        .filter(|w| w.monitor_id == monitor_id)
        .map(|w| (slot::decode(&w.name).ok(), w.clone()))
        .collect();

    if local.iter().all(|(ordinal, _)| ordinal.is_some()) {
        local.sort_by_key(|(ordinal, w)| (ordinal.unwrap_or(0), w.id));
    } else {
        local.sort_by_key(|(_, w)| w.id);
    }

    local.into_iter().map(|(_, w)| w).collect()
}

/// Position of the workspace with the given id within a sorted local list.
///
/// `None` means the id is absent — callers treat that as a state
/// inconsistency, not as an index.
pub fn position_of(locals: &[Workspace], workspace_id: i32) -> Option<usize> {
    locals.iter().position(|w| w.id == workspace_id)
}

//  Tests

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::encode;

    fn ws(id: i32, name: &str, monitor_id: i32, windows: u32) -> Workspace {
        Workspace {
            id,
            name: name.to_string(),
            monitor: format!("MON-{monitor_id}"),
            monitor_id,
            windows,
        }
    }

    #[test]
    fn filters_to_the_requested_monitor() {
        let all = vec![
            ws(1, &encode(0, 0).unwrap(), 0, 1),
            ws(2, &encode(1, 0).unwrap(), 1, 1),
            ws(3, &encode(0, 1).unwrap(), 0, 1),
        ];
        let local = sorted_local(&all, 0);
        assert_eq!(local.len(), 2);
        assert!(local.iter().all(|w| w.monitor_id == 0));
    }

    #[test]
    fn sorts_by_ordinal_not_by_id() {
        // Hyprland ids reflect creation order, which drifts from slot order
        // as soon as workspaces are renumbered.
        let all = vec![
            ws(9, &encode(0, 2).unwrap(), 0, 1),
            ws(2, &encode(0, 0).unwrap(), 0, 1),
            ws(5, &encode(0, 1).unwrap(), 0, 1),
        ];
        let local = sorted_local(&all, 0);
        let ids: Vec<i32> = local.iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![2, 5, 9]);
    }

    #[test]
    fn any_undecodable_name_switches_to_id_order() {
        let all = vec![
            ws(9, &encode(0, 0).unwrap(), 0, 1),
            ws(2, "scratchpad", 0, 1),
            ws(5, &encode(0, 1).unwrap(), 0, 1),
        ];
        let local = sorted_local(&all, 0);
        let ids: Vec<i32> = local.iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![2, 5, 9]);
    }

    #[test]
    fn empty_monitor_yields_empty_list() {
        let all = vec![ws(1, &encode(0, 0).unwrap(), 0, 1)];
        assert!(sorted_local(&all, 3).is_empty());
    }

    #[test]
    fn position_of_finds_by_id() {
        let all = vec![
            ws(2, &encode(0, 0).unwrap(), 0, 1),
            ws(5, &encode(0, 1).unwrap(), 0, 1),
        ];
        let local = sorted_local(&all, 0);
        assert_eq!(position_of(&local, 5), Some(1));
        assert_eq!(position_of(&local, 42), None);
    }
}
