//! Gap-closing renumbering of one monitor's local workspaces.
//!
//! After a move or a switch leaves an empty slot behind, the local list
//! develops a hole: ordinals `0, 1, 3`.  Compaction walks the sorted list
//! and renames every workspace whose encoded ordinal disagrees with its
//! position, restoring a contiguous `0..N-1` numbering.
//!
//! The pass re-fetches the workspace list through the query port instead of
//! trusting whatever the caller already holds — a preceding rename or move
//! may have invalidated it.  Renames go out one at a time in ascending
//! position order, and the first failure aborts the pass: the numbering is
//! then non-contiguous but every name is still valid, and no rollback is
//! attempted.

use crate::error::Error;
use crate::ordering::sorted_local;
use crate::slot::{decode, encode};
use crate::traits::{Dispatch, Query};
use log::{debug, info};

/// Renumber the local workspaces of `monitor_id` to contiguous ordinals.
///
/// With `fix_names == false` (ordinary navigation) an undecodable name
/// fails the whole pass before any rename — silently renumbering unknown
/// names could mask a bug.  With `fix_names == true` (startup) arbitrary
/// pre-existing names are absorbed into the canonical scheme.
pub fn compact<Q: Query, D: Dispatch>(
    query: &Q,
    dispatch: &D,
    monitor_id: i32,
    fix_names: bool,
) -> Result<(), Error> {
    let workspaces = query.workspaces()?;
    let locals = sorted_local(&workspaces, monitor_id);

    for (position, workspace) in locals.iter().enumerate() {
        match decode(&workspace.name) {
            Ok(ordinal) if ordinal == position => continue,
            Ok(_) => {}
            Err(e) if !fix_names => return Err(e.into()),
            Err(_) => {}
        }

        let canonical = encode(monitor_id, position)?;
        if workspace.name == canonical {
            continue;
        }

        debug!(
            "compact monitor {}: rename workspace {} {:?} -> slot {}",
            monitor_id, workspace.id, workspace.name, position
        );
        dispatch
            .rename_workspace(workspace.id, &canonical)
            .map_err(|source| Error::Compaction {
                from: workspace.name.clone(),
                to: canonical.clone(),
                source,
            })?;
    }

    info!("monitor {}: {} local workspace(s) compact", monitor_id, locals.len());
    Ok(())
}

//  Tests

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::encode;
    use crate::snapshot::{Client, Monitor, Workspace};
    use crate::traits::ExternalError;
    use std::cell::RefCell;

    /// Query/dispatch double: serves a fixed workspace list and records
    /// every rename, optionally failing after a set number of them.
    #[derive(Default)]
    struct MockPorts {
        workspaces: Vec<Workspace>,
        query_log: RefCell<u32>,
        renames: RefCell<Vec<(i32, String)>>,
        fail_rename_after: Option<usize>,
    }

    impl MockPorts {
        fn with(workspaces: Vec<Workspace>) -> Self {
            Self {
                workspaces,
                ..Self::default()
            }
        }
    }

    impl Query for MockPorts {
        fn monitors(&self) -> Result<Vec<Monitor>, ExternalError> {
            Ok(Vec::new())
        }

        fn workspaces(&self) -> Result<Vec<Workspace>, ExternalError> {
            *self.query_log.borrow_mut() += 1;
            Ok(self.workspaces.clone())
        }

        fn clients(&self) -> Result<Vec<Client>, ExternalError> {
            Ok(Vec::new())
        }

        fn active_workspace(&self) -> Result<Option<Workspace>, ExternalError> {
            Ok(None)
        }

        fn active_window(&self) -> Result<Option<Client>, ExternalError> {
            Ok(None)
        }
    }

    impl Dispatch for MockPorts {
        fn focus_workspace(&self, _name: &str) -> Result<(), ExternalError> {
            Ok(())
        }

        fn rename_workspace(&self, id: i32, new_name: &str) -> Result<(), ExternalError> {
            let mut renames = self.renames.borrow_mut();
            if let Some(limit) = self.fail_rename_after {
                if renames.len() >= limit {
                    return Err(ExternalError::Rejected("renameworkspace".into()));
                }
            }
            renames.push((id, new_name.to_string()));
            Ok(())
        }

        fn focus_monitor(&self, _id: i32) -> Result<(), ExternalError> {
            Ok(())
        }

        fn move_to_workspace(&self, _name: &str, _address: &str) -> Result<(), ExternalError> {
            Ok(())
        }
    }

    fn ws(id: i32, name: &str, windows: u32) -> Workspace {
        Workspace {
            id,
            name: name.to_string(),
            monitor: "DP-1".into(),
            monitor_id: 0,
            windows,
        }
    }

    #[test]
    fn canonical_list_issues_no_renames() {
        let ports = MockPorts::with(vec![
            ws(3, &encode(0, 0).unwrap(), 1),
            ws(7, &encode(0, 1).unwrap(), 0),
        ]);
        compact(&ports, &ports, 0, false).unwrap();
        assert!(ports.renames.borrow().is_empty());
    }

    #[test]
    fn gap_renames_only_the_out_of_place_workspace() {
        // Ordinals [0, 5] at positions [0, 1]: the first entry is already
        // canonical, the second gets the canonical name of position 1.
        let ports = MockPorts::with(vec![
            ws(3, &encode(0, 0).unwrap(), 1),
            ws(10, &encode(0, 5).unwrap(), 1),
        ]);
        compact(&ports, &ports, 0, false).unwrap();
        assert_eq!(
            *ports.renames.borrow(),
            vec![(10, encode(0, 1).unwrap())]
        );
    }

    #[test]
    fn renames_run_in_ascending_position_order() {
        let ports = MockPorts::with(vec![
            ws(4, &encode(0, 2).unwrap(), 1),
            ws(8, &encode(0, 5).unwrap(), 1),
            ws(9, &encode(0, 7).unwrap(), 1),
        ]);
        compact(&ports, &ports, 0, false).unwrap();
        assert_eq!(
            *ports.renames.borrow(),
            vec![
                (4, encode(0, 0).unwrap()),
                (8, encode(0, 1).unwrap()),
                (9, encode(0, 2).unwrap()),
            ]
        );
    }

    #[test]
    fn undecodable_name_fails_the_pass_before_any_rename() {
        let ports = MockPorts::with(vec![
            ws(2, "scratchpad", 1),
            ws(3, &encode(0, 4).unwrap(), 1),
        ]);
        let err = compact(&ports, &ports, 0, false).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
        assert!(ports.renames.borrow().is_empty());
    }

    #[test]
    fn fix_names_absorbs_arbitrary_names_in_order() {
        // Undecodable members force id order: 2, 5, 9.
        let ports = MockPorts::with(vec![
            ws(9, &encode(0, 0).unwrap(), 1),
            ws(2, "mail", 1),
            ws(5, "web", 1),
        ]);
        compact(&ports, &ports, 0, true).unwrap();
        assert_eq!(
            *ports.renames.borrow(),
            vec![
                (2, encode(0, 0).unwrap()),
                (5, encode(0, 1).unwrap()),
                (9, encode(0, 2).unwrap()),
            ]
        );
    }

    #[test]
    fn first_rename_failure_aborts_the_pass() {
        let ports = MockPorts {
            fail_rename_after: Some(1),
            ..MockPorts::with(vec![
                ws(4, &encode(0, 3).unwrap(), 1),
                ws(8, &encode(0, 5).unwrap(), 1),
            ])
        };
        let err = compact(&ports, &ports, 0, false).unwrap_err();
        assert!(matches!(err, Error::Compaction { .. }));
        // Exactly the first rename went through; no rollback.
        assert_eq!(ports.renames.borrow().len(), 1);
    }

    #[test]
    fn compaction_refetches_rather_than_trusting_callers() {
        let ports = MockPorts::with(vec![ws(3, &encode(0, 0).unwrap(), 1)]);
        compact(&ports, &ports, 0, false).unwrap();
        assert_eq!(*ports.query_log.borrow(), 1);
    }

    #[test]
    fn empty_monitor_is_a_clean_noop() {
        let ports = MockPorts::with(Vec::new());
        compact(&ports, &ports, 5, false).unwrap();
        assert!(ports.renames.borrow().is_empty());
    }
}
