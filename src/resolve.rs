//! Target resolution for navigation and move requests.
//!
//! Given where the user is, where they asked to go, and the sorted local
//! list, [`resolve`] answers two questions: which slot is actually meant
//! (after clamping), and would getting there leave an empty slot stranded —
//! in which case a gap-closing compaction pass is required.
//!
//! This is a pure function of its inputs.  No I/O happens here, which is
//! what makes the decision table directly testable.

use crate::snapshot::Workspace;

/// Outcome of resolving a requested slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// Normalized 0-based target.  `locals.len()` is the sentinel meaning
    /// "create a new trailing slot".
    pub target: usize,
    /// Whether reaching `target` would leave or skip over an empty slot,
    /// so a renumbering pass should run.
    pub must_compact: bool,
}

/// Decide the normalized target slot for a navigation or move request.
///
/// * `current` — position of the active workspace in `locals`, or `None`
///   when it could not be located.  Callers surface `None` as a state
///   inconsistency themselves; here it only suppresses the gap scan.
/// * `requested` — the raw 0-based request.  Any sign or magnitude is
///   accepted and clamped into `[0, N]`, where `N = locals.len()` requests
///   a new trailing slot.
///
/// `target == current` is always a no-op; callers must check it before
/// dispatching anything.
pub fn resolve(current: Option<usize>, requested: i64, locals: &[Workspace]) -> Resolution {
    let n = locals.len();
    let target = requested.clamp(0, n as i64) as usize;

    let Some(current) = current else {
        // Anomalous caller state: nothing to scan against, never compact.
        return Resolution {
            target,
            must_compact: false,
        };
    };

    // Asking for a fresh slot while already sitting on a trailing empty one
    // must neither create a slot nor compact.
    if current + 1 == n && target == n && locals[current].windows == 0 {
        return Resolution {
            target: current,
            must_compact: false,
        };
    }

    if target == current {
        return Resolution {
            target,
            must_compact: false,
        };
    }

    // Leaving an empty current slot behind orphans a gap; so does skipping
    // over any empty slot strictly between the two positions (the synthetic
    // index N is not a slot and is never scanned).
    let mut must_compact = current < n && locals[current].windows == 0;
    let lo = current.min(target);
    let hi = current.max(target);
    for index in (lo + 1)..=hi {
        if index < n && locals[index].windows == 0 {
            must_compact = true;
        }
    }

    Resolution {
        target,
        must_compact,
    }
}

//  Tests
