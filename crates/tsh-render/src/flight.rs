//! In-flight debounce for export triggers.

use std::cell::Cell;

/// Clears the in-flight flag when the export resolves, success or failure,
/// so a terminal error never leaves the exporter stuck.
pub(crate) struct InFlightGuard<'a>(&'a Cell<bool>);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Try to claim the in-flight flag. `None` means an export is already
/// running and this trigger must be ignored.
pub(crate) fn claim(flag: &Cell<bool>) -> Option<InFlightGuard<'_>> {
    if flag.replace(true) {
        None
    } else {
        Some(InFlightGuard(flag))
    }
}
