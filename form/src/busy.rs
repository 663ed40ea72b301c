use std::cell::Cell;

/// Holds the busy flag for as long as it lives.
///
/// The flag is cleared on drop, so every exit from a submit clears it,
/// including a cancelled future.
pub(crate) struct BusyGuard<'a> {
    flag: &'a Cell<bool>,
}

impl<'a> BusyGuard<'a> {
    /// Set the flag, or return `None` if it is already set.
    pub(crate) fn engage(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.replace(true) {
            return None;
        }
        Some(Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}
