//! Scoped cleanup for test cases.
//!
//! A case stops at its first failed check by returning early, so any
//! release work that is not already covered by `Drop` goes into a
//! [`Deferred`] guard created near the resource it releases.
//!
//! ```text
//! let ctx = cipher_init();
//! let _free = defer(|| cipher_free(ctx));
//! test_equal!(cipher_setkey(ctx, KEY), 0); // `cipher_free` runs on every exit
//! ```

/// Guard that runs its action when dropped.
#[must_use = "the action runs when the guard is dropped; bind it to a named variable"]
pub struct Deferred<F: FnOnce()> {
    action: Option<F>,
}

impl<F: FnOnce()> Deferred<F> {
    /// Disarm the guard; the action never runs.
    pub fn cancel(mut self) {
        self.action = None;
    }
}

impl<F: FnOnce()> Drop for Deferred<F> {
    fn drop(&mut self) {
        if let Some(action) = self.action.take() {
            action();
        }
    }
}

/// Run `action` when the returned guard goes out of scope, on every exit
/// path of the case including a panic.
pub fn defer<F: FnOnce()>(action: F) -> Deferred<F> {
    Deferred {
        action: Some(action),
    }
}
