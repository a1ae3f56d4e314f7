/// Locks the interactive session of the current user.
pub trait SessionLock: Send + Sync {
    /// Best effort. Returns `true` if the platform reported the session locked.
    ///
    /// Locking an already locked session must be harmless.
    fn lock(&self) -> bool;
}
