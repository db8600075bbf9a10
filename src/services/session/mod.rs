//! Session gate: the edit lock in front of the whole UI.

/// Tracks whether the current session has been unlocked.
///
/// The flag starts false and is only ever set by a correct password
/// submission; nothing un-sets it for the lifetime of the session.
pub struct SessionGate {
    secret: String,
    unlocked: bool,
    error: Option<String>,
}

impl SessionGate {
    pub fn new(secret: String) -> Self {
        Self {
            secret,
            unlocked: false,
            error: None,
        }
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// Error from the most recent failed attempt, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Compare `submitted` against the secret, exactly (no trimming).
    ///
    /// A match unlocks the session and clears any error. A wrong non-empty
    /// submission records a user-visible error; an empty submission is
    /// treated as "not yet attempted" and records nothing.
    pub fn submit(&mut self, submitted: &str) -> bool {
        if submitted == self.secret {
            self.unlocked = true;
            self.error = None;
            true
        } else {
            if !submitted.is_empty() {
                self.error = Some("Mot de passe incorrect".to_string());
            }
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> SessionGate {
        SessionGate::new("edt2025".to_string())
    }

    #[test]
    fn correct_password_unlocks() {
        let mut gate = gate();
        assert!(!gate.is_unlocked());
        assert!(gate.submit("edt2025"));
        assert!(gate.is_unlocked());
        assert!(gate.error().is_none());
    }

    #[test]
    fn wrong_password_records_error_and_stays_locked() {
        let mut gate = gate();
        assert!(!gate.submit("nope"));
        assert!(!gate.is_unlocked());
        assert!(gate.error().is_some());
    }

    #[test]
    fn empty_submission_is_not_an_error() {
        let mut gate = gate();
        assert!(!gate.submit(""));
        assert!(!gate.is_unlocked());
        assert!(gate.error().is_none());
    }

    #[test]
    fn comparison_is_exact_without_trimming() {
        let mut gate = gate();
        assert!(!gate.submit(" edt2025"));
        assert!(!gate.submit("edt2025 "));
        assert!(!gate.is_unlocked());
    }

    #[test]
    fn success_clears_a_previous_error() {
        let mut gate = gate();
        gate.submit("nope");
        assert!(gate.error().is_some());
        gate.submit("edt2025");
        assert!(gate.error().is_none());
        assert!(gate.is_unlocked());
    }
}
