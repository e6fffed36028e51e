use std::collections::HashMap;
use std::sync::Mutex;

use super::model::VerificationCode;

/// In-process store for issued codes, keyed by destination email.
///
/// Durable persistence of verification state belongs to an external
/// collaborator; this store only bridges the gap between issuing a code
/// and confirming it. At most one live code per destination: re-issuing
/// replaces, confirming consumes.
#[derive(Default)]
pub struct CodeStore {
    codes: Mutex<HashMap<String, VerificationCode>>,
}

impl CodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `code` for `email`, replacing any earlier issue.
    pub fn put(&self, email: &str, code: VerificationCode) {
        self.codes
            .lock()
            .expect("code store lock poisoned")
            .insert(email.to_string(), code);
    }

    pub fn get(&self, email: &str) -> Option<VerificationCode> {
        self.codes
            .lock()
            .expect("code store lock poisoned")
            .get(email)
            .cloned()
    }

    /// Drop the stored code once it has been confirmed.
    pub fn remove(&self, email: &str) {
        self.codes
            .lock()
            .expect("code store lock poisoned")
            .remove(email);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reissue_replaces_previous_code() {
        let store = CodeStore::new();
        let first = VerificationCode::generate();
        let second = VerificationCode::generate();

        store.put("guardian@example.com", first);
        store.put("guardian@example.com", second.clone());

        assert_eq!(store.get("guardian@example.com"), Some(second));
    }

    #[test]
    fn test_remove_consumes_code() {
        let store = CodeStore::new();
        store.put("guardian@example.com", VerificationCode::generate());
        store.remove("guardian@example.com");

        assert_eq!(store.get("guardian@example.com"), None);
    }
}
