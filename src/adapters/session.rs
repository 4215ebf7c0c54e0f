use crate::domain::model::User;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default)]
struct SessionState {
    token: Option<String>,
    user: Option<User>,
}

/// Login state shared between the HTTP client and its caller.
///
/// Clones share the same state, so a 401 seen by the client clears the
/// token for every holder.
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: Arc<RwLock<SessionState>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        let session = Self::new();
        session.write().token = Some(token.into());
        session
    }

    // 鎖中毒時沿用內部狀態
    fn read(&self) -> RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }

    pub fn token(&self) -> Option<String> {
        self.read().token.clone()
    }

    pub fn user(&self) -> Option<User> {
        self.read().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().token.is_some()
    }

    pub fn login(&self, token: impl Into<String>, user: Option<User>) {
        let mut state = self.write();
        state.token = Some(token.into());
        state.user = user;
    }

    pub fn set_user(&self, user: User) {
        self.write().user = Some(user);
    }

    pub fn logout(&self) {
        let mut state = self.write();
        state.token = None;
        state.user = None;
    }
}
