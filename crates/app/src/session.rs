//! Session Manager
//!
//! A single owned session with an explicit lifecycle: started once per
//! application, observed through a subscription list, torn down with
//! [`SessionManager::stop`]. Observers are invoked outside the manager's
//! locks, so they may call back into it.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::{Arc, Mutex},
};

use thiserror::Error;
use tracing::debug;

use shopfront::users::{User, UserRole};

use crate::{
    auth::{AuthApi, AuthError},
    domain::users::{UsersService, UsersServiceError, models::NewUser},
};

/// Registration input for [`SessionManager::sign_up`].
#[derive(Clone)]
pub struct NewSignup {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: UserRole,
}

impl Debug for NewSignup {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("NewSignup")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("full_name", &self.full_name)
            .field("role", &self.role)
            .finish()
    }
}

/// Current session state, as delivered to observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// No authenticated user.
    SignedOut,

    /// An authenticated user with a resolved profile.
    SignedIn(User),
}

/// Handle returned by [`SessionManager::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObserverId(u64);

type Observer = Arc<dyn Fn(&SessionState) + Send + Sync>;

#[derive(Default)]
struct ObserverList {
    next_id: u64,
    entries: Vec<(ObserverId, Observer)>,
}

/// Errors surfaced by session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// [`SessionManager::start`] was called a second time.
    #[error("session already started")]
    AlreadyStarted,

    /// The auth plane knows the subject but no profile row exists.
    #[error("no profile found for {0}")]
    ProfileMissing(String),

    /// Credential or token failure.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Profile lookup or insert failure.
    #[error(transparent)]
    Users(#[from] UsersServiceError),
}

/// Owns the authenticated-user state and its observers.
pub struct SessionManager {
    auth: Arc<dyn AuthApi>,
    users: Arc<dyn UsersService>,
    state: Mutex<SessionState>,
    observers: Mutex<ObserverList>,
    started: Mutex<bool>,
}

impl Debug for SessionManager {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("SessionManager")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl SessionManager {
    #[must_use]
    pub fn new(auth: Arc<dyn AuthApi>, users: Arc<dyn UsersService>) -> Self {
        Self {
            auth,
            users,
            state: Mutex::new(SessionState::SignedOut),
            observers: Mutex::new(ObserverList::default()),
            started: Mutex::new(false),
        }
    }

    /// Starts the session lifecycle: restores a previously established
    /// session, if any, and notifies observers of the resulting state.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::AlreadyStarted`] on a second call, or the
    /// underlying failure when restoration could not be attempted.
    pub async fn start(&self) -> Result<SessionState, SessionError> {
        {
            let mut started = lock(&self.started);

            if *started {
                return Err(SessionError::AlreadyStarted);
            }

            *started = true;
        }

        let state = match self.auth.current_session().await? {
            Some(session) => match self.users.find_by_email(&session.email).await? {
                Some(user) => SessionState::SignedIn(user),
                // The auth plane restored a session but the profile row is
                // gone; treat the session as unusable.
                None => SessionState::SignedOut,
            },
            None => SessionState::SignedOut,
        };

        debug!(restored = matches!(state, SessionState::SignedIn(_)), "session started");

        self.set_state(state.clone());

        Ok(state)
    }

    /// Tears down the observer list. The manager stays stopped; a fresh
    /// manager is needed for a new lifecycle.
    pub fn stop(&self) {
        lock(&self.observers).entries.clear();
    }

    /// Registers an observer invoked on every state change.
    pub fn subscribe(&self, observer: impl Fn(&SessionState) + Send + Sync + 'static) -> ObserverId {
        let mut observers = lock(&self.observers);

        let id = ObserverId(observers.next_id);
        observers.next_id += 1;
        observers.entries.push((id, Arc::new(observer)));

        id
    }

    /// Removes a previously registered observer.
    pub fn unsubscribe(&self, id: ObserverId) {
        lock(&self.observers)
            .entries
            .retain(|(entry_id, _)| *entry_id != id);
    }

    /// The signed-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        match &*lock(&self.state) {
            SessionState::SignedIn(user) => Some(user.clone()),
            SessionState::SignedOut => None,
        }
    }

    /// Exchanges credentials for a session and resolves the profile row.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::ProfileMissing`] when authentication succeeds
    /// but no profile row exists for the email; the session stays signed out.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<User, SessionError> {
        let session = self.auth.sign_in(email, password).await?;

        let user = self
            .users
            .find_by_email(&session.email)
            .await?
            .ok_or_else(|| SessionError::ProfileMissing(session.email.clone()))?;

        self.set_state(SessionState::SignedIn(user.clone()));

        Ok(user)
    }

    /// Registers credentials, inserts the profile row, then signs in.
    ///
    /// # Errors
    ///
    /// Returns the first failure of the three steps; a profile-insert failure
    /// leaves the credentials registered but the session signed out.
    pub async fn sign_up(&self, signup: NewSignup) -> Result<User, SessionError> {
        self.auth.sign_up(&signup.email, &signup.password).await?;

        self.users
            .create_profile(NewUser {
                email: signup.email.clone(),
                full_name: signup.full_name,
                role: signup.role,
            })
            .await?;

        self.sign_in(&signup.email, &signup.password).await
    }

    /// Revokes the session and notifies observers.
    ///
    /// # Errors
    ///
    /// Returns the auth plane's failure; local state is signed out regardless.
    pub async fn sign_out(&self) -> Result<(), SessionError> {
        let result = self.auth.sign_out().await;

        self.set_state(SessionState::SignedOut);

        result.map_err(SessionError::from)
    }

    fn set_state(&self, state: SessionState) {
        *lock(&self.state) = state.clone();

        // Snapshot under the lock, invoke outside it.
        let observers: Vec<Observer> = lock(&self.observers)
            .entries
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();

        for observer in observers {
            observer(&state);
        }
    }
}

// Session state is plain data; a poisoned lock can only mean an observer
// panicked mid-notify, in which case continuing with the data is sound.
fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        auth::{AuthSession, MockAuthApi},
        domain::users::MockUsersService,
        test::profile,
    };

    use super::*;

    fn session_for(email: &str) -> AuthSession {
        AuthSession {
            access_token: "token".to_string(),
            email: email.to_string(),
        }
    }

    fn recording_observer(
        manager: &SessionManager,
    ) -> (ObserverId, Arc<Mutex<Vec<SessionState>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let id = manager.subscribe(move |state| {
            sink.lock().expect("observer sink lock").push(state.clone());
        });

        (id, seen)
    }

    #[tokio::test]
    async fn sign_in_resolves_profile_and_notifies() -> TestResult {
        let mut auth = MockAuthApi::new();
        let mut users = MockUsersService::new();

        auth.expect_sign_in()
            .withf(|email, password| email == "a@b.c" && password == "pw")
            .times(1)
            .returning(|email, _| Ok(session_for(email)));

        let expected = profile("a@b.c", UserRole::Customer);
        let found = expected.clone();

        users
            .expect_find_by_email()
            .withf(|email| email == "a@b.c")
            .times(1)
            .returning(move |_| Ok(Some(found.clone())));

        let manager = SessionManager::new(Arc::new(auth), Arc::new(users));
        let (_, seen) = recording_observer(&manager);

        let user = manager.sign_in("a@b.c", "pw").await?;

        assert_eq!(user, expected);
        assert_eq!(manager.current_user(), Some(expected.clone()));
        assert_eq!(
            *seen.lock().expect("observer sink lock"),
            vec![SessionState::SignedIn(expected)]
        );

        Ok(())
    }

    #[tokio::test]
    async fn missing_profile_fails_sign_in_and_stays_signed_out() {
        let mut auth = MockAuthApi::new();
        let mut users = MockUsersService::new();

        auth.expect_sign_in()
            .returning(|email, _| Ok(session_for(email)));
        users.expect_find_by_email().returning(|_| Ok(None));

        let manager = SessionManager::new(Arc::new(auth), Arc::new(users));

        let result = manager.sign_in("ghost@b.c", "pw").await;

        assert!(matches!(result, Err(SessionError::ProfileMissing(_))));
        assert!(manager.current_user().is_none());
    }

    #[tokio::test]
    async fn sign_out_notifies_signed_out() -> TestResult {
        let mut auth = MockAuthApi::new();
        let mut users = MockUsersService::new();

        auth.expect_sign_in()
            .returning(|email, _| Ok(session_for(email)));
        auth.expect_sign_out().times(1).returning(|| Ok(()));
        users
            .expect_find_by_email()
            .returning(|email| Ok(Some(profile(email, UserRole::Customer))));

        let manager = SessionManager::new(Arc::new(auth), Arc::new(users));

        manager.sign_in("a@b.c", "pw").await?;

        let (_, seen) = recording_observer(&manager);

        manager.sign_out().await?;

        assert!(manager.current_user().is_none());
        assert_eq!(
            *seen.lock().expect("observer sink lock"),
            vec![SessionState::SignedOut]
        );

        Ok(())
    }

    #[tokio::test]
    async fn unsubscribed_observers_are_not_notified() -> TestResult {
        let mut auth = MockAuthApi::new();
        let mut users = MockUsersService::new();

        auth.expect_sign_in()
            .returning(|email, _| Ok(session_for(email)));
        users
            .expect_find_by_email()
            .returning(|email| Ok(Some(profile(email, UserRole::Customer))));

        let manager = SessionManager::new(Arc::new(auth), Arc::new(users));

        let (id, seen) = recording_observer(&manager);
        manager.unsubscribe(id);

        manager.sign_in("a@b.c", "pw").await?;

        assert!(
            seen.lock().expect("observer sink lock").is_empty(),
            "unsubscribed observer must not fire"
        );

        Ok(())
    }

    #[tokio::test]
    async fn start_restores_an_existing_session() -> TestResult {
        let mut auth = MockAuthApi::new();
        let mut users = MockUsersService::new();

        auth.expect_current_session()
            .times(1)
            .returning(|| Ok(Some(session_for("a@b.c"))));
        users
            .expect_find_by_email()
            .returning(|email| Ok(Some(profile(email, UserRole::Admin))));

        let manager = SessionManager::new(Arc::new(auth), Arc::new(users));

        let state = manager.start().await?;

        assert!(matches!(state, SessionState::SignedIn(_)));
        assert!(manager.current_user().is_some_and(|user| user.role.is_admin()));

        Ok(())
    }

    #[tokio::test]
    async fn start_without_a_session_reports_signed_out() -> TestResult {
        let mut auth = MockAuthApi::new();
        let users = MockUsersService::new();

        auth.expect_current_session().returning(|| Ok(None));

        let manager = SessionManager::new(Arc::new(auth), Arc::new(users));

        assert_eq!(manager.start().await?, SessionState::SignedOut);

        Ok(())
    }

    #[tokio::test]
    async fn start_twice_is_rejected() -> TestResult {
        let mut auth = MockAuthApi::new();
        let users = MockUsersService::new();

        auth.expect_current_session()
            .times(1)
            .returning(|| Ok(None));

        let manager = SessionManager::new(Arc::new(auth), Arc::new(users));

        manager.start().await?;
        let second = manager.start().await;

        assert!(matches!(second, Err(SessionError::AlreadyStarted)));

        Ok(())
    }

    #[tokio::test]
    async fn sign_up_registers_inserts_profile_then_signs_in() -> TestResult {
        let mut auth = MockAuthApi::new();
        let mut users = MockUsersService::new();

        auth.expect_sign_up()
            .withf(|email, password| email == "new@b.c" && password == "pw")
            .times(1)
            .returning(|_, _| Ok(()));
        auth.expect_sign_in()
            .times(1)
            .returning(|email, _| Ok(session_for(email)));

        users
            .expect_create_profile()
            .withf(|user| user.email == "new@b.c" && user.role == UserRole::Customer)
            .times(1)
            .returning(|user| {
                Ok(profile(&user.email, user.role))
            });
        users
            .expect_find_by_email()
            .returning(|email| Ok(Some(profile(email, UserRole::Customer))));

        let manager = SessionManager::new(Arc::new(auth), Arc::new(users));

        let user = manager
            .sign_up(NewSignup {
                email: "new@b.c".to_string(),
                password: "pw".to_string(),
                full_name: "New Shopper".to_string(),
                role: UserRole::Customer,
            })
            .await?;

        assert_eq!(user.email, "new@b.c");
        assert!(manager.current_user().is_some());

        Ok(())
    }
}
