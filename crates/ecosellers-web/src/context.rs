use std::rc::Rc;

use ecosellers_core::auth::{AuthService, Credentials, LocalAuth, SignupDetails};
use ecosellers_core::config::Config;
use ecosellers_core::error::AuthError;
use ecosellers_core::notice::Notice;
use ecosellers_core::route::{Guard, Resolution, Route};
use ecosellers_core::session::{Session, SessionStore};
use futures_signals::signal::{Mutable, Signal};
use gloo_timers::future::TimeoutFuture;

use crate::utils::BrowserStorage;

/// Wraps an auth service with a fixed delay, standing in for the round
/// trip to a real backend.
pub struct DelayedAuth<A> {
    inner: A,
    delay_ms: u32,
}

impl<A> DelayedAuth<A> {
    pub fn new(inner: A, delay_ms: u32) -> Self {
        Self { inner, delay_ms }
    }
}

impl<A: AuthService> AuthService for DelayedAuth<A> {
    async fn login(&self, credentials: Credentials) -> Result<Session, AuthError> {
        TimeoutFuture::new(self.delay_ms).await;
        self.inner.login(credentials).await
    }

    async fn signup(&self, details: SignupDetails) -> Result<Session, AuthError> {
        TimeoutFuture::new(self.delay_ms).await;
        self.inner.signup(details).await
    }
}

/// Everything a screen needs to know about the signed-in seller.
///
/// Built once at the application root and handed to every screen; nothing
/// else touches the session key.
pub struct AppContext {
    pub config: Config,
    pub store: SessionStore<BrowserStorage>,
    pub guard: Guard,
    pub auth: DelayedAuth<LocalAuth>,
    session: Mutable<Option<Session>>,
}

impl AppContext {
    pub fn new(config: Config) -> Rc<Self> {
        let store = SessionStore::new(BrowserStorage, config.storage_key.clone());
        let guard = Guard::restore(&store);
        let session = Mutable::new(store.get());
        let auth = DelayedAuth::new(LocalAuth, config.auth_delay_ms);

        Rc::new(Self {
            config,
            store,
            guard,
            auth,
            session,
        })
    }

    pub fn session(&self) -> Option<Session> {
        self.session.get_cloned()
    }

    pub fn session_signal(&self) -> impl Signal<Item = Option<Session>> + use<> {
        self.session.signal_cloned()
    }

    /// Re-reads the store; a session removed in another tab shows up here.
    pub fn resolve(&self, route: Route) -> Resolution {
        let resolution = self.guard.resolve(route, &self.store);
        self.session.set_neq(self.store.get());
        resolution
    }

    pub fn signed_in(&self, session: Session) {
        self.session.set_neq(Some(session));
    }

    pub fn logout(&self) {
        match self.guard.logout(&self.store) {
            Ok((route, notice)) => {
                self.session.set_neq(None);
                crate::common::route::go_to(route);
                crate::common::snackbar::show(notice);
            }
            Err(e) => crate::common::snackbar::show(Notice::logout_failed(e)),
        }
    }
}
