use std::cell::Cell;

use crate::error::StorageError;
use crate::notice::Notice;
use crate::session::{Session, SessionStore, Storage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Landing,
    Login,
    Signup,
    Dashboard,
    Products,
    Certifications,
    Analytics,
    Settings,
    NotFound,
}

impl Route {
    pub fn from_path(pathname: &str) -> Self {
        let mut paths = pathname.split('/').collect::<Vec<_>>();
        paths.retain(|path| !path.is_empty());

        match paths.as_slice() {
            [] => Route::Landing,
            ["login"] => Route::Login,
            ["signup"] => Route::Signup,
            ["dashboard"] => Route::Dashboard,
            ["products"] => Route::Products,
            ["certifications"] => Route::Certifications,
            ["analytics"] => Route::Analytics,
            ["settings"] => Route::Settings,
            _ => Route::NotFound,
        }
    }

    pub fn url(&self) -> String {
        match self {
            Route::Landing => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Signup => "/signup".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Products => "/products".to_string(),
            Route::Certifications => "/certifications".to_string(),
            Route::Analytics => "/analytics".to_string(),
            Route::Settings => "/settings".to_string(),
            Route::NotFound => "/notfound".to_string(),
        }
    }

    pub fn is_protected(&self) -> bool {
        matches!(
            self,
            Route::Dashboard
                | Route::Products
                | Route::Certifications
                | Route::Analytics
                | Route::Settings
        )
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Landing => "Home",
            Route::Login => "Login",
            Route::Signup => "Sign Up",
            Route::Dashboard => "Dashboard",
            Route::Products => "Products",
            Route::Certifications => "Certifications",
            Route::Analytics => "Analytics",
            Route::Settings => "Settings",
            Route::NotFound => "Not Found",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessState {
    Public,
    Authenticated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Render(Route),
    Redirect { to: Route, notice: Option<Notice> },
}

/// Tracks whether the tab is signed in and decides what a route renders.
///
/// A tab enters `Authenticated` through [`Guard::login`], which writes the
/// session first, or by finding a session already stored. A protected route
/// read without a session drops back to `Public`.
#[derive(Debug)]
pub struct Guard {
    state: Cell<AccessState>,
}

impl Default for Guard {
    fn default() -> Self {
        Self::new()
    }
}

impl Guard {
    pub fn new() -> Self {
        Self {
            state: Cell::new(AccessState::Public),
        }
    }

    /// Restores the state of a tab that already holds a session.
    pub fn restore<S: Storage>(store: &SessionStore<S>) -> Self {
        let guard = Self::new();
        if store.is_present() {
            guard.state.set(AccessState::Authenticated);
        }
        guard
    }

    pub fn state(&self) -> AccessState {
        self.state.get()
    }

    /// Decides what `route` renders.
    ///
    /// A stored session found here also moves the guard to `Authenticated`.
    /// That is the reload case handled by [`Guard::restore`], reached when the
    /// record was written by another tab after this one started.
    pub fn resolve<S: Storage>(&self, route: Route, store: &SessionStore<S>) -> Resolution {
        if !route.is_protected() {
            return Resolution::Render(route);
        }

        if store.is_present() {
            self.state.set(AccessState::Authenticated);
            Resolution::Render(route)
        } else {
            if self.state.replace(AccessState::Public) == AccessState::Authenticated {
                info!("session gone, treating {} as logged out", route.url());
            }
            Resolution::Redirect {
                to: Route::Login,
                notice: Some(Notice::auth_required()),
            }
        }
    }

    pub fn login<S: Storage>(
        &self,
        store: &SessionStore<S>,
        session: &Session,
    ) -> Result<Route, StorageError> {
        store.set(session)?;
        self.state.set(AccessState::Authenticated);
        Ok(Route::Dashboard)
    }

    /// Clears the session, then signs the tab out. If the record cannot be
    /// removed the tab stays signed in.
    pub fn logout<S: Storage>(
        &self,
        store: &SessionStore<S>,
    ) -> Result<(Route, Notice), StorageError> {
        store.clear().inspect_err(|e| error!("failed to clear session: {e}"))?;
        self.state.set(AccessState::Public);
        Ok((Route::Login, Notice::logged_out()))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::StorageError;
    use crate::session::MemoryStorage;

    fn store() -> SessionStore<MemoryStorage> {
        SessionStore::new(MemoryStorage::new(), "user")
    }

    #[test]
    fn test_from_path() {
        assert_eq!(Route::from_path("/"), Route::Landing);
        assert_eq!(Route::from_path(""), Route::Landing);
        assert_eq!(Route::from_path("/dashboard/"), Route::Dashboard);
        assert_eq!(Route::from_path("//analytics"), Route::Analytics);
        assert_eq!(Route::from_path("/forgot-password"), Route::NotFound);
        assert_eq!(Route::from_path("/dashboard/extra"), Route::NotFound);
    }

    #[test]
    fn test_url_is_inverse_of_from_path() {
        for route in [
            Route::Landing,
            Route::Login,
            Route::Signup,
            Route::Dashboard,
            Route::Products,
            Route::Certifications,
            Route::Analytics,
            Route::Settings,
        ] {
            assert_eq!(Route::from_path(&route.url()), route);
        }
    }

    #[test]
    fn test_dashboard_without_session_redirects_to_login() {
        let guard = Guard::new();

        match guard.resolve(Route::Dashboard, &store()) {
            Resolution::Redirect { to, notice } => {
                assert_eq!(to, Route::Login);
                assert_eq!(notice, Some(Notice::auth_required()));
            }
            Resolution::Render(route) => panic!("rendered {route:?} without a session"),
        }
        assert_eq!(guard.state(), AccessState::Public);
    }

    #[test]
    fn test_every_protected_route_is_gated() {
        let guard = Guard::new();
        let store = store();

        for path in ["/dashboard", "/products", "/certifications", "/analytics", "/settings"] {
            assert!(matches!(
                guard.resolve(Route::from_path(path), &store),
                Resolution::Redirect { to: Route::Login, .. }
            ));
        }
    }

    #[test]
    fn test_public_routes_render_without_session() {
        let guard = Guard::new();
        for route in [Route::Landing, Route::Login, Route::Signup, Route::NotFound] {
            assert_eq!(guard.resolve(route, &store()), Resolution::Render(route));
        }
    }

    #[test]
    fn test_login_then_logout() {
        let guard = Guard::new();
        let store = store();
        let session = Session::new("seller@example.com");

        assert_eq!(guard.login(&store, &session), Ok(Route::Dashboard));
        assert_eq!(guard.state(), AccessState::Authenticated);
        assert_eq!(
            guard.resolve(Route::Analytics, &store),
            Resolution::Render(Route::Analytics)
        );

        let (to, notice) = guard.logout(&store).unwrap();
        assert_eq!(to, Route::Login);
        assert_eq!(notice, Notice::logged_out());
        assert_eq!(store.get(), None);
        assert_eq!(guard.state(), AccessState::Public);
    }

    #[test]
    fn test_session_removed_elsewhere_is_logged_out() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(&storage, "user");
        let guard = Guard::new();
        guard.login(&store, &Session::new("a@b.co")).unwrap();

        storage.remove_item("user").unwrap();

        assert!(matches!(
            guard.resolve(Route::Dashboard, &store),
            Resolution::Redirect { to: Route::Login, .. }
        ));
        assert_eq!(guard.state(), AccessState::Public);
    }

    struct ReadOnly;

    impl Storage for ReadOnly {
        fn get_item(&self, _: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set_item(&self, key: &str, _: &str) -> Result<(), StorageError> {
            Err(StorageError::Write {
                key: key.to_string(),
                reason: "quota exceeded".to_string(),
            })
        }

        fn remove_item(&self, _: &str) -> Result<(), StorageError> {
            Ok(())
        }
    }

    struct Sticky(MemoryStorage);

    impl Storage for Sticky {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.0.get_item(key)
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.0.set_item(key, value)
        }

        fn remove_item(&self, key: &str) -> Result<(), StorageError> {
            Err(StorageError::Write {
                key: key.to_string(),
                reason: "storage locked".to_string(),
            })
        }
    }

    #[test]
    fn test_failed_clear_stays_authenticated() {
        let guard = Guard::new();
        let store = SessionStore::new(Sticky(MemoryStorage::new()), "user");
        guard.login(&store, &Session::new("a@b.co")).unwrap();

        let e = guard.logout(&store).unwrap_err();
        assert!(Notice::logout_failed(e).is_destructive());
        assert_eq!(guard.state(), AccessState::Authenticated);
        assert!(store.is_present());
    }

    #[test]
    fn test_failed_write_stays_public() {
        let guard = Guard::new();
        let store = SessionStore::new(ReadOnly, "user");

        assert!(guard.login(&store, &Session::new("a@b.co")).is_err());
        assert_eq!(guard.state(), AccessState::Public);
    }

    #[test]
    fn test_session_written_by_another_tab_is_adopted() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(&storage, "user");
        let guard = Guard::restore(&store);
        assert_eq!(guard.state(), AccessState::Public);

        SessionStore::new(&storage, "user")
            .set(&Session::new("a@b.co"))
            .unwrap();

        assert_eq!(
            guard.resolve(Route::Settings, &store),
            Resolution::Render(Route::Settings)
        );
        assert_eq!(guard.state(), AccessState::Authenticated);
    }

    #[test]
    fn test_restore_from_existing_session() {
        let store = store();
        assert_eq!(Guard::restore(&store).state(), AccessState::Public);

        store.set(&Session::new("a@b.co")).unwrap();
        assert_eq!(Guard::restore(&store).state(), AccessState::Authenticated);
    }
}
