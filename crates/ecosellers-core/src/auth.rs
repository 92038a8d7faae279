use std::future::Future;

use crate::error::AuthError;
use crate::form::{FieldErrors, FormValues, Rule, Schema};
use crate::route::{Guard, Route};
use crate::session::{Session, SessionStore, Storage};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn from_values(values: &FormValues) -> Self {
        Self {
            email: values.get("email").cloned().unwrap_or_default(),
            password: values.get("password").cloned().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupDetails {
    pub company_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub company_description: String,
    pub address: String,
}

impl SignupDetails {
    pub fn from_values(values: &FormValues) -> Self {
        let get = |key: &str| values.get(key).cloned().unwrap_or_default();
        Self {
            company_name: get("companyName"),
            first_name: get("firstName"),
            last_name: get("lastName"),
            email: get("email"),
            password: get("password"),
            company_description: get("companyDescription"),
            address: get("address"),
        }
    }
}

pub fn login_schema() -> Schema {
    Schema::new()
        .field("email", [Rule::required("Email is required")])
        .field("password", [Rule::required("Password is required")])
}

/// The rejection a login form with empty credentials gets, shown alongside
/// the inline errors.
pub fn login_rejection(errors: &FieldErrors) -> Option<AuthError> {
    (errors.contains_key("email") || errors.contains_key("password"))
        .then_some(AuthError::MissingCredentials)
}

pub fn signup_schema() -> Schema {
    Schema::new()
        .field(
            "companyName",
            [Rule::min_length(2, "Company name must be at least 2 characters")],
        )
        .field(
            "firstName",
            [Rule::min_length(2, "First name must be at least 2 characters")],
        )
        .field(
            "lastName",
            [Rule::min_length(2, "Last name must be at least 2 characters")],
        )
        .field("email", [Rule::email("Please enter a valid email")])
        .field(
            "password",
            [Rule::min_length(8, "Password must be at least 8 characters")],
        )
        .field(
            "companyDescription",
            [Rule::min_length(10, "Description must be at least 10 characters")],
        )
        .field(
            "address",
            [Rule::min_length(5, "Address must be at least 5 characters")],
        )
}

/// The request that would reach a real backend.
pub trait AuthService {
    fn login(&self, credentials: Credentials) -> impl Future<Output = Result<Session, AuthError>>;

    fn signup(&self, details: SignupDetails) -> impl Future<Output = Result<Session, AuthError>>;
}

/// Accepts any non-empty credentials without leaving the tab.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalAuth;

impl AuthService for LocalAuth {
    async fn login(&self, credentials: Credentials) -> Result<Session, AuthError> {
        if credentials.email.is_empty() || credentials.password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        Ok(Session::new(credentials.email))
    }

    async fn signup(&self, details: SignupDetails) -> Result<Session, AuthError> {
        if details.email.is_empty() || details.password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        Ok(Session::with_company(details.email, details.company_name))
    }
}

/// Runs a login through the service and, on success, signs the tab in.
pub async fn sign_in<A, S>(
    service: &A,
    guard: &Guard,
    store: &SessionStore<S>,
    credentials: Credentials,
) -> Result<(Session, Route), AuthError>
where
    A: AuthService,
    S: Storage,
{
    let session = service.login(credentials).await?;
    let route = guard.login(store, &session)?;
    info!("signed in as {}", session.email);
    Ok((session, route))
}

pub async fn sign_up<A, S>(
    service: &A,
    guard: &Guard,
    store: &SessionStore<S>,
    details: SignupDetails,
) -> Result<(Session, Route), AuthError>
where
    A: AuthService,
    S: Storage,
{
    let session = service.signup(details).await?;
    let route = guard.login(store, &session)?;
    info!("registered {}", session.display_name());
    Ok((session, route))
}

#[cfg(test)]
mod test {
    use futures::executor::block_on;

    use super::*;
    use crate::form::FormState;
    use crate::route::AccessState;
    use crate::session::MemoryStorage;

    struct Rejecting;

    impl AuthService for Rejecting {
        async fn login(&self, _: Credentials) -> Result<Session, AuthError> {
            Err(AuthError::MissingCredentials)
        }

        async fn signup(&self, _: SignupDetails) -> Result<Session, AuthError> {
            Err(AuthError::MissingCredentials)
        }
    }

    fn signup_values() -> FormState {
        FormState::with_values(
            signup_schema(),
            [
                ("companyName", "GreenLeaf Products"),
                ("firstName", "Amelia"),
                ("lastName", "Brown"),
                ("email", "amelia@greenleaf.example"),
                ("password", "correct horse"),
                ("companyDescription", "Compostable kitchenware"),
                ("address", "12 Fern Lane"),
            ],
        )
    }

    #[test]
    fn test_login_form_requires_both_fields() {
        let mut form = FormState::new(login_schema());
        form.set("email", "a@b.co");

        let errors = form.submit().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["password"], "Password is required");
    }

    #[test]
    fn test_signup_form_reports_every_empty_field() {
        let mut form = FormState::new(signup_schema());
        let errors = form.submit().unwrap_err();

        assert_eq!(errors.len(), 7);
        assert_eq!(errors["email"], "Please enter a valid email");
        assert_eq!(errors["password"], "Password must be at least 8 characters");
    }

    #[test]
    fn test_sign_in_stores_session() {
        let store = SessionStore::new(MemoryStorage::new(), "user");
        let guard = Guard::new();
        let credentials = Credentials {
            email: "seller@example.com".to_string(),
            password: "hunter22".to_string(),
        };

        let (session, route) = block_on(sign_in(&LocalAuth, &guard, &store, credentials)).unwrap();

        assert_eq!(route, Route::Dashboard);
        assert_eq!(session, Session::new("seller@example.com"));
        assert_eq!(store.get(), Some(session));
        assert_eq!(guard.state(), AccessState::Authenticated);
    }

    #[test]
    fn test_sign_in_with_empty_password_fails() {
        let store = SessionStore::new(MemoryStorage::new(), "user");
        let guard = Guard::new();
        let credentials = Credentials {
            email: "seller@example.com".to_string(),
            password: String::new(),
        };

        let result = block_on(sign_in(&LocalAuth, &guard, &store, credentials));

        assert_eq!(result, Err(AuthError::MissingCredentials));
        assert_eq!(store.get(), None);
        assert_eq!(guard.state(), AccessState::Public);
    }

    #[test]
    fn test_rejected_request_leaves_tab_public() {
        let store = SessionStore::new(MemoryStorage::new(), "user");
        let guard = Guard::new();
        let details = SignupDetails::from_values(signup_values().values());

        assert!(block_on(sign_up(&Rejecting, &guard, &store, details)).is_err());
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_sign_up_stores_company() {
        let store = SessionStore::new(MemoryStorage::new(), "user");
        let guard = Guard::new();
        let mut form = signup_values();
        let values = form.submit().unwrap();

        let (session, _) = block_on(sign_up(
            &LocalAuth,
            &guard,
            &store,
            SignupDetails::from_values(&values),
        ))
        .unwrap();

        assert_eq!(
            session,
            Session::with_company("amelia@greenleaf.example", "GreenLeaf Products")
        );
        assert_eq!(store.get(), Some(session));
    }

    #[test]
    fn test_empty_login_is_rejected() {
        let mut form = FormState::new(login_schema());
        form.set("email", "seller@example.com");

        let errors = form.submit().unwrap_err();
        assert_eq!(errors["password"], "Password is required");
        assert_eq!(login_rejection(&errors), Some(AuthError::MissingCredentials));
        assert_eq!(
            AuthError::MissingCredentials.to_string(),
            "Please check your credentials and try again."
        );
        assert_eq!(login_rejection(&FieldErrors::new()), None);
    }
}
