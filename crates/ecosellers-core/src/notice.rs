#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Default,
    Destructive,
}

/// A transient, dismissible message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

impl Notice {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: Variant::Default,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: Variant::Destructive,
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == Variant::Destructive
    }

    pub fn auth_required() -> Self {
        Self::error(
            "Authentication required",
            "Please login to access the dashboard.",
        )
    }

    pub fn logged_out() -> Self {
        Self::info("Logged out", "You have been logged out successfully.")
    }

    pub fn logout_failed(reason: impl std::fmt::Display) -> Self {
        Self::error("Logout failed", reason.to_string())
    }

    pub fn login_succeeded(app_name: &str) -> Self {
        Self::info("Login successful", format!("Welcome back to {app_name}!"))
    }

    pub fn login_failed(reason: impl std::fmt::Display) -> Self {
        Self::error("Login failed", reason.to_string())
    }

    pub fn signup_succeeded(app_name: &str) -> Self {
        Self::info("Registration successful", format!("Welcome to {app_name}!"))
    }

    pub fn signup_failed(reason: impl std::fmt::Display) -> Self {
        Self::error("Registration failed", reason.to_string())
    }
}
