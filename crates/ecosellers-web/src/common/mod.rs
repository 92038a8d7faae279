pub mod events;

pub mod icons;

mod logo;
pub use logo::Logo;

mod auth_layout;
pub use auth_layout::AuthLayout;

mod layout;
pub use layout::DashboardLayout;

mod spinner;
pub use spinner::Spinner;

mod modal;
pub use modal::Modal;

mod form;
pub use form::Form;

mod cards;
pub use cards::*;

pub mod chart;

pub mod route;

pub mod snackbar;
