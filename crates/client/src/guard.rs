//! Render-vs-redirect decisions for role-gated views.
//!
//! Pure functions of the session and the allowed role set, so the whole
//! decision table is unit-testable without any rendering environment.
//! Callers decide what a redirect looks like (the CLI prints a login
//! hint and exits non-zero).

use cafenet_core::Role;

use crate::session::Session;

/// A navigable surface of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    AdminDashboard,
    StaffDashboard,
    CustomerDashboard,
}

impl Route {
    /// The path the browser front-end mounted this surface on.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::AdminDashboard => "/admin",
            Self::StaffDashboard => "/staff",
            Self::CustomerDashboard => "/customer",
        }
    }
}

/// Outcome of an authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Render the guarded view.
    Granted,
    /// Send the caller to this route instead.
    Redirect(Route),
}

/// Decide whether `session` may open a view restricted to `allowed`.
///
/// An empty `allowed` set admits any authenticated session. A missing or
/// unauthorized session always becomes a redirect to login, never an
/// error.
#[must_use]
pub fn authorize(session: Option<&Session>, allowed: &[Role]) -> Access {
    match session {
        Some(session) if allowed.is_empty() || allowed.contains(&session.role) => Access::Granted,
        _ => Access::Redirect(Route::Login),
    }
}

/// Dashboard a freshly logged-in `role` lands on.
#[must_use]
pub const fn landing(role: Role) -> Route {
    match role {
        Role::Admin => Route::AdminDashboard,
        Role::Staff => Route::StaffDashboard,
        Role::Customer => Route::CustomerDashboard,
    }
}
