//! Route access gate.

use crate::session::SessionState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    /// Signed-in admin only.
    Protected,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gate {
    Render,
    /// Session still resolving; show a placeholder.
    Pending,
    RedirectToLogin,
}

pub fn decide(access: Access, session: &SessionState) -> Gate {
    match access {
        Access::Public => Gate::Render,
        Access::Protected if session.loading => Gate::Pending,
        Access::Protected if session.signed_in() => Gate::Render,
        Access::Protected => Gate::RedirectToLogin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::AdminInfo;

    fn signed_in() -> SessionState {
        SessionState {
            admin: Some(AdminInfo {
                id: "1".into(),
                email: "admin@example.com".into(),
            }),
            loading: false,
        }
    }

    fn signed_out() -> SessionState {
        SessionState {
            admin: None,
            loading: false,
        }
    }

    #[test]
    fn test_public_always_renders() {
        for session in [SessionState::default(), signed_in(), signed_out()] {
            assert_eq!(decide(Access::Public, &session), Gate::Render);
        }
    }

    #[test]
    fn test_protected_waits_for_session() {
        assert_eq!(
            decide(Access::Protected, &SessionState::default()),
            Gate::Pending
        );
    }

    #[test]
    fn test_protected_outcomes() {
        assert_eq!(decide(Access::Protected, &signed_in()), Gate::Render);
        assert_eq!(
            decide(Access::Protected, &signed_out()),
            Gate::RedirectToLogin
        );
    }
}
