//! Page/session navigation contracts.

use std::{cell::RefCell, rc::Rc};

use futures::future::LocalBoxFuture;

/// Object-safe boxed future used by [`SessionService`].
pub type SessionFuture<'a, T> = LocalBoxFuture<'a, T>;

/// Host service controlling the running page session.
pub trait SessionService {
    /// Reloads the page, discarding all in-memory desktop state.
    fn reload<'a>(&'a self) -> SessionFuture<'a, Result<(), String>>;

    /// Navigates the current browsing context to `url` (used for `mailto:` links).
    fn navigate<'a>(&'a self, url: &'a str) -> SessionFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op session service for unsupported targets.
pub struct NoopSessionService;

impl SessionService for NoopSessionService {
    fn reload<'a>(&'a self) -> SessionFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn navigate<'a>(&'a self, _url: &'a str) -> SessionFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Session request captured by [`MemorySessionService`].
pub enum SessionRequest {
    /// A page reload was requested.
    Reload,
    /// Navigation to a URL was requested.
    Navigate(String),
}

#[derive(Debug, Clone, Default)]
/// In-memory session service that records requests instead of performing them.
pub struct MemorySessionService {
    requests: Rc<RefCell<Vec<SessionRequest>>>,
}

impl MemorySessionService {
    /// Returns recorded requests, oldest first.
    pub fn requests(&self) -> Vec<SessionRequest> {
        self.requests.borrow().clone()
    }
}

impl SessionService for MemorySessionService {
    fn reload<'a>(&'a self) -> SessionFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.requests.borrow_mut().push(SessionRequest::Reload);
            Ok(())
        })
    }

    fn navigate<'a>(&'a self, url: &'a str) -> SessionFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.requests
                .borrow_mut()
                .push(SessionRequest::Navigate(url.to_string()));
            Ok(())
        })
    }
}
