//! External URL host-service contracts.

use std::{cell::RefCell, rc::Rc};

use futures::future::LocalBoxFuture;

/// Object-safe boxed future used by [`ExternalUrlService`].
pub type ExternalUrlFuture<'a, T> = LocalBoxFuture<'a, T>;

/// Host service for opening external URLs outside the desktop.
pub trait ExternalUrlService {
    /// Opens a URL in a new browsing context.
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op external URL service for unsupported targets.
pub struct NoopExternalUrlService;

impl ExternalUrlService for NoopExternalUrlService {
    fn open_url<'a>(&'a self, _url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory external URL service that records every opened URL.
pub struct MemoryExternalUrlService {
    opened: Rc<RefCell<Vec<String>>>,
}

impl MemoryExternalUrlService {
    /// Returns the URLs opened so far, oldest first.
    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl ExternalUrlService for MemoryExternalUrlService {
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async move {
            let url = url.trim();
            if url.is_empty() {
                return Err("external url is empty".to_string());
            }
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_service_records_trimmed_urls_and_rejects_blank_ones() {
        let service = MemoryExternalUrlService::default();

        assert_eq!(block_on(service.open_url(" https://github.com ")), Ok(()));
        assert!(block_on(service.open_url("   ")).is_err());

        assert_eq!(service.opened(), vec!["https://github.com".to_string()]);
    }
}
