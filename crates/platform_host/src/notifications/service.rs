//! Notification service contracts plus no-op and in-memory adapters.

use std::{cell::RefCell, rc::Rc};

use futures::future::LocalBoxFuture;

/// Object-safe boxed future used by [`NotificationService`].
pub type NotificationFuture<'a, T> = LocalBoxFuture<'a, T>;

/// Host service for user-visible notifications.
pub trait NotificationService {
    /// Shows a notification message to the user.
    fn notify<'a>(
        &'a self,
        title: &'a str,
        body: &'a str,
    ) -> NotificationFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op notification service for unsupported targets.
pub struct NoopNotificationService;

impl NotificationService for NoopNotificationService {
    fn notify<'a>(
        &'a self,
        _title: &'a str,
        _body: &'a str,
    ) -> NotificationFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One notification captured by [`MemoryNotificationService`].
pub struct NotificationRecord {
    /// Notification title.
    pub title: String,
    /// Notification body.
    pub body: String,
}

#[derive(Debug, Clone, Default)]
/// In-memory notification service that keeps delivered notifications.
pub struct MemoryNotificationService {
    delivered: Rc<RefCell<Vec<NotificationRecord>>>,
}

impl MemoryNotificationService {
    /// Returns delivered notifications, oldest first.
    pub fn delivered(&self) -> Vec<NotificationRecord> {
        self.delivered.borrow().clone()
    }
}

impl NotificationService for MemoryNotificationService {
    fn notify<'a>(
        &'a self,
        title: &'a str,
        body: &'a str,
    ) -> NotificationFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.delivered.borrow_mut().push(NotificationRecord {
                title: title.to_string(),
                body: body.to_string(),
            });
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
    fn memory_service_keeps_delivery_order() {
        let service = MemoryNotificationService::default();
        block_on(service.notify("Music Player", "Cannot play")).expect("first");
        block_on(service.notify("System", "")).expect("second");

        let titles: Vec<_> = service
            .delivered()
            .into_iter()
            .map(|record| record.title)
            .collect();
        assert_eq!(titles, vec!["Music Player".to_string(), "System".to_string()]);
    }
}
