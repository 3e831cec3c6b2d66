//! Modal dialog contracts (text prompts).

use std::{cell::RefCell, collections::VecDeque, rc::Rc};

use futures::future::LocalBoxFuture;

/// Object-safe boxed future used by [`DialogService`].
pub type DialogFuture<'a, T> = LocalBoxFuture<'a, T>;

/// Host service for simple modal dialogs.
pub trait DialogService {
    /// Asks the user for a line of text.
    ///
    /// Resolves to `None` when the user cancels or the host cannot show prompts.
    fn prompt<'a>(&'a self, message: &'a str, default_value: &'a str)
        -> DialogFuture<'a, Option<String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Dialog service that always behaves as if the user cancelled.
pub struct NoopDialogService;

impl DialogService for NoopDialogService {
    fn prompt<'a>(
        &'a self,
        _message: &'a str,
        _default_value: &'a str,
    ) -> DialogFuture<'a, Option<String>> {
        Box::pin(async { None })
    }
}

#[derive(Debug, Clone, Default)]
/// Dialog service answering prompts from a prepared queue of responses.
pub struct ScriptedDialogService {
    responses: Rc<RefCell<VecDeque<Option<String>>>>,
    asked: Rc<RefCell<Vec<String>>>,
}

impl ScriptedDialogService {
    /// Creates a service that answers prompts with `responses` in order, then cancels.
    pub fn new(responses: impl IntoIterator<Item = Option<String>>) -> Self {
        Self {
            responses: Rc::new(RefCell::new(responses.into_iter().collect())),
            asked: Rc::default(),
        }
    }

    /// Returns the prompt messages shown so far.
    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }
}

impl DialogService for ScriptedDialogService {
    fn prompt<'a>(
        &'a self,
        message: &'a str,
        _default_value: &'a str,
    ) -> DialogFuture<'a, Option<String>> {
        Box::pin(async move {
            self.asked.borrow_mut().push(message.to_string());
            self.responses.borrow_mut().pop_front().flatten()
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn scripted_service_replays_answers_then_cancels() {
        let dialogs = ScriptedDialogService::new([Some("a.mp3".to_string()), None]);

        assert_eq!(block_on(dialogs.prompt("first", "")), Some("a.mp3".to_string()));
        assert_eq!(block_on(dialogs.prompt("second", "")), None);
        assert_eq!(block_on(dialogs.prompt("third", "")), None);
        assert_eq!(dialogs.asked().len(), 3);
    }

    #[test]
    fn noop_service_cancels() {
        assert_eq!(block_on(NoopDialogService.prompt("url?", "")), None);
    }
}
