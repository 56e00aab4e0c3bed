//! Background content loading
//!
//! [`ContentLoader`] runs the profile and portfolio queries once on a worker
//! thread and hands the result back over a channel. The render loop polls it
//! without blocking. Each query fails on its own: a failed profile query
//! still leaves the portfolio loaded, and vice versa. Failures are logged and
//! the failed part settles to its placeholder.

use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, TryRecvError};
use std::thread;
use std::time::Duration;

use crate::content::{PageContent, PortfolioItem, PortfolioSource, Profile};
use crate::content_error::ContentError;

fn fetch<S: PortfolioSource>(source: &S) -> PageContent {
    let profile = source.get_profile().unwrap_or_else(|e| {
        log::error!("Error loading profile: {}", e);
        None
    });
    let portfolio = source.list_portfolio_items().unwrap_or_else(|e| {
        log::error!("Error loading portfolio: {}", e);
        Vec::new()
    });
    PageContent { profile, portfolio }
}

/// One-shot background loader for [`PageContent`]
pub struct ContentLoader {
    receiver: Option<Receiver<Result<PageContent, ContentError>>>,
    content: PageContent,
}

impl ContentLoader {
    /// Start loading from `source` on a worker thread
    pub fn spawn<S>(source: S) -> Self
    where
        S: PortfolioSource + Send + 'static,
    {
        let (tx, rx) = channel();

        thread::spawn(move || {
            // Receiver may already be gone if the app exited early
            let _ = tx.send(Ok(fetch(&source)));
        });

        Self {
            receiver: Some(rx),
            content: PageContent::default(),
        }
    }

    /// True until the worker has answered (or failed)
    pub fn is_loading(&self) -> bool {
        self.receiver.is_some()
    }

    pub fn content(&self) -> &PageContent {
        &self.content
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.content.profile.as_ref()
    }

    pub fn portfolio(&self) -> &[PortfolioItem] {
        &self.content.portfolio
    }

    /// Check for the worker's answer (non-blocking)
    ///
    /// Returns true exactly once: on the call where loading settles.
    pub fn poll(&mut self) -> bool {
        let Some(receiver) = &self.receiver else {
            return false;
        };
        let outcome = match receiver.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => Err(ContentError::WorkerGone),
        };
        self.settle(outcome);
        true
    }

    /// Block until loading settles or `timeout` elapses. Returns true if settled.
    pub fn wait(&mut self, timeout: Duration) -> bool {
        let Some(receiver) = &self.receiver else {
            return true;
        };
        let outcome = match receiver.recv_timeout(timeout) {
            Ok(result) => result,
            Err(RecvTimeoutError::Timeout) => return false,
            Err(RecvTimeoutError::Disconnected) => Err(ContentError::WorkerGone),
        };
        self.settle(outcome);
        true
    }

    fn settle(&mut self, outcome: Result<PageContent, ContentError>) {
        self.receiver = None;
        match outcome {
            Ok(content) => {
                log::info!(
                    "Loaded content: profile {}, {} portfolio items",
                    if content.profile.is_some() { "present" } else { "missing" },
                    content.portfolio.len()
                );
                self.content = content;
            }
            Err(e) => {
                log::error!("Error loading data: {}", e);
                self.content = PageContent::default();
            }
        }
    }
}
