//! Request sequence tokens for views.
//!
//! Every fetch a view starts is tagged with a [`RequestToken`]. When the
//! fetch completes, its result is applied only if the token is still the
//! latest one issued by the view's [`RequestSequence`]; responses to
//! superseded selections are dropped.

use serde::Serialize;

/// Monotonic tag attached to one view fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RequestToken(u64);

impl RequestToken {
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// Issues [`RequestToken`]s for one view and remembers the latest.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    #[must_use]
    pub const fn new() -> Self {
        Self { latest: 0 }
    }

    /// Issue a token for a new fetch, superseding every earlier token.
    pub fn issue(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    /// Whether `token` belongs to the most recently issued fetch.
    #[must_use]
    pub const fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }

    /// The latest issued token, if any fetch has started.
    #[must_use]
    pub const fn latest(&self) -> Option<RequestToken> {
        if self.latest == 0 {
            None
        } else {
            Some(RequestToken(self.latest))
        }
    }
}
