// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use cancellation::{CancellationToken, CancellationTokenSource};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Tells an iterative search when to stop deepening: either somebody cancels
/// the token, or the deadline passes. Only the iteration loop consults it,
/// between depths; a search already underway always runs to completion.
#[derive(Clone)]
pub struct Cutoff {
    token: Arc<CancellationToken>,
    deadline: Option<Instant>,
}

impl Cutoff {
    pub fn new(token: Arc<CancellationToken>) -> Cutoff {
        Cutoff {
            token,
            deadline: None,
        }
    }

    /// A cutoff that never expires.
    pub fn never() -> Cutoff {
        let cts = CancellationTokenSource::new();
        Cutoff::new(cts.token().clone())
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Cutoff {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_budget(self, budget: Duration) -> Cutoff {
        self.with_deadline(Instant::now() + budget)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn expired(&self) -> bool {
        if self.token.is_canceled() {
            return true;
        }

        self.deadline.map_or(false, |deadline| Instant::now() >= deadline)
    }
}
