//! Visitor Queue - The lookahead buffer of approaching visitors
//!
//! Draws are uniform, independent and with replacement, so the same
//! visitor may appear twice in a row.

use std::collections::VecDeque;
use std::sync::Arc;

use crate::catalog::Catalog;
use crate::model::visitor::Visitor;
use crate::port::random::RandomSource;

/// Target length of the lookahead buffer
pub const QUEUE_SIZE: usize = 5;

pub struct VisitorQueue {
    catalog: Arc<Catalog>,
    rng: Box<dyn RandomSource>,
    buffer: VecDeque<Arc<Visitor>>,
}

impl VisitorQueue {
    /// Create an empty queue over `catalog`
    pub fn new(catalog: Arc<Catalog>, rng: Box<dyn RandomSource>) -> Self {
        Self {
            catalog,
            rng,
            buffer: VecDeque::with_capacity(QUEUE_SIZE),
        }
    }

    /// Clear the buffer and refill it with `QUEUE_SIZE` fresh draws
    pub fn initialize(&mut self) {
        self.buffer.clear();
        for _ in 0..QUEUE_SIZE {
            let visitor = self.draw();
            self.buffer.push_back(visitor);
        }
    }

    /// Take the head and top the buffer back up to `QUEUE_SIZE`
    pub fn next(&mut self) -> Arc<Visitor> {
        if self.buffer.is_empty() {
            self.initialize();
        }

        let head = match self.buffer.pop_front() {
            Some(visitor) => visitor,
            None => self.draw(),
        };
        let replacement = self.draw();
        self.buffer.push_back(replacement);
        head
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Visitors waiting at the gate, nearest first
    pub fn upcoming(&self) -> Vec<Arc<Visitor>> {
        self.buffer.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    fn draw(&mut self) -> Arc<Visitor> {
        let visitors = self.catalog.all();
        // a constructed catalog is never empty
        let index = self.rng.pick(visitors.len()) % visitors.len();
        Arc::clone(&visitors[index])
    }
}

impl core::fmt::Debug for VisitorQueue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VisitorQueue")
            .field(
                "buffer",
                &self.buffer.iter().map(|v| v.id().as_str()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
