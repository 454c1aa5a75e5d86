//! Short-lived read cache in front of `load_table`.

use super::{Grid, TableStore};
use crate::errors::AppResult;
use std::time::{Duration, Instant};

pub struct CachedStore<S: TableStore> {
    inner: S,
    ttl: Duration,
    cached: Option<(Instant, Grid)>,
}

impl<S: TableStore> CachedStore<S> {
    /// A zero `ttl` disables caching.
    pub fn new(inner: S, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            cached: None,
        }
    }

    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    fn fresh(&self) -> Option<&Grid> {
        match &self.cached {
            Some((at, grid)) if at.elapsed() < self.ttl => Some(grid),
            _ => None,
        }
    }
}

impl<S: TableStore> TableStore for CachedStore<S> {
    fn name(&self) -> String {
        self.inner.name()
    }

    fn load_table(&mut self) -> AppResult<Grid> {
        if let Some(grid) = self.fresh() {
            return Ok(grid.clone());
        }

        let grid = self.inner.load_table()?;
        if !self.ttl.is_zero() {
            self.cached = Some((Instant::now(), grid.clone()));
        }
        Ok(grid)
    }

    fn replace_table(&mut self, rows: &[Vec<String>]) -> AppResult<()> {
        self.invalidate();
        self.inner.replace_table(rows)
    }

    fn initialize(&mut self) -> AppResult<bool> {
        self.invalidate();
        self.inner.initialize()
    }
}
