//! A result cache wrapped around a pure, deterministic computation.
//!
//! The computation receives a [`Recur`] handle and must route its recursive
//! calls through it, so that every self-call hits the same cache. A memoizer
//! built with [`Memoizer::with_depth`] also bounds how many computations may be
//! nested in one call, and fails with `DepthExceeded` past that bound.

use crate::depth::Depth;
use crate::error::RecursionError;
use std::collections::HashMap;
use std::convert::Infallible;
use std::hash::Hash;

type Compute<'a, K, V, E> = dyn Fn(&mut Recur<'_, K, V, E>, &K) -> Result<V, E> + 'a;

struct Table<K, V> {
    entries: HashMap<K, V>,
    hits: u64,
    misses: u64,
}

pub struct Memoizer<K, V, E, F>
where
    K: Eq + Hash + Clone,
    V: Clone,
    F: Fn(&mut Recur<'_, K, V, E>, &K) -> Result<V, E>,
{
    table: Table<K, V>,
    compute: F,
    guard: Option<Guard<E>>,
}

/// Handle given to the computation for its self-calls.
pub struct Recur<'a, K, V, E> {
    table: &'a mut Table<K, V>,
    compute: &'a Compute<'a, K, V, E>,
    guard: Option<Guard<E>>,
}

struct Guard<E> {
    depth: Depth,
    exhausted: fn(RecursionError) -> E,
}

impl<E> Clone for Guard<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Guard<E> {}

impl<E> Guard<E> {
    fn descend(self) -> Result<Guard<E>, E> {
        Ok(Guard {
            depth: self.depth.descend().map_err(self.exhausted)?,
            exhausted: self.exhausted,
        })
    }
}

impl<K, V, E, F> Memoizer<K, V, E, F>
where
    K: Eq + Hash + Clone,
    V: Clone,
    F: Fn(&mut Recur<'_, K, V, E>, &K) -> Result<V, E>,
{
    /// A memoizer without a nesting bound: a cold call recurses as deep as
    /// the computation does.
    pub fn new(compute: F) -> Self {
        Self::build(compute, None)
    }

    fn build(compute: F, guard: Option<Guard<E>>) -> Self {
        Self {
            table: Table {
                entries: HashMap::new(),
                hits: 0,
                misses: 0,
            },
            compute,
            guard,
        }
    }

    /// Returns the cached value for `key`, computing and storing it on a miss.
    /// Errors are returned to the caller and never stored.
    pub fn get(&mut self, key: K) -> Result<V, E> {
        let compute: &Compute<'_, K, V, E> = &self.compute;
        lookup(&mut self.table, compute, self.guard, key)
    }

    /// The nesting bound, if any.
    pub fn depth_limit(&self) -> Option<usize> {
        self.guard.map(|g| g.depth.limit())
    }

    pub fn contains(&self, key: &K) -> bool {
        self.table.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.table.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.table.hits
    }

    /// Number of times the underlying computation was invoked.
    pub fn misses(&self) -> u64 {
        self.table.misses
    }
}

impl<K, V, E, F> Memoizer<K, V, E, F>
where
    K: Eq + Hash + Clone,
    V: Clone,
    E: From<RecursionError>,
    F: Fn(&mut Recur<'_, K, V, E>, &K) -> Result<V, E>,
{
    /// A memoizer allowing at most `depth.limit()` computations to be nested
    /// in a single call; the next one fails with `DepthExceeded`.
    pub fn with_depth(compute: F, depth: Depth) -> Self {
        Self::build(
            compute,
            Some(Guard {
                depth,
                exhausted: <E as From<RecursionError>>::from,
            }),
        )
    }
}

impl<K, V, F> Memoizer<K, V, Infallible, F>
where
    K: Eq + Hash + Clone,
    V: Clone,
    F: Fn(&mut Recur<'_, K, V, Infallible>, &K) -> Result<V, Infallible>,
{
    pub fn value(&mut self, key: K) -> V {
        match self.get(key) {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }
}

impl<K, V, E> Recur<'_, K, V, E>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn call(&mut self, key: K) -> Result<V, E> {
        lookup(self.table, self.compute, self.guard, key)
    }
}

fn lookup<K, V, E>(
    table: &mut Table<K, V>,
    compute: &Compute<'_, K, V, E>,
    guard: Option<Guard<E>>,
    key: K,
) -> Result<V, E>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    if let Some(value) = table.entries.get(&key) {
        table.hits += 1;
        return Ok(value.clone());
    }
    // only a miss nests another computation
    let guard = guard.map(Guard::descend).transpose()?;
    table.misses += 1;
    let mut recur = Recur {
        table: &mut *table,
        compute,
        guard,
    };
    let value = compute(&mut recur, &key)?;
    table.entries.insert(key, value.clone());
    Ok(value)
}

/// Memoizes a plain, non-recursive function.
pub fn memoize<K, V, G>(
    g: G,
) -> Memoizer<K, V, Infallible, impl Fn(&mut Recur<'_, K, V, Infallible>, &K) -> Result<V, Infallible>>
where
    K: Eq + Hash + Clone,
    V: Clone,
    G: Fn(&K) -> V,
{
    Memoizer::new(move |_: &mut Recur<'_, K, V, Infallible>, key: &K| Ok(g(key)))
}
