use log::{debug, trace};

use super::config::{DeletePolicy, TableConfig};
use super::fnv::fnv1a;
use super::{ConfigError, TableError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Entry<V> {
    pub(crate) key: String,
    pub(crate) value: V,
}

/// Open-addressing hash table with linear probing, keyed by strings.
///
/// Every entry lives directly in `slots`. A key's home slot is
/// `fnv1a(key) % capacity`, and a collision moves on to the next slot,
/// wrapping at the end. The table doubles before `items / capacity` can
/// stay at or above `max_load` and halves once it drops below `min_load`.
#[derive(Debug)]
pub struct HashTable<V> {
    slots: Vec<Option<Entry<V>>>,
    items: usize,
    /// Capacity floor for shrinking, recomputed on every resize
    min_capacity: usize,
    config: TableConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Resize {
    Grow,
    Shrink,
}

/// Where a probe for some key stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Probe {
    Found(usize),
    Vacant(usize),
    /// Walked every slot without meeting the key or a hole
    Exhausted,
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self::from_valid(TableConfig::default())
    }
}

impl<V> HashTable<V> {
    /// Creates a table with the default configuration:
    /// 10 slots, grow at 0.75, shrink below 0.25
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table sized and tuned by `config`
    pub fn with_config(config: TableConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: TableConfig) -> Self {
        Self {
            slots: Self::empty_slots(config.initial_capacity),
            items: 0,
            min_capacity: config.initial_capacity,
            config,
        }
    }

    /// Returns the number of stored keys
    pub fn len(&self) -> usize {
        self.items
    }

    /// Shorthand for `self.len() == 0`
    pub fn is_empty(&self) -> bool {
        self.items == 0
    }

    /// Returns the number of slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the capacity below which the table will not shrink
    pub fn min_capacity(&self) -> usize {
        self.min_capacity
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Returns the load factor of the table,
    /// computed as num of items / num of slots
    pub fn load_factor(&self) -> f64 {
        if self.capacity() == 0 {
            0f64
        } else {
            self.items as f64 / self.capacity() as f64
        }
    }

    /// Insert a key-value pair into the table,
    /// returning the previous value (if there was any)
    ///
    /// The key itself is kept from the first insert; an equal key only
    /// replaces the value.
    pub fn insert(&mut self, key: &str, value: V) -> Option<V> {
        while self.load_factor() >= self.config.max_load {
            self.resize(Resize::Grow);
        }

        let slot = loop {
            match self.probe(key) {
                Probe::Exhausted => self.resize(Resize::Grow),
                found_or_vacant => break found_or_vacant,
            }
        };

        let old = match slot {
            Probe::Found(i) => self.slots[i]
                .as_mut()
                .map(|entry| std::mem::replace(&mut entry.value, value)),
            Probe::Vacant(i) => {
                self.slots[i] = Some(Entry {
                    key: key.into(),
                    value,
                });
                self.items += 1;
                None
            }
            Probe::Exhausted => None,
        };

        // one doubling is not enough when max_load is below one half
        while self.load_factor() >= self.config.max_load {
            self.resize(Resize::Grow);
        }
        // exact equality, not a threshold
        if self.items == self.min_capacity && self.capacity() > self.min_capacity {
            self.resize(Resize::Shrink);
        }

        old
    }

    pub fn get(&self, key: &str) -> Result<&V, TableError> {
        self.get_key_value(key).map(|(_, v)| v)
    }

    /// Returns the stored key next to its value
    pub fn get_key_value(&self, key: &str) -> Result<(&str, &V), TableError> {
        self.find(key)
            .and_then(|i| self.slots[i].as_ref())
            .map(|entry| (entry.key.as_str(), &entry.value))
            .ok_or_else(|| TableError::KeyNotFound { key: key.into() })
    }

    pub fn get_mut(&mut self, key: &str) -> Result<&mut V, TableError> {
        match self.find(key) {
            Some(i) => self.slots[i]
                .as_mut()
                .map(|entry| &mut entry.value)
                .ok_or_else(|| TableError::KeyNotFound { key: key.into() }),
            None => Err(TableError::KeyNotFound { key: key.into() }),
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Removes `key`, returning its value if it was reachable.
    ///
    /// May halve the table when the load factor drops below `min_load`.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let i = self.find(key)?;
        let entry = self.slots[i].take()?;
        self.items -= 1;

        if self.config.delete_policy == DeletePolicy::BackShift {
            self.back_shift(i);
        }

        if self.load_factor() < self.config.min_load && self.capacity() > self.min_capacity {
            self.resize(Resize::Shrink);
        }

        Some(entry.value)
    }

    /// Removes `key` if present. A missing key is not an error.
    pub fn delete(&mut self, key: &str) {
        if self.remove(key).is_none() {
            trace!(target: "delete", "key {key:?} not present, nothing to do");
        }
    }

    /// Drops every entry and goes back to the configured initial capacity
    pub fn clear(&mut self) {
        self.slots = Self::empty_slots(self.config.initial_capacity);
        self.items = 0;
        self.min_capacity = self.config.initial_capacity;
    }

    // [private]

    fn hash(key: &str) -> u64 {
        fnv1a(key.as_bytes())
    }

    /// Home slot of `key` in a table of `cap` slots
    fn idx_in(key: &str, cap: usize) -> usize {
        (Self::hash(key) % cap as u64) as usize
    }

    fn idx(&self, key: &str) -> usize {
        Self::idx_in(key, self.capacity())
    }

    fn empty_slots(cap: usize) -> Vec<Option<Entry<V>>> {
        (0..cap).map(|_| None).collect()
    }

    /// Walks the chain starting at the home slot of `key`,
    /// visiting each slot at most once
    fn probe(&self, key: &str) -> Probe {
        let cap = self.capacity();
        if cap == 0 {
            return Probe::Exhausted;
        }

        let mut i = self.idx(key);
        for _ in 0..cap {
            match &self.slots[i] {
                None => return Probe::Vacant(i),
                Some(entry) if entry.key == key => return Probe::Found(i),
                Some(_) => i = (i + 1) % cap,
            }
        }

        trace!(target: "probe", "probe for {key:?} visited all {cap} slots");
        Probe::Exhausted
    }

    fn find(&self, key: &str) -> Option<usize> {
        match self.probe(key) {
            Probe::Found(i) => Some(i),
            Probe::Vacant(_) | Probe::Exhausted => None,
        }
    }

    /// Closes the hole at `hole` by pulling later chain members back.
    ///
    /// An entry at `i` may fill the hole unless its home slot lies
    /// cyclically in `(hole, i]`; moving it would put it before its home.
    fn back_shift(&mut self, mut hole: usize) {
        let cap = self.capacity();
        let mut i = (hole + 1) % cap;

        loop {
            let home = match &self.slots[i] {
                Some(entry) => Self::idx_in(&entry.key, cap),
                None => break,
            };

            if !cyclic_between(hole, home, i) {
                trace!(target: "back_shift", "moving slot {i} (home {home}) into {hole}");
                self.slots[hole] = self.slots[i].take();
                hole = i;
            }
            i = (i + 1) % cap;
        }
    }

    /// Rebuilds the table at double or half the capacity.
    ///
    /// Entries are re-placed in slot order with fresh probing. Two equal
    /// keys (left behind by `DeletePolicy::Clear`) collapse into one.
    fn resize(&mut self, direction: Resize) {
        let old_cap = self.capacity();
        let new_cap = match direction {
            Resize::Grow => (old_cap * 2).max(1),
            Resize::Shrink => old_cap / 2,
        };

        if direction == Resize::Shrink && !self.fits(new_cap) {
            trace!(
                target: "resize",
                "skipping shrink {old_cap} -> {new_cap}, {} items would overload it",
                self.items
            );
            return;
        }

        let mut slots = Self::empty_slots(new_cap);
        let mut items = 0;
        for entry in std::mem::take(&mut self.slots).into_iter().flatten() {
            if Self::place(&mut slots, entry) {
                items += 1;
            }
        }

        if items != self.items {
            debug!(
                target: "resize",
                "collapsed {} duplicate keys while rebuilding",
                self.items - items
            );
        }

        self.slots = slots;
        self.items = items;
        self.min_capacity = (new_cap as f64 * self.config.min_load) as usize;

        debug!(
            target: "resize",
            "{direction:?} {old_cap} -> {new_cap} slots, {items} items, min capacity {}",
            self.min_capacity
        );
    }

    /// Whether `items` fit into `cap` slots without reaching `max_load`
    fn fits(&self, cap: usize) -> bool {
        cap > 0 && (self.items as f64 / cap as f64) < self.config.max_load
    }

    /// Inserts `entry` into `slots`, returning `false` if an equal key was
    /// already there and only its value got replaced.
    ///
    /// `slots` must have a vacant slot.
    fn place(slots: &mut [Option<Entry<V>>], entry: Entry<V>) -> bool {
        let cap = slots.len();
        let mut i = Self::idx_in(&entry.key, cap);
        loop {
            match slots[i].as_mut() {
                Some(existing) if existing.key == entry.key => {
                    existing.value = entry.value;
                    return false;
                }
                Some(_) => i = (i + 1) % cap,
                None => {
                    slots[i] = Some(entry);
                    return true;
                }
            }
        }
    }
}

/// Is `x` in the cyclic half-open range `(lo, hi]`
fn cyclic_between(lo: usize, x: usize, hi: usize) -> bool {
    if lo <= hi {
        lo < x && x <= hi
    } else {
        lo < x || x <= hi
    }
}
