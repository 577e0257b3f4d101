//! Clock devices and the clock registry.
//!
//! The registry is the process-wide name→clock table, modeled as an
//! explicitly passed object rather than a hidden singleton so discovery and
//! tests can supply a fresh one per run. It provides:
//! 1. **Operations:** The `ClockOps` trait every clock implementation fills in.
//! 2. **Devices:** `Clock`, a registered device with flags and an optional rate cache.
//! 3. **Registration:** Unique-name registration, alias binding, and alias lookup.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use bitflags::bitflags;

use crate::common::{Error, Result};

bitflags! {
    /// Registration flags for a clock device.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ClockFlags: u32 {
        /// The clock has no parent; its implementation is the rate source.
        const ROOT = 1 << 0;
        /// The framework must re-query the rate on every read instead of
        /// trusting a cached value.
        const RATE_NOCACHE = 1 << 1;
    }
}

/// Operations a clock implementation provides to the framework.
///
/// Implementations must be `Send + Sync`: after discovery, independent
/// callers may invoke these concurrently.
pub trait ClockOps: Send + Sync {
    /// Recomputes the current rate from the underlying source.
    ///
    /// # Arguments
    ///
    /// * `parent_rate` - The parent clock's rate; zero for root clocks.
    fn recalc_rate(&self, parent_rate: u64) -> Result<u64>;

    /// Rounds a desired rate to the nearest rate the clock supports.
    fn round_rate(&self, desired: u64, parent_rate: u64) -> u64;

    /// Programs the clock to the given rate.
    fn set_rate(&self, rate: u64, parent_rate: u64) -> Result<()>;
}

/// A registered clock device.
///
/// Handles are shared (`ClockHandle`); all methods take `&self`.
pub struct Clock {
    name: String,
    flags: ClockFlags,
    ops: Box<dyn ClockOps>,
    /// Last known rate; consulted only when `RATE_NOCACHE` is clear.
    cached_rate: Mutex<Option<u64>>,
}

/// Shared handle to a registered clock.
pub type ClockHandle = Arc<Clock>;

impl fmt::Debug for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Clock")
            .field("name", &self.name)
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}

impl Clock {
    /// Returns the clock's registered name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the registration flags.
    pub fn flags(&self) -> ClockFlags {
        self.flags
    }

    /// Returns the clock's current rate.
    ///
    /// With `RATE_NOCACHE` set the implementation is queried every time;
    /// otherwise a previously observed rate is returned when available.
    pub fn rate(&self) -> Result<u64> {
        if !self.flags.contains(ClockFlags::RATE_NOCACHE) {
            let cached = self
                .cached_rate
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            if let Some(rate) = *cached {
                return Ok(rate);
            }
        }
        let rate = self.ops.recalc_rate(0)?;
        *self
            .cached_rate
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(rate);
        Ok(rate)
    }

    /// Rounds `desired` to the nearest rate this clock supports.
    pub fn round_rate(&self, desired: u64) -> u64 {
        self.ops.round_rate(desired, 0)
    }

    /// Rounds and programs a new rate.
    ///
    /// Cached clocks record the rounded rate so the next read skips the
    /// implementation; `RATE_NOCACHE` clocks leave the cache untouched.
    pub fn set_rate(&self, rate: u64) -> Result<()> {
        let rounded = self.ops.round_rate(rate, 0);
        self.ops.set_rate(rounded, 0)?;
        if !self.flags.contains(ClockFlags::RATE_NOCACHE) {
            *self
                .cached_rate
                .lock()
                .unwrap_or_else(PoisonError::into_inner) = Some(rounded);
        }
        Ok(())
    }
}

/// The clock framework's name→handle table with alias bindings.
///
/// Clock names and aliases are each globally unique. An optional capacity
/// limit models allocation failure: registration beyond it yields
/// [`Error::OutOfMemory`].
#[derive(Debug, Default)]
pub struct ClockRegistry {
    clocks: HashMap<String, ClockHandle>,
    aliases: HashMap<String, ClockHandle>,
    capacity: Option<usize>,
}

impl ClockRegistry {
    /// Creates an empty registry without a capacity limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry that refuses registrations beyond `limit`.
    pub fn with_capacity_limit(limit: usize) -> Self {
        Self {
            clocks: HashMap::new(),
            aliases: HashMap::new(),
            capacity: Some(limit),
        }
    }

    /// Registers a clock under a unique name.
    ///
    /// # Arguments
    ///
    /// * `name` - Clock name; must be non-empty and unused.
    /// * `flags` - Registration flags.
    /// * `ops` - The clock implementation.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidName`] for an empty name, [`Error::OutOfMemory`] when
    /// the capacity limit is reached, and [`Error::Registration`] when the
    /// name is already taken.
    pub fn register(
        &mut self,
        name: &str,
        flags: ClockFlags,
        ops: Box<dyn ClockOps>,
    ) -> Result<ClockHandle> {
        if name.is_empty() {
            return Err(Error::InvalidName);
        }
        if let Some(limit) = self.capacity {
            if self.clocks.len() >= limit {
                return Err(Error::OutOfMemory);
            }
        }
        if self.clocks.contains_key(name) {
            return Err(Error::Registration(name.to_owned()));
        }
        let clock = Arc::new(Clock {
            name: name.to_owned(),
            flags,
            ops,
            cached_rate: Mutex::new(None),
        });
        let _ = self.clocks.insert(name.to_owned(), Arc::clone(&clock));
        Ok(clock)
    }

    /// Binds a lookup alias to a registered clock.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidName`] for an empty alias and [`Error::Registration`]
    /// when the alias is already bound.
    pub fn bind_alias(&mut self, handle: &ClockHandle, alias: &str) -> Result<()> {
        if alias.is_empty() {
            return Err(Error::InvalidName);
        }
        if self.aliases.contains_key(alias) {
            return Err(Error::Registration(alias.to_owned()));
        }
        let _ = self.aliases.insert(alias.to_owned(), Arc::clone(handle));
        Ok(())
    }

    /// Looks a clock up by alias.
    pub fn lookup(&self, alias: &str) -> Option<ClockHandle> {
        self.aliases.get(alias).cloned()
    }

    /// Returns the clock registered under `name`, if any.
    pub fn get(&self, name: &str) -> Option<ClockHandle> {
        self.clocks.get(name).cloned()
    }

    /// Returns the number of registered clocks.
    pub fn len(&self) -> usize {
        self.clocks.len()
    }

    /// Returns `true` if no clock has been registered.
    pub fn is_empty(&self) -> bool {
        self.clocks.is_empty()
    }
}
