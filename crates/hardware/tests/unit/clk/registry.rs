//! Clock Registry Unit Tests.
//!
//! Verifies unique-name registration, alias binding and lookup, capacity
//! exhaustion, and the rate-cache behavior of the `RATE_NOCACHE` flag.

use std::sync::Mutex;

use perfclk_core::clk::{ClockFlags, ClockOps, ClockRegistry};
use perfclk_core::common::{Error, Result};

/// Minimal clock implementation over a mutable level cell.
struct FixedRateOps {
    rate: Mutex<u64>,
}

impl FixedRateOps {
    fn new(rate: u64) -> Box<Self> {
        Box::new(Self {
            rate: Mutex::new(rate),
        })
    }
}

impl ClockOps for FixedRateOps {
    fn recalc_rate(&self, _parent_rate: u64) -> Result<u64> {
        Ok(*self.rate.lock().unwrap())
    }

    fn round_rate(&self, desired: u64, _parent_rate: u64) -> u64 {
        desired
    }

    fn set_rate(&self, rate: u64, _parent_rate: u64) -> Result<()> {
        *self.rate.lock().unwrap() = rate;
        Ok(())
    }
}

#[test]
fn register_and_get_by_name() {
    let mut registry = ClockRegistry::new();
    let clock = registry
        .register("osc0", ClockFlags::ROOT, FixedRateOps::new(24_000_000))
        .unwrap();
    assert_eq!(clock.name(), "osc0");
    assert_eq!(registry.len(), 1);
    assert!(registry.get("osc0").is_some());
}

#[test]
fn register_empty_name_rejected() {
    let mut registry = ClockRegistry::new();
    let err = registry
        .register("", ClockFlags::ROOT, FixedRateOps::new(0))
        .unwrap_err();
    assert_eq!(err, Error::InvalidName);
    assert!(registry.is_empty());
}

#[test]
fn register_duplicate_name_rejected() {
    let mut registry = ClockRegistry::new();
    let _ = registry
        .register("osc0", ClockFlags::ROOT, FixedRateOps::new(1))
        .unwrap();
    let err = registry
        .register("osc0", ClockFlags::ROOT, FixedRateOps::new(2))
        .unwrap_err();
    assert_eq!(err, Error::Registration("osc0".to_owned()));
    assert_eq!(registry.len(), 1, "Failed registration must not replace");
}

#[test]
fn capacity_limit_yields_out_of_memory() {
    let mut registry = ClockRegistry::with_capacity_limit(1);
    let _ = registry
        .register("osc0", ClockFlags::ROOT, FixedRateOps::new(1))
        .unwrap();
    let err = registry
        .register("osc1", ClockFlags::ROOT, FixedRateOps::new(2))
        .unwrap_err();
    assert_eq!(err, Error::OutOfMemory);
}

#[test]
fn alias_binding_and_lookup() {
    let mut registry = ClockRegistry::new();
    let clock = registry
        .register("osc0", ClockFlags::ROOT, FixedRateOps::new(1))
        .unwrap();
    registry.bind_alias(&clock, "sys-osc").unwrap();
    let found = registry.lookup("sys-osc").unwrap();
    assert_eq!(found.name(), "osc0");
}

#[test]
fn alias_lookup_unknown_is_none() {
    let registry = ClockRegistry::new();
    assert!(registry.lookup("nothing").is_none());
}

#[test]
fn alias_duplicate_rejected() {
    let mut registry = ClockRegistry::new();
    let first = registry
        .register("osc0", ClockFlags::ROOT, FixedRateOps::new(1))
        .unwrap();
    let second = registry
        .register("osc1", ClockFlags::ROOT, FixedRateOps::new(2))
        .unwrap();
    registry.bind_alias(&first, "sys-osc").unwrap();
    let err = registry.bind_alias(&second, "sys-osc").unwrap_err();
    assert_eq!(err, Error::Registration("sys-osc".to_owned()));
}

#[test]
fn cached_clock_reads_implementation_once() {
    let ops = FixedRateOps::new(7);
    let reads = std::sync::Arc::new(Mutex::new(0u32));
    let counter = CountingOps {
        inner: ops,
        reads: std::sync::Arc::clone(&reads),
    };
    let mut registry = ClockRegistry::new();
    let clock = registry
        .register("osc0", ClockFlags::ROOT, Box::new(counter))
        .unwrap();
    assert_eq!(clock.rate().unwrap(), 7);
    assert_eq!(clock.rate().unwrap(), 7);
    assert_eq!(
        *reads.lock().unwrap(),
        1,
        "Without RATE_NOCACHE the second read must come from the cache"
    );
}

/// Wraps another implementation and counts recalc queries.
struct CountingOps {
    inner: Box<FixedRateOps>,
    reads: std::sync::Arc<Mutex<u32>>,
}

impl ClockOps for CountingOps {
    fn recalc_rate(&self, parent_rate: u64) -> Result<u64> {
        *self.reads.lock().unwrap() += 1;
        self.inner.recalc_rate(parent_rate)
    }

    fn round_rate(&self, desired: u64, parent_rate: u64) -> u64 {
        self.inner.round_rate(desired, parent_rate)
    }

    fn set_rate(&self, rate: u64, parent_rate: u64) -> Result<()> {
        self.inner.set_rate(rate, parent_rate)
    }
}

#[test]
fn set_rate_primes_the_cache() {
    let reads = std::sync::Arc::new(Mutex::new(0u32));
    let counter = CountingOps {
        inner: FixedRateOps::new(7),
        reads: std::sync::Arc::clone(&reads),
    };
    let mut registry = ClockRegistry::new();
    let clock = registry
        .register("osc0", ClockFlags::ROOT, Box::new(counter))
        .unwrap();
    clock.set_rate(11).unwrap();
    assert_eq!(clock.rate().unwrap(), 11);
    assert_eq!(
        *reads.lock().unwrap(),
        0,
        "A cached clock serves the rate set last without re-querying"
    );
}

#[test]
fn nocache_clock_requeries_every_read() {
    let mut registry = ClockRegistry::new();
    let ops = FixedRateOps::new(7);
    let clock = registry
        .register("osc0", ClockFlags::ROOT | ClockFlags::RATE_NOCACHE, ops)
        .unwrap();
    assert_eq!(clock.rate().unwrap(), 7);
    clock.set_rate(11).unwrap();
    assert_eq!(
        clock.rate().unwrap(),
        11,
        "RATE_NOCACHE must re-query the implementation"
    );
}

#[test]
fn round_rate_delegates_to_ops() {
    let mut registry = ClockRegistry::new();
    let clock = registry
        .register("osc0", ClockFlags::ROOT, FixedRateOps::new(1))
        .unwrap();
    assert_eq!(clock.round_rate(12_345), 12_345);
}
