//! CPU topology.
//!
//! Maps every possible CPU to its physical package id. The last-resort
//! discovery strategy derives cluster ids from this mapping when the
//! description tree carries neither a `cpu-map` nor a `/clusters` node. The
//! table is built once at bring-up and never mutated.

/// Physical package ids of all possible CPUs, indexed by CPU number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CpuTopology {
    package_of: Vec<u32>,
}

impl CpuTopology {
    /// Creates a topology from an explicit CPU→package table.
    pub fn new(package_of: Vec<u32>) -> Self {
        Self { package_of }
    }

    /// Creates a uniform topology: `clusters` packages with
    /// `cpus_per_cluster` CPUs each, numbered package-major.
    pub fn uniform(clusters: u32, cpus_per_cluster: u32) -> Self {
        let package_of = (0..clusters)
            .flat_map(|package| std::iter::repeat_n(package, cpus_per_cluster as usize))
            .collect();
        Self { package_of }
    }

    /// Returns the number of possible CPUs.
    pub fn cpu_count(&self) -> usize {
        self.package_of.len()
    }

    /// Iterates over all possible CPU numbers.
    pub fn possible_cpus(&self) -> impl Iterator<Item = u32> + use<> {
        0..self.package_of.len() as u32
    }

    /// Returns the physical package id of `cpu`.
    ///
    /// CPUs without an entry report package 0, the default package.
    pub fn physical_package_id(&self, cpu: u32) -> u32 {
        self.package_of.get(cpu as usize).copied().unwrap_or(0)
    }
}
