//! Guest structure layout export.
//!
//! Host introspection tooling walks the simulated guest's kernel structures
//! (thread info, task list, memory map, open-file chain) directly in guest
//! memory. That walk needs the exact sizes and field offsets of those
//! structures, which depend on the guest build. This module is pure data
//! export: `#[repr(C)]` mirrors of the guest structures, their layout
//! collected into a serializable table. No control logic lives here.
//!
//! Guest pointers are represented as `u64` fields in the mirrors.

use serde::Serialize;
use std::mem::{offset_of, size_of};

/// Length of the guest's fixed task-name buffer.
pub const GUEST_TASK_COMM_LEN: usize = 16;

/// Guest page size in bytes.
pub const GUEST_PAGE_SIZE: u64 = 4096;

/// Mirror of the guest's per-thread bookkeeping structure.
#[repr(C)]
#[derive(Debug)]
pub struct GuestThreadInfo {
    /// Thread flag word.
    pub flags: u64,
    /// Pointer to the owning task.
    pub task: u64,
}

/// Mirror of the guest's task (process) structure.
#[repr(C)]
#[derive(Debug)]
pub struct GuestTask {
    /// Scheduler state word.
    pub state: u64,
    /// Process id.
    pub pid: u32,
    /// Thread group id.
    pub tgid: u32,
    /// Boot-relative start time.
    pub start_time: u64,
    /// Fixed-length task name.
    pub comm: [u8; GUEST_TASK_COMM_LEN],
    /// Pointer to the memory descriptor.
    pub mm: u64,
}

/// Mirror of the guest's memory descriptor.
#[repr(C)]
#[derive(Debug)]
pub struct GuestMm {
    /// Pointer to the first memory-region entry.
    pub mmap: u64,
}

/// Mirror of one guest memory-region entry.
#[repr(C)]
#[derive(Debug)]
pub struct GuestVmArea {
    /// Region start address.
    pub vm_start: u64,
    /// Region end address (exclusive).
    pub vm_end: u64,
    /// Protection and mapping flags.
    pub vm_flags: u64,
    /// File offset of the mapping, in pages.
    pub vm_pgoff: u64,
    /// Pointer to the next region entry.
    pub vm_next: u64,
    /// Pointer to the mapped file, or null.
    pub vm_file: u64,
}

/// Mirror of the guest's open-file structure.
#[repr(C)]
#[derive(Debug)]
pub struct GuestFile {
    /// Embedded path structure.
    pub f_path: GuestPath,
}

/// Mirror of the guest's path structure.
#[repr(C)]
#[derive(Debug)]
pub struct GuestPath {
    /// Pointer to the directory entry.
    pub dentry: u64,
}

/// Mirror of the guest's directory-entry structure.
#[repr(C)]
#[derive(Debug)]
pub struct GuestDentry {
    /// Pointer to the parent entry.
    pub d_parent: u64,
    /// Embedded name structure.
    pub d_name: GuestQstr,
}

/// Mirror of the guest's counted-string structure.
#[repr(C)]
#[derive(Debug)]
pub struct GuestQstr {
    /// Pointer to the name bytes.
    pub name: u64,
    /// Name length in bytes.
    pub len: u64,
}

/// Sizes and field offsets of every guest structure the host tooling walks.
///
/// All values are in bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuestLayout {
    /// Size of the per-thread bookkeeping structure.
    pub thread_info_size: usize,
    /// Offset of the task pointer within it.
    pub thread_info_task: usize,

    /// Size of the task structure.
    pub task_size: usize,
    /// Offset of the process id.
    pub task_pid: usize,
    /// Offset of the thread group id.
    pub task_tgid: usize,
    /// Offset of the start time.
    pub task_start_time: usize,
    /// Offset of the task name buffer.
    pub task_comm: usize,
    /// Length of the task name buffer.
    pub task_comm_len: usize,
    /// Offset of the memory-descriptor pointer.
    pub task_mm: usize,

    /// Size of the memory descriptor.
    pub mm_size: usize,
    /// Offset of the first region pointer.
    pub mm_mmap: usize,

    /// Size of one memory-region entry.
    pub vm_area_size: usize,
    /// Offset of the region start address.
    pub vm_area_start: usize,
    /// Offset of the region end address.
    pub vm_area_end: usize,
    /// Offset of the region flags.
    pub vm_area_flags: usize,
    /// Offset of the page offset.
    pub vm_area_pgoff: usize,
    /// Offset of the next-region pointer.
    pub vm_area_next: usize,
    /// Offset of the mapped-file pointer.
    pub vm_area_file: usize,
    /// Guest page size in bytes.
    pub page_size: u64,

    /// Size of the open-file structure.
    pub file_size: usize,
    /// Offset of the embedded path.
    pub file_path: usize,

    /// Size of the path structure.
    pub path_size: usize,
    /// Offset of the directory-entry pointer.
    pub path_dentry: usize,

    /// Size of the directory-entry structure.
    pub dentry_size: usize,
    /// Offset of the parent pointer.
    pub dentry_parent: usize,
    /// Offset of the embedded name.
    pub dentry_name: usize,

    /// Size of the counted-string structure.
    pub qstr_size: usize,
    /// Offset of the name pointer.
    pub qstr_name: usize,
    /// Offset of the name length.
    pub qstr_len: usize,
}

impl GuestLayout {
    /// Collects the layout table from the mirror structures.
    pub fn collect() -> Self {
        Self {
            thread_info_size: size_of::<GuestThreadInfo>(),
            thread_info_task: offset_of!(GuestThreadInfo, task),

            task_size: size_of::<GuestTask>(),
            task_pid: offset_of!(GuestTask, pid),
            task_tgid: offset_of!(GuestTask, tgid),
            task_start_time: offset_of!(GuestTask, start_time),
            task_comm: offset_of!(GuestTask, comm),
            task_comm_len: GUEST_TASK_COMM_LEN,
            task_mm: offset_of!(GuestTask, mm),

            mm_size: size_of::<GuestMm>(),
            mm_mmap: offset_of!(GuestMm, mmap),

            vm_area_size: size_of::<GuestVmArea>(),
            vm_area_start: offset_of!(GuestVmArea, vm_start),
            vm_area_end: offset_of!(GuestVmArea, vm_end),
            vm_area_flags: offset_of!(GuestVmArea, vm_flags),
            vm_area_pgoff: offset_of!(GuestVmArea, vm_pgoff),
            vm_area_next: offset_of!(GuestVmArea, vm_next),
            vm_area_file: offset_of!(GuestVmArea, vm_file),
            page_size: GUEST_PAGE_SIZE,

            file_size: size_of::<GuestFile>(),
            file_path: offset_of!(GuestFile, f_path),

            path_size: size_of::<GuestPath>(),
            path_dentry: offset_of!(GuestPath, dentry),

            dentry_size: size_of::<GuestDentry>(),
            dentry_parent: offset_of!(GuestDentry, d_parent),
            dentry_name: offset_of!(GuestDentry, d_name),

            qstr_size: size_of::<GuestQstr>(),
            qstr_name: offset_of!(GuestQstr, name),
            qstr_len: offset_of!(GuestQstr, len),
        }
    }

    /// Serializes the table as pretty-printed JSON for host tooling.
    ///
    /// # Errors
    ///
    /// Returns the underlying serializer error; layout values themselves
    /// cannot fail to serialize.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for GuestLayout {
    fn default() -> Self {
        Self::collect()
    }
}
