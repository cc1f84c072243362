//! Disk layout planning types shared between the bootloader model and the
//! installer.
//!
//! Everything here is compile-time constant data: the element type for
//! partition plans, plus the GPT partition type GUIDs those plans refer
//! to. Nothing in this crate touches a disk.

pub mod partition_type;

use serde::Serialize;

/// A single partition an installer must provision.
///
/// Values of this type are emitted by the bootloader's partition
/// requirements and consumed by the disk partitioning step, in sequence
/// order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PartitionSpec {
    /// GPT partition label.
    pub label: &'static str,
    /// GPT partition type GUID; see [`partition_type`].
    pub type_guid: &'static str,
    /// Partition size in bytes.
    pub size: u64,
    /// Whether the partition allocator must treat the partition as
    /// reserved rather than allocatable.
    pub reserved: bool,
}
