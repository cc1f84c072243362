//! Dual-slot GRUB boot configuration model.
//!
//! An A/B-booted system keeps two complete installations side by side and
//! switches between them by rewriting the boot menu, never by touching the
//! other slot's files. This crate is the in-memory half of that contract:
//! per-slot menu entries, the default/fallback slot selection, the
//! validation gate a configuration must pass before it may be persisted,
//! and the disk partitions the bootloader expects an installer to
//! provision.
//!
//! Rendering to grub.cfg syntax and writing anything to disk are the
//! business of external collaborators; nothing here performs I/O.

pub mod config;
pub mod entry;
pub mod partitions;
pub mod slot;

/// Product name shown in boot menu entry titles.
pub const PRODUCT_NAME: &str = "Ferrite";

/// Sentinel error for installer probes that find no bootloader on the
/// target system.
///
/// This crate never produces the condition itself; it is defined here so
/// that install-vs-upgrade branching in callers has a shared, matchable
/// signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("bootloader is not installed")]
pub struct BootloaderNotInstalled;
