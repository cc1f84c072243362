//! Boot menu entries and their construction.

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

use crate::slot::BootSlot;

/// File name of the kernel image within each slot's subtree.
pub const KERNEL_ASSET: &str = "vmlinuz";
/// File name of the initramfs image within each slot's subtree.
pub const INITRAMFS_ASSET: &str = "initramfs.xz";

/// A single renderable boot menu entry.
///
/// Field names follow the grub.cfg directives a renderer emits for the
/// entry. Entries are immutable once built; updating a slot replaces its
/// entry wholesale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    /// Title shown in the boot menu.
    pub name: String,
    /// Absolute path of the kernel image, inside the slot's subtree.
    pub linux: Utf8PathBuf,
    /// Kernel command line, passed through verbatim.
    pub cmdline: String,
    /// Absolute path of the initramfs image, inside the slot's subtree.
    pub initrd: Utf8PathBuf,
}

impl MenuEntry {
    /// Builds the menu entry for `slot`.
    ///
    /// The title is `"<slot> - <product> <version_tag>"`; the kernel and
    /// initramfs paths live under the slot's private directory, so entries
    /// for different slots never collide on disk. `cmdline` is not
    /// validated or escaped here; content constraints belong to whoever
    /// assembles it.
    pub fn new(slot: BootSlot, cmdline: &str, version_tag: &str) -> Self {
        let subtree = Utf8Path::new("/").join(slot.as_str());
        Self {
            name: format!("{slot} - {} {version_tag}", crate::PRODUCT_NAME),
            linux: subtree.join(KERNEL_ASSET),
            cmdline: cmdline.to_owned(),
            initrd: subtree.join(INITRAMFS_ASSET),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build() {
        let entry = MenuEntry::new(BootSlot::A, "console=ttyS0", "1.6.0");
        assert_eq!(entry.name, "A - Ferrite 1.6.0");
        assert_eq!(entry.linux, "/A/vmlinuz");
        assert_eq!(entry.cmdline, "console=ttyS0");
        assert_eq!(entry.initrd, "/A/initramfs.xz");
    }

    #[test]
    fn test_build_is_deterministic() {
        let first = MenuEntry::new(BootSlot::B, "ro quiet", "1.7.2");
        let second = MenuEntry::new(BootSlot::B, "ro quiet", "1.7.2");
        assert_eq!(first, second);
    }

    #[test]
    fn test_paths_disjoint_across_slots() {
        let a = MenuEntry::new(BootSlot::A, "", "1.0.0");
        let b = MenuEntry::new(BootSlot::B, "", "1.0.0");

        // each slot owns its own subtree; switching slots never has to
        // touch the other slot's files
        assert_ne!(a.linux, b.linux);
        assert_ne!(a.initrd, b.initrd);
        assert!(a.linux.as_str().starts_with("/A/"));
        assert!(b.linux.as_str().starts_with("/B/"));
        assert!(a.initrd.as_str().starts_with("/A/"));
        assert!(b.initrd.as_str().starts_with("/B/"));
    }

    #[test]
    fn test_cmdline_passthrough() {
        // content is opaque here; escaping belongs to the renderer's caller
        let exotic = "console=ttyS0,115200n8 quote=\"spaces inside\" slab_nomerge";
        let entry = MenuEntry::new(BootSlot::A, exotic, "1.6.0");
        assert_eq!(entry.cmdline, exotic);
    }
}
