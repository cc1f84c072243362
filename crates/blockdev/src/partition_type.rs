//! Partition type GUIDs from the Discoverable Partitions Specification (DPS)
//!
//! This module contains constants for partition type GUIDs as defined by the
//! UAPI Group's Discoverable Partitions Specification, limited to the types
//! a bootloader disk layout refers to.
//!
//! Reference: <https://uapi-group.org/specifications/specs/discoverable_partitions_specification/>

/// EFI System Partition (ESP) for UEFI boot
pub const ESP: &str = "c12a7328-f81f-11d2-ba4b-00a0c93ec93b";

/// BIOS boot partition, where GRUB embeds its core image on GPT disks
pub const BIOS_BOOT: &str = "21686148-6449-6e6f-744e-656564454649";

/// Extended Boot Loader Partition
pub const XBOOTLDR: &str = "bc13c2ff-59e6-4262-a352-b275fd6f7172";

/// Generic Linux filesystem data partition
pub const LINUX_DATA: &str = "0fc63daf-8483-4772-8e79-3d69d8477de4";

#[cfg(test)]
mod test {
    use super::*;

    fn assert_guid(guid: &str) {
        assert_eq!(guid.len(), 36, "bad length for '{guid}'");
        for (i, c) in guid.char_indices() {
            match i {
                8 | 13 | 18 | 23 => assert_eq!(c, '-', "expected '-' at {i} in '{guid}'"),
                _ => assert!(
                    c.is_ascii_hexdigit() && !c.is_ascii_uppercase(),
                    "unexpected character '{c}' in '{guid}'"
                ),
            }
        }
    }

    #[test]
    fn test_guid_format() {
        for guid in [ESP, BIOS_BOOT, XBOOTLDR, LINUX_DATA] {
            assert_guid(guid);
        }
    }
}
