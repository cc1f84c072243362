//! Disk partitions the bootloader requires.
//!
//! Consulted by an installer planning disk layout before any boot files
//! are written. The sequence order is a contract: partitions are
//! provisioned in the order given here.

use ferrite_blockdev::{partition_type, PartitionSpec};

/// GPT label of the EFI system partition.
pub const EFI_PARTITION_LABEL: &str = "EFI";
/// GPT label of the BIOS boot partition.
pub const BIOS_GRUB_PARTITION_LABEL: &str = "BIOS";
/// GPT label of the shared boot partition holding the per-slot subtrees.
pub const BOOT_PARTITION_LABEL: &str = "BOOT";

const MIB: u64 = 1024 * 1024;

/// Size of the EFI system partition.
pub const EFI_SIZE: u64 = 100 * MIB;
/// Size of the BIOS boot partition.
pub const BIOS_GRUB_SIZE: u64 = MIB;
/// Size of the boot partition.
pub const BOOT_SIZE: u64 = 1000 * MIB;

/// Returns the partitions the bootloader needs present on disk.
///
/// In order: the EFI system partition, the BIOS boot partition, then the
/// shared boot tree holding the per-slot kernel/initramfs subtrees.
/// Depends only on compile-time constants, never on configuration state.
pub const fn required_partitions() -> [PartitionSpec; 3] {
    [
        PartitionSpec {
            label: EFI_PARTITION_LABEL,
            type_guid: partition_type::ESP,
            size: EFI_SIZE,
            reserved: false,
        },
        PartitionSpec {
            label: BIOS_GRUB_PARTITION_LABEL,
            type_guid: partition_type::BIOS_BOOT,
            size: BIOS_GRUB_SIZE,
            reserved: false,
        },
        PartitionSpec {
            label: BOOT_PARTITION_LABEL,
            type_guid: partition_type::LINUX_DATA,
            size: BOOT_SIZE,
            reserved: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::slot::BootSlot;

    use super::*;

    #[test]
    fn test_order_contract() {
        let labels: Vec<_> = required_partitions().iter().map(|p| p.label).collect();
        assert_eq!(labels, vec!["EFI", "BIOS", "BOOT"]);
    }

    #[test]
    fn test_const_evaluable() {
        // installers may bake the plan into statics
        const PLAN: [PartitionSpec; 3] = required_partitions();
        assert_eq!(PLAN, required_partitions());
    }

    #[test]
    fn test_partition_details() {
        let [efi, bios, boot] = required_partitions();

        assert_eq!(efi.type_guid, partition_type::ESP);
        assert_eq!(efi.size, 100 * 1024 * 1024);

        assert_eq!(bios.type_guid, partition_type::BIOS_BOOT);
        assert_eq!(bios.size, 1024 * 1024);

        assert_eq!(boot.type_guid, partition_type::LINUX_DATA);
        assert_eq!(boot.size, 1000 * 1024 * 1024);

        // plain allocatable partitions, nothing reserved
        assert!(required_partitions().iter().all(|p| !p.reserved));
    }

    #[test]
    fn test_independent_of_configuration_state() {
        let before = required_partitions();

        let mut config = Config::new();
        config.upsert(BootSlot::A, "console=ttyS0", "1.6.0").unwrap();
        config.flip();

        assert_eq!(before, required_partitions());
    }
}
