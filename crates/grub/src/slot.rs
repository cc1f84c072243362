//! Boot slot identification.
//!
//! A slot names one of the two installations on disk. The set is closed:
//! only `A` and `B` exist, which makes an out-of-set slot unrepresentable
//! and lets the compiler check exhaustiveness wherever a slot is matched.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the two independently bootable installations.
///
/// The identifier doubles as the name of the slot's private directory in
/// the boot partition, so the values are stable, filesystem-safe strings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BootSlot {
    /// The first slot, the default for fresh installations.
    #[default]
    A,
    /// The second slot.
    B,
}

impl BootSlot {
    /// Returns the stable identifier used in paths and menu entry titles.
    pub const fn as_str(&self) -> &'static str {
        match self {
            BootSlot::A => "A",
            BootSlot::B => "B",
        }
    }

    /// Returns the opposite slot.
    pub const fn other(&self) -> Self {
        match self {
            BootSlot::A => BootSlot::B,
            BootSlot::B => BootSlot::A,
        }
    }
}

impl fmt::Display for BootSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when external data does not name a boot slot.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized boot slot: '{0}'")]
pub struct UnknownSlot(String);

impl FromStr for BootSlot {
    type Err = UnknownSlot;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(BootSlot::A),
            "B" => Ok(BootSlot::B),
            unrecognized => Err(UnknownSlot(unrecognized.to_owned())),
        }
    }
}

impl TryFrom<&str> for BootSlot {
    type Error = UnknownSlot;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
