//! The boot configuration aggregate and its validation gate.
//!
//! Construction is deliberately permissive: an empty configuration starts
//! out invalid and is mutated into shape, then [`Config::validate`] passes
//! judgment before anything is rendered or persisted. Callers that want
//! the judgment to stick seal the value with [`Config::finalize`].

use std::ops::Deref;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::entry::MenuEntry;
use crate::slot::BootSlot;

/// Menu entries per slot: at most one entry per slot, one field per slot.
///
/// The record is sized by the closed slot set, so there is no key space
/// beyond the slots themselves and a lookup can never name a missing key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotEntries {
    a: Option<MenuEntry>,
    b: Option<MenuEntry>,
}

impl SlotEntries {
    /// Returns the entry registered for `slot`, if any.
    pub fn get(&self, slot: BootSlot) -> Option<&MenuEntry> {
        match slot {
            BootSlot::A => self.a.as_ref(),
            BootSlot::B => self.b.as_ref(),
        }
    }

    /// Registers `entry` for `slot`, returning the replaced entry if one
    /// was present.
    pub fn insert(&mut self, slot: BootSlot, entry: MenuEntry) -> Option<MenuEntry> {
        let target = match slot {
            BootSlot::A => &mut self.a,
            BootSlot::B => &mut self.b,
        };
        target.replace(entry)
    }

    /// Whether an entry is registered for `slot`.
    pub fn contains(&self, slot: BootSlot) -> bool {
        self.get(slot).is_some()
    }

    /// Iterates registered entries in canonical slot order.
    pub fn iter(&self) -> impl Iterator<Item = (BootSlot, &MenuEntry)> {
        [(BootSlot::A, self.a.as_ref()), (BootSlot::B, self.b.as_ref())]
            .into_iter()
            .filter_map(|(slot, entry)| entry.map(|e| (slot, e)))
    }
}

/// The causes for which [`Config::validate`] rejects a configuration.
///
/// Exactly one cause is reported per failed validation, in the check order
/// documented on [`Config::validate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The default slot has no registered menu entry.
    #[error("invalid default entry: {0}")]
    DefaultEntryMissing(BootSlot),
    /// A fallback slot is configured but has no registered menu entry.
    #[error("invalid fallback entry: {0}")]
    FallbackEntryMissing(BootSlot),
    /// The default and fallback slots are the same.
    #[error("default and fallback entries must not be the same")]
    DefaultEqualsFallback,
}

/// In-memory model of the bootloader's menu configuration.
///
/// Nothing here is written anywhere; a validated value is handed off to an
/// external renderer/installer. Fields stay directly assignable so the
/// owning workflow can adjust selections between upserts. No mutation
/// re-validates, so judge with [`Config::validate`] (or seal with
/// [`Config::finalize`]) after the last change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Slot booted under normal conditions.
    pub default: BootSlot,
    /// Slot booted when the default fails; `None` means no fallback is
    /// configured.
    pub fallback: Option<BootSlot>,
    /// Registered per-slot menu entries.
    pub entries: SlotEntries,
    /// Whether the renderer should append the maintenance/reset menu
    /// item. Carried as data; not interpreted here.
    pub add_reset_option: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates an empty configuration: default slot A, no fallback, no
    /// entries, reset option enabled.
    ///
    /// The result is intentionally invalid until an entry for the default
    /// slot is registered via [`Self::upsert`].
    pub fn new() -> Self {
        Self {
            default: BootSlot::A,
            fallback: None,
            entries: SlotEntries::default(),
            add_reset_option: true,
        }
    }

    /// Builds and registers the menu entry for `slot`, replacing any prior
    /// entry for that slot in full.
    ///
    /// Cannot currently fail; the `Result` keeps room for fallible entry
    /// sources without breaking callers.
    pub fn upsert(&mut self, slot: BootSlot, cmdline: &str, version_tag: &str) -> Result<()> {
        let entry = MenuEntry::new(slot, cmdline, version_tag);
        tracing::debug!("registering boot entry for slot {slot}: {}", entry.name);
        self.entries.insert(slot, entry);
        Ok(())
    }

    /// Checks the cross-field invariants, reporting the first violated
    /// one. The check order is part of the contract: the default slot must
    /// have an entry, then a configured fallback slot must have an entry,
    /// then default and fallback must differ.
    ///
    /// Pure and idempotent. A later mutation invalidates the judgment and
    /// requires another call before the value may be persisted.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.entries.contains(self.default) {
            return Err(ValidationError::DefaultEntryMissing(self.default));
        }

        if let Some(fallback) = self.fallback {
            if !self.entries.contains(fallback) {
                return Err(ValidationError::FallbackEntryMissing(fallback));
            }

            if self.default == fallback {
                return Err(ValidationError::DefaultEqualsFallback);
            }
        }

        Ok(())
    }

    /// Rotates the boot order after an upgrade: the other slot becomes the
    /// default and the old default becomes the fallback.
    ///
    /// A configuration whose default slot has no entry yet (fresh install)
    /// is left untouched; there is nothing to fall back to. The caller is
    /// expected to have upserted the new slot's entry first, and the
    /// result is judged by [`Self::validate`] like any other mutation.
    pub fn flip(&mut self) {
        if !self.entries.contains(self.default) {
            return;
        }

        let previous = self.default;
        self.default = previous.other();
        self.fallback = Some(previous);
        tracing::debug!("flipped default boot slot to {}", self.default);
    }

    /// Validates and seals the configuration.
    ///
    /// On success the value can no longer drift from its judgment. On
    /// failure the error names the first violated invariant; callers that
    /// expect to repair and retry should [`Self::validate`] in place
    /// before sealing.
    pub fn finalize(self) -> Result<ValidatedConfig, ValidationError> {
        self.validate()?;
        Ok(ValidatedConfig { config: self })
    }
}

/// A configuration that has passed validation.
///
/// Grants read-only access to the inner [`Config`] via [`Deref`] and
/// serializes identically to it, so renderers are indifferent to which
/// form they receive. There is deliberately no `Deserialize`: external
/// data re-enters through [`Config`] and the validator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidatedConfig {
    config: Config,
}

impl ValidatedConfig {
    /// Releases the inner configuration for further mutation. The result
    /// must pass validation again before use.
    pub fn into_inner(self) -> Config {
        self.config
    }
}

impl Deref for ValidatedConfig {
    type Target = Config;

    fn deref(&self) -> &Self::Target {
        &self.config
    }
}

impl TryFrom<Config> for ValidatedConfig {
    type Error = ValidationError;

    fn try_from(config: Config) -> Result<Self, Self::Error> {
        config.finalize()
    }
}
