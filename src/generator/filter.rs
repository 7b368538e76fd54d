//! Feature filtering.
//!
//! Collects the names of every command and enum required by the features of
//! one API family. Only membership is recorded here; emission order comes
//! from walking the registry definitions separately.

use std::collections::HashSet;

use crate::error::Result;
use crate::registry::Registry;

/// Commands and enums that belong to the generated surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Membership {
    /// Required command names
    pub commands: HashSet<String>,

    /// Required enum names
    pub enums: HashSet<String>,
}

impl Membership {
    /// Union the command and enum references of every feature whose `api`
    /// attribute equals `api`.
    pub fn compute(registry: &Registry, api: &str) -> Result<Self> {
        let mut membership = Membership::default();

        for feature in registry.features() {
            if feature.api()? != api {
                continue;
            }

            for name in feature.command_names() {
                membership.commands.insert(name?.to_string());
            }
            for name in feature.enum_names() {
                membership.enums.insert(name?.to_string());
            }
        }

        tracing::debug!(
            api,
            commands = membership.commands.len(),
            enums = membership.enums.len(),
            "computed feature membership"
        );

        Ok(membership)
    }

    /// Whether the command is part of the generated surface.
    pub fn contains_command(&self, name: &str) -> bool {
        self.commands.contains(name)
    }

    /// Whether the enum is part of the generated surface.
    pub fn contains_enum(&self, name: &str) -> bool {
        self.enums.contains(name)
    }

    /// True when no feature of the API family was found or all were empty.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() && self.enums.is_empty()
    }
}
