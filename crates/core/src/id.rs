// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Hierarchical identifiers for plan tree nodes.
//!
//! Every node in a night plan is addressed by a string derived from its
//! structural position: the night identifier, then one ordinal per level,
//! joined with [`ID_SEPARATOR`].
//!
//! ```text
//! N1            night
//! N1_0          first top-level sequence
//! N1_0_1        second child of that sequence (sequence or command)
//! N1_0_1_3      fourth action expanded from that command
//! ```

/// Separator between levels of a hierarchical ID.
pub const ID_SEPARATOR: char = '_';

/// Define a newtype ID wrapper around `String`.
///
/// Generates `new()`, `as_str()`, `Display`, `From<String>`, `From<&str>`,
/// `PartialEq<str>`, `PartialEq<&str>`, and `Borrow<str>` implementations.
///
/// ```ignore
/// define_id! {
///     /// Doc comment for the ID type.
///     pub struct MyId;
/// }
/// ```
#[macro_export]
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        pub struct $name:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }

        impl std::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id! {
    /// Identifier of a night plan, unique within its observation plan.
    pub struct NightId;
}

define_id! {
    /// Hierarchical identifier of a sequence, command, or action.
    ///
    /// A pure function of structural position: parsing the same text twice
    /// yields the same IDs.
    pub struct NodeId;
}

impl NightId {
    /// Why this ID cannot name a night, if it cannot.
    ///
    /// Node IDs stay unique across nights only while night IDs are non-empty
    /// and free of [`ID_SEPARATOR`]: otherwise night `N_1` would mint
    /// `N_1_0`, the ID of night `N`'s second sequence.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.0.is_empty() {
            Err("night ID is empty")
        } else if self.0.contains(ID_SEPARATOR) {
            Err("night ID contains the '_' ID separator")
        } else {
            Ok(())
        }
    }

    /// ID of the top-level sequence at `ordinal` within this night.
    pub fn sequence(&self, ordinal: usize) -> NodeId {
        NodeId(format!("{}{}{}", self.0, ID_SEPARATOR, ordinal))
    }
}

impl NodeId {
    /// ID of the child at `ordinal`, scoped to this node.
    pub fn child(&self, ordinal: usize) -> NodeId {
        NodeId(format!("{}{}{}", self.0, ID_SEPARATOR, ordinal))
    }

    /// Whether `self` is `other` or one of its descendants.
    pub fn is_within(&self, other: &NodeId) -> bool {
        match self.0.strip_prefix(other.as_str()) {
            Some("") => true,
            Some(rest) => rest.starts_with(ID_SEPARATOR),
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
