//! Wizard selectors and tab names as they appear in console URLs.

use crate::error::ParseEnumError;
use std::fmt;
use std::str::FromStr;

/// Implements `as_str`, `Display` and case-insensitive `FromStr` for a
/// fieldless enum from a list of `Variant => "wire"` pairs.
macro_rules! wire_enum {
    ($ty:ident, $kind:literal, { $($variant:ident => $wire:literal),+ $(,)? }) => {
        impl $ty {
            /// All variants in declaration order.
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            /// Returns the value used in URLs.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($ty::$variant => $wire),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($wire) {
                        return Ok($ty::$variant);
                    }
                )+
                Err(ParseEnumError::new($kind, s, &[$($wire),+]))
            }
        }
    };
}

/// Top-level flow used to create a virtual machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WizardKind {
    /// Guided flow with a reduced set of steps.
    Basic,
    /// Full customize/import wizard.
    #[default]
    Customize,
    /// Raw YAML editor.
    Yaml,
}

wire_enum!(WizardKind, "wizard kind", {
    Basic => "basic",
    Customize => "wizard",
    Yaml => "yaml",
});

/// What the full wizard is creating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WizardMode {
    #[default]
    Vm,
    Template,
    Import,
}

wire_enum!(WizardMode, "wizard mode", {
    Vm => "vm",
    Template => "template",
    Import => "import",
});

/// Level of detail the full wizard starts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WizardView {
    #[default]
    Simple,
    Advanced,
}

wire_enum!(WizardView, "wizard view", {
    Simple => "simple",
    Advanced => "advanced",
});

/// Tabs of the virtual machine details page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VmTab {
    Details,
    Yaml,
    Consoles,
    Events,
    Disks,
    Nics,
    Snapshots,
    Environment,
}

wire_enum!(VmTab, "virtual machine tab", {
    Details => "details",
    Yaml => "yaml",
    Consoles => "consoles",
    Events => "events",
    Disks => "disks",
    Nics => "network-interfaces",
    Snapshots => "snapshots",
    Environment => "environment",
});

/// Sub-tabs of the virtualization list page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ListTab {
    #[default]
    VirtualMachines,
    Templates,
}

wire_enum!(ListTab, "list tab", {
    VirtualMachines => "",
    Templates => "templates",
});
