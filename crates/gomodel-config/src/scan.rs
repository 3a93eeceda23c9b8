//! Scan options: per-kind suppression and import-resolution leniency.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ConfigError;

/// One scan option flag. Flags combine by union: collecting several into a
/// [`ScanOptions`] enables each of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanOption {
    SuppressComments,
    SuppressStructs,
    SuppressInterfaces,
    SuppressFunctions,
    SuppressMethods,
    SuppressNamedTypes,
    SuppressVariables,
    SuppressConstants,
    AllowUnresolvedImports,
}

impl ScanOption {
    pub const ALL: [Self; 9] = [
        Self::SuppressComments,
        Self::SuppressStructs,
        Self::SuppressInterfaces,
        Self::SuppressFunctions,
        Self::SuppressMethods,
        Self::SuppressNamedTypes,
        Self::SuppressVariables,
        Self::SuppressConstants,
        Self::AllowUnresolvedImports,
    ];

    /// Config key of this flag, as written in `[scan]`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SuppressComments => "suppress_comments",
            Self::SuppressStructs => "suppress_structs",
            Self::SuppressInterfaces => "suppress_interfaces",
            Self::SuppressFunctions => "suppress_functions",
            Self::SuppressMethods => "suppress_methods",
            Self::SuppressNamedTypes => "suppress_named_types",
            Self::SuppressVariables => "suppress_variables",
            Self::SuppressConstants => "suppress_constants",
            Self::AllowUnresolvedImports => "allow_unresolved_imports",
        }
    }
}

impl fmt::Display for ScanOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScanOption {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|option| option.as_str() == key)
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "scan".to_string(),
                reason: format!("unknown scan option '{key}'"),
            })
    }
}

/// Options for one scan. All flags default to off: every declaration kind
/// is captured, comments included, and unresolved import aliases are fatal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct ScanOptions {
    #[serde(default)]
    pub suppress_comments: bool,
    #[serde(default)]
    pub suppress_structs: bool,
    #[serde(default)]
    pub suppress_interfaces: bool,
    #[serde(default)]
    pub suppress_functions: bool,
    #[serde(default)]
    pub suppress_methods: bool,
    #[serde(default)]
    pub suppress_named_types: bool,
    #[serde(default)]
    pub suppress_variables: bool,
    #[serde(default)]
    pub suppress_constants: bool,
    /// Keep `pkg.Name` references whose alias matches no import, with no
    /// qualifier, instead of failing the scan.
    #[serde(default)]
    pub allow_unresolved_imports: bool,
}

impl ScanOptions {
    /// Enable one more flag.
    #[must_use]
    pub const fn with(mut self, option: ScanOption) -> Self {
        *self.flag_mut(option) = true;
        self
    }

    #[must_use]
    pub const fn contains(&self, option: ScanOption) -> bool {
        match option {
            ScanOption::SuppressComments => self.suppress_comments,
            ScanOption::SuppressStructs => self.suppress_structs,
            ScanOption::SuppressInterfaces => self.suppress_interfaces,
            ScanOption::SuppressFunctions => self.suppress_functions,
            ScanOption::SuppressMethods => self.suppress_methods,
            ScanOption::SuppressNamedTypes => self.suppress_named_types,
            ScanOption::SuppressVariables => self.suppress_variables,
            ScanOption::SuppressConstants => self.suppress_constants,
            ScanOption::AllowUnresolvedImports => self.allow_unresolved_imports,
        }
    }

    /// Parse a comma-separated list of option keys, e.g.
    /// `"suppress_structs,suppress_methods"`. Empty entries are ignored.
    pub fn parse_list(list: &str) -> Result<Self, ConfigError> {
        list.split(',')
            .filter(|entry| !entry.trim().is_empty())
            .map(str::parse::<ScanOption>)
            .collect()
    }

    /// The enabled flags, in declaration order.
    pub fn enabled(&self) -> impl Iterator<Item = ScanOption> + '_ {
        ScanOption::ALL
            .into_iter()
            .filter(|option| self.contains(*option))
    }

    const fn flag_mut(&mut self, option: ScanOption) -> &mut bool {
        match option {
            ScanOption::SuppressComments => &mut self.suppress_comments,
            ScanOption::SuppressStructs => &mut self.suppress_structs,
            ScanOption::SuppressInterfaces => &mut self.suppress_interfaces,
            ScanOption::SuppressFunctions => &mut self.suppress_functions,
            ScanOption::SuppressMethods => &mut self.suppress_methods,
            ScanOption::SuppressNamedTypes => &mut self.suppress_named_types,
            ScanOption::SuppressVariables => &mut self.suppress_variables,
            ScanOption::SuppressConstants => &mut self.suppress_constants,
            ScanOption::AllowUnresolvedImports => &mut self.allow_unresolved_imports,
        }
    }
}

impl From<ScanOption> for ScanOptions {
    fn from(option: ScanOption) -> Self {
        Self::default().with(option)
    }
}

impl FromIterator<ScanOption> for ScanOptions {
    fn from_iter<I: IntoIterator<Item = ScanOption>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), Self::with)
    }
}
