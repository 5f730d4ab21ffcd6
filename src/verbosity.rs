// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`Verbosity`] levels a [`Details`] hook may branch on.
//!
//! [`Details`]: crate::Details

use std::str::FromStr;

use derive_more::Display;

/// Rendering mode passed to a [`Details`] hook.
///
/// [`Details`]: crate::Details
#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum Verbosity {
    /// Short rendering, usually just the value itself.
    #[default]
    #[display("brief")]
    Brief = 0,

    /// Extended rendering, e.g. including the type or the address of the
    /// value.
    #[display("verbose")]
    Verbose = 1,
}

impl Verbosity {
    /// Indicates whether this is [`Verbosity::Verbose`].
    #[must_use]
    pub const fn is_verbose(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Indicates whether this is [`Verbosity::Brief`].
    #[must_use]
    pub const fn is_brief(&self) -> bool {
        matches!(self, Self::Brief)
    }
}

impl From<bool> for Verbosity {
    fn from(verbose: bool) -> Self {
        if verbose {
            Self::Verbose
        } else {
            Self::Brief
        }
    }
}

impl From<Verbosity> for bool {
    fn from(v: Verbosity) -> Self {
        v.is_verbose()
    }
}

/// Number of `-v` occurrences, as counted by [`cli::Cli`].
///
/// [`cli::Cli`]: crate::cli::Cli
impl From<u8> for Verbosity {
    fn from(v: u8) -> Self {
        match v {
            0 => Self::Brief,
            _ => Self::Verbose,
        }
    }
}

impl From<Verbosity> for u8 {
    fn from(v: Verbosity) -> Self {
        match v {
            Verbosity::Brief => 0,
            Verbosity::Verbose => 1,
        }
    }
}

impl FromStr for Verbosity {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "brief" => Ok(Self::Brief),
            "verbose" => Ok(Self::Verbose),
            _ => Err("possible options: brief, verbose"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_brief() {
        assert_eq!(Verbosity::default(), Verbosity::Brief);
        assert_eq!(Verbosity::default() as u8, 0);
    }

    #[test]
    fn converts_from_and_into_bool() {
        assert_eq!(Verbosity::from(false), Verbosity::Brief);
        assert_eq!(Verbosity::from(true), Verbosity::Verbose);
        assert!(!bool::from(Verbosity::Brief));
        assert!(bool::from(Verbosity::Verbose));
    }

    #[test]
    fn converts_flag_counts() {
        assert_eq!(Verbosity::from(0_u8), Verbosity::Brief);
        assert_eq!(Verbosity::from(1_u8), Verbosity::Verbose);
        assert_eq!(Verbosity::from(255_u8), Verbosity::Verbose);
        assert_eq!(u8::from(Verbosity::Brief), 0);
        assert_eq!(u8::from(Verbosity::Verbose), 1);
    }

    #[test]
    fn predicates() {
        assert!(Verbosity::Brief.is_brief());
        assert!(!Verbosity::Brief.is_verbose());
        assert!(Verbosity::Verbose.is_verbose());
        assert!(!Verbosity::Verbose.is_brief());
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("brief".parse::<Verbosity>(), Ok(Verbosity::Brief));
        assert_eq!("VERBOSE".parse::<Verbosity>(), Ok(Verbosity::Verbose));
        assert_eq!(
            "loud".parse::<Verbosity>(),
            Err("possible options: brief, verbose"),
        );
    }

    #[test]
    fn displays_lowercase_names() {
        assert_eq!(Verbosity::Brief.to_string(), "brief");
        assert_eq!(Verbosity::Verbose.to_string(), "verbose");
    }
}
