// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! CLI options selecting a [`Verbosity`].
//!
//! [`Cli`] is meant to be flattened into the CLI of an application, so its
//! users can switch all the [`Streamer`]s it outputs between brief and
//! verbose renderings.
//!
//! # Example
//!
//! ```rust
//! use debug_stream::{cli, Verbosity};
//!
//! #[derive(clap::Parser)] // also re-exported as `cli::Parser`
//! struct Opts {
//!     #[command(flatten)]
//!     debug: cli::Cli,
//! }
//!
//! let opts = <Opts as cli::Parser>::parse_from(["app", "-v"]);
//! assert_eq!(opts.debug.verbosity(), Verbosity::Verbose);
//!
//! let port = 8080_u16;
//! println!("listening on {}", opts.debug.render(&port));
//! ```

use crate::{Streamer, Verbosity};

pub use clap::{Args, Parser};

/// CLI options of a [`Streamer`] [`Verbosity`].
#[derive(Clone, Copy, Debug, Default, clap::Args)]
#[group(skip)]
pub struct Cli {
    /// Verbosity of a debug output.
    ///
    /// No `-v` renders values briefly, `-v` (or more) renders them verbosely.
    #[arg(short, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Explicit verbosity of a debug output, overriding `-v`.
    #[arg(
        long,
        value_name = "brief|verbose",
        global = true,
        conflicts_with = "verbose"
    )]
    pub verbosity: Option<Verbosity>,
}

impl Cli {
    /// Returns the [`Verbosity`] these options select.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity.unwrap_or_else(|| self.verbose.into())
    }

    /// Wraps the given `value` into a [`Streamer`] with the [`Verbosity`]
    /// these options select.
    #[must_use]
    pub fn render<'v, T: ?Sized>(&self, value: &'v T) -> Streamer<'v, T> {
        Streamer::new(value, self.verbosity())
    }
}

impl From<Cli> for Verbosity {
    fn from(cli: Cli) -> Self {
        cli.verbosity()
    }
}
