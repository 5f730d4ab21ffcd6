// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`Details`] hook implemented once per rendered type.

use std::{fmt, rc::Rc, sync::Arc};

use crate::Verbosity;

/// Hook rendering a value of `Self` into a text sink.
///
/// Implement it once for every type you want to output through a
/// [`Streamer`]. The [`Verbosity`] may be observed to provide distinct
/// [`brief()`] and [`verbose()`] renderings.
///
/// A [`Streamer`] of a type without this hook doesn't compile:
///
/// ```rust,compile_fail,E0277
/// struct Opaque;
///
/// let o = Opaque;
/// println!("{}", debug_stream::brief(&o));
/// ```
///
/// # Example
///
/// ```rust
/// use std::fmt;
///
/// use debug_stream::{Details, Verbosity};
///
/// struct Port(u16);
///
/// impl Details for Port {
///     fn fmt_details(
///         &self,
///         f: &mut fmt::Formatter<'_>,
///         verbosity: Verbosity,
///     ) -> fmt::Result {
///         match verbosity {
///             Verbosity::Brief => write!(f, "{}", self.0),
///             Verbosity::Verbose => write!(f, "Port({})", self.0),
///         }
///     }
/// }
///
/// let p = Port(8080);
/// assert_eq!(debug_stream::brief(&p).to_string(), "8080");
/// assert_eq!(debug_stream::verbose(&p).to_string(), "Port(8080)");
/// ```
///
/// [`brief()`]: crate::brief
/// [`verbose()`]: crate::verbose
/// [`Streamer`]: crate::Streamer
pub trait Details {
    /// Writes a textual rendering of this value into `f`.
    ///
    /// # Errors
    ///
    /// If writing into `f` fails.
    fn fmt_details(
        &self,
        f: &mut fmt::Formatter<'_>,
        verbosity: Verbosity,
    ) -> fmt::Result;
}

impl<T: Details + ?Sized> Details for &T {
    fn fmt_details(
        &self,
        f: &mut fmt::Formatter<'_>,
        verbosity: Verbosity,
    ) -> fmt::Result {
        (**self).fmt_details(f, verbosity)
    }
}

impl<T: Details + ?Sized> Details for &mut T {
    fn fmt_details(
        &self,
        f: &mut fmt::Formatter<'_>,
        verbosity: Verbosity,
    ) -> fmt::Result {
        (**self).fmt_details(f, verbosity)
    }
}

impl<T: Details + ?Sized> Details for Box<T> {
    fn fmt_details(
        &self,
        f: &mut fmt::Formatter<'_>,
        verbosity: Verbosity,
    ) -> fmt::Result {
        (**self).fmt_details(f, verbosity)
    }
}

impl<T: Details + ?Sized> Details for Rc<T> {
    fn fmt_details(
        &self,
        f: &mut fmt::Formatter<'_>,
        verbosity: Verbosity,
    ) -> fmt::Result {
        (**self).fmt_details(f, verbosity)
    }
}

impl<T: Details + ?Sized> Details for Arc<T> {
    fn fmt_details(
        &self,
        f: &mut fmt::Formatter<'_>,
        verbosity: Verbosity,
    ) -> fmt::Result {
        (**self).fmt_details(f, verbosity)
    }
}
