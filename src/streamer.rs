// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`Streamer`] wrapper and its factories.

use std::fmt;

use crate::{Details, Verbosity};

/// Borrowed value tagged with the [`Verbosity`] it should be rendered with.
///
/// Writing it into any [`fmt::Write`] sink (via [`Display`]) invokes the
/// [`Details`] hook of `T`. It never owns, copies or mutates the value, and
/// can't outlive it.
///
/// Usually constructed inline with [`brief()`] or [`verbose()`].
///
/// [`Display`]: fmt::Display
pub struct Streamer<'v, T: ?Sized> {
    value: &'v T,
    verbosity: Verbosity,
}

impl<'v, T: ?Sized> Streamer<'v, T> {
    /// Creates a new [`Streamer`] of the given `value`.
    #[must_use]
    pub const fn new(value: &'v T, verbosity: Verbosity) -> Self {
        Self { value, verbosity }
    }

    /// Returns the wrapped value.
    #[must_use]
    pub const fn value(&self) -> &'v T {
        self.value
    }

    /// Returns the [`Verbosity`] this [`Streamer`] renders with.
    #[must_use]
    pub const fn verbosity(&self) -> Verbosity {
        self.verbosity
    }
}

impl<T: Details + ?Sized> Streamer<'_, T> {
    /// Renders the wrapped value into a new [`String`].
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

// Manual impls, as derives would require `T: Clone`.
impl<T: ?Sized> Clone for Streamer<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Streamer<'_, T> {}

impl<T: ?Sized> fmt::Debug for Streamer<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Streamer")
            .field("type", &std::any::type_name::<T>())
            .field("verbosity", &self.verbosity)
            .finish_non_exhaustive()
    }
}

impl<T: Details + ?Sized> fmt::Display for Streamer<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt_details(f, self.verbosity)
    }
}

/// Wraps the given `value` for a [`Verbosity::Brief`] output.
#[must_use]
pub const fn brief<T: ?Sized>(value: &T) -> Streamer<'_, T> {
    Streamer::new(value, Verbosity::Brief)
}

/// Wraps the given `value` for a [`Verbosity::Verbose`] output.
#[must_use]
pub const fn verbose<T: ?Sized>(value: &T) -> Streamer<'_, T> {
    Streamer::new(value, Verbosity::Verbose)
}

/// Wraps the given `value` for an output with the [`Verbosity`] decided at
/// runtime.
///
/// ```rust
/// # use debug_stream::{with_verbosity, Verbosity};
/// let s = with_verbosity("text", true);
/// assert_eq!(s.verbosity(), Verbosity::Verbose);
/// ```
#[must_use]
pub fn with_verbosity<T: ?Sized>(
    value: &T,
    verbosity: impl Into<Verbosity>,
) -> Streamer<'_, T> {
    Streamer::new(value, verbosity.into())
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, fmt, fmt::Write as _};

    use super::*;

    /// Counts how many times its hook has been invoked.
    #[derive(Default)]
    struct Probe {
        calls: Cell<usize>,
    }

    impl Details for Probe {
        fn fmt_details(
            &self,
            f: &mut fmt::Formatter<'_>,
            verbosity: Verbosity,
        ) -> fmt::Result {
            self.calls.set(self.calls.get() + 1);
            write!(f, "{verbosity}")
        }
    }

    #[test]
    fn brief_renders_value_only() {
        let i = 12;

        assert_eq!(brief(&i).to_string(), "12");
    }

    #[test]
    fn verbose_renders_address_and_value() {
        let i = 12;
        let out = verbose(&i).to_string();

        let addr = out
            .strip_prefix("i32 @")
            .and_then(|rest| rest.strip_suffix(" = 12"))
            .unwrap_or_else(|| panic!("unexpected output: {out}"));
        assert!(!addr.is_empty());
        assert_eq!(addr, format!("{:p}", &i));
    }

    #[test]
    fn chains_into_single_expression() {
        let i = 12;
        let mut out = String::new();

        write!(out, "test 1: {}\ntest 2: {}", brief(&i), brief(&(i + 1)))
            .unwrap();

        assert_eq!(out, "test 1: 12\ntest 2: 13");
    }

    #[test]
    fn passes_verbosity_to_hook() {
        let p = Probe::default();

        assert_eq!(brief(&p).to_string(), "brief");
        assert_eq!(verbose(&p).to_string(), "verbose");
        assert_eq!(with_verbosity(&p, false).to_string(), "brief");
        assert_eq!(with_verbosity(&p, Verbosity::Verbose).render(), "verbose");
    }

    #[test]
    fn invokes_hook_lazily_once_per_write() {
        let p = Probe::default();

        let s = verbose(&p);
        assert_eq!(p.calls.get(), 0);

        _ = s.to_string();
        assert_eq!(p.calls.get(), 1);
    }

    #[test]
    fn renders_unsized_values() {
        let s = "hello";

        assert_eq!(brief(s).to_string(), "hello");
        assert!(verbose(s).to_string().starts_with("str @"));
        assert!(verbose(s).to_string().ends_with(" = \"hello\""));
    }

    #[test]
    fn leaves_value_untouched() {
        let i = 42;

        let first = brief(&i).render();
        let second = brief(&i).render();

        assert_eq!(i, 42);
        assert_eq!(first, second);
    }

    #[test]
    fn exposes_parts() {
        let i = 7;
        let s = verbose(&i);
        let copy = s;

        assert!(std::ptr::eq(s.value(), &i));
        assert_eq!(copy.verbosity(), Verbosity::Verbose);
        assert_eq!(brief(&i).verbosity(), Verbosity::Brief);
    }

    #[test]
    fn debug_does_not_require_debug_value() {
        let p = Probe::default();

        let out = format!("{:?}", brief(&p));

        assert!(out.starts_with("Streamer {"), "{out}");
        assert!(out.contains("Probe"), "{out}");
        assert!(out.contains("Brief"), "{out}");
    }
}
