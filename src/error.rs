// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors of writing a [`Streamer`] into an [`io::Write`] sink.
//!
//! Writing into a [`fmt::Write`] sink never produces these: it reports
//! a plain [`fmt::Error`] as usual.
//!
//! [`Streamer`]: crate::Streamer

use std::{fmt, io};

use derive_more::{Display, From};

/// Failure of [`WriteDetailsExt::write_details()`].
///
/// [`WriteDetailsExt::write_details()`]: crate::WriteDetailsExt::write_details
#[derive(Debug, Display, derive_more::Error, From)]
pub enum Error {
    /// Underlying [`io::Write`] sink failed.
    #[display("I/O error: {_0}")]
    Io(io::Error),

    /// [`Details`] hook failed while the sink didn't.
    ///
    /// [`Details`]: crate::Details
    #[display("Format error: {_0}")]
    Format(fmt::Error),
}

/// Result type alias for writing into [`io::Write`] sinks.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Indicates whether this is an [`Error::Io`].
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }

    /// Indicates whether this is an [`Error::Format`].
    #[must_use]
    pub const fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Io(e) => e,
            Error::Format(e) => Self::other(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn displays_with_kind_prefix() {
        let io = Error::from(io::Error::new(io::ErrorKind::BrokenPipe, "gone"));
        let fmt = Error::from(fmt::Error);

        assert_eq!(io.to_string(), "I/O error: gone");
        assert_eq!(
            fmt.to_string(),
            "Format error: an error occurred when formatting an argument",
        );
    }

    #[test]
    fn predicates() {
        let io = Error::Io(io::ErrorKind::Other.into());

        assert!(io.is_io());
        assert!(!io.is_format());
        assert!(Error::Format(fmt::Error).is_format());
    }

    #[test]
    fn implements_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}

        assert_error::<Error>();
        assert!(Error::Format(fmt::Error).source().is_some());
    }

    #[test]
    fn exposes_source() {
        let err = Error::from(io::Error::new(io::ErrorKind::Other, "inner"));

        assert_eq!(err.source().map(ToString::to_string).as_deref(), Some("inner"));
    }

    #[test]
    fn converts_into_io_error() {
        let io: io::Error = Error::Io(io::ErrorKind::BrokenPipe.into()).into();
        assert_eq!(io.kind(), io::ErrorKind::BrokenPipe);

        let io: io::Error = Error::Format(fmt::Error).into();
        assert_eq!(io.kind(), io::ErrorKind::Other);
    }
}
