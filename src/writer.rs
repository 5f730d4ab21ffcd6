// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Writing [`Streamer`]s into [`io::Write`] sinks.

use std::{fmt, io};

use sealed::sealed;

use crate::{error::Result, Details, Error, Streamer};

/// [`io::Write`] extension for writing [`Streamer`]s in chained expressions.
///
/// # Example
///
/// ```rust
/// use debug_stream::{brief, verbose, WriteDetailsExt as _};
///
/// let (a, b) = (1, 2);
/// let mut out = Vec::new();
/// out.write_details(brief(&a))?
///     .write_details_line(brief(&b))?
///     .write_details(verbose(&true))?;
///
/// let out = String::from_utf8(out).unwrap();
/// assert!(out.starts_with("12\nbool @"));
/// # Ok::<_, debug_stream::Error>(())
/// ```
#[sealed]
pub trait WriteDetailsExt: io::Write {
    /// Writes the given [`Streamer`] into this sink, returning the sink back.
    ///
    /// # Errors
    ///
    /// - [`Error::Io`] if this sink fails to write.
    /// - [`Error::Format`] if the [`Details`] hook fails on its own.
    fn write_details<T: Details + ?Sized>(
        &mut self,
        streamer: Streamer<'_, T>,
    ) -> Result<&mut Self>;

    /// Writes the given [`Streamer`] into this sink followed by a newline.
    ///
    /// # Errors
    ///
    /// Same as [`WriteDetailsExt::write_details()`].
    fn write_details_line<T: Details + ?Sized>(
        &mut self,
        streamer: Streamer<'_, T>,
    ) -> Result<&mut Self> {
        self.write_details(streamer)?.write_all(b"\n")?;
        Ok(self)
    }
}

#[sealed]
impl<W: io::Write + ?Sized> WriteDetailsExt for W {
    fn write_details<T: Details + ?Sized>(
        &mut self,
        streamer: Streamer<'_, T>,
    ) -> Result<&mut Self> {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            value_type = std::any::type_name::<T>(),
            verbosity = %streamer.verbosity(),
            "writing details",
        );

        let mut adapter = Adapter { inner: &mut *self, error: None };
        if let Err(e) = fmt::write(&mut adapter, format_args!("{streamer}")) {
            let err = adapter.error.map_or(Error::Format(e), Error::Io);

            #[cfg(feature = "tracing")]
            tracing::debug!(
                value_type = std::any::type_name::<T>(),
                error = %err,
                "failed to write details",
            );

            return Err(err);
        }
        Ok(self)
    }
}

/// [`fmt::Write`] over an [`io::Write`], remembering the [`io::Error`] that
/// [`fmt::Error`] loses.
struct Adapter<'w, W: ?Sized> {
    inner: &'w mut W,
    error: Option<io::Error>,
}

impl<W: io::Write + ?Sized> fmt::Write for Adapter<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|e| {
            self.error = Some(e);
            fmt::Error
        })
    }
}
