// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`Details`] hooks for primitive and textual [`std`] types.
//!
//! Coherence rules forbid downstream crates implementing [`Details`] for
//! these types, so they're provided here:
//! - [`Verbosity::Brief`] renders the value's [`Display`];
//! - [`Verbosity::Verbose`] renders `<type> @<address> = <Debug>`.
//!
//! To render them differently, wrap them into a newtype.
//!
//! [`Display`]: fmt::Display

use std::fmt;

use crate::{Details, Verbosity};

/// Renders `value` with the hooks described in the module docs.
fn fmt_primitive<T: fmt::Debug + fmt::Display + ?Sized>(
    value: &T,
    name: &str,
    f: &mut fmt::Formatter<'_>,
    verbosity: Verbosity,
) -> fmt::Result {
    match verbosity {
        Verbosity::Brief => write!(f, "{}", value),
        Verbosity::Verbose => {
            write!(f, "{} @{:p} = {:?}", name, value, value)
        }
    }
}

macro_rules! impl_details {
    ($($ty:ty => $name:literal),* $(,)?) => {$(
        impl Details for $ty {
            fn fmt_details(
                &self,
                f: &mut fmt::Formatter<'_>,
                verbosity: Verbosity,
            ) -> fmt::Result {
                fmt_primitive(self, $name, f, verbosity)
            }
        }
    )*};
}

impl_details! {
    i8 => "i8", i16 => "i16", i32 => "i32", i64 => "i64", i128 => "i128",
    isize => "isize",
    u8 => "u8", u16 => "u16", u32 => "u32", u64 => "u64", u128 => "u128",
    usize => "usize",
    f32 => "f32", f64 => "f64",
    bool => "bool", char => "char",
    str => "str", String => "String",
}
