//! `bss-can` library: identifier codec, frame helpers, and bus abstractions
//! for the CAN control bus of a battery-swapping station, usable in a
//! `no_std` environment. The crate exposes the error types and the protocol
//! layer (lookups, identifier codec, frames, and transport traits).
#![no_std]
//==================================================================================
/// Errors raised by the fallible surfaces (lookups, serial lines, sending).
pub mod error;
/// Station protocol: lookup tables, 29-bit identifier codec, frames, and
/// bus traits.
pub mod protocol;
//==================================================================================
