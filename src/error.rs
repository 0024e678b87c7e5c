//! Error definitions shared across library modules.
//! The identifier codec itself is total and never fails; these types only
//! cover lookup conversions, serial line parsing, and message transmission.
use thiserror_no_std::Error;

//==================================================================================LOOKUP_ERRORS
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Raw value does not map to any `PriorityLevel`.
#[error("Invalid priority level: {0}")]
pub struct InvalidPriorityLevel(pub u8);

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Raw value does not map to any `ModuleAddress`.
#[error("Invalid module address: {0}")]
pub struct InvalidModuleAddress(pub u8);

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Raw value does not map to any `ActivityCode`.
#[error("Invalid activity code: {0}")]
pub struct InvalidActivityCode(pub u8);

//==================================================================================SERIAL_LINE_ERRORS
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Failures while parsing a `<id>-<b0>,...,<b7>,` serial line.
pub enum FrameParseError {
    /// The `-` between identifier and payload is missing.
    #[error("Missing '-' separator between identifier and payload")]
    MissingSeparator,
    /// The identifier is not a decimal `u32`.
    #[error("Invalid identifier")]
    InvalidId,
    /// A payload entry is not a decimal `u8`.
    #[error("Invalid payload byte at index {index}")]
    InvalidByte { index: usize },
    /// The payload does not hold exactly eight bytes.
    #[error("Invalid payload length: expected 8, found {found}")]
    InvalidDataLength { found: usize },
}

//==================================================================================SEND_ERROR
#[derive(Debug, Error)]
/// Errors encountered when sending a station message (build + transmit).
pub enum SendMessageError<E: core::fmt::Debug> {
    /// Payload does not fit in a classic CAN frame.
    #[error("Payload too long: {len} bytes (max 8)")]
    PayloadTooLong { len: usize },
    /// CAN layer refused or failed to send the frame.
    #[error("CAN bus send error: {0:?}")]
    Send(E),
}
