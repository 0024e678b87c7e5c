//! In-memory representation of a station CAN frame, payload reset, and the
//! text line format used on the serial link between the control center and
//! the bus gateway.
//!
//! # Serial line format
//!
//! One frame per line, identifier and payload bytes in decimal:
//!
//! ```text
//! 2349926913-1,0,0,0,0,0,0,0,\n
//! ```
use crate::error::FrameParseError;
use crate::protocol::transport::can_id::CanId;
use core::fmt;
use core::str::FromStr;
use embedded_can::{Frame, Id};

/// Classic CAN payload size.
pub const PAYLOAD_LEN: usize = 8;

/// Resets every payload byte to zero in place.
#[inline]
pub fn clear_payload(payload: &mut [u8; PAYLOAD_LEN]) {
    payload.fill(0);
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Raw frame as exchanged with the CAN driver.
pub struct CanFrame {
    /// Identifier including the bit 31 marker.
    pub id: CanId,
    /// Payload buffer. Classic CAN frames always provide eight bytes.
    pub data: [u8; PAYLOAD_LEN],
    /// Number of valid payload bytes (Data Length Code, 0 to 8).
    pub len: usize,
}

impl CanFrame {
    /// Builds a frame from a payload of at most eight bytes; unused bytes stay zero.
    pub fn new(id: CanId, payload: &[u8]) -> Option<Self> {
        if payload.len() > PAYLOAD_LEN {
            return None;
        }
        let mut data = [0u8; PAYLOAD_LEN];
        data[..payload.len()].copy_from_slice(payload);
        Some(Self {
            id,
            data,
            len: payload.len(),
        })
    }

    /// Encodes the identifier from its fields, then builds the frame.
    pub fn from_fields(
        priority: impl Into<u8>,
        activity_code: impl Into<u8>,
        destination: impl Into<u8>,
        origin: impl Into<u8>,
        payload: &[u8],
    ) -> Option<Self> {
        let id = CanId::builder()
            .priority(priority)
            .activity_code(activity_code)
            .destination(destination)
            .origin(origin)
            .build();
        Self::new(id, payload)
    }

    /// Valid payload bytes.
    #[inline]
    pub fn payload(&self) -> &[u8] {
        &self.data[..self.len.min(PAYLOAD_LEN)]
    }

    /// Zeroes the payload buffer; `len` is left untouched.
    #[inline]
    pub fn clear_data(&mut self) {
        clear_payload(&mut self.data);
    }

    /// Parses one serial line.
    ///
    /// Trailing `\r`/`\n` are ignored, the last comma is optional, and exactly
    /// eight payload bytes are required.
    pub fn from_serial_line(line: &str) -> Result<Self, FrameParseError> {
        let line = line.trim_end_matches(['\r', '\n']);
        let (raw_id, raw_data) = line
            .split_once('-')
            .ok_or(FrameParseError::MissingSeparator)?;
        let id = raw_id
            .trim()
            .parse::<u32>()
            .map_err(|_| FrameParseError::InvalidId)?;

        let raw_data = raw_data.strip_suffix(',').unwrap_or(raw_data);
        let mut data = [0u8; PAYLOAD_LEN];
        let mut found = 0;
        for (index, raw_byte) in raw_data.split(',').enumerate() {
            let byte = raw_byte
                .trim()
                .parse::<u8>()
                .map_err(|_| FrameParseError::InvalidByte { index })?;
            if let Some(slot) = data.get_mut(index) {
                *slot = byte;
            }
            found += 1;
        }
        if found != PAYLOAD_LEN {
            #[cfg(feature = "defmt")]
            defmt::debug!("Rejected serial line with {} payload bytes", found);
            return Err(FrameParseError::InvalidDataLength { found });
        }

        Ok(Self {
            id: CanId(id),
            data,
            len: PAYLOAD_LEN,
        })
    }

    /// Writes the frame as one serial line, newline included.
    pub fn write_serial_line<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(out, "{}", self)
    }
}

impl fmt::Display for CanFrame {
    /// Serial line without its newline: `<id>-<b0>,...,<b7>,`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-", self.id.raw())?;
        for byte in &self.data {
            write!(f, "{},", byte)?;
        }
        Ok(())
    }
}

impl FromStr for CanFrame {
    type Err = FrameParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_serial_line(s)
    }
}

//==================================================================================EMBEDDED_CAN
/// Lets HAL drivers built on `embedded-can` consume station frames directly.
/// The station bus only carries extended data frames.
impl Frame for CanFrame {
    fn new(id: impl Into<Id>, data: &[u8]) -> Option<Self> {
        match id.into() {
            Id::Extended(id) => CanFrame::new(CanId::from(id), data),
            Id::Standard(_) => None,
        }
    }

    fn new_remote(_id: impl Into<Id>, _dlc: usize) -> Option<Self> {
        None
    }

    fn is_extended(&self) -> bool {
        true
    }

    fn is_remote_frame(&self) -> bool {
        false
    }

    fn id(&self) -> Id {
        Id::Extended(self.id.extended_id())
    }

    fn dlc(&self) -> usize {
        self.len
    }

    fn data(&self) -> &[u8] {
        self.payload()
    }
}
