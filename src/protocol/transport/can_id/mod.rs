//! Packing and unpacking of the extended CAN identifier used on the station
//! control bus.
//!
//! # Bit layout
//!
//! ```text
//! Bits  0-7   (8 bits) : Origin address
//! Bits  8-15  (8 bits) : Destination address
//! Bits 16-23  (8 bits) : Activity code
//! Bits 24-25  (2 bits) : Unused (0)
//! Bits 26-28  (3 bits) : Priority level
//! Bits 29-30  (2 bits) : Unused (0)
//! Bit  31     (1 bit ) : Extended frame marker (always 1 when encoding)
//! ```
//!
//! Decoding is total: any `u32` yields some field values, whether or not the
//! marker bit is set or unused bits carry data. Encoding keeps only the three
//! low bits of the priority input and silently drops the others.
use crate::error::{InvalidActivityCode, InvalidModuleAddress, InvalidPriorityLevel};
use crate::protocol::lookups::{ActivityCode, ModuleAddress, PriorityLevel};
use embedded_can::ExtendedId;

/// Marker bit flagging an extended (29-bit) frame, as in the MCP2515 `can_id`.
pub const EXTENDED_FRAME_FLAG: u32 = 1 << 31;
/// Bits carried on the wire by a CAN 2.0B extended identifier.
pub const EXTENDED_ID_MASK: u32 = 0x1FFF_FFFF;
/// Priority keeps three bits.
pub const PRIORITY_MASK: u8 = 0x07;
/// Priority used by `CanIdBuilder` when none is set.
pub const DEFAULT_PRIORITY: u8 = 0;

const PRIORITY_SHIFT: u32 = 26;
const ACTIVITY_CODE_SHIFT: u32 = 16;
const DESTINATION_SHIFT: u32 = 8;

//==================================================================================CODEC
/// Packs the four fields into an identifier with the marker bit set.
///
/// Bits of `priority` above bit 2 are discarded.
#[inline]
pub const fn encode(priority: u8, activity_code: u8, destination: u8, origin: u8) -> u32 {
    EXTENDED_FRAME_FLAG
        | (((priority & PRIORITY_MASK) as u32) << PRIORITY_SHIFT)
        | ((activity_code as u32) << ACTIVITY_CODE_SHIFT)
        | ((destination as u32) << DESTINATION_SHIFT)
        | (origin as u32)
}

/// Priority level (bits 26-28), returned in bits 0-2.
#[inline]
pub const fn decode_priority(id: u32) -> u8 {
    ((id >> PRIORITY_SHIFT) as u8) & PRIORITY_MASK
}

/// Activity code (bits 16-23).
#[inline]
pub const fn decode_activity_code(id: u32) -> u8 {
    ((id >> ACTIVITY_CODE_SHIFT) & 0xFF) as u8
}

/// Destination address (bits 8-15).
#[inline]
pub const fn decode_destination(id: u32) -> u8 {
    ((id >> DESTINATION_SHIFT) & 0xFF) as u8
}

/// Origin address (bits 0-7).
#[inline]
pub const fn decode_origin(id: u32) -> u8 {
    (id & 0xFF) as u8
}

//==================================================================================CAN_ID
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Raw station identifier, including the bit 31 marker, with accessors for
/// each field.
pub struct CanId(pub u32);

/// The four fields of a decoded identifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CanIdFields {
    pub priority: u8,
    pub activity_code: u8,
    pub destination: u8,
    pub origin: u8,
}

impl CanId {
    /// Encodes the four fields, see [`encode`].
    #[inline]
    pub const fn new(priority: u8, activity_code: u8, destination: u8, origin: u8) -> Self {
        Self(encode(priority, activity_code, destination, origin))
    }

    /// Creates a `CanIdBuilder` with every field cleared.
    pub fn builder() -> CanIdBuilder {
        CanIdBuilder::new()
    }

    /// Wraps an identifier received from the bus.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the underlying `u32`.
    #[inline]
    pub const fn raw(&self) -> u32 {
        self.0
    }

    /// Priority (3 bits, value 0-7).
    #[inline]
    pub const fn priority(&self) -> u8 {
        decode_priority(self.0)
    }

    #[inline]
    pub const fn activity_code(&self) -> u8 {
        decode_activity_code(self.0)
    }

    #[inline]
    pub const fn destination(&self) -> u8 {
        decode_destination(self.0)
    }

    #[inline]
    pub const fn origin(&self) -> u8 {
        decode_origin(self.0)
    }

    /// All four fields at once.
    pub const fn fields(&self) -> CanIdFields {
        CanIdFields {
            priority: self.priority(),
            activity_code: self.activity_code(),
            destination: self.destination(),
            origin: self.origin(),
        }
    }

    /// Whether the bit 31 marker is present.
    #[inline]
    pub const fn is_extended(&self) -> bool {
        self.0 & EXTENDED_FRAME_FLAG != 0
    }

    // Typed views over the raw fields

    /// Priority as a `PriorityLevel`. Always succeeds since every 3-bit value
    /// has a name.
    pub fn priority_level(&self) -> Result<PriorityLevel, InvalidPriorityLevel> {
        PriorityLevel::try_from(self.priority())
    }

    pub fn activity(&self) -> Result<ActivityCode, InvalidActivityCode> {
        ActivityCode::try_from(self.activity_code())
    }

    pub fn destination_module(&self) -> Result<ModuleAddress, InvalidModuleAddress> {
        ModuleAddress::try_from(self.destination())
    }

    pub fn origin_module(&self) -> Result<ModuleAddress, InvalidModuleAddress> {
        ModuleAddress::try_from(self.origin())
    }

    /// 29-bit identifier as carried on the wire (marker and bits 29-31 dropped).
    pub fn extended_id(&self) -> ExtendedId {
        ExtendedId::new(self.0 & EXTENDED_ID_MASK).unwrap_or(ExtendedId::MAX)
    }
}

impl From<CanIdFields> for CanId {
    fn from(fields: CanIdFields) -> Self {
        Self::new(
            fields.priority,
            fields.activity_code,
            fields.destination,
            fields.origin,
        )
    }
}

impl From<u32> for CanId {
    #[inline]
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<CanId> for u32 {
    #[inline]
    fn from(id: CanId) -> Self {
        id.0
    }
}

impl From<ExtendedId> for CanId {
    /// Restores the marker bit dropped when the identifier went on the wire.
    fn from(id: ExtendedId) -> Self {
        Self(EXTENDED_FRAME_FLAG | id.as_raw())
    }
}

//==================================================================================CAN_ID_BUILDER
#[derive(Debug, Clone, Copy, Default)]
/// Fluent builder accepting raw `u8` fields or the station lookups.
pub struct CanIdBuilder {
    pub priority: u8,
    pub activity_code: u8,
    pub destination: u8,
    pub origin: u8,
}

impl CanIdBuilder {
    /// Initializes the builder with `DEFAULT_PRIORITY` and zeroed fields.
    pub const fn new() -> Self {
        Self {
            priority: DEFAULT_PRIORITY,
            activity_code: 0,
            destination: 0,
            origin: 0,
        }
    }

    /// Sets the priority; only the three low bits are kept.
    pub fn priority(mut self, priority: impl Into<u8>) -> Self {
        self.priority = priority.into() & PRIORITY_MASK;
        self
    }

    pub fn activity_code(mut self, activity_code: impl Into<u8>) -> Self {
        self.activity_code = activity_code.into();
        self
    }

    pub fn destination(mut self, destination: impl Into<u8>) -> Self {
        self.destination = destination.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<u8>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Packs the configured fields. Infallible.
    pub const fn build(self) -> CanId {
        CanId::new(
            self.priority,
            self.activity_code,
            self.destination,
            self.origin,
        )
    }
}
