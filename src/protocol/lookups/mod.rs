//! Lookup tables giving names to the raw identifier fields used by the
//! station: priority levels, module addresses, and activity codes.
//!
//! Each table is a `#[repr(u8)]` enumeration with lossless `From<_> for u8`
//! and a checked `TryFrom<u8>` that reports unknown values through the
//! matching `Invalid*` error.
use crate::error::{InvalidActivityCode, InvalidModuleAddress, InvalidPriorityLevel};

/// Declares a `u8` lookup enumeration with its conversions.
macro_rules! lookup_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $invalid:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[repr(u8)]
        #[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        pub enum $name {
            #[default]
            $( $(#[$vmeta])* $variant = $value, )+
        }

        impl From<$name> for u8 {
            #[inline]
            fn from(value: $name) -> Self {
                value as u8
            }
        }

        impl TryFrom<u8> for $name {
            type Error = $invalid;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                match value {
                    $( $value => Ok($name::$variant), )+
                    other => Err($invalid(other)),
                }
            }
        }
    };
}

//==================================================================================PRIORITY_LEVEL
lookup_enum! {
    /// Message priority carried in bits 26-28 of the identifier.
    /// Lower values win bus arbitration; `None` marks an unset priority.
    PriorityLevel, InvalidPriorityLevel {
        None = 0,
        UltraHigh = 1,
        High = 2,
        MediumHigh = 3,
        Medium = 4,
        MediumLow = 5,
        Low = 6,
        UltraLow = 7,
    }
}

//==================================================================================MODULE_ADDRESS
lookup_enum! {
    /// Node addresses on the station bus (origin and destination fields).
    ModuleAddress, InvalidModuleAddress {
        None = 0,
        Slot1 = 1,
        Slot2 = 2,
        Slot3 = 3,
        Slot4 = 4,
        Slot5 = 5,
        Slot6 = 6,
        Slot7 = 7,
        Slot8 = 8,
        /// Eight-channel relay board driving the chargers.
        EightChannelRelay = 9,
        /// Control center (station computer).
        ControlCenter = 10,
    }
}

/// Number of battery slots served by the station.
pub const SLOT_COUNT: u8 = 8;

impl ModuleAddress {
    /// Address of battery slot `number` (1-based). `None` outside `1..=8`.
    pub fn slot(number: u8) -> Option<Self> {
        match number {
            1..=SLOT_COUNT => Self::try_from(number).ok(),
            _ => None,
        }
    }

    /// 1-based slot number when the address designates a battery slot.
    pub fn slot_number(&self) -> Option<u8> {
        match *self as u8 {
            n @ 1..=SLOT_COUNT => Some(n),
            _ => None,
        }
    }
}

//==================================================================================ACTIVITY_CODE
lookup_enum! {
    /// Purpose of a message (bits 16-23 of the identifier).
    ///
    /// `Report*` codes travel from a module to the control center, the others
    /// are commands sent by the control center to a module.
    ActivityCode, InvalidActivityCode {
        None = 0,
        ReportRelayStates = 1,
        SetRelayState = 2,
        SetRelayStates = 3,
        FlipRelayState = 4,
        FlipRelayStates = 5,
        ReportBatteryData0 = 6,
        ReportBatteryData1 = 7,
        ReportBatteryData2 = 8,
        ReportBatteryData3 = 9,
        ReportBatteryData4 = 10,
        ReportBatteryData5 = 11,
        ReportBatteryData6 = 12,
        ReportBatteryData7 = 13,
        ReportBatteryData8 = 14,
        ReportBatteryData9 = 15,
        ReportBatteryData10 = 16,
        ReportSlotPeripherals = 17,
        SetSolenoidState = 18,
        SetSolenoidsStates = 19,
        FlipSolenoidState = 20,
        FlipSolenoidsStates = 21,
        SetLedStripState = 22,
        ResetBatteryCanBusError = 23,
    }
}

impl ActivityCode {
    /// `true` for messages emitted by a module toward the control center.
    pub fn is_report(&self) -> bool {
        matches!(
            self,
            Self::ReportRelayStates
                | Self::ReportBatteryData0
                | Self::ReportBatteryData1
                | Self::ReportBatteryData2
                | Self::ReportBatteryData3
                | Self::ReportBatteryData4
                | Self::ReportBatteryData5
                | Self::ReportBatteryData6
                | Self::ReportBatteryData7
                | Self::ReportBatteryData8
                | Self::ReportBatteryData9
                | Self::ReportBatteryData10
                | Self::ReportSlotPeripherals
        )
    }

    /// `true` for commands emitted by the control center toward a module.
    pub fn is_command(&self) -> bool {
        *self != Self::None && !self.is_report()
    }

    /// Index (0-10) of a battery data frame, `None` for any other code.
    pub fn battery_data_index(&self) -> Option<u8> {
        let raw = *self as u8;
        let first = Self::ReportBatteryData0 as u8;
        let last = Self::ReportBatteryData10 as u8;
        (first..=last).contains(&raw).then(|| raw - first)
    }
}
