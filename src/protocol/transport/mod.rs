//! Station transport layer: extended identifier codec, CAN frame
//! representation, and bus abstraction traits.
//!
//! The physical driver (MCP2515 over SPI, SocketCAN, a serial gateway…)
//! stays outside the crate and plugs in through [`traits::can_bus::CanBus`].

pub mod can_frame;
pub mod can_id;
pub mod traits;
