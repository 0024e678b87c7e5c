//! Station protocol components: lookup tables for the identifier fields and
//! the CAN transport layer (identifier codec, frames, bus traits).
pub mod lookups;
pub mod transport;
