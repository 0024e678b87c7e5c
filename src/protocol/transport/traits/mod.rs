//! Abstraction traits used by the transport layer (CAN bus and message sender).
pub mod can_bus;
pub mod message_sender;
