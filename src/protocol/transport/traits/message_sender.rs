//! `CanBus` extension providing a high-level API to send station messages:
//! it packs the identifier fields, builds the frame, and transmits it once.
//! Retries and arbitration are left to the driver.
use crate::{
    error::SendMessageError,
    protocol::transport::{
        can_frame::CanFrame,
        can_id::CanId,
        traits::can_bus::CanBus,
    },
};

/// Trait extending `CanBus` with an ergonomic message-sending helper.
pub trait MessageSender: CanBus
where
    <Self as CanBus>::Error: core::fmt::Debug,
{
    /// Encode the identifier, build the frame, and send it over the bus.
    ///
    /// Fields are raw `u8` values; the station lookups
    /// ([`PriorityLevel`](crate::protocol::lookups::PriorityLevel),
    /// [`ActivityCode`](crate::protocol::lookups::ActivityCode),
    /// [`ModuleAddress`](crate::protocol::lookups::ModuleAddress)) convert
    /// with `.into()`. Priority keeps its three low bits. Returns the
    /// identifier that went out.
    ///
    /// # Errors
    ///
    /// - [`SendMessageError::PayloadTooLong`] when `data` exceeds eight bytes
    /// - [`SendMessageError::Send`] when bus transmission fails
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use bss_can::protocol::{
    ///     lookups::{ActivityCode, ModuleAddress, PriorityLevel},
    ///     transport::traits::message_sender::MessageSender,
    /// };
    ///
    /// can_bus
    ///     .send_message(
    ///         PriorityLevel::High.into(),
    ///         ActivityCode::SetSolenoidState.into(),
    ///         ModuleAddress::Slot3.into(),
    ///         ModuleAddress::ControlCenter.into(),
    ///         &[1, 0, 0, 0, 0, 0, 0, 0],
    ///     )
    ///     .await?;
    /// ```
    fn send_message<'a>(
        &'a mut self,
        priority: u8,
        activity_code: u8,
        destination: u8,
        origin: u8,
        data: &'a [u8],
    ) -> impl core::future::Future<Output = Result<CanId, SendMessageError<Self::Error>>> + 'a;
}

impl<C: CanBus> MessageSender for C
where
    C::Error: core::fmt::Debug,
{
    fn send_message<'a>(
        &'a mut self,
        priority: u8,
        activity_code: u8,
        destination: u8,
        origin: u8,
        data: &'a [u8],
    ) -> impl core::future::Future<Output = Result<CanId, SendMessageError<Self::Error>>> + 'a {
        async move {
            let id = CanId::new(priority, activity_code, destination, origin);

            let Some(frame) = CanFrame::new(id, data) else {
                #[cfg(feature = "defmt")]
                defmt::warn!("Payload of {} bytes does not fit a CAN frame", data.len());
                return Err(SendMessageError::PayloadTooLong { len: data.len() });
            };

            #[cfg(feature = "defmt")]
            defmt::trace!(
                "Sending activity {} from {} to {} (priority {})",
                id.activity_code(),
                id.origin(),
                id.destination(),
                id.priority()
            );

            self.send(&frame).await.map_err(|e| {
                #[cfg(feature = "defmt")]
                defmt::warn!("CAN bus send error: {}", defmt::Debug2Format(&e));
                SendMessageError::Send(e)
            })?;

            Ok(id)
        }
    }
}
