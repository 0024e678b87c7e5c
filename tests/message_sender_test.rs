//! Integration tests for `MessageSender` over the in-memory bus.
mod helpers;

use bss_can::{
    error::SendMessageError,
    protocol::{
        lookups::{ActivityCode, ModuleAddress, PriorityLevel},
        transport::{
            can_id::CanId,
            traits::{can_bus::CanBus, message_sender::MessageSender},
        },
    },
};
use helpers::{FailingCanBus, MockCanBus, TxBufferFull};

#[tokio::test]
/// The frame received by the module carries the packed identifier and payload.
async fn send_message_packs_identifier() {
    let (mut center, mut module) = MockCanBus::create_pair();

    let sent_id = center
        .send_message(
            PriorityLevel::UltraHigh.into(),
            ActivityCode::SetRelayStates.into(),
            ModuleAddress::EightChannelRelay.into(),
            ModuleAddress::ControlCenter.into(),
            &[1, 2, 3, 4, 5, 6, 7, 8],
        )
        .await
        .expect("mock bus accepts frames");
    assert_eq!(sent_id, CanId(0x8403_090A));

    let frame = module.recv().await.expect("frame delivered");
    assert_eq!(frame.id, sent_id);
    assert_eq!(frame.payload(), &[1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(frame.id.activity(), Ok(ActivityCode::SetRelayStates));
    assert_eq!(frame.id.origin_module(), Ok(ModuleAddress::ControlCenter));
}

#[tokio::test]
/// Priority bits above bit 2 are dropped, never rejected.
async fn send_message_truncates_priority() {
    let (mut center, mut module) = MockCanBus::create_pair();

    center
        .send_message(0b1111_1010, 0, 0, 0, &[])
        .await
        .expect("mock bus accepts frames");

    let frame = module.recv().await.expect("frame delivered");
    assert_eq!(frame.id.priority(), 0b010);
    assert_eq!(frame.len, 0);
}

#[tokio::test]
async fn send_message_rejects_long_payload() {
    let (mut center, _module) = MockCanBus::create_pair();

    let result = center.send_message(1, 2, 3, 4, &[0; 9]).await;
    assert!(matches!(
        result,
        Err(SendMessageError::PayloadTooLong { len: 9 })
    ));
}

#[tokio::test]
/// Driver errors surface unchanged, without retries.
async fn send_message_propagates_bus_error() {
    let mut bus = FailingCanBus;

    let result = bus.send_message(1, 2, 3, 4, &[0; 8]).await;
    assert!(matches!(result, Err(SendMessageError::Send(TxBufferFull))));
}
