//! Quickstart: pack a station identifier, read its fields back, and prepare
//! a frame for the CAN driver.

use bss_can::protocol::{
    lookups::{ActivityCode, ModuleAddress, PriorityLevel},
    transport::{
        can_frame::{clear_payload, CanFrame},
        can_id::{
            decode_activity_code, decode_destination, decode_origin, decode_priority, encode, CanId,
        },
    },
};

fn main() {
    println!("=== bss-can quickstart ===\n");

    // Example 1: raw codec.
    println!("1. Encoding raw fields:");
    let id = encode(1, 3, 9, 10);
    println!("  encode(1, 3, 9, 10) = 0x{:08X} ({})", id, id);
    println!(
        "  priority={} activity={} destination={} origin={}\n",
        decode_priority(id),
        decode_activity_code(id),
        decode_destination(id),
        decode_origin(id)
    );

    // Example 2: builder with the station lookups.
    println!("2. Building with lookups:");
    let can_id = CanId::builder()
        .priority(PriorityLevel::UltraHigh)
        .activity_code(ActivityCode::SetRelayStates)
        .destination(ModuleAddress::EightChannelRelay)
        .origin(ModuleAddress::ControlCenter)
        .build();
    println!("  Raw value: 0x{:08X}", can_id.raw());
    println!("  Fields: {:?}", can_id.fields());
    println!("  Activity: {:?}", can_id.activity());
    println!("  On the wire: 0x{:08X}\n", can_id.extended_id().as_raw());

    // Example 3: priority truncation.
    println!("3. Priority keeps three bits:");
    let truncated = CanId::new(0b1111_1101, 0, 0, 0);
    println!("  CanId::new(0b1111_1101, ..).priority() = {}\n", truncated.priority());

    // Example 4: frame preparation.
    println!("4. Preparing a frame:");
    let mut frame = CanFrame::new(can_id, &[1, 1, 0, 0, 1, 0, 1, 0]).unwrap();
    println!("  Before clear: {:?}", frame.data);
    clear_payload(&mut frame.data);
    println!("  After clear:  {:?}", frame.data);
}
