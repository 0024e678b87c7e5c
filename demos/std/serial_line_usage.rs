//! Serial gateway lines: parse the frames forwarded by the bus gateway and
//! format frames for the way back.

use bss_can::protocol::{
    lookups::{ActivityCode, ModuleAddress, PriorityLevel},
    transport::can_frame::CanFrame,
};

fn main() {
    println!("=== Serial line usage ===\n");

    let incoming = [
        "2415987209-0,0,0,0,0,0,0,0,\n",
        "2349926913-1,0,0,0,0,0,0,0,\n",
        "2349926913-1,0,0,\n",
    ];

    for line in incoming {
        match CanFrame::from_serial_line(line) {
            Ok(frame) => println!(
                "  {:?} from {:?} to {:?}: {:?}",
                frame.id.activity(),
                frame.id.origin_module(),
                frame.id.destination_module(),
                frame.data
            ),
            Err(e) => println!("  Rejected {:?}: {}", line, e),
        }
    }

    println!("\nOutgoing:");
    let command = CanFrame::from_fields(
        PriorityLevel::High,
        ActivityCode::SetLedStripState,
        ModuleAddress::Slot5,
        ModuleAddress::ControlCenter,
        &[2, 0, 0, 0, 0, 0, 0, 0],
    )
    .unwrap();
    let mut line = String::new();
    command.write_serial_line(&mut line).unwrap();
    print!("  {}", line);
}
