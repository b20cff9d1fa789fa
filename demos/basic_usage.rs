// ============================================================================
// Basic Usage Example
// ============================================================================
//
// Run with: cargo run --example basic_usage --features logging

use fixed_array::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    if let Err(e) = fixed_array::utils::init_logging(&fixed_array::utils::LoggingConfig::verbose())
    {
        eprintln!("{}", e);
    }

    println!("=== Fixed Array Example ===\n");
    println!("Target: {}\n", TargetCapabilities::detect());

    // Construction
    let mut position = Vector3d::default();
    position.fill(1.0);
    let velocity = Vector3d::broadcast(0.25);
    let image_box = Vector3i::new([0, -1, 2]);

    println!("position  = {:?}", position);
    println!("velocity  = {:?}", velocity);
    println!("image_box = {:?}\n", image_box);

    // Unchecked tier in the hot loop
    for step in 0..4 {
        for d in 0..position.len() {
            position[d] += velocity[d];
        }
        println!("step {}: position = {:?}", step, position);
    }

    // Checked tier at the boundary
    println!("\nChecked access:");
    for i in [2, 3] {
        match position.at(i) {
            Ok(v) => println!("  at({}) = {}", i, v),
            Err(e) => println!("  at({}) failed: {}", i, e),
        }
    }

    // Zero-length arrays behave like empty sequences
    let empty = FixedArray::<f64, 0>::default();
    println!(
        "\nempty: len = {}, is_empty = {}, items = {}",
        empty.len(),
        empty.is_empty(),
        empty.iter().count()
    );

    // Serialization hook
    println!("\nArchive round trip:");
    let mut stream: Vec<f64> = Vec::new();
    position.save(&mut stream).expect("Vec writer is infallible");
    velocity.save(&mut stream).expect("Vec writer is infallible");
    println!("  stream = {:?}", stream);

    let mut reader = IterReader::new(stream);
    let restored_position = Vector3d::load(&mut reader).expect("stream holds 6 values");
    let restored_velocity = Vector3d::load(&mut reader).expect("stream holds 6 values");
    println!("  restored position = {:?}", restored_position);
    println!("  restored velocity = {:?}", restored_velocity);

    match Vector3d::load(&mut reader) {
        Ok(v) => println!("  unexpected extra vector {:?}", v),
        Err(e) => println!("  third load: {}", e),
    }

    println!("\n=== Example Complete ===");
}
