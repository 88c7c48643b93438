//! 1D motion profile example.
//!
//! Builds a motion profile from envelope parameters and prints the sample
//! sequence as CSV, the format consumed by the downstream tooling.

use motion_profiles::config::units::UnitExt;
use motion_profiles::MotionProfile;

fn main() -> Result<(), motion_profiles::Error> {
    let mut profile = MotionProfile::new(
        0.1.seconds(),          // dt
        1.0.seconds(),          // t1: acceleration ends
        2.0.seconds(),          // t2: deceleration begins
        2.0.meters_per_sec(),   // programmed velocity
        4.0.meters(),           // distance
    )?;

    println!("Time,Velocity,Position,Acceleration");
    while !profile.is_finished() {
        let sample = profile.calculate()?;
        println!(
            "{},{},{},{}",
            sample.time, sample.velocity, sample.position, sample.acceleration
        );
    }

    Ok(())
}
