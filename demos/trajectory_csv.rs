//! 2D path trajectory example.
//!
//! Parses a TOML path request and prints the trajectory as CSV, including
//! the all-zero start row expected by the downstream tooling.

use motion_profiles::parse_request;

const REQUEST: &str = r#"
[path]
dt = 0.02

[path.limits]
max_velocity_m_per_sec = 3.0
max_acceleration_m_per_sec2 = 1.5

[[path.waypoints]]
x = 0.0
y = 0.0
heading_degrees = 0.0

[[path.waypoints]]
x = 4.0
y = 2.0

[[path.waypoints]]
x = 8.0
y = 0.0
"#;

fn main() -> Result<(), motion_profiles::Error> {
    let request = parse_request(REQUEST)?;
    let path = request.path.expect("request carries a path section");
    let trajectory = path.build()?.calculate()?;

    println!("dt,x,y,position,velocity,acceleration,jerk,heading");
    for sample in &trajectory {
        println!(
            "{},{},{},{},{},{},{},{}",
            sample.dt,
            sample.x,
            sample.y,
            sample.position,
            sample.velocity,
            sample.acceleration,
            sample.jerk,
            sample.heading
        );
    }

    Ok(())
}
