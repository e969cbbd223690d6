//! Replay the reference dispatch session and print the outcome.
//!
//! Run with: cargo run -p dispatch_core --example demo_run
//! Set RUST_LOG=dispatch_core=debug for per-operation events.

use dispatch_core::test_helpers::{REFERENCE_DESTINATIONS, REFERENCE_DRIVERS, REFERENCE_RIDERS};
use dispatch_core::{DispatchRegistry, RiderRegistry};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dispatch_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("--- Cab booking demo ---");
    let registry = DispatchRegistry::new();

    let mut drivers = Vec::new();
    for (name, location) in REFERENCE_DRIVERS {
        drivers.push(registry.register_driver(name, location)?);
    }
    let mut riders = Vec::new();
    for (name, location) in REFERENCE_RIDERS {
        riders.push(registry.register_rider(name, location)?);
    }

    for (rider, destination) in riders.iter().zip(REFERENCE_DESTINATIONS) {
        // A failed booking skips the dependent start/end steps.
        let trip = match registry.book_cab(rider.id, destination) {
            Ok(trip) => trip,
            Err(err) => {
                println!("Booking for {} failed: {err}", rider.name);
                continue;
            }
        };
        println!(
            "Trip booked: rider {} with driver {}",
            trip.rider_name, trip.driver_name
        );
        registry.start_trip(trip.id)?;
        registry.end_trip(trip.id)?;
    }

    println!();
    for driver in &drivers {
        println!(
            "Driver {} is {}",
            driver.name,
            registry.driver_status(driver.id)?
        );
    }

    for rider in &riders {
        println!("\nTrip history for rider {}:", rider.name);
        let trips = registry.rider_history(rider.id)?;
        if trips.is_empty() {
            println!("  (empty)");
            continue;
        }
        for trip in trips {
            println!(
                "  Trip {} | from {} -> to {} | driver {} | {}",
                trip.id, trip.start, trip.end, trip.driver_name, trip.status
            );
        }
    }

    let counts = registry.counts();
    println!(
        "\nDrivers available: {}  reserved: {}  trips completed: {}",
        counts.drivers_available, counts.drivers_reserved, counts.trips_completed
    );
    Ok(())
}
