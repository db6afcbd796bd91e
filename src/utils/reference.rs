//! The reference network: Kochi Metro Line 1 (Blue Line).
//!
//! 23 stations in a single line, a flat ₹5 fare per hop, one stop per
//! hop and a 2.5 minute ride between stations except on a few segments.
//! This is configuration data fed through the normal construction API;
//! nothing in the optimizer depends on it.

use crate::error::RouterError;
use crate::network::NetworkModel;
use crate::utils::graph::{build_line, Segment};

/// Line 1 stations from Aluva to Thripunithura.
pub const LINE_1_STATIONS: [&str; 23] = [
    "Aluva",
    "Pulinchodu",
    "Companypady",
    "Ambattukavu",
    "Muttom",
    "Kalamassery",
    "Cusat",
    "Pathadipalam",
    "Edapally",
    "Changampuzha Park",
    "Palarivattom",
    "J.L.N Stadium",
    "Kaloor",
    "Lissie",
    "M.G Road",
    "Maharajas",
    "Ernakulam South",
    "Kadavanthra",
    "Elamkulam",
    "Vyttila",
    "Thaikoodam",
    "Petta",
    "Thripunithura",
];

/// Fare per hop, in rupees.
pub const FARE_PER_HOP: f64 = 5.0;

/// Ride time between adjacent stations, in minutes.
pub const BASE_SEGMENT_MINUTES: f64 = 2.5;

/// Segments whose ride time differs from [`BASE_SEGMENT_MINUTES`].
const SPECIAL_SEGMENT_MINUTES: [(&str, &str, f64); 4] = [
    ("Aluva", "Pulinchodu", 3.0),
    ("Edapally", "Changampuzha Park", 2.0),
    ("M.G Road", "Maharajas", 1.5),
    ("Vyttila", "Thaikoodam", 3.5),
];

/// Fare zone of a Line 1 station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    /// City centre.
    One,
    Two,
    /// Both ends of the line.
    Three,
}

/// Returns the fare zone of a Line 1 station, `None` for any other name.
pub fn zone_of(station: &str) -> Option<Zone> {
    match station {
        "Aluva" | "Pulinchodu" | "Companypady" | "Thaikoodam" | "Petta" | "Thripunithura" => {
            Some(Zone::Three)
        }
        "M.G Road" | "Maharajas" | "Ernakulam South" | "Lissie" => Some(Zone::One),
        _ if LINE_1_STATIONS.iter().any(|s| *s == station) => Some(Zone::Two),
        _ => None,
    }
}

/// Ride time in minutes between two adjacent Line 1 stations, in either
/// direction.
pub fn segment_minutes(a: &str, b: &str) -> f64 {
    SPECIAL_SEGMENT_MINUTES
        .iter()
        .find(|(x, y, _)| (*x == a && *y == b) || (*x == b && *y == a))
        .map(|(_, _, minutes)| *minutes)
        .unwrap_or(BASE_SEGMENT_MINUTES)
}

/// Builds the Line 1 network.
pub fn kochi_metro_line_1() -> Result<NetworkModel, RouterError> {
    let network = build_line(&LINE_1_STATIONS, |a, b| Segment {
        cost: FARE_PER_HOP,
        time: segment_minutes(a, b),
        stops: 1,
    })?;
    debug!(
        "Built Kochi Metro Line 1 with {} stations and {} edges",
        network.station_count(),
        network.edge_count()
    );
    Ok(network)
}
