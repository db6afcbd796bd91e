//! Helper functions for building networks.

use crate::error::RouterError;
use crate::network::NetworkModel;

/// Raw attributes of one segment between adjacent stations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub cost: f64,
    pub time: f64,
    pub stops: u32,
}

/// Build a line: every station is connected to its predecessor and
/// successor in `stations`.
///
/// # Arguments
/// * `stations` - Station names in line order.
/// * `segment_function` - A function that takes two adjacent station
///   names and returns the attributes of the segment between them.
///
/// # Returns
/// A network with `stations.len()` stations and `stations.len() - 1`
/// edges, or the first construction error.
pub fn build_line(
    stations: &[&str],
    segment_function: impl Fn(&str, &str) -> Segment,
) -> Result<NetworkModel, RouterError> {
    let mut network = NetworkModel::new();
    extend_line(&mut network, stations, segment_function)?;
    Ok(network)
}

/// Adds a line to an existing network.
///
/// Stations that already exist are reused, which is how a second line
/// joins the first at an interchange.
pub fn extend_line(
    network: &mut NetworkModel,
    stations: &[&str],
    segment_function: impl Fn(&str, &str) -> Segment,
) -> Result<(), RouterError> {
    for station in stations {
        if !network.contains(station) {
            network.add_station(station)?;
        }
    }
    for pair in stations.windows(2) {
        let Segment { cost, time, stops } = segment_function(pair[0], pair[1]);
        network.add_edge(pair[0], pair[1], cost, time, stops)?;
    }
    Ok(())
}
