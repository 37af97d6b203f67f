// ── Global statistics catalog ──
//
// The fabric-wide metrics shown on the stats page. Static until a live
// feed exists; `live_sample` simulates one.

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::derive::{self, CityMultiplier};
use crate::model::{NetworkStat, StatCategory, StatFormat, StatValue, TrafficDataPoint, Trend};

fn stat(
    id: &str,
    label: &str,
    value: f64,
    unit: &str,
    trend: Option<(Trend, Option<&str>)>,
    format: StatFormat,
    category: StatCategory,
) -> NetworkStat {
    NetworkStat {
        id: id.into(),
        label: label.into(),
        value: StatValue::Number(value),
        unit: unit.into(),
        trend: trend.map(|(t, _)| t),
        trend_value: trend.and_then(|(_, v)| v).map(Into::into),
        format: Some(format),
        category,
    }
}

/// The fabric-wide catalog, in display order.
pub fn network_stats() -> Vec<NetworkStat> {
    use StatCategory::{Geographic, Network, Performance, Traffic};
    use StatFormat::{Decimal, Number};
    use Trend::{Down, Stable, Up};

    vec![
        // Traffic
        stat(
            "total_traffic",
            "Total Traffic",
            124.5,
            "Tbps",
            Some((Up, Some("+12.3%"))),
            Decimal,
            Traffic,
        ),
        stat(
            "peak_traffic",
            "Peak Traffic (24h)",
            156.2,
            "Tbps",
            Some((Up, Some("+8.1%"))),
            Decimal,
            Traffic,
        ),
        stat(
            "avg_traffic",
            "Average Traffic",
            98.7,
            "Tbps",
            None,
            Decimal,
            Traffic,
        ),
        // Network
        stat(
            "total_peers",
            "Connected Networks",
            4921.0,
            "Peers",
            Some((Up, Some("+47"))),
            Number,
            Network,
        ),
        stat(
            "active_ports",
            "Active Ports",
            12847.0,
            "Ports",
            Some((Up, Some("+152"))),
            Number,
            Network,
        ),
        stat(
            "total_capacity",
            "Total Capacity",
            450.0,
            "Tbps",
            None,
            Number,
            Network,
        ),
        stat(
            "ipv4_prefixes",
            "IPv4 Prefixes",
            892_345.0,
            "Routes",
            Some((Stable, None)),
            Number,
            Network,
        ),
        stat(
            "ipv6_prefixes",
            "IPv6 Prefixes",
            145_678.0,
            "Routes",
            Some((Up, Some("+2.1%"))),
            Number,
            Network,
        ),
        // Performance
        stat(
            "avg_latency",
            "Global Latency",
            0.4,
            "ms",
            Some((Down, Some("-0.1ms"))),
            Decimal,
            Performance,
        ),
        stat(
            "uptime",
            "Network Uptime",
            99.99,
            "%",
            Some((Stable, None)),
            Decimal,
            Performance,
        ),
        stat(
            "packet_loss",
            "Packet Loss",
            0.001,
            "%",
            Some((Down, Some("-0.0002%"))),
            Decimal,
            Performance,
        ),
        // Geographic
        stat(
            "locations",
            "Global Locations",
            6.0,
            "Cities",
            None,
            Number,
            Geographic,
        ),
        stat(
            "countries",
            "Countries Served",
            45.0,
            "Countries",
            None,
            Number,
            Geographic,
        ),
        stat(
            "continents",
            "Continents",
            5.0,
            "Regions",
            None,
            Number,
            Geographic,
        ),
    ]
}

/// Fabric-wide hourly traffic series ending at `now`.
pub fn traffic_series<R: Rng + ?Sized>(now: DateTime<Utc>, rng: &mut R) -> Vec<TrafficDataPoint> {
    derive::traffic_series(CityMultiplier::IDENTITY.traffic, now, rng)
}

/// Simulated live refresh: every numeric value moves by up to ±1.
pub fn live_sample<R: Rng + ?Sized>(stats: &[NetworkStat], rng: &mut R) -> Vec<NetworkStat> {
    stats
        .iter()
        .map(|s| {
            let mut s = s.clone();
            if let StatValue::Number(v) = s.value {
                s.value = StatValue::Number(v + rng.gen_range(-1.0..1.0));
            }
            s
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn catalog_ids_are_unique() {
        let stats = network_stats();
        let ids: HashSet<_> = stats.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), stats.len());
        assert_eq!(stats.len(), 14);
    }

    #[test]
    fn trend_values_only_where_published() {
        let stats = network_stats();
        let uptime = stats.iter().find(|s| s.id == "uptime").unwrap();
        assert_eq!(uptime.trend, Some(Trend::Stable));
        assert_eq!(uptime.trend_value, None);

        let peers = stats.iter().find(|s| s.id == "total_peers").unwrap();
        assert_eq!(peers.trend_value.as_deref(), Some("+47"));
    }

    #[test]
    fn live_sample_stays_within_one() {
        let base = network_stats();
        let mut rng = StdRng::seed_from_u64(3);
        let live = live_sample(&base, &mut rng);
        for (b, l) in base.iter().zip(&live) {
            let (b, l) = (b.value.as_f64().unwrap(), l.value.as_f64().unwrap());
            assert!((l - b).abs() <= 1.0);
        }
    }
}
