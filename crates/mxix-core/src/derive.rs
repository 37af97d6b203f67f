// ── Per-location statistics ──
//
// Projects the global stats catalog onto one location by scaling it with
// a fixed per-city multiplier. The scaling is pure; the only randomness
// (geographic jitter and the traffic series) comes from an injected RNG,
// so tests can pin it with a seeded generator.

use chrono::{DateTime, TimeDelta, Utc};
use rand::Rng;
use serde::Serialize;

use crate::catalog;
use crate::model::{LocationStats, NetworkStat, StatCategory, StatValue, TrafficDataPoint};

/// Scale factors applied to the global catalog for one location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CityMultiplier {
    pub traffic: f64,
    pub peers: f64,
    pub latency: f64,
}

impl CityMultiplier {
    pub const IDENTITY: Self = Self {
        traffic: 1.0,
        peers: 1.0,
        latency: 1.0,
    };
}

const MULTIPLIERS: &[(&str, CityMultiplier)] = &[
    ("nyc", m(0.28, 0.22, 1.5)),
    ("ams", m(0.35, 0.31, 0.8)),
    ("frk", m(0.32, 0.29, 0.9)),
    ("bom", m(0.12, 0.10, 2.4)),
    ("sin", m(0.18, 0.16, 2.1)),
    ("hkg", m(0.15, 0.13, 2.0)),
    ("tyo", m(0.20, 0.17, 1.8)),
    ("maa", m(0.08, 0.07, 2.6)),
    ("del", m(0.10, 0.09, 2.5)),
    ("dxb", m(0.09, 0.08, 2.2)),
];

const fn m(traffic: f64, peers: f64, latency: f64) -> CityMultiplier {
    CityMultiplier {
        traffic,
        peers,
        latency,
    }
}

/// Share of the global country count a single city serves, before jitter.
const COUNTRY_SHARE: f64 = 0.2;
/// Upper bound (inclusive) of the integer jitter added to `countries`.
const COUNTRY_JITTER: u32 = 3;

/// Hours (and points) in the traffic series.
pub const TRAFFIC_HOURS: u32 = 24;

/// Multiplier for `location_id`; unknown ids get [`CityMultiplier::IDENTITY`].
pub fn multiplier_for(location_id: &str) -> CityMultiplier {
    MULTIPLIERS
        .iter()
        .find(|(id, _)| *id == location_id)
        .map_or(CityMultiplier::IDENTITY, |(_, m)| *m)
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Deterministic part of the projection: every catalog stat scaled by
/// `multiplier`, with geographic counts narrowed to a single city.
pub fn scale_catalog(multiplier: CityMultiplier) -> Vec<NetworkStat> {
    catalog::network_stats()
        .into_iter()
        .map(|stat| scale_stat(stat, multiplier))
        .collect()
}

fn scale_stat(mut stat: NetworkStat, multiplier: CityMultiplier) -> NetworkStat {
    let StatValue::Number(value) = stat.value else {
        return stat;
    };

    let scaled = match (stat.category, stat.id.as_str()) {
        (StatCategory::Traffic, _) => round_to(value * multiplier.traffic, 1),
        (StatCategory::Network, _) => (value * multiplier.peers).floor(),
        (StatCategory::Performance, "avg_latency") => round_to(value * multiplier.latency, 2),
        (StatCategory::Geographic, "locations" | "continents") => 1.0,
        (StatCategory::Geographic, "countries") => {
            (value * multiplier.peers * COUNTRY_SHARE).floor().max(1.0)
        }
        _ => value,
    };
    stat.value = StatValue::Number(scaled);
    stat
}

/// Bounded perturbation of the geographic counts that vary per call.
pub fn apply_geographic_jitter<R: Rng + ?Sized>(stats: &mut [NetworkStat], rng: &mut R) {
    for stat in stats.iter_mut().filter(|s| s.id == "countries") {
        if let StatValue::Number(value) = stat.value {
            let jitter = rng.gen_range(0..=COUNTRY_JITTER);
            stat.value = StatValue::Number(value + f64::from(jitter));
        }
    }
}

/// Hourly series ending at `now`, oldest first.
///
/// Each value is `max(80·m, 100·m + uniform(-20, 20))` for traffic
/// multiplier `m`.
pub fn traffic_series<R: Rng + ?Sized>(
    traffic_multiplier: f64,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<TrafficDataPoint> {
    let floor = 80.0 * traffic_multiplier;
    let base = 100.0 * traffic_multiplier;
    (0..TRAFFIC_HOURS)
        .rev()
        .map(|hours_ago| {
            let variation = rng.gen_range(-20.0..20.0);
            TrafficDataPoint {
                timestamp: now - TimeDelta::hours(i64::from(hours_ago)),
                value: floor.max(base + variation),
            }
        })
        .collect()
}

/// Project the catalog onto one location at time `now`.
pub fn derive_location_stats<R: Rng + ?Sized>(
    location_id: &str,
    location_name: &str,
    location_code: &str,
    now: DateTime<Utc>,
    rng: &mut R,
) -> LocationStats {
    let multiplier = multiplier_for(location_id);
    let mut stats = scale_catalog(multiplier);
    apply_geographic_jitter(&mut stats, rng);

    LocationStats {
        location_id: location_id.into(),
        location_name: location_name.into(),
        location_code: location_code.into(),
        stats,
        traffic_data: traffic_series(multiplier.traffic, now, rng),
    }
}

/// [`derive_location_stats`] against the wall clock and the thread RNG.
pub fn get_city_stats(
    location_id: &str,
    location_name: &str,
    location_code: &str,
) -> LocationStats {
    derive_location_stats(
        location_id,
        location_name,
        location_code,
        Utc::now(),
        &mut rand::thread_rng(),
    )
}
