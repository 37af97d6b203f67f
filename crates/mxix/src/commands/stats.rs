//! Statistics command handlers.

use std::time::Duration;

use chrono::Utc;
use serde::Serialize;
use tabled::Tabled;

use mxix_core::format::format_stat_value;
use mxix_core::{
    CapacityFeed, GlobalFabricStats, Latency, NetworkStat, NetworkStats, StatCategory,
    TrafficDataPoint, catalog, derive,
};

use crate::cli::{OutputFormat, StatCategoryArg, StatsArgs, StatsCommand};
use crate::error::CliError;
use crate::output;

use super::{Context, util};

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct StatRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Metric")]
    label: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Unit")]
    unit: String,
    #[tabled(rename = "Trend")]
    trend: String,
    #[tabled(rename = "Category")]
    category: String,
}

fn stat_row(s: &NetworkStat, color: bool) -> StatRow {
    StatRow {
        id: s.id.clone(),
        label: s.label.clone(),
        value: format_stat_value(s),
        unit: s.unit.clone(),
        trend: output::trend_cell(
            s.trend,
            s.trend_value.as_deref(),
            s.category == StatCategory::Performance,
            color,
        ),
        category: s.category.to_string(),
    }
}

#[derive(Tabled)]
struct TrafficRow {
    #[tabled(rename = "Time (UTC)")]
    time: String,
    #[tabled(rename = "Tbps")]
    value: String,
}

impl From<&TrafficDataPoint> for TrafficRow {
    fn from(p: &TrafficDataPoint) -> Self {
        Self {
            time: p.timestamp.format("%Y-%m-%d %H:%M").to_string(),
            value: format!("{:.1}", p.value),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HeadlineStats<'a> {
    network_stats: &'a NetworkStats,
    global_fabric_stats: &'a GlobalFabricStats,
}

#[derive(Serialize)]
struct CapacitySnapshot<'a> {
    bars: &'a [f64],
    average: f64,
    peak: f64,
}

impl<'a> From<&'a CapacityFeed> for CapacitySnapshot<'a> {
    fn from(feed: &'a CapacityFeed) -> Self {
        Self {
            bars: feed.bars(),
            average: feed.average(),
            peak: feed.peak(),
        }
    }
}

// ── Renderers ───────────────────────────────────────────────────────

fn headline_detail(h: &HeadlineStats<'_>, color: bool) -> String {
    let n = h.network_stats;
    let f = h.global_fabric_stats;
    let latency = &n.global_latency;
    [
        output::heading("Network", color),
        format!("  Global latency:  {} {}", latency.value, latency.unit),
        format!("  Active nodes:    {}", n.active_nodes),
        format!("  Throughput:      {} Tbps", n.throughput),
        String::new(),
        output::heading("Global fabric", color),
        format!("  Total capacity:  {}", f.total_capacity),
        format!("  Active routes:   {}", f.active_routes),
        format!("  Avg latency:     {}", f.avg_latency),
        format!("  Global coverage: {}", f.global_coverage),
    ]
    .join("\n")
}

fn render_stats(ctx: &Context, stats: &[NetworkStat]) -> String {
    output::render_list(
        ctx.output,
        stats,
        |s| stat_row(s, ctx.color),
        |s| format!("{}\t{}", s.id, format_stat_value(s)),
    )
}

/// Min / average / max of a series, for the one-line summary.
fn traffic_summary(series: &[TrafficDataPoint]) -> String {
    if series.is_empty() {
        return String::new();
    }
    let values = series.iter().map(|p| p.value);
    let min = values.clone().fold(f64::INFINITY, f64::min);
    let max = values.clone().fold(f64::NEG_INFINITY, f64::max);
    let count = f64::from(u32::try_from(series.len()).unwrap_or(u32::MAX));
    let avg = values.sum::<f64>() / count;
    format!("Traffic (24h): min {min:.1} / avg {avg:.1} / max {max:.1} Tbps")
}

const SPARK: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

fn sparkline(bars: &[f64]) -> String {
    let span = CapacityFeed::MAX - CapacityFeed::MIN;
    bars.iter()
        .map(|b| {
            let level = ((b - CapacityFeed::MIN) / span * 7.0).round().clamp(0.0, 7.0);
            // level is within 0..=7 after the clamp
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let idx = level as usize;
            SPARK.get(idx).copied().unwrap_or(' ')
        })
        .collect()
}

fn render_capacity(ctx: &Context, feed: &CapacityFeed) -> String {
    let snap = CapacitySnapshot::from(feed);
    output::render_single(
        ctx.output,
        &snap,
        |s| {
            let bars = sparkline(s.bars);
            format!("{bars}\nAverage: {:.1}%  Peak: {:.1}%", s.average, s.peak)
        },
        |s| format!("{:.1}", s.average),
    )
}

fn category_filter(arg: StatCategoryArg) -> StatCategory {
    match arg {
        StatCategoryArg::Traffic => StatCategory::Traffic,
        StatCategoryArg::Network => StatCategory::Network,
        StatCategoryArg::Performance => StatCategory::Performance,
        StatCategoryArg::Geographic => StatCategory::Geographic,
    }
}

fn nothing_to_update() -> CliError {
    CliError::Validation {
        field: "flags".into(),
        reason: "pass at least one field to change, or --from-file".into(),
    }
}

// ── Handler ─────────────────────────────────────────────────────────

#[allow(clippy::too_many_lines)]
pub async fn handle(ctx: &Context, args: StatsArgs) -> Result<(), CliError> {
    match args.command {
        StatsCommand::Show => {
            let network = ctx.store.network_stats();
            let fabric = ctx.store.global_fabric_stats();
            let headline = HeadlineStats {
                network_stats: &network,
                global_fabric_stats: &fabric,
            };
            let out = output::render_single(
                ctx.output,
                &headline,
                |h| headline_detail(h, ctx.color),
                |h| {
                    format!(
                        "{}\t{}\t{}",
                        h.network_stats.global_latency.value,
                        h.network_stats.active_nodes,
                        h.network_stats.throughput
                    )
                },
            );
            ctx.print(&out);
            Ok(())
        }

        StatsCommand::SetNetwork {
            latency,
            latency_unit,
            active_nodes,
            throughput,
            from_file,
        } => {
            let next = if let Some(path) = from_file {
                util::read_json_file::<NetworkStats>(&path)?
            } else {
                if latency.is_none()
                    && latency_unit.is_none()
                    && active_nodes.is_none()
                    && throughput.is_none()
                {
                    return Err(nothing_to_update());
                }
                let current = ctx.store.network_stats();
                NetworkStats {
                    global_latency: Latency {
                        value: latency.unwrap_or(current.global_latency.value),
                        unit: latency_unit.unwrap_or_else(|| current.global_latency.unit.clone()),
                    },
                    active_nodes: active_nodes.unwrap_or(current.active_nodes),
                    throughput: throughput.unwrap_or(current.throughput),
                }
            };
            if !next.global_latency.value.is_finite() || next.global_latency.value < 0.0 {
                return Err(CliError::Validation {
                    field: "latency".into(),
                    reason: "must be a non-negative number".into(),
                });
            }
            ctx.require_admin()?;
            ctx.store.update_network_stats(next);
            ctx.status("Network stats updated");
            Ok(())
        }

        StatsCommand::SetFabric {
            total_capacity,
            active_routes,
            avg_latency,
            global_coverage,
            from_file,
        } => {
            let next = if let Some(path) = from_file {
                util::read_json_file::<GlobalFabricStats>(&path)?
            } else {
                if total_capacity.is_none()
                    && active_routes.is_none()
                    && avg_latency.is_none()
                    && global_coverage.is_none()
                {
                    return Err(nothing_to_update());
                }
                let current = ctx.store.global_fabric_stats();
                GlobalFabricStats {
                    total_capacity: total_capacity
                        .unwrap_or_else(|| current.total_capacity.clone()),
                    active_routes: active_routes.unwrap_or_else(|| current.active_routes.clone()),
                    avg_latency: avg_latency.unwrap_or_else(|| current.avg_latency.clone()),
                    global_coverage: global_coverage
                        .unwrap_or_else(|| current.global_coverage.clone()),
                }
            };
            ctx.require_admin()?;
            ctx.store.update_global_fabric_stats(next);
            ctx.status("Global fabric stats updated");
            Ok(())
        }

        StatsCommand::Catalog { category, live } => {
            let mut stats = catalog::network_stats();
            if live {
                stats = catalog::live_sample(&stats, &mut rand::thread_rng());
            }
            if let Some(arg) = category {
                let wanted = category_filter(arg);
                stats.retain(|s| s.category == wanted);
            }
            ctx.print(&render_stats(ctx, &stats));
            Ok(())
        }

        StatsCommand::City { id } => {
            let location = ctx
                .store
                .location(&id)
                .ok_or_else(|| CliError::not_found("location", &id))?;
            let stats = derive::get_city_stats(&location.id, &location.name, &location.code);
            let title = format!("{} ({})", stats.location_name, stats.location_code);

            let out = match ctx.output {
                OutputFormat::Table => [
                    output::heading(&title, ctx.color),
                    render_stats(ctx, &stats.stats),
                    traffic_summary(&stats.traffic_data),
                ]
                .join("\n"),
                OutputFormat::Plain => render_stats(ctx, &stats.stats),
                _ => output::render_single(
                    ctx.output,
                    &stats,
                    |_| String::new(),
                    |s| s.location_id.clone(),
                ),
            };
            ctx.print(&out);
            Ok(())
        }

        StatsCommand::Traffic { id } => {
            let series = match id {
                Some(id) => {
                    let location = ctx
                        .store
                        .location(&id)
                        .ok_or_else(|| CliError::not_found("location", &id))?;
                    derive::traffic_series(
                        derive::multiplier_for(&location.id).traffic,
                        Utc::now(),
                        &mut rand::thread_rng(),
                    )
                }
                None => catalog::traffic_series(Utc::now(), &mut rand::thread_rng()),
            };
            let out = output::render_list(
                ctx.output,
                &series,
                |p| TrafficRow::from(p),
                |p| format!("{}\t{:.1}", p.timestamp.to_rfc3339(), p.value),
            );
            ctx.print(&out);
            if ctx.output == OutputFormat::Table {
                ctx.print(&traffic_summary(&series));
            }
            Ok(())
        }

        StatsCommand::Capacity { ticks, interval_ms } => {
            let mut rng = rand::thread_rng();
            let mut feed = CapacityFeed::new(&mut rng);

            if interval_ms == 0 {
                for _ in 0..ticks {
                    feed.tick(&mut rng);
                }
                ctx.print(&render_capacity(ctx, &feed));
                return Ok(());
            }

            let delay = Duration::from_millis(interval_ms);
            ctx.print(&render_capacity(ctx, &feed));
            for _ in 0..ticks {
                tokio::time::sleep(delay).await;
                feed.tick(&mut rng);
                ctx.print(&render_capacity(ctx, &feed));
            }
            Ok(())
        }
    }
}
