//! Location command handlers.

use tabled::Tabled;

use mxix_core::{Asn, EnabledSite, Location};

use crate::cli::{LocationsArgs, LocationsCommand};
use crate::error::CliError;
use crate::output;

use super::{Context, util};

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct LocationRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Region")]
    region: String,
    #[tabled(rename = "ASNs")]
    asns: u32,
    #[tabled(rename = "Sites")]
    sites: u32,
}

impl From<&Location> for LocationRow {
    fn from(l: &Location) -> Self {
        Self {
            id: l.id.clone(),
            name: l.name.clone(),
            code: l.code.clone(),
            region: l.region.clone(),
            asns: l.asns,
            sites: l.sites,
        }
    }
}

#[derive(Tabled)]
struct AsnRow {
    #[tabled(rename = "ASN")]
    asn: u32,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Policy")]
    policy: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl From<&Asn> for AsnRow {
    fn from(a: &Asn) -> Self {
        Self {
            asn: a.asn_number,
            name: a.name.clone(),
            policy: a.peering_policy.to_string(),
            status: a.status.to_string(),
        }
    }
}

#[derive(Tabled)]
struct SiteRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Provider")]
    provider: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl From<&EnabledSite> for SiteRow {
    fn from(s: &EnabledSite) -> Self {
        Self {
            id: s.id.clone(),
            name: s.name.clone(),
            provider: s.provider.clone(),
            status: s.status.to_string(),
        }
    }
}

fn detail(l: &Location) -> String {
    let region_note = match l.known_region() {
        Some(_) => "",
        None => " (unrecognized)",
    };
    let lat = l.coordinates.latitude();
    let lon = l.coordinates.longitude();
    let mut lines = vec![
        format!("ID:          {}", l.id),
        format!("Name:        {}", l.name),
        format!("Code:        {}", l.code),
        format!("Region:      {}{region_note}", l.region),
        format!("Coordinates: {lat:.4}, {lon:.4}"),
        format!("ASNs:        {}", l.asns),
        format!("Sites:       {}", l.sites),
    ];
    if !l.asn_list.is_empty() {
        let listed = l.asn_list.len();
        let active = l.active_asns().count();
        lines.push(format!("Peers:       {listed} listed, {active} active"));
    }
    if !l.enabled_sites.is_empty() {
        lines.push(String::new());
        lines.push("Data centers:".into());
        for s in &l.enabled_sites {
            let address = util::or_dash(&s.address);
            lines.push(format!("  {} ({}, {})  {address}", s.name, s.provider, s.status));
        }
    }
    lines.join("\n")
}

fn find(ctx: &Context, id: &str) -> Result<Location, CliError> {
    ctx.store
        .location(id)
        .ok_or_else(|| CliError::not_found("location", id))
}

/// Coordinates outside the globe are almost always swapped lat/lon.
fn validate(location: &Location) -> Result<(), CliError> {
    if location.id.trim().is_empty() {
        return Err(CliError::Validation {
            field: "id".into(),
            reason: "must not be empty".into(),
        });
    }
    if !location.coordinates.is_valid() {
        let lon = location.coordinates.longitude();
        let lat = location.coordinates.latitude();
        return Err(CliError::Validation {
            field: "coordinates".into(),
            reason: format!(
                "expected [lon, lat] within [-180, 180] and [-90, 90], got [{lon}, {lat}]"
            ),
        });
    }
    Ok(())
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(ctx: &Context, args: LocationsArgs) -> Result<(), CliError> {
    match args.command {
        LocationsCommand::List { region } => {
            let all = ctx.store.locations();
            let snap: Vec<&Location> = all
                .iter()
                .filter(|l| {
                    region
                        .as_deref()
                        .is_none_or(|r| l.region.eq_ignore_ascii_case(r))
                })
                .collect();
            let out = output::render_list(
                ctx.output,
                &snap,
                |l| LocationRow::from(*l),
                |l| l.id.clone(),
            );
            ctx.print(&out);
            Ok(())
        }

        LocationsCommand::Show { id } => {
            let location = find(ctx, &id)?;
            let out = output::render_single(ctx.output, &location, detail, |l| l.id.clone());
            ctx.print(&out);
            Ok(())
        }

        LocationsCommand::Asns { id, active } => {
            let location = find(ctx, &id)?;
            let asns: Vec<&Asn> = if active {
                location.active_asns().collect()
            } else {
                location.asn_list.iter().collect()
            };
            let out = output::render_list(
                ctx.output,
                &asns,
                |a| AsnRow::from(*a),
                |a| a.asn_number.to_string(),
            );
            ctx.print(&out);
            Ok(())
        }

        LocationsCommand::Sites { id, available } => {
            let location = find(ctx, &id)?;
            let sites: Vec<&EnabledSite> = if available {
                location.available_sites().collect()
            } else {
                location.enabled_sites.iter().collect()
            };
            let out = output::render_list(
                ctx.output,
                &sites,
                |s| SiteRow::from(*s),
                |s| s.id.clone(),
            );
            ctx.print(&out);
            Ok(())
        }

        LocationsCommand::Add { from_file } => {
            let location: Location = util::read_json_file(&from_file)?;
            validate(&location)?;
            ctx.require_admin()?;
            let id = location.id.clone();
            ctx.store.add_location(location)?;
            ctx.status(&format!("Location '{id}' added"));
            Ok(())
        }

        LocationsCommand::Update { id, from_file } => {
            let location: Location = util::read_json_file(&from_file)?;
            validate(&location)?;
            ctx.require_admin()?;
            find(ctx, &id)?;
            ctx.store.update_location(&id, location)?;
            ctx.status(&format!("Location '{id}' updated"));
            Ok(())
        }

        LocationsCommand::Remove { id } => {
            ctx.require_admin()?;
            find(ctx, &id)?;
            let prompt = format!("Remove location '{id}'?");
            if !util::confirm("locations remove", &prompt, ctx.yes)? {
                return Ok(());
            }
            ctx.store.remove_location(&id);
            ctx.status(&format!("Location '{id}' removed"));
            Ok(())
        }

        LocationsCommand::Import { from_file } => {
            let locations: Vec<Location> = util::read_json_file(&from_file)?;
            for location in &locations {
                validate(location)?;
            }
            ctx.require_admin()?;
            let count = locations.len();
            ctx.store.update_locations(locations);
            ctx.status(&format!("Imported {count} locations"));
            Ok(())
        }
    }
}
