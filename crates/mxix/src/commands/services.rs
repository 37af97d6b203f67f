//! Service catalog command handlers.

use tabled::Tabled;

use mxix_core::{Service, ServiceItem};

use crate::cli::{ServicesArgs, ServicesCommand};
use crate::error::CliError;
use crate::output;

use super::{Context, util};

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct ServiceRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Tagline")]
    tagline: String,
    #[tabled(rename = "Items")]
    items: usize,
}

impl From<&Service> for ServiceRow {
    fn from(s: &Service) -> Self {
        Self {
            id: s.id.clone(),
            category: s.category.clone(),
            tagline: s.tagline.clone(),
            items: s.items.len(),
        }
    }
}

#[derive(Tabled)]
struct ItemRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Benefits")]
    benefits: usize,
    #[tabled(rename = "Features")]
    features: usize,
}

impl From<&ServiceItem> for ItemRow {
    fn from(i: &ServiceItem) -> Self {
        Self {
            name: i.name.clone(),
            description: i.description.clone(),
            benefits: i.benefits.len(),
            features: i.features.len(),
        }
    }
}

fn detail(s: &Service) -> String {
    let mut lines = vec![
        format!("ID:          {}", s.id),
        format!("Category:    {}", s.category),
        format!("Tagline:     {}", s.tagline),
        format!("Image:       {}", util::or_dash(&s.image)),
        format!("Description: {}", s.description),
    ];
    for item in &s.items {
        lines.push(String::new());
        lines.push(format!("{} [{}]", item.name, util::or_dash(&item.icon)));
        lines.push(format!("  {}", item.description));
        for benefit in &item.benefits {
            lines.push(format!("  + {benefit}"));
        }
        for feature in &item.features {
            lines.push(format!("  * {feature}"));
        }
        for stat in item.stats.iter().flatten() {
            lines.push(format!("  {}: {} ({})", stat.label, stat.value, stat.period));
        }
    }
    lines.join("\n")
}

fn find(ctx: &Context, id: &str) -> Result<Service, CliError> {
    ctx.store
        .service(id)
        .ok_or_else(|| CliError::not_found("service", id))
}

fn validate(service: &Service) -> Result<(), CliError> {
    if service.id.trim().is_empty() {
        return Err(CliError::Validation {
            field: "id".into(),
            reason: "must not be empty".into(),
        });
    }
    Ok(())
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(ctx: &Context, args: ServicesArgs) -> Result<(), CliError> {
    match args.command {
        ServicesCommand::List => {
            let snap = ctx.store.services();
            let out = output::render_list(
                ctx.output,
                snap.as_slice(),
                |s| ServiceRow::from(s),
                |s| s.id.clone(),
            );
            ctx.print(&out);
            Ok(())
        }

        ServicesCommand::Show { id } => {
            let service = find(ctx, &id)?;
            let out = output::render_single(ctx.output, &service, detail, |s| s.id.clone());
            ctx.print(&out);
            Ok(())
        }

        ServicesCommand::Items { id } => {
            let service = find(ctx, &id)?;
            let out = output::render_list(
                ctx.output,
                &service.items,
                |i| ItemRow::from(i),
                |i| i.name.clone(),
            );
            ctx.print(&out);
            Ok(())
        }

        ServicesCommand::Add { from_file } => {
            let service: Service = util::read_json_file(&from_file)?;
            validate(&service)?;
            ctx.require_admin()?;
            let id = service.id.clone();
            ctx.store.add_service(service)?;
            ctx.status(&format!("Service '{id}' added"));
            Ok(())
        }

        ServicesCommand::Update { id, from_file } => {
            let service: Service = util::read_json_file(&from_file)?;
            validate(&service)?;
            ctx.require_admin()?;
            find(ctx, &id)?;
            ctx.store.update_service(&id, service)?;
            ctx.status(&format!("Service '{id}' updated"));
            Ok(())
        }

        ServicesCommand::Remove { id } => {
            ctx.require_admin()?;
            find(ctx, &id)?;
            let prompt = format!("Remove service '{id}'?");
            if !util::confirm("services remove", &prompt, ctx.yes)? {
                return Ok(());
            }
            ctx.store.remove_service(&id);
            ctx.status(&format!("Service '{id}' removed"));
            Ok(())
        }

        ServicesCommand::Import { from_file } => {
            let services: Vec<Service> = util::read_json_file(&from_file)?;
            for service in &services {
                validate(service)?;
            }
            ctx.require_admin()?;
            let count = services.len();
            ctx.store.update_services(services);
            ctx.status(&format!("Imported {count} services"));
            Ok(())
        }
    }
}
