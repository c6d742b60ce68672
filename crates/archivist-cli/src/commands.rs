use archivist_sdk::{
    Archivist, Asset, Attributes, Event, Filter, Location, NewAsset, NewLocation, Subject,
    SubjectUpdate,
};
use colored::Colorize;
use serde::Serialize;
use serde_json::Value;

use crate::cli::*;
use crate::endpoint::endpoint;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    let arch = endpoint(&cli).await?;
    let out = Output { format: cli.format };
    match cli.command {
        Command::Subjects(cmd) => cmd_subjects(&arch, &out, cmd).await,
        Command::Assets(cmd) => cmd_assets(&arch, &out, cmd).await,
        Command::Events(cmd) => cmd_events(&arch, &out, cmd).await,
        Command::Locations(cmd) => cmd_locations(&arch, &out, cmd).await,
    }
}

struct Output {
    format: OutputFormat,
}

impl Output {
    fn one<T: Serialize>(&self, value: &T, text: impl Fn(&T)) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
            OutputFormat::Text => text(value),
        }
        Ok(())
    }

    fn many<T: Serialize>(&self, values: &[T], text: impl Fn(&T)) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(values)?),
            OutputFormat::Text if values.is_empty() => println!("No matches."),
            OutputFormat::Text => values.iter().for_each(text),
        }
        Ok(())
    }

    fn count(&self, label: &str, count: u64) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::json!({ "count": count })),
            OutputFormat::Text => println!("{} {label}", count.to_string().bold()),
        }
        Ok(())
    }

    fn deleted(&self, identity: &str, body: &Value) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(body)?),
            OutputFormat::Text => println!("{} Deleted {}", "✓".green().bold(), identity.yellow()),
        }
        Ok(())
    }
}

/// `KEY=VALUE` pairs as an attribute map of strings.
fn attributes(pairs: &[(String, String)]) -> Attributes {
    pairs
        .iter()
        .map(|(k, v)| (k.clone(), Value::String(v.clone())))
        .collect()
}

fn display_name_filter(display_name: &Option<String>) -> Filter {
    match display_name {
        Some(name) => Filter::new().prop("display_name", name.as_str()),
        None => Filter::new(),
    }
}

fn print_subject(subject: &Subject) {
    println!("{}  {}", subject.identity.as_str().yellow().bold(), subject.display_name);
    for key in &subject.wallet_pub_keys {
        println!("  wallet:  {}", key.dimmed());
    }
    for key in &subject.tessera_pub_keys {
        println!("  tessera: {}", key.dimmed());
    }
}

fn print_asset(asset: &Asset) {
    println!(
        "{}  {}  [{}]",
        asset.identity.as_str().yellow().bold(),
        asset.attribute_str("arc_display_name").unwrap_or("-"),
        asset.confirmation_status.to_string().cyan(),
    );
    println!("  storage: {}", asset.storage_integrity);
    for (key, value) in &asset.attributes {
        println!("  {key}: {value}");
    }
}

fn print_event(event: &Event) {
    println!(
        "{}  {} {}  [{}]",
        event.identity.as_str().yellow().bold(),
        event.behaviour,
        event.operation.bold(),
        event.confirmation_status.to_string().cyan(),
    );
    if !event.timestamp_declared.is_empty() {
        println!("  declared: {}", event.timestamp_declared);
    }
    for (key, value) in &event.event_attributes {
        println!("  {key}: {value}");
    }
}

fn print_location(location: &Location) {
    println!(
        "{}  {}",
        location.identity.as_str().yellow().bold(),
        location.display_name
    );
    if !location.description.is_empty() {
        println!("  {}", location.description.dimmed());
    }
    println!("  at {}, {}", location.latitude, location.longitude);
}

async fn cmd_subjects(arch: &Archivist, out: &Output, cmd: SubjectsCommand) -> anyhow::Result<()> {
    let subjects = arch.subjects();
    match cmd {
        SubjectsCommand::Create(args) => {
            let subject = subjects
                .create(&args.display_name, args.wallet_pub_keys, args.tessera_pub_keys)
                .await?;
            out.one(&subject, print_subject)
        }
        SubjectsCommand::Read { identity } => out.one(&subjects.read(&identity).await?, print_subject),
        SubjectsCommand::Update(args) => {
            let mut update = SubjectUpdate::default();
            if let Some(name) = args.display_name {
                update = update.with_display_name(name);
            }
            if !args.wallet_pub_keys.is_empty() {
                update = update.with_wallet_pub_keys(args.wallet_pub_keys);
            }
            if !args.tessera_pub_keys.is_empty() {
                update = update.with_tessera_pub_keys(args.tessera_pub_keys);
            }
            let subject = subjects.update(&args.identity, &update).await?;
            out.one(&subject, print_subject)
        }
        SubjectsCommand::Delete { identity } => {
            let body = subjects.delete(&identity).await?;
            out.deleted(identity.as_str(), &body)
        }
        SubjectsCommand::List(args) => {
            out.many(&subjects.list(args.display_name.as_deref()).await?, print_subject)
        }
        SubjectsCommand::Count(args) => {
            out.count("subjects", subjects.count(args.display_name.as_deref()).await?)
        }
    }
}

async fn cmd_assets(arch: &Archivist, out: &Output, cmd: AssetsCommand) -> anyhow::Result<()> {
    let assets = arch.assets();
    match cmd {
        AssetsCommand::Create(args) => {
            let body = NewAsset::new(args.behaviours, attributes(&args.attributes));
            let asset = assets.create_from(body, args.confirm).await?;
            out.one(&asset, print_asset)
        }
        AssetsCommand::Read { identity } => out.one(&assets.read(&identity).await?, print_asset),
        AssetsCommand::List(args) => {
            let filter = Filter::new().attributes(&attributes(&args.attributes));
            out.many(&assets.list(&filter).await?, print_asset)
        }
        AssetsCommand::Count(args) => {
            let filter = Filter::new().attributes(&attributes(&args.attributes));
            out.count("assets", assets.count(&filter).await?)
        }
    }
}

fn event_filter(args: &EventFilterArgs) -> Filter {
    args.event_attributes
        .iter()
        .fold(Filter::new(), |f, (k, v)| f.event_attribute(k.as_str(), v.as_str()))
}

async fn cmd_events(arch: &Archivist, out: &Output, cmd: EventsCommand) -> anyhow::Result<()> {
    let events = arch.events();
    match cmd {
        EventsCommand::List(args) => {
            let found = events.list(args.asset.as_ref(), &event_filter(&args)).await?;
            out.many(&found, print_event)
        }
        EventsCommand::Count(args) => {
            let count = events.count(args.asset.as_ref(), &event_filter(&args)).await?;
            out.count("events", count)
        }
    }
}

async fn cmd_locations(arch: &Archivist, out: &Output, cmd: LocationsCommand) -> anyhow::Result<()> {
    let locations = arch.locations();
    match cmd {
        LocationsCommand::Create(args) => {
            let mut body = NewLocation::new(args.display_name).with_attributes(attributes(&args.attributes));
            if let Some(description) = args.description {
                body = body.with_description(description);
            }
            if let (Some(lat), Some(lon)) = (args.latitude, args.longitude) {
                body = body.with_position(lat, lon);
            }
            out.one(&locations.create(&body).await?, print_location)
        }
        LocationsCommand::Read { identity } => {
            out.one(&locations.read(&identity).await?, print_location)
        }
        LocationsCommand::List(args) => {
            out.many(&locations.list(&display_name_filter(&args.display_name)).await?, print_location)
        }
        LocationsCommand::Count(args) => {
            let count = locations.count(&display_name_filter(&args.display_name)).await?;
            out.count("locations", count)
        }
    }
}
