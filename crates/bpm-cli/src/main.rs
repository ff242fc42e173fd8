//! `bpm-portal` - dashboard and catalog reports from the command line

use anyhow::{bail, Context, Result};
use bpm_core::prelude::*;
use bpm_pipeline::{ChartPoint, DashboardViews};
use chrono::NaiveDate;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use serde::Serialize;
use std::path::PathBuf;

fn cli() -> Command {
    let json = Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output as JSON");
    let kind = Arg::new("kind")
        .required(true)
        .value_parser(value_parser!(CatalogKind))
        .help("Catalog: services, documents, regulations, performance-tools, process-mining-tools, risk-tools");

    Command::new("bpm-portal")
        .version(bpm_core::VERSION)
        .about("BPM portal dashboard and catalog reports")
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML config file"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .global(true)
                .value_parser(value_parser!(u64))
                .help("Seed for mock requests"),
        )
        .subcommand_required(true)
        .subcommand(
            Command::new("dashboard")
                .about("Summary metrics and chart aggregations")
                .arg(
                    Arg::new("days")
                        .long("days")
                        .default_value("30")
                        .value_parser(value_parser!(u32))
                        .help("Days of history up to today"),
                )
                .arg(
                    Arg::new("category")
                        .long("category")
                        .default_value("All")
                        .help("Service category filter"),
                )
                .arg(
                    Arg::new("today")
                        .long("today")
                        .value_parser(value_parser!(NaiveDate))
                        .help("Reference day (YYYY-MM-DD)"),
                )
                .arg(json.clone()),
        )
        .subcommand(
            Command::new("catalog")
                .about("Filter, sort and page a catalog")
                .arg(kind.clone())
                .arg(
                    Arg::new("filter")
                        .long("filter")
                        .action(ArgAction::Append)
                        .value_parser(parse_selection)
                        .help("Facet selection as facet=value, repeatable"),
                )
                .arg(Arg::new("search").long("search").help("Title or description text"))
                .arg(
                    Arg::new("sort")
                        .long("sort")
                        .default_value("relevance")
                        .value_parser(value_parser!(SortOrder))
                        .help("relevance, a-z or newest"),
                )
                .arg(
                    Arg::new("page")
                        .long("page")
                        .default_value("1")
                        .value_parser(value_parser!(usize)),
                )
                .arg(
                    Arg::new("page-size")
                        .long("page-size")
                        .default_value("15")
                        .value_parser(value_parser!(usize)),
                )
                .arg(json.clone()),
        )
        .subcommand(
            Command::new("options")
                .about("Filter values per facet")
                .arg(kind.clone())
                .arg(json.clone()),
        )
        .subcommand(
            Command::new("detail")
                .about("One item with presentation lists and related items")
                .arg(kind)
                .arg(Arg::new("id").required(true).help("Item id"))
                .arg(json),
        )
}

fn parse_selection(raw: &str) -> Result<(Facet, String), String> {
    let (facet, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected facet=value, got '{raw}'"))?;
    let facet = facet.parse::<Facet>().map_err(|e| e.to_string())?;
    Ok((facet, value.trim().to_string()))
}

#[tokio::main]
async fn main() -> Result<()> {
    let matches = cli().get_matches();

    let mut config = PortalConfig::load(matches.get_one::<PathBuf>("config").map(PathBuf::as_path))
        .context("loading configuration")?;
    if let Some(seed) = matches.get_one::<u64>("seed") {
        config = config.with_seed(*seed);
    }
    telemetry::init_tracing(&config.log);
    tracing::debug!(
        command = matches.subcommand_name().unwrap_or_default(),
        seeded = config.mock.seed.is_some(),
        "starting"
    );

    match matches.subcommand() {
        Some(("dashboard", args)) => dashboard(config, args),
        Some(("catalog", args)) => catalog(&Portal::new(config)?, args).await,
        Some(("options", args)) => options(&Portal::new(config)?, args).await,
        Some(("detail", args)) => detail(&Portal::new(config)?, args).await,
        Some((other, _)) => bail!("unknown command '{other}'"),
        None => bail!("no command given"),
    }
}

fn dashboard(config: PortalConfig, args: &ArgMatches) -> Result<()> {
    let portal = match args.get_one::<NaiveDate>("today") {
        Some(today) => Portal::with_today(config, *today)?,
        None => Portal::new(config)?,
    };
    let days = args.get_one::<u32>("days").copied().unwrap_or(30);
    let mut filter = portal.recent_filter(days);
    if let Some(category) = args.get_one::<String>("category") {
        filter = filter.with_category(category.as_str());
    }
    let views = portal.dashboard_views(&filter);

    if args.get_flag("json") {
        return print_json(&views);
    }
    print_dashboard(&views);
    Ok(())
}

fn print_dashboard(views: &DashboardViews) {
    let summary = &views.summary;
    let mean = |v: Option<f64>| v.map_or_else(|| "n/a".to_string(), |v| format!("{v:.1}"));

    println!("Dashboard");
    println!("=========");
    println!("  Open requests:        {}", summary.open_requests);
    println!("  Created today:        {}", summary.created_today);
    println!("  Resolved today:       {}", summary.resolved_today);
    println!("  Overdue:              {}", summary.overdue);
    println!("  Avg resolution SLA:   {} h", mean(summary.avg_resolution_sla));
    println!("  Avg SLA compliance:   {} %", mean(summary.avg_sla_compliance));
    println!("  Avg satisfaction:     {}", mean(summary.avg_customer_satisfaction));
    println!("  First response:       {:.1} h", summary.first_response_hours);

    for (title, points) in [
        ("By service type", &views.by_service_type),
        ("By priority", &views.by_priority),
        ("By status", &views.by_status),
        ("By month", &views.by_month),
        ("Team workload", &views.team_workload),
        ("Resolution latency", &views.resolution_latency),
    ] {
        print_chart(title, points);
    }
}

fn print_chart(title: &str, points: &[ChartPoint]) {
    println!();
    println!("{title}");
    if points.is_empty() {
        println!("  (no data)");
    }
    for point in points {
        println!("  {:<20} {:>5}", point.name, point.value);
    }
}

async fn catalog(portal: &Portal, args: &ArgMatches) -> Result<()> {
    let kind = required::<CatalogKind>(args, "kind")?;
    let mut query = CatalogQuery::new()
        .with_sort(required::<SortOrder>(args, "sort")?)
        .with_page(required::<usize>(args, "page")?)
        .with_page_size(required::<usize>(args, "page-size")?);
    if let Some(selections) = args.get_many::<(Facet, String)>("filter") {
        for (facet, value) in selections {
            query = query.with_facet(*facet, value.as_str());
        }
    }
    if let Some(search) = args.get_one::<String>("search") {
        query = query.with_search(search.as_str());
    }

    let page = portal.search(kind, &query).await;
    if args.get_flag("json") {
        return print_json(&page);
    }

    println!(
        "{kind}: {} matching, page {}/{}",
        page.total, page.page, page.total_pages
    );
    for item in &page.items {
        println!("  [{}] {} ({})", item.id(), item.title(), item.common.category);
    }
    Ok(())
}

async fn options(portal: &Portal, args: &ArgMatches) -> Result<()> {
    let kind = required::<CatalogKind>(args, "kind")?;
    let options = portal.filter_options(kind).await;
    if args.get_flag("json") {
        return print_json(&options);
    }

    for (facet, values) in options.iter() {
        println!("{:<14} {}", facet.label(), values.join(", "));
    }
    Ok(())
}

async fn detail(portal: &Portal, args: &ArgMatches) -> Result<()> {
    let kind = required::<CatalogKind>(args, "kind")?;
    let id = required::<String>(args, "id")?
        .parse::<ItemId>()
        .unwrap_or_else(|never| match never {});

    let Some(detail) = portal.detail(kind, &id).await else {
        bail!("no {kind} item with id {id}");
    };
    if args.get_flag("json") {
        return print_json(&detail);
    }

    let item = &detail.item;
    let shown = &detail.presentation;
    println!("{} [{}]", item.title(), item.id());
    println!("{}", item.common.description);
    print_list("Benefits", &shown.benefits);
    print_list("Use cases", &shown.use_cases);
    print_list("Features", &shown.features);
    print_list("Tags", &shown.display_tags);

    println!();
    println!("Specifications");
    for spec in &shown.specifications {
        println!("  {:<16} {}", spec.label, spec.value);
    }

    println!();
    println!("FAQ");
    for faq in &shown.faqs {
        println!("  Q: {}", faq.question);
        println!("  A: {}", faq.answer);
    }

    let related: Vec<&str> = detail.related.iter().map(CatalogItem::title).collect();
    print_list("Related", &related);
    Ok(())
}

fn print_list<S: AsRef<str>>(title: &str, entries: &[S]) {
    println!();
    println!("{title}");
    for entry in entries {
        println!("  - {}", entry.as_ref());
    }
}

fn required<T: Clone + Send + Sync + 'static>(args: &ArgMatches, name: &str) -> Result<T> {
    args.get_one::<T>(name)
        .cloned()
        .with_context(|| format!("missing argument '{name}'"))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_definition_is_valid() {
        cli().debug_assert();
    }

    #[test]
    fn catalog_arguments_parse() {
        let matches = cli()
            .try_get_matches_from([
                "bpm-portal",
                "catalog",
                "risk-tools",
                "--filter",
                "riskLevel=High",
                "--sort",
                "a-z",
                "--json",
            ])
            .unwrap();
        let (_, args) = matches.subcommand().unwrap();

        assert_eq!(
            args.get_one::<CatalogKind>("kind"),
            Some(&CatalogKind::RiskTools)
        );
        assert_eq!(args.get_one::<SortOrder>("sort"), Some(&SortOrder::AToZ));
        let filters: Vec<_> = args.get_many::<(Facet, String)>("filter").unwrap().collect();
        assert_eq!(filters, [&(Facet::RiskLevel, "High".to_string())]);
        assert!(args.get_flag("json"));
    }

    #[test]
    fn malformed_selection_is_rejected() {
        assert!(parse_selection("riskLevel").is_err());
        assert!(parse_selection("colour=red").is_err());
        assert_eq!(
            parse_selection("Risk Level= High").unwrap(),
            (Facet::RiskLevel, "High".to_string())
        );
    }

    #[test]
    fn global_seed_after_subcommand() {
        let matches = cli()
            .try_get_matches_from(["bpm-portal", "dashboard", "--seed", "7", "--days", "14"])
            .unwrap();
        assert_eq!(matches.get_one::<u64>("seed"), Some(&7));
        let (_, args) = matches.subcommand().unwrap();
        assert_eq!(args.get_one::<u32>("days"), Some(&14));
    }
}
