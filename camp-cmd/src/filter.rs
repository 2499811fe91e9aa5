//! Filter a campground's campsites and render the survivors.

use crate::fetch::resolve_month;
use camp_recgov::calendar::CalendarCell;
use camp_recgov::campsite::{parse_campsites, parse_merged, Campsite};
use camp_recgov::classifier::NameHeuristic;
use camp_recgov::criteria::{FilterCriteria, DRIVEWAY_ATTRIBUTE};
use camp_recgov::date_key::DateKey;
use camp_recgov::date_window::today_utc;
use camp_recgov::day_of_week::DaySelection;
use camp_recgov::pipeline::{global_notices, partition_by_group, unique_types, FilterPipeline};
use camp_recgov::waterfront::WaterfrontRules;
use camp_utils::dates::parse_date;
use camp_utils::days::parse_days;
use clap::Args;
use log::info;
use serde::Serialize;
use std::fmt::Write;

#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Search response JSON, or a merged campsite list written by `fetch`
    #[arg(short = 's', long)]
    pub search_json: String,

    /// Availability response JSON to merge into the search response
    #[arg(short = 'a', long)]
    pub availability_json: Option<String>,

    /// Month to display as YYYY-MM (defaults to next month)
    #[arg(short = 'm', long)]
    pub month: Option<String>,

    /// Date to treat as today, YYYY-MM-DD (defaults to the current UTC date)
    #[arg(long)]
    pub today: Option<String>,

    /// Campsite status to keep ("all" keeps every status)
    #[arg(long, default_value = "Open")]
    pub status: String,

    /// Exact campsite type, e.g. "STANDARD ELECTRIC"
    #[arg(short = 't', long)]
    pub site_type: Option<String>,

    /// Exact driveway entry, e.g. "Pull-Through"
    #[arg(long)]
    pub driveway: Option<String>,

    /// Days of the week that must be available, e.g. "5,6" or "fri,sat"
    #[arg(short = 'd', long)]
    pub days: Option<String>,

    /// Only match the selected days within the current week
    #[arg(long)]
    pub current_week: bool,

    /// First night of a stay that must be fully available, YYYY-MM-DD
    #[arg(long, requires = "to")]
    pub from: Option<String>,

    /// Last night of the stay, YYYY-MM-DD
    #[arg(long, requires = "from")]
    pub to: Option<String>,

    /// Keep only waterfront sites of --campground
    #[arg(long, requires = "campground")]
    pub waterfront: bool,

    /// Campground name used to look up waterfront rules
    #[arg(long)]
    pub campground: Option<String>,

    /// CSV of waterfront rules (campground,low,high,parity) replacing the built-in table
    #[arg(long)]
    pub waterfront_rules: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl FilterArgs {
    /// Criteria from the command line flags.
    pub fn criteria(&self) -> anyhow::Result<FilterCriteria> {
        let mut criteria = FilterCriteria::default().with_status(&self.status);
        if let Some(site_type) = &self.site_type {
            criteria = criteria.with_site_type(site_type);
        }
        if let Some(driveway) = &self.driveway {
            criteria = criteria.with_driveway(driveway);
        }
        if let Some(days) = &self.days {
            criteria = criteria.with_days(DaySelection::new(parse_days(days)?));
        }
        if self.current_week {
            criteria = criteria.with_current_week();
        }
        if let (Some(from), Some(to)) = (&self.from, &self.to) {
            let start = DateKey::from(parse_date(from)?);
            let end = DateKey::from(parse_date(to)?);
            if start > end {
                anyhow::bail!("--from {} is after --to {}", from, to);
            }
            criteria = criteria.with_date_range(start, end);
        }
        if self.waterfront {
            let Some(campground) = &self.campground else {
                anyhow::bail!("--waterfront needs --campground");
            };
            criteria = criteria.with_waterfront(campground);
        }
        Ok(criteria)
    }

    fn today(&self) -> anyhow::Result<DateKey> {
        match &self.today {
            Some(today) => Ok(DateKey::from(parse_date(today)?)),
            None => Ok(today_utc()),
        }
    }
}

/// One surviving campsite with its calendar.
#[derive(Debug, Clone, Serialize)]
pub struct SiteReport {
    pub campsite_id: String,
    pub name: String,
    pub site_type: String,
    pub status: String,
    pub driveway: String,
    pub amenities: Vec<String>,
    pub calendar: Vec<CalendarCell>,
}

impl SiteReport {
    fn new(campsite: &Campsite, pipeline: &FilterPipeline<'_>) -> Self {
        SiteReport {
            campsite_id: campsite.campsite_id.clone(),
            name: campsite.name().to_string(),
            site_type: campsite.site_type().to_string(),
            status: campsite.status().to_string(),
            driveway: campsite.attribute_value(DRIVEWAY_ATTRIBUTE).to_string(),
            amenities: campsite.amenities(),
            calendar: pipeline.project_calendar(campsite),
        }
    }
}

/// Result of one filter pass, ready to print.
#[derive(Debug, Clone, Serialize)]
pub struct FilterReport {
    pub month: DateKey,
    pub today: DateKey,
    pub criteria: FilterCriteria,
    pub total: usize,
    pub notices: Vec<String>,
    pub group_sites: Vec<SiteReport>,
    pub other_sites: Vec<SiteReport>,
}

impl FilterReport {
    pub fn matched(&self) -> usize {
        self.group_sites.len() + self.other_sites.len()
    }
}

pub fn build_report(
    campsites: &[Campsite],
    criteria: FilterCriteria,
    waterfront: &WaterfrontRules,
    month: DateKey,
    today: DateKey,
) -> FilterReport {
    let pipeline = FilterPipeline::new(&criteria, waterfront, month, today);
    let survivors = pipeline.apply(campsites);
    let (group, other) = partition_by_group(&survivors, &NameHeuristic);
    let to_reports = |sites: Vec<&Campsite>| -> Vec<SiteReport> {
        sites
            .into_iter()
            .map(|campsite| SiteReport::new(campsite, &pipeline))
            .collect()
    };
    FilterReport {
        month: pipeline.month_start(),
        today,
        total: campsites.len(),
        notices: global_notices(survivors.iter().copied()),
        group_sites: to_reports(group),
        other_sites: to_reports(other),
        criteria: criteria.clone(),
    }
}

fn calendar_row(calendar: &[CalendarCell]) -> String {
    calendar
        .iter()
        .map(|cell| {
            if cell.is_filtered_out {
                ' '
            } else if cell.is_past_day {
                '.'
            } else {
                cell.status.marker()
            }
        })
        .collect()
}

fn day_ruler(calendar: &[CalendarCell]) -> String {
    calendar
        .iter()
        .map(|cell| char::from_digit(cell.day_number % 10, 10).unwrap_or(' '))
        .collect()
}

fn render_section(out: &mut String, title: &str, sites: &[SiteReport]) -> std::fmt::Result {
    writeln!(out, "{} ({})", title, sites.len())?;
    let Some(first) = sites.first() else {
        return writeln!(out, "  none");
    };
    writeln!(out, "  {:<8} {:<28} {:<14} {}", "", "", "", day_ruler(&first.calendar))?;
    for site in sites {
        writeln!(
            out,
            "  {:<8} {:<28} {:<14} {}",
            site.name,
            site.site_type,
            site.driveway,
            calendar_row(&site.calendar)
        )?;
        if !site.amenities.is_empty() {
            writeln!(out, "  {:<8} {}", "", site.amenities.join(", "))?;
        }
    }
    Ok(())
}

/// Plain text rendering: notices, then the SP/Group and other sections.
///
/// Calendar markers: `A` available, `X` reserved or not available, `?`
/// unknown, `.` past day, blank for days outside the selected weekdays.
pub fn render_text(report: &FilterReport) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    writeln!(
        out,
        "{} of {} campsites match for {}",
        report.matched(),
        report.total,
        report.month.as_naive_date().format("%B %Y")
    )?;
    for notice in &report.notices {
        writeln!(out, "! {}", notice)?;
    }
    writeln!(out)?;
    render_section(&mut out, "SP/Group sites", &report.group_sites)?;
    writeln!(out)?;
    render_section(&mut out, "Other sites", &report.other_sites)?;
    Ok(out)
}

fn load_campsites(search_json: &str, availability_json: Option<&str>) -> anyhow::Result<Vec<Campsite>> {
    let search = std::fs::read_to_string(search_json)?;
    let campsites = match availability_json {
        Some(path) => parse_merged(&search, &std::fs::read_to_string(path)?)?,
        None => parse_campsites(&search)?,
    };
    info!("Loaded {} campsites from {}", campsites.len(), search_json);
    Ok(campsites)
}

fn load_waterfront_rules(path: Option<&str>) -> anyhow::Result<WaterfrontRules> {
    match path {
        Some(path) => {
            let rules = WaterfrontRules::parse_waterfront_csv(&std::fs::read_to_string(path)?)?;
            info!("Loaded waterfront rules for {} campgrounds from {}", rules.campgrounds().len(), path);
            Ok(rules)
        }
        None => Ok(WaterfrontRules::builtin()?),
    }
}

pub fn run_filter(args: &FilterArgs) -> anyhow::Result<()> {
    let criteria = args.criteria()?;
    let today = args.today()?;
    let month = resolve_month(args.month.as_deref(), today)?;
    let waterfront = load_waterfront_rules(args.waterfront_rules.as_deref())?;
    let campsites = load_campsites(&args.search_json, args.availability_json.as_deref())?;

    let report = build_report(&campsites, criteria, &waterfront, month, today);
    info!(
        "{} of {} campsites matched for {}",
        report.matched(),
        report.total,
        report.month
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_text(&report)?);
    }
    Ok(())
}

pub fn run_types(search_json: &str) -> anyhow::Result<()> {
    let campsites = load_campsites(search_json, None)?;
    for site_type in unique_types(&campsites) {
        println!("{site_type}");
    }
    Ok(())
}
