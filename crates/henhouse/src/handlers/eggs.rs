//! `eggs` commands.

use chrono::NaiveDate;
use serde::Serialize;

use crate::auth::{authorize, Capability};
use crate::cli::{FilterArgs, StatsArgs};
use crate::context::AppContext;
use crate::eggs::{self, distinct_houses, filter_records, load_records, DashboardStats, FilterSpec};
use crate::error::Result;
use crate::output::CommandOutput;

#[derive(Debug, Serialize)]
struct HouseList<'a> {
    houses: &'a [String],
}

#[derive(Debug, Serialize)]
struct HouseRow<'a> {
    house: &'a str,
}

pub fn list(ctx: &AppContext, filters: &FilterArgs) -> Result<CommandOutput> {
    authorize(ctx.session.as_ref(), Capability::ViewRecords)?;
    let view = eggs::list(ctx.record_source().as_ref(), &filters.to_params())?;
    Ok(CommandOutput::new("eggs/list", &view)?.with_rows(&view.records)?)
}

pub fn stats(ctx: &AppContext, args: &StatsArgs) -> Result<CommandOutput> {
    authorize(ctx.session.as_ref(), Capability::ViewRecords)?;
    let records = load_records(ctx.record_source().as_ref())?;
    let spec = FilterSpec::from_params(&args.filters.to_params());
    let today: NaiveDate = args.today.unwrap_or(ctx.today);

    let stats = DashboardStats::compute(&filter_records(&records, &spec), today);
    Ok(CommandOutput::new("eggs/stats", &stats)?.with_rows(&stats.monthly)?)
}

pub fn houses(ctx: &AppContext, filters: &FilterArgs) -> Result<CommandOutput> {
    authorize(ctx.session.as_ref(), Capability::ViewRecords)?;
    let records = load_records(ctx.record_source().as_ref())?;
    let spec = FilterSpec::from_params(&filters.to_params());
    let houses = distinct_houses(&filter_records(&records, &spec));

    let rows: Vec<HouseRow<'_>> = houses.iter().map(|house| HouseRow { house }).collect();
    Ok(CommandOutput::new("eggs/houses", &HouseList { houses: &houses })?.with_rows(&rows)?)
}
