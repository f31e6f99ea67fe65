//! Static catalog of Carbon Intensity API operations.
//!
//! Every operation is a row in [`ENDPOINTS`]: an HTTP method plus an ordered
//! list of path [`Segment`]s. Nothing here performs I/O; the client looks an
//! operation up, renders its path and sends it.

use std::fmt;
use std::str::FromStr;

use self::ParamKind as K;
use self::Segment::{Literal as L, Param as P};

/// HTTP verb for an endpoint. The public API only serves `GET`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }

    pub(crate) fn to_reqwest(self) -> reqwest::Method {
        match self {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of value a parameter slot expects. Values are never validated
/// against their kind, only percent-encoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamKind {
    /// ISO-8601 start date or datetime.
    From,
    /// ISO-8601 end date or datetime.
    To,
    /// ISO-8601 date (`YYYY-MM-DD`).
    Date,
    /// Half-hour settlement period, 1-48.
    Period,
    /// Outward part of a GB postcode, e.g. `RG41`.
    Postcode,
    /// Numeric region id, 1-17.
    RegionId,
    /// Stats block length in hours.
    Block,
}

impl ParamKind {
    pub fn name(&self) -> &'static str {
        match self {
            ParamKind::From => "from",
            ParamKind::To => "to",
            ParamKind::Date => "date",
            ParamKind::Period => "period",
            ParamKind::Postcode => "postcode",
            ParamKind::RegionId => "regionid",
            ParamKind::Block => "block",
        }
    }
}

/// One piece of a path template.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment {
    /// Emitted verbatim.
    Literal(&'static str),
    /// Filled from the caller's parameters, in order, and percent-encoded.
    Param(ParamKind),
}

/// Every logical operation exposed by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    CurrentIntensity,
    TodaysIntensity,
    IntensityForDate,
    IntensityForDatePeriod,
    IntensityFactors,
    IntensityAt,
    Intensity24hForward,
    Intensity48hForward,
    Intensity24hPast,
    IntensityBetween,
    IntensityStats,
    IntensityStatsBlock,
    CurrentGeneration,
    Generation24hPast,
    GenerationBetween,
    RegionalCurrent,
    RegionalEngland,
    RegionalScotland,
    RegionalWales,
    RegionalPostcode,
    RegionalRegionId,
    Regional24hForward,
    Regional24hForwardPostcode,
    Regional24hForwardRegionId,
    Regional48hForward,
    Regional48hForwardPostcode,
    Regional48hForwardRegionId,
    Regional24hPast,
    Regional24hPastPostcode,
    Regional24hPastRegionId,
    RegionalBetween,
    RegionalBetweenPostcode,
    RegionalBetweenRegionId,
}

/// Static description of one operation.
#[derive(Clone, Copy, Debug)]
pub struct Endpoint {
    pub operation: Operation,
    pub name: &'static str,
    pub method: Method,
    pub segments: &'static [Segment],
    pub description: &'static str,
}

impl Endpoint {
    /// Parameter slots in the order callers must supply them.
    pub fn params(&self) -> impl Iterator<Item = ParamKind> + '_ {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(kind) => Some(*kind),
            Segment::Literal(_) => None,
        })
    }

    pub fn arity(&self) -> usize {
        self.params().count()
    }

    /// Human-readable template, e.g. `/intensity/{from}/fw24h`.
    pub fn template(&self) -> String {
        let mut out = String::new();
        for segment in self.segments {
            out.push('/');
            match segment {
                Segment::Literal(lit) => out.push_str(lit),
                Segment::Param(kind) => {
                    out.push('{');
                    out.push_str(kind.name());
                    out.push('}');
                }
            }
        }
        out
    }
}

const fn get(
    operation: Operation,
    name: &'static str,
    segments: &'static [Segment],
    description: &'static str,
) -> Endpoint {
    Endpoint {
        operation,
        name,
        method: Method::Get,
        segments,
        description,
    }
}

/// The full catalog, in the same order as [`Operation`].
#[rustfmt::skip]
pub static ENDPOINTS: &[Endpoint] = &[
    get(Operation::CurrentIntensity, "current-intensity",
        &[L("intensity")],
        "Carbon intensity for the current half hour"),
    get(Operation::TodaysIntensity, "todays-intensity",
        &[L("intensity"), L("date")],
        "Carbon intensity for today"),
    get(Operation::IntensityForDate, "intensity-date",
        &[L("intensity"), L("date"), P(K::Date)],
        "Carbon intensity for a date"),
    get(Operation::IntensityForDatePeriod, "intensity-date-period",
        &[L("intensity"), L("date"), P(K::Date), P(K::Period)],
        "Carbon intensity for a date and settlement period"),
    get(Operation::IntensityFactors, "intensity-factors",
        &[L("intensity"), L("factors")],
        "Carbon intensity factors per fuel type"),
    get(Operation::IntensityAt, "intensity-at",
        &[L("intensity"), P(K::From)],
        "Carbon intensity at a timepoint"),
    get(Operation::Intensity24hForward, "intensity-fw24h",
        &[L("intensity"), P(K::From), L("fw24h")],
        "Carbon intensity 24h forward from a timepoint"),
    get(Operation::Intensity48hForward, "intensity-fw48h",
        &[L("intensity"), P(K::From), L("fw48h")],
        "Carbon intensity 48h forward from a timepoint"),
    get(Operation::Intensity24hPast, "intensity-pt24h",
        &[L("intensity"), P(K::From), L("pt24h")],
        "Carbon intensity 24h past from a timepoint"),
    get(Operation::IntensityBetween, "intensity-between",
        &[L("intensity"), P(K::From), P(K::To)],
        "Carbon intensity between two timepoints"),
    get(Operation::IntensityStats, "intensity-stats",
        &[L("intensity"), L("stats"), P(K::From), P(K::To)],
        "Carbon intensity statistics between two timepoints"),
    get(Operation::IntensityStatsBlock, "intensity-stats-block",
        &[L("intensity"), L("stats"), P(K::From), P(K::To), P(K::Block)],
        "Carbon intensity statistics between two timepoints in blocks of hours"),
    get(Operation::CurrentGeneration, "current-generation",
        &[L("generation")],
        "Generation mix for the current half hour"),
    get(Operation::Generation24hPast, "generation-pt24h",
        &[L("generation"), P(K::From), L("pt24h")],
        "Generation mix 24h past from a timepoint"),
    get(Operation::GenerationBetween, "generation-between",
        &[L("generation"), P(K::From), P(K::To)],
        "Generation mix between two timepoints"),
    get(Operation::RegionalCurrent, "regional",
        &[L("regional")],
        "Regional breakdown for the current half hour"),
    get(Operation::RegionalEngland, "regional-england",
        &[L("regional"), L("england")],
        "Regional breakdown for England"),
    get(Operation::RegionalScotland, "regional-scotland",
        &[L("regional"), L("scotland")],
        "Regional breakdown for Scotland"),
    get(Operation::RegionalWales, "regional-wales",
        &[L("regional"), L("wales")],
        "Regional breakdown for Wales"),
    get(Operation::RegionalPostcode, "regional-postcode",
        &[L("regional"), L("postcode"), P(K::Postcode)],
        "Regional breakdown for a postcode"),
    get(Operation::RegionalRegionId, "regional-regionid",
        &[L("regional"), L("regionid"), P(K::RegionId)],
        "Regional breakdown for a region id"),
    get(Operation::Regional24hForward, "regional-fw24h",
        &[L("regional"), L("intensity"), P(K::From), L("fw24h")],
        "Regional intensity 24h forward from a timepoint"),
    get(Operation::Regional24hForwardPostcode, "regional-fw24h-postcode",
        &[L("regional"), L("intensity"), P(K::From), L("fw24h"), L("postcode"), P(K::Postcode)],
        "Regional intensity 24h forward from a timepoint for a postcode"),
    get(Operation::Regional24hForwardRegionId, "regional-fw24h-regionid",
        &[L("regional"), L("intensity"), P(K::From), L("fw24h"), L("regionid"), P(K::RegionId)],
        "Regional intensity 24h forward from a timepoint for a region id"),
    get(Operation::Regional48hForward, "regional-fw48h",
        &[L("regional"), L("intensity"), P(K::From), L("fw48h")],
        "Regional intensity 48h forward from a timepoint"),
    get(Operation::Regional48hForwardPostcode, "regional-fw48h-postcode",
        &[L("regional"), L("intensity"), P(K::From), L("fw48h"), L("postcode"), P(K::Postcode)],
        "Regional intensity 48h forward from a timepoint for a postcode"),
    get(Operation::Regional48hForwardRegionId, "regional-fw48h-regionid",
        &[L("regional"), L("intensity"), P(K::From), L("fw48h"), L("regionid"), P(K::RegionId)],
        "Regional intensity 48h forward from a timepoint for a region id"),
    get(Operation::Regional24hPast, "regional-pt24h",
        &[L("regional"), L("intensity"), P(K::From), L("pt24h")],
        "Regional intensity 24h past from a timepoint"),
    get(Operation::Regional24hPastPostcode, "regional-pt24h-postcode",
        &[L("regional"), L("intensity"), P(K::From), L("pt24h"), L("postcode"), P(K::Postcode)],
        "Regional intensity 24h past from a timepoint for a postcode"),
    get(Operation::Regional24hPastRegionId, "regional-pt24h-regionid",
        &[L("regional"), L("intensity"), P(K::From), L("pt24h"), L("regionid"), P(K::RegionId)],
        "Regional intensity 24h past from a timepoint for a region id"),
    get(Operation::RegionalBetween, "regional-between",
        &[L("regional"), L("intensity"), P(K::From), P(K::To)],
        "Regional intensity between two timepoints"),
    get(Operation::RegionalBetweenPostcode, "regional-between-postcode",
        &[L("regional"), L("intensity"), P(K::From), P(K::To), L("postcode"), P(K::Postcode)],
        "Regional intensity between two timepoints for a postcode"),
    get(Operation::RegionalBetweenRegionId, "regional-between-regionid",
        &[L("regional"), L("intensity"), P(K::From), P(K::To), L("regionid"), P(K::RegionId)],
        "Regional intensity between two timepoints for a region id"),
];

impl Operation {
    /// Every operation, in catalog order.
    pub const ALL: [Operation; 33] = [
        Operation::CurrentIntensity,
        Operation::TodaysIntensity,
        Operation::IntensityForDate,
        Operation::IntensityForDatePeriod,
        Operation::IntensityFactors,
        Operation::IntensityAt,
        Operation::Intensity24hForward,
        Operation::Intensity48hForward,
        Operation::Intensity24hPast,
        Operation::IntensityBetween,
        Operation::IntensityStats,
        Operation::IntensityStatsBlock,
        Operation::CurrentGeneration,
        Operation::Generation24hPast,
        Operation::GenerationBetween,
        Operation::RegionalCurrent,
        Operation::RegionalEngland,
        Operation::RegionalScotland,
        Operation::RegionalWales,
        Operation::RegionalPostcode,
        Operation::RegionalRegionId,
        Operation::Regional24hForward,
        Operation::Regional24hForwardPostcode,
        Operation::Regional24hForwardRegionId,
        Operation::Regional48hForward,
        Operation::Regional48hForwardPostcode,
        Operation::Regional48hForwardRegionId,
        Operation::Regional24hPast,
        Operation::Regional24hPastPostcode,
        Operation::Regional24hPastRegionId,
        Operation::RegionalBetween,
        Operation::RegionalBetweenPostcode,
        Operation::RegionalBetweenRegionId,
    ];

    /// Looks up this operation's descriptor.
    pub fn endpoint(self) -> &'static Endpoint {
        // ENDPOINTS is declared in the same order as the enum.
        &ENDPOINTS[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.endpoint().name
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ENDPOINTS
            .iter()
            .find(|e| e.name == s)
            .map(|e| e.operation)
            .ok_or_else(|| format!("unknown operation '{}'", s))
    }
}
