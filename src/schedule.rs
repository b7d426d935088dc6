use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime};
use serde_json::Value;
use tracing::warn;

use crate::json::{items, non_empty_str};
use crate::types::Activity;

/// One zone's weekly program projected around a single instant: the activity
/// the program says should be running now, and the one that starts next.
/// Either all four fields are known or the projection as a whole is absent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ZoneSchedule {
    pub activity_scheduled: Activity,
    pub activity_scheduled_start: DateTime<FixedOffset>,
    pub activity_next: Activity,
    pub activity_next_start: DateTime<FixedOffset>,
}

// Every weekday is reached within 7 day-advances; one more covers a program
// whose only enabled period falls earlier on today's weekday.
const MAX_DAY_ADVANCES: i64 = 8;

/// Walk the zone's `program.day[].period[]` table forward from `now`.
///
/// Periods are listed in time order within a day. The latest enabled period
/// that already started wins the "scheduled" slot; the first one still ahead
/// wins the "next" slot and ends the walk. A malformed program degrades to
/// `None` rather than failing the refresh that asked.
pub(crate) fn project(
    zone_id: &str,
    zone_config: &Value,
    now: DateTime<FixedOffset>,
) -> Option<ZoneSchedule> {
    let program = &zone_config["program"];
    let tz = *now.offset();
    let today = now.date_naive();

    let mut scheduled: Option<(Activity, DateTime<FixedOffset>)> = None;
    let mut next: Option<(Activity, DateTime<FixedOffset>)> = None;

    'forward: for advance in 0..MAX_DAY_ADVANCES {
        let date = today + Duration::days(advance);
        let Some(day) = day_entry(program, date) else {
            warn!(zone = zone_id, day = %date.format("%A"), "day missing from weekly program");
            return None;
        };
        for period in items(&day["period"]) {
            if non_empty_str(&period["enabled"]) == Some("off") {
                continue;
            }
            let Some((activity, start)) = period_start(period, date, tz) else {
                warn!(zone = zone_id, %period, "malformed schedule period");
                return None;
            };
            if start < now {
                scheduled = Some((activity, start));
            } else {
                next = Some((activity, start));
                break 'forward;
            }
        }
    }

    let Some((activity_next, activity_next_start)) = next else {
        warn!(zone = zone_id, "no enabled periods in weekly program");
        return None;
    };

    // "now" can precede every period of today; the running activity then is
    // the latest enabled period of the most recent earlier day.
    if scheduled.is_none() {
        'backward: for back in 1..=7 {
            let date = today - Duration::days(back);
            let Some(day) = day_entry(program, date) else {
                warn!(zone = zone_id, day = %date.format("%A"), "day missing from weekly program");
                return None;
            };
            for period in items(&day["period"]) {
                if non_empty_str(&period["enabled"]) == Some("off") {
                    continue;
                }
                let Some(entry) = period_start(period, date, tz) else {
                    warn!(zone = zone_id, %period, "malformed schedule period");
                    return None;
                };
                scheduled = Some(entry);
            }
            if scheduled.is_some() {
                break 'backward;
            }
        }
    }

    let (activity_scheduled, activity_scheduled_start) = scheduled?;
    Some(ZoneSchedule {
        activity_scheduled,
        activity_scheduled_start,
        activity_next,
        activity_next_start,
    })
}

fn day_entry<'a>(program: &'a Value, date: NaiveDate) -> Option<&'a Value> {
    let name = date.format("%A").to_string();
    items(&program["day"]).find(|d| d["id"].as_str() == Some(name.as_str()))
}

fn period_start(
    period: &Value,
    date: NaiveDate,
    tz: FixedOffset,
) -> Option<(Activity, DateTime<FixedOffset>)> {
    let activity = Activity::from_infinitude_str(non_empty_str(&period["activity"])?)?;
    let time = NaiveTime::parse_from_str(non_empty_str(&period["time"])?, "%H:%M").ok()?;
    let start = date.and_time(time).and_local_timezone(tz).single()?;
    Some((activity, start))
}
