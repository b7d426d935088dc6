use chrono::{DateTime, Duration, FixedOffset, Timelike};
use serde::Serialize;

use crate::types::{Activity, FanMode, HoldState};

pub(crate) const STATUS_ENDPOINT: &str = "/api/status/";
pub(crate) const CONFIG_ENDPOINT: &str = "/api/config/";
pub(crate) const ENERGY_ENDPOINT: &str = "/energy.json";
pub(crate) const PROFILE_ENDPOINT: &str = "/profile.json";
pub(crate) const CONFIG_WRITE_ENDPOINT: &str = "/api/config";

/// Setpoint/fan write for one activity slot. The gateway applies exactly the
/// fields posted and falls back to activity defaults for the rest, so callers
/// echo the values they are not changing.
#[derive(Debug, Serialize)]
pub(crate) struct ActivityWrite {
    pub htsp: String,
    pub clsp: String,
    pub fan: &'static str,
}

#[derive(Debug, Serialize)]
pub(crate) struct ModeWrite {
    pub mode: &'static str,
}

#[derive(Debug, Serialize)]
pub(crate) struct HeatSourceWrite {
    pub heatsource: &'static str,
}

#[derive(Debug, Serialize)]
pub(crate) struct HoldWrite {
    pub hold: &'static str,
    pub activity: &'static str,
    pub until: String,
}

pub(crate) fn activity_write(heat: f64, cool: f64, fan: FanMode) -> ActivityWrite {
    ActivityWrite {
        htsp: format!("{heat:.1}"),
        clsp: format!("{cool:.1}"),
        fan: fan.as_infinitude_str(),
    }
}

/// Activity writes address zones by 0-based index.
pub(crate) fn activity_endpoint(zone_index: u32, activity: Activity) -> String {
    format!("/api/{zone_index}/activity/{}", activity.as_infinitude_str())
}

/// Hold writes address zones by their raw 1-based id.
pub(crate) fn hold_endpoint(zone_id: &str) -> String {
    format!("/api/{zone_id}/hold")
}

pub(crate) fn hold_clear() -> HoldWrite {
    HoldWrite {
        hold: HoldState::Off.as_infinitude_str(),
        activity: "",
        until: String::new(),
    }
}

pub(crate) fn hold_indefinite(activity: Activity) -> HoldWrite {
    HoldWrite {
        hold: HoldState::On.as_infinitude_str(),
        activity: activity.as_infinitude_str(),
        until: "forever".to_string(),
    }
}

pub(crate) fn hold_until(activity: Activity, until: &str) -> HoldWrite {
    HoldWrite {
        hold: HoldState::On.as_infinitude_str(),
        activity: activity.as_infinitude_str(),
        until: until.to_string(),
    }
}

/// The hold endpoint only accepts times on 15-minute boundaries.
pub(crate) fn round_to_quarter_hour(dt: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    let minute = dt.minute() as i64;
    let nearest = ((minute as f64 / 15.0).round() as i64) * 15;
    dt + Duration::minutes(nearest - minute)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, minute: u32) -> DateTime<FixedOffset> {
        FixedOffset::west_opt(5 * 3600)
            .unwrap()
            .with_ymd_and_hms(2025, 3, 15, hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn rounding_snaps_to_nearest_quarter_hour() {
        assert_eq!(round_to_quarter_hour(at(14, 7)).format("%H:%M").to_string(), "14:00");
        assert_eq!(round_to_quarter_hour(at(14, 8)).format("%H:%M").to_string(), "14:15");
        assert_eq!(round_to_quarter_hour(at(14, 22)).format("%H:%M").to_string(), "14:15");
        assert_eq!(round_to_quarter_hour(at(14, 23)).format("%H:%M").to_string(), "14:30");
        assert_eq!(round_to_quarter_hour(at(14, 30)).format("%H:%M").to_string(), "14:30");
    }

    #[test]
    fn rounding_wraps_into_the_next_hour() {
        assert_eq!(round_to_quarter_hour(at(14, 53)).format("%H:%M").to_string(), "15:00");
        assert_eq!(round_to_quarter_hour(at(23, 53)).format("%H:%M").to_string(), "00:00");
    }

    #[test]
    fn activity_write_formats_one_decimal() {
        let write = activity_write(68.0, 74.0, FanMode::Auto);
        assert_eq!(write.htsp, "68.0");
        assert_eq!(write.clsp, "74.0");
        assert_eq!(write.fan, "auto");
    }

    #[test]
    fn endpoints_address_index_and_id() {
        assert_eq!(activity_endpoint(0, Activity::Manual), "/api/0/activity/manual");
        assert_eq!(hold_endpoint("1"), "/api/1/hold");
    }

    #[test]
    fn hold_payload_shapes() {
        let off = hold_clear();
        assert_eq!(off.hold, "off");
        assert_eq!(off.activity, "");
        assert_eq!(off.until, "");

        let forever = hold_indefinite(Activity::Home);
        assert_eq!(forever.hold, "on");
        assert_eq!(forever.activity, "home");
        assert_eq!(forever.until, "forever");

        let until = hold_until(Activity::Manual, "15:00");
        assert_eq!(until.hold, "on");
        assert_eq!(until.activity, "manual");
        assert_eq!(until.until, "15:00");
    }
}
