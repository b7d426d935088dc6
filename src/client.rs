use std::collections::HashMap;
use std::time::Duration as StdDuration;

use chrono::{DateTime, Duration, FixedOffset, Local, NaiveDateTime, NaiveTime, Offset};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, error, warn};

use crate::diff::diff_values;
use crate::json::{items, non_empty_str, parse_f64, parse_i64, simplify};
use crate::logger::{MessageLogMode, MessageLogger};
use crate::protocol::{
    activity_endpoint, activity_write, hold_clear, hold_endpoint, hold_indefinite, hold_until,
    round_to_quarter_hour, HeatSourceWrite, ModeWrite, CONFIG_ENDPOINT, CONFIG_WRITE_ENDPOINT,
    ENERGY_ENDPOINT, PROFILE_ENDPOINT, STATUS_ENDPOINT,
};
use crate::schedule::{self, ZoneSchedule};
use crate::transport::Transport;
use crate::types::*;
use crate::{Error, Result};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_TIMEOUT: StdDuration = StdDuration::from_secs(30);

static NULL: Value = Value::Null;

pub struct InfinitudeBuilder {
    host: String,
    port: u16,
    ssl: bool,
    timeout: StdDuration,
    log_mode: Option<MessageLogMode>,
    log_path: Option<String>,
}

impl InfinitudeBuilder {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_PORT,
            ssl: false,
            timeout: DEFAULT_TIMEOUT,
            log_mode: None,
            log_path: None,
        }
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn ssl(mut self, ssl: bool) -> Self {
        self.ssl = ssl;
        self
    }

    /// Bounds each refresh cycle (`connect` and `update`) as a whole.
    pub fn timeout(mut self, timeout: StdDuration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn message_log(mut self, mode: MessageLogMode, path: impl Into<String>) -> Self {
        self.log_mode = Some(mode);
        self.log_path = Some(path.into());
        self
    }

    pub fn build(self) -> Infinitude {
        let logger = match (self.log_mode, self.log_path) {
            (Some(mode), Some(path)) => {
                Some(MessageLogger::new(mode, &path).expect("failed to open log file"))
            }
            _ => None,
        };

        Infinitude {
            transport: Transport::new(&self.host, self.port, self.ssl),
            timeout: self.timeout,
            connected: false,
            status: empty_object(),
            config: empty_object(),
            energy: empty_object(),
            profile: empty_object(),
            zone_ids: Vec::new(),
            schedules: HashMap::new(),
            logger,
        }
    }
}

/// Client for one Infinitude gateway. Owns the latest normalized snapshot of
/// each endpoint; `System` and `Zone` views read through to these snapshots,
/// so a completed refresh is visible to every accessor at once.
pub struct Infinitude {
    transport: Transport,
    timeout: StdDuration,
    connected: bool,
    status: Value,
    config: Value,
    energy: Value,
    profile: Value,
    zone_ids: Vec<String>,
    schedules: HashMap<String, ZoneSchedule>,
    logger: Option<MessageLogger>,
}

impl Infinitude {
    pub fn builder(host: impl Into<String>) -> InfinitudeBuilder {
        InfinitudeBuilder::new(host)
    }

    /// First contact: fetch all four endpoints, discover the zone list and
    /// project every zone's schedule. Any failure here is a connection
    /// failure so that setup fails visibly.
    pub async fn connect(&mut self) -> Result<()> {
        debug!(url = %self.transport.base_url(), "connecting to Infinitude");
        let this: &Infinitude = self;
        let fetched = tokio::time::timeout(this.timeout, async {
            tokio::join!(
                this.fetch_status(),
                this.fetch_config(),
                this.fetch_energy(),
                this.fetch_profile(),
            )
        })
        .await;
        let (status, config, energy, profile) = match fetched {
            Ok(results) => results,
            Err(_) => {
                error!(timeout = ?self.timeout, "connection to Infinitude timed out");
                return Err(Error::ConnectionFailed(format!(
                    "no response from {} within {:?}",
                    self.transport.base_url(),
                    self.timeout
                )));
            }
        };
        let status = status.map_err(connect_error)?;
        let config = config.map_err(connect_error)?;
        let energy = energy.map_err(connect_error)?;
        let profile = profile.map_err(connect_error)?;

        replace_snapshot(&mut self.status, "status", status, &mut self.logger);
        replace_snapshot(&mut self.config, "config", config, &mut self.logger);
        replace_snapshot(&mut self.energy, "energy", energy, &mut self.logger);
        replace_snapshot(&mut self.profile, "profile", profile, &mut self.logger);

        self.zone_ids = items(&self.config["zones"]["zone"])
            .filter_map(|zone| non_empty_str(&zone["id"]))
            .map(str::to_string)
            .collect();
        self.connected = true;
        self.project_schedules();
        Ok(())
    }

    /// Refresh status, config and energy (the profile never changes after
    /// connect). A failed endpoint degrades to an empty snapshot for this
    /// cycle; only a timeout fails the refresh as a whole, and nothing is
    /// replaced in that case.
    pub async fn update(&mut self) -> Result<()> {
        if !self.connected {
            return Err(Error::NotConnected);
        }
        debug!("updating from Infinitude");
        let this: &Infinitude = self;
        let fetched = tokio::time::timeout(this.timeout, async {
            tokio::join!(this.fetch_status(), this.fetch_config(), this.fetch_energy())
        })
        .await;
        let (status, config, energy) = match fetched {
            Ok(results) => results,
            Err(_) => {
                error!(timeout = ?self.timeout, "update timed out");
                return Err(Error::Timeout);
            }
        };
        let status = degrade("status", status);
        let config = degrade("config", config);
        let energy = degrade("energy", energy);

        replace_snapshot(&mut self.status, "status", status, &mut self.logger);
        replace_snapshot(&mut self.config, "config", config, &mut self.logger);
        replace_snapshot(&mut self.energy, "energy", energy, &mut self.logger);

        self.project_schedules();
        Ok(())
    }

    pub fn system(&self) -> System<'_> {
        System { client: self }
    }

    pub fn zone(&self, id: &str) -> Option<Zone<'_>> {
        self.zone_ids
            .iter()
            .find(|zone_id| zone_id.as_str() == id)
            .map(|zone_id| Zone {
                client: self,
                id: zone_id.as_str(),
            })
    }

    pub fn zones(&self) -> Vec<Zone<'_>> {
        self.zone_ids
            .iter()
            .map(|zone_id| Zone {
                client: self,
                id: zone_id.as_str(),
            })
            .collect()
    }

    pub fn energy(&self) -> Option<&Value> {
        match &self.energy["energy"] {
            Value::Null => None,
            value => Some(value),
        }
    }

    // -- Command methods --

    /// Set the system-wide HVAC mode. The change is picked up by the next
    /// polling cycle rather than a forced refresh.
    pub async fn set_hvac_mode(&mut self, mode: HvacMode) -> Result<()> {
        let params = ModeWrite {
            mode: mode.as_infinitude_str(),
        };
        self.post_command("set_hvac_mode", None, CONFIG_WRITE_ENDPOINT, &params)
            .await
    }

    pub async fn set_heat_source(&mut self, source: HeatSource) -> Result<()> {
        let params = HeatSourceWrite {
            heatsource: source.as_infinitude_str(),
        };
        self.post_command("set_heat_source", None, CONFIG_WRITE_ENDPOINT, &params)
            .await?;
        self.update().await
    }

    /// Set new target setpoints for a zone. Explicit heat/cool values win
    /// over the shared `temperature`; unspecified sides keep their current
    /// values. Writes go to the zone's manual activity slot, which is then
    /// held until the next schedule change.
    pub async fn set_temperature(
        &mut self,
        zone_id: &str,
        temperature: Option<f64>,
        temperature_heat: Option<f64>,
        temperature_cool: Option<f64>,
    ) -> Result<()> {
        let (current_heat, current_cool, fan, index) = {
            let zone = self.require_zone(zone_id)?;
            (
                zone.temperature_heat(),
                zone.temperature_cool(),
                zone.fan_mode(),
                zone.index(),
            )
        };
        let heat = temperature_heat.or(temperature).or(current_heat);
        let cool = temperature_cool.or(temperature).or(current_cool);
        let (Some(heat), Some(cool)) = (heat, cool) else {
            return Err(Error::Protocol(format!(
                "zone {zone_id} setpoints unavailable"
            )));
        };
        if heat > cool {
            return Err(Error::InvalidSetpoints { heat, cool });
        }
        let index = index.ok_or_else(|| Error::InvalidZone(zone_id.to_string()))?;
        // echo the current fan mode so the write does not reset it
        let params = activity_write(heat, cool, fan.unwrap_or(FanMode::Auto));
        let endpoint = activity_endpoint(index, Activity::Manual);
        self.post_command("set_temperature", Some(zone_id), &endpoint, &params)
            .await?;
        self.set_hold_mode(zone_id, Some(HoldMode::Until), Some(Activity::Manual), None)
            .await
    }

    /// Set a zone's fan mode via the manual activity slot, echoing the
    /// current setpoints so the write does not reset them.
    pub async fn set_fan_mode(&mut self, zone_id: &str, mode: FanMode) -> Result<()> {
        let (current_heat, current_cool, index) = {
            let zone = self.require_zone(zone_id)?;
            (zone.temperature_heat(), zone.temperature_cool(), zone.index())
        };
        let (Some(heat), Some(cool)) = (current_heat, current_cool) else {
            return Err(Error::Protocol(format!(
                "zone {zone_id} setpoints unavailable"
            )));
        };
        let index = index.ok_or_else(|| Error::InvalidZone(zone_id.to_string()))?;
        let params = activity_write(heat, cool, mode);
        let endpoint = activity_endpoint(index, Activity::Manual);
        self.post_command("set_fan_mode", Some(zone_id), &endpoint, &params)
            .await?;
        self.set_hold_mode(zone_id, Some(HoldMode::Until), Some(Activity::Manual), None)
            .await
    }

    /// Set or clear a zone hold. Defaults hold the current activity until
    /// the next scheduled activity change; the until time is snapped to the
    /// 15-minute grid the hold endpoint requires.
    pub async fn set_hold_mode(
        &mut self,
        zone_id: &str,
        mode: Option<HoldMode>,
        activity: Option<Activity>,
        until: Option<DateTime<FixedOffset>>,
    ) -> Result<()> {
        let (current_activity, next_start) = {
            let zone = self.require_zone(zone_id)?;
            (zone.activity_current(), zone.activity_next_start())
        };
        let mode = mode.unwrap_or(HoldMode::Until);
        let params = match mode {
            HoldMode::Off => hold_clear(),
            HoldMode::Indefinite => {
                let activity = activity.or(current_activity).ok_or_else(|| {
                    Error::Protocol(format!("zone {zone_id} current activity unknown"))
                })?;
                hold_indefinite(activity)
            }
            HoldMode::Until => {
                let activity = activity.or(current_activity).ok_or_else(|| {
                    Error::Protocol(format!("zone {zone_id} current activity unknown"))
                })?;
                let until = until.or(next_start).ok_or_else(|| {
                    Error::Protocol(format!("zone {zone_id} next activity start unknown"))
                })?;
                let until = round_to_quarter_hour(until);
                hold_until(activity, &until.format("%H:%M").to_string())
            }
        };
        let endpoint = hold_endpoint(zone_id);
        self.post_command("set_hold_mode", Some(zone_id), &endpoint, &params)
            .await?;
        self.update().await
    }

    // -- Helpers --

    async fn fetch_status(&self) -> Result<Value> {
        let data = self.transport.get(STATUS_ENDPOINT).await?;
        Ok(simplify(&data))
    }

    async fn fetch_config(&self) -> Result<Value> {
        let resp = self.transport.get(CONFIG_ENDPOINT).await?;
        let data = resp.get("data").cloned().unwrap_or_else(empty_object);
        Ok(simplify(&data))
    }

    async fn fetch_energy(&self) -> Result<Value> {
        let data = self.transport.get(ENERGY_ENDPOINT).await?;
        Ok(simplify(&data))
    }

    async fn fetch_profile(&self) -> Result<Value> {
        let resp = self.transport.get(PROFILE_ENDPOINT).await?;
        let data = resp
            .get("system_profile")
            .cloned()
            .unwrap_or_else(empty_object);
        Ok(simplify(&data))
    }

    fn project_schedules(&mut self) {
        let now = self.system().local_time();
        let mut schedules = HashMap::new();
        for id in &self.zone_ids {
            let config = zone_entry(&self.config, id);
            if let Some(sched) = schedule::project(id, config, now) {
                schedules.insert(id.clone(), sched);
            }
        }
        self.schedules = schedules;
    }

    fn require_zone(&self, zone_id: &str) -> Result<Zone<'_>> {
        self.zone(zone_id)
            .ok_or_else(|| Error::InvalidZone(zone_id.to_string()))
    }

    async fn post_command<T: Serialize>(
        &mut self,
        action: &str,
        zone: Option<&str>,
        endpoint: &str,
        params: &T,
    ) -> Result<()> {
        if !self.connected {
            return Err(Error::NotConnected);
        }
        if let Some(logger) = &mut self.logger {
            let body = serde_json::to_value(params).unwrap_or(Value::Null);
            logger.log_command(action, zone, &body);
        }
        self.transport.post_form(endpoint, params).await?;
        Ok(())
    }
}

/// Read-through view over the system-wide slices of the snapshots.
pub struct System<'a> {
    client: &'a Infinitude,
}

impl<'a> System<'a> {
    fn status(&self) -> &'a Value {
        &self.client.status
    }

    fn config(&self) -> &'a Value {
        &self.client.config
    }

    fn profile(&self) -> &'a Value {
        &self.client.profile
    }

    pub fn brand(&self) -> Option<&'a str> {
        non_empty_str(&self.profile()["brand"])
    }

    pub fn model(&self) -> Option<&'a str> {
        non_empty_str(&self.profile()["model"])
    }

    pub fn serial(&self) -> Option<&'a str> {
        non_empty_str(&self.profile()["serial"])
    }

    pub fn firmware(&self) -> Option<&'a str> {
        non_empty_str(&self.profile()["firmware"])
    }

    pub fn temperature_unit(&self) -> Option<TemperatureUnit> {
        decode(
            &self.status()["cfgem"],
            "temperature unit",
            TemperatureUnit::from_infinitude_str,
        )
    }

    pub fn hvac_mode(&self) -> Option<HvacMode> {
        decode(
            &self.config()["mode"],
            "HVAC mode",
            HvacMode::from_infinitude_str,
        )
    }

    /// The gateway's own wall clock. Falls back to the host clock when the
    /// reported string is missing or malformed, so schedule projection
    /// always has a usable "now".
    pub fn local_time(&self) -> DateTime<FixedOffset> {
        let raw = non_empty_str(&self.status()["localTime"]);
        let naive = raw.and_then(parse_local_naive).unwrap_or_else(|| {
            debug!(raw, "unusable localTime, using host clock");
            Local::now().naive_local()
        });
        naive
            .and_local_timezone(self.local_timezone())
            .single()
            .unwrap_or_else(|| Local::now().fixed_offset())
    }

    /// Offset from the `localTime` suffix when present, otherwise the host
    /// system's offset. Not all gateway firmwares report the suffix.
    pub fn local_timezone(&self) -> FixedOffset {
        non_empty_str(&self.status()["localTime"])
            .and_then(parse_offset_suffix)
            .unwrap_or_else(|| Local::now().offset().fix())
    }

    pub fn filter_level(&self) -> Option<i64> {
        parse_i64(&self.status()["filtrlvl"])
    }

    pub fn humidifier_state(&self) -> Option<HumidifierState> {
        decode(
            &self.status()["humid"],
            "humidifier state",
            HumidifierState::from_infinitude_str,
        )
    }

    pub fn humidifier_level(&self) -> Option<i64> {
        parse_i64(&self.status()["humlvl"])
    }

    pub fn ventilator_level(&self) -> Option<i64> {
        parse_i64(&self.status()["ventlvl"])
    }

    pub fn uv_level(&self) -> Option<i64> {
        parse_i64(&self.status()["uvlvl"])
    }

    pub fn temperature_outside(&self) -> Option<i64> {
        parse_i64(&self.status()["oat"])
    }

    pub fn airflow_cfm(&self) -> Option<f64> {
        parse_f64(&self.status()["idu"]["cfm"])
    }

    pub fn furnace_status(&self) -> Option<&'a str> {
        non_empty_str(&self.status()["idu"]["opstat"])
    }

    pub fn heatpump_status(&self) -> Option<&'a str> {
        non_empty_str(&self.status()["odu"]["opstat"])
    }

    pub fn heatpump_mode(&self) -> Option<&'a str> {
        non_empty_str(&self.status()["odu"]["opmode"])
    }

    pub fn heat_source(&self) -> Option<HeatSource> {
        decode(
            &self.config()["heatsource"],
            "heat source",
            HeatSource::from_infinitude_str,
        )
    }

    /// Gas valve modulation percentage, meaningful only for a modulating
    /// furnace. A non-numeric operating status reads as zero modulation
    /// rather than absent.
    pub fn idu_modulation(&self) -> Option<i64> {
        let idu = &self.status()["idu"];
        if non_empty_str(&idu["type"]) != Some("furnacemodulating") {
            return None;
        }
        Some(parse_i64(&idu["opstat"]).unwrap_or(0))
    }
}

/// Read-through view over one zone's slice of the snapshots, plus the cached
/// schedule projection computed at the last refresh.
pub struct Zone<'a> {
    client: &'a Infinitude,
    id: &'a str,
}

impl<'a> Zone<'a> {
    fn status(&self) -> &'a Value {
        zone_entry(&self.client.status, self.id)
    }

    fn config(&self) -> &'a Value {
        zone_entry(&self.client.config, self.id)
    }

    fn schedule(&self) -> Option<&'a ZoneSchedule> {
        self.client.schedules.get(self.id)
    }

    /// Device-assigned zone id, 1-based.
    pub fn id(&self) -> &'a str {
        self.id
    }

    /// 0-based index, the form the activity write endpoint expects.
    pub fn index(&self) -> Option<u32> {
        self.id.parse::<u32>().ok().and_then(|n| n.checked_sub(1))
    }

    pub fn name(&self) -> Option<&'a str> {
        non_empty_str(&self.status()["name"])
    }

    pub fn enabled(&self) -> Option<bool> {
        non_empty_str(&self.status()["enabled"]).map(|v| v == "on")
    }

    pub fn temperature_unit(&self) -> Option<TemperatureUnit> {
        self.client.system().temperature_unit()
    }

    pub fn temperature_current(&self) -> Option<f64> {
        parse_f64(&self.status()["rt"])
    }

    pub fn temperature_heat(&self) -> Option<f64> {
        parse_f64(&self.status()["htsp"])
    }

    pub fn temperature_cool(&self) -> Option<f64> {
        parse_f64(&self.status()["clsp"])
    }

    pub fn humidity_current(&self) -> Option<i64> {
        parse_i64(&self.status()["rh"])
    }

    pub fn fan_mode(&self) -> Option<FanMode> {
        decode(
            &self.status()["fan"],
            "fan mode",
            FanMode::from_infinitude_str,
        )
    }

    pub fn hvac_mode(&self) -> Option<HvacMode> {
        self.client.system().hvac_mode()
    }

    pub fn hvac_action(&self) -> Option<HvacAction> {
        decode(
            &self.status()["zoneconditioning"],
            "HVAC action",
            HvacAction::from_infinitude_str,
        )
    }

    pub fn occupancy(&self) -> Option<Occupancy> {
        decode(
            &self.status()["occupancy"],
            "occupancy",
            Occupancy::from_infinitude_str,
        )
    }

    pub fn hold_state(&self) -> Option<HoldState> {
        decode(
            &self.config()["hold"],
            "hold state",
            HoldState::from_infinitude_str,
        )
    }

    pub fn hold_activity(&self) -> Option<Activity> {
        decode(
            &self.config()["holdActivity"],
            "hold activity",
            Activity::from_infinitude_str,
        )
    }

    /// The hold expiry as a full timestamp. The gateway only reports a
    /// time-of-day, which always names its next occurrence.
    pub fn hold_until(&self) -> Option<DateTime<FixedOffset>> {
        let raw = non_empty_str(&self.status()["otmr"])?;
        let time = NaiveTime::parse_from_str(raw, "%H:%M").ok()?;
        let now = self.client.system().local_time();
        let candidate = now
            .date_naive()
            .and_time(time)
            .and_local_timezone(*now.offset())
            .single()?;
        if candidate < now {
            Some(candidate + Duration::days(1))
        } else {
            Some(candidate)
        }
    }

    pub fn hold_mode(&self) -> Option<HoldMode> {
        match self.hold_state()? {
            HoldState::Off => Some(HoldMode::Off),
            HoldState::On => {
                if self.hold_until().is_some() {
                    Some(HoldMode::Until)
                } else {
                    Some(HoldMode::Indefinite)
                }
            }
        }
    }

    pub fn activity_current(&self) -> Option<Activity> {
        decode(
            &self.status()["currentActivity"],
            "activity",
            Activity::from_infinitude_str,
        )
    }

    pub fn activity_scheduled(&self) -> Option<Activity> {
        self.schedule().map(|s| s.activity_scheduled)
    }

    pub fn activity_scheduled_start(&self) -> Option<DateTime<FixedOffset>> {
        self.schedule().map(|s| s.activity_scheduled_start)
    }

    pub fn activity_next(&self) -> Option<Activity> {
        self.schedule().map(|s| s.activity_next)
    }

    pub fn activity_next_start(&self) -> Option<DateTime<FixedOffset>> {
        self.schedule().map(|s| s.activity_next_start)
    }
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}

fn connect_error(e: Error) -> Error {
    Error::ConnectionFailed(e.to_string())
}

fn degrade(endpoint: &str, fetched: Result<Value>) -> Value {
    match fetched {
        Ok(value) => value,
        Err(e) => {
            warn!(endpoint, error = %e, "fetch failed, data unavailable this cycle");
            empty_object()
        }
    }
}

fn replace_snapshot(
    slot: &mut Value,
    endpoint: &str,
    new: Value,
    logger: &mut Option<MessageLogger>,
) {
    let changes = diff_values(slot, &new);
    if !changes.is_empty() {
        debug!(endpoint, changes = ?changes, "snapshot changed");
    }
    if let Some(logger) = logger {
        logger.log_refresh(endpoint, &new);
    }
    *slot = new;
}

fn zone_entry<'v>(snapshot: &'v Value, id: &str) -> &'v Value {
    items(&snapshot["zones"]["zone"])
        .find(|zone| zone["id"].as_str() == Some(id))
        .unwrap_or(&NULL)
}

fn decode<T>(value: &Value, what: &str, parse: fn(&str) -> Option<T>) -> Option<T> {
    let code = non_empty_str(value)?;
    let parsed = parse(code);
    if parsed.is_none() {
        warn!(code, "unknown {what}");
    }
    parsed
}

fn parse_local_naive(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.get(..19)?, "%Y-%m-%dT%H:%M:%S").ok()
}

fn parse_offset_suffix(raw: &str) -> Option<FixedOffset> {
    let suffix = raw.get(19..)?;
    if suffix.len() != 6 {
        return None;
    }
    let sign = match suffix.as_bytes()[0] {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    let (hours, minutes) = suffix[1..].split_once(':')?;
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_naive_parses_with_and_without_suffix() {
        let naive = parse_local_naive("2025-03-15T14:10:00-05:00").unwrap();
        assert_eq!(naive.format("%H:%M:%S").to_string(), "14:10:00");
        assert!(parse_local_naive("2025-03-15T14:10:00").is_some());
        assert!(parse_local_naive("not a timestamp, honestly").is_none());
        assert!(parse_local_naive("").is_none());
    }

    #[test]
    fn offset_suffix_parses_sign_and_minutes() {
        assert_eq!(
            parse_offset_suffix("2025-03-15T14:10:00-05:00"),
            FixedOffset::west_opt(5 * 3600)
        );
        assert_eq!(
            parse_offset_suffix("2025-03-15T14:10:00+05:30"),
            FixedOffset::east_opt(5 * 3600 + 30 * 60)
        );
        assert_eq!(parse_offset_suffix("2025-03-15T14:10:00"), None);
        assert_eq!(parse_offset_suffix("garbage"), None);
    }
}
