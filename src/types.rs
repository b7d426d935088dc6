//! Closed mappings between the gateway's short string codes and domain
//! enumerations. Lookups are total: an unrecognized code yields `None`,
//! and the accessor that asked logs the warning.

/// Temperature unit reported in status (`cfgem`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn as_infinitude_str(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "C",
            TemperatureUnit::Fahrenheit => "F",
        }
    }

    pub fn from_infinitude_str(s: &str) -> Option<Self> {
        match s {
            "C" => Some(TemperatureUnit::Celsius),
            "F" => Some(TemperatureUnit::Fahrenheit),
            _ => None,
        }
    }
}

/// System-wide HVAC mode (config `mode`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HvacMode {
    Auto,
    Heat,
    Cool,
    Off,
    FanOnly,
}

impl HvacMode {
    pub fn as_infinitude_str(&self) -> &'static str {
        match self {
            HvacMode::Auto => "auto",
            HvacMode::Heat => "heat",
            HvacMode::Cool => "cool",
            HvacMode::Off => "off",
            HvacMode::FanOnly => "fanonly",
        }
    }

    pub fn from_infinitude_str(s: &str) -> Option<Self> {
        match s {
            "auto" => Some(HvacMode::Auto),
            "heat" => Some(HvacMode::Heat),
            "cool" => Some(HvacMode::Cool),
            "off" => Some(HvacMode::Off),
            "fanonly" => Some(HvacMode::FanOnly),
            _ => None,
        }
    }
}

/// What a zone is actually doing right now (status `zoneconditioning`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HvacAction {
    ActiveHeat,
    ActiveCool,
    Idle,
}

impl HvacAction {
    pub fn as_infinitude_str(&self) -> &'static str {
        match self {
            HvacAction::ActiveHeat => "active_heat",
            HvacAction::ActiveCool => "active_cool",
            HvacAction::Idle => "idle",
        }
    }

    pub fn from_infinitude_str(s: &str) -> Option<Self> {
        match s {
            "active_heat" => Some(HvacAction::ActiveHeat),
            "active_cool" => Some(HvacAction::ActiveCool),
            "idle" => Some(HvacAction::Idle),
            _ => None,
        }
    }
}

/// Zone fan mode (status `fan`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FanMode {
    Auto,
    High,
    Medium,
    Low,
}

impl FanMode {
    pub fn as_infinitude_str(&self) -> &'static str {
        match self {
            FanMode::Auto => "auto",
            FanMode::High => "high",
            FanMode::Medium => "med",
            FanMode::Low => "low",
        }
    }

    pub fn from_infinitude_str(s: &str) -> Option<Self> {
        match s {
            // Older gateway firmwares report the automatic fan as "off".
            "auto" | "off" => Some(FanMode::Auto),
            "high" => Some(FanMode::High),
            "med" => Some(FanMode::Medium),
            "low" => Some(FanMode::Low),
            _ => None,
        }
    }
}

/// Raw hold flag on a zone (config `hold`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldState {
    Off,
    On,
}

impl HoldState {
    pub fn as_infinitude_str(&self) -> &'static str {
        match self {
            HoldState::Off => "off",
            HoldState::On => "on",
        }
    }

    pub fn from_infinitude_str(s: &str) -> Option<Self> {
        match s {
            "off" => Some(HoldState::Off),
            "on" => Some(HoldState::On),
            _ => None,
        }
    }
}

/// Effective hold behavior, derived from the hold flag and the presence of
/// an until-time; the gateway never reports this directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldMode {
    Off,
    Until,
    Indefinite,
}

/// Named comfort profile (home/away/sleep/wake/manual).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    Home,
    Away,
    Sleep,
    Wake,
    Manual,
}

impl Activity {
    pub fn as_infinitude_str(&self) -> &'static str {
        match self {
            Activity::Home => "home",
            Activity::Away => "away",
            Activity::Sleep => "sleep",
            Activity::Wake => "wake",
            Activity::Manual => "manual",
        }
    }

    pub fn from_infinitude_str(s: &str) -> Option<Self> {
        match s {
            "home" => Some(Activity::Home),
            "away" => Some(Activity::Away),
            "sleep" => Some(Activity::Sleep),
            "wake" => Some(Activity::Wake),
            "manual" => Some(Activity::Manual),
            _ => None,
        }
    }
}

/// Zone occupancy sensor state (status `occupancy`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupancy {
    Occupied,
    Unoccupied,
    Motion,
}

impl Occupancy {
    pub fn as_infinitude_str(&self) -> &'static str {
        match self {
            Occupancy::Occupied => "occupied",
            Occupancy::Unoccupied => "unoccupied",
            Occupancy::Motion => "motion",
        }
    }

    pub fn from_infinitude_str(s: &str) -> Option<Self> {
        match s {
            "occupied" => Some(Occupancy::Occupied),
            "unoccupied" => Some(Occupancy::Unoccupied),
            "motion" => Some(Occupancy::Motion),
            _ => None,
        }
    }
}

/// Humidifier state (status `humid`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HumidifierState {
    Off,
    On,
}

impl HumidifierState {
    pub fn as_infinitude_str(&self) -> &'static str {
        match self {
            HumidifierState::Off => "off",
            HumidifierState::On => "on",
        }
    }

    pub fn from_infinitude_str(s: &str) -> Option<Self> {
        match s {
            "off" => Some(HumidifierState::Off),
            "on" => Some(HumidifierState::On),
            _ => None,
        }
    }
}

/// Which equipment supplies heat (config `heatsource`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeatSource {
    System,
    Gas,
    HeatPump,
}

impl HeatSource {
    pub fn as_infinitude_str(&self) -> &'static str {
        match self {
            HeatSource::System => "system",
            HeatSource::Gas => "idu only",
            HeatSource::HeatPump => "odu only",
        }
    }

    pub fn from_infinitude_str(s: &str) -> Option<Self> {
        match s {
            "system" => Some(HeatSource::System),
            "idu only" => Some(HeatSource::Gas),
            "odu only" => Some(HeatSource::HeatPump),
            _ => None,
        }
    }
}
