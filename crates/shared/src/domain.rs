use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

id_newtype!(DriverId);
id_newtype!(RequestId);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub id: DriverId,
    pub name: String,
    pub license_id: String,
    pub is_verified: bool,
    pub rating: f32,
    pub years_experience: u32,
    pub trips_completed: u32,
    pub image_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompletionMetrics {
    pub distance_km: f64,
    pub duration_hours: f64,
}

impl CompletionMetrics {
    /// Fixed metrics attached to every completed trip until real trip
    /// telemetry exists.
    pub const fn placeholder() -> Self {
        Self {
            distance_km: 756.0,
            duration_hours: 9.5,
        }
    }
}

impl Default for CompletionMetrics {
    fn default() -> Self {
        Self::placeholder()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TripStatus {
    Pending,
    Assigned,
    Completed,
    Cancelled,
}

impl fmt::Display for TripStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TripStatus::Pending => "PENDING",
            TripStatus::Assigned => "ASSIGNED",
            TripStatus::Completed => "COMPLETED",
            TripStatus::Cancelled => "CANCELLED",
        };
        f.write_str(label)
    }
}

/// Lifecycle of a trip request. Each variant carries exactly the data that is
/// valid in that state, so a pending trip can never hold a driver and only a
/// completed trip holds metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TripState {
    Pending,
    Assigned {
        driver_id: DriverId,
    },
    Completed {
        driver_id: DriverId,
        metrics: CompletionMetrics,
    },
    /// Never produced yet: cancellation is shown to customers but has no
    /// agreed semantics.
    Cancelled,
}

impl TripState {
    pub fn status(&self) -> TripStatus {
        match self {
            TripState::Pending => TripStatus::Pending,
            TripState::Assigned { .. } => TripStatus::Assigned,
            TripState::Completed { .. } => TripStatus::Completed,
            TripState::Cancelled => TripStatus::Cancelled,
        }
    }

    pub fn driver_id(&self) -> Option<&DriverId> {
        match self {
            TripState::Assigned { driver_id } | TripState::Completed { driver_id, .. } => {
                Some(driver_id)
            }
            TripState::Pending | TripState::Cancelled => None,
        }
    }

    pub fn metrics(&self) -> Option<&CompletionMetrics> {
        match self {
            TripState::Completed { metrics, .. } => Some(metrics),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, TripState::Completed { .. } | TripState::Cancelled)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    pub id: RequestId,
    pub customer_name: String,
    pub customer_phone: String,
    pub pickup_city: String,
    pub destination_city: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub passengers: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub state: TripState,
    pub created_at: DateTime<Utc>,
}

impl TripRequest {
    pub fn status(&self) -> TripStatus {
        self.state.status()
    }

    pub fn assigned_driver_id(&self) -> Option<&DriverId> {
        self.state.driver_id()
    }

    pub fn completed_metrics(&self) -> Option<&CompletionMetrics> {
        self.state.metrics()
    }

    pub fn route_label(&self) -> String {
        format!("{} -> {}", self.pickup_city, self.destination_city)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DemoState {
    pub is_active: bool,
    pub current_step: u8,
}

impl DemoState {
    pub const INACTIVE: DemoState = DemoState {
        is_active: false,
        current_step: 0,
    };

    pub fn at_step(step: u8) -> Self {
        if step == 0 {
            Self::INACTIVE
        } else {
            Self {
                is_active: true,
                current_step: step,
            }
        }
    }
}
