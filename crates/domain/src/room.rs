//! Rooms: the fixed table of temperature sensors and how one reading is shown.
//!
//! The table order is part of the backend contract: the i-th room is fed by
//! the i-th readout field (`s1` … `s9`).

/// Number of temperature sensors reported by the backend.
pub const ROOM_COUNT: usize = 9;

/// Placeholder shown for a room whose value is missing or not a number.
pub const READING_ERROR_TEXT: &str = "Eroare";

/// Placeholder shown for every room when the readout could not be fetched.
pub const SERVER_ERROR_TEXT: &str = "Eroare server";

/// Upper bound of a progress bar, in percent.
const MAX_BAR_PERCENT: f64 = 100.0;

/// Static description of where one sensor is rendered on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomDescriptor {
    /// Element id of the temperature text.
    pub display_id: &'static str,
    /// Element id of the progress bar.
    pub bar_id: &'static str,
    /// CSS classes giving the bar its colour.
    pub color_class: &'static str,
    /// Human-readable name shown next to the value.
    pub label: &'static str,
}

impl RoomDescriptor {
    /// Full class attribute of the progress bar.
    #[must_use]
    pub fn bar_class(&self) -> String {
        format!("progress-bar {}", self.color_class)
    }
}

/// All rooms, in backend field order.
pub const ROOMS: [RoomDescriptor; ROOM_COUNT] = [
    RoomDescriptor {
        display_id: "tempBucataria",
        bar_id: "bar1",
        color_class: "bg-info",
        label: "Bucătăria",
    },
    RoomDescriptor {
        display_id: "tempParintiAntreu",
        bar_id: "bar2",
        color_class: "bg-primary",
        label: "Părinți antreu",
    },
    RoomDescriptor {
        display_id: "tempParintiDormitor",
        bar_id: "bar3",
        color_class: "bg-secondary",
        label: "Părinți dormitor",
    },
    RoomDescriptor {
        display_id: "tempLeaving",
        bar_id: "bar4",
        color_class: "bg-success",
        label: "Living",
    },
    RoomDescriptor {
        display_id: "engineTempolea",
        bar_id: "bar5",
        color_class: "bg-warning",
        label: "Centrală tur",
    },
    RoomDescriptor {
        display_id: "tempRobert",
        bar_id: "bar6",
        color_class: "bg-danger",
        label: "Robert",
    },
    RoomDescriptor {
        display_id: "tempIrka",
        bar_id: "bar7",
        color_class: "bg-dark",
        label: "Irka",
    },
    RoomDescriptor {
        display_id: "tempBaia",
        bar_id: "bar8",
        color_class: "bg-light text-dark",
        label: "Baia",
    },
    RoomDescriptor {
        display_id: "engineTemporidor",
        bar_id: "bar9",
        color_class: "bg-secondary text-light",
        label: "Centrală retur",
    },
];

/// What a single room should display after a refresh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoomReading {
    /// A usable temperature, in degrees.
    Value(f64),
    /// The backend answered but this room's field was unusable.
    Invalid,
    /// The whole readout failed.
    ServerError,
}

impl RoomReading {
    /// Build a reading from a raw number, rejecting NaN and infinities.
    #[must_use]
    pub fn from_f64(value: f64) -> Self {
        if value.is_finite() {
            Self::Value(value)
        } else {
            Self::Invalid
        }
    }

    /// Text shown in the room's display element.
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Value(value) => format_one_decimal(*value),
            Self::Invalid => READING_ERROR_TEXT.to_string(),
            Self::ServerError => SERVER_ERROR_TEXT.to_string(),
        }
    }

    /// Width of the progress bar, in percent: twice the value, capped at 100.
    #[must_use]
    pub fn bar_percent(&self) -> f64 {
        match self {
            Self::Value(value) => (value * 2.0).min(MAX_BAR_PERCENT),
            Self::Invalid | Self::ServerError => 0.0,
        }
    }

    /// Whether the reading carries a usable value.
    #[must_use]
    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }
}

/// Format with one decimal, sending exact halves away from zero.
///
/// `{:.1}` alone breaks exact binary ties (`0.25`, `21.75`) towards even.
/// Negative zero renders as `0.0`.
#[allow(clippy::float_cmp)]
fn format_one_decimal(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    let scaled = value * 10.0;
    let exact = value.mul_add(10.0, -scaled) == 0.0;
    if exact && scaled.fract().abs() == 0.5 {
        let rounded = scaled.trunc() + scaled.signum();
        return format!("{:.1}", rounded / 10.0);
    }
    format!("{value:.1}")
}
