//! Wizard steps and their transition table.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumIter, IntoEnumIterator};

use super::form::Field;

/// One ordered stage of the booking wizard.
///
/// # State Transitions
///
/// ```text
/// ServiceSelection -> PersonalDetails -> Schedule -> Confirmation
///        ^                                               |
///        +------------------- submit (reset) ------------+
/// ```
///
/// Forward moves are guarded by the step's [`Guard`]; backward moves are
/// never guarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[derive(Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Step {
    #[default]
    ServiceSelection = 1,
    PersonalDetails = 2,
    Schedule = 3,
    Confirmation = 4,
}

/// Named guard protecting the forward transition out of a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(strum::Display)]
pub enum Guard {
    /// Service and stylist are both chosen
    #[strum(serialize = "service-chosen")]
    ServiceChosen,
    /// Name, phone and a well-formed email are present
    #[strum(serialize = "contact-complete")]
    ContactComplete,
    /// Date and time are both chosen
    #[strum(serialize = "slot-chosen")]
    SlotChosen,
    /// Review only, nothing to check
    #[strum(serialize = "review-only")]
    ReviewOnly,
}

impl Step {
    /// Number of steps in the wizard.
    pub const COUNT: u8 = 4;

    /// Fixed 1-based position of this step.
    #[inline]
    pub const fn position(self) -> u8 {
        self as u8
    }

    /// Look up a step by its 1-based position.
    pub const fn from_position(position: u8) -> Option<Self> {
        match position {
            1 => Some(Self::ServiceSelection),
            2 => Some(Self::PersonalDetails),
            3 => Some(Self::Schedule),
            4 => Some(Self::Confirmation),
            _ => None,
        }
    }

    /// The step `advance()` moves to, or `None` from the final step.
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::ServiceSelection => Some(Self::PersonalDetails),
            Self::PersonalDetails => Some(Self::Schedule),
            Self::Schedule => Some(Self::Confirmation),
            Self::Confirmation => None,
        }
    }

    /// The step `retreat()` moves to, or `None` from the first step.
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::ServiceSelection => None,
            Self::PersonalDetails => Some(Self::ServiceSelection),
            Self::Schedule => Some(Self::PersonalDetails),
            Self::Confirmation => Some(Self::Schedule),
        }
    }

    /// Guard checked before leaving this step forwards (or submitting).
    pub const fn guard(self) -> Guard {
        match self {
            Self::ServiceSelection => Guard::ServiceChosen,
            Self::PersonalDetails => Guard::ContactComplete,
            Self::Schedule => Guard::SlotChosen,
            Self::Confirmation => Guard::ReviewOnly,
        }
    }

    /// True for the review step, which submits instead of advancing.
    #[inline]
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Confirmation)
    }

    /// Display title.
    pub const fn title(self) -> &'static str {
        match self {
            Self::ServiceSelection => "Service Selection",
            Self::PersonalDetails => "Personal Details",
            Self::Schedule => "Schedule",
            Self::Confirmation => "Confirmation",
        }
    }

    /// One-line description shown under the progress indicator.
    pub const fn description(self) -> &'static str {
        match self {
            Self::ServiceSelection => "Choose the service you'd like to book",
            Self::PersonalDetails => "Tell us about yourself",
            Self::Schedule => "Select your preferred date and time",
            Self::Confirmation => "Review and confirm your booking",
        }
    }

    /// Form fields collected on this step, in display order.
    pub const fn fields(self) -> &'static [Field] {
        match self {
            Self::ServiceSelection => &[Field::Service, Field::Stylist],
            Self::PersonalDetails => &[Field::Name, Field::Email, Field::Phone],
            Self::Schedule => &[Field::Date, Field::Time, Field::Notes],
            Self::Confirmation => &[],
        }
    }

    /// All steps in order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

impl TryFrom<u8> for Step {
    type Error = crate::error::BookingError;

    fn try_from(position: u8) -> Result<Self, Self::Error> {
        Self::from_position(position).ok_or(crate::error::BookingError::InvalidStep(position))
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {} ({})", self.position(), self.title())
    }
}
