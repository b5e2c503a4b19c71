//! View Model
//!
//! Pure mapping from (activity snapshot, session) to what the page shows.
//! No I/O happens here; hosts turn these values into DOM.

pub mod banner;

pub use banner::{Banner, Severity};

use crate::models::{Activities, Activity};
use crate::session::Session;

/// The client's current copy of the activity collection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ActivitySnapshot {
    /// First fetch still in flight
    #[default]
    Loading,
    Loaded(Activities),
    Failed,
}

/// What the activity list area shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityListView {
    Loading,
    Cards(Vec<ActivityCard>),
    Failed { notice: &'static str },
}

/// One rendered activity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    /// `max_participants - participants`, shown as-is even when negative
    pub spots_left: i64,
    pub availability: String,
    pub participants: ParticipantSection,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParticipantSection {
    /// Rendered as "No participants yet"
    Empty,
    Listed(Vec<ParticipantRow>),
}

impl ParticipantSection {
    pub fn rows(&self) -> &[ParticipantRow] {
        match self {
            ParticipantSection::Empty => &[],
            ParticipantSection::Listed(rows) => rows,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantRow {
    pub email: String,
    /// Present only while a session is active
    pub removal: Option<RemovalControl>,
}

/// Target of a participant's remove button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalControl {
    pub activity: String,
    pub email: String,
}

/// Render the list area
pub fn activity_list(snapshot: &ActivitySnapshot, session: Option<&Session>) -> ActivityListView {
    match snapshot {
        ActivitySnapshot::Loading => ActivityListView::Loading,
        ActivitySnapshot::Failed => ActivityListView::Failed {
            notice: banner::LOAD_FAILED,
        },
        ActivitySnapshot::Loaded(activities) => ActivityListView::Cards(
            activities
                .iter()
                .map(|activity| activity_card(activity, session))
                .collect(),
        ),
    }
}

/// Render a single activity
pub fn activity_card(activity: &Activity, session: Option<&Session>) -> ActivityCard {
    let spots_left = activity.spots_left();
    let details = &activity.details;

    let participants = if details.participants.is_empty() {
        ParticipantSection::Empty
    } else {
        ParticipantSection::Listed(
            details
                .participants
                .iter()
                .map(|email| ParticipantRow {
                    email: email.clone(),
                    removal: session.map(|_| RemovalControl {
                        activity: activity.name.clone(),
                        email: email.clone(),
                    }),
                })
                .collect(),
        )
    };

    ActivityCard {
        name: activity.name.clone(),
        description: details.description.clone(),
        schedule: details.schedule.clone(),
        spots_left,
        availability: format!("{} spots left", spots_left),
        participants,
    }
}

/// Choices for the signup form's activity selector
pub fn activity_options(snapshot: &ActivitySnapshot) -> Vec<String> {
    match snapshot {
        ActivitySnapshot::Loaded(activities) => activities.names().map(str::to_string).collect(),
        _ => Vec::new(),
    }
}

/// The account button in the page header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentityIndicator {
    pub label: &'static str,
    pub title: &'static str,
    pub active: bool,
}

impl IdentityIndicator {
    pub fn for_session(session: Option<&Session>) -> Self {
        match session {
            Some(_) => Self {
                label: "✓👤",
                title: "Logout",
                active: true,
            },
            None => Self {
                label: "👤",
                title: "Login",
                active: false,
            },
        }
    }
}

/// Text of the logout dialog
pub fn logged_in_label(session: &Session) -> String {
    format!("Logged in as: {}", session.username())
}
