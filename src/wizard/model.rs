//! Preference draft data model.
//!
//! The draft is one explicit record with a closed set of named, typed,
//! optional fields. Fields for the inactive track may still hold values;
//! they are simply not shown or required by that track's steps.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Who is filling in the wizard. Chosen once; selects which step
/// sequence is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    #[default]
    Unset,
    Tourist,
    Local,
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Unset => "unset",
            Self::Tourist => "tourist",
            Self::Local => "local",
        };
        write!(f, "{s}")
    }
}

/// How far from home a local wants to roam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExplorationRadius {
    Nearby,
    Moderate,
    Anywhere,
}

/// Preferred time of day for outings (local track).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Flexible,
}

/// Touring pace (tourist track).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pace {
    Relaxed,
    Moderate,
    Packed,
}

/// Indoor/outdoor leaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingPreference {
    Indoor,
    Outdoor,
    Mixed,
}

/// Spending bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Budget {
    Budget,
    Moderate,
    Luxury,
}

/// Where to eat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealPreference {
    Hawker,
    Restaurant,
    Mixed,
}

/// How to get around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportPreference {
    PublicTransit,
    Taxi,
    Walking,
    Mixed,
}

/// Tolerance for transit transfers (tourist track).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferComfort {
    DirectOnly,
    FewTransfers,
    Any,
}

/// What the trip is for (tourist track).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripOccasion {
    Solo,
    Couple,
    Family,
    Friends,
    Business,
}

/// Bounds for `length_of_stay`, in nights.
pub const MIN_STAY_NIGHTS: u8 = 1;
pub const MAX_STAY_NIGHTS: u8 = 14;

/// The in-progress preference record for one user.
///
/// Stored wholesale under [`crate::store::keys::PREFERENCES`] as JSON.
/// Every field is optional and defaults to empty so older blobs with
/// missing keys still deserialize.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Draft {
    pub user_type: UserType,

    // Tourist track
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length_of_stay: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accommodation: Option<String>,

    // Local track
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exploration_radius: Option<ExplorationRadius>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_time: Option<TimeOfDay>,

    // Shared
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub interests: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pace: Option<Pace>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setting: Option<SettingPreference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<Budget>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_preference: Option<MealPreference>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dietary_restrictions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_restrictions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessibility_needs: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport_preference: Option<TransportPreference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_comfort: Option<TransferComfort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occasion: Option<TripOccasion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub must_visit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub must_try_food: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avoid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_activities: Option<String>,
}

/// A single-field update to the draft.
///
/// The closed variant set is what makes field updates statically
/// checkable; an unknown field tag cannot reach [`Draft::apply`] at all
/// (serde rejects it at the REST boundary).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum FieldPatch {
    LengthOfStay(u8),
    StartDate(NaiveDate),
    EndDate(NaiveDate),
    ArrivalTime(String),
    DepartureTime(String),
    Accommodation(String),
    HomeLocation(String),
    ExplorationRadius(ExplorationRadius),
    PreferredTime(TimeOfDay),
    /// Toggle: removes the value if present, appends it otherwise.
    Interest(String),
    Pace(Pace),
    Setting(SettingPreference),
    Budget(Budget),
    MealPreference(MealPreference),
    /// Toggle, same semantics as `Interest`.
    DietaryRestriction(String),
    CustomRestrictions(String),
    AccessibilityNeeds(String),
    TransportPreference(TransportPreference),
    TransferComfort(TransferComfort),
    Occasion(TripOccasion),
    MustVisit(String),
    MustTryFood(String),
    Avoid(String),
    SpecialActivities(String),
}

/// Toggle membership of `value` in an insertion-ordered set.
fn toggle(set: &mut Vec<String>, value: String) {
    if let Some(pos) = set.iter().position(|v| *v == value) {
        set.remove(pos);
    } else {
        set.push(value);
    }
}

impl Draft {
    /// Merge one field update into the draft. Pure overwrite of that
    /// field; multi-select fields toggle instead.
    pub fn apply(&mut self, patch: FieldPatch) {
        match patch {
            FieldPatch::LengthOfStay(n) => {
                self.length_of_stay = Some(n.clamp(MIN_STAY_NIGHTS, MAX_STAY_NIGHTS));
            }
            FieldPatch::StartDate(d) => self.start_date = Some(d),
            FieldPatch::EndDate(d) => self.end_date = Some(d),
            FieldPatch::ArrivalTime(s) => self.arrival_time = Some(s),
            FieldPatch::DepartureTime(s) => self.departure_time = Some(s),
            FieldPatch::Accommodation(s) => self.accommodation = Some(s),
            FieldPatch::HomeLocation(s) => self.home_location = Some(s),
            FieldPatch::ExplorationRadius(r) => self.exploration_radius = Some(r),
            FieldPatch::PreferredTime(t) => self.preferred_time = Some(t),
            FieldPatch::Interest(s) => toggle(&mut self.interests, s),
            FieldPatch::Pace(p) => self.pace = Some(p),
            FieldPatch::Setting(s) => self.setting = Some(s),
            FieldPatch::Budget(b) => self.budget = Some(b),
            FieldPatch::MealPreference(m) => self.meal_preference = Some(m),
            FieldPatch::DietaryRestriction(s) => toggle(&mut self.dietary_restrictions, s),
            FieldPatch::CustomRestrictions(s) => self.custom_restrictions = Some(s),
            FieldPatch::AccessibilityNeeds(s) => self.accessibility_needs = Some(s),
            FieldPatch::TransportPreference(t) => self.transport_preference = Some(t),
            FieldPatch::TransferComfort(t) => self.transfer_comfort = Some(t),
            FieldPatch::Occasion(o) => self.occasion = Some(o),
            FieldPatch::MustVisit(s) => self.must_visit = Some(s),
            FieldPatch::MustTryFood(s) => self.must_try_food = Some(s),
            FieldPatch::Avoid(s) => self.avoid = Some(s),
            FieldPatch::SpecialActivities(s) => self.special_activities = Some(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_draft_is_unset_and_empty() {
        let draft = Draft::default();
        assert_eq!(draft.user_type, UserType::Unset);
        assert!(draft.interests.is_empty());
        assert!(draft.length_of_stay.is_none());
        assert!(draft.home_location.is_none());
    }

    #[test]
    fn apply_overwrites_single_field_only() {
        let mut draft = Draft::default();
        draft.apply(FieldPatch::HomeLocation("Tampines".to_string()));
        draft.apply(FieldPatch::Budget(Budget::Moderate));
        draft.apply(FieldPatch::HomeLocation("Bedok".to_string()));

        assert_eq!(draft.home_location.as_deref(), Some("Bedok"));
        assert_eq!(draft.budget, Some(Budget::Moderate));
        assert!(draft.accommodation.is_none());
    }

    #[test]
    fn multi_select_toggle_is_an_involution() {
        let mut draft = Draft::default();
        draft.apply(FieldPatch::Interest("Food & Dining".to_string()));
        draft.apply(FieldPatch::Interest("Nature & Parks".to_string()));
        assert_eq!(draft.interests, vec!["Food & Dining", "Nature & Parks"]);

        draft.apply(FieldPatch::Interest("Food & Dining".to_string()));
        draft.apply(FieldPatch::Interest("Food & Dining".to_string()));
        assert_eq!(draft.interests, vec!["Nature & Parks", "Food & Dining"]);

        let mut empty = Draft::default();
        empty.apply(FieldPatch::DietaryRestriction("Halal".to_string()));
        empty.apply(FieldPatch::DietaryRestriction("Halal".to_string()));
        assert!(empty.dietary_restrictions.is_empty());
    }

    #[test]
    fn length_of_stay_clamps_to_bounds() {
        let mut draft = Draft::default();
        draft.apply(FieldPatch::LengthOfStay(0));
        assert_eq!(draft.length_of_stay, Some(MIN_STAY_NIGHTS));
        draft.apply(FieldPatch::LengthOfStay(30));
        assert_eq!(draft.length_of_stay, Some(MAX_STAY_NIGHTS));
        draft.apply(FieldPatch::LengthOfStay(5));
        assert_eq!(draft.length_of_stay, Some(5));
    }

    #[test]
    fn draft_serde_roundtrip_camel_case() {
        let mut draft = Draft::default();
        draft.user_type = UserType::Tourist;
        draft.apply(FieldPatch::LengthOfStay(5));
        draft.apply(FieldPatch::Interest("Food & Dining".to_string()));

        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["userType"], "tourist");
        assert_eq!(json["lengthOfStay"], 5);
        assert_eq!(json["interests"][0], "Food & Dining");
        // Unset optionals are omitted entirely
        assert!(json.get("homeLocation").is_none());

        let parsed: Draft = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, draft);
    }

    #[test]
    fn draft_tolerates_missing_keys_on_read() {
        // A blob written before new fields existed still loads.
        let parsed: Draft =
            serde_json::from_str(r#"{"userType": "local", "homeLocation": "Tampines"}"#).unwrap();
        assert_eq!(parsed.user_type, UserType::Local);
        assert_eq!(parsed.home_location.as_deref(), Some("Tampines"));
        assert!(parsed.interests.is_empty());
    }

    #[test]
    fn field_patch_tagged_form() {
        let patch: FieldPatch =
            serde_json::from_str(r#"{"field": "explorationRadius", "value": "nearby"}"#).unwrap();
        assert!(matches!(
            patch,
            FieldPatch::ExplorationRadius(ExplorationRadius::Nearby)
        ));

        // Unknown field tags are rejected at the boundary.
        let bad: Result<FieldPatch, _> =
            serde_json::from_str(r#"{"field": "favouriteColour", "value": "red"}"#);
        assert!(bad.is_err());
    }
}
