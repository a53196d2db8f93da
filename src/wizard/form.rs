//! Form data collected by the wizard and the per-field error map.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// The eight form fields, named exactly as they appear in booking JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Service,
    Stylist,
    Name,
    Email,
    Phone,
    Date,
    Time,
    Notes,
}

impl Field {
    /// All fields in form order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    /// Label used in summaries and next to inputs.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Service => "Service",
            Self::Stylist => "Stylist",
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Date => "Date",
            Self::Time => "Time",
            Self::Notes => "Notes",
        }
    }

    /// Notes is the only field no step ever requires.
    pub const fn is_optional(self) -> bool {
        matches!(self, Self::Notes)
    }
}

/// Everything the user has entered so far. Every field starts empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormData {
    pub service: String,
    pub stylist: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub notes: String,
}

impl FormData {
    /// Read a field by name.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Service => &self.service,
            Field::Stylist => &self.stylist,
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Date => &self.date,
            Field::Time => &self.time,
            Field::Notes => &self.notes,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Service => &mut self.service,
            Field::Stylist => &mut self.stylist,
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Date => &mut self.date,
            Field::Time => &mut self.time,
            Field::Notes => &mut self.notes,
        }
    }

    /// Overwrite a field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    /// Copy of this record with one field replaced.
    #[must_use]
    pub fn with(&self, field: Field, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.set(field, value);
        next
    }

    /// True when every field is the empty string.
    pub fn is_empty(&self) -> bool {
        Field::all().all(|f| self.get(f).is_empty())
    }
}

/// Field-keyed validation messages from the last checked step.
///
/// Iteration follows form order, so rendered and printed errors are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<Field, String>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Remove the entry for `field`, returning whether one existed.
    pub fn remove(&mut self, field: Field) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// Copy of this map without `field`.
    #[must_use]
    pub fn without(&self, field: Field) -> Self {
        let mut next = self.clone();
        next.remove(field);
        next
    }
}

impl<M: Into<String>> FromIterator<(Field, M)> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = (Field, M)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(f, m)| (f, m.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_data_starts_empty() {
        let form = FormData::default();
        assert!(form.is_empty());
        for field in Field::all() {
            assert_eq!(form.get(field), "");
        }
    }

    #[test]
    fn test_set_then_get() {
        let mut form = FormData::default();
        form.set(Field::Email, "jane@example.com");
        assert_eq!(form.get(Field::Email), "jane@example.com");
        assert_eq!(form.email, "jane@example.com");
        assert!(!form.is_empty());
    }

    #[test]
    fn test_with_leaves_original_untouched() {
        let form = FormData::default();
        let next = form.with(Field::Time, "2:00 PM");
        assert_eq!(form.time, "");
        assert_eq!(next.time, "2:00 PM");
    }

    #[test]
    fn test_field_names_parse() {
        assert_eq!("stylist".parse::<Field>().ok(), Some(Field::Stylist));
        assert_eq!(Field::Notes.to_string(), "notes");
        assert!("Stylist ".parse::<Field>().is_err());
    }

    #[test]
    fn test_form_data_json_uses_field_names() {
        let form = FormData::default().with(Field::Phone, "555-1234");
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["phone"], "555-1234");

        let partial: FormData = serde_json::from_str(r#"{"name": "Jane"}"#).unwrap();
        assert_eq!(partial.name, "Jane");
        assert_eq!(partial.email, "");
    }

    #[test]
    fn test_error_map_insert_remove_clear() {
        let mut errors = ErrorMap::new();
        errors.insert(Field::Date, "Please select a date");
        errors.insert(Field::Time, "Please select a time");
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(Field::Date), Some("Please select a date"));

        assert!(errors.remove(Field::Date));
        assert!(!errors.remove(Field::Date));
        assert!(!errors.contains(Field::Date));

        errors.clear();
        assert!(errors.is_empty());
    }

    #[test]
    fn test_error_map_iterates_in_form_order() {
        let errors: ErrorMap = [
            (Field::Phone, "Phone number is required"),
            (Field::Name, "Name is required"),
        ]
        .into_iter()
        .collect();
        let fields: Vec<Field> = errors.iter().map(|(f, _)| f).collect();
        assert_eq!(fields, vec![Field::Name, Field::Phone]);
    }

    #[test]
    fn test_error_map_serializes_as_object() {
        let errors: ErrorMap = [(Field::Email, "Email is required")].into_iter().collect();
        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(json, r#"{"email":"Email is required"}"#);
    }
}
