//! Contact information extraction

use crate::lexicon::Patterns;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Email,
    Phone,
    Linkedin,
    Github,
    Website,
}

impl ContactField {
    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Email => "Email",
            ContactField::Phone => "Phone",
            ContactField::Linkedin => "LinkedIn",
            ContactField::Github => "GitHub",
            ContactField::Website => "Website",
        }
    }
}

/// First match per contact field; absent fields have no entry at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactInfo {
    fields: BTreeMap<ContactField, String>,
}

impl ContactInfo {
    pub fn get(&self, field: ContactField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    pub fn has(&self, field: ContactField) -> bool {
        self.fields.contains_key(&field)
    }

    /// GitHub profile or personal website
    pub fn has_portfolio(&self) -> bool {
        self.has(ContactField::Github) || self.has(ContactField::Website)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactField, &str)> {
        self.fields.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Pull contact details out of original-case text
pub fn extract_contact(text: &str, patterns: &Patterns) -> ContactInfo {
    let mut fields = BTreeMap::new();

    if let Some(m) = patterns.email.find(text) {
        fields.insert(ContactField::Email, m.as_str().to_string());
    }

    if let Some(user) = patterns.linkedin.captures(text).and_then(|c| c.get(1)) {
        fields.insert(
            ContactField::Linkedin,
            format!("https://linkedin.com/in/{}", user.as_str()),
        );
    }

    if let Some(user) = patterns.github.captures(text).and_then(|c| c.get(1)) {
        fields.insert(ContactField::Github, format!("https://github.com/{}", user.as_str()));
    }

    if let Some(m) = patterns.phone.find(text) {
        fields.insert(ContactField::Phone, m.as_str().trim().to_string());
    }

    let website = patterns.url.find_iter(text).map(|m| m.as_str()).find(|url| {
        let url = url.to_lowercase();
        !url.contains("linkedin.com") && !url.contains("github.com")
    });
    if let Some(url) = website {
        fields.insert(ContactField::Website, url.to_string());
    }

    ContactInfo { fields }
}
