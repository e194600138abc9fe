//! Post attributes: the assignable field set, value casting, and validation.

use std::{borrow::Cow, fmt};

use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

use super::entities::PostRecord;

pub const BLANK: &str = "can't be blank";
pub const SUMMARY_TOO_LONG: &str = "is too long (maximum is 10 characters)";
pub const BODY_TOO_SHORT: &str = "is too short (minimum is 9 characters)";
pub const NOT_INCLUDED: &str = "is not included in the list";
pub const MUST_EXIST: &str = "must exist";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PostField {
    Title,
    Summary,
    Body,
    Active,
    Category,
}

impl PostField {
    pub fn as_str(self) -> &'static str {
        match self {
            PostField::Title => "title",
            PostField::Summary => "summary",
            PostField::Body => "body",
            PostField::Active => "active",
            PostField::Category => "category",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PostField::Title => "Title",
            PostField::Summary => "Summary",
            PostField::Body => "Body",
            PostField::Active => "Active",
            PostField::Category => "Category",
        }
    }

    fn from_attribute(name: &str) -> Option<Self> {
        match name {
            "title" => Some(PostField::Title),
            "summary" => Some(PostField::Summary),
            "body" => Some(PostField::Body),
            "active" => Some(PostField::Active),
            "category_id" | "category" => Some(PostField::Category),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: PostField,
    pub message: Cow<'static, str>,
}

impl FieldError {
    pub fn full_message(&self) -> String {
        format!("{} {}", self.field.label(), self.message)
    }
}

/// Position of a message among the rules of its field: presence, then length,
/// then inclusion, then the category reference.
fn rule_rank(message: &str) -> u8 {
    match message {
        BLANK => 0,
        SUMMARY_TOO_LONG | BODY_TOO_SHORT => 1,
        NOT_INCLUDED => 2,
        MUST_EXIST => 3,
        _ => 4,
    }
}

/// Field-level validation failures, ordered by field and then by rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostErrors {
    entries: Vec<FieldError>,
}

impl PostErrors {
    pub fn add(&mut self, field: PostField, message: impl Into<Cow<'static, str>>) {
        let message = message.into();
        if self.contains(field, &message) {
            return;
        }
        self.entries.push(FieldError { field, message });
        self.entries
            .sort_by_key(|entry| (entry.field, rule_rank(&entry.message)));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.entries.iter()
    }

    pub fn contains(&self, field: PostField, message: &str) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.field == field && entry.message == message)
    }

    pub fn on(&self, field: PostField) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|entry| entry.field == field)
            .map(|entry| entry.message.as_ref())
            .collect()
    }

    pub fn full_messages(&self) -> Vec<String> {
        self.entries.iter().map(FieldError::full_message).collect()
    }
}

impl fmt::Display for PostErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_messages().join(", "))
    }
}

impl From<&ValidationErrors> for PostErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let mut collected = PostErrors::default();
        for (name, failures) in errors.field_errors() {
            let name: &str = name.as_ref();
            let Some(field) = PostField::from_attribute(name) else {
                continue;
            };
            for failure in failures.iter() {
                let message = failure
                    .message
                    .clone()
                    .unwrap_or_else(|| failure.code.clone());
                collected.add(field, message);
            }
        }
        collected
    }
}

/// Raw, caller-supplied values for the assignable post fields.
///
/// `None` means the field was not submitted at all; anything outside this
/// set never reaches the domain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostParams {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub body: Option<String>,
    pub active: Option<String>,
    pub category_id: Option<String>,
}

/// The attributes of a post as the caller sees them while editing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct PostAttributes {
    #[validate(custom(function = "present"))]
    pub title: String,
    #[validate(
        custom(function = "present"),
        length(max = 10, message = "is too long (maximum is 10 characters)")
    )]
    pub summary: String,
    #[validate(
        custom(function = "present"),
        length(min = 9, message = "is too short (minimum is 9 characters)")
    )]
    pub body: String,
    #[validate(required(message = "is not included in the list"))]
    pub active: Option<bool>,
    #[validate(required(message = "must exist"))]
    pub category_id: Option<Uuid>,
}

/// Attributes that passed every field rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidPost {
    pub title: String,
    pub summary: String,
    pub body: String,
    pub active: bool,
    pub category_id: Uuid,
}

/// Attributes that were rejected, kept so the form can be shown again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidPost {
    pub attributes: PostAttributes,
    pub errors: PostErrors,
}

impl PostAttributes {
    /// Assign the submitted fields; fields that were not submitted keep their value.
    pub fn assign(&mut self, params: PostParams) {
        let PostParams {
            title,
            summary,
            body,
            active,
            category_id,
        } = params;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(summary) = summary {
            self.summary = summary;
        }
        if let Some(body) = body {
            self.body = body;
        }
        if let Some(raw) = active {
            self.active = cast_boolean(&raw);
        }
        if let Some(raw) = category_id {
            self.category_id = cast_uuid(&raw);
        }
    }

    /// Run every field rule. `category_exists` reports whether the referenced
    /// category is present in the store.
    pub fn into_valid(self, category_exists: bool) -> Result<ValidPost, InvalidPost> {
        let mut errors = match self.validate() {
            Ok(()) => PostErrors::default(),
            Err(failures) => PostErrors::from(&failures),
        };
        if self.category_id.is_some() && !category_exists {
            errors.add(PostField::Category, MUST_EXIST);
        }

        match (self.active, self.category_id) {
            (Some(active), Some(category_id)) if errors.is_empty() => Ok(ValidPost {
                title: self.title,
                summary: self.summary,
                body: self.body,
                active,
                category_id,
            }),
            _ => Err(InvalidPost {
                attributes: self,
                errors,
            }),
        }
    }
}

impl From<&PostRecord> for PostAttributes {
    fn from(post: &PostRecord) -> Self {
        Self {
            title: post.title.clone(),
            summary: post.summary.clone(),
            body: post.body.clone(),
            active: Some(post.active),
            category_id: Some(post.category_id),
        }
    }
}

/// Boolean casting for submitted form values: blank is absent, a fixed set of
/// spellings is false, anything else is true.
pub fn cast_boolean(raw: &str) -> Option<bool> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }
    let is_false = ["0", "f", "false", "off"]
        .iter()
        .any(|candidate| value.eq_ignore_ascii_case(candidate));
    Some(!is_false)
}

pub fn cast_uuid(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw.trim()).ok()
}

fn present(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::Borrowed(BLANK)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_attributes() -> PostAttributes {
        PostAttributes {
            title: "Hi".to_string(),
            summary: "Short".to_string(),
            body: "Long enough body".to_string(),
            active: Some(true),
            category_id: Some(Uuid::new_v4()),
        }
    }

    #[test]
    fn accepts_a_complete_post() {
        let valid = valid_attributes().into_valid(true).expect("valid post");
        assert_eq!(valid.title, "Hi");
        assert!(valid.active);
    }

    #[test]
    fn reports_blank_title_and_short_body_together() {
        let attributes = PostAttributes {
            title: String::new(),
            summary: "x".to_string(),
            body: "short".to_string(),
            ..valid_attributes()
        };

        let invalid = attributes.into_valid(true).expect_err("invalid post");
        assert_eq!(invalid.errors.on(PostField::Title), vec![BLANK]);
        assert_eq!(invalid.errors.on(PostField::Body), vec![BODY_TOO_SHORT]);
        assert!(invalid.errors.on(PostField::Summary).is_empty());
        assert_eq!(invalid.errors.len(), 2);
    }

    #[test]
    fn empty_body_is_both_blank_and_too_short() {
        let attributes = PostAttributes {
            body: String::new(),
            ..valid_attributes()
        };

        let invalid = attributes.into_valid(true).expect_err("invalid post");
        assert_eq!(invalid.errors.on(PostField::Body), vec![BLANK, BODY_TOO_SHORT]);
    }

    #[test]
    fn blank_messages_lead_within_each_field() {
        let attributes = PostAttributes {
            summary: String::new(),
            body: String::new(),
            ..valid_attributes()
        };

        let invalid = attributes.into_valid(true).expect_err("invalid post");
        assert_eq!(
            invalid.errors.full_messages(),
            vec![
                "Summary can't be blank".to_string(),
                "Body can't be blank".to_string(),
                "Body is too short (minimum is 9 characters)".to_string(),
            ]
        );
    }

    #[test]
    fn whitespace_only_title_is_blank() {
        let attributes = PostAttributes {
            title: "   \t".to_string(),
            ..valid_attributes()
        };

        let invalid = attributes.into_valid(true).expect_err("invalid post");
        assert_eq!(invalid.errors.on(PostField::Title), vec![BLANK]);
    }

    #[test]
    fn summary_limit_counts_characters_not_bytes() {
        let at_limit = PostAttributes {
            summary: "éééééééééé".to_string(),
            ..valid_attributes()
        };
        assert!(at_limit.into_valid(true).is_ok());

        let over_limit = PostAttributes {
            summary: "this is too long".to_string(),
            ..valid_attributes()
        };
        let invalid = over_limit.into_valid(true).expect_err("invalid post");
        assert_eq!(invalid.errors.on(PostField::Summary), vec![SUMMARY_TOO_LONG]);
    }

    #[test]
    fn body_of_exactly_nine_characters_is_accepted() {
        let attributes = PostAttributes {
            body: "123456789".to_string(),
            ..valid_attributes()
        };
        assert!(attributes.into_valid(true).is_ok());
    }

    #[test]
    fn missing_active_and_category_are_reported() {
        let attributes = PostAttributes {
            active: None,
            category_id: None,
            ..valid_attributes()
        };

        let invalid = attributes.into_valid(false).expect_err("invalid post");
        assert_eq!(invalid.errors.on(PostField::Active), vec![NOT_INCLUDED]);
        assert_eq!(invalid.errors.on(PostField::Category), vec![MUST_EXIST]);
        assert_eq!(
            invalid.errors.full_messages(),
            vec![
                "Active is not included in the list".to_string(),
                "Category must exist".to_string(),
            ]
        );
    }

    #[test]
    fn unknown_category_must_exist() {
        let invalid = valid_attributes()
            .into_valid(false)
            .expect_err("invalid post");
        assert_eq!(invalid.errors.on(PostField::Category), vec![MUST_EXIST]);
    }

    #[test]
    fn rejected_attributes_are_returned_untouched() {
        let attributes = PostAttributes {
            title: String::new(),
            ..valid_attributes()
        };
        let invalid = attributes.clone().into_valid(true).expect_err("invalid");
        assert_eq!(invalid.attributes, attributes);
    }

    #[test]
    fn assign_only_touches_submitted_fields() {
        let original = valid_attributes();
        let mut attributes = original.clone();
        attributes.assign(PostParams {
            summary: Some("Changed".to_string()),
            ..PostParams::default()
        });

        assert_eq!(attributes.summary, "Changed");
        assert_eq!(attributes.title, original.title);
        assert_eq!(attributes.active, original.active);
        assert_eq!(attributes.category_id, original.category_id);
    }

    #[test]
    fn assign_casts_active_and_category() {
        let category = Uuid::new_v4();
        let mut attributes = PostAttributes::default();
        attributes.assign(PostParams {
            active: Some("0".to_string()),
            category_id: Some(format!(" {category} ")),
            ..PostParams::default()
        });
        assert_eq!(attributes.active, Some(false));
        assert_eq!(attributes.category_id, Some(category));

        attributes.assign(PostParams {
            active: Some(String::new()),
            category_id: Some("not-a-uuid".to_string()),
            ..PostParams::default()
        });
        assert_eq!(attributes.active, None);
        assert_eq!(attributes.category_id, None);
    }

    #[test]
    fn boolean_casting_follows_form_conventions() {
        for raw in ["1", "true", "on", "yes", "t", "TRUE"] {
            assert_eq!(cast_boolean(raw), Some(true), "{raw}");
        }
        for raw in ["0", "f", "F", "false", "FALSE", "off", "OFF"] {
            assert_eq!(cast_boolean(raw), Some(false), "{raw}");
        }
        assert_eq!(cast_boolean(""), None);
        assert_eq!(cast_boolean("  "), None);
    }

    #[test]
    fn errors_are_ordered_by_field() {
        let mut errors = PostErrors::default();
        errors.add(PostField::Category, MUST_EXIST);
        errors.add(PostField::Title, BLANK);
        errors.add(PostField::Title, BLANK);

        let fields: Vec<_> = errors.iter().map(|entry| entry.field).collect();
        assert_eq!(fields, vec![PostField::Title, PostField::Category]);
        assert_eq!(errors.to_string(), "Title can't be blank, Category must exist");
    }
}
