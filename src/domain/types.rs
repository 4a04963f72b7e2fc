//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (e.g., positive identifiers,
//! normalized/validated email, bounded notification text) so that once a
//! value reaches the domain layer it can be treated as trusted.
use std::collections::HashSet;
use std::fmt::{Display, Formatter};
use std::ops::Deref;

use phonenumber::{Mode, parse};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{ValidateEmail, ValidateUrl};

/// Maximum number of characters accepted for a notification title.
pub const NOTIFICATION_TITLE_MAX: usize = 60;
/// Maximum number of characters accepted for a notification body.
pub const NOTIFICATION_BODY_MAX: usize = 240;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided email failed format validation.
    #[error("invalid email address")]
    InvalidEmail,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided string is longer than allowed.
    #[error("value exceeds {0} characters")]
    TooLong(usize),
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
    /// Phone number did not meet expected format.
    #[error("invalid phone number")]
    InvalidPhone,
    /// Provided url failed format validation.
    #[error("invalid url address")]
    InvalidUrl,
}

/// Normalizes and validates an email string.
fn normalize_email<S: Into<String>>(email: S) -> Result<String, TypeConstraintError> {
    let normalized = email.into().trim().to_lowercase();
    if normalized.validate_email() {
        Ok(normalized)
    } else {
        Err(TypeConstraintError::InvalidEmail)
    }
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(NegocioId, "Unique identifier for a business record.");
id_newtype!(AdminUserId, "Unique identifier for an administrative user.");

/// Lower-cased and validated email address of an administrative user.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct AdminEmail(String);

impl AdminEmail {
    /// Validates and normalizes an email string.
    pub fn new<S: Into<String>>(email: S) -> Result<Self, TypeConstraintError> {
        let normalized = normalize_email(email)?;
        Ok(Self(normalized))
    }

    /// Borrow the email as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the owned inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for AdminEmail {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for AdminEmail {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AdminEmail> for String {
    fn from(value: AdminEmail) -> Self {
        value.0
    }
}

/// Wrapper for non-empty, trimmed strings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Trims whitespace and rejects empty inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    /// Borrow the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for NonEmptyString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let inner = NonEmptyString::new(value)?;
                Ok(Self(inner.into_inner()))
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

non_empty_string_newtype!(NegocioName, "Business display name enforcing non-empty values.");

non_empty_string_newtype!(
    PersonName,
    "Given name or surname of an administrative user, trimmed and non-empty."
);

non_empty_string_newtype!(Username, "Login name of an administrative user.");

/// Undoes the entity escaping ammonia applies to text nodes.
fn unescape_text(value: &str) -> String {
    value
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&nbsp;", "\u{a0}")
        .replace("&amp;", "&")
}

/// Plain text with markup stripped, trimmed and bounded by a maximum
/// character count. The bound applies to the trimmed input as typed.
fn bounded_text(value: String, max: usize) -> Result<String, TypeConstraintError> {
    let trimmed = value.trim();
    if trimmed.chars().count() > max {
        return Err(TypeConstraintError::TooLong(max));
    }

    let stripped = ammonia::Builder::default()
        .tags(HashSet::new())
        .clean(trimmed)
        .to_string();
    Ok(NonEmptyString::new(unescape_text(&stripped))?.into_inner())
}

/// Notification headline; sanitized and at most [`NOTIFICATION_TITLE_MAX`] characters.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NotificationTitle(String);

impl NotificationTitle {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        bounded_text(value.into(), NOTIFICATION_TITLE_MAX).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for NotificationTitle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Notification message; sanitized and at most [`NOTIFICATION_BODY_MAX`] characters.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NotificationBody(String);

impl NotificationBody {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        bounded_text(value.into(), NOTIFICATION_BODY_MAX).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for NotificationBody {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Normalizes a phone number string to E.164 format.
pub fn normalize_phone_to_e164(value: &str) -> Result<String, TypeConstraintError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TypeConstraintError::EmptyString);
    }
    let parsed = parse(None, trimmed).map_err(|_| TypeConstraintError::InvalidPhone)?;
    Ok(parsed.format().mode(Mode::E164).to_string())
}

/// Normalized phone number wrapper (expected E.164).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Constructs a phone number ensuring it is valid and normalizes to E.164 format.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let normalized = normalize_phone_to_e164(&value.into())?;
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for PhoneNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-empty, trimmed absolute URL (images, logos).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct WebUrl(String);

impl WebUrl {
    /// Ensures a trimmed URL is non-empty and well formed before wrapping.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let url = NonEmptyString::new(value)?;

        if !url.as_str().validate_url() {
            Err(TypeConstraintError::InvalidUrl)
        } else {
            Ok(Self(url.into_inner()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for WebUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Share of sales retained by the platform, in percent (0–100 inclusive).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct SalesPercentage(f64);

impl SalesPercentage {
    pub fn new(value: f64) -> Result<Self, TypeConstraintError> {
        if value.is_finite() && (0.0..=100.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::InvalidValue(format!(
                "percentage must be between 0 and 100, got {value}"
            )))
        }
    }

    pub const fn get(self) -> f64 {
        self.0
    }
}

/// Trims an optional free-text field, mapping blank values to `None`.
pub fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_reject_non_positive_values() {
        assert_eq!(NegocioId::new(0), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(AdminUserId::new(-3), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(NegocioId::new(7).map(NegocioId::get), Ok(7));
    }

    #[test]
    fn admin_email_is_normalized() {
        let email = AdminEmail::new("  Ana@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "ana@example.com");
        assert_eq!(
            AdminEmail::new("not-an-email"),
            Err(TypeConstraintError::InvalidEmail)
        );
    }

    #[test]
    fn notification_title_enforces_length_after_trim() {
        let exact = "a".repeat(NOTIFICATION_TITLE_MAX);
        assert!(NotificationTitle::new(format!("  {exact}  ")).is_ok());

        let long = "a".repeat(NOTIFICATION_TITLE_MAX + 1);
        assert_eq!(
            NotificationTitle::new(long),
            Err(TypeConstraintError::TooLong(NOTIFICATION_TITLE_MAX))
        );
        assert_eq!(
            NotificationTitle::new("   "),
            Err(TypeConstraintError::EmptyString)
        );
    }

    #[test]
    fn notification_body_is_sanitized() {
        let body = NotificationBody::new("Hoy 2x1 <script>alert('x')</script>").unwrap();
        assert_eq!(body.as_str(), "Hoy 2x1");
    }

    #[test]
    fn notification_text_keeps_plain_symbols() {
        let title = NotificationTitle::new(" Café & Pan ").unwrap();
        assert_eq!(title.as_str(), "Café & Pan");

        let body = NotificationBody::new("2 < 3 y pan & café > nada").unwrap();
        assert_eq!(body.as_str(), "2 < 3 y pan & café > nada");

        let ampersands = format!("{}&&", "a".repeat(NOTIFICATION_TITLE_MAX - 2));
        assert_eq!(
            NotificationTitle::new(ampersands.as_str()).map(NotificationTitle::into_inner),
            Ok(ampersands)
        );
    }

    #[test]
    fn notification_text_strips_tags_but_keeps_content() {
        let body = NotificationBody::new("Hoy <b>2x1</b> en paletas").unwrap();
        assert_eq!(body.as_str(), "Hoy 2x1 en paletas");

        assert_eq!(
            NotificationTitle::new("<script>alert(1)</script>"),
            Err(TypeConstraintError::EmptyString)
        );
    }

    #[test]
    fn web_url_requires_scheme() {
        assert!(WebUrl::new("https://res.cloudinary.com/logo.png").is_ok());
        assert_eq!(WebUrl::new("sitio.com"), Err(TypeConstraintError::InvalidUrl));
    }

    #[test]
    fn sales_percentage_bounds() {
        assert!(SalesPercentage::new(0.0).is_ok());
        assert!(SalesPercentage::new(100.0).is_ok());
        assert!(SalesPercentage::new(100.5).is_err());
        assert!(SalesPercentage::new(f64::NAN).is_err());
    }

    #[test]
    fn optional_text_maps_blank_to_none() {
        assert_eq!(optional_text(Some("  ")), None);
        assert_eq!(optional_text(Some(" Centro ")), Some("Centro".to_string()));
        assert_eq!(optional_text(None), None);
    }
}
