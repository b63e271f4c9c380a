use std::fmt;

use phonenumber::country;
use secrecy::{ExposeSecret, SecretString};

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS Owl account id as shown in the portal (`account_id`).
pub struct AccountId(String);

impl AccountId {
    /// JSON field name used by SMS Owl (`account_id`).
    pub const FIELD: &'static str = "account_id";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone)]
/// SMS Owl API key (`api_key`).
///
/// The key is kept in a [`SecretString`] and is redacted from `Debug` output.
pub struct ApiKey(SecretString);

impl ApiKey {
    /// JSON field name used by SMS Owl (`api_key`).
    pub const FIELD: &'static str = "api_key";

    pub fn new(value: impl Into<String>) -> Self {
        Self(SecretString::new(value.into()))
    }

    /// Borrow the key as it is sent on the wire.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

#[derive(Debug, Clone)]
/// Account credentials sent verbatim with every request.
pub struct Credentials {
    account_id: AccountId,
    api_key: ApiKey,
}

impl Credentials {
    pub fn new(account_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            account_id: AccountId::new(account_id),
            api_key: ApiKey::new(api_key),
        }
    }

    pub fn account_id(&self) -> &AccountId {
        &self.account_id
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Approved sender id (`sender_id`).
///
/// Sender ids are registered with SMS Owl out of band; the value is not checked locally.
pub struct SenderId(String);

impl SenderId {
    /// JSON field name used by SMS Owl (`sender_id`).
    pub const FIELD: &'static str = "sender_id";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Promotional message text (`message`), sent as provided.
pub struct MessageText(String);

impl MessageText {
    /// JSON field name used by SMS Owl (`message`).
    pub const FIELD: &'static str = "message";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Id of a transactional template approved in the SMS Owl portal (`template_id`).
pub struct TemplateId(String);

impl TemplateId {
    /// JSON field name used by SMS Owl (`template_id`).
    pub const FIELD: &'static str = "template_id";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Message id assigned by SMS Owl (`sms_id` / `sms_ids`).
pub struct SmsId(String);

impl SmsId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SmsId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for SmsId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SmsId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Phone number as sent to SMS Owl (`to`), including the country code.
///
/// This type does not normalize or validate; if you want E.164 normalization, parse into
/// [`PhoneNumber`] and convert it into [`RawPhoneNumber`].
pub struct RawPhoneNumber(String);

impl RawPhoneNumber {
    /// JSON field name used by SMS Owl (`to`).
    pub const FIELD: &'static str = "to";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Value exactly as sent to SMS Owl.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for RawPhoneNumber {
    fn from(value: PhoneNumber) -> Self {
        Self(value.e164)
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Equality, ordering, and hashing are based on the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// JSON field name used by SMS Owl (`to`).
    pub const FIELD: &'static str = "to";

    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164, parsed })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

macro_rules! impl_from_str_types {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<&str> for $ty {
                fn from(value: &str) -> Self {
                    Self::new(value)
                }
            }

            impl From<String> for $ty {
                fn from(value: String) -> Self {
                    Self::new(value)
                }
            }
        )*
    };
}

impl_from_str_types!(SenderId, MessageText, TemplateId, RawPhoneNumber, SmsId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Delivery style of a promotional message (`sms_type`).
pub enum SmsKind {
    /// Regular SMS stored in the recipient's inbox.
    #[default]
    Normal,
    /// Flash SMS shown immediately and typically not stored.
    Flash,
}

impl SmsKind {
    /// JSON field name used by SMS Owl (`sms_type`).
    pub const FIELD: &'static str = "sms_type";

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Flash => "flash",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// SMS Owl traffic category (`dnd_type`).
///
/// Determined by the request type; callers never set it directly.
pub enum DndType {
    Promotional,
    Transactional,
}

impl DndType {
    /// JSON field name used by SMS Owl (`dnd_type`).
    pub const FIELD: &'static str = "dnd_type";

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Promotional => "promotional",
            Self::Transactional => "transactional",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_newtypes_keep_values_verbatim() {
        assert_eq!(SenderId::new(" SENDER ").as_str(), " SENDER ");
        assert_eq!(MessageText::from(" hi ").as_str(), " hi ");
        assert_eq!(TemplateId::from("tmpl-1".to_owned()).as_str(), "tmpl-1");
        assert_eq!(RawPhoneNumber::new("+911234567890").raw(), "+911234567890");
        assert_eq!(AccountId::new("acc").as_str(), "acc");
        assert_eq!(SmsId::new("ABC123").to_string(), "ABC123");
    }

    #[test]
    fn api_key_is_redacted_from_debug() {
        let credentials = Credentials::new("acc", "super-secret");
        assert_eq!(credentials.api_key().expose(), "super-secret");

        let rendered = format!("{credentials:?}");
        assert!(!rendered.contains("super-secret"), "{rendered}");
        assert!(rendered.contains("REDACTED"));
    }

    #[test]
    fn sms_kind_defaults_to_normal() {
        assert_eq!(SmsKind::default(), SmsKind::Normal);
        assert_eq!(SmsKind::Normal.as_str(), "normal");
        assert_eq!(SmsKind::Flash.as_str(), "flash");
    }

    #[test]
    fn dnd_type_wire_values() {
        assert_eq!(DndType::Promotional.as_str(), "promotional");
        assert_eq!(DndType::Transactional.as_str(), "transactional");
    }

    #[test]
    fn phone_number_parsing_and_equality_use_e164() {
        let p1 = PhoneNumber::parse(None, "+919876543210").unwrap();
        let p2 = PhoneNumber::parse(None, "+91 98765 43210").unwrap();
        assert_eq!(p1, p2);
        assert_eq!(p1.e164(), "+919876543210");

        let raw: RawPhoneNumber = p2.into();
        assert_eq!(raw.raw(), "+919876543210");
        assert!(PhoneNumber::parse(None, "not-a-number").is_err());
    }

    #[test]
    fn phone_number_rejects_blank_input() {
        assert_eq!(
            PhoneNumber::parse(None, "   ").unwrap_err(),
            ValidationError::Empty {
                field: PhoneNumber::FIELD
            }
        );
    }

    #[test]
    fn phone_number_uses_default_region() {
        let pn = PhoneNumber::parse(Some(country::Id::IN), " 9876543210 ").unwrap();
        assert_eq!(pn.raw(), "9876543210");
        assert_eq!(pn.e164(), "+919876543210");
    }
}
