use std::collections::BTreeMap;

use crate::domain::value::{DndType, MessageText, RawPhoneNumber, SenderId, SmsKind, TemplateId};

/// Recipient cap documented by SMS Owl for a single bulk request.
///
/// Not enforced locally; larger lists are sent as-is and rejected by the server.
pub const BULK_MAX_RECIPIENTS: usize = 1000;

/// Placeholder values for a transactional template, keyed by placeholder name.
pub type Placeholders = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Promotional SMS to a single recipient.
pub struct PromotionalSms {
    sender_id: SenderId,
    to: RawPhoneNumber,
    message: MessageText,
    kind: SmsKind,
}

impl PromotionalSms {
    /// Create a [`SmsKind::Normal`] promotional message.
    pub fn new(
        sender_id: impl Into<SenderId>,
        to: impl Into<RawPhoneNumber>,
        message: impl Into<MessageText>,
    ) -> Self {
        Self {
            sender_id: sender_id.into(),
            to: to.into(),
            message: message.into(),
            kind: SmsKind::default(),
        }
    }

    pub fn with_kind(mut self, kind: SmsKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn sender_id(&self) -> &SenderId {
        &self.sender_id
    }

    pub fn to(&self) -> &RawPhoneNumber {
        &self.to
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }

    pub fn kind(&self) -> SmsKind {
        self.kind
    }

    pub fn dnd_type(&self) -> DndType {
        DndType::Promotional
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Promotional SMS with the same text sent to many recipients.
///
/// Recipient order is preserved; the returned ids follow the same order.
pub struct BulkPromotionalSms {
    sender_id: SenderId,
    recipients: Vec<RawPhoneNumber>,
    message: MessageText,
    kind: SmsKind,
}

impl BulkPromotionalSms {
    /// Create a [`SmsKind::Normal`] bulk message.
    ///
    /// See [`BULK_MAX_RECIPIENTS`] for the server-side limit.
    pub fn new<I, P>(
        sender_id: impl Into<SenderId>,
        recipients: I,
        message: impl Into<MessageText>,
    ) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<RawPhoneNumber>,
    {
        Self {
            sender_id: sender_id.into(),
            recipients: recipients.into_iter().map(Into::into).collect(),
            message: message.into(),
            kind: SmsKind::default(),
        }
    }

    pub fn with_kind(mut self, kind: SmsKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn sender_id(&self) -> &SenderId {
        &self.sender_id
    }

    pub fn recipients(&self) -> &[RawPhoneNumber] {
        &self.recipients
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }

    pub fn kind(&self) -> SmsKind {
        self.kind
    }

    pub fn dnd_type(&self) -> DndType {
        DndType::Promotional
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Transactional SMS rendered from an approved template.
///
/// Always sent as [`SmsKind::Normal`]; SMS Owl does not offer flash transactional messages.
pub struct TransactionalSms {
    sender_id: SenderId,
    to: RawPhoneNumber,
    template_id: TemplateId,
    placeholders: Placeholders,
}

impl TransactionalSms {
    pub fn new(
        sender_id: impl Into<SenderId>,
        to: impl Into<RawPhoneNumber>,
        template_id: impl Into<TemplateId>,
        placeholders: Placeholders,
    ) -> Self {
        Self {
            sender_id: sender_id.into(),
            to: to.into(),
            template_id: template_id.into(),
            placeholders,
        }
    }

    /// Add or replace a single placeholder value.
    pub fn placeholder(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.placeholders.insert(name.into(), value.into());
        self
    }

    pub fn sender_id(&self) -> &SenderId {
        &self.sender_id
    }

    pub fn to(&self) -> &RawPhoneNumber {
        &self.to
    }

    pub fn template_id(&self) -> &TemplateId {
        &self.template_id
    }

    pub fn placeholders(&self) -> &Placeholders {
        &self.placeholders
    }

    pub fn kind(&self) -> SmsKind {
        SmsKind::Normal
    }

    pub fn dnd_type(&self) -> DndType {
        DndType::Transactional
    }
}
