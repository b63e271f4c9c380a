//! Domain layer: value types and request shapes (no I/O).

mod request;
mod validation;
mod value;

pub use request::{
    BULK_MAX_RECIPIENTS, BulkPromotionalSms, Placeholders, PromotionalSms, TransactionalSms,
};
pub use validation::ValidationError;
pub use value::{
    AccountId, ApiKey, Credentials, DndType, MessageText, PhoneNumber, RawPhoneNumber, SenderId,
    SmsId, SmsKind, TemplateId,
};
