//! Convenience re-exports of the types most callers need.

pub use crate::cart::{CartLine, CartManager, CartObserver, LineUuid, NewLine};
pub use crate::checkout::{
    CheckoutError, CheckoutOrchestrator, CheckoutPhase, CheckoutReceipt,
    form::{CardDetails, CheckoutForm, CustomerInfo, FieldError},
    gateway::{CheckoutGateway, GatewayError, PaymentStatusView},
};
pub use crate::prices::{format_amount, parse_display_price};
pub use crate::storage::{CartStore, CartStoreError, FileStore, MemoryStore};
pub use crate::uuids::TypedUuid;
