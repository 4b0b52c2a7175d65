//! Reminder dispatch for the dunning backend.
//!
//! - [`delivery`] defines the [`Notifier`] capability and the simulated
//!   [`LogNotifier`] used until a real SMS/WhatsApp provider is wired in.
//! - [`reminder`] resolves a debt to its client and hands the composed
//!   message to a notifier.

pub mod delivery;
pub mod reminder;

pub use delivery::{DeliveryError, LogNotifier, Notifier};
pub use reminder::{ReminderDispatcher, ReminderError, ReminderReceipt};
