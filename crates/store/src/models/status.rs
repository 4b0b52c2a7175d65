//! Debt lifecycle status.
//!
//! Serialized with the Spanish labels the collection front-end expects.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DebtStatus {
    #[default]
    #[serde(rename = "Pendiente")]
    Pending,
    #[serde(rename = "Atrasada")]
    Overdue,
    #[serde(rename = "Pagada")]
    Paid,
}
