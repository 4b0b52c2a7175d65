//! Fixed sample rows loaded at startup, stamped with today's date.
//!
//! `debt-3` deliberately names a client that does not exist, so a reminder
//! for it fails its precondition.

use chrono::NaiveDate;
use dunning_core::types::{today, Date};

use crate::models::client::Client;
use crate::models::debt::Debt;
use crate::models::status::DebtStatus;

fn date(year: i32, month: u32, day: u32) -> Date {
    // Literal calendar dates below are all valid.
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn clients() -> Vec<Client> {
    vec![
        Client {
            id: "client-1".into(),
            name: "Juan Pérez".into(),
            phone: "+51987654321".into(),
            email: Some("juan.perez@example.com".into()),
            created_at: today(),
        },
        Client {
            id: "client-2".into(),
            name: "María García".into(),
            phone: "+51912345678".into(),
            email: Some("maria.garcia@example.com".into()),
            created_at: today(),
        },
    ]
}

pub fn debts() -> Vec<Debt> {
    vec![
        Debt {
            id: "debt-1".into(),
            client_name: "Juan Pérez".into(),
            amount: 150.00,
            due_date: date(2025, 7, 15),
            description: None,
            status: DebtStatus::Pending,
            created_at: today(),
        },
        Debt {
            id: "debt-2".into(),
            client_name: "María García".into(),
            amount: 200.50,
            due_date: date(2025, 6, 30),
            description: None,
            status: DebtStatus::Overdue,
            created_at: today(),
        },
        Debt {
            id: "debt-3".into(),
            client_name: "Carlos López".into(),
            amount: 75.00,
            due_date: date(2025, 7, 1),
            description: None,
            status: DebtStatus::Paid,
            created_at: today(),
        },
    ]
}
