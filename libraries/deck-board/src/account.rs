//! Account-scoped settings the board consumes
//!
//! Capacity and role are owned by the account system and pushed in from
//! outside; the board only reads them.

use serde::{Deserialize, Serialize};

/// Account role; admins are exempt from the clip capacity check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountRole {
    Member,
    Admin,
}

/// The account settings the board needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Maximum number of clip-holding slots
    pub max_slots: usize,
    pub role: AccountRole,
}

impl Account {
    pub fn new(max_slots: usize, role: AccountRole) -> Self {
        Self { max_slots, role }
    }

    /// Whether uploads bypass the capacity check
    pub fn capacity_exempt(&self) -> bool {
        self.role == AccountRole::Admin
    }
}

impl Default for Account {
    fn default() -> Self {
        Self {
            max_slots: 8,
            role: AccountRole::Member,
        }
    }
}
