//! Co-driver registration status.

use serde::{Deserialize, Serialize};

/// Review state of a co-driver registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

/// Whether the current user may apply for trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DriverStatus {
    pub is_registered: bool,
    pub approval_status: ApprovalStatus,
}

impl DriverStatus {
    /// Registered and approved.
    pub fn can_apply(&self) -> bool {
        self.is_registered && self.approval_status == ApprovalStatus::Approved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_approved_registered_drivers_can_apply() {
        let approved = DriverStatus {
            is_registered: true,
            approval_status: ApprovalStatus::Approved,
        };
        assert!(approved.can_apply());

        let pending = DriverStatus {
            approval_status: ApprovalStatus::Pending,
            ..approved
        };
        assert!(!pending.can_apply());

        let unregistered = DriverStatus {
            is_registered: false,
            ..approved
        };
        assert!(!unregistered.can_apply());
    }
}
