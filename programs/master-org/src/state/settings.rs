use anchor_lang::prelude::*;

/// Governance thresholds attached to an organization, in percentage points.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OrgSettings {
    /// Share of cast votes a proposal needs to pass
    pub majority: u8,
    /// Share of members that must vote for a result to count
    pub quorum: u8,
}

impl OrgSettings {
    pub const SIZE: usize = 1 + // majority
        1; // quorum

    /// Upper bound for both thresholds.
    pub const MAX_THRESHOLD: u8 = 100;

    pub fn new(majority: u8, quorum: u8) -> Self {
        Self { majority, quorum }
    }

    pub fn is_valid(&self) -> bool {
        self.majority <= Self::MAX_THRESHOLD && self.quorum <= Self::MAX_THRESHOLD
    }
}
