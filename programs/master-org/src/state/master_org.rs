use anchor_lang::prelude::*;

use crate::errors::MasterOrgError;

/// Root registry account. Holds the administrator allowed to create
/// organizations and the counter used to derive each new organization address.
/// Seeds: [b"master_org"]
#[account]
#[derive(Default)]
pub struct MasterOrg {
    /// Administrator fixed at initialization
    pub admin: Pubkey,
    /// Number of organizations created so far
    pub org_count: u64,
    /// Timestamp of initialization
    pub created_at: i64,
    /// PDA bump seed
    pub bump: u8,
}

impl MasterOrg {
    pub const SIZE: usize = 8 + // discriminator
        32 + // admin
        8 +  // org_count
        8 +  // created_at
        1;   // bump
    // Total: 57 bytes

    pub const SEED_PREFIX: &'static [u8] = b"master_org";

    pub fn pda() -> (Pubkey, u8) {
        Pubkey::find_program_address(&[Self::SEED_PREFIX], &crate::ID)
    }

    pub fn init(&mut self, admin: Pubkey, created_at: i64, bump: u8) {
        self.admin = admin;
        self.org_count = 0;
        self.created_at = created_at;
        self.bump = bump;
    }

    /// Counter value after one more creation. Leaves `self` untouched so
    /// callers can check for overflow before writing anything.
    pub fn next_org_count(&self) -> Result<u64> {
        Ok(self
            .org_count
            .checked_add(1)
            .ok_or(MasterOrgError::ArithmeticOverflow)?)
    }
}
