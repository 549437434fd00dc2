use anchor_lang::prelude::*;

use crate::errors::MasterOrgError;

/// Registry entry for one organization address. The account only exists once
/// the address has been registered; a missing account reads as marker 0.
/// Seeds: [b"org_record", master_org.key(), organization.key()]
#[account]
#[derive(Default)]
pub struct OrgRecord {
    /// Registered organization address
    pub organization: Pubkey,
    /// Creation index of the organization
    pub org_id: u64,
    /// Existence marker (0 = unregistered, 1 = registered)
    pub marker: u8,
    /// Timestamp of registration
    pub registered_at: i64,
    /// PDA bump seed
    pub bump: u8,
}

impl OrgRecord {
    pub const SIZE: usize = 8 + // discriminator
        32 + // organization
        8 +  // org_id
        1 +  // marker
        8 +  // registered_at
        1;   // bump
    // Total: 58 bytes

    pub const SEED_PREFIX: &'static [u8] = b"org_record";

    pub const UNREGISTERED: u8 = 0;
    pub const REGISTERED: u8 = 1;

    pub fn pda(master_org: &Pubkey, organization: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[Self::SEED_PREFIX, master_org.as_ref(), organization.as_ref()],
            &crate::ID,
        )
    }

    pub fn is_registered(&self) -> bool {
        self.marker != Self::UNREGISTERED
    }

    /// Moves the entry from unregistered to registered. An entry that is
    /// already registered is never overwritten.
    pub fn register(
        &mut self,
        organization: Pubkey,
        org_id: u64,
        registered_at: i64,
        bump: u8,
    ) -> Result<()> {
        require!(!self.is_registered(), MasterOrgError::DuplicateAddress);

        self.organization = organization;
        self.org_id = org_id;
        self.marker = Self::REGISTERED;
        self.registered_at = registered_at;
        self.bump = bump;
        Ok(())
    }

    /// Marker stored in a raw record account. Accounts not owned by this
    /// program, empty accounts and undecodable data all read as unregistered.
    pub fn marker_from_account(owner: &Pubkey, data: &[u8]) -> u8 {
        if owner != &crate::ID || data.is_empty() {
            return Self::UNREGISTERED;
        }
        let mut bytes = data;
        Self::try_deserialize(&mut bytes)
            .map(|record| record.marker)
            .unwrap_or(Self::UNREGISTERED)
    }
}
