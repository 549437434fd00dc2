use anchor_lang::prelude::*;

use super::OrgSettings;

/// Organization created by the registry. Each one lives at its own address
/// and carries the governance settings it was created with.
/// Seeds: [b"organization", master_org.key(), org_id.to_le_bytes()]
#[account]
#[derive(Default)]
pub struct Organization {
    /// Registry that created this organization
    pub master_org: Pubkey,
    /// Creation index within the registry
    pub org_id: u64,
    /// Owner designated by the administrator at creation
    pub owner: Pubkey,
    /// Display name
    pub name: String,
    /// Majority and quorum thresholds
    pub settings: OrgSettings,
    /// Timestamp of creation
    pub created_at: i64,
    /// PDA bump seed
    pub bump: u8,
}

impl Organization {
    /// Maximum name length in bytes.
    pub const MAX_NAME_LEN: usize = 32;

    pub const SIZE: usize = 8 + // discriminator
        32 + // master_org
        8 +  // org_id
        32 + // owner
        4 + Self::MAX_NAME_LEN + // name
        OrgSettings::SIZE + // settings
        8 +  // created_at
        1;   // bump
    // Total: 127 bytes

    pub const SEED_PREFIX: &'static [u8] = b"organization";

    pub fn pda(master_org: &Pubkey, org_id: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[Self::SEED_PREFIX, master_org.as_ref(), &org_id.to_le_bytes()],
            &crate::ID,
        )
    }

    /// Non-blank and within `MAX_NAME_LEN` bytes.
    pub fn is_valid_name(name: &str) -> bool {
        !name.trim().is_empty() && name.len() <= Self::MAX_NAME_LEN
    }

    pub fn is_valid_owner(owner: &Pubkey) -> bool {
        *owner != Pubkey::default()
    }

    #[allow(clippy::too_many_arguments)]
    pub fn init(
        &mut self,
        master_org: Pubkey,
        org_id: u64,
        name: String,
        settings: OrgSettings,
        owner: Pubkey,
        created_at: i64,
        bump: u8,
    ) {
        self.master_org = master_org;
        self.org_id = org_id;
        self.owner = owner;
        self.name = name;
        self.settings = settings;
        self.created_at = created_at;
        self.bump = bump;
    }
}
