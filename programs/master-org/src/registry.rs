//! Organization creation as applied to the registry accounts.
//!
//! Caller and argument checks live on the `CreateOrganization` accounts
//! struct and run before any account is opened. The handler then calls into
//! here with the loaded accounts. Nothing is written unless every check
//! below passes.

use anchor_lang::prelude::*;

use crate::state::{MasterOrg, OrgRecord, OrgSettings, Organization};

/// Inputs of one `create_organization` call after account resolution.
pub struct NewOrganization {
    pub name: String,
    pub settings: OrgSettings,
    pub owner: Pubkey,
    /// Address the organization account was opened at
    pub address: Pubkey,
    pub organization_bump: u8,
    pub record_bump: u8,
    pub timestamp: i64,
}

/// Registers `new` and binds the organization account to it. Returns the
/// organization's creation index.
pub fn register_organization(
    master_key: Pubkey,
    master_org: &mut MasterOrg,
    organization: &mut Organization,
    record: &mut OrgRecord,
    new: NewOrganization,
) -> Result<u64> {
    let org_id = master_org.org_count;
    let org_count = master_org.next_org_count()?;

    record.register(new.address, org_id, new.timestamp, new.record_bump)?;
    master_org.org_count = org_count;
    organization.init(
        master_key,
        org_id,
        new.name,
        new.settings,
        new.owner,
        new.timestamp,
        new.organization_bump,
    );

    Ok(org_id)
}
