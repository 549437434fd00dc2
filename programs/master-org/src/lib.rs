use anchor_lang::prelude::*;

pub mod errors;
pub mod registry;
pub mod state;

use errors::MasterOrgError;
use registry::NewOrganization;
use state::{MasterOrg, OrgRecord, OrgSettings, Organization};

declare_id!("3jX4tU3KtzLZZDJaqWFtckHDCfr4nF434RowWLTsRdRT");

#[program]
pub mod master_org {
    use super::*;

    // ============================================================
    // Registry Setup
    // ============================================================

    /// Creates the registry. The signer becomes its permanent administrator.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        let clock = Clock::get()?;
        let master_org = &mut ctx.accounts.master_org;

        master_org.init(
            ctx.accounts.admin.key(),
            clock.unix_timestamp,
            ctx.bumps.master_org,
        );

        emit!(MasterOrgInitialized {
            master_org: master_org.key(),
            admin: master_org.admin,
        });

        Ok(())
    }

    // ============================================================
    // Organization Management
    // ============================================================

    /// Creates an organization owned by `owner` and records its address.
    /// Returns the new organization's address.
    pub fn create_organization(
        ctx: Context<CreateOrganization>,
        name: String,
        settings: OrgSettings,
        owner: Pubkey,
    ) -> Result<Pubkey> {
        let clock = Clock::get()?;
        let accounts = &mut *ctx.accounts;
        let master_key = accounts.authority.master_org.key();
        let organization_key = accounts.organization.key();

        let org_id = registry::register_organization(
            master_key,
            &mut accounts.authority.master_org,
            &mut accounts.organization,
            &mut accounts.org_record,
            NewOrganization {
                name: name.clone(),
                settings,
                owner,
                address: organization_key,
                organization_bump: ctx.bumps.organization,
                record_bump: ctx.bumps.org_record,
                timestamp: clock.unix_timestamp,
            },
        )?;

        msg!("Registered organization {} as #{}", organization_key, org_id);

        emit!(OrganizationCreated {
            master_org: master_key,
            organization: organization_key,
            org_id,
            name,
            owner,
            majority: settings.majority,
            quorum: settings.quorum,
        });

        Ok(organization_key)
    }

    // ============================================================
    // Views
    // ============================================================

    /// Existence marker for `organization`: 1 when registered, 0 otherwise.
    pub fn lookup(ctx: Context<Lookup>, organization: Pubkey) -> Result<u8> {
        let record = ctx.accounts.org_record.to_account_info();
        let data = record.try_borrow_data()?;
        let marker = OrgRecord::marker_from_account(record.owner, &data[..]);
        msg!("Organization {} marker {}", organization, marker);
        Ok(marker)
    }

    pub fn administrator(ctx: Context<ReadMasterOrg>) -> Result<Pubkey> {
        Ok(ctx.accounts.master_org.admin)
    }

    pub fn organization_count(ctx: Context<ReadMasterOrg>) -> Result<u64> {
        Ok(ctx.accounts.master_org.org_count)
    }
}

// ============================================================
// Account Contexts
// ============================================================

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = MasterOrg::SIZE,
        seeds = [MasterOrg::SEED_PREFIX],
        bump,
    )]
    pub master_org: Account<'info, MasterOrg>,

    pub system_program: Program<'info, System>,
}

/// Registry administrator together with the creation arguments. Checked in
/// full before `CreateOrganization` opens any account, so a rejected caller
/// never pays for or touches the new accounts.
#[derive(Accounts)]
#[instruction(name: String, settings: OrgSettings, owner: Pubkey)]
pub struct RegistryAdmin<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [MasterOrg::SEED_PREFIX],
        bump = master_org.bump,
        has_one = admin @ MasterOrgError::Unauthorized,
        constraint = Organization::is_valid_name(&name)
            && Organization::is_valid_owner(&owner) @ MasterOrgError::InvalidInput,
        constraint = settings.is_valid() @ MasterOrgError::InvalidSettings,
    )]
    pub master_org: Account<'info, MasterOrg>,
}

#[derive(Accounts)]
pub struct CreateOrganization<'info> {
    pub authority: RegistryAdmin<'info>,

    /// Opened at the address derived from the registry counter, so every
    /// creation lands on a fresh account.
    #[account(
        init,
        payer = authority.admin,
        space = Organization::SIZE,
        seeds = [
            Organization::SEED_PREFIX,
            authority.master_org.key().as_ref(),
            authority.master_org.org_count.to_le_bytes().as_ref()
        ],
        bump,
    )]
    pub organization: Account<'info, Organization>,

    /// May already exist; a registered record is rejected in the handler.
    #[account(
        init_if_needed,
        payer = authority.admin,
        space = OrgRecord::SIZE,
        seeds = [
            OrgRecord::SEED_PREFIX,
            authority.master_org.key().as_ref(),
            organization.key().as_ref()
        ],
        bump,
    )]
    pub org_record: Account<'info, OrgRecord>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
#[instruction(organization: Pubkey)]
pub struct Lookup<'info> {
    #[account(
        seeds = [MasterOrg::SEED_PREFIX],
        bump = master_org.bump,
    )]
    pub master_org: Account<'info, MasterOrg>,

    #[account(
        seeds = [
            OrgRecord::SEED_PREFIX,
            master_org.key().as_ref(),
            organization.as_ref()
        ],
        bump,
    )]
    /// CHECK: may not exist yet; owner and discriminator are checked before decoding
    pub org_record: UncheckedAccount<'info>,
}

#[derive(Accounts)]
pub struct ReadMasterOrg<'info> {
    #[account(
        seeds = [MasterOrg::SEED_PREFIX],
        bump = master_org.bump,
    )]
    pub master_org: Account<'info, MasterOrg>,
}

// ============================================================
// Events
// ============================================================

#[event]
pub struct MasterOrgInitialized {
    pub master_org: Pubkey,
    pub admin: Pubkey,
}

#[event]
pub struct OrganizationCreated {
    pub master_org: Pubkey,
    pub organization: Pubkey,
    pub org_id: u64,
    pub name: String,
    pub owner: Pubkey,
    pub majority: u8,
    pub quorum: u8,
}
