use anchor_lang::prelude::*;

use crate::constants::{DISCRIMINATOR_LEN, EPOCH_SEED, VAULT_SEED};
use crate::events::{InitializeVaultEvent, ToggleLockEvent};
use crate::state::{DrawMode, EpochCounter, Vault};

/// Accounts required to open a vault for an authority.
/// The vault lives at `[VAULT_SEED, authority]`, so each authority owns at most one.
#[derive(Accounts)]
pub struct InitializeVault<'info> {
    /// The authority of the new vault, paying for its creation.
    #[account(mut)]
    pub vault_authority: Signer<'info>,

    /// The Vault state account. `init_if_needed` lets the handler reject a live vault
    /// with `AlreadyExists` instead of a bare allocation failure.
    #[account(
        init_if_needed,
        payer = vault_authority,
        space = DISCRIMINATOR_LEN + Vault::INIT_SPACE,
        seeds = [VAULT_SEED, vault_authority.key().as_ref()],
        bump
    )]
    pub vault: Box<Account<'info, Vault>>,

    /// Lottery id source of the authority. Created with the first vault, never closed.
    #[account(
        init_if_needed,
        payer = vault_authority,
        space = DISCRIMINATOR_LEN + EpochCounter::INIT_SPACE,
        seeds = [EPOCH_SEED, vault_authority.key().as_ref()],
        bump
    )]
    pub epoch_counter: Account<'info, EpochCounter>,

    /// System program to create accounts.
    pub system_program: Program<'info, System>,
}

/// Accounts required to open or close the deposit window.
#[derive(Accounts)]
pub struct ToggleLock<'info> {
    /// Must match the vault's stored authority.
    pub vault_authority: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, vault.vault_authority.as_ref()],
        bump = vault.bump
    )]
    pub vault: Account<'info, Vault>,
}

/// Initializes the vault of the signing authority under a fresh epoch (`lottery_id`) taken from
/// the authority's epoch counter.
///
/// # Arguments
/// * `ctx` - Context holding the InitializeVault accounts
/// * `locked` - Whether the deposit window starts closed
/// * `draw_mode` - Settlement strategy for every draw of this vault
pub fn process_init_vault(
    ctx: Context<InitializeVault>,
    locked: bool,
    draw_mode: DrawMode,
) -> Result<()> {
    let authority = ctx.accounts.vault_authority.key();
    let vault_key = ctx.accounts.vault.key();
    let lottery_id = ctx
        .accounts
        .epoch_counter
        .next_lottery_id(authority, ctx.bumps.epoch_counter)?;
    let vault = &mut ctx.accounts.vault;

    vault.initialize(authority, ctx.bumps.vault, lottery_id, locked, draw_mode)?;

    msg!("Vault {} opened for lottery {}", vault_key, lottery_id);

    emit!(InitializeVaultEvent {
        vault: vault_key,
        vault_authority: authority,
        lottery_id,
        locked,
        draw_mode,
    });

    Ok(())
}

pub fn process_toggle_lock(ctx: Context<ToggleLock>) -> Result<()> {
    let vault_key = ctx.accounts.vault.key();
    let authority = ctx.accounts.vault_authority.key();
    let vault = &mut ctx.accounts.vault;

    let locked = vault.toggle_lock(&authority)?;

    msg!("Vault locked: {}", locked);

    emit!(ToggleLockEvent {
        vault: vault_key,
        vault_authority: authority,
        locked,
    });

    Ok(())
}
