use anchor_lang::prelude::*;

use crate::constants::VAULT_SEED;
use crate::events::DrawCommittedEvent;
use crate::randomness::DrawStrategy;
use crate::state::Vault;

/// Accounts required to commit the draw of a locked vault.
#[derive(Accounts)]
pub struct CommitDraw<'info> {
    /// Must match the vault's stored authority.
    pub vault_authority: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, vault.vault_authority.as_ref()],
        bump = vault.bump
    )]
    pub vault: Account<'info, Vault>,

    /// Randomness account from Switchboard, committed by the preceding instruction.
    /// Only read in oracle mode.
    /// CHECK: The account's data is validated manually within the handler.
    pub randomness_account_data: Option<UncheckedAccount<'info>>,
}

pub fn process_commit_draw(ctx: Context<CommitDraw>, seed: [u8; 32]) -> Result<()> {
    let clock = Clock::get()?;
    let authority = ctx.accounts.vault_authority.key();
    let vault_key = ctx.accounts.vault.key();
    let vault = &mut ctx.accounts.vault;

    let strategy = DrawStrategy::configure(
        vault.draw_mode,
        ctx.accounts.randomness_account_data.as_deref(),
        &clock,
        None,
    )?;
    let request = vault.commit_draw(&authority, &strategy, seed)?;

    msg!("Draw committed at slot {}", clock.slot);

    emit!(DrawCommittedEvent {
        vault: vault_key,
        randomness_account: request.account,
        seed_slot: request.seed_slot,
        seed,
    });

    Ok(())
}
