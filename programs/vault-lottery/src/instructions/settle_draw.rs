use anchor_lang::prelude::*;

use crate::constants::VAULT_SEED;
use crate::events::WinnerDrawnEvent;
use crate::randomness::DrawStrategy;
use crate::state::Vault;

/// Accounts required to settle the committed draw.
///
/// This ensures that:
/// 1. Only the vault authority can pick a winner.
/// 2. In oracle mode, the randomness account is the one committed earlier.
/// 3. A winner hasn't already been chosen.
#[derive(Accounts)]
pub struct SettleDraw<'info> {
    pub vault_authority: Signer<'info>,

    /// The vault whose draw is settled.
    #[account(
        mut,
        seeds = [VAULT_SEED, vault.vault_authority.as_ref()],
        bump = vault.bump
    )]
    pub vault: Account<'info, Vault>,

    /// The randomness oracle account providing verifiable randomness.
    /// CHECK: The account's data is validated manually within the handler.
    pub randomness_account_data: Option<UncheckedAccount<'info>>,
}

/// Settles the draw and stores the winner id.
///
/// Fails with `RandomnessNotFulfilled` while the oracle has not revealed the committed
/// value; that is the only error worth retrying.
///
/// # Arguments
/// * `ctx` - Context containing SettleDraw accounts
/// * `winner_id` - Operator-chosen winner, read only in explicit mode
pub fn process_settle_draw(ctx: Context<SettleDraw>, winner_id: Option<u64>) -> Result<()> {
    let clock = Clock::get()?;
    let authority = ctx.accounts.vault_authority.key();
    let vault_key = ctx.accounts.vault.key();
    let vault = &mut ctx.accounts.vault;

    let strategy = DrawStrategy::configure(
        vault.draw_mode,
        ctx.accounts.randomness_account_data.as_deref(),
        &clock,
        winner_id,
    )?;
    let winner_id = vault.settle_draw(&authority, &strategy)?;

    msg!("Participant count: {}", vault.participant_count);
    msg!("Winner: {}", winner_id);

    emit!(WinnerDrawnEvent {
        vault: vault_key,
        winner_id,
        participant_count: vault.participant_count,
    });

    Ok(())
}
