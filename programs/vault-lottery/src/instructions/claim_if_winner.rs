use anchor_lang::prelude::*;

use crate::constants::{PARTICIPANT_SEED, VAULT_SEED};
use crate::error::LotteryError;
use crate::events::WinnerClaimedEvent;
use crate::state::{Participant, Vault};

/// Accounts required for claiming the pot.
///
/// Ensures:
/// 1. Only the owner of the winning participant record can claim.
/// 2. The whole vault balance goes to the winner and the vault is closed in the same step.
#[derive(Accounts)]
pub struct ClaimIfWinner<'info> {
    /// The claimant, receiving every lamport of the vault.
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        close = user,
        seeds = [VAULT_SEED, vault.vault_authority.as_ref()],
        bump = vault.bump
    )]
    pub vault: Account<'info, Vault>,

    #[account(
        has_one = user @ LotteryError::InvalidWinner,
        seeds = [PARTICIPANT_SEED, vault.key().as_ref(), user.key().as_ref()],
        bump = participant.bump
    )]
    pub participant: Account<'info, Participant>,
}

/// Pays the pot to the winner.
///
/// Steps:
/// 1. Verify that a winner has been drawn.
/// 2. Verify the participant holds the winning id of the current epoch.
/// 3. Mark the prize claimed. Anchor then closes the vault into `user`, which moves the full
///    balance (deposits and rent) and destroys the record in one go.
pub fn process_claim_if_winner(ctx: Context<ClaimIfWinner>) -> Result<()> {
    let user_key = ctx.accounts.user.key();
    let vault_key = ctx.accounts.vault.key();
    let payout = ctx.accounts.vault.to_account_info().lamports();

    let accounts = &mut *ctx.accounts;
    accounts
        .vault
        .authorize_claim(&vault_key, &accounts.participant, &user_key)?;

    msg!("Winner {} claims {}", accounts.participant.id, payout);

    emit!(WinnerClaimedEvent {
        vault: vault_key,
        winner: user_key,
        amount: payout,
    });

    Ok(())
}
