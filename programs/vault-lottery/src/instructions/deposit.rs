use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::{DISCRIMINATOR_LEN, PARTICIPANT_SEED, VAULT_SEED};
use crate::error::LotteryError;
use crate::events::DepositEvent;
use crate::state::{Participant, Vault};

/// Accounts required to deposit into a vault.
/// Handles:
/// - Participant registration on the first deposit of the epoch
/// - Payment transfer into the vault's custody
#[derive(Accounts)]
pub struct Deposit<'info> {
    /// The depositing user, also paying the participant's rent.
    #[account(mut)]
    pub user: Signer<'info>,

    /// Vault receiving the deposit.
    #[account(
        mut,
        seeds = [VAULT_SEED, vault.vault_authority.as_ref()],
        bump = vault.bump
    )]
    pub vault: Account<'info, Vault>,

    /// The user's registration in this vault. Created on first deposit, reused afterwards.
    #[account(
        init_if_needed,
        payer = user,
        space = DISCRIMINATOR_LEN + Participant::INIT_SPACE,
        seeds = [PARTICIPANT_SEED, vault.key().as_ref(), user.key().as_ref()],
        bump
    )]
    pub participant: Account<'info, Participant>,

    /// System program interface
    pub system_program: Program<'info, System>,
}

/// Deposits `amount` lamports into the vault on behalf of the caller.
///
/// Steps performed:
/// 1. Check the user can cover the amount.
/// 2. Register the participant (or book a repeat deposit) while the vault is open.
/// 3. Transfer SOL from the user to the vault.
///
/// # Arguments
/// * `ctx` - Context containing Deposit accounts
/// * `amount` - Lamports to deposit
pub fn process_deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    let user_key = ctx.accounts.user.key();
    let vault_key = ctx.accounts.vault.key();

    require!(
        ctx.accounts.user.lamports() >= amount,
        LotteryError::InsufficientBalance
    );

    let accounts = &mut *ctx.accounts;
    let participant_id = accounts.vault.register_deposit(
        &vault_key,
        &mut accounts.participant,
        &user_key,
        amount,
    )?;
    accounts.participant.bump = ctx.bumps.participant;

    system_program::transfer(
        CpiContext::new(
            accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: accounts.user.to_account_info(),
                to: accounts.vault.to_account_info(),
            },
        ),
        amount,
    )?;

    msg!("Participant {} deposited {}", participant_id, amount);
    msg!("Participant count: {}", accounts.vault.participant_count);

    emit!(DepositEvent {
        vault: vault_key,
        user: user_key,
        participant_id,
        amount,
    });

    Ok(())
}
