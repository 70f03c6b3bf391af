use anchor_lang::prelude::*;

use crate::constants::PARTICIPANT_SEED;
use crate::events::ParticipantClosedEvent;
use crate::state::{Participant, Vault};

/// Close a participant account to recover its rent and to be able to join a later lottery
/// of the same vault.
#[derive(Accounts)]
pub struct CloseParticipant<'info> {
    /// The user who owns the participant account
    #[account(mut)]
    pub user: Signer<'info>,

    /// The participant account to close. The rent is refunded to the user.
    #[account(
        mut,
        close = user,
        seeds = [PARTICIPANT_SEED, participant.vault.as_ref(), user.key().as_ref()],
        bump = participant.bump
    )]
    pub participant: Account<'info, Participant>,

    /// The participant's vault. Usually already closed by the winner's claim.
    /// CHECK: Only deserialized when still owned by this program.
    #[account(address = participant.vault)]
    pub vault: UncheckedAccount<'info>,
}

/// Returns the vault stored at `info`, or `None` once it has been closed.
fn load_live_vault(info: &AccountInfo) -> Result<Option<Vault>> {
    if info.owner != &crate::ID || info.data_is_empty() {
        return Ok(None);
    }
    let data = info.try_borrow_data()?;
    Ok(Some(Vault::try_deserialize(&mut &data[..])?))
}

pub fn process_close_participant(ctx: Context<CloseParticipant>) -> Result<()> {
    let user_key = ctx.accounts.user.key();
    let live_vault = load_live_vault(&ctx.accounts.vault)?;
    let participant = &ctx.accounts.participant;

    participant.ensure_closable(&user_key, live_vault.as_ref())?;

    msg!("Closing participant {} of lottery {}", participant.id, participant.lottery_id);

    emit!(ParticipantClosedEvent {
        participant: participant.key(),
        vault: participant.vault,
        user: user_key,
        lottery_id: participant.lottery_id,
    });

    Ok(())
}
