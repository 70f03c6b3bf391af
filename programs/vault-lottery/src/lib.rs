use anchor_lang::prelude::*;
use instructions::*;

pub mod constants;
pub mod error;
pub mod events;
mod instructions;
pub mod randomness;
pub mod state;

#[cfg(test)]
mod test_utils;

use state::DrawMode;

declare_id!("4NYnTNsnq6xhph3QV9yKdou9uFuAmAqR236bPu8uXPcc");

#[program]
pub mod vault_lottery {
    use super::*;

    pub fn init_vault(
        ctx: Context<InitializeVault>,
        locked: bool,
        draw_mode: DrawMode,
    ) -> Result<()> {
        process_init_vault(ctx, locked, draw_mode)
    }

    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        process_deposit(ctx, amount)
    }

    pub fn toggle_lock(ctx: Context<ToggleLock>) -> Result<()> {
        process_toggle_lock(ctx)
    }

    pub fn commit_draw(ctx: Context<CommitDraw>, seed: [u8; 32]) -> Result<()> {
        process_commit_draw(ctx, seed)
    }

    pub fn settle_draw(ctx: Context<SettleDraw>, winner_id: Option<u64>) -> Result<()> {
        process_settle_draw(ctx, winner_id)
    }

    pub fn claim_if_winner(ctx: Context<ClaimIfWinner>) -> Result<()> {
        process_claim_if_winner(ctx)
    }

    pub fn close_participant(ctx: Context<CloseParticipant>) -> Result<()> {
        process_close_participant(ctx)
    }
}
