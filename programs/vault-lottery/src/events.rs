use anchor_lang::prelude::*;

use crate::state::DrawMode;

#[event]
pub struct InitializeVaultEvent {
    pub vault: Pubkey,
    pub vault_authority: Pubkey,
    pub lottery_id: u64,
    pub locked: bool,
    pub draw_mode: DrawMode,
}

#[event]
pub struct DepositEvent {
    pub vault: Pubkey,
    pub user: Pubkey,
    pub participant_id: u64,
    pub amount: u64,
}

#[event]
pub struct ToggleLockEvent {
    pub vault: Pubkey,
    pub vault_authority: Pubkey,
    pub locked: bool,
}

#[event]
pub struct DrawCommittedEvent {
    pub vault: Pubkey,
    pub randomness_account: Pubkey,
    pub seed_slot: u64,
    pub seed: [u8; 32],
}

#[event]
pub struct WinnerDrawnEvent {
    pub vault: Pubkey,
    pub winner_id: u64,
    pub participant_count: u64,
}

#[event]
pub struct WinnerClaimedEvent {
    pub vault: Pubkey,
    pub winner: Pubkey,
    pub amount: u64,
}

#[event]
pub struct ParticipantClosedEvent {
    pub participant: Pubkey,
    pub vault: Pubkey,
    pub user: Pubkey,
    pub lottery_id: u64,
}
