use anchor_lang::prelude::*;

#[error_code]
pub enum LotteryError {
    #[msg("Vault already exists for this authority")]
    AlreadyExists,
    #[msg("Not authorized")]
    Unauthorized,
    #[msg("Vault is locked")]
    VaultLocked,
    #[msg("Vault must be locked")]
    NotLocked,
    #[msg("Winner already drawn")]
    AlreadyDrawn,
    #[msg("Randomness not fulfilled yet")]
    RandomnessNotFulfilled,
    #[msg("Participant is not the winner")]
    InvalidWinner,
    #[msg("Prize already claimed")]
    AlreadyClaimed,
    #[msg("Winner id out of range")]
    OutOfRange,
    #[msg("Winner not drawn")]
    NotDrawn,
    #[msg("No participants")]
    NoParticipants,
    #[msg("Draw not committed")]
    NotCommitted,
    #[msg("A different draw is already committed")]
    AlreadyCommitted,
    #[msg("Draw in progress")]
    DrawInProgress,
    #[msg("Participant belongs to an earlier lottery, close it first")]
    StaleParticipant,
    #[msg("Lottery epoch still in progress")]
    EpochInProgress,
    #[msg("Deposit amount must be positive")]
    InvalidAmount,
    #[msg("Insufficient balance")]
    InsufficientBalance,
    #[msg("Overflow")]
    Overflow,
    #[msg("Incorrect randomness account")]
    IncorrectRandomnessAccount,
    #[msg("Randomness already revealed")]
    RandomnessAlreadyRevealed,
    #[msg("Randomness account required in oracle mode")]
    MissingRandomnessAccount,
    #[msg("Winner id required in explicit mode")]
    MissingWinnerId,
    #[msg("Randomness account is not owned by Switchboard")]
    RandomnessOwnerMismatch,
}
