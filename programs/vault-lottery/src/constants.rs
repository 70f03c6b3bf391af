use anchor_lang::prelude::*;

/// Seed tag of the per-authority vault PDA: `[VAULT_SEED, authority]`.
pub const VAULT_SEED: &[u8] = b"vault";

/// Seed tag of the per-user participant PDA: `[PARTICIPANT_SEED, vault, user]`.
pub const PARTICIPANT_SEED: &[u8] = b"participant";

/// Seed tag of the per-authority epoch counter: `[EPOCH_SEED, authority]`.
/// Never closed, so lottery ids keep increasing across vault lifetimes.
pub const EPOCH_SEED: &[u8] = b"epoch";

/// Anchor account discriminator length, prepended to every `#[account]`.
pub const DISCRIMINATOR_LEN: usize = 8;

/// Number of leading randomness bytes folded into the winner index.
pub const WINNER_ENTROPY_BYTES: usize = 8;

/// Switchboard On-Demand program that must own every randomness account.
#[cfg(not(feature = "devnet"))]
pub const SWITCHBOARD_PROGRAM_ID: Pubkey = pubkey!("SBondMDrcV3K4kxZR1HNVT7osZxAHVHgYXL5Ze1oMUv");

#[cfg(feature = "devnet")]
pub const SWITCHBOARD_PROGRAM_ID: Pubkey = pubkey!("Aio4gaXjXzJNVLtzwtNVmSqGKpANtXhybbkhtAC94ji2");
