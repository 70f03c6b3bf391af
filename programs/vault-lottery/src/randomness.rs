use std::cell::Ref;

use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;

use crate::constants::{SWITCHBOARD_PROGRAM_ID, WINNER_ENTROPY_BYTES};
use crate::error::LotteryError;
use crate::state::{DrawMode, RandomnessRequest};

/// Capability set a draw is settled against.
///
/// `Vault::commit_draw` and `Vault::settle_draw` only talk to this trait, so the oracle-backed
/// and the operator-supplied draws share one code path.
pub trait RandomnessOracle {
    /// Registers `seed` with the oracle and returns the handle to read the value from later.
    fn request_randomness(&self, seed: &[u8; 32]) -> Result<RandomnessRequest>;

    fn is_fulfilled(&self, request: &RandomnessRequest) -> Result<bool>;

    fn get_value(&self, request: &RandomnessRequest) -> Result<[u8; 32]>;

    /// Maps a fulfilled value onto `[0, participant_count)`.
    fn select_winner(&self, value: &[u8; 32], participant_count: u64) -> Result<u64> {
        winner_from_randomness(value, participant_count)
    }

    /// Whether `settle_draw` needs a prior `commit_draw`.
    fn requires_commit(&self) -> bool {
        true
    }
}

/// Folds the leading bytes of `value` (little endian) into a winner index.
///
/// Plain modulo reduction: a small bias exists when `participant_count` does not divide 2^64.
pub fn winner_from_randomness(value: &[u8; 32], participant_count: u64) -> Result<u64> {
    require!(participant_count > 0, LotteryError::NoParticipants);

    let mut entropy = [0u8; WINNER_ENTROPY_BYTES];
    entropy.copy_from_slice(&value[..WINNER_ENTROPY_BYTES]);
    Ok(u64::from_le_bytes(entropy) % participant_count)
}

/// Value of a randomness account, once an oracle has revealed it for `seed_slot`.
///
/// The revealed value is final, so it stays readable in every later slot.
pub fn revealed_value(seed_slot: u64, reveal_slot: u64, value: &[u8; 32]) -> Option<[u8; 32]> {
    (reveal_slot > seed_slot).then_some(*value)
}

/// Operator-supplied winner, for clusters without oracle access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExplicitWinner {
    winner_id: Option<u64>,
}

impl ExplicitWinner {
    pub fn new(winner_id: Option<u64>) -> Self {
        Self { winner_id }
    }
}

impl RandomnessOracle for ExplicitWinner {
    fn request_randomness(&self, _seed: &[u8; 32]) -> Result<RandomnessRequest> {
        Ok(RandomnessRequest::default())
    }

    /// A missing id is a caller error, not oracle latency.
    fn is_fulfilled(&self, _request: &RandomnessRequest) -> Result<bool> {
        require!(self.winner_id.is_some(), LotteryError::MissingWinnerId);
        Ok(true)
    }

    fn get_value(&self, _request: &RandomnessRequest) -> Result<[u8; 32]> {
        let winner_id = self.winner_id.ok_or(LotteryError::MissingWinnerId)?;
        let mut value = [0u8; 32];
        value[..8].copy_from_slice(&winner_id.to_le_bytes());
        Ok(value)
    }

    fn select_winner(&self, value: &[u8; 32], participant_count: u64) -> Result<u64> {
        let mut id = [0u8; 8];
        id.copy_from_slice(&value[..8]);
        let winner_id = u64::from_le_bytes(id);

        require!(winner_id < participant_count, LotteryError::OutOfRange);
        Ok(winner_id)
    }

    fn requires_commit(&self) -> bool {
        false
    }
}

/// Switchboard On-Demand randomness account read at the current `clock`.
pub struct SwitchboardOracle<'a, 'info> {
    account: &'a AccountInfo<'info>,
    clock: &'a Clock,
}

impl<'a, 'info> SwitchboardOracle<'a, 'info> {
    pub fn new(account: &'a AccountInfo<'info>, clock: &'a Clock) -> Self {
        Self { account, clock }
    }

    fn read(&self) -> Result<Ref<'_, RandomnessAccountData>> {
        require_keys_eq!(
            *self.account.owner,
            SWITCHBOARD_PROGRAM_ID,
            LotteryError::RandomnessOwnerMismatch
        );
        RandomnessAccountData::parse(self.account.data.borrow())
            .map_err(|_| error!(LotteryError::IncorrectRandomnessAccount))
    }

    /// Loads the account behind `request`, refusing any other randomness account.
    fn read_committed(
        &self,
        request: &RandomnessRequest,
    ) -> Result<Ref<'_, RandomnessAccountData>> {
        require_keys_eq!(
            self.account.key(),
            request.account,
            LotteryError::IncorrectRandomnessAccount
        );
        let data = self.read()?;
        require!(
            data.seed_slot == request.seed_slot,
            LotteryError::IncorrectRandomnessAccount
        );
        Ok(data)
    }
}

impl RandomnessOracle for SwitchboardOracle<'_, '_> {
    /// The Switchboard commit instruction runs just before ours in the same transaction;
    /// the account must be bound to the previous slot or its value may already be known.
    fn request_randomness(&self, _seed: &[u8; 32]) -> Result<RandomnessRequest> {
        let data = self.read()?;
        if data.seed_slot != self.clock.slot.saturating_sub(1) {
            msg!("Seed slot: {}", data.seed_slot);
            msg!("Current slot: {}", self.clock.slot);
            return Err(LotteryError::RandomnessAlreadyRevealed.into());
        }

        Ok(RandomnessRequest {
            account: self.account.key(),
            seed_slot: data.seed_slot,
        })
    }

    fn is_fulfilled(&self, request: &RandomnessRequest) -> Result<bool> {
        let data = self.read_committed(request)?;
        Ok(revealed_value(data.seed_slot, data.reveal_slot, &data.value).is_some())
    }

    fn get_value(&self, request: &RandomnessRequest) -> Result<[u8; 32]> {
        let data = self.read_committed(request)?;
        revealed_value(data.seed_slot, data.reveal_slot, &data.value)
            .ok_or_else(|| error!(LotteryError::RandomnessNotFulfilled))
    }
}

/// Strategy picked from the vault's `DrawMode`.
pub enum DrawStrategy<'a, 'info> {
    Oracle(SwitchboardOracle<'a, 'info>),
    Explicit(ExplicitWinner),
}

impl<'a, 'info> DrawStrategy<'a, 'info> {
    /// Builds the strategy for `mode` out of what the instruction received.
    /// Oracle mode needs the randomness account. Explicit mode reads `winner_id`.
    pub fn configure(
        mode: DrawMode,
        randomness_account: Option<&'a AccountInfo<'info>>,
        clock: &'a Clock,
        winner_id: Option<u64>,
    ) -> Result<Self> {
        match mode {
            DrawMode::Oracle => {
                let account =
                    randomness_account.ok_or(LotteryError::MissingRandomnessAccount)?;
                Ok(Self::Oracle(SwitchboardOracle::new(account, clock)))
            }
            DrawMode::Explicit => Ok(Self::Explicit(ExplicitWinner::new(winner_id))),
        }
    }

    fn inner(&self) -> &dyn RandomnessOracle {
        match self {
            Self::Oracle(oracle) => oracle,
            Self::Explicit(explicit) => explicit,
        }
    }
}

impl RandomnessOracle for DrawStrategy<'_, '_> {
    fn request_randomness(&self, seed: &[u8; 32]) -> Result<RandomnessRequest> {
        self.inner().request_randomness(seed)
    }

    fn is_fulfilled(&self, request: &RandomnessRequest) -> Result<bool> {
        self.inner().is_fulfilled(request)
    }

    fn get_value(&self, request: &RandomnessRequest) -> Result<[u8; 32]> {
        self.inner().get_value(request)
    }

    fn select_winner(&self, value: &[u8; 32], participant_count: u64) -> Result<u64> {
        self.inner().select_winner(value, participant_count)
    }

    fn requires_commit(&self) -> bool {
        self.inner().requires_commit()
    }
}
