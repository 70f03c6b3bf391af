use anchor_lang::prelude::*;

use crate::error::LotteryError;
use crate::randomness::RandomnessOracle;

/// How a vault turns a committed draw into a winner id. Fixed when the vault is created.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum DrawMode {
    /// Switchboard On-Demand randomness, committed in one slot and revealed later.
    Oracle,
    /// The authority supplies the winner id when settling.
    Explicit,
}

/// Handle returned by a randomness oracle when a draw is committed.
#[derive(
    AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace,
)]
pub struct RandomnessRequest {
    /// The oracle account holding the committed randomness.
    /// `Pubkey::default()` for explicit draws.
    pub account: Pubkey,

    /// Slot the oracle bound the request to.
    pub seed_slot: u64,
}

/// Position of a vault in its draw lifecycle, derived from the stored flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawState {
    Open,
    Locked,
    Committed,
    Drawn,
    Claimed,
}

#[account]
#[derive(InitSpace)]
pub struct Vault {
    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,

    /// The authority allowed to toggle the lock and run the draw.
    pub vault_authority: Pubkey,

    /// Epoch of this lottery, issued by the authority's `EpochCounter`.
    pub lottery_id: u64,

    /// Deposits are only accepted while `false`.
    pub locked: bool,

    /// Number of participants registered in this epoch. Also the next id handed out.
    pub participant_count: u64,

    /// Settlement strategy chosen at init.
    pub draw_mode: DrawMode,

    /// `true` once `commit_draw` went through.
    pub committed: bool,

    /// Oracle request recorded at commit time.
    pub request: RandomnessRequest,

    /// Seed supplied by the authority at commit time.
    pub seed: [u8; 32],

    /// The id of the winning participant.
    /// Meaningless until `drawn` is set.
    pub winner_id: u64,

    /// `true` after `settle_draw`.
    pub drawn: bool,

    /// `true` after `claim_if_winner`.
    pub claimed: bool,
}

#[account]
#[derive(InitSpace)]
pub struct Participant {
    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,

    /// Vault this registration belongs to.
    pub vault: Pubkey,

    /// The depositing user, sole owner of the record.
    pub user: Pubkey,

    /// Vault epoch at registration time.
    pub lottery_id: u64,

    /// Sequential id, unique within `(vault, lottery_id)`.
    pub id: u64,

    /// Lamports deposited by `user` in this epoch.
    pub total_deposited: u64,

    pub is_initialized: bool,
}

/// Per-authority source of lottery ids. Outlives every vault the authority opens.
#[account]
#[derive(InitSpace)]
pub struct EpochCounter {
    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,

    pub authority: Pubkey,

    /// Last lottery id handed out. `0` before the first vault.
    pub last_lottery_id: u64,
}

impl EpochCounter {
    /// Issues the next lottery id for `authority`, strictly greater than any before it.
    pub fn next_lottery_id(&mut self, authority: Pubkey, bump: u8) -> Result<u64> {
        if self.authority == Pubkey::default() {
            self.authority = authority;
            self.bump = bump;
        }
        require_keys_eq!(self.authority, authority, LotteryError::Unauthorized);

        let lottery_id = self
            .last_lottery_id
            .checked_add(1)
            .ok_or(LotteryError::Overflow)?;
        self.last_lottery_id = lottery_id;
        Ok(lottery_id)
    }
}

impl Vault {
    /// Fills a freshly allocated vault. A vault that already carries an authority is live and
    /// cannot be initialized again.
    pub fn initialize(
        &mut self,
        authority: Pubkey,
        bump: u8,
        lottery_id: u64,
        locked: bool,
        draw_mode: DrawMode,
    ) -> Result<()> {
        require_keys_eq!(
            self.vault_authority,
            Pubkey::default(),
            LotteryError::AlreadyExists
        );

        self.bump = bump;
        self.vault_authority = authority;
        self.lottery_id = lottery_id;
        self.locked = locked;
        self.participant_count = 0;
        self.draw_mode = draw_mode;
        self.committed = false;
        self.request = RandomnessRequest::default();
        self.seed = [0u8; 32];
        self.winner_id = 0;
        self.drawn = false;
        self.claimed = false;
        Ok(())
    }

    pub fn state(&self) -> DrawState {
        if self.claimed {
            DrawState::Claimed
        } else if self.drawn {
            DrawState::Drawn
        } else if self.committed {
            DrawState::Committed
        } else if self.locked {
            DrawState::Locked
        } else {
            DrawState::Open
        }
    }

    /// Flips the deposit window. Returns the new `locked` value.
    pub fn toggle_lock(&mut self, caller: &Pubkey) -> Result<bool> {
        require_keys_eq!(*caller, self.vault_authority, LotteryError::Unauthorized);
        require!(
            !self.committed && !self.drawn,
            LotteryError::DrawInProgress
        );

        self.locked = !self.locked;
        Ok(self.locked)
    }

    /// Books a deposit of `amount` against `participant`. The first deposit of an epoch
    /// registers the participant under the next sequential id. Later ones only add to
    /// its running total.
    ///
    /// Every check runs before any field is written.
    ///
    /// # Returns
    /// The participant's id.
    pub fn register_deposit(
        &mut self,
        vault_key: &Pubkey,
        participant: &mut Participant,
        user: &Pubkey,
        amount: u64,
    ) -> Result<u64> {
        require!(!self.locked, LotteryError::VaultLocked);
        require!(amount > 0, LotteryError::InvalidAmount);

        if participant.is_initialized {
            require_keys_eq!(participant.vault, *vault_key, LotteryError::Unauthorized);
            require_keys_eq!(participant.user, *user, LotteryError::Unauthorized);
            require!(
                participant.lottery_id == self.lottery_id
                    && participant.id < self.participant_count,
                LotteryError::StaleParticipant
            );
            participant.total_deposited = participant
                .total_deposited
                .checked_add(amount)
                .ok_or(LotteryError::Overflow)?;
            return Ok(participant.id);
        }

        let id = self.participant_count;
        let next_count = id.checked_add(1).ok_or(LotteryError::Overflow)?;

        participant.vault = *vault_key;
        participant.user = *user;
        participant.lottery_id = self.lottery_id;
        participant.id = id;
        participant.total_deposited = amount;
        participant.is_initialized = true;
        self.participant_count = next_count;

        Ok(id)
    }

    /// Commits the draw against `oracle`. Committing the same request twice is a no-op.
    /// Any other request after a commit is rejected, so the outcome cannot be re-rolled.
    pub fn commit_draw<O: RandomnessOracle + ?Sized>(
        &mut self,
        caller: &Pubkey,
        oracle: &O,
        seed: [u8; 32],
    ) -> Result<RandomnessRequest> {
        require_keys_eq!(*caller, self.vault_authority, LotteryError::Unauthorized);
        require!(self.locked, LotteryError::NotLocked);
        require!(!self.drawn, LotteryError::AlreadyDrawn);
        require!(self.participant_count > 0, LotteryError::NoParticipants);

        let request = oracle.request_randomness(&seed)?;

        if self.committed {
            require!(
                self.request == request && self.seed == seed,
                LotteryError::AlreadyCommitted
            );
            return Ok(request);
        }

        self.request = request;
        self.seed = seed;
        self.committed = true;
        Ok(request)
    }

    /// Resolves the committed draw into `winner_id`. Succeeds at most once per epoch.
    /// Nothing is written while the oracle has not fulfilled the request, so callers may
    /// retry on `RandomnessNotFulfilled`.
    pub fn settle_draw<O: RandomnessOracle + ?Sized>(
        &mut self,
        caller: &Pubkey,
        oracle: &O,
    ) -> Result<u64> {
        require_keys_eq!(*caller, self.vault_authority, LotteryError::Unauthorized);
        require!(!self.drawn, LotteryError::AlreadyDrawn);
        require!(self.locked, LotteryError::NotLocked);
        require!(
            self.committed || !oracle.requires_commit(),
            LotteryError::NotCommitted
        );
        require!(self.participant_count > 0, LotteryError::NoParticipants);

        require!(
            oracle.is_fulfilled(&self.request)?,
            LotteryError::RandomnessNotFulfilled
        );
        let value = oracle.get_value(&self.request)?;
        let winner_id = oracle.select_winner(&value, self.participant_count)?;

        self.winner_id = winner_id;
        self.drawn = true;
        Ok(winner_id)
    }

    /// Checks that `participant`, owned by `user`, holds the winning id of this epoch and
    /// marks the prize as claimed. Moving the lamports and closing the account is up to the
    /// caller, in the same transaction.
    pub fn authorize_claim(
        &mut self,
        vault_key: &Pubkey,
        participant: &Participant,
        user: &Pubkey,
    ) -> Result<()> {
        require!(self.drawn, LotteryError::NotDrawn);
        require!(
            participant.is_initialized
                && participant.vault == *vault_key
                && participant.user == *user
                && participant.lottery_id == self.lottery_id,
            LotteryError::InvalidWinner
        );
        require!(
            participant.id == self.winner_id,
            LotteryError::InvalidWinner
        );
        require!(!self.claimed, LotteryError::AlreadyClaimed);

        self.claimed = true;
        Ok(())
    }
}

impl Participant {
    /// A participant may only be closed by its user, and only once its epoch is over:
    /// the vault is gone or has moved on to another `lottery_id`.
    pub fn ensure_closable(&self, user: &Pubkey, live_vault: Option<&Vault>) -> Result<()> {
        require_keys_eq!(self.user, *user, LotteryError::Unauthorized);

        if let Some(vault) = live_vault {
            require!(
                vault.lottery_id != self.lottery_id,
                LotteryError::EpochInProgress
            );
        }
        Ok(())
    }
}
