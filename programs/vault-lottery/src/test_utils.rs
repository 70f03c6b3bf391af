use anchor_lang::error::{Error, ERROR_CODE_OFFSET};
use anchor_lang::prelude::*;

use crate::error::LotteryError;
use crate::randomness::RandomnessOracle;
use crate::state::RandomnessRequest;

pub fn assert_lottery_err<T>(res: Result<T>, expected: LotteryError) {
    let want = expected as u32 + ERROR_CODE_OFFSET;
    match res {
        Ok(_) => panic!("expected error {}, got Ok", want),
        Err(Error::AnchorError(err)) => assert_eq!(
            err.error_code_number, want,
            "expected {}, got {} ({})",
            want, err.error_code_number, err.error_msg
        ),
        Err(Error::ProgramError(err)) => {
            panic!("expected error {}, got program error {}", want, err.program_error)
        }
    }
}

/// Read-only, non-signer account backed by test-owned buffers.
pub fn account_info<'a>(
    key: &'a Pubkey,
    owner: &'a Pubkey,
    lamports: &'a mut u64,
    data: &'a mut [u8],
) -> AccountInfo<'a> {
    AccountInfo::new(key, false, false, lamports, data, owner, false, 0)
}

/// Oracle whose value is set by the test, standing in for an asynchronous VRF.
pub struct FixedOracle {
    account: Pubkey,
    seed_slot: u64,
    value: Option<[u8; 32]>,
}

impl FixedOracle {
    pub fn pending(account: Pubkey, seed_slot: u64) -> Self {
        Self {
            account,
            seed_slot,
            value: None,
        }
    }

    pub fn request(&self) -> RandomnessRequest {
        RandomnessRequest {
            account: self.account,
            seed_slot: self.seed_slot,
        }
    }

    pub fn fulfill(&mut self, value: [u8; 32]) {
        self.value = Some(value);
    }
}

impl RandomnessOracle for FixedOracle {
    fn request_randomness(&self, _seed: &[u8; 32]) -> Result<RandomnessRequest> {
        Ok(self.request())
    }

    fn is_fulfilled(&self, request: &RandomnessRequest) -> Result<bool> {
        require!(
            *request == self.request(),
            LotteryError::IncorrectRandomnessAccount
        );
        Ok(self.value.is_some())
    }

    fn get_value(&self, request: &RandomnessRequest) -> Result<[u8; 32]> {
        require!(
            *request == self.request(),
            LotteryError::IncorrectRandomnessAccount
        );
        self.value
            .ok_or_else(|| error!(LotteryError::RandomnessNotFulfilled))
    }
}
