mod admin;
mod claim_if_winner;
mod close_participant;
mod commit_draw;
mod deposit;
mod settle_draw;

pub use admin::*;
pub use claim_if_winner::*;
pub use close_participant::*;
pub use commit_draw::*;
pub use deposit::*;
pub use settle_draw::*;
