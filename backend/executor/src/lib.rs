//! Mutation execution and the session lifecycle: the single owned table
//! slot, the boundaries a host talks to, and the user-visible replies.

pub mod executor;
pub mod session;

pub use executor::apply;
pub use session::{
    PriceSession, Reply, SessionState, MSG_NOT_UNDERSTOOD, MSG_NO_TABLE, MSG_UPDATED,
};
