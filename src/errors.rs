// Error messages raised through `require!` / `sc_panic!`.
// Every failure aborts the transaction and reverts all of its writes.

pub const ERR_UNAUTHORIZED: &str = "Caller is not the contract owner";
pub const ERR_CONTRACT_PAUSED: &str = "Contract is currently not operational";
pub const ERR_ALREADY_REGISTERED: &str = "Airline is already registered";
pub const ERR_SPONSOR_NOT_REGISTERED: &str = "Caller is not a registered airline";
pub const ERR_SPONSOR_NOT_FUNDED: &str = "Caller has not provided sufficient funding";
pub const ERR_DUPLICATE_VOTE: &str = "Caller has already voted for this airline";
pub const ERR_ZERO_DEPOSIT: &str = "Deposit amount must be greater than zero";
pub const ERR_ZERO_MIN_FUNDING: &str = "Minimum funding must be greater than zero";
