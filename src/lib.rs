#![no_std]

multiversx_sc::imports!();

pub mod access_guard;
pub mod errors;
pub mod flight_surety_proxy;
pub mod membership;
pub mod types;

use errors::{
    ERR_ALREADY_REGISTERED, ERR_SPONSOR_NOT_FUNDED, ERR_SPONSOR_NOT_REGISTERED, ERR_ZERO_DEPOSIT,
    ERR_ZERO_MIN_FUNDING,
};

// ============================================================
// Constants
// ============================================================

/// Airlines registered without a vote: up to and including the 4th
pub const BOOTSTRAP_THRESHOLD: usize = 4;

/// Default funding minimum, in whole EGLD
pub const DEFAULT_MIN_FUNDING_EGLD: u64 = 10;

/// Atomic units per EGLD
const ONE_EGLD: u64 = 1_000_000_000_000_000_000;

/// Votes needed once in consensus phase: ceil(registered / 2)
pub fn required_votes(registered_count: usize) -> usize {
    (registered_count + 1) / 2
}

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait FlightSurety:
    access_guard::AccessGuardModule + membership::MembershipModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, first_airline: ManagedAddress, min_funding: OptionalValue<BigUint>) {
        let min_funding = match min_funding {
            OptionalValue::Some(amount) => amount,
            OptionalValue::None => {
                BigUint::from(DEFAULT_MIN_FUNDING_EGLD) * BigUint::from(ONE_EGLD)
            }
        };
        require!(min_funding > 0u64, ERR_ZERO_MIN_FUNDING);

        self.contract_owner().set(self.blockchain().get_caller());
        self.operational().set(true);
        self.testing_mode().set(false);
        self.min_funding().set(&min_funding);

        // Genesis airline: no funding, no vote
        self.register_direct(&first_airline);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: depositFunding
    // Accumulates for the caller. Overpayment is kept and credited.
    // ========================================================

    #[endpoint(depositFunding)]
    #[payable("EGLD")]
    fn deposit_funding(&self) {
        self.require_operational();

        let caller = self.blockchain().get_caller();
        let payment_amount = self.call_value().egld_value().clone_value();
        require!(payment_amount > 0u64, ERR_ZERO_DEPOSIT);

        self.record_funding(&caller, &payment_amount);
    }

    // ========================================================
    // ENDPOINT: registerAirline
    // Bootstrap phase: direct registration.
    // Consensus phase: the sponsor's call is one vote; the candidate is
    // registered once the tally reaches ceil(registered / 2).
    // Returns whether the candidate is registered after this call.
    // ========================================================

    #[endpoint(registerAirline)]
    fn register_airline(&self, candidate: ManagedAddress) -> bool {
        self.require_operational();

        let sponsor = self.blockchain().get_caller();
        require!(self.is_airline(&sponsor), ERR_SPONSOR_NOT_REGISTERED);
        require!(self.is_funded(&sponsor), ERR_SPONSOR_NOT_FUNDED);
        require!(!self.is_airline(&candidate), ERR_ALREADY_REGISTERED);

        let registered_count = self.registered_airlines().len();
        if registered_count < BOOTSTRAP_THRESHOLD {
            self.register_direct(&candidate);
            return true;
        }

        let tally = self.cast_vote(&candidate, &sponsor);
        if tally >= required_votes(registered_count) {
            self.register_direct(&candidate);
            return true;
        }

        false
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getContractConfig)]
    fn get_contract_config(&self) -> MultiValue3<BigUint, usize, ManagedAddress> {
        let min_funding = self.min_funding().get();
        let owner = self.contract_owner().get();
        (min_funding, BOOTSTRAP_THRESHOLD, owner).into()
    }
}
