multiversx_sc::imports!();

use crate::access_guard;
use crate::errors::{ERR_ALREADY_REGISTERED, ERR_DUPLICATE_VOTE};
use crate::types::{AirlineInfo, AirlineStatus};

/// Airline registry: registration, accumulated funding and open
/// vote records for pending candidates. Every write goes through
/// the operational guard.
#[multiversx_sc::module]
pub trait MembershipModule: access_guard::AccessGuardModule {
    // ========================================================
    // INTERNAL: registry writes
    // ========================================================

    /// Credits `amount` to the participant. Returns true only for the
    /// deposit that lifts the total to the funding minimum.
    fn record_funding(&self, participant: &ManagedAddress, amount: &BigUint) -> bool {
        self.require_operational();

        let min_funding = self.min_funding().get();
        let previous = self.funded_amount(participant).get();
        let total = &previous + amount;
        self.funded_amount(participant).set(&total);

        self.funding_deposited_event(participant, amount, &total);

        let crossed = previous < min_funding && total >= min_funding;
        if crossed {
            self.airline_funded_event(participant, &total);
        }
        crossed
    }

    fn register_direct(&self, candidate: &ManagedAddress) {
        self.require_operational();
        require!(!self.is_airline(candidate), ERR_ALREADY_REGISTERED);

        self.registered_airlines().insert(candidate.clone());
        self.candidate_voters(candidate).clear();

        let count = self.registered_airlines().len() as u64;
        self.airline_registered_event(candidate, count);
    }

    /// Adds `voter` to the candidate's vote record, opening it on the
    /// first vote, and returns the updated tally.
    fn cast_vote(&self, candidate: &ManagedAddress, voter: &ManagedAddress) -> usize {
        self.require_operational();
        require!(!self.is_airline(candidate), ERR_ALREADY_REGISTERED);
        require!(
            self.candidate_voters(candidate).insert(voter.clone()),
            ERR_DUPLICATE_VOTE
        );

        let tally = self.candidate_voters(candidate).len();
        self.vote_cast_event(candidate, voter, tally as u64);
        tally
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(isAirline)]
    fn is_airline(&self, airline: &ManagedAddress) -> bool {
        self.registered_airlines().contains(airline)
    }

    #[view(isFunded)]
    fn is_funded(&self, airline: &ManagedAddress) -> bool {
        self.funded_amount(airline).get() >= self.min_funding().get()
    }

    #[view(getFundedAmount)]
    fn get_funded_amount(&self, airline: &ManagedAddress) -> BigUint {
        self.funded_amount(airline).get()
    }

    #[view(getMinFunding)]
    fn get_min_funding(&self) -> BigUint {
        self.min_funding().get()
    }

    #[view(getRegisteredAirlineCount)]
    fn get_registered_airline_count(&self) -> usize {
        self.registered_airlines().len()
    }

    #[view(getRegisteredAirlines)]
    fn get_registered_airlines(
        &self,
        start: usize,
        count: usize,
    ) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        let end = core::cmp::min(
            start.saturating_add(count),
            self.registered_airlines().len(),
        );

        for (idx, airline) in self.registered_airlines().iter().enumerate() {
            if idx >= end {
                break;
            }
            if idx >= start {
                result.push(airline);
            }
        }
        result
    }

    #[view(getVoteCount)]
    fn get_vote_count(&self, candidate: &ManagedAddress) -> usize {
        self.candidate_voters(candidate).len()
    }

    #[view(hasVoted)]
    fn has_voted(&self, candidate: &ManagedAddress, voter: &ManagedAddress) -> bool {
        self.candidate_voters(candidate).contains(voter)
    }

    #[view(getAirline)]
    fn get_airline(&self, airline: &ManagedAddress) -> AirlineInfo<Self::Api> {
        AirlineInfo {
            is_registered: self.is_airline(airline),
            is_funded: self.is_funded(airline),
            funded_amount: self.funded_amount(airline).get(),
        }
    }

    #[view(getAirlineStatus)]
    fn get_airline_status(&self, airline: &ManagedAddress) -> AirlineStatus {
        if self.is_airline(airline) {
            AirlineStatus::Registered
        } else if !self.candidate_voters(airline).is_empty() {
            AirlineStatus::Pending
        } else {
            AirlineStatus::Unknown
        }
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("fundingDeposited")]
    fn funding_deposited_event(
        &self,
        #[indexed] airline: &ManagedAddress,
        #[indexed] amount: &BigUint,
        total: &BigUint,
    );

    #[event("airlineFunded")]
    fn airline_funded_event(&self, #[indexed] airline: &ManagedAddress, total: &BigUint);

    #[event("airlineRegistered")]
    fn airline_registered_event(&self, #[indexed] airline: &ManagedAddress, registered_count: u64);

    #[event("voteCast")]
    fn vote_cast_event(
        &self,
        #[indexed] candidate: &ManagedAddress,
        #[indexed] voter: &ManagedAddress,
        tally: u64,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("minFunding")]
    fn min_funding(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("registeredAirlines")]
    fn registered_airlines(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("fundedAmount")]
    fn funded_amount(&self, airline: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("candidateVoters")]
    fn candidate_voters(&self, candidate: &ManagedAddress) -> UnorderedSetMapper<ManagedAddress>;
}
