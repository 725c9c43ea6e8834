multiversx_sc::imports!();

use crate::errors::{ERR_CONTRACT_PAUSED, ERR_UNAUTHORIZED};

/// Owner identity plus the operational kill-switch consulted by every
/// mutating endpoint.
#[multiversx_sc::module]
pub trait AccessGuardModule {
    // ========================================================
    // ENDPOINT: setOperatingStatus
    // Owner only. Not gated by the flag itself, so a halt can be lifted.
    // ========================================================

    #[endpoint(setOperatingStatus)]
    fn set_operating_status(&self, mode: bool) {
        self.require_contract_owner();

        self.operational().set(mode);
        self.operating_status_changed_event(&self.blockchain().get_caller(), mode);
    }

    // ========================================================
    // ENDPOINT: setTestingMode
    // Owner only, blocked while the contract is halted.
    // ========================================================

    #[endpoint(setTestingMode)]
    fn set_testing_mode(&self, mode: bool) {
        self.require_operational();
        self.require_contract_owner();

        self.testing_mode().set(mode);
        self.testing_mode_changed_event(mode);
    }

    // ========================================================
    // INTERNAL: guards
    // ========================================================

    fn require_operational(&self) {
        require!(self.operational().get(), ERR_CONTRACT_PAUSED);
    }

    fn require_contract_owner(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.contract_owner().get(), ERR_UNAUTHORIZED);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(isOperational)]
    fn is_operational(&self) -> bool {
        self.operational().get()
    }

    #[view(isTestingMode)]
    fn is_testing_mode(&self) -> bool {
        self.testing_mode().get()
    }

    #[view(getContractOwner)]
    fn get_contract_owner(&self) -> ManagedAddress {
        self.contract_owner().get()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("operatingStatusChanged")]
    fn operating_status_changed_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] operational: bool,
    );

    #[event("testingModeChanged")]
    fn testing_mode_changed_event(&self, #[indexed] testing_mode: bool);

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("contractOwner")]
    fn contract_owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("operational")]
    fn operational(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("testingMode")]
    fn testing_mode(&self) -> SingleValueMapper<bool>;
}
