multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Airline Status: per-candidate lifecycle
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub enum AirlineStatus {
    /// Never registered and no vote record open.
    Unknown,
    /// Consensus phase: at least one sponsor voted, threshold not reached yet.
    Pending,
    /// Member of the registry. Terminal state.
    Registered,
}

// ============================================================
// Airline Info: aggregate view of a participant
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct AirlineInfo<M: ManagedTypeApi> {
    pub is_registered: bool,
    /// Derived: accumulated funding has reached the configured minimum
    pub is_funded: bool,
    pub funded_amount: BigUint<M>,
}
