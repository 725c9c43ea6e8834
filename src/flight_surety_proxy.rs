// Read-only gate queries for collaborator contracts: the insurance module
// checks isAirline/isFunded before underwriting, the oracle module checks
// isOperational before applying a flight-status update.

use multiversx_sc::proxy_imports::*;

pub struct FlightSuretyProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for FlightSuretyProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = FlightSuretyProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        FlightSuretyProxyMethods { wrapped_tx: tx }
    }
}

pub struct FlightSuretyProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> FlightSuretyProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn is_operational(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isOperational")
            .original_result()
    }

    pub fn is_airline<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        airline: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isAirline")
            .argument(&airline)
            .original_result()
    }

    pub fn is_funded<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        airline: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isFunded")
            .argument(&airline)
            .original_result()
    }
}
