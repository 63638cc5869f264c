pub mod address_verifier;
pub mod policy;
pub mod transaction_verifier;

pub use address_verifier::AddressVerifier;
pub use policy::InconclusiveVerificationPolicy;
pub use transaction_verifier::TransactionVerifier;
