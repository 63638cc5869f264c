pub mod address_validator;
pub mod amount_format;
pub mod chain_normalizer;
pub mod tx_hash_validator;

pub use address_validator::{validate_address, validate_address_as, AddressValidator};
pub use tx_hash_validator::validate_transaction_hash;
