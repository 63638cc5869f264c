pub mod address_patterns;
pub mod explorer;
pub mod network;
pub mod results;
pub mod tx_patterns;

pub use address_patterns::{detect_blockchain, detect_blockchain_as};
pub use explorer::{explorer_url, tx_explorer_url};
pub use network::{format_blockchain_name, supported_blockchains, NetworkId, SupportedBlockchain};
pub use results::{
    AddressValidationResult, AddressVerificationResult, TransactionValidationResult,
    TransactionVerificationResult,
};
