//! EcoDAO Proposal Registry
//!
//! Models the state-transition rules of the EcoDAO funding-proposal
//! contract: submitting green-energy funding proposals, updating them,
//! and querying them. The registry is a synchronous, single-caller
//! state machine over an in-memory record store plus a title index.
//!
//! Authority verification and fee settlement are injected through the
//! [`AuthorityDirectory`] and [`ValueTransferLedger`] traits so that
//! production directories and ledgers can be substituted for the
//! in-memory implementations shipped here.

pub mod authority;
pub mod error;
pub mod ledger;
pub mod proposal;
pub mod registry;

pub use authority::{AuthorityDirectory, StaticAuthoritySet};
pub use error::{RegistryError, Result};
pub use ledger::{InMemoryLedger, TransferRecord, ValueTransferLedger};
pub use proposal::{Proposal, ProposalDraft, ProposalStatus, ProposalUpdate, ProjectType};
pub use registry::{ProposalRegistry, RegistryConfig};

/// Registry constants
pub mod config {
    /// Default cap on proposals the registry will ever accept
    pub const DEFAULT_MAX_PROPOSALS: u64 = 1000;

    /// Default submission fee, transferred to the authority contract
    pub const DEFAULT_PROPOSAL_FEE: u64 = 1000;

    /// Title length cap (characters)
    pub const MAX_TITLE_LEN: usize = 100;

    /// Description length cap (characters)
    pub const MAX_DESCRIPTION_LEN: usize = 1000;

    /// Location length cap (characters)
    pub const MAX_LOCATION_LEN: usize = 100;

    /// Maximum milestones per proposal
    pub const MAX_MILESTONES: usize = 10;

    /// Length cap for the four supplementary detail fields (characters)
    pub const MAX_DETAIL_LEN: usize = 500;

    /// Quorum is a participation percentage, 1..=100
    pub const MAX_QUORUM: u64 = 100;

    /// Reserved null/burn principal; never a valid authority contract
    pub const NULL_PRINCIPAL: &str = "SP000000000000000000002Q6VF78";
}
