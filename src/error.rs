//! Registry error types
//!
//! Each rejection carries a fixed numeric code. The codes are the
//! contract's public vocabulary; existing callers switch on them, so
//! they must never be renumbered.

use thiserror::Error;

/// Proposal registry errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    #[error("caller is not a verified authority")]
    NotAuthorized,

    #[error("title must be non-empty and at most 100 characters")]
    InvalidTitle,

    #[error("description must be non-empty and at most 1000 characters")]
    InvalidDescription,

    #[error("funding goal must be positive")]
    InvalidFundingGoal,

    #[error("duration must be positive")]
    InvalidDuration,

    #[error("project type must be solar, wind, hydro or biomass")]
    InvalidProjectType,

    #[error("location must be non-empty and at most 100 characters")]
    InvalidLocation,

    #[error("proposals carry between 1 and 10 milestones")]
    InvalidMilestones,

    #[error("a proposal with this title already exists")]
    ProposalAlreadyExists,

    #[error("proposal not found")]
    ProposalNotFound,

    #[error("no authority contract is bound")]
    AuthorityNotVerified,

    #[error("voting must start in the future and end after it starts")]
    InvalidVotingPeriod,

    #[error("quorum is a percentage between 1 and 100")]
    InvalidQuorum,

    #[error("registry is at its proposal cap")]
    MaxProposalsExceeded,

    #[error("invalid update parameter")]
    InvalidUpdateParam,

    #[error("environment impact exceeds 500 characters")]
    InvalidEnvironmentImpact,

    #[error("cost breakdown exceeds 500 characters")]
    InvalidCostBreakdown,

    #[error("risk assessment exceeds 500 characters")]
    InvalidRiskAssessment,

    #[error("team details exceed 500 characters")]
    InvalidTeamDetails,
}

impl RegistryError {
    /// Stable numeric code understood by existing callers
    pub const fn code(&self) -> u32 {
        match self {
            RegistryError::NotAuthorized => 100,
            RegistryError::InvalidTitle => 101,
            RegistryError::InvalidDescription => 102,
            RegistryError::InvalidFundingGoal => 103,
            RegistryError::InvalidDuration => 104,
            RegistryError::InvalidProjectType => 105,
            RegistryError::InvalidLocation => 106,
            RegistryError::InvalidMilestones => 107,
            RegistryError::ProposalAlreadyExists => 108,
            RegistryError::ProposalNotFound => 109,
            RegistryError::AuthorityNotVerified => 111,
            RegistryError::InvalidVotingPeriod => 112,
            RegistryError::InvalidQuorum => 113,
            RegistryError::MaxProposalsExceeded => 114,
            RegistryError::InvalidUpdateParam => 115,
            RegistryError::InvalidEnvironmentImpact => 117,
            RegistryError::InvalidCostBreakdown => 118,
            RegistryError::InvalidRiskAssessment => 119,
            RegistryError::InvalidTeamDetails => 120,
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(RegistryError::NotAuthorized.code(), 100);
        assert_eq!(RegistryError::InvalidTitle.code(), 101);
        assert_eq!(RegistryError::InvalidDescription.code(), 102);
        assert_eq!(RegistryError::InvalidFundingGoal.code(), 103);
        assert_eq!(RegistryError::InvalidDuration.code(), 104);
        assert_eq!(RegistryError::InvalidProjectType.code(), 105);
        assert_eq!(RegistryError::InvalidLocation.code(), 106);
        assert_eq!(RegistryError::InvalidMilestones.code(), 107);
        assert_eq!(RegistryError::ProposalAlreadyExists.code(), 108);
        assert_eq!(RegistryError::ProposalNotFound.code(), 109);
        assert_eq!(RegistryError::AuthorityNotVerified.code(), 111);
        assert_eq!(RegistryError::InvalidVotingPeriod.code(), 112);
        assert_eq!(RegistryError::InvalidQuorum.code(), 113);
        assert_eq!(RegistryError::MaxProposalsExceeded.code(), 114);
        assert_eq!(RegistryError::InvalidUpdateParam.code(), 115);
        assert_eq!(RegistryError::InvalidEnvironmentImpact.code(), 117);
        assert_eq!(RegistryError::InvalidCostBreakdown.code(), 118);
        assert_eq!(RegistryError::InvalidRiskAssessment.code(), 119);
        assert_eq!(RegistryError::InvalidTeamDetails.code(), 120);
    }
}
