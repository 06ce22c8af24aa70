//! Proposal record types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RegistryError;

/// Category of green-energy project a proposal funds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Solar,
    Wind,
    Hydro,
    Biomass,
}

impl ProjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Solar => "solar",
            ProjectType::Wind => "wind",
            ProjectType::Hydro => "hydro",
            ProjectType::Biomass => "biomass",
        }
    }
}

impl FromStr for ProjectType {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solar" => Ok(ProjectType::Solar),
            "wind" => Ok(ProjectType::Wind),
            "hydro" => Ok(ProjectType::Hydro),
            "biomass" => Ok(ProjectType::Biomass),
            _ => Err(RegistryError::InvalidProjectType),
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Proposal lifecycle states
///
/// This registry only ever assigns [`ProposalStatus::Pending`]; the
/// remaining transitions belong to the voting and execution phases,
/// which live outside the registry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProposalStatus {
    /// Registered, waiting for its voting window
    Pending,
    /// Voting window open
    Active,
    /// Quorum reached, approved
    Passed,
    /// Rejected or expired without quorum
    Failed,
    /// Funds released
    Executed,
}

/// A registered funding request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Proposal {
    pub title: String,
    pub description: String,
    pub funding_goal: u64,
    /// Project runtime in days
    pub duration: u64,
    pub project_type: ProjectType,
    pub location: String,
    pub milestones: Vec<String>,
    /// Logical time of creation, refreshed by a successful update
    pub timestamp: u64,
    pub proposer: String,
    pub status: ProposalStatus,
    pub voting_start: u64,
    pub voting_end: u64,
    /// Minimum participation percentage, 1..=100
    pub quorum: u64,
    pub environment_impact: String,
    pub cost_breakdown: String,
    pub risk_assessment: String,
    pub team_details: String,
}

/// Audit record of the most recent edit to a proposal
///
/// At most one exists per proposal id; a later edit overwrites it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProposalUpdate {
    pub title: String,
    pub description: String,
    pub funding_goal: u64,
    pub updated_at: u64,
    pub updater: String,
}

/// Submission parameters for [`create_proposal`]
///
/// Fields arrive unvalidated — the project type is still a wire string —
/// and are checked in contract order when the draft is submitted.
///
/// [`create_proposal`]: crate::registry::ProposalRegistry::create_proposal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposalDraft {
    pub title: String,
    pub description: String,
    pub funding_goal: u64,
    pub duration: u64,
    pub project_type: String,
    pub location: String,
    pub milestones: Vec<String>,
    pub voting_start: u64,
    pub voting_end: u64,
    pub quorum: u64,
    pub environment_impact: String,
    pub cost_breakdown: String,
    pub risk_assessment: String,
    pub team_details: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_type_parses_wire_words() {
        assert_eq!("solar".parse::<ProjectType>().unwrap(), ProjectType::Solar);
        assert_eq!("wind".parse::<ProjectType>().unwrap(), ProjectType::Wind);
        assert_eq!("hydro".parse::<ProjectType>().unwrap(), ProjectType::Hydro);
        assert_eq!(
            "biomass".parse::<ProjectType>().unwrap(),
            ProjectType::Biomass
        );

        assert_eq!(
            "geothermal".parse::<ProjectType>(),
            Err(RegistryError::InvalidProjectType)
        );
        // case-sensitive, like the contract
        assert_eq!(
            "Solar".parse::<ProjectType>(),
            Err(RegistryError::InvalidProjectType)
        );
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&ProposalStatus::Pending).unwrap();
        assert_eq!(json, "\"pending\"");

        let json = serde_json::to_string(&ProjectType::Biomass).unwrap();
        assert_eq!(json, "\"biomass\"");
    }
}
