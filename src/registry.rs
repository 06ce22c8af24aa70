//! Proposal registry state machine
//!
//! All mutations run to completion against the in-memory state before
//! the next call is observed; a rejected call leaves the state
//! untouched. Validation runs in contract order and stops at the first
//! violated rule, so a payload breaking several rules reports the
//! earliest one.

use std::collections::HashMap;

use crate::authority::AuthorityDirectory;
use crate::config;
use crate::error::{RegistryError, Result};
use crate::ledger::ValueTransferLedger;
use crate::proposal::{Proposal, ProposalDraft, ProposalStatus, ProposalUpdate, ProjectType};

/// Runtime-tunable registry settings
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    pub max_proposals: u64,
    pub proposal_fee: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            max_proposals: config::DEFAULT_MAX_PROPOSALS,
            proposal_fee: config::DEFAULT_PROPOSAL_FEE,
        }
    }
}

/// The proposal registry
///
/// Owns every proposal record, the latest-edit audit records, and the
/// title index. The authority directory and the transfer ledger are
/// injected at construction.
pub struct ProposalRegistry<A, L> {
    authority: A,
    ledger: L,
    next_proposal_id: u64,
    max_proposals: u64,
    proposal_fee: u64,
    authority_contract: Option<String>,
    proposals: HashMap<u64, Proposal>,
    updates: HashMap<u64, ProposalUpdate>,
    by_title: HashMap<String, u64>,
    logical_time: u64,
}

impl<A, L> ProposalRegistry<A, L>
where
    A: AuthorityDirectory,
    L: ValueTransferLedger,
{
    pub fn new(authority: A, ledger: L) -> Self {
        Self::with_config(RegistryConfig::default(), authority, ledger)
    }

    pub fn with_config(config: RegistryConfig, authority: A, ledger: L) -> Self {
        Self {
            authority,
            ledger,
            next_proposal_id: 0,
            max_proposals: config.max_proposals,
            proposal_fee: config.proposal_fee,
            authority_contract: None,
            proposals: HashMap::new(),
            updates: HashMap::new(),
            by_title: HashMap::new(),
            logical_time: 0,
        }
    }

    /// Binds the one-time authority/fee-recipient contract.
    ///
    /// Rejects the reserved null principal and any re-binding attempt.
    pub fn bind_authority_contract(&mut self, principal: &str) -> bool {
        if principal == config::NULL_PRINCIPAL {
            log::debug!("rejected binding to the null principal");
            return false;
        }
        if self.authority_contract.is_some() {
            log::debug!("rejected re-binding of the authority contract");
            return false;
        }
        self.authority_contract = Some(principal.to_string());
        log::info!("authority contract bound to {}", principal);
        true
    }

    /// Overwrites the submission fee.
    ///
    /// Requires a bound authority contract; the amount itself is not
    /// validated (zero is accepted unchanged from the contract).
    pub fn set_proposal_fee(&mut self, new_fee: u64) -> bool {
        if self.authority_contract.is_none() {
            log::debug!("rejected fee change: no authority contract bound");
            return false;
        }
        self.proposal_fee = new_fee;
        log::info!("proposal fee set to {}", new_fee);
        true
    }

    /// Validates and registers a funding proposal, returning its id.
    ///
    /// On success the submission fee is recorded against the ledger
    /// before the record is committed, so audit logs show the transfer
    /// first.
    pub fn create_proposal(&mut self, caller: &str, draft: ProposalDraft) -> Result<u64> {
        match self.try_create(caller, draft) {
            Ok(id) => {
                log::info!("proposal {} registered by {}", id, caller);
                Ok(id)
            }
            Err(err) => {
                log::debug!("proposal from {} rejected: {} (code {})", caller, err, err.code());
                Err(err)
            }
        }
    }

    fn try_create(&mut self, caller: &str, draft: ProposalDraft) -> Result<u64> {
        if self.next_proposal_id >= self.max_proposals {
            return Err(RegistryError::MaxProposalsExceeded);
        }
        if draft.title.is_empty() || draft.title.chars().count() > config::MAX_TITLE_LEN {
            return Err(RegistryError::InvalidTitle);
        }
        if draft.description.is_empty()
            || draft.description.chars().count() > config::MAX_DESCRIPTION_LEN
        {
            return Err(RegistryError::InvalidDescription);
        }
        if draft.funding_goal == 0 {
            return Err(RegistryError::InvalidFundingGoal);
        }
        if draft.duration == 0 {
            return Err(RegistryError::InvalidDuration);
        }
        let project_type: ProjectType = draft.project_type.parse()?;
        if draft.location.is_empty() || draft.location.chars().count() > config::MAX_LOCATION_LEN {
            return Err(RegistryError::InvalidLocation);
        }
        if draft.milestones.is_empty() || draft.milestones.len() > config::MAX_MILESTONES {
            return Err(RegistryError::InvalidMilestones);
        }
        if draft.voting_start <= self.logical_time || draft.voting_end <= draft.voting_start {
            return Err(RegistryError::InvalidVotingPeriod);
        }
        if draft.quorum == 0 || draft.quorum > config::MAX_QUORUM {
            return Err(RegistryError::InvalidQuorum);
        }
        if draft.environment_impact.chars().count() > config::MAX_DETAIL_LEN {
            return Err(RegistryError::InvalidEnvironmentImpact);
        }
        if draft.cost_breakdown.chars().count() > config::MAX_DETAIL_LEN {
            return Err(RegistryError::InvalidCostBreakdown);
        }
        if draft.risk_assessment.chars().count() > config::MAX_DETAIL_LEN {
            return Err(RegistryError::InvalidRiskAssessment);
        }
        if draft.team_details.chars().count() > config::MAX_DETAIL_LEN {
            return Err(RegistryError::InvalidTeamDetails);
        }
        if !self.authority.is_verified_authority(caller) {
            return Err(RegistryError::NotAuthorized);
        }
        if self.by_title.contains_key(&draft.title) {
            return Err(RegistryError::ProposalAlreadyExists);
        }
        let recipient = match &self.authority_contract {
            Some(principal) => principal.clone(),
            None => return Err(RegistryError::AuthorityNotVerified),
        };

        // Fee settles before the record commits.
        self.ledger.record(self.proposal_fee, caller, &recipient);

        let id = self.next_proposal_id;
        let title = draft.title;
        let proposal = Proposal {
            title: title.clone(),
            description: draft.description,
            funding_goal: draft.funding_goal,
            duration: draft.duration,
            project_type,
            location: draft.location,
            milestones: draft.milestones,
            timestamp: self.logical_time,
            proposer: caller.to_string(),
            status: ProposalStatus::Pending,
            voting_start: draft.voting_start,
            voting_end: draft.voting_end,
            quorum: draft.quorum,
            environment_impact: draft.environment_impact,
            cost_breakdown: draft.cost_breakdown,
            risk_assessment: draft.risk_assessment,
            team_details: draft.team_details,
        };
        self.proposals.insert(id, proposal);
        self.by_title.insert(title, id);
        self.next_proposal_id += 1;
        Ok(id)
    }

    pub fn get_proposal(&self, id: u64) -> Option<&Proposal> {
        self.proposals.get(&id)
    }

    /// Rewrites a proposal's title, description and funding goal.
    ///
    /// Only the original proposer may edit, the new title must not
    /// collide with a different proposal (keeping the current title is
    /// fine), and every other field is preserved. A successful edit
    /// overwrites the proposal's audit record.
    pub fn update_proposal(
        &mut self,
        caller: &str,
        id: u64,
        new_title: &str,
        new_description: &str,
        new_funding_goal: u64,
    ) -> bool {
        let Some(proposal) = self.proposals.get_mut(&id) else {
            log::debug!("rejected update of unknown proposal {}", id);
            return false;
        };
        if proposal.proposer != caller {
            log::debug!("rejected update of proposal {} by non-proposer {}", id, caller);
            return false;
        }
        if new_title.is_empty() || new_title.chars().count() > config::MAX_TITLE_LEN {
            return false;
        }
        if new_description.is_empty()
            || new_description.chars().count() > config::MAX_DESCRIPTION_LEN
        {
            return false;
        }
        if new_funding_goal == 0 {
            return false;
        }
        if let Some(&holder) = self.by_title.get(new_title) {
            if holder != id {
                return false;
            }
        }

        self.by_title.remove(&proposal.title);
        proposal.title = new_title.to_string();
        proposal.description = new_description.to_string();
        proposal.funding_goal = new_funding_goal;
        proposal.timestamp = self.logical_time;
        self.by_title.insert(new_title.to_string(), id);
        self.updates.insert(
            id,
            ProposalUpdate {
                title: new_title.to_string(),
                description: new_description.to_string(),
                funding_goal: new_funding_goal,
                updated_at: self.logical_time,
                updater: caller.to_string(),
            },
        );
        log::info!("proposal {} updated by {}", id, caller);
        true
    }

    /// Latest-edit audit record for a proposal, if it was ever updated
    pub fn get_proposal_update(&self, id: u64) -> Option<&ProposalUpdate> {
        self.updates.get(&id)
    }

    /// Total proposals ever created (the next-id counter)
    pub fn get_proposal_count(&self) -> u64 {
        self.next_proposal_id
    }

    pub fn check_proposal_existence(&self, title: &str) -> bool {
        self.by_title.contains_key(title)
    }

    pub fn proposal_fee(&self) -> u64 {
        self.proposal_fee
    }

    pub fn authority_contract(&self) -> Option<&str> {
        self.authority_contract.as_deref()
    }

    pub fn logical_time(&self) -> u64 {
        self.logical_time
    }

    /// Advances the logical clock; timestamps and voting-window checks
    /// read it.
    pub fn advance_time(&mut self, steps: u64) {
        self.logical_time += steps;
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::authority::StaticAuthoritySet;
    use crate::ledger::InMemoryLedger;

    fn registry() -> ProposalRegistry<StaticAuthoritySet, InMemoryLedger> {
        let mut authorities = StaticAuthoritySet::new();
        authorities.grant("ST1TEST");
        ProposalRegistry::new(authorities, InMemoryLedger::new())
    }

    fn draft(title: &str) -> ProposalDraft {
        ProposalDraft {
            title: title.to_string(),
            description: "Build solar panels".to_string(),
            funding_goal: 100_000,
            duration: 365,
            project_type: "solar".to_string(),
            location: "Desert Area".to_string(),
            milestones: vec!["Site prep".to_string(), "Installation".to_string()],
            voting_start: 10,
            voting_end: 20,
            quorum: 50,
            environment_impact: "Reduces CO2".to_string(),
            cost_breakdown: "Panels: 50k".to_string(),
            risk_assessment: "Weather risks".to_string(),
            team_details: "Team of 5".to_string(),
        }
    }

    #[test]
    fn test_bind_authority_contract_once() {
        let mut registry = registry();
        assert!(registry.bind_authority_contract("ST2TEST"));
        assert_eq!(registry.authority_contract(), Some("ST2TEST"));

        // not re-bindable
        assert!(!registry.bind_authority_contract("ST3TEST"));
        assert_eq!(registry.authority_contract(), Some("ST2TEST"));
    }

    #[test]
    fn test_null_principal_cannot_be_bound() {
        let mut registry = registry();
        assert!(!registry.bind_authority_contract(config::NULL_PRINCIPAL));
        assert_eq!(registry.authority_contract(), None);

        // a normal bind afterwards still works
        assert!(registry.bind_authority_contract("ST2TEST"));
    }

    #[test]
    fn test_fee_change_requires_binding() {
        let mut registry = registry();
        assert!(!registry.set_proposal_fee(2000));
        assert_eq!(registry.proposal_fee(), 1000);

        registry.bind_authority_contract("ST2TEST");
        assert!(registry.set_proposal_fee(2000));
        assert_eq!(registry.proposal_fee(), 2000);

        // unchecked by design: zero is accepted
        assert!(registry.set_proposal_fee(0));
        assert_eq!(registry.proposal_fee(), 0);
    }

    #[test]
    fn test_ids_are_dense_from_zero() {
        let mut registry = registry();
        registry.bind_authority_contract("ST2TEST");

        assert_eq!(registry.create_proposal("ST1TEST", draft("One")), Ok(0));
        assert_eq!(registry.create_proposal("ST1TEST", draft("Two")), Ok(1));
        assert_eq!(registry.create_proposal("ST1TEST", draft("Three")), Ok(2));
        assert_eq!(registry.get_proposal_count(), 3);
    }

    #[test]
    fn test_update_rekeys_title_index() {
        let mut registry = registry();
        registry.bind_authority_contract("ST2TEST");
        registry.create_proposal("ST1TEST", draft("Old Title")).unwrap();

        assert!(registry.update_proposal("ST1TEST", 0, "New Title", "New desc", 2000));
        assert!(!registry.check_proposal_existence("Old Title"));
        assert!(registry.check_proposal_existence("New Title"));
    }

    #[test]
    fn test_voting_window_tracks_logical_clock() {
        let mut registry = registry();
        registry.bind_authority_contract("ST2TEST");
        registry.advance_time(10);

        // voting_start of 10 is no longer in the future
        assert_eq!(
            registry.create_proposal("ST1TEST", draft("Late")),
            Err(RegistryError::InvalidVotingPeriod)
        );

        let mut ok = draft("On Time");
        ok.voting_start = 11;
        ok.voting_end = 21;
        let id = registry.create_proposal("ST1TEST", ok).unwrap();
        assert_eq!(registry.get_proposal(id).unwrap().timestamp, 10);
    }
}
