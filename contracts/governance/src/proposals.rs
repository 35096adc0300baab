use cosmwasm_std::{Addr, Storage};

use crate::error::ContractError;
use crate::registry;
use crate::state::{Proposal, ProposalKind, NEXT_PROPOSAL_ID, PROPOSALS};

/// Appends a proposal and returns its id. A proposal whose target is already
/// in the desired end state is rejected here so it never wastes votes.
pub fn create(
    storage: &mut dyn Storage,
    kind: ProposalKind,
    target: Addr,
    proposer: Addr,
    height: u64,
) -> Result<u64, ContractError> {
    match kind {
        ProposalKind::AddAdmin => {
            if !registry::is_member(storage, &target)? {
                return Err(ContractError::MemberNotFound());
            }
            if registry::is_admin(storage, &target)? {
                return Err(ContractError::AlreadyAdmin());
            }
        }
        ProposalKind::RemoveAdmin => {
            if !registry::is_admin(storage, &target)? {
                return Err(ContractError::NotAnAdmin());
            }
            if target == proposer {
                return Err(ContractError::SelfRemoval());
            }
        }
        ProposalKind::AddMember => {
            if registry::is_member(storage, &target)? {
                return Err(ContractError::AlreadyMember());
            }
        }
    }

    let id = NEXT_PROPOSAL_ID.load(storage)?;
    NEXT_PROPOSAL_ID.save(storage, &(id + 1))?;
    PROPOSALS.save(
        storage,
        id,
        &Proposal {
            kind,
            target,
            proposer,
            created_height: height,
            executed: false,
        },
    )?;
    Ok(id)
}

pub fn get(storage: &dyn Storage, id: u64) -> Result<Proposal, ContractError> {
    PROPOSALS
        .may_load(storage, id)?
        .ok_or(ContractError::ProposalNotFound())
}

/// Strict single-shot transition; a second call is a caller bug and errors.
pub fn mark_executed(storage: &mut dyn Storage, id: u64) -> Result<(), ContractError> {
    let mut proposal = get(storage, id)?;
    if proposal.executed {
        return Err(ContractError::AlreadyExecuted());
    }
    proposal.executed = true;
    PROPOSALS.save(storage, id, &proposal)?;
    Ok(())
}
