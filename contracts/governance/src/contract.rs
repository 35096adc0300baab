use crate::{error::ContractError, ledger, msg::*, proposals, quorum, registry, state::*};
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, Event, MessageInfo, Response, StdResult,
};

pub fn instantiate(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let admins = msg
        .admins
        .iter()
        .map(|addr| deps.api.addr_validate(addr))
        .collect::<StdResult<Vec<_>>>()?;
    registry::init(deps.storage, &admins, env.block.height)?;
    NEXT_PROPOSAL_ID.save(deps.storage, &1)?;
    CONFIG.save(
        deps.storage,
        &Config {
            quorum: msg.quorum,
            admin_proposals: msg.admin_proposals,
        },
    )?;

    let mut resp = Response::new();
    for admin in admins {
        resp = resp.add_event(Event::new("admin-added").add_attribute("admin", admin));
    }
    Ok(resp)
}

pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    use ExecuteMsg::*;
    match msg {
        Propose { kind, target } => execute::propose(deps, env, info, kind, target),
        Vote { proposal_id } => execute::vote(deps, env, info, proposal_id),
    }
}

mod execute {
    use super::*;

    pub fn propose(
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        kind: ProposalKind,
        target: String,
    ) -> Result<Response, ContractError> {
        cw_utils::nonpayable(&info)?;
        let config = CONFIG.load(deps.storage)?;
        let allowed = if config.admin_proposals {
            registry::is_admin(deps.storage, &info.sender)?
        } else {
            registry::is_member(deps.storage, &info.sender)?
        };
        if !allowed {
            return Err(ContractError::Unauthorized());
        }

        let target = deps.api.addr_validate(&target)?;
        let id = proposals::create(
            deps.storage,
            kind.clone(),
            target.clone(),
            info.sender.clone(),
            env.block.height,
        )?;

        let resp = Response::new().add_event(
            Event::new("proposal-created")
                .add_attribute("id", id.to_string())
                .add_attribute("kind", kind.as_str())
                .add_attribute("target", target)
                .add_attribute("proposer", info.sender),
        );
        Ok(resp)
    }

    /// Voting rights are restricted to admins: the quorum denominator is the
    /// live admin count, so only admin votes carry weight.
    pub fn vote(
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        proposal_id: u64,
    ) -> Result<Response, ContractError> {
        cw_utils::nonpayable(&info)?;
        if !registry::is_admin(deps.storage, &info.sender)? {
            return Err(ContractError::Unauthorized());
        }

        let proposal = proposals::get(deps.storage, proposal_id)?;
        if proposal.executed {
            return Err(ContractError::AlreadyExecuted());
        }

        let tally = ledger::record_vote(deps.storage, proposal_id, &info.sender)?;
        let resp = Response::new().add_event(
            Event::new("voted")
                .add_attribute("id", proposal_id.to_string())
                .add_attribute("voter", info.sender),
        );

        let config = CONFIG.load(deps.storage)?;
        let live_admin_count = registry::admin_count(deps.storage)?;
        if !quorum::reached(&config.quorum, tally, live_admin_count) {
            return Ok(resp);
        }

        // Apply the mutation and flip the executed flag in the same message,
        // so a failure in either reverts the whole call, this vote included,
        // and the proposal stays open.
        match &proposal.kind {
            ProposalKind::AddAdmin => registry::promote_to_admin(deps.storage, &proposal.target)?,
            ProposalKind::RemoveAdmin => {
                registry::demote_from_admin(deps.storage, &proposal.target)?
            }
            ProposalKind::AddMember => {
                registry::add_member(deps.storage, &proposal.target, env.block.height)?
            }
        }
        proposals::mark_executed(deps.storage, proposal_id)?;

        let resp = resp.add_event(
            Event::new("executed")
                .add_attribute("id", proposal_id.to_string())
                .add_attribute("kind", proposal.kind.as_str())
                .add_attribute("target", proposal.target),
        );
        Ok(resp)
    }
}

pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    use QueryMsg::*;
    match msg {
        Member { addr } => to_json_binary(&query::member(deps, &addr)?),
        AdminCount {} => to_json_binary(&query::admin_count(deps)?),
        Admins {} => to_json_binary(&query::admins(deps)?),
        Proposal { proposal_id } => to_json_binary(&query::proposal(deps, proposal_id)?),
        HasVoted { proposal_id, voter } => {
            to_json_binary(&query::has_voted(deps, proposal_id, &voter)?)
        }
    }
}

mod query {
    use super::*;

    pub fn member(deps: Deps, addr: &str) -> StdResult<MemberResponse> {
        let addr = deps.api.addr_validate(addr)?;
        Ok(MemberResponse {
            is_member: registry::is_member(deps.storage, &addr)?,
            is_admin: registry::is_admin(deps.storage, &addr)?,
        })
    }

    pub fn admin_count(deps: Deps) -> StdResult<AdminCountResponse> {
        Ok(AdminCountResponse {
            count: registry::admin_count(deps.storage)?,
        })
    }

    pub fn admins(deps: Deps) -> StdResult<AdminsResponse> {
        Ok(AdminsResponse {
            admins: registry::admins(deps.storage)?,
        })
    }

    pub fn proposal(deps: Deps, proposal_id: u64) -> StdResult<ProposalResponse> {
        let proposal = PROPOSALS.load(deps.storage, proposal_id)?;
        Ok(ProposalResponse {
            kind: proposal.kind,
            target: proposal.target,
            proposer: proposal.proposer,
            created_height: proposal.created_height,
            executed: proposal.executed,
            tally: ledger::tally(deps.storage, proposal_id)?,
        })
    }

    pub fn has_voted(deps: Deps, proposal_id: u64, voter: &str) -> StdResult<HasVotedResponse> {
        let voter = deps.api.addr_validate(voter)?;
        Ok(HasVotedResponse {
            voted: ledger::has_voted(deps.storage, proposal_id, &voter),
        })
    }
}
