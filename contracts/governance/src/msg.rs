use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;

use crate::quorum::QuorumPolicy;
use crate::state::ProposalKind;

#[cw_serde]
pub struct InstantiateMsg {
    pub admins: Vec<String>,
    pub quorum: QuorumPolicy,
    /// Restrict proposal creation to admins instead of all members.
    pub admin_proposals: bool,
}

#[cw_serde]
pub enum ExecuteMsg {
    Propose { kind: ProposalKind, target: String },
    Vote { proposal_id: u64 },
}

#[cw_serde]
pub struct MemberResponse {
    pub is_member: bool,
    pub is_admin: bool,
}

#[cw_serde]
pub struct AdminCountResponse {
    pub count: u128,
}

#[cw_serde]
pub struct AdminsResponse {
    pub admins: Vec<Addr>,
}

#[cw_serde]
pub struct ProposalResponse {
    pub kind: ProposalKind,
    pub target: Addr,
    pub proposer: Addr,
    pub created_height: u64,
    pub executed: bool,
    pub tally: u128,
}

#[cw_serde]
pub struct HasVotedResponse {
    pub voted: bool,
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(MemberResponse)]
    Member { addr: String },
    #[returns(AdminCountResponse)]
    AdminCount {},
    #[returns(AdminsResponse)]
    Admins {},
    #[returns(ProposalResponse)]
    Proposal { proposal_id: u64 },
    #[returns(HasVotedResponse)]
    HasVoted { proposal_id: u64, voter: String },
}
