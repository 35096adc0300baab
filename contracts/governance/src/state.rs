use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Empty};
use cw_storage_plus::{Item, Map};
use serde::{Deserialize, Serialize};

use crate::quorum::QuorumPolicy;

#[cw_serde]
pub struct Config {
    pub quorum: QuorumPolicy,
    /// When set, only admins may open proposals; otherwise any member may.
    pub admin_proposals: bool,
}

/// Membership record. Never deleted once created; demotion only clears
/// `is_admin`, so historical proposals keep pointing at a valid record.
#[derive(Serialize, Deserialize)]
pub struct MemberState {
    pub is_member: bool,
    pub is_admin: bool,
    pub joined_height: u64,
}

#[cw_serde]
pub enum ProposalKind {
    AddAdmin,
    RemoveAdmin,
    AddMember,
}

impl ProposalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProposalKind::AddAdmin => "add-admin",
            ProposalKind::RemoveAdmin => "remove-admin",
            ProposalKind::AddMember => "add-member",
        }
    }
}

#[cw_serde]
pub struct Proposal {
    pub kind: ProposalKind,
    pub target: Addr,
    pub proposer: Addr,
    pub created_height: u64,
    pub executed: bool,
}

pub const CONFIG: Item<Config> = Item::new("config");
pub const MEMBERS: Map<&Addr, MemberState> = Map::new("members");
/// Enumerable admin list. Must agree with the `is_admin` flags in MEMBERS
/// at all times; only `registry` touches it.
pub const ADMIN_LIST: Item<Vec<Addr>> = Item::new("admin_list");
pub const PROPOSALS: Map<u64, Proposal> = Map::new("proposals");
pub const NEXT_PROPOSAL_ID: Item<u64> = Item::new("next_proposal_id");
pub const VOTES: Map<(u64, &Addr), Empty> = Map::new("votes");
pub const TALLIES: Map<u64, u128> = Map::new("tallies");
