use cosmwasm_schema::cw_serde;

/// Pass/hold policy, fixed at instantiation.
#[cw_serde]
pub enum QuorumPolicy {
    /// Strict majority of the current admin set.
    Majority,
    /// Fixed number of votes, independent of the admin count.
    Fixed { threshold: u128 },
}

/// Whether `tally` votes are enough to execute. `live_admin_count` is the
/// admin-set size at the moment of the vote being processed, never a
/// snapshot taken at proposal creation.
pub fn reached(policy: &QuorumPolicy, tally: u128, live_admin_count: u128) -> bool {
    match policy {
        QuorumPolicy::Majority => tally * 2 > live_admin_count,
        QuorumPolicy::Fixed { threshold } => tally >= *threshold,
    }
}
