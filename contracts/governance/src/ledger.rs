use cosmwasm_std::{Addr, Empty, StdResult, Storage};

use crate::error::ContractError;
use crate::state::{TALLIES, VOTES};

pub fn has_voted(storage: &dyn Storage, proposal_id: u64, voter: &Addr) -> bool {
    VOTES.has(storage, (proposal_id, voter))
}

pub fn tally(storage: &dyn Storage, proposal_id: u64) -> StdResult<u128> {
    Ok(TALLIES.may_load(storage, proposal_id)?.unwrap_or(0))
}

/// Records a yes-vote and returns the new tally. Votes are never removed or
/// overwritten, so the tally only ever grows.
pub fn record_vote(
    storage: &mut dyn Storage,
    proposal_id: u64,
    voter: &Addr,
) -> Result<u128, ContractError> {
    if has_voted(storage, proposal_id, voter) {
        return Err(ContractError::AlreadyVoted());
    }
    VOTES.save(storage, (proposal_id, voter), &Empty {})?;
    let tally = tally(storage, proposal_id)? + 1;
    TALLIES.save(storage, proposal_id, &tally)?;
    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::mock_dependencies;

    #[test]
    fn test_record_vote() {
        let mut deps = mock_dependencies();
        let a = Addr::unchecked("a");
        let b = Addr::unchecked("b");

        assert_eq!(tally(deps.as_ref().storage, 1).unwrap(), 0);
        assert!(!has_voted(deps.as_ref().storage, 1, &a));

        assert_eq!(record_vote(deps.as_mut().storage, 1, &a).unwrap(), 1);
        assert!(has_voted(deps.as_ref().storage, 1, &a));

        let err = record_vote(deps.as_mut().storage, 1, &a).unwrap_err();
        assert_eq!(ContractError::AlreadyVoted(), err);
        assert_eq!(tally(deps.as_ref().storage, 1).unwrap(), 1);

        assert_eq!(record_vote(deps.as_mut().storage, 1, &b).unwrap(), 2);
        // Proposals are tracked independently.
        assert_eq!(record_vote(deps.as_mut().storage, 2, &a).unwrap(), 1);
        assert_eq!(tally(deps.as_ref().storage, 1).unwrap(), 2);
    }
}
