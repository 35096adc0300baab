use cosmwasm_std::{Addr, StdError, StdResult, Storage};

use crate::error::ContractError;
use crate::state::{MemberState, ADMIN_LIST, MEMBERS};

pub fn is_member(storage: &dyn Storage, addr: &Addr) -> StdResult<bool> {
    Ok(MEMBERS
        .may_load(storage, addr)?
        .map_or(false, |m| m.is_member))
}

pub fn is_admin(storage: &dyn Storage, addr: &Addr) -> StdResult<bool> {
    Ok(MEMBERS
        .may_load(storage, addr)?
        .map_or(false, |m| m.is_admin))
}

pub fn admin_count(storage: &dyn Storage) -> StdResult<u128> {
    Ok(ADMIN_LIST.load(storage)?.len() as u128)
}

pub fn admins(storage: &dyn Storage) -> StdResult<Vec<Addr>> {
    ADMIN_LIST.load(storage)
}

/// Seeds the genesis admin set. Every genesis admin is also a member.
pub fn init(storage: &mut dyn Storage, admins: &[Addr], height: u64) -> Result<(), ContractError> {
    if admins.is_empty() {
        return Err(ContractError::LastAdmin());
    }
    for admin in admins {
        if MEMBERS.has(storage, admin) {
            return Err(ContractError::AlreadyAdmin());
        }
        MEMBERS.save(
            storage,
            admin,
            &MemberState {
                is_member: true,
                is_admin: true,
                joined_height: height,
            },
        )?;
    }
    ADMIN_LIST.save(storage, &admins.to_vec())?;
    Ok(())
}

pub fn add_member(storage: &mut dyn Storage, addr: &Addr, height: u64) -> Result<(), ContractError> {
    if is_member(storage, addr)? {
        return Err(ContractError::AlreadyMember());
    }
    MEMBERS.save(
        storage,
        addr,
        &MemberState {
            is_member: true,
            is_admin: false,
            joined_height: height,
        },
    )?;
    Ok(())
}

pub fn promote_to_admin(storage: &mut dyn Storage, addr: &Addr) -> Result<(), ContractError> {
    let mut member = MEMBERS
        .may_load(storage, addr)?
        .filter(|m| m.is_member)
        .ok_or(ContractError::MemberNotFound())?;
    if member.is_admin {
        return Err(ContractError::AlreadyAdmin());
    }
    member.is_admin = true;
    MEMBERS.save(storage, addr, &member)?;
    let mut admins = ADMIN_LIST.load(storage)?;
    admins.push(addr.clone());
    ADMIN_LIST.save(storage, &admins)?;
    Ok(())
}

/// Clears the admin flag and swap-removes the address from the enumerable
/// list in one step. Call sites must never touch the list directly.
pub fn demote_from_admin(storage: &mut dyn Storage, addr: &Addr) -> Result<(), ContractError> {
    let mut member = MEMBERS
        .may_load(storage, addr)?
        .ok_or(ContractError::NotAnAdmin())?;
    if !member.is_admin {
        return Err(ContractError::NotAnAdmin());
    }
    let mut admins = ADMIN_LIST.load(storage)?;
    if admins.len() == 1 {
        return Err(ContractError::LastAdmin());
    }
    let pos = admins
        .iter()
        .position(|a| a == addr)
        .ok_or_else(|| StdError::generic_err("admin flag set but address missing from list"))?;
    admins.swap_remove(pos);
    member.is_admin = false;
    MEMBERS.save(storage, addr, &member)?;
    ADMIN_LIST.save(storage, &admins)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::mock_dependencies;

    fn addrs(names: &[&str]) -> Vec<Addr> {
        names.iter().map(|n| Addr::unchecked(*n)).collect()
    }

    /// Flags and the enumerable list must tell the same story.
    fn assert_synchronized(storage: &dyn Storage, expected_admins: &[&str]) {
        let listed = admins(storage).unwrap();
        assert_eq!(listed.len(), expected_admins.len());
        for name in expected_admins {
            let addr = Addr::unchecked(*name);
            assert!(listed.contains(&addr));
            assert!(is_admin(storage, &addr).unwrap());
            assert!(is_member(storage, &addr).unwrap());
        }
    }

    #[test]
    fn test_init() {
        let mut deps = mock_dependencies();
        init(deps.as_mut().storage, &addrs(&["a", "b"]), 5).unwrap();
        assert_synchronized(deps.as_ref().storage, &["a", "b"]);
        assert_eq!(admin_count(deps.as_ref().storage).unwrap(), 2);
        assert!(!is_member(deps.as_ref().storage, &Addr::unchecked("c")).unwrap());
    }

    #[test]
    fn test_init_rejects_empty_and_duplicates() {
        let mut deps = mock_dependencies();
        let err = init(deps.as_mut().storage, &[], 5).unwrap_err();
        assert_eq!(ContractError::LastAdmin(), err);
        let err = init(deps.as_mut().storage, &addrs(&["a", "a"]), 5).unwrap_err();
        assert_eq!(ContractError::AlreadyAdmin(), err);
    }

    #[test]
    fn test_add_member() {
        let mut deps = mock_dependencies();
        init(deps.as_mut().storage, &addrs(&["a"]), 5).unwrap();
        let m = Addr::unchecked("m");
        add_member(deps.as_mut().storage, &m, 7).unwrap();
        assert!(is_member(deps.as_ref().storage, &m).unwrap());
        assert!(!is_admin(deps.as_ref().storage, &m).unwrap());

        let err = add_member(deps.as_mut().storage, &m, 8).unwrap_err();
        assert_eq!(ContractError::AlreadyMember(), err);
        let err = add_member(deps.as_mut().storage, &Addr::unchecked("a"), 8).unwrap_err();
        assert_eq!(ContractError::AlreadyMember(), err);
    }

    #[test]
    fn test_promote() {
        let mut deps = mock_dependencies();
        init(deps.as_mut().storage, &addrs(&["a"]), 5).unwrap();
        let m = Addr::unchecked("m");

        let err = promote_to_admin(deps.as_mut().storage, &m).unwrap_err();
        assert_eq!(ContractError::MemberNotFound(), err);

        add_member(deps.as_mut().storage, &m, 6).unwrap();
        promote_to_admin(deps.as_mut().storage, &m).unwrap();
        assert_synchronized(deps.as_ref().storage, &["a", "m"]);

        let err = promote_to_admin(deps.as_mut().storage, &m).unwrap_err();
        assert_eq!(ContractError::AlreadyAdmin(), err);
    }

    #[test]
    fn test_demote_swap_remove() {
        let mut deps = mock_dependencies();
        init(deps.as_mut().storage, &addrs(&["a", "b", "c"]), 5).unwrap();

        // Remove the middle element so the swap with the tail is exercised.
        demote_from_admin(deps.as_mut().storage, &Addr::unchecked("b")).unwrap();
        assert_synchronized(deps.as_ref().storage, &["a", "c"]);
        assert!(!is_admin(deps.as_ref().storage, &Addr::unchecked("b")).unwrap());
        // Demotion keeps the membership record.
        assert!(is_member(deps.as_ref().storage, &Addr::unchecked("b")).unwrap());

        let err = demote_from_admin(deps.as_mut().storage, &Addr::unchecked("b")).unwrap_err();
        assert_eq!(ContractError::NotAnAdmin(), err);
        let err = demote_from_admin(deps.as_mut().storage, &Addr::unchecked("x")).unwrap_err();
        assert_eq!(ContractError::NotAnAdmin(), err);
    }

    #[test]
    fn test_demote_last_admin() {
        let mut deps = mock_dependencies();
        init(deps.as_mut().storage, &addrs(&["a", "b"]), 5).unwrap();
        demote_from_admin(deps.as_mut().storage, &Addr::unchecked("a")).unwrap();

        let err = demote_from_admin(deps.as_mut().storage, &Addr::unchecked("b")).unwrap_err();
        assert_eq!(ContractError::LastAdmin(), err);
        assert_synchronized(deps.as_ref().storage, &["b"]);
    }
}
