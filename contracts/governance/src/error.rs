use cosmwasm_std::StdError;
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    StdError(#[from] StdError),
    #[error("Payment error: {0}")]
    PaymentError(#[from] PaymentError),
    #[error("Caller is not allowed to perform this action")]
    Unauthorized(),
    #[error("Proposal not found")]
    ProposalNotFound(),
    #[error("Member not found")]
    MemberNotFound(),
    #[error("Proposal has already been executed")]
    AlreadyExecuted(),
    #[error("You have already voted on this proposal")]
    AlreadyVoted(),
    #[error("Account is already an admin")]
    AlreadyAdmin(),
    #[error("Account is already a member")]
    AlreadyMember(),
    #[error("Account is not an admin")]
    NotAnAdmin(),
    #[error("An admin cannot propose their own removal")]
    SelfRemoval(),
    #[error("The contract needs at least 1 admin")]
    LastAdmin(),
}
