//! Account data structures.
//!
//! Mirrors the `frame_system::AccountInfo` / `pallet_balances::AccountData` pair stored
//! under `System.Account`.

use serde::{Deserialize, Serialize};

/// Account information stored under `System.Account`
///
/// Accounts without a storage entry are represented by the all-zero default, which is
/// what the chain itself reports for them.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AccountInfo {
	/// Number of transactions the account has sent
	pub nonce: u32,
	/// Number of other modules that currently depend on this account's existence
	pub consumers: u32,
	/// Number of other modules that allow this account to exist
	pub providers: u32,
	/// Number of modules that allow this account to exist for their own purposes only
	pub sufficients: u32,
	/// Balances of the account
	pub data: AccountData,
}

/// Balances of an account
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AccountData {
	/// Balance that can be transferred or reserved
	pub free: u128,
	/// Balance held by other modules
	pub reserved: u128,
	/// Balance that cannot be used for transfers
	pub frozen: u128,
}
