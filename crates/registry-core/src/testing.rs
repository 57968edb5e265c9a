//! Test support shared by the registry programs.
//!
//! [`TestAccount`] backs an [`AccountInfo`] with memory laid out the way the
//! runtime serializes accounts (length slots in front of the key and the
//! data), so instruction code that loads, writes back or closes accounts can
//! run in a plain `cargo test`.

use anchor_lang::prelude::*;

/// Numeric code of an Anchor error, for comparing against `u32::from(MyError::Variant)`
pub fn error_code(err: anchor_lang::error::Error) -> u32 {
    match err {
        anchor_lang::error::Error::AnchorError(e) => e.error_code_number,
        anchor_lang::error::Error::ProgramError(e) => panic!("unexpected program error: {e:?}"),
    }
}

const DATA_CAPACITY: usize = 1024;

/// `AccountInfo::resize` reads the original data length from the 4 bytes
/// before the key
#[repr(C)]
struct PrefixedKey {
    original_data_len: u32,
    key: Pubkey,
}

/// `AccountInfo::resize` writes the new data length into the 8 bytes before
/// the data
#[repr(C, align(8))]
struct PrefixedData {
    len: u64,
    bytes: [u8; DATA_CAPACITY],
}

pub struct TestAccount {
    key: PrefixedKey,
    lamports: u64,
    data: PrefixedData,
    data_len: usize,
    owner: Pubkey,
}

impl TestAccount {
    /// Address with nothing created at it
    pub fn empty(key: Pubkey) -> Self {
        Self {
            key: PrefixedKey {
                original_data_len: 0,
                key,
            },
            lamports: 0,
            data: PrefixedData {
                len: 0,
                bytes: [0u8; DATA_CAPACITY],
            },
            data_len: 0,
            owner: System::id(),
        }
    }

    /// System-owned account holding only lamports
    pub fn wallet(key: Pubkey, lamports: u64) -> Self {
        Self {
            lamports,
            ..Self::empty(key)
        }
    }

    /// Program account at `key` holding `value`, owned by `T`'s program
    pub fn holding<T: AccountSerialize + anchor_lang::Owner>(
        key: Pubkey,
        value: &T,
        lamports: u64,
    ) -> Self {
        let mut buffer = Vec::new();
        value.try_serialize(&mut buffer).unwrap();

        let mut account = Self::wallet(key, lamports);
        account.data.bytes[..buffer.len()].copy_from_slice(&buffer);
        account.data.len = buffer.len() as u64;
        account.key.original_data_len = buffer.len() as u32;
        account.data_len = buffer.len();
        account.owner = T::owner();
        account
    }

    /// Writable, non-signer view of the account
    pub fn info(&mut self) -> AccountInfo<'_> {
        AccountInfo::new(
            &self.key.key,
            false,
            true,
            &mut self.lamports,
            &mut self.data.bytes[..self.data_len],
            &self.owner,
            false,
            0,
        )
    }
}
