use anchor_lang::prelude::*;

/// Whether `info` holds a live account of type `T`: owned by `T`'s program and
/// not closed.
pub fn is_live<T: anchor_lang::Owner>(info: &AccountInfo) -> bool {
    info.owner == &T::owner() && !info.data_is_empty()
}

/// Deserialize a program-owned account that may not exist yet (or any more).
///
/// Returns `None` for accounts that were never created or were closed, so
/// callers can report their own "does not exist" error instead of Anchor's
/// generic account errors.
pub fn load_if_exists<T>(info: &AccountInfo) -> Result<Option<T>>
where
    T: AccountDeserialize + anchor_lang::Owner,
{
    if !is_live::<T>(info) {
        return Ok(None);
    }

    let data = info.try_borrow_data()?;
    let mut bytes: &[u8] = &data;
    T::try_deserialize(&mut bytes).map(Some)
}

/// Like [`load_if_exists`], but yields a typed [`Account`] that can be written
/// back with `exit` or closed with `close`.
pub fn open_if_exists<'info, T>(info: AccountInfo<'info>) -> Result<Option<Account<'info, T>>>
where
    T: AccountSerialize + AccountDeserialize + anchor_lang::Owner + Clone,
{
    if !is_live::<T>(&info) {
        return Ok(None);
    }

    // `Account` borrows its info for 'info. The program heap is never freed
    // within an instruction, so the box lives exactly as long as the accounts.
    let info: &'info AccountInfo<'info> = Box::leak(Box::new(info));
    Account::try_from(info).map(Some)
}
