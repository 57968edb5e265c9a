//! Pack → Gear exchange scenarios.
//!
//! `Exchange` drives both registries through the same state transitions the
//! instructions apply, including the Gear registry's signer check on the
//! nested mint. Each call runs against a draft copy that is only committed on
//! success, the way a failed transaction leaves no account writes behind.

use std::collections::HashMap;

use anchor_lang::prelude::*;
use gear_registry::state::{GearBalance, GearToken, RegistryState as GearRegistryState};
use registry_core::{Authority, CoreError, TokenSequence, NULL_ACCOUNT};

use registry_core::testing::error_code;
use crate::errors::PackError;
use crate::state::{OperatorApproval, PackBalance, PackToken, RegistryState};

const URI: &str = "https://uri.here";

#[derive(Clone)]
struct Exchange {
    pack: RegistryState,
    gear: GearRegistryState,
    /// PDA the Pack program signs Gear mints with
    pack_signer: Pubkey,
    packs: HashMap<u64, PackToken>,
    pack_balances: HashMap<Pubkey, PackBalance>,
    operators: HashMap<(Pubkey, Pubkey), OperatorApproval>,
    gears: HashMap<u64, GearToken>,
    gear_balances: HashMap<Pubkey, GearBalance>,
}

impl Exchange {
    /// Both registries initialized by `deployer`, Gear authority not yet handed over
    fn deploy(deployer: Pubkey) -> Self {
        let (pack_signer, pack_bump) =
            Pubkey::find_program_address(&[RegistryState::SEED_PREFIX], &crate::ID);
        let (gear_registry, gear_bump) =
            Pubkey::find_program_address(&[GearRegistryState::SEED_PREFIX], &gear_registry::ID);

        Self {
            pack: RegistryState {
                authority: Authority::new(deployer),
                sequence: TokenSequence::new(),
                gear_registry,
                bump: pack_bump,
            },
            gear: GearRegistryState {
                authority: Authority::new(deployer),
                sequence: TokenSequence::new(),
                bump: gear_bump,
            },
            pack_signer,
            packs: HashMap::new(),
            pack_balances: HashMap::new(),
            operators: HashMap::new(),
            gears: HashMap::new(),
            gear_balances: HashMap::new(),
        }
    }

    /// Deploy and complete setup by making the Pack registry the Gear minter
    fn deploy_and_delegate(deployer: Pubkey) -> Self {
        let mut exchange = Self::deploy(deployer);
        let pack_signer = exchange.pack_signer;
        exchange
            .atomically(|draft| draft.gear.authority.transfer(&deployer, pack_signer))
            .unwrap();
        exchange
    }

    fn atomically<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let mut draft = self.clone();
        let out = f(&mut draft)?;
        *self = draft;
        Ok(out)
    }

    fn mint_pack(&mut self, caller: Pubkey, recipient: Pubkey, uri: &str) -> Result<u64> {
        self.atomically(|draft| {
            draft.pack.authority.require_owner(&caller)?;

            let mut pack = PackToken {
                token_id: 0,
                holder: NULL_ACCOUNT,
                approved: NULL_ACCOUNT,
                uri: String::new(),
                minted_at: 0,
                bump: 0,
            };
            let balance = draft
                .pack_balances
                .entry(recipient)
                .or_insert_with(|| PackBalance { holder: recipient, count: 0, bump: 0 });

            let token_id = draft
                .pack
                .record_mint(&mut pack, balance, recipient, uri.to_string(), 0)?;
            draft.packs.insert(token_id, pack);
            Ok(token_id)
        })
    }

    /// Returns the id of the Gear issued to the former holder
    fn burn_pack(&mut self, caller: Pubkey, token_id: u64) -> Result<u64> {
        self.atomically(|draft| {
            require!(
                draft.pack.sequence.was_issued(token_id),
                PackError::TokenDoesNotExist
            );
            let pack = draft
                .packs
                .remove(&token_id)
                .ok_or(PackError::TokenDoesNotExist)?;

            let is_operator = draft
                .operators
                .get(&(pack.holder, caller))
                .is_some_and(|approval| approval.approved);
            let balance = draft
                .pack_balances
                .get_mut(&pack.holder)
                .ok_or(PackError::HolderMismatch)?;
            let holder = draft.pack.record_burn(&caller, &pack, balance, is_operator)?;

            draft.gear.authority.require_owner(&draft.pack_signer)?;

            let mut gear = GearToken {
                token_id: 0,
                holder: NULL_ACCOUNT,
                minted_at: 0,
                bump: 0,
            };
            let gear_balance = draft
                .gear_balances
                .entry(holder)
                .or_insert_with(|| GearBalance { holder, count: 0, bump: 0 });
            let gear_id = draft.gear.record_mint(&mut gear, gear_balance, holder, 0)?;
            draft.gears.insert(gear_id, gear);
            Ok(gear_id)
        })
    }

    fn approve(&mut self, caller: Pubkey, token_id: u64, approved: Pubkey) -> Result<()> {
        self.atomically(|draft| {
            let pack = draft
                .packs
                .get_mut(&token_id)
                .ok_or(PackError::TokenDoesNotExist)?;
            let is_operator = draft
                .operators
                .get(&(pack.holder, caller))
                .is_some_and(|approval| approval.approved);
            require!(
                pack.can_approve(&caller, is_operator),
                PackError::NotAuthorizedToApprove
            );
            pack.approved = approved;
            Ok(())
        })
    }

    fn set_approval_for_all(
        &mut self,
        holder: Pubkey,
        operator: Pubkey,
        approved: bool,
    ) -> Result<()> {
        self.atomically(|draft| {
            draft
                .operators
                .entry((holder, operator))
                .or_insert_with(|| OperatorApproval {
                    holder: NULL_ACCOUNT,
                    operator: NULL_ACCOUNT,
                    approved: false,
                    bump: 0,
                })
                .set(holder, operator, approved, 0)
        })
    }

    fn pack_balance(&self, holder: &Pubkey) -> u64 {
        self.pack_balances.get(holder).map_or(0, |b| b.count)
    }

    fn gear_balance(&self, holder: &Pubkey) -> u64 {
        self.gear_balances.get(holder).map_or(0, |b| b.count)
    }

    fn assert_supply_matches_balances(&self) {
        let packs: u64 = self.pack_balances.values().map(|b| b.count).sum();
        let gears: u64 = self.gear_balances.values().map(|b| b.count).sum();
        assert_eq!(packs, self.pack.sequence.live_supply);
        assert_eq!(packs, self.packs.len() as u64);
        assert_eq!(gears, self.gear.sequence.live_supply);
        assert_eq!(gears, self.gears.len() as u64);
    }
}

struct Actors {
    owner: Pubkey,
    holder: Pubkey,
    stranger: Pubkey,
}

fn actors() -> Actors {
    Actors {
        owner: Pubkey::new_unique(),
        holder: Pubkey::new_unique(),
        stranger: Pubkey::new_unique(),
    }
}

#[test]
fn owner_mints_packs() {
    let a = actors();
    let mut exchange = Exchange::deploy_and_delegate(a.owner);

    let token_id = exchange.mint_pack(a.owner, a.holder, URI).unwrap();

    assert_eq!(token_id, 1);
    assert_eq!(exchange.pack_balance(&a.holder), 1);
    assert_eq!(exchange.pack_balance(&a.owner), 0);
    assert_eq!(exchange.packs[&1].uri, URI);
}

#[test]
fn deployer_owns_pack_registry() {
    let a = actors();
    let exchange = Exchange::deploy_and_delegate(a.owner);

    assert_eq!(exchange.pack.authority.owner, a.owner);
    assert_eq!(exchange.gear.authority.owner, exchange.pack_signer);
}

#[test]
fn non_owner_cannot_mint() {
    let a = actors();
    let mut exchange = Exchange::deploy_and_delegate(a.owner);

    let err = exchange.mint_pack(a.holder, a.holder, URI).unwrap_err();

    assert_eq!(error_code(err), u32::from(CoreError::Unauthorized));
    assert_eq!(exchange.pack_balance(&a.holder), 0);
    assert_eq!(exchange.pack.sequence.next_id, TokenSequence::FIRST_ID);
}

#[test]
fn holder_burn_swaps_pack_for_gear() {
    let a = actors();
    let mut exchange = Exchange::deploy_and_delegate(a.owner);
    exchange.mint_pack(a.owner, a.holder, URI).unwrap();
    assert_eq!(exchange.pack_balance(&a.holder), 1);

    let gear_id = exchange.burn_pack(a.holder, 1).unwrap();

    assert_eq!(gear_id, 1);
    assert_eq!(exchange.pack_balance(&a.holder), 0);
    assert_eq!(exchange.gear_balance(&a.holder), 1);
    assert_eq!(exchange.gears[&gear_id].holder, a.holder);
    assert!(!exchange.packs.contains_key(&1));
    exchange.assert_supply_matches_balances();
}

#[test]
fn stranger_cannot_burn_someone_elses_pack() {
    let a = actors();
    let mut exchange = Exchange::deploy_and_delegate(a.owner);
    exchange.mint_pack(a.owner, a.holder, URI).unwrap();

    let err = exchange.burn_pack(a.stranger, 1).unwrap_err();

    assert_eq!(error_code(err), u32::from(PackError::NotAuthorizedToBurn));
    assert_eq!(exchange.pack_balance(&a.holder), 1);
    assert_eq!(exchange.gear_balance(&a.holder), 0);
    assert_eq!(exchange.gear_balance(&a.stranger), 0);
}

#[test]
fn owner_burns_on_behalf_of_holder() {
    let a = actors();
    let mut exchange = Exchange::deploy_and_delegate(a.owner);
    exchange.mint_pack(a.owner, a.holder, URI).unwrap();

    exchange.burn_pack(a.owner, 1).unwrap();

    assert_eq!(exchange.pack_balance(&a.holder), 0);
    assert_eq!(exchange.gear_balance(&a.holder), 1);
    assert_eq!(exchange.gear_balance(&a.owner), 0);
}

#[test]
fn burning_unminted_pack_fails() {
    let a = actors();
    let mut exchange = Exchange::deploy_and_delegate(a.owner);
    exchange.mint_pack(a.owner, a.holder, URI).unwrap();

    let err = exchange.burn_pack(a.owner, 2).unwrap_err();

    assert_eq!(error_code(err), u32::from(PackError::TokenDoesNotExist));
    assert_eq!(exchange.pack_balance(&a.holder), 1);
    assert_eq!(exchange.gear_balance(&a.holder), 0);
}

#[test]
fn burning_twice_reports_nonexistence() {
    let a = actors();
    let mut exchange = Exchange::deploy_and_delegate(a.owner);
    exchange.mint_pack(a.owner, a.holder, URI).unwrap();
    exchange.burn_pack(a.holder, 1).unwrap();

    let err = exchange.burn_pack(a.holder, 1).unwrap_err();

    assert_eq!(error_code(err), u32::from(PackError::TokenDoesNotExist));
    assert_eq!(exchange.gear_balance(&a.holder), 1);
}

#[test]
fn burn_fails_whole_when_gear_authority_was_never_delegated() {
    let a = actors();
    let mut exchange = Exchange::deploy(a.owner);
    exchange.mint_pack(a.owner, a.holder, URI).unwrap();

    let err = exchange.burn_pack(a.holder, 1).unwrap_err();

    assert_eq!(error_code(err), u32::from(CoreError::Unauthorized));
    assert_eq!(exchange.pack_balance(&a.holder), 1);
    assert_eq!(exchange.gear_balance(&a.holder), 0);
    assert!(exchange.packs.contains_key(&1));
    assert_eq!(exchange.pack.sequence.live_supply, 1);
}

#[test]
fn approved_account_can_burn() {
    let a = actors();
    let mut exchange = Exchange::deploy_and_delegate(a.owner);
    exchange.mint_pack(a.owner, a.holder, URI).unwrap();
    exchange.approve(a.holder, 1, a.stranger).unwrap();

    exchange.burn_pack(a.stranger, 1).unwrap();

    assert_eq!(exchange.gear_balance(&a.holder), 1);
    assert_eq!(exchange.gear_balance(&a.stranger), 0);
}

#[test]
fn operator_can_burn_until_revoked() {
    let a = actors();
    let mut exchange = Exchange::deploy_and_delegate(a.owner);
    exchange.mint_pack(a.owner, a.holder, URI).unwrap();
    exchange.mint_pack(a.owner, a.holder, URI).unwrap();

    exchange.set_approval_for_all(a.holder, a.stranger, true).unwrap();
    exchange.burn_pack(a.stranger, 1).unwrap();

    exchange.set_approval_for_all(a.holder, a.stranger, false).unwrap();
    let err = exchange.burn_pack(a.stranger, 2).unwrap_err();

    assert_eq!(error_code(err), u32::from(PackError::NotAuthorizedToBurn));
    assert_eq!(exchange.pack_balance(&a.holder), 1);
    assert_eq!(exchange.gear_balance(&a.holder), 1);
}

#[test]
fn holder_cannot_be_own_operator() {
    let a = actors();
    let mut exchange = Exchange::deploy_and_delegate(a.owner);
    exchange.mint_pack(a.owner, a.holder, URI).unwrap();

    let err = exchange
        .set_approval_for_all(a.holder, a.holder, true)
        .unwrap_err();

    assert_eq!(error_code(err), u32::from(PackError::SelfApproval));
    assert!(exchange.operators.is_empty());
}

#[test]
fn stranger_cannot_approve() {
    let a = actors();
    let mut exchange = Exchange::deploy_and_delegate(a.owner);
    exchange.mint_pack(a.owner, a.holder, URI).unwrap();

    let err = exchange.approve(a.stranger, 1, a.stranger).unwrap_err();

    assert_eq!(error_code(err), u32::from(PackError::NotAuthorizedToApprove));
    assert_eq!(exchange.packs[&1].approved, NULL_ACCOUNT);
}

#[test]
fn ids_keep_increasing_after_burns() {
    let a = actors();
    let mut exchange = Exchange::deploy_and_delegate(a.owner);
    exchange.mint_pack(a.owner, a.holder, URI).unwrap();
    exchange.burn_pack(a.holder, 1).unwrap();

    let next = exchange.mint_pack(a.owner, a.holder, URI).unwrap();

    assert_eq!(next, 2);
    assert_eq!(exchange.pack_balance(&a.holder), 1);
}

#[test]
fn supply_tracks_balances_across_mixed_activity() {
    let a = actors();
    let mut exchange = Exchange::deploy_and_delegate(a.owner);
    for recipient in [a.holder, a.stranger, a.holder, a.owner] {
        exchange.mint_pack(a.owner, recipient, URI).unwrap();
    }

    exchange.burn_pack(a.holder, 1).unwrap();
    exchange.burn_pack(a.owner, 2).unwrap();
    let _ = exchange.burn_pack(a.stranger, 3).unwrap_err();
    let _ = exchange.burn_pack(a.owner, 9).unwrap_err();

    assert_eq!(exchange.pack_balance(&a.holder), 1);
    assert_eq!(exchange.pack_balance(&a.stranger), 0);
    assert_eq!(exchange.pack_balance(&a.owner), 1);
    assert_eq!(exchange.gear_balance(&a.holder), 1);
    assert_eq!(exchange.gear_balance(&a.stranger), 1);
    exchange.assert_supply_matches_balances();
}

#[test]
fn pack_minter_can_hand_over_authority() {
    let a = actors();
    let mut exchange = Exchange::deploy_and_delegate(a.owner);
    let new_owner = a.stranger;
    exchange
        .atomically(|draft| draft.pack.authority.transfer(&a.owner, new_owner))
        .unwrap();

    let err = exchange.mint_pack(a.owner, a.holder, URI).unwrap_err();
    assert_eq!(error_code(err), u32::from(CoreError::Unauthorized));
    assert_eq!(exchange.mint_pack(new_owner, a.holder, URI).unwrap(), 1);
}
