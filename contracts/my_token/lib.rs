#![cfg_attr(not(feature = "std"), no_std)]

#[ink::contract]
mod my_token {
    use ink::prelude::string::String;
    use ink::storage::Mapping;

    pub type Result<T> = core::result::Result<T, Error>;

    /// Allowance value that is never decremented by `transfer_from`.
    pub const UNLIMITED_ALLOWANCE: Balance = Balance::MAX;

    const DECIMALS: u8 = 18;

    /// Failures carry the offending account first, then the current value,
    /// then the requested value.
    #[derive(scale::Encode, scale::Decode, Debug, PartialEq, Eq)]
    #[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
    pub enum Error {
        /// Caller is not the owner.
        Unauthorized(AccountId),
        InvalidReceiver(AccountId),
        InvalidSender(AccountId),
        InvalidSpender(AccountId),
        InvalidOwner(AccountId),
        /// (account, balance, needed)
        InsufficientBalance(AccountId, Balance, Balance),
        /// (spender, allowance, needed)
        InsufficientAllowance(AccountId, Balance, Balance),
        Overflow,
    }

    #[ink(event)]
    pub struct Transfer {
        #[ink(topic)]
        from: AccountId,
        #[ink(topic)]
        to: AccountId,
        value: Balance,
    }

    #[ink(event)]
    pub struct Approval {
        #[ink(topic)]
        owner: AccountId,
        #[ink(topic)]
        spender: AccountId,
        value: Balance,
    }

    #[ink(event)]
    pub struct OwnershipTransferred {
        #[ink(topic)]
        previous_owner: Option<AccountId>,
        #[ink(topic)]
        new_owner: Option<AccountId>,
    }

    #[ink(storage)]
    pub struct MyToken {
        // metadata
        name: String,
        symbol: String,

        // access control; `None` once renounced
        owner: Option<AccountId>,

        // token state
        total_supply: Balance,
        balances: Mapping<AccountId, Balance>,
        allowances: Mapping<(AccountId, AccountId), Balance>,
    }

    /// Account used as the mint origin and rejected as a target.
    fn zero_address() -> AccountId {
        AccountId::from([0x00; 32])
    }

    impl MyToken {
        #[ink(constructor)]
        pub fn new(name: String, symbol: String) -> Self {
            let owner = Self::env().caller();
            Self::env().emit_event(OwnershipTransferred {
                previous_owner: None,
                new_owner: Some(owner),
            });
            Self {
                name,
                symbol,
                owner: Some(owner),
                total_supply: 0,
                balances: Mapping::default(),
                allowances: Mapping::default(),
            }
        }

        // -------- read API --------

        #[ink(message)]
        pub fn name(&self) -> String {
            self.name.clone()
        }

        #[ink(message)]
        pub fn symbol(&self) -> String {
            self.symbol.clone()
        }

        /// Display hint only; the ledger itself works in whole units.
        #[ink(message)]
        pub fn decimals(&self) -> u8 {
            DECIMALS
        }

        #[ink(message)]
        pub fn owner(&self) -> Option<AccountId> {
            self.owner
        }

        #[ink(message)]
        pub fn total_supply(&self) -> Balance {
            self.total_supply
        }

        #[ink(message)]
        pub fn balance_of(&self, account: AccountId) -> Balance {
            self.balances.get(account).unwrap_or(0)
        }

        #[ink(message)]
        pub fn allowance(&self, owner: AccountId, spender: AccountId) -> Balance {
            self.allowances.get((owner, spender)).unwrap_or(0)
        }

        // -------- write API --------

        /// Creates `value` new tokens for `to`. Owner only.
        #[ink(message)]
        pub fn mint(&mut self, to: AccountId, value: Balance) -> Result<()> {
            self.only_owner()?;
            if to == zero_address() {
                return Err(Error::InvalidReceiver(to))
            }
            let new_total = self.total_supply.checked_add(value).ok_or(Error::Overflow)?;
            let new_to = self.balance_of(to).checked_add(value).ok_or(Error::Overflow)?;

            self.total_supply = new_total;
            self.balances.insert(to, &new_to);
            self.env().emit_event(Transfer {
                from: zero_address(),
                to,
                value,
            });
            Ok(())
        }

        #[ink(message)]
        pub fn transfer(&mut self, to: AccountId, value: Balance) -> Result<()> {
            let from = self.env().caller();
            let (new_from, new_to) = self.plan_move(from, to, value)?;
            self.commit_move(from, to, value, new_from, new_to);
            Ok(())
        }

        /// Sets the allowance of `spender` over the caller's tokens to `value`,
        /// replacing any previous allowance. The caller's balance is not consulted.
        #[ink(message)]
        pub fn approve(&mut self, spender: AccountId, value: Balance) -> Result<()> {
            if spender == zero_address() {
                return Err(Error::InvalidSpender(spender))
            }
            let owner = self.env().caller();
            self.allowances.insert((owner, spender), &value);
            self.env().emit_event(Approval {
                owner,
                spender,
                value,
            });
            Ok(())
        }

        /// Moves `value` from `from` to `to` using the caller's allowance.
        ///
        /// The allowance is checked before the balance. Nothing is written
        /// unless every check passes.
        #[ink(message)]
        pub fn transfer_from(
            &mut self,
            from: AccountId,
            to: AccountId,
            value: Balance,
        ) -> Result<()> {
            let spender = self.env().caller();
            let current_allowance = self.allowance(from, spender);
            if current_allowance < value {
                return Err(Error::InsufficientAllowance(spender, current_allowance, value))
            }
            let new_allowance = if current_allowance == UNLIMITED_ALLOWANCE {
                current_allowance
            } else {
                current_allowance.checked_sub(value).ok_or(Error::Overflow)?
            };
            let (new_from, new_to) = self.plan_move(from, to, value)?;

            if new_allowance != current_allowance {
                self.allowances.insert((from, spender), &new_allowance);
            }
            self.commit_move(from, to, value, new_from, new_to);
            Ok(())
        }

        // -------- ownership --------

        #[ink(message)]
        pub fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<()> {
            self.only_owner()?;
            if new_owner == zero_address() {
                return Err(Error::InvalidOwner(new_owner))
            }
            self.set_owner(Some(new_owner));
            Ok(())
        }

        /// Leaves the token without an owner; minting is disabled for good.
        #[ink(message)]
        pub fn renounce_ownership(&mut self) -> Result<()> {
            self.only_owner()?;
            self.set_owner(None);
            Ok(())
        }

        // ---- internals ----

        fn only_owner(&self) -> Result<()> {
            let caller = self.env().caller();
            if self.owner != Some(caller) {
                ink::env::debug_println!("rejected owner-only call from {:?}", caller);
                return Err(Error::Unauthorized(caller))
            }
            Ok(())
        }

        fn set_owner(&mut self, new_owner: Option<AccountId>) {
            let previous_owner = self.owner;
            self.owner = new_owner;
            self.env().emit_event(OwnershipTransferred {
                previous_owner,
                new_owner,
            });
        }

        /// Validates a balance move and returns the post-move balances of
        /// `from` and `to` without touching storage.
        fn plan_move(
            &self,
            from: AccountId,
            to: AccountId,
            value: Balance,
        ) -> Result<(Balance, Balance)> {
            if from == zero_address() {
                return Err(Error::InvalidSender(from))
            }
            if to == zero_address() {
                return Err(Error::InvalidReceiver(to))
            }
            let from_balance = self.balance_of(from);
            if from_balance < value {
                ink::env::debug_println!(
                    "transfer of {} from {:?} exceeds balance {}",
                    value,
                    from,
                    from_balance
                );
                return Err(Error::InsufficientBalance(from, from_balance, value))
            }
            let new_from = from_balance.checked_sub(value).ok_or(Error::Overflow)?;
            // a self-transfer credits the already-debited balance
            let to_balance = if from == to { new_from } else { self.balance_of(to) };
            let new_to = to_balance.checked_add(value).ok_or(Error::Overflow)?;
            Ok((new_from, new_to))
        }

        fn commit_move(
            &mut self,
            from: AccountId,
            to: AccountId,
            value: Balance,
            new_from: Balance,
            new_to: Balance,
        ) {
            self.balances.insert(from, &new_from);
            self.balances.insert(to, &new_to);
            self.env().emit_event(Transfer { from, to, value });
        }
    }


}
