#![cfg_attr(not(feature = "std"), no_std)]

#[ink::contract]
mod counter {
    pub type Value = u128;
    pub type Result<T> = core::result::Result<T, Error>;

    #[derive(scale::Encode, scale::Decode, Debug, PartialEq, Eq)]
    #[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
    pub enum Error {
        Overflow,
        Underflow,
    }

    #[ink(event)]
    pub struct XChanged {
        new_x: Value,
    }

    #[ink(event)]
    pub struct YAssigned {
        new_y: Value,
    }

    #[ink(storage)]
    pub struct Counter {
        x: Value,
        y: Value,
        z: Value,
    }

    impl Counter {
        #[ink(constructor)]
        pub fn new(initial_x: Value, initial_z: Value) -> Self {
            Self {
                x: initial_x,
                y: 0,
                z: initial_z,
            }
        }

        // --------- x ---------

        #[ink(message)]
        pub fn x(&self) -> Value {
            self.x
        }

        #[ink(message)]
        pub fn increment(&mut self) -> Result<()> {
            let new_x = self.x.checked_add(1).ok_or(Error::Overflow)?;
            self.set_x_internal(new_x);
            Ok(())
        }

        #[ink(message)]
        pub fn decrement(&mut self) -> Result<()> {
            let new_x = self.x.checked_sub(1).ok_or(Error::Underflow)?;
            self.set_x_internal(new_x);
            Ok(())
        }

        #[ink(message)]
        pub fn set_x(&mut self, value: Value) {
            self.set_x_internal(value);
        }

        // --------- y ---------

        #[ink(message)]
        pub fn assign_y(&mut self, value: Value) {
            self.y = value;
            self.env().emit_event(YAssigned { new_y: value });
        }

        #[ink(message)]
        pub fn read_y(&self) -> Value {
            self.y
        }

        // --------- z ---------

        #[ink(message)]
        pub fn get_z(&self) -> Value {
            self.z
        }

        /// Public entry point for the internal `bump_z`.
        #[ink(message)]
        pub fn bump_z_public(&mut self, value: Value) -> Result<()> {
            self.bump_z(value)
        }

        // --------- internals ---------

        fn bump_z(&mut self, value: Value) -> Result<()> {
            self.z = self.z.checked_add(value).ok_or(Error::Overflow)?;
            Ok(())
        }

        fn set_x_internal(&mut self, new_x: Value) {
            self.x = new_x;
            self.env().emit_event(XChanged { new_x });
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use ink::env::test::{self, EmittedEvent};

        fn deploy() -> Counter {
            Counter::new(5, 2)
        }

        fn events() -> Vec<EmittedEvent> {
            test::recorded_events().collect()
        }

        fn x_changed(event: &EmittedEvent) -> Value {
            <XChanged as scale::Decode>::decode(&mut &event.data[..])
                .expect("invalid XChanged event data")
                .new_x
        }

        #[ink::test]
        fn new_sets_x_and_z() {
            let counter = deploy();
            assert_eq!(counter.x(), 5);
            assert_eq!(counter.get_z(), 2);
            assert_eq!(counter.read_y(), 0);
            assert!(events().is_empty());
        }

        #[ink::test]
        fn increment_and_decrement_emit_x_changed() {
            let mut counter = deploy();

            assert_eq!(counter.increment(), Ok(()));
            assert_eq!(counter.x(), 6);
            assert_eq!(counter.decrement(), Ok(()));
            assert_eq!(counter.x(), 5);

            let emitted = events();
            assert_eq!(emitted.len(), 2);
            assert_eq!(x_changed(&emitted[0]), 6);
            assert_eq!(x_changed(&emitted[1]), 5);
        }

        #[ink::test]
        fn decrement_at_zero_fails() {
            let mut counter = Counter::new(0, 0);
            assert_eq!(counter.decrement(), Err(Error::Underflow));
            assert_eq!(counter.x(), 0);
            assert!(events().is_empty());
        }

        #[ink::test]
        fn increment_at_max_fails() {
            let mut counter = Counter::new(Value::MAX, 0);
            assert_eq!(counter.increment(), Err(Error::Overflow));
            assert_eq!(counter.x(), Value::MAX);
        }

        #[ink::test]
        fn set_x_emits_new_value() {
            let mut counter = deploy();
            counter.set_x(42);
            assert_eq!(counter.x(), 42);

            let emitted = events();
            assert_eq!(emitted.len(), 1);
            assert_eq!(x_changed(&emitted[0]), 42);
        }

        #[ink::test]
        fn assign_y_is_readable() {
            let mut counter = deploy();
            counter.assign_y(999);
            assert_eq!(counter.read_y(), 999);

            let emitted = events();
            assert_eq!(emitted.len(), 1);
            let assigned = <YAssigned as scale::Decode>::decode(&mut &emitted[0].data[..])
                .expect("invalid YAssigned event data");
            assert_eq!(assigned.new_y, 999);
        }

        #[ink::test]
        fn bump_z_public_adds_to_z() {
            let mut counter = deploy();
            assert_eq!(counter.bump_z_public(10), Ok(()));
            assert_eq!(counter.get_z(), 12);
            assert_eq!(counter.bump_z_public(Value::MAX), Err(Error::Overflow));
            assert_eq!(counter.get_z(), 12);
        }
    }

}
