//! Clock framework unit tests.



/// Clock registry tests.
pub mod registry;
