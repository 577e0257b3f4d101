//! Energy controller unit tests.
