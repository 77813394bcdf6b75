//! Property test suite entry point.

mod migration_props;
