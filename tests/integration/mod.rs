// Integration tests against the live PDD API
//
// These need a real PDD_TOKEN in the environment (or a .env file) and are
// ignored by default: `cargo test -- --ignored` runs them.

mod domain_tests;
