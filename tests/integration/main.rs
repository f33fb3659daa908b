//! Postgres-backed integration tests.
//!
//! Set `TABLEHUB_TEST_DATABASE_URL` to a disposable database to run these;
//! without it each test skips itself.

mod helpers;

mod auth_test;
mod invite_test;
mod session_test;
