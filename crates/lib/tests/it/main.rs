/*! Integration tests for Innkeep.
 *
 * Everything runs in one integration test binary, per matklad's
 * advice in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * Modules group the tests by the part of the library they cover:
 * - store: EntityStore load/save behavior against real files
 * - desk: FrontDesk flows that span several stores
 * - ledger: the booking lifecycle and session payment history
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("innkeep=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod desk;
mod helpers;
mod ledger;
mod store;
