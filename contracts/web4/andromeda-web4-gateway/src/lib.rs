mod auth;
pub mod contract;
mod execute;
#[cfg(all(not(target_arch = "wasm32"), feature = "testing"))]
pub mod mock;
mod query;
mod state;

#[cfg(test)]
mod testing;
