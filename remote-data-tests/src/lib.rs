pub mod arb;
#[cfg(test)]
mod laws;
#[cfg(test)]
mod wire;
