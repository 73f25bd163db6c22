use rand::Rng;
use serde::{Deserialize, Serialize};

/// A synthetic proxy access tuple issued when an order is confirmed.
///
/// Credentials are decorative inventory, not real resources: there is no
/// uniqueness guarantee within or across orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credential {
    pub address: String,
    pub port: u16,
    pub username: String,
    pub secret: String,
}

/// Synthesizes exactly `quantity` credentials from fresh entropy.
///
/// Callers clamp the quantity to [1, 20] before calling; values outside that
/// range are not rejected here.
pub fn generate(quantity: u32) -> Vec<Credential> {
    let mut rng = rand::thread_rng();
    (0..quantity)
        .map(|_| Credential {
            address: (0..4)
                .map(|_| rng.gen_range(0..=255u8).to_string())
                .collect::<Vec<_>>()
                .join("."),
            port: rng.gen_range(1000..=9999),
            username: format!("user{}", rng.gen_range(1000..=9999)),
            secret: format!("pass{}", rng.gen_range(10000..=99999)),
        })
        .collect()
}
