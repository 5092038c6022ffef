use rand::Rng;
use std::sync::atomic::{AtomicU32, Ordering};

/// Exclusive upper bound of a variation token (2^31 - 1).
pub const MAX_TOKEN: u32 = 2_147_483_647;

/// Source of the per-call token that keeps repeated requests from
/// producing identical output. Must yield a fresh value on every call.
pub trait VariationSource: Send + Sync {
    fn next_token(&self) -> u32;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RandomVariation;

impl VariationSource for RandomVariation {
    fn next_token(&self) -> u32 {
        rand::thread_rng().gen_range(0..MAX_TOKEN)
    }
}

/// Deterministic counter for tests and reproducible runs.
#[derive(Debug, Default)]
pub struct SequentialVariation {
    next: AtomicU32,
}

impl SequentialVariation {
    pub fn starting_at(start: u32) -> Self {
        Self {
            next: AtomicU32::new(start),
        }
    }
}

impl VariationSource for SequentialVariation {
    fn next_token(&self) -> u32 {
        self.next.fetch_add(1, Ordering::Relaxed) % MAX_TOKEN
    }
}

/// Hidden marker appended after the composed text.
pub fn variation_marker(token: u32) -> String {
    format!("\n\n[variation:{}]", token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_tokens_stay_in_range() {
        let source = RandomVariation;
        for _ in 0..1000 {
            assert!(source.next_token() < MAX_TOKEN);
        }
    }

    #[test]
    fn sequential_tokens_advance() {
        let source = SequentialVariation::starting_at(41);
        assert_eq!(source.next_token(), 41);
        assert_eq!(source.next_token(), 42);
    }

    #[test]
    fn marker_format() {
        assert_eq!(variation_marker(7), "\n\n[variation:7]");
    }
}
