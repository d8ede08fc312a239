use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicUsize, Ordering};

const TOKEN_PREFIX: &str = "sec"; // Must NOT contain "-" (it would collide with id segment splits)

static COUNTER: AtomicUsize = AtomicUsize::new(1);

fn generate_hash() -> u64 {
    let mut hasher = DefaultHasher::new();
    let counter = COUNTER.fetch_add(1, Ordering::SeqCst);
    counter.hash(&mut hasher);
    hasher.finish()
}

/// Fresh identity token for a section.
///
/// Unique within a session; tokens are embedded in droppable ids
/// (`"<token>-container"`), so they must never contain "-".
pub(crate) fn next_section_token() -> String {
    format!("{TOKEN_PREFIX}{:x}", generate_hash())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_unique_and_dash_free() {
        let a = next_section_token();
        let b = next_section_token();
        assert_ne!(a, b);
        assert!(!a.contains('-'));
        assert!(a.starts_with("sec"));
    }
}
