/// True when either name is a leading substring of the other, equality
/// included. Substrings at any other position do not count.
pub fn prefix_collision(a: &str, b: &str) -> bool {
    a.starts_with(b) || b.starts_with(a)
}

/// Check one new name against everything already stored.
pub fn collides_with_any(name: &str, names: &[String]) -> bool {
    names.iter().any(|existing| prefix_collision(name, existing))
}

/// Full double-loop scan over the list. Returns the indices of the first
/// colliding pair.
pub fn find_collision(names: &[String]) -> Option<(usize, usize)> {
    for i in 0..names.len() {
        for j in (i + 1)..names.len() {
            if prefix_collision(&names[i], &names[j]) {
                return Some((i, j));
            }
        }
    }
    None
}
