//! Host-side evaluation of "friends with everyone" over an adjacency map.
//! The in-memory repository answers with it, and it serves as the oracle the
//! SQL double `NOT EXISTS` query has to agree with.

use std::collections::{BTreeSet, HashMap, HashSet};

pub fn friends_with_everyone<'a>(
    usernames: impl IntoIterator<Item = &'a str>,
    edges: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> Vec<&'a str> {
    let everyone: BTreeSet<&str> = usernames.into_iter().collect();

    let mut adjacency: HashMap<&str, HashSet<&str>> = HashMap::new();
    for (a, b) in edges {
        adjacency.entry(a).or_default().insert(b);
        adjacency.entry(b).or_default().insert(a);
    }

    let no_friends = HashSet::new();
    everyone
        .iter()
        .copied()
        .filter(|user| {
            let friends = adjacency.get(user).unwrap_or(&no_friends);
            everyone.iter().all(|other| other == user || friends.contains(other))
        })
        .collect()
}
