use crate::hexastore::Hexastore;

/// Payload attached to every fixture triple.
pub const FIXTURE_VALUE: &str = "jonob";

/// The six triples of the fruit graph, as `(subject, predicate, object)`.
pub const FRUIT_TRIPLES: [(&str, &str, &str); 6] = [
    ("Apple", "Likes", "Cow"),
    ("Apple", "Likes", "Banana"),
    ("Apple", "Likes", "Apple"),
    ("Cow", "Dislikes", "Banana"),
    ("Banana", "Dislikes", "Cow"),
    ("Cow", "Likes", "Apple"),
];

/// A small store with three entities and two predicates.
///
/// `Apple` likes everything including itself, `Cow` and `Banana` dislike each
/// other, and `Cow` likes `Apple` back.
pub fn fruit_store() -> Hexastore {
    let mut store = Hexastore::new();
    for (subject, predicate, object) in FRUIT_TRIPLES {
        store.add(subject, predicate, object, FIXTURE_VALUE);
    }
    store
}
