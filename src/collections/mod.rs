pub mod range_set;

pub use self::range_set::RangeSet;

use ahash::RandomState;
use linked_hash_set::LinkedHashSet;

pub type AHashLinkedHashSet<T> = LinkedHashSet<T, RandomState>;
