// ==============================================
// POLICY SCENARIO TESTS (integration)
// ==============================================
//
// Fixed call sequences with the exact eviction notices they must produce,
// at capacity 2 and at the default capacity of 4.

use boundcache::cache::{Cache, DEFAULT_CAPACITY, FifoCache, LifoCache, LruCache, MruCache};
use boundcache::listener::{DiscardPrinter, EvictionLog};
use boundcache::policy::{EvictionPolicy, FifoPolicy, LifoPolicy, LruPolicy, MruPolicy};

type Printed<P> = Cache<&'static str, &'static str, P, DiscardPrinter<Vec<u8>>>;

fn printed<P>() -> Printed<P>
where
    P: EvictionPolicy<&'static str> + Default,
{
    Cache::with_listener(DEFAULT_CAPACITY, DiscardPrinter::new(Vec::new()))
}

fn output<P: EvictionPolicy<&'static str>>(cache: &Printed<P>) -> String {
    String::from_utf8(cache.listener().get_ref().clone()).unwrap()
}

fn fill_abcd<P: EvictionPolicy<&'static str>>(cache: &mut Printed<P>) {
    cache.put("A", "Hello");
    cache.put("B", "World");
    cache.put("C", "Holberton");
    cache.put("D", "School");
}

// ==============================================
// Capacity 2
// ==============================================

mod capacity_two {
    use super::*;

    #[test]
    fn fifo() {
        let mut cache: FifoCache<&str, i32, _> = Cache::with_listener(2, EvictionLog::new());
        cache.put("a", 1);
        cache.put("b", 2);
        cache.put("c", 3);
        assert_eq!(cache.listener().keys(), &["a"]);
        assert_eq!(cache.get(&"a"), None);
        assert_eq!(cache.get(&"b"), Some(&2));
        assert_eq!(cache.get(&"c"), Some(&3));
    }

    #[test]
    fn lifo() {
        let mut cache: LifoCache<&str, i32, _> = Cache::with_listener(2, EvictionLog::new());
        cache.put("a", 1);
        cache.put("b", 2);
        cache.put("c", 3);
        assert_eq!(cache.listener().keys(), &["b"]);
        assert_eq!(cache.get(&"b"), None);
        assert_eq!(cache.get(&"a"), Some(&1));
        assert_eq!(cache.get(&"c"), Some(&3));
    }

    #[test]
    fn lru() {
        let mut cache: LruCache<&str, i32, _> = Cache::with_listener(2, EvictionLog::new());
        cache.put("a", 1);
        cache.put("b", 2);
        cache.get(&"a");
        cache.put("c", 3);
        assert_eq!(cache.listener().keys(), &["b"]);
        assert_eq!(cache.get(&"b"), None);
        assert_eq!(cache.get(&"a"), Some(&1));
        assert_eq!(cache.get(&"c"), Some(&3));
    }

    #[test]
    fn mru() {
        let mut cache: MruCache<&str, i32, _> = Cache::with_listener(2, EvictionLog::new());
        cache.put("a", 1);
        cache.put("b", 2);
        cache.get(&"a");
        cache.put("c", 3);
        assert_eq!(cache.listener().keys(), &["a"]);
        assert_eq!(cache.get(&"a"), None);
        assert_eq!(cache.get(&"b"), Some(&2));
        assert_eq!(cache.get(&"c"), Some(&3));
    }
}

// ==============================================
// Default capacity, printed notices
// ==============================================

mod printed_notices {
    use super::*;

    #[test]
    fn fifo_discards_oldest_and_ignores_overwrite() {
        let mut cache = printed::<FifoPolicy<_>>();
        fill_abcd(&mut cache);
        cache.put("E", "Battery");
        cache.put("C", "Street");
        cache.put("F", "Mission");
        assert_eq!(output(&cache), "DISCARD: A\nDISCARD: B\n");

        let mut contents = Vec::new();
        cache.write_contents(&mut contents).unwrap();
        assert_eq!(
            String::from_utf8(contents).unwrap(),
            "Current cache:\nC: Street\nD: School\nE: Battery\nF: Mission\n"
        );
    }

    #[test]
    fn lifo_discards_each_newest() {
        let mut cache = printed::<LifoPolicy<_>>();
        fill_abcd(&mut cache);
        cache.put("E", "Battery");
        cache.put("C", "Street");
        cache.put("F", "Mission");
        cache.put("G", "San Francisco");
        assert_eq!(output(&cache), "DISCARD: D\nDISCARD: E\nDISCARD: F\n");
        assert_eq!(cache.peek(&"C"), Some(&"Street"));
        assert_eq!(cache.peek(&"G"), Some(&"San Francisco"));
    }

    #[test]
    fn lru_discards_least_recent_after_reads() {
        let mut cache = printed::<LruPolicy<_>>();
        fill_abcd(&mut cache);
        cache.get(&"B");
        cache.put("E", "Battery");
        cache.put("C", "Street");
        cache.get(&"A");
        cache.get(&"B");
        cache.get(&"C");
        cache.put("F", "Mission");
        cache.put("G", "San Francisco");
        cache.put("H", "H");
        assert_eq!(
            output(&cache),
            "DISCARD: A\nDISCARD: D\nDISCARD: E\nDISCARD: B\n"
        );
        assert_eq!(cache.keys().copied().collect::<Vec<_>>(), vec!["C", "F", "G", "H"]);
    }

    #[test]
    fn mru_discards_most_recent_touch() {
        let mut cache = printed::<MruPolicy<_>>();
        fill_abcd(&mut cache);
        cache.get(&"B");
        cache.put("E", "Battery");
        cache.put("C", "Street");
        cache.get(&"A");
        cache.put("F", "Mission");
        assert_eq!(output(&cache), "DISCARD: B\nDISCARD: A\n");
        assert!(cache.contains(&"E"));
        assert!(cache.contains(&"F"));
    }
}

// ==============================================
// Degenerate input
// ==============================================

mod degenerate_input {
    use super::*;

    #[test]
    fn none_key_or_value_is_silent_for_every_policy() {
        fn check<P: EvictionPolicy<&'static str> + Default>() {
            let mut cache = printed::<P>();
            fill_abcd(&mut cache);
            cache.put_opt(None, Some("x"));
            cache.put_opt(Some("Z"), None);
            assert_eq!(cache.size(), 4);
            assert_eq!(output(&cache), "");
            assert_eq!(cache.get_opt(None), None);
            assert!(cache.check_invariants().is_ok());
        }
        check::<FifoPolicy<_>>();
        check::<LifoPolicy<_>>();
        check::<LruPolicy<_>>();
        check::<MruPolicy<_>>();
    }
}
