use crate::{
    ALPHABET, CUID2_LENGTH, Cuid2Generator, Error, OsRandom, RANDOM_BYTES_LENGTH, RandSource,
    Result, TIMESTAMP_LENGTH, ThreadRandom, TimeSource, WallClock, from_parts, generate,
    is_valid,
};
use core::cell::Cell;
use std::collections::HashSet;
use std::sync::Mutex;
use std::thread::scope;

struct MockTime {
    millis: u64,
}

impl TimeSource for MockTime {
    fn current_millis(&self) -> Result<u64> {
        Ok(self.millis)
    }
}

struct MockRand {
    bytes: [u8; RANDOM_BYTES_LENGTH],
}

impl RandSource for MockRand {
    fn fill_bytes(&self, buf: &mut [u8]) -> Result<()> {
        buf.copy_from_slice(&self.bytes);
        Ok(())
    }
}

struct BrokenClock;

impl TimeSource for BrokenClock {
    fn current_millis(&self) -> Result<u64> {
        Err(Error::ClockFailure {
            reason: "clock unavailable".into(),
        })
    }
}

struct BrokenRand;

impl RandSource for BrokenRand {
    fn fill_bytes(&self, _buf: &mut [u8]) -> Result<()> {
        Err(Error::RandomnessFailure {
            reason: "entropy unavailable".into(),
        })
    }
}

/// Counts how often the random source is drawn from.
struct CountingRand {
    calls: Cell<usize>,
}

impl RandSource for CountingRand {
    fn fill_bytes(&self, buf: &mut [u8]) -> Result<()> {
        self.calls.set(self.calls.get() + 1);
        buf.fill(0);
        Ok(())
    }
}

fn assert_well_formed(id: &str) {
    assert_eq!(id.len(), CUID2_LENGTH, "{id}");
    assert!(id.bytes().all(|b| ALPHABET.contains(&b)), "{id}");
    assert!(!id.as_bytes()[0].is_ascii_digit(), "{id}");
    assert!(is_valid(id), "{id}");
}

#[test]
fn generated_ids_are_well_formed() {
    for _ in 0..1000 {
        let id = generate().unwrap();
        assert_well_formed(id.as_str());
    }
}

#[test]
fn thread_random_generator_ids_are_well_formed() {
    let generator = Cuid2Generator::new(WallClock, ThreadRandom);
    for _ in 0..1000 {
        assert_well_formed(generator.try_next_id().unwrap().as_str());
    }
}

#[test]
fn known_vector() {
    let generator = Cuid2Generator::new(
        MockTime {
            millis: 1_739_232_139_123,
        },
        MockRand {
            bytes: [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12],
        },
    );
    let id = generator.try_next_id().unwrap();
    assert_eq!(id.as_str(), "s50nvk0820r41861r828a2rc");
    assert_eq!(id.timestamp_segment(), crate::encode(1_739_232_139_123, 6));
}

#[test]
fn all_ones_random_bytes_drop_top_bit_of_each_pair() {
    let id = from_parts(1_739_232_139_123, &[0xFF; RANDOM_BYTES_LENGTH]);
    assert_eq!(id.random_segment(), "zzzzzzzzzzzzzzzzzz");

    let id = from_parts(0x3FFF_FFFF, &[0x80, 0x00, 0x7F, 0xFF, 0, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(id.as_str(), "zzzzzz000zzz000000000000");
}

#[test]
fn leading_digit_is_shifted_onto_a_letter() {
    // top 5 of the low 30 bits set to 7 encodes a raw leading '7'
    let id = from_parts(7 << 25, &[0; RANDOM_BYTES_LENGTH]);
    assert_eq!(id.as_bytes()[0], ALPHABET[17]);
    assert_eq!(id.as_str(), "h00000000000000000000000");

    for d in 0..10_u64 {
        let id = from_parts(d << 25, &[0; RANDOM_BYTES_LENGTH]);
        assert_eq!(id.as_bytes()[0], ALPHABET[10 + d as usize]);
    }
}

#[test]
fn leading_letter_is_left_alone() {
    for v in 10..32_u64 {
        let id = from_parts(v << 25, &[0; RANDOM_BYTES_LENGTH]);
        assert_eq!(id.as_bytes()[0], ALPHABET[v as usize]);
    }
}

#[test]
fn timestamp_keeps_only_low_thirty_bits() {
    let base = 7 << 25;
    let wrapped = base + (5 << 30);
    assert_eq!(
        from_parts(base, &[0; RANDOM_BYTES_LENGTH]),
        from_parts(wrapped, &[0; RANDOM_BYTES_LENGTH])
    );
}

#[test]
fn same_millisecond_shares_prefix_but_not_suffix() {
    let generator = Cuid2Generator::new(MockTime { millis: 42 }, OsRandom);
    let a = generator.try_next_id().unwrap();
    let b = generator.try_next_id().unwrap();

    assert_eq!(a.timestamp_segment(), b.timestamp_segment());
    assert_ne!(a.random_segment(), b.random_segment());
    assert_ne!(a, b);
}

#[test]
fn fixed_sources_are_deterministic() {
    let generator = Cuid2Generator::new(
        MockTime { millis: 42 },
        MockRand {
            bytes: [7; RANDOM_BYTES_LENGTH],
        },
    );
    assert_eq!(
        generator.try_next_id().unwrap(),
        generator.try_next_id().unwrap()
    );
}

#[test]
fn clock_failure_propagates_without_drawing_randomness() {
    let generator = Cuid2Generator::new(
        BrokenClock,
        CountingRand {
            calls: Cell::new(0),
        },
    );
    let err = generator.try_next_id().unwrap_err();
    assert!(err.is_clock_failure());
    assert_eq!(
        err,
        Error::ClockFailure {
            reason: "clock unavailable".into()
        }
    );
    assert_eq!(generator.rng().calls.get(), 0);
}

#[test]
fn randomness_failure_propagates() {
    let generator = Cuid2Generator::new(MockTime { millis: 42 }, BrokenRand);
    let err = generator.try_next_id().unwrap_err();
    assert!(err.is_randomness_failure());
}

#[test]
fn randomness_is_drawn_once_per_id() {
    let generator = Cuid2Generator::new(
        MockTime { millis: 0 },
        CountingRand {
            calls: Cell::new(0),
        },
    );
    for expected in 1..=3 {
        generator.try_next_id().unwrap();
        assert_eq!(generator.rng().calls.get(), expected);
    }
}

#[test]
fn ten_thousand_ids_are_unique() {
    let ids: HashSet<_> = (0..10_000).map(|_| generate().unwrap()).collect();
    assert_eq!(ids.len(), 10_000);
}

#[test]
fn concurrent_generation_is_unique() {
    const THREADS: usize = 5;
    const PER_THREAD: usize = 20;

    let ids = Mutex::new(HashSet::new());
    scope(|s| {
        for _ in 0..THREADS {
            s.spawn(|| {
                for _ in 0..PER_THREAD {
                    let id = generate().unwrap();
                    ids.lock().unwrap().insert(id);
                }
            });
        }
    });

    assert_eq!(ids.into_inner().unwrap().len(), THREADS * PER_THREAD);
}

#[test]
fn shared_generator_across_threads() {
    let generator = Cuid2Generator::new(WallClock, ThreadRandom);
    let ids: Vec<_> = scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                s.spawn(|| {
                    (0..250)
                        .map(|_| generator.try_next_id().unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect()
    });

    let unique: HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), 1000);
    assert!(ids.iter().all(|id| id.as_str().len() == CUID2_LENGTH));
}

#[test]
fn timestamp_segment_tracks_wall_clock() {
    let before = WallClock.current_millis().unwrap();
    let id = generate().unwrap();
    let after = WallClock.current_millis().unwrap();

    // a clock tick between the reads may land on either side, and the leading
    // character may have been remapped, so compare the last five characters
    let seg = &id.timestamp_segment()[1..];
    let matches = |ms: u64| crate::encode(ms, TIMESTAMP_LENGTH)[1..] == *seg;
    assert!((before..=after).any(matches), "{id}");
}
