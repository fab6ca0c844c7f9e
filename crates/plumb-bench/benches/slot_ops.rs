//! Criterion micro-benchmarks for slot construction and destruction.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use plumb_core::LiveCount;
use plumb_slot::{Slot, SlotBlock};
use plumb_test_utils::{Counted, Triple};

fn bench_scalar_write(c: &mut Criterion) {
    c.bench_function("slot_write_i32", |b| {
        let mut slot = Slot::<i32>::empty();
        b.iter(|| {
            let value = slot.write(black_box(42));
            black_box(*value)
        });
    });
}

fn bench_triple_construct(c: &mut Criterion) {
    c.bench_function("slot_construct_triple", |b| {
        let mut slot = Slot::<Triple>::empty();
        b.iter(|| {
            let value = slot.construct(black_box((42, 'x', 123.89)));
            black_box(*value)
        });
    });
}

fn bench_counted_round_trip(c: &mut Criterion) {
    c.bench_function("slot_counted_round_trip", |b| {
        let count = LiveCount::new();
        let mut slot = Slot::<Counted<'_>>::empty();
        b.iter(|| {
            slot.construct((&count,));
            // SAFETY: constructed on the line above, destroyed exactly once.
            unsafe { slot.destroy() };
            black_box(count.get())
        });
    });
}

fn bench_block_fill_and_drain(c: &mut Criterion) {
    const SLOTS: usize = 64;
    c.bench_function("block_fill_and_drain_64", |b| {
        let count = LiveCount::new();
        b.iter(|| {
            let mut block = SlotBlock::<Counted<'_>>::new(SLOTS);
            for i in 0..SLOTS {
                block.slot_mut(i).construct((&count,));
            }
            for i in (0..SLOTS).rev() {
                // SAFETY: every slot was constructed above, destroyed once.
                unsafe { block.slot_mut(i).destroy() };
            }
            black_box(count.get())
        });
    });
}

criterion_group!(
    benches,
    bench_scalar_write,
    bench_triple_construct,
    bench_counted_round_trip,
    bench_block_fill_and_drain
);
criterion_main!(benches);
