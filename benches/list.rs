use circular_list::List;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const SIZES: [usize; 3] = [100, 1_000, 10_000];

/// Benchmark indexed reads near the head, the middle and the back
fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("get");
    group.throughput(Throughput::Elements(1));

    for len in SIZES {
        let list = List::from_iter(0..len);
        for (name, index) in [("front", 1), ("middle", len / 2), ("back", len - 2)] {
            group.bench_with_input(BenchmarkId::new(name, len), &index, |b, &index| {
                b.iter(|| list.get(black_box(index)).ok().copied());
            });
        }
    }

    group.finish();
}

/// Benchmark range extraction, which splices instead of copying
fn bench_remove_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_range");
    group.throughput(Throughput::Elements(1));

    for len in SIZES {
        group.bench_with_input(BenchmarkId::new("cut_and_splice_back", len), &len, |b, &len| {
            let mut list = List::from_iter(0..len);
            let (from, to) = (len / 4, len / 4 * 3);
            b.iter(|| {
                // Cut out the middle half and put it back where it was
                let range = list.remove_range(black_box(from), black_box(to)).unwrap();
                list.splice_at(from, range).unwrap();
            });
        });
    }

    group.finish();
}

/// Benchmark cursor traversal and in-place editing
fn bench_cursor(c: &mut Criterion) {
    let mut group = c.benchmark_group("cursor");

    for len in SIZES {
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("traverse", len), &len, |b, &len| {
            let list = List::from_iter(0..len);
            b.iter(|| {
                let mut cursor = list.cursor_start();
                let mut sum = 0;
                while let Ok(element) = cursor.next() {
                    sum += element;
                }
                black_box(sum)
            });
        });

        group.bench_with_input(BenchmarkId::new("remove_insert", len), &len, |b, &len| {
            let mut list = List::from_iter(0..len);
            b.iter(|| {
                // Replace every even element by removing and re-inserting it
                let mut cursor = list.cursor_start_mut();
                while let Ok(&mut element) = cursor.next() {
                    if element % 2 == 0 {
                        let removed = cursor.remove().unwrap();
                        cursor.insert(black_box(removed));
                    }
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_get, bench_remove_range, bench_cursor);
criterion_main!(benches);
