use uniuri_core::{sample, STD_CHARS, STD_LEN};

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

pub fn bench_sample(c: &mut Criterion) {
	let sixty_four: Vec<u8> = [STD_CHARS, b"+/".as_slice()].concat();
	let sixty_five: Vec<u8> = [STD_CHARS, b"+/.".as_slice()].concat();
	let alphabets: [(&str, &[u8]); 4] = [
		("chars65", sixty_five.as_slice()),
		("chars64", sixty_four.as_slice()),
		("chars62", STD_CHARS),
		("chars3", b"abc".as_slice()),
	];

	let mut group = c.benchmark_group("sample");
	for len in [STD_LEN, 1024] {
		for (name, alphabet) in alphabets {
			group.bench_with_input(BenchmarkId::new(name, len), &len, |b, &len| {
				b.iter(|| sample(black_box(len), black_box(alphabet)))
			});
		}
	}
	group.finish();
}

criterion_group!(benches, bench_sample);
criterion_main!(benches);
