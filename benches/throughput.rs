use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use criterion::{criterion_group, criterion_main, Criterion};
use genruler::{parse_rule, Context, Rule, Value};

fn build_shared_rule() -> (Arc<Rule>, Context) {
    let n = 20;
    let mut clauses = Vec::with_capacity(n);
    let mut ctx = Value::Null;

    for i in 0..n {
        clauses.push(format!("(condition.ge (basic.field \"f{i}\") 1)"));
        ctx = ctx.set(&format!("f{i}"), 10_i64);
    }

    let rule = Arc::new(parse_rule(&format!("(boolean.and {})", clauses.join(" "))).unwrap());
    (rule, ctx)
}

fn bench_throughput(c: &mut Criterion) {
    let thread_counts = [1, 2, 4, 8];

    let mut group = c.benchmark_group("throughput");
    group.measurement_time(Duration::from_secs(5));

    for &threads in &thread_counts {
        let (rule, ctx) = build_shared_rule();

        group.bench_function(&format!("{threads}_threads"), |b| {
            b.iter_custom(|iters| {
                let per_thread = iters / threads as u64;
                let handles: Vec<_> = (0..threads)
                    .map(|_| {
                        let r = Arc::clone(&rule);
                        let c = ctx.clone();
                        thread::spawn(move || {
                            let start = Instant::now();
                            for _ in 0..per_thread {
                                let _ = r.apply(&c);
                            }
                            start.elapsed()
                        })
                    })
                    .collect();

                handles
                    .into_iter()
                    .map(|h| h.join().unwrap())
                    .max()
                    .unwrap_or(Duration::ZERO)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_throughput);
criterion_main!(benches);
