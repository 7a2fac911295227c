// Criterion benchmarks for StudyMatch Engine

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use studymatch_engine::core::{jaccard, time_overlap, Matcher};
use studymatch_engine::models::{AvailabilitySlot, DayOfWeek, GroupMode, GroupStatus, StudyGroup, UserProfile};

const TOPICS: [&str; 6] = ["python", "rust", "algorithms", "math", "english", "databases"];

fn create_group(id: usize) -> StudyGroup {
    StudyGroup {
        id: id as i64,
        owner_id: Some((id % 50) as i64),
        title: format!("Group {}", id),
        desc: None,
        topic: TOPICS[id % TOPICS.len()].to_string(),
        mode: match id % 3 {
            0 => GroupMode::Online,
            1 => GroupMode::Offline,
            _ => GroupMode::Hybrid,
        },
        location: None,
        days_of_week: vec![DayOfWeek::ALL[id % 7], DayOfWeek::ALL[(id + 2) % 7]],
        start_time: None,
        end_time: None,
        capacity: Some(4),
        status: if id % 10 == 0 { GroupStatus::Closed } else { GroupStatus::Open },
    }
}

fn create_profile() -> UserProfile {
    UserProfile {
        user_id: 1,
        interests: vec!["python".to_string(), "Algorithms".to_string()],
        availability: [DayOfWeek::Mon, DayOfWeek::Wed, DayOfWeek::Sat]
            .into_iter()
            .map(AvailabilitySlot::on)
            .collect(),
        level: Some("INTERMEDIATE".to_string()),
        is_online_only: true,
        bio: None,
        location: None,
        timezone: None,
        language: None,
        goal: None,
        desired_duration_weeks: None,
    }
}

fn bench_jaccard(c: &mut Criterion) {
    let interests = vec!["python".to_string(), "Algorithms".to_string(), "math".to_string()];
    c.bench_function("jaccard", |b| {
        b.iter(|| jaccard(black_box(&interests), black_box(["algorithms"])));
    });
}

fn bench_time_overlap(c: &mut Criterion) {
    let availability: Vec<AvailabilitySlot> = DayOfWeek::ALL.into_iter().map(AvailabilitySlot::on).collect();
    let group_days = [DayOfWeek::Mon, DayOfWeek::Thu, DayOfWeek::Sun];
    c.bench_function("time_overlap", |b| {
        b.iter(|| time_overlap(black_box(&availability), black_box(&group_days)));
    });
}

fn bench_recommend(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let profile = create_profile();

    let mut group = c.benchmark_group("recommend");

    for size in [100, 1_000, 10_000] {
        let candidates: Vec<StudyGroup> = (0..size).map(create_group).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &candidates, |b, candidates| {
            b.iter(|| matcher.recommend(Some(black_box(&profile)), black_box(candidates.clone())));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_jaccard, bench_time_overlap, bench_recommend);
criterion_main!(benches);
