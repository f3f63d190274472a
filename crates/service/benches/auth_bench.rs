use std::sync::Arc;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};

use service::auth::domain::App;
use service::auth::repository::mock::MockAuthRepository;
use service::auth::service::{AuthConfig, AuthService};

fn bench_login(c: &mut Criterion) {
    let repo = Arc::new(MockAuthRepository::default());
    repo.insert_app(App {
        id: 1,
        name: "bench".into(),
        secret: "bench-access".into(),
        refresh_secret: "bench-refresh".into(),
    });
    let cfg = AuthConfig {
        access_ttl: Duration::from_secs(900),
        refresh_ttl: Duration::from_secs(3600),
    };
    let svc = AuthService::new(repo.clone(), repo.clone(), repo, cfg);

    // pre-create the user outside of the benchmark using a tokio runtime
    let rt = tokio::runtime::Runtime::new().unwrap();
    let _ = rt.block_on(svc.register_new_user("bench@example.com", "Benchmark1"));

    c.bench_function("auth_login_verify", |b| {
        b.iter(|| {
            let _ = rt.block_on(svc.login("bench@example.com", "Benchmark1", 1)).unwrap();
        });
    });
}

criterion_group!(benches, bench_login);
criterion_main!(benches);
