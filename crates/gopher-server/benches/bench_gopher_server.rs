use criterion::{black_box, criterion_group, criterion_main, Criterion};
use axum::body::Body;
use axum::http::Request;
use gopher_server::{app_with_state, state::AppState};
use tokio::runtime::Runtime;
use tower::ServiceExt;

fn word_request(word: &str) -> Request<Body> {
    let body = serde_json::json!({ "english-word": word });
    Request::builder()
        .method("POST")
        .uri("/word")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

fn bench_http_word(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    c.bench_function("http_word_1000", |b| {
        b.iter(|| {
            rt.block_on(async {
                let state = AppState::new();
                for i in 0..1000 {
                    let app = app_with_state(state.clone());
                    let resp = app.oneshot(word_request(&format!("word{}", i % 100))).await.unwrap();
                    black_box(resp.status());
                }
            })
        })
    });
}

fn bench_http_history(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let state = AppState::new();
    for i in 0..1000 {
        state.history.store(format!("word{i}"), format!("ordwogo{i}"));
    }
    c.bench_function("http_history_1000_entries", |b| {
        b.iter(|| {
            rt.block_on(async {
                let app = app_with_state(state.clone());
                let req = Request::builder().uri("/history").body(Body::empty()).unwrap();
                let resp = app.oneshot(req).await.unwrap();
                black_box(resp.status());
            })
        })
    });
}

criterion_group!(benches, bench_http_word, bench_http_history);
criterion_main!(benches);
