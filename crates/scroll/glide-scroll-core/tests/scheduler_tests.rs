use glide_scroll_core::{
    ManualHost, ScrollConfig, ScrollError, ScrollScheduler, ScrollState, SharedOffset, TickOutcome,
    TickToken,
};

fn init_tracing() {
    let default_filter = "glide_scroll_core=debug";
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.to_string());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

fn scheduler() -> ScrollScheduler<ManualHost, SharedOffset> {
    ScrollScheduler::new(ManualHost::new(), ScrollConfig::default()).expect("default config")
}

fn approx(a: f64, b: f64, eps: f64) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

#[test]
fn starts_idle() {
    let sched = scheduler();
    assert_eq!(sched.state(), ScrollState::Idle);
    assert!(sched.animation().is_none());
    assert_eq!(sched.host().pending_ticks(), 0);
    assert_eq!(sched.host().wheel_listeners(), 0);
}

#[test]
fn cancel_when_idle_is_noop() {
    init_tracing();
    let mut sched = scheduler();
    assert!(!sched.cancel());
    assert!(!sched.cancel());
    assert!(!sched.on_wheel());
    assert_eq!(sched.state(), ScrollState::Idle);
    assert_eq!(sched.host().cancelled_total(), 0);
}

#[test]
fn scroll_to_top_ends_at_zero_and_idle() {
    init_tracing();
    let mut sched = scheduler();
    let body = SharedOffset::new(800.0);
    sched.scroll_to_top(body.clone());
    assert_eq!(sched.state(), ScrollState::Running);
    assert_eq!(sched.animation().map(|a| a.duration_ms()), Some(1500.0));

    // First step ran synchronously; 149 more ticks remain.
    let fired = sched.run_until_idle();
    assert_eq!(fired, 149);
    assert_eq!(body.offset(), 0.0);
    assert_eq!(sched.state(), ScrollState::Idle);
    assert_eq!(sched.host().pending_ticks(), 0);
    assert_eq!(sched.host().wheel_listeners(), 0);
    approx(sched.host().now_ms(), 1490.0, 0.0);
}

#[test]
fn first_step_is_synchronous() {
    let mut sched = scheduler();
    let el = SharedOffset::new(0.0);
    sched.scroll_to(el.clone(), 100.0, 1000.0).unwrap();
    assert_eq!(el.writes(), 1);
    assert_eq!(sched.animation().unwrap().elapsed_ms(), 10.0);
    assert_eq!(sched.host().pending_ticks(), 1);
    assert_eq!(sched.host().wheel_listeners(), 1);
}

#[test]
fn wheel_mid_animation_halts_updates() {
    init_tracing();
    let mut sched = scheduler();
    let el = SharedOffset::new(0.0);
    sched.scroll_to(el.clone(), 100.0, 1000.0).unwrap();
    sched.advance_by(290.0);
    assert_eq!(sched.animation().unwrap().elapsed_ms(), 300.0);
    let frozen = el.offset();
    let writes = el.writes();
    approx(frozen, 18.0, 1e-9);

    assert!(sched.on_wheel());
    assert_eq!(sched.state(), ScrollState::Idle);
    assert_eq!(sched.host().pending_ticks(), 0);
    assert_eq!(sched.host().wheel_listeners(), 0);

    assert_eq!(sched.advance_by(5_000.0), 0);
    assert_eq!(el.offset(), frozen);
    assert_eq!(el.writes(), writes);
}

#[test]
fn second_request_leaves_exactly_one_timer() {
    let mut sched = scheduler();
    let a = SharedOffset::new(0.0);
    let b = SharedOffset::new(500.0);
    sched.scroll_to(a.clone(), 1000.0, 1000.0).unwrap();
    sched.advance_by(100.0);
    let a_offset = a.offset();
    let first = sched.active_token().unwrap();

    sched.scroll_to(b.clone(), 0.0, 400.0).unwrap();
    let second = sched.active_token().unwrap();
    assert_ne!(first, second);
    assert_eq!(sched.host().pending_ticks(), 1);
    assert_eq!(sched.host().wheel_listeners(), 1);
    assert_eq!(sched.host().cancelled_total(), 1);

    sched.run_until_idle();
    // The superseded element keeps its last-ticked offset.
    assert_eq!(a.offset(), a_offset);
    assert_eq!(b.offset(), 0.0);
    assert_eq!(sched.state(), ScrollState::Idle);
}

#[test]
fn explicit_cancel_does_not_snap() {
    let mut sched = scheduler();
    let el = SharedOffset::new(0.0);
    sched.scroll_to(el.clone(), 1000.0, 1000.0).unwrap();
    sched.advance_by(200.0);
    let before = el.offset();
    assert!(before > 0.0 && before < 1000.0);
    assert!(sched.cancel());
    assert_eq!(el.offset(), before);
    assert_eq!(sched.state(), ScrollState::Idle);
}

#[test]
fn stale_tokens_are_ignored() {
    let mut sched = scheduler();
    let el = SharedOffset::new(0.0);
    assert_eq!(sched.on_tick(TickToken(0)), TickOutcome::Stale);

    sched.scroll_to(el.clone(), 100.0, 1000.0).unwrap();
    let old = sched.active_token().unwrap();
    sched.scroll_to(el.clone(), 200.0, 1000.0).unwrap();
    let writes = el.writes();
    let elapsed = sched.animation().unwrap().elapsed_ms();

    assert_eq!(sched.on_tick(old), TickOutcome::Stale);
    assert_eq!(el.writes(), writes);
    assert_eq!(sched.animation().unwrap().elapsed_ms(), elapsed);

    let current = sched.active_token().unwrap();
    assert_eq!(sched.on_tick(current), TickOutcome::Continued);
}

#[test]
fn short_duration_completes_on_first_step() {
    let mut sched = scheduler();
    let el = SharedOffset::new(300.0);
    sched.scroll_to(el.clone(), 0.0, 5.0).unwrap();
    assert_eq!(el.offset(), 0.0);
    assert_eq!(sched.state(), ScrollState::Idle);
    assert_eq!(sched.host().pending_ticks(), 0);
    assert_eq!(sched.host().wheel_listeners(), 0);
}

#[test]
fn invalid_request_leaves_running_animation_alone() {
    let mut sched = scheduler();
    let el = SharedOffset::new(0.0);
    sched.scroll_to(el.clone(), 100.0, 1000.0).unwrap();
    let token = sched.active_token();

    assert_eq!(
        sched.scroll_to(el.clone(), 0.0, 0.0),
        Err(ScrollError::InvalidDuration { duration: 0.0 })
    );
    assert!(matches!(
        sched.scroll_to(el.clone(), f64::NAN, 100.0),
        Err(ScrollError::InvalidOffset { .. })
    ));
    assert!(sched.scroll_to(el.clone(), 0.0, f64::INFINITY).is_err());

    assert_eq!(sched.active_token(), token);
    assert_eq!(sched.state(), ScrollState::Running);
    assert_eq!(sched.host().pending_ticks(), 1);
}

#[test]
fn rejects_invalid_config() {
    let cfg = ScrollConfig {
        tick_increment_ms: -1.0,
        ..ScrollConfig::default()
    };
    let res: Result<ScrollScheduler<ManualHost, SharedOffset>, _> =
        ScrollScheduler::new(ManualHost::new(), cfg);
    assert!(matches!(res, Err(ScrollError::InvalidConfig { .. })));
}

#[test]
fn custom_tick_increment() {
    let cfg = ScrollConfig {
        tick_increment_ms: 16.0,
        ..ScrollConfig::default()
    };
    let mut sched: ScrollScheduler<ManualHost, SharedOffset> =
        ScrollScheduler::new(ManualHost::new(), cfg).unwrap();
    let el = SharedOffset::new(0.0);
    sched.scroll_to(el.clone(), 480.0, 480.0).unwrap();
    sched.run_until_idle();
    // 480 / 16 = 30 steps.
    assert_eq!(el.writes(), 30);
    assert_eq!(el.offset(), 480.0);
}

#[test]
fn detached_target_finishes_quietly() {
    let mut sched = scheduler();
    let el = SharedOffset::new(100.0);
    sched.scroll_to(el.clone(), 0.0, 200.0).unwrap();
    sched.advance_by(50.0);
    el.detach();
    let frozen = el.offset();
    sched.run_until_idle();
    assert_eq!(el.offset(), frozen);
    assert_eq!(sched.state(), ScrollState::Idle);
}

#[test]
fn scheduler_is_reusable_after_completion() {
    let mut sched = scheduler();
    let el = SharedOffset::new(0.0);
    for target in [250.0, 0.0, 1234.0] {
        sched.scroll_to(el.clone(), target, 300.0).unwrap();
        sched.run_until_idle();
        assert_eq!(sched.state(), ScrollState::Idle);
        approx(el.offset(), target, 1e-9);
    }
    assert_eq!(sched.host().wheel_listeners(), 0);
}
