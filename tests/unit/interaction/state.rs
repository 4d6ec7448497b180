use super::*;
use crate::foundation::core::Point;

fn secs(v: f64) -> Duration {
    Duration::from_secs_f64(v)
}

fn scrub() -> LinearScale {
    LinearScale::new([1800.0, 2009.0], [100.0, 518.0]).clamped()
}

fn sweeping() -> Interaction {
    Interaction::sweep(Duration::ZERO, secs(30.0))
}

#[test]
fn starts_sweeping_with_a_live_token() {
    let state = sweeping();
    assert_eq!(state.mode(), ChartMode::Sweeping);
    assert!(!state.token().unwrap().is_cancelled());
}

#[test]
fn sweep_moves_year_linearly() {
    let mut state = sweeping();
    let years = YearSpan::default();
    assert_eq!(state.tick(secs(0.0), years).year, Some(1800.0));
    let mid = state.tick(secs(15.0), years).year.unwrap();
    assert!((mid - 1904.5).abs() < 1e-9);
    assert_eq!(state.mode(), ChartMode::Sweeping);
}

#[test]
fn completion_lands_on_last_year_and_goes_interactive() {
    let mut state = sweeping();
    let token = state.token().unwrap();
    let update = state.tick(secs(30.0), YearSpan::default());
    assert_eq!(update.year, Some(2009.0));
    assert_eq!(state.mode(), ChartMode::Interactive);
    assert!(token.is_cancelled());
    assert!(state.token().is_none());
}

#[test]
fn ticks_after_completion_are_ignored() {
    let mut state = sweeping();
    state.tick(secs(31.0), YearSpan::default());
    assert!(state.tick(secs(40.0), YearSpan::default()).is_empty());
}

#[test]
fn enter_during_sweep_cancels_and_activates_label() {
    let mut state = sweeping();
    let token = state.token().unwrap();
    state.tick(secs(3.0), YearSpan::default());

    let update = state.pointer(PointerEvent::Enter(Point::new(200.0, 0.0)), &scrub());
    assert_eq!(update.label_active, Some(true));
    assert_eq!(update.year, None);
    assert_eq!(state.mode(), ChartMode::Interactive);
    assert!(token.is_cancelled());
    assert!(state.tick(secs(10.0), YearSpan::default()).is_empty());
}

#[test]
fn moves_during_sweep_are_ignored() {
    let mut state = sweeping();
    let s = scrub();
    assert!(state.pointer(PointerEvent::Move(Point::new(300.0, 0.0)), &s).is_empty());
    assert!(state.pointer(PointerEvent::TouchMove(Point::new(300.0, 0.0)), &s).is_empty());
    assert!(state.pointer(PointerEvent::Leave, &s).is_empty());
    assert_eq!(state.mode(), ChartMode::Sweeping);
}

#[test]
fn interactive_scrub_maps_and_clamps() {
    let mut state = Interaction::Interactive;
    let s = scrub();
    let year = |state: &mut Interaction, x: f64| {
        state
            .pointer(PointerEvent::Move(Point::new(x, 0.0)), &s)
            .year
            .unwrap()
    };
    assert!((year(&mut state, 100.0) - 1800.0).abs() < 1e-9);
    assert!((year(&mut state, 518.0) - 2009.0).abs() < 1e-9);
    assert!((year(&mut state, -50.0) - 1800.0).abs() < 1e-9);
    assert!((year(&mut state, 9_999.0) - 2009.0).abs() < 1e-9);

    let touch = state.pointer(PointerEvent::TouchMove(Point::new(309.0, 0.0)), &s);
    assert!((touch.year.unwrap() - 1904.5).abs() < 1e-9);
}

#[test]
fn hover_toggles_label() {
    let mut state = Interaction::Interactive;
    let s = scrub();
    let enter = state.pointer(PointerEvent::Enter(Point::ZERO), &s);
    assert_eq!(enter.label_active, Some(true));
    let leave = state.pointer(PointerEvent::Leave, &s);
    assert_eq!(leave.label_active, Some(false));
    assert_eq!(state.mode(), ChartMode::Interactive);
}

#[test]
fn external_cancel_stops_the_sweep() {
    let mut state = sweeping();
    state.cancel();
    assert!(state.tick(secs(5.0), YearSpan::default()).is_empty());
    assert_eq!(state.mode(), ChartMode::Interactive);
}
