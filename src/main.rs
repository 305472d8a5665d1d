//! Main module for the countdown timer application using Yew.
//! Wires UI components, state hooks, and the tick-interval lifecycle.

use countdown_timer::{defaults::TICK_INTERVAL_MS, CountdownEngine};
use gloo_timers::callback::Interval;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

mod components;
mod config;

use components::{ControlButtons, DurationInput, TimeDisplay};
use config::APP_TITLE;

/// The engine shared between render code, event handlers, and the interval
/// callback. The browser interval handle lives inside the engine itself.
type SharedEngine = Rc<RefCell<CountdownEngine<Interval>>>;

// ──────────────────────────────────────────────────────────────────────────────
// Helper functions

/// Bump the render version so the component re-renders after an engine
/// mutation. The engine lives outside Yew state, so mutations are invisible
/// to Yew until this counter changes.
fn schedule_render(render_version: &UseStateHandle<usize>) {
    render_version.set(render_version.wrapping_add(1));
}

/// Spawn the once-per-second tick source for a freshly started countdown.
///
/// The returned `Interval` is owned by the engine; dropping it (on pause,
/// reset, completion, a new duration, or unmount) clears the browser
/// interval. The callback itself only forwards the tick and re-renders —
/// when the countdown completes, `tick()` drops this same interval from
/// within its own callback, which `gloo_timers` supports.
fn spawn_tick_interval(engine: SharedEngine, render_version: UseStateHandle<usize>) -> Interval {
    Interval::new(TICK_INTERVAL_MS, move || {
        engine.borrow_mut().tick();
        schedule_render(&render_version);
    })
}

// ──────────────────────────────────────────────────────────────────────────────

/// Primary application component wiring state, effects, and UI elements.
#[function_component(App)]
fn app() -> Html {
    // The engine outlives individual renders; a version counter stands in
    // for reactive state.
    let engine: SharedEngine = use_mut_ref(CountdownEngine::new);
    let render_version = use_state(|| 0usize);
    // Raw text of the duration field; the engine sees it only on commit.
    let duration_text = use_state(String::new);

    // Release the tick handle when the component unmounts so a stale
    // interval can never fire against defunct state.
    {
        let engine = engine.clone();
        use_effect_with((), move |_| {
            move || {
                engine.borrow_mut().shutdown();
            }
        });
    }

    let duration_oninput = {
        let duration_text = duration_text.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            duration_text.set(input.value());
        })
    };

    // Commit the field text to the engine. Invalid input is silently
    // rejected; the field keeps whatever the user typed.
    let commit_duration = {
        let engine = engine.clone();
        let duration_text = duration_text.clone();
        let render_version = render_version.clone();
        Callback::from(move |_: ()| {
            engine.borrow_mut().set_duration(&duration_text);
            schedule_render(&render_version);
        })
    };

    let duration_onset = commit_duration.reform(|_: MouseEvent| ());

    let duration_onkeydown = {
        let commit_duration = commit_duration.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                commit_duration.emit(());
            }
        })
    };

    let onstart = {
        let engine = engine.clone();
        let render_version = render_version.clone();
        Callback::from(move |_: MouseEvent| {
            let engine_for_tick = engine.clone();
            let version_for_tick = render_version.clone();
            engine
                .borrow_mut()
                .start(move || spawn_tick_interval(engine_for_tick, version_for_tick));
            schedule_render(&render_version);
        })
    };

    let onpause = {
        let engine = engine.clone();
        let render_version = render_version.clone();
        Callback::from(move |_: MouseEvent| {
            engine.borrow_mut().pause();
            schedule_render(&render_version);
        })
    };

    let onreset = {
        let engine = engine.clone();
        let render_version = render_version.clone();
        Callback::from(move |_: MouseEvent| {
            engine.borrow_mut().reset();
            schedule_render(&render_version);
        })
    };

    // Ensure re-render on engine updates by reading render_version
    let _ = *render_version;
    let (remaining, run_state) = {
        let engine = engine.borrow();
        (engine.remaining(), engine.run_state())
    };

    html! {
        <div class="container">
            <h1>{ APP_TITLE }</h1>
            <div class="timer-card">
                <DurationInput
                    text={(*duration_text).clone()}
                    oninput={duration_oninput}
                    onkeydown={duration_onkeydown}
                    onset={duration_onset}
                />
                <TimeDisplay remaining={remaining} />
                <ControlButtons
                    run_state={run_state}
                    onstart={onstart}
                    onpause={onpause}
                    onreset={onreset}
                />
            </div>
        </div>
    }
}

/// Entry point: installs the panic hook and mounts the App component.
fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
