//! Pure Yew view components for the countdown timer UI.
//!
//! This module contains stateless components that render based on props;
//! all timer behavior lives in the engine, never here.

use countdown_timer::{format_secs_to_minsec, RunState};
use yew::prelude::*;

use crate::config::DURATION_PLACEHOLDER;

/// Numeric text entry for the duration, confirmed by the "Set Duration"
/// button or the Enter key.
#[derive(Properties, PartialEq)]
pub struct DurationInputProps {
    /// Raw text currently in the field (tracked by the parent).
    pub text: String,
    pub oninput: Callback<InputEvent>,
    pub onkeydown: Callback<KeyboardEvent>,
    pub onset: Callback<MouseEvent>,
}

#[function_component(DurationInput)]
pub fn duration_input(props: &DurationInputProps) -> Html {
    html! {
        <div class="form-group">
            <input type="number"
                id="duration_input"
                min="1"
                placeholder={DURATION_PLACEHOLDER}
                value={props.text.clone()}
                oninput={props.oninput.clone()}
                onkeydown={props.onkeydown.clone()}
            />
            <button class="btn-secondary" onclick={props.onset.clone()}>
                { "Set Duration" }
            </button>
        </div>
    }
}

/// Read-only MM:SS display of the remaining time.
#[derive(Properties, PartialEq)]
pub struct TimeDisplayProps {
    pub remaining: u32,
}

#[function_component(TimeDisplay)]
pub fn time_display(props: &TimeDisplayProps) -> Html {
    let formatted = format_secs_to_minsec(props.remaining);
    html! {
        <div class="time-display" role="timer" aria-live="polite">
            { formatted }
        </div>
    }
}

/// Start/Resume, Pause, and Reset buttons.
///
/// The first button reads "Resume" when the countdown is paused, "Start"
/// otherwise.
#[derive(Properties, PartialEq)]
pub struct ControlButtonsProps {
    pub run_state: RunState,
    pub onstart: Callback<MouseEvent>,
    pub onpause: Callback<MouseEvent>,
    pub onreset: Callback<MouseEvent>,
}

#[function_component(ControlButtons)]
pub fn control_buttons(props: &ControlButtonsProps) -> Html {
    let start_label = if props.run_state == RunState::Paused {
        "Resume"
    } else {
        "Start"
    };
    html! {
        <div class="controls">
            <button class="btn-primary" onclick={props.onstart.clone()}>
                { start_label }
            </button>
            <button class="btn-primary" onclick={props.onpause.clone()}>
                { "Pause" }
            </button>
            <button class="btn-danger" onclick={props.onreset.clone()}>
                { "Reset" }
            </button>
        </div>
    }
}
