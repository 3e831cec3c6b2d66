//! Four-function desktop calculator.

mod engine;

use leptos::ev::KeyboardEvent;
use leptos::*;
use system_ui::prelude::*;

use crate::engine::{BinaryOp, CalcAction, CalculatorState};

#[derive(Clone, Copy)]
struct CalcKeySpec {
    label: &'static str,
    class_name: &'static str,
    action: CalcAction,
}

const fn digit(label: &'static str, ch: char) -> CalcKeySpec {
    CalcKeySpec {
        label,
        class_name: "calc-key digit",
        action: CalcAction::Digit(ch),
    }
}

const fn operator(label: &'static str, op: BinaryOp) -> CalcKeySpec {
    CalcKeySpec {
        label,
        class_name: "calc-key operator",
        action: CalcAction::Binary(op),
    }
}

const CALC_KEYS: [CalcKeySpec; 16] = [
    digit("7", '7'),
    digit("8", '8'),
    digit("9", '9'),
    operator("\u{00F7}", BinaryOp::Divide),
    digit("4", '4'),
    digit("5", '5'),
    digit("6", '6'),
    operator("\u{00D7}", BinaryOp::Multiply),
    digit("1", '1'),
    digit("2", '2'),
    digit("3", '3'),
    operator("-", BinaryOp::Subtract),
    digit("0", '0'),
    CalcKeySpec {
        label: ".",
        class_name: "calc-key digit",
        action: CalcAction::Decimal,
    },
    CalcKeySpec {
        label: "=",
        class_name: "calc-key equals",
        action: CalcAction::Equals,
    },
    operator("+", BinaryOp::Add),
];

#[component]
/// Calculator window content.
pub fn CalculatorApp() -> impl IntoView {
    let calc = create_rw_signal(CalculatorState::default());

    let on_keydown = move |ev: KeyboardEvent| {
        if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
            return;
        }
        if let Some(action) = keyboard_action(&ev.key()) {
            ev.prevent_default();
            calc.update(|state| state.apply(action));
        }
    };

    view! {
        <div class="app-calculator" tabindex="0" on:keydown=on_keydown>
            <div class="calc-display" role="status" aria-live="polite">
                <span class="calc-pending">{move || calc.with(|state| state.pending_text())}</span>
                <span class="calc-value">{move || calc.with(|state| state.display_text().to_string())}</span>
            </div>
            <div class="calc-keypad" role="group" aria-label="Calculator keys">
                {CALC_KEYS
                    .into_iter()
                    .map(|spec| {
                        view! {
                            <Button
                                layout_class=spec.class_name
                                on_click=Callback::new(move |_| calc.update(|state| state.apply(spec.action)))
                            >
                                {spec.label}
                            </Button>
                        }
                    })
                    .collect_view()}
            </div>
            <Button
                layout_class="calc-clear"
                on_click=Callback::new(move |_| calc.update(|state| state.apply(CalcAction::Clear)))
            >
                "Clear"
            </Button>
        </div>
    }
}

fn keyboard_action(key: &str) -> Option<CalcAction> {
    match key {
        "0" | "1" | "2" | "3" | "4" | "5" | "6" | "7" | "8" | "9" => {
            key.chars().next().map(CalcAction::Digit)
        }
        "." | "," => Some(CalcAction::Decimal),
        "+" => Some(CalcAction::Binary(BinaryOp::Add)),
        "-" => Some(CalcAction::Binary(BinaryOp::Subtract)),
        "*" | "x" | "X" => Some(CalcAction::Binary(BinaryOp::Multiply)),
        "/" => Some(CalcAction::Binary(BinaryOp::Divide)),
        "=" | "Enter" => Some(CalcAction::Equals),
        "Escape" | "c" | "C" => Some(CalcAction::Clear),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn keyboard_maps_onto_calculator_actions() {
        assert_eq!(keyboard_action("7"), Some(CalcAction::Digit('7')));
        assert_eq!(keyboard_action("Enter"), Some(CalcAction::Equals));
        assert_eq!(keyboard_action("Escape"), Some(CalcAction::Clear));
        assert_eq!(
            keyboard_action("*"),
            Some(CalcAction::Binary(BinaryOp::Multiply))
        );
        assert_eq!(keyboard_action("Tab"), None);
    }

    #[test]
    fn keypad_layout_matches_the_classic_grid() {
        let labels: Vec<_> = CALC_KEYS.iter().map(|key| key.label).collect();
        assert_eq!(
            labels,
            vec![
                "7", "8", "9", "\u{00F7}", "4", "5", "6", "\u{00D7}", "1", "2", "3", "-", "0",
                ".", "=", "+",
            ]
        );
    }
}
